//! Status conditions for managed resources.
//!
//! A [`ConditionSet`] is the list of [`Condition`]s embedded in a resource's status.  It always
//! keeps the distinguished `Ready` condition first, followed by the remaining conditions in
//! lexical order by type, and never holds two conditions of the same type.  Reconcilers build
//! individual conditions with [`true_condition`], [`false_condition`] and [`unknown_condition`]
//! (or the `mark_*` shorthands on the set), and can collapse a whole set into one representative
//! condition with [`ConditionSet::mirror`] when a dependent resource needs to summarize it.
mod constants;
mod funcs;
mod k8s;
mod set;
mod types;

pub use constants::*;
pub use funcs::*;
pub use set::*;
pub use types::*;

use crate::errors::*;

err_impl! {ConditionError,
    #[error("invalid condition status: {0}")]
    InvalidStatus(String),

    #[error("invalid condition severity: {0}")]
    InvalidSeverity(String),

    #[error("condition with status {0} has an empty type")]
    MissingType(String),
}

#[cfg(test)]
mod tests;
