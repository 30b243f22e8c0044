use clockabilly::{
    DateTime,
    Utc,
};
use kube::Resource;

use super::*;
use crate::prelude::metav1;

// The upstream Condition requires a non-empty reason, so conditions without one get the
// reason their constructor would normally have used
fn default_reason(status: Status) -> Reason {
    match status {
        Status::True => READY_REASON,
        Status::False => ERROR_REASON,
        Status::Unknown => REQUESTED_REASON,
    }
}

impl Condition {
    /// Converts into the standard `meta/v1` Condition.  Severity has no upstream counterpart and
    /// is dropped; an unstamped condition gets the epoch as its transition time.
    pub fn to_k8s(&self, observed_generation: Option<i64>) -> metav1::Condition {
        let reason = if self.reason.is_empty() { default_reason(self.status) } else { self.reason.clone() };
        metav1::Condition {
            type_: self.type_.to_string(),
            status: self.status.to_string(),
            reason: reason.to_string(),
            message: self.message.clone(),
            last_transition_time: self
                .last_transition_time
                .clone()
                .unwrap_or(metav1::Time(DateTime::<Utc>::UNIX_EPOCH)),
            observed_generation,
        }
    }
}

// Upstream conditions carry no severity, so any False condition coming in is treated as an
// error; an operator that knows better can lower it after conversion.
impl TryFrom<&metav1::Condition> for Condition {
    type Error = anyhow::Error;

    fn try_from(c: &metav1::Condition) -> anyhow::Result<Self> {
        let status: Status = c.status.parse()?;
        if c.type_.is_empty() {
            return Err(ConditionError::missing_type(status.as_str()));
        }

        let severity = match status {
            Status::False => Severity::Error,
            _ => Severity::None,
        };
        Ok(Condition {
            type_: c.type_.as_str().into(),
            status,
            severity,
            reason: c.reason.as_str().into(),
            message: c.message.clone(),
            last_transition_time: Some(c.last_transition_time.clone()),
        })
    }
}

impl ConditionSet {
    /// Converts every condition, stamping each with the owner's current generation.
    pub fn to_k8s_conditions<K: Resource>(&self, owner: &K) -> Vec<metav1::Condition> {
        let generation = owner.meta().generation;
        self.iter().map(|c| c.to_k8s(generation)).collect()
    }

    /// Builds a set from upstream conditions, applying the usual merge rules.  Fails on the first
    /// condition with an unparseable status or an empty type.
    pub fn try_from_k8s<'a>(conditions: impl IntoIterator<Item = &'a metav1::Condition>) -> anyhow::Result<ConditionSet> {
        conditions.into_iter().map(Condition::try_from).collect()
    }
}
