pub use anyhow::{
    anyhow,
    bail,
    ensure,
};
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

/// Declares a typed error enum plus one snake_case constructor per variant.
///
/// Each variant carries a single payload; its constructor accepts anything convertible into
/// that payload and returns the variant boxed in an [`anyhow::Error`], so callers can `?` it
/// and tests can still `downcast_ref` back to the enum.
///
/// ```ignore
/// err_impl! {ParseError,
///     #[error("bad token: {0}")]
///     BadToken(String),
/// }
///
/// let err = ParseError::bad_token("}");
/// ```
#[macro_export]
macro_rules! err_impl {
    ($name:ident, $(#[$msg:meta] $variant:ident($payload:ty),)+) => {
        #[derive(Debug, Eq, PartialEq, $crate::errors::Error)]
        pub enum $name {
            $(#[$msg] $variant($payload),)+
        }

        $crate::errors::paste! {
            impl $name {
                $(
                    pub(crate) fn [<$variant:snake>](payload: impl Into<$payload>) -> anyhow::Error {
                        anyhow::Error::new($name::$variant(payload.into()))
                    }
                )+
            }
        }
    };
}

pub use err_impl;
