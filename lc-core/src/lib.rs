pub mod condition;
pub mod errors;
pub mod logging;

pub mod prelude {
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

    pub use crate::condition::{
        Condition,
        ConditionSet,
        ConditionType,
        Reason,
        Severity,
        Status,
    };
    pub use crate::errors::EmptyResult;
}
