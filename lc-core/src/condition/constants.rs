use super::{
    ConditionType,
    Reason,
};

// Condition types shared by the OpenStack service operators
pub const READY_CONDITION: ConditionType = ConditionType::from_static("Ready");
pub const INPUT_READY_CONDITION: ConditionType = ConditionType::from_static("InputReady");
pub const SERVICE_CONFIG_READY_CONDITION: ConditionType = ConditionType::from_static("ServiceConfigReady");
pub const DB_READY_CONDITION: ConditionType = ConditionType::from_static("DBReady");
pub const DB_SYNC_READY_CONDITION: ConditionType = ConditionType::from_static("DBSyncReady");
pub const EXPOSE_SERVICE_READY_CONDITION: ConditionType = ConditionType::from_static("ExposeServiceReady");
pub const BOOTSTRAP_READY_CONDITION: ConditionType = ConditionType::from_static("BootstrapReady");
pub const DEPLOYMENT_READY_CONDITION: ConditionType = ConditionType::from_static("DeploymentReady");
pub const SERVICE_ACCOUNT_READY_CONDITION: ConditionType = ConditionType::from_static("ServiceAccountReady");
pub const ROLE_READY_CONDITION: ConditionType = ConditionType::from_static("RoleReady");
pub const ROLE_BINDING_READY_CONDITION: ConditionType = ConditionType::from_static("RoleBindingReady");
pub const RABBITMQ_TRANSPORT_URL_READY_CONDITION: ConditionType =
    ConditionType::from_static("RabbitMqTransportURLReady");
pub const KEYSTONE_SERVICE_READY_CONDITION: ConditionType = ConditionType::from_static("KeystoneServiceReady");
pub const KEYSTONE_ENDPOINT_READY_CONDITION: ConditionType = ConditionType::from_static("KeystoneEndpointReady");
pub const NETWORK_ATTACHMENTS_READY_CONDITION: ConditionType =
    ConditionType::from_static("NetworkAttachmentsReady");
pub const CRON_JOB_READY_CONDITION: ConditionType = ConditionType::from_static("CronJobReady");
pub const TLS_INPUT_READY_CONDITION: ConditionType = ConditionType::from_static("TLSInputReady");

// Reasons
pub const REQUESTED_REASON: Reason = Reason::from_static("Requested");
pub const READY_REASON: Reason = Reason::from_static("Ready");
pub const CREATION_FAILED_REASON: Reason = Reason::from_static("CreationFailed");
pub const ERROR_REASON: Reason = Reason::from_static("Error");
pub const INIT_REASON: Reason = Reason::from_static("Init");
pub const JOB_BACKOFF_LIMIT_EXCEEDED_REASON: Reason = Reason::from_static("BackoffLimitExceeded");

// A False condition carrying one of these reasons won't clear up by itself on a later pass
pub const HARD_ERROR_REASONS: [Reason; 2] = [ERROR_REASON, JOB_BACKOFF_LIMIT_EXCEEDED_REASON];

// Messages.  The *_ERROR_MESSAGE values are prefixes; callers append the underlying error,
// e.g. format_args!("{DB_READY_ERROR_MESSAGE}: {err}")
pub const READY_INIT_MESSAGE: &str = "Service setup started";
pub const READY_MESSAGE: &str = "Setup complete";

pub const INPUT_READY_INIT_MESSAGE: &str = "Input data not checked";
pub const INPUT_READY_MESSAGE: &str = "Input data complete";
pub const INPUT_READY_WAITING_MESSAGE: &str = "Input data resources missing";
pub const INPUT_READY_ERROR_MESSAGE: &str = "Input data error occurred";

pub const SERVICE_CONFIG_READY_INIT_MESSAGE: &str = "Service config create not started";
pub const SERVICE_CONFIG_READY_MESSAGE: &str = "Service config create completed";
pub const SERVICE_CONFIG_READY_ERROR_MESSAGE: &str = "Service config create error occurred";

pub const DB_READY_INIT_MESSAGE: &str = "DB create not started";
pub const DB_READY_RUNNING_MESSAGE: &str = "DB create in progress";
pub const DB_READY_MESSAGE: &str = "DB create completed";
pub const DB_READY_ERROR_MESSAGE: &str = "DB error occurred";

pub const DB_SYNC_READY_INIT_MESSAGE: &str = "DBsync not started";
pub const DB_SYNC_READY_RUNNING_MESSAGE: &str = "DBsync job still running";
pub const DB_SYNC_READY_MESSAGE: &str = "DBsync completed";
pub const DB_SYNC_READY_ERROR_MESSAGE: &str = "DBsync job error occurred";

pub const EXPOSE_SERVICE_READY_INIT_MESSAGE: &str = "Exposing service not started";
pub const EXPOSE_SERVICE_READY_RUNNING_MESSAGE: &str = "Exposing service in progress";
pub const EXPOSE_SERVICE_READY_MESSAGE: &str = "Exposing service completed";
pub const EXPOSE_SERVICE_READY_ERROR_MESSAGE: &str = "Exposing service error occurred";

pub const BOOTSTRAP_READY_INIT_MESSAGE: &str = "Bootstrap not started";
pub const BOOTSTRAP_READY_RUNNING_MESSAGE: &str = "Bootstrap in progress";
pub const BOOTSTRAP_READY_MESSAGE: &str = "Bootstrap completed";
pub const BOOTSTRAP_READY_ERROR_MESSAGE: &str = "Bootstrap error occurred";

pub const DEPLOYMENT_READY_INIT_MESSAGE: &str = "Deployment not started";
pub const DEPLOYMENT_READY_RUNNING_MESSAGE: &str = "Deployment in progress";
pub const DEPLOYMENT_READY_MESSAGE: &str = "Deployment completed";
pub const DEPLOYMENT_READY_ERROR_MESSAGE: &str = "Deployment error occurred";

pub const SERVICE_ACCOUNT_READY_INIT_MESSAGE: &str = "ServiceAccount create not started";
pub const SERVICE_ACCOUNT_READY_MESSAGE: &str = "ServiceAccount created";
pub const SERVICE_ACCOUNT_READY_ERROR_MESSAGE: &str = "ServiceAccount error occurred";

pub const ROLE_READY_INIT_MESSAGE: &str = "Role create not started";
pub const ROLE_READY_MESSAGE: &str = "Role created";
pub const ROLE_READY_ERROR_MESSAGE: &str = "Role error occurred";

pub const ROLE_BINDING_READY_INIT_MESSAGE: &str = "RoleBinding create not started";
pub const ROLE_BINDING_READY_MESSAGE: &str = "RoleBinding created";
pub const ROLE_BINDING_READY_ERROR_MESSAGE: &str = "RoleBinding error occurred";

pub const RABBITMQ_TRANSPORT_URL_READY_INIT_MESSAGE: &str = "RabbitMqTransportURL not started";
pub const RABBITMQ_TRANSPORT_URL_READY_RUNNING_MESSAGE: &str = "RabbitMqTransportURL creation in progress";
pub const RABBITMQ_TRANSPORT_URL_READY_MESSAGE: &str = "RabbitMqTransportURL successfully created";
pub const RABBITMQ_TRANSPORT_URL_READY_ERROR_MESSAGE: &str = "RabbitMqTransportURL error occurred";

pub const KEYSTONE_SERVICE_READY_INIT_MESSAGE: &str = "Keystone Service registration not started";
pub const KEYSTONE_SERVICE_READY_RUNNING_MESSAGE: &str = "Keystone Service registration in progress";
pub const KEYSTONE_SERVICE_READY_MESSAGE: &str = "Keystone Service registration completed";
pub const KEYSTONE_SERVICE_READY_ERROR_MESSAGE: &str = "Keystone Service registration error occurred";

pub const KEYSTONE_ENDPOINT_READY_INIT_MESSAGE: &str = "Keystone Endpoint registration not started";
pub const KEYSTONE_ENDPOINT_READY_RUNNING_MESSAGE: &str = "Keystone Endpoint registration in progress";
pub const KEYSTONE_ENDPOINT_READY_MESSAGE: &str = "Keystone Endpoint registration completed";
pub const KEYSTONE_ENDPOINT_READY_ERROR_MESSAGE: &str = "Keystone Endpoint registration error occurred";

pub const NETWORK_ATTACHMENTS_READY_INIT_MESSAGE: &str = "NetworkAttachments not started";
pub const NETWORK_ATTACHMENTS_READY_WAITING_MESSAGE: &str = "NetworkAttachment resources missing";
pub const NETWORK_ATTACHMENTS_READY_MESSAGE: &str = "NetworkAttachments completed";
pub const NETWORK_ATTACHMENTS_READY_ERROR_MESSAGE: &str = "NetworkAttachments error occurred";

pub const CRON_JOB_READY_INIT_MESSAGE: &str = "CronJob not started";
pub const CRON_JOB_READY_MESSAGE: &str = "CronJob completed";
pub const CRON_JOB_READY_ERROR_MESSAGE: &str = "CronJob error occurred";

pub const TLS_INPUT_READY_INIT_MESSAGE: &str = "TLSInput not started";
pub const TLS_INPUT_READY_WAITING_MESSAGE: &str = "TLSInput resources missing";
pub const TLS_INPUT_READY_MESSAGE: &str = "TLSInput ready";
pub const TLS_INPUT_READY_ERROR_MESSAGE: &str = "TLSInput error occurred";
