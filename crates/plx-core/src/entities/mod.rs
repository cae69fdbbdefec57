//! Entity structs for the PlatifyX backend's resources.
//!
//! Field names follow the backend's `snake_case` JSON. Optional and
//! collection fields default when absent so partial payloads still parse.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod ci;
mod docs;
mod finops;
mod rbac;
mod secrets;
mod templates;

pub use ci::{Build, BuildLogs, CiStats, Pipeline, PipelineRun, Release, ReleaseDecision, TriggerBuild};
pub use docs::DocGenerationRequest;
pub use finops::{CostForecast, FinopsStats, MonthlyCost, ServiceCost};
pub use rbac::{NewRole, NewUser, Permission, Role, SsoSettings, User};
pub use secrets::{AwsSecret, AwsSecretSummary, NewAwsSecret, VaultKeys, VaultSecret, VaultWrite};
pub use templates::{
    GeneratedTemplate, InfrastructureTemplate, PreviewFile, ServiceCreateRequest, ServiceProgress,
    TemplatePreview, TemplateRequest, TemplateVariable,
};
