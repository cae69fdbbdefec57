pub mod auth;
pub mod ci;
pub mod docs;
pub mod finops;
pub mod playbook;
pub mod rbac;
pub mod secrets;
pub mod settings;
pub mod templates;

pub use auth::AuthCommands;
pub use ci::CiCommands;
pub use docs::DocsCommands;
pub use finops::FinopsCommands;
pub use playbook::PlaybookCommands;
pub use rbac::RbacCommands;
pub use secrets::{AwsCommands, SecretsCommands, VaultCommands};
pub use settings::{SettingsCommands, SsoCommands};
pub use templates::TemplatesCommands;
