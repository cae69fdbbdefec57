pub mod auth;
pub mod ci;
pub mod dispatch;
pub mod docs;
pub mod finops;
pub mod playbook;
pub mod rbac;
pub mod schema;
pub mod secrets;
pub mod settings;
pub mod shared;
pub mod templates;
