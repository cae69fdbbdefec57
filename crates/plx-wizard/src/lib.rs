//! # plx-wizard
//!
//! Five-step state machine behind `plx templates create`:
//!
//! ```text
//! 0 template → 1 details → 2 parameters → 3 preview → 4 done
//! ```
//!
//! [`TemplateWizard::next`] advances only when the current step validates.
//! Leaving the parameters step requests a dry-run preview; only
//! [`TemplateWizard::confirm`] issues the generate request, and only once a
//! preview for the current draft exists.

mod backend;
mod draft;
mod error;
mod step;
mod wizard;

pub use backend::TemplateBackend;
pub use draft::TemplateDraft;
pub use error::{FieldError, WizardError};
pub use step::WizardStep;
pub use wizard::TemplateWizard;
