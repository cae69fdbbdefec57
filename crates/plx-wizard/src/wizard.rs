use plx_core::entities::{GeneratedTemplate, InfrastructureTemplate, TemplatePreview};

use crate::backend::TemplateBackend;
use crate::draft::TemplateDraft;
use crate::error::WizardError;
use crate::step::WizardStep;

/// Drives a [`TemplateDraft`] through the five steps against a backend.
#[derive(Debug)]
pub struct TemplateWizard<B> {
    backend: B,
    step: WizardStep,
    draft: TemplateDraft,
    preview: Option<TemplatePreview>,
    result: Option<GeneratedTemplate>,
}

impl<B: TemplateBackend> TemplateWizard<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            step: WizardStep::Template,
            draft: TemplateDraft::default(),
            preview: None,
            result: None,
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn draft(&self) -> &TemplateDraft {
        &self.draft
    }

    /// The preview for the current draft, if one has been fetched.
    #[must_use]
    pub const fn preview(&self) -> Option<&TemplatePreview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub const fn result(&self) -> Option<&GeneratedTemplate> {
        self.result.as_ref()
    }

    // ── Input ──────────────────────────────────────────────────────
    //
    // Every edit invalidates the preview: what gets generated must be what
    // was previewed.

    /// Select a template, seeding variables from its defaults.
    pub fn select_template(&mut self, template: InfrastructureTemplate) {
        self.draft.variables.retain(|name, _| {
            template.variables.iter().any(|var| &var.name == name)
        });
        for var in &template.variables {
            if let Some(default) = &var.default {
                self.draft
                    .variables
                    .entry(var.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }
        self.draft.template = Some(template);
        self.invalidate();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.invalidate();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.draft.description = description;
        self.invalidate();
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.draft.owner = owner;
        self.invalidate();
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.draft.variables.insert(name.into(), value.into());
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.preview = None;
    }

    // ── Navigation ─────────────────────────────────────────────────

    /// Check the current step without moving.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Validation`] listing every failing field.
    pub fn validate_current(&self) -> Result<(), WizardError> {
        let errors = self.draft.validate(self.step);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(WizardError::Validation(errors))
        }
    }

    /// Advance one step if the current one validates.
    ///
    /// Leaving the parameters step fetches the preview first and does not
    /// advance if that fails. The preview step is left with [`Self::confirm`].
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Validation`], [`WizardError::Preview`],
    /// [`WizardError::ConfirmRequired`] on the preview step and
    /// [`WizardError::AtLastStep`] once done.
    pub async fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Preview => return Err(WizardError::ConfirmRequired),
            WizardStep::Done => return Err(WizardError::AtLastStep),
            _ => {}
        }
        self.validate_current()?;

        if self.step == WizardStep::Parameters {
            self.fetch_preview().await?;
        }
        if let Some(next) = self.step.following() {
            self.step = next;
        }
        tracing::debug!(step = %self.step, "wizard advanced");
        Ok(self.step)
    }

    /// Go back one step; a no-op on the first step. Leaving the preview or
    /// done step drops the preview, and leaving done drops the result, so a
    /// new generate always needs a fresh preview.
    pub fn previous(&mut self) -> WizardStep {
        match self.step {
            WizardStep::Preview => self.invalidate(),
            WizardStep::Done => {
                self.invalidate();
                self.result = None;
            }
            _ => {}
        }
        self.step = self.step.preceding();
        self.step
    }

    /// Request a fresh preview for the current draft, on the preview step.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotOnPreview`] on any other step and
    /// [`WizardError::Preview`] if the backend call fails.
    pub async fn refresh_preview(&mut self) -> Result<&TemplatePreview, WizardError> {
        if self.step != WizardStep::Preview {
            return Err(WizardError::NotOnPreview(self.step));
        }
        self.fetch_preview().await
    }

    /// Issue the generate request for the previewed draft.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::PreviewMissing`] unless the wizard is on the
    /// preview step with a preview for the current draft, and
    /// [`WizardError::Generate`] if the backend call fails. The wizard stays
    /// on the preview step after a failure.
    pub async fn confirm(&mut self) -> Result<&GeneratedTemplate, WizardError> {
        if self.step == WizardStep::Done {
            return Err(WizardError::AtLastStep);
        }
        if self.step != WizardStep::Preview || self.preview.is_none() {
            return Err(WizardError::PreviewMissing);
        }
        let request = self.draft.to_request();
        let generated = self.backend.generate(&request).await.map_err(|error| {
            tracing::warn!(%error, template = %request.template_id, "template generation failed");
            WizardError::Generate(error)
        })?;
        tracing::info!(name = %request.name, "template generated");
        self.step = WizardStep::Done;
        Ok(self.result.insert(generated))
    }

    async fn fetch_preview(&mut self) -> Result<&TemplatePreview, WizardError> {
        let request = self.draft.to_request();
        let preview = self.backend.preview(&request).await.map_err(|error| {
            tracing::warn!(%error, template = %request.template_id, "template preview failed");
            WizardError::Preview(error)
        })?;
        Ok(self.preview.insert(preview))
    }
}
