//! Wizard navigation against an in-memory backend.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use plx_client::ApiError;
use plx_core::entities::{
    GeneratedTemplate, InfrastructureTemplate, PreviewFile, TemplatePreview, TemplateRequest,
    TemplateVariable,
};
use plx_wizard::{TemplateBackend, TemplateWizard, WizardError, WizardStep};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct FakeBackend {
    previews: AtomicUsize,
    generates: AtomicUsize,
    fail_preview: bool,
    fail_generate: bool,
    last_request: Mutex<Option<TemplateRequest>>,
}

impl TemplateBackend for FakeBackend {
    async fn preview(&self, request: &TemplateRequest) -> Result<TemplatePreview, ApiError> {
        self.previews.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        if self.fail_preview {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(TemplatePreview {
            files: vec![PreviewFile {
                path: format!("{}/main.tf", request.name),
                content: "module \"svc\" {}".into(),
            }],
            summary: Some("1 file".into()),
        })
    }

    async fn generate(&self, request: &TemplateRequest) -> Result<GeneratedTemplate, ApiError> {
        self.generates.fetch_add(1, Ordering::SeqCst);
        if self.fail_generate {
            return Err(ApiError::Http {
                status: 409,
                message: "repository already exists".into(),
            });
        }
        Ok(GeneratedTemplate {
            repository_url: Some(format!("https://git.example.com/{}", request.name)),
            files: vec!["main.tf".into()],
            message: None,
        })
    }
}

fn template() -> InfrastructureTemplate {
    InfrastructureTemplate {
        id: "tpl-go".into(),
        name: "Go service".into(),
        description: None,
        category: Some("backend".into()),
        provider: Some("aws".into()),
        variables: vec![
            TemplateVariable {
                name: "region".into(),
                description: None,
                required: true,
                default: None,
            },
            TemplateVariable {
                name: "replicas".into(),
                description: None,
                required: false,
                default: Some("2".into()),
            },
        ],
    }
}

async fn wizard_at_parameters(backend: FakeBackend) -> TemplateWizard<FakeBackend> {
    let mut wizard = TemplateWizard::new(backend);
    wizard.select_template(template());
    assert_eq!(wizard.next().await.unwrap(), WizardStep::Details);
    wizard.set_name("payments-api");
    assert_eq!(wizard.next().await.unwrap(), WizardStep::Parameters);
    wizard
}

#[tokio::test]
async fn happy_path_previews_then_generates() {
    let mut wizard = wizard_at_parameters(FakeBackend::default()).await;
    wizard.set_variable("region", "eu-west-1");

    assert_eq!(wizard.next().await.unwrap(), WizardStep::Preview);
    assert_eq!(wizard.preview().unwrap().files[0].path, "payments-api/main.tf");

    let generated = wizard.confirm().await.unwrap();
    assert_eq!(
        generated.repository_url.as_deref(),
        Some("https://git.example.com/payments-api")
    );
    assert_eq!(wizard.step(), WizardStep::Done);
    assert!(matches!(wizard.next().await, Err(WizardError::AtLastStep)));
}

#[tokio::test]
async fn template_defaults_are_sent() {
    let backend = FakeBackend::default();
    let mut wizard = wizard_at_parameters(backend).await;
    wizard.set_variable("region", "us-east-1");
    wizard.next().await.unwrap();
    assert_eq!(wizard.draft().variables["replicas"], "2");
}

#[tokio::test]
async fn next_never_passes_an_invalid_step() {
    let mut wizard = TemplateWizard::new(FakeBackend::default());

    let err = wizard.next().await.unwrap_err();
    assert_eq!(err.field_errors()[0].field, "template");
    assert_eq!(wizard.step(), WizardStep::Template);

    wizard.select_template(template());
    wizard.next().await.unwrap();
    wizard.set_name("Not Valid");
    assert!(matches!(wizard.next().await, Err(WizardError::Validation(_))));
    assert_eq!(wizard.step(), WizardStep::Details);

    wizard.set_name("valid-name");
    wizard.next().await.unwrap();
    let err = wizard.next().await.unwrap_err();
    assert_eq!(err.field_errors().len(), 1);
    assert_eq!(err.field_errors()[0].field, "region");
    assert_eq!(wizard.step(), WizardStep::Parameters);
}

#[tokio::test]
async fn previous_never_goes_below_zero() {
    let mut wizard = TemplateWizard::new(FakeBackend::default());
    assert_eq!(wizard.previous(), WizardStep::Template);
    assert_eq!(wizard.previous(), WizardStep::Template);

    let mut wizard = wizard_at_parameters(FakeBackend::default()).await;
    assert_eq!(wizard.previous(), WizardStep::Details);
    assert_eq!(wizard.previous(), WizardStep::Template);
    assert_eq!(wizard.previous(), WizardStep::Template);
}

#[tokio::test]
async fn preview_failure_does_not_advance() {
    let backend = FakeBackend {
        fail_preview: true,
        ..Default::default()
    };
    let mut wizard = wizard_at_parameters(backend).await;
    wizard.set_variable("region", "eu-west-1");

    let err = wizard.next().await.unwrap_err();
    assert!(matches!(err, WizardError::Preview(_)));
    assert!(err.display_message().contains("connection refused"));
    assert_eq!(wizard.step(), WizardStep::Parameters);
    assert!(wizard.preview().is_none());
}

#[tokio::test]
async fn preview_step_requires_explicit_confirm() {
    let mut wizard = wizard_at_parameters(FakeBackend::default()).await;
    wizard.set_variable("region", "eu-west-1");
    wizard.next().await.unwrap();

    assert!(matches!(wizard.next().await, Err(WizardError::ConfirmRequired)));
    assert_eq!(wizard.step(), WizardStep::Preview);
}

#[tokio::test]
async fn edits_invalidate_the_preview() {
    let mut wizard = wizard_at_parameters(FakeBackend::default()).await;
    wizard.set_variable("region", "eu-west-1");
    wizard.next().await.unwrap();

    wizard.set_variable("region", "us-east-1");
    assert!(matches!(wizard.confirm().await, Err(WizardError::PreviewMissing)));

    wizard.refresh_preview().await.unwrap();
    wizard.confirm().await.unwrap();
    assert_eq!(wizard.step(), WizardStep::Done);
}

#[tokio::test]
async fn going_back_from_done_needs_a_fresh_preview() {
    let mut wizard = wizard_at_parameters(FakeBackend::default()).await;
    wizard.set_variable("region", "eu-west-1");
    wizard.next().await.unwrap();
    wizard.confirm().await.unwrap();

    assert_eq!(wizard.previous(), WizardStep::Preview);
    assert!(wizard.preview().is_none());
    assert!(wizard.result().is_none());
    assert!(matches!(wizard.confirm().await, Err(WizardError::PreviewMissing)));
    assert_eq!(wizard.backend().generates.load(Ordering::SeqCst), 1);

    wizard.refresh_preview().await.unwrap();
    wizard.confirm().await.unwrap();
    assert_eq!(wizard.backend().generates.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn refresh_preview_only_on_preview_step() {
    let mut wizard = wizard_at_parameters(FakeBackend::default()).await;
    wizard.set_variable("region", "eu-west-1");

    let err = wizard.refresh_preview().await.unwrap_err();
    assert!(matches!(err, WizardError::NotOnPreview(WizardStep::Parameters)));
    assert_eq!(wizard.backend().previews.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn confirm_before_preview_never_generates() {
    let mut wizard = wizard_at_parameters(FakeBackend::default()).await;
    assert!(matches!(wizard.confirm().await, Err(WizardError::PreviewMissing)));
    assert_eq!(wizard.backend().generates.load(Ordering::SeqCst), 0);
    assert_eq!(wizard.backend().previews.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn generate_failure_keeps_preview_for_retry() {
    let backend = FakeBackend {
        fail_generate: true,
        ..Default::default()
    };
    let mut wizard = wizard_at_parameters(backend).await;
    wizard.set_variable("region", "eu-west-1");
    wizard.next().await.unwrap();

    let err = wizard.confirm().await.unwrap_err();
    assert_eq!(
        err.display_message(),
        "Generation failed: repository already exists"
    );
    assert_eq!(wizard.step(), WizardStep::Preview);
    assert!(wizard.preview().is_some());
}
