use plx_core::entities::{GeneratedTemplate, InfrastructureTemplate, TemplatePreview};
use plx_wizard::{TemplateBackend, TemplateWizard, WizardError, WizardStep};
use serde::Serialize;

use crate::cli::subcommands::TemplatesCommands;
use crate::cli::subcommands::templates::TemplateCreateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::limit::{limit_for, truncate_to};
use crate::commands::shared::parse::parse_pairs;
use crate::context::AppContext;
use crate::output::{note, output, output_list};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct TemplateCreateResponse {
    template_id: String,
    name: String,
    step: String,
    generated: bool,
    preview: Option<TemplatePreview>,
    result: Option<GeneratedTemplate>,
}

#[derive(Serialize)]
struct PreviewFileRow<'a> {
    path: &'a str,
    lines: usize,
}

/// Handle `plx templates`.
pub async fn handle(
    action: &TemplatesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TemplatesCommands::List => {
            let mut templates = ctx.client.list_templates().await.user_facing()?;
            truncate_to(&mut templates, limit_for(None, flags));
            output_list(&templates, "no templates found", flags.format)
        }
        TemplatesCommands::Create(args) => {
            let templates = ctx.client.list_templates().await.user_facing()?;
            let template = find_template(templates, &args.template)?;

            let spinner = Progress::spinner("requesting preview");
            let mut wizard = TemplateWizard::new(ctx.client.clone());
            let drive_result = drive(&mut wizard, template, args).await;
            spinner.finish_clear();
            let response = drive_result.map_err(|error| wizard_error(&error))?;

            if !response.generated {
                note(flags, "preview only: nothing was generated. Re-run with --yes to generate.");
            }
            print_response(&response, flags)
        }
    }
}

fn find_template(
    templates: Vec<InfrastructureTemplate>,
    id: &str,
) -> anyhow::Result<InfrastructureTemplate> {
    let known = templates
        .iter()
        .map(|t| t.id.clone())
        .collect::<Vec<_>>()
        .join(", ");
    templates
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| anyhow::anyhow!("template '{id}' not found (available: {known})"))
}

/// Walk the wizard from template selection to the preview step, then confirm
/// only when `--yes` was given.
async fn drive<B: TemplateBackend>(
    wizard: &mut TemplateWizard<B>,
    template: InfrastructureTemplate,
    args: &TemplateCreateArgs,
) -> Result<TemplateCreateResponse, WizardError> {
    let variables = parse_pairs(&args.vars, "var").map_err(|error| {
        WizardError::Validation(vec![plx_wizard::FieldError::new("variables", error.to_string())])
    })?;

    wizard.select_template(template);
    wizard.next().await?;

    wizard.set_name(args.name.clone());
    wizard.set_description(args.description.clone());
    wizard.set_owner(args.owner.clone());
    wizard.next().await?;

    for (name, value) in variables {
        wizard.set_variable(name, value);
    }
    wizard.next().await?;

    if args.yes {
        wizard.confirm().await?;
    }

    let draft = wizard.draft();
    Ok(TemplateCreateResponse {
        template_id: draft
            .template
            .as_ref()
            .map(|t| t.id.clone())
            .unwrap_or_default(),
        name: draft.name.clone(),
        step: wizard.step().to_string(),
        generated: wizard.step() == WizardStep::Done,
        preview: wizard.preview().cloned(),
        result: wizard.result().cloned(),
    })
}

fn wizard_error(error: &WizardError) -> anyhow::Error {
    let fields = error.field_errors();
    if fields.is_empty() {
        return anyhow::anyhow!(error.display_message());
    }
    let lines = fields
        .iter()
        .map(|field| format!("  {field}"))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::anyhow!("invalid input:\n{lines}")
}

fn print_response(response: &TemplateCreateResponse, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(response, flags.format);
    }

    if let Some(preview) = &response.preview {
        if let Some(summary) = &preview.summary {
            println!("{summary}");
        }
        let rows = preview
            .files
            .iter()
            .map(|file| PreviewFileRow {
                path: &file.path,
                lines: file.content.lines().count(),
            })
            .collect::<Vec<_>>();
        output_list(&rows, "preview contains no files", flags.format)?;
    }
    if let Some(result) = &response.result {
        output(result, flags.format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use plx_client::ApiError;
    use plx_core::entities::{
        GeneratedTemplate, InfrastructureTemplate, PreviewFile, TemplatePreview, TemplateRequest,
        TemplateVariable,
    };
    use plx_wizard::{TemplateBackend, TemplateWizard};
    use pretty_assertions::assert_eq;

    use super::{TemplateCreateArgs, drive, find_template};

    #[derive(Default)]
    struct CountingBackend {
        previews: AtomicUsize,
        generates: AtomicUsize,
    }

    impl TemplateBackend for CountingBackend {
        async fn preview(&self, request: &TemplateRequest) -> Result<TemplatePreview, ApiError> {
            self.previews.fetch_add(1, Ordering::SeqCst);
            Ok(TemplatePreview {
                files: vec![PreviewFile {
                    path: format!("{}/main.tf", request.name),
                    content: "a\nb\n".into(),
                }],
                summary: None,
            })
        }

        async fn generate(&self, request: &TemplateRequest) -> Result<GeneratedTemplate, ApiError> {
            self.generates.fetch_add(1, Ordering::SeqCst);
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
            category: None,
            provider: None,
            variables: vec![TemplateVariable {
                name: "region".into(),
                description: None,
                required: true,
                default: None,
            }],
        }
    }

    fn args(yes: bool, vars: &[&str]) -> TemplateCreateArgs {
        TemplateCreateArgs {
            template: "tpl-go".into(),
            name: "payments".into(),
            description: None,
            owner: Some("team-payments".into()),
            vars: vars.iter().map(|v| (*v).to_string()).collect(),
            yes,
        }
    }

    #[tokio::test]
    async fn without_yes_stops_at_preview() {
        let mut wizard = TemplateWizard::new(CountingBackend::default());
        let response = drive(&mut wizard, template(), &args(false, &["region=eu-west-1"]))
            .await
            .expect("preview should succeed");

        assert!(!response.generated);
        assert_eq!(response.step, "4/5 Preview");
        assert!(response.preview.is_some());
        assert!(response.result.is_none());
        assert_eq!(wizard.backend().previews.load(Ordering::SeqCst), 1);
        assert_eq!(wizard.backend().generates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn with_yes_generates_after_preview() {
        let mut wizard = TemplateWizard::new(CountingBackend::default());
        let response = drive(&mut wizard, template(), &args(true, &["region=eu-west-1"]))
            .await
            .expect("generation should succeed");

        assert!(response.generated);
        assert_eq!(
            response
                .result
                .and_then(|r| r.repository_url)
                .as_deref(),
            Some("https://git.example.com/payments")
        );
        assert_eq!(wizard.backend().previews.load(Ordering::SeqCst), 1);
        assert_eq!(wizard.backend().generates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_required_variable_never_calls_backend() {
        let mut wizard = TemplateWizard::new(CountingBackend::default());
        let error = drive(&mut wizard, template(), &args(true, &[]))
            .await
            .expect_err("region is required");

        assert!(!error.field_errors().is_empty());
        assert_eq!(wizard.backend().previews.load(Ordering::SeqCst), 0);
        assert_eq!(wizard.backend().generates.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_template_lists_available_ids() {
        let err = find_template(vec![template()], "tpl-rust").expect_err("should fail");
        assert!(err.to_string().contains("available: tpl-go"));
    }
}
