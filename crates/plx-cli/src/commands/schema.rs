use schemars::{Schema, schema_for};

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};

/// Names accepted by `plx schema`, in the order `plx schema list` prints them.
const TYPE_NAMES: &[&str] = &[
    "job-handle",
    "job-progress",
    "build",
    "build-logs",
    "trigger-build",
    "pipeline",
    "pipeline-run",
    "release",
    "release-decision",
    "ci-stats",
    "aws-secret-summary",
    "aws-secret",
    "new-aws-secret",
    "vault-keys",
    "vault-secret",
    "vault-write",
    "user",
    "new-user",
    "role",
    "new-role",
    "permission",
    "sso-settings",
    "finops-stats",
    "service-cost",
    "monthly-cost",
    "cost-forecast",
    "template",
    "template-request",
    "template-preview",
    "generated-template",
    "doc-generation-request",
    "service-create-request",
    "service-progress",
];

fn schema_by_name(name: &str) -> Option<Schema> {
    use plx_core::entities::*;
    use plx_core::progress::{JobHandle, JobProgress};

    let schema = match name {
        "job-handle" => schema_for!(JobHandle),
        "job-progress" => schema_for!(JobProgress),
        "build" => schema_for!(Build),
        "build-logs" => schema_for!(BuildLogs),
        "trigger-build" => schema_for!(TriggerBuild),
        "pipeline" => schema_for!(Pipeline),
        "pipeline-run" => schema_for!(PipelineRun),
        "release" => schema_for!(Release),
        "release-decision" => schema_for!(ReleaseDecision),
        "ci-stats" => schema_for!(CiStats),
        "aws-secret-summary" => schema_for!(AwsSecretSummary),
        "aws-secret" => schema_for!(AwsSecret),
        "new-aws-secret" => schema_for!(NewAwsSecret),
        "vault-keys" => schema_for!(VaultKeys),
        "vault-secret" => schema_for!(VaultSecret),
        "vault-write" => schema_for!(VaultWrite),
        "user" => schema_for!(User),
        "new-user" => schema_for!(NewUser),
        "role" => schema_for!(Role),
        "new-role" => schema_for!(NewRole),
        "permission" => schema_for!(Permission),
        "sso-settings" => schema_for!(SsoSettings),
        "finops-stats" => schema_for!(FinopsStats),
        "service-cost" => schema_for!(ServiceCost),
        "monthly-cost" => schema_for!(MonthlyCost),
        "cost-forecast" => schema_for!(CostForecast),
        "template" => schema_for!(InfrastructureTemplate),
        "template-request" => schema_for!(TemplateRequest),
        "template-preview" => schema_for!(TemplatePreview),
        "generated-template" => schema_for!(GeneratedTemplate),
        "doc-generation-request" => schema_for!(DocGenerationRequest),
        "service-create-request" => schema_for!(ServiceCreateRequest),
        "service-progress" => schema_for!(ServiceProgress),
        _ => return None,
    };
    Some(schema)
}

/// Handle `plx schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let name = args.type_name.trim().to_ascii_lowercase().replace('_', "-");
    if name == "list" {
        for name in TYPE_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let schema = schema_by_name(&name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown type '{}'; run `plx schema list` for the known names",
            args.type_name
        )
    })?;

    // A schema has no useful table form.
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}
