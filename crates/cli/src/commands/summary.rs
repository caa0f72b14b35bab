use std::io::Write;

use anyhow::{Context, Result};
use deploy_plan_core::{report, DeploymentPlan};
use tracing::info;

use crate::commands::OutputFormat;

/// Print the deployment summary for `plan` in the requested format.
pub fn summary_command<W: Write>(
    plan: &DeploymentPlan,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!(
        project_id = %plan.project_id,
        functions = plan.function_count(),
        %format,
        "Rendering deployment summary"
    );

    report::write_report(plan, format.into(), out)
        .with_context(|| format!("Failed to print {format} deployment summary"))
}
