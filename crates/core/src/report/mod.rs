//! Rendering a `DeploymentPlan` into its printable forms.
//!
//! Three formats are supported:
//! - `Text`: the fixed-layout human summary with manual and CLI instructions.
//! - `Json` / `Yaml`: a `PlanSummary` carrying the same facts for tooling.
//!
//! Renderers are pure; the only fallible step is writing to the sink or
//! serializing the structured forms.

mod summary;
mod text;

use std::io::Write;

use thiserror::Error;

use crate::plan::DeploymentPlan;

pub use summary::{FunctionSummary, PlanSummary};
pub use text::{TextReport, READY_STATUS, SEPARATOR_WIDTH};

/// Error type for report rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output sink rejected the write (e.g. stdout was closed).
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize report as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Render the human-readable summary. Infallible.
pub fn render_text(plan: &DeploymentPlan) -> String {
    TextReport::new(plan).to_string()
}

/// Render the structured summary as pretty-printed JSON.
pub fn render_json(plan: &DeploymentPlan) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(&PlanSummary::from_plan(plan))?)
}

/// Render the structured summary as YAML.
pub fn render_yaml(plan: &DeploymentPlan) -> ReportResult<String> {
    Ok(serde_yaml::to_string(&PlanSummary::from_plan(plan))?)
}

/// Render `plan` in `format`. JSON output gets a trailing newline so every
/// format ends with one.
pub fn render(plan: &DeploymentPlan, format: ReportFormat) -> ReportResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(plan)),
        ReportFormat::Json => render_json(plan).map(|mut body| {
            body.push('\n');
            body
        }),
        ReportFormat::Yaml => render_yaml(plan),
    }
}

/// Render `plan` in `format` and write it to `out`.
pub fn write_report<W: Write>(
    plan: &DeploymentPlan,
    format: ReportFormat,
    out: &mut W,
) -> ReportResult<()> {
    let body = render(plan, format)?;
    out.write_all(body.as_bytes())?;
    out.flush()?;
    Ok(())
}
