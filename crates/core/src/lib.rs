//! deploy-plan-core
//!
//! Core library describing a Supabase Edge Function deployment plan and
//! rendering the human-readable summary printed before a deploy.
//!
//! This crate defines the data model (functions and plans), the built-in plan
//! for this project, the on-disk source layout convention, and the report
//! renderers. Frontends (the `deploy-summary` CLI) stay thin wrappers.

pub mod model;
pub mod plan;
pub mod report;

pub use model::FunctionDescriptor;
pub use plan::{DeploymentPlan, FunctionsLayout};
pub use report::{PlanSummary, ReportError, ReportFormat, ReportResult};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
