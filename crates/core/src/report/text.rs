use std::fmt;

use crate::plan::DeploymentPlan;

/// Width of the `=` rule framing the function list.
pub const SEPARATOR_WIDTH: usize = 50;

/// Status printed for every function in the plan.
pub const READY_STATUS: &str = "Ready for deployment";

const TITLE: &str = "Edge Function Deployment Summary:";

const MANUAL_STEPS: [&str; 4] = [
    "Click 'Create a new function'",
    "Enter the function name",
    "Copy the entire content from the file",
    "Click 'Deploy'",
];

/// Human-readable deployment summary.
///
/// Formatting is deterministic: the same plan always yields the same bytes.
/// Every line, the last one included, ends in `\n`.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    plan: &'a DeploymentPlan,
}

impl<'a> TextReport<'a> {
    pub fn new(plan: &'a DeploymentPlan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        let rule = "=".repeat(SEPARATOR_WIDTH);

        writeln!(f, "{TITLE}")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Project ID: {}", plan.project_id)?;
        writeln!(f, "Functions to deploy: {}", plan.function_count())?;
        writeln!(f)?;

        for func in &plan.functions {
            writeln!(f, "Function: {}", func.name)?;
            writeln!(f, "Path: {}", func.path)?;
            writeln!(f, "Status: {READY_STATUS}")?;
            writeln!(f)?;
        }

        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "To deploy these functions manually via Supabase UI:")?;
        writeln!(f, "1. Go to: {}", plan.dashboard_url())?;
        writeln!(f, "2. For each function above:")?;
        for step in MANUAL_STEPS {
            writeln!(f, "   - {step}")?;
        }
        writeln!(f)?;

        writeln!(f, "OR use Supabase CLI (after proper auth setup):")?;
        for command in plan.deploy_commands() {
            writeln!(f, "   {command}")?;
        }

        Ok(())
    }
}
