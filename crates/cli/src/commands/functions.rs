use std::io::Write;

use anyhow::{Context, Result};
use deploy_plan_core::DeploymentPlan;
use tracing::debug;

/// List the functions in `plan`, one per line, or as a JSON array.
pub fn list_functions_command<W: Write>(
    plan: &DeploymentPlan,
    json: bool,
    out: &mut W,
) -> Result<()> {
    debug!(functions = plan.function_count(), json, "Listing functions");

    if json {
        let serialized = serde_json::to_string_pretty(&plan.functions)
            .context("Failed to serialize functions to JSON")?;
        writeln!(out, "{serialized}").context("Failed to write function list")?;
        return Ok(());
    }

    writeln!(out, "Functions ({}):", plan.function_count())
        .context("Failed to write function list")?;
    if plan.functions.is_empty() {
        writeln!(out, "  (none)").context("Failed to write function list")?;
        return Ok(());
    }

    for func in &plan.functions {
        writeln!(out, "  - {}: {}", func.name, func.path)
            .context("Failed to write function list")?;
    }

    Ok(())
}

/// Print the Supabase CLI deploy commands, unindented, one per line.
pub fn deploy_commands_command<W: Write>(plan: &DeploymentPlan, out: &mut W) -> Result<()> {
    debug!(functions = plan.function_count(), "Listing deploy commands");

    for command in plan.deploy_commands() {
        writeln!(out, "{command}").context("Failed to write deploy commands")?;
    }

    Ok(())
}
