use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use deploy_plan_core::DeploymentPlan;
use deploy_summary::commands::{
    deploy_commands_command, list_functions_command, summary_command, OutputFormat,
};
use deploy_summary::logging::{init_logging, LogLevel};

/// Edge Function deployment summary CLI.
///
/// This CLI is a thin wrapper around `deploy-plan-core` (exposed in code as
/// `deploy_plan_core`). It never deploys anything: the dashboard URL and the
/// `supabase` commands it prints are advice for the operator.
#[derive(Parser, Debug)]
#[command(
    name = "deploy-summary",
    version,
    about = "Print the Edge Function deployment plan and how to deploy it",
    long_about = None
)]
struct Cli {
    /// Log verbosity. `RUST_LOG` takes precedence when set.
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the deployment summary with manual and CLI instructions.
    ///
    /// This is the default when no subcommand is given.
    Summary {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the functions in the plan with their entry paths.
    Functions {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print only the `supabase functions deploy` commands, one per line.
    Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(env!("CARGO_CRATE_NAME"), cli.log_level)?;

    let plan = DeploymentPlan::builtin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Default to the Summary command if none is provided.
    match cli.command.unwrap_or(Command::Summary { format: OutputFormat::Text }) {
        Command::Summary { format } => summary_command(&plan, format, &mut out)?,
        Command::Functions { json } => list_functions_command(&plan, json, &mut out)?,
        Command::Commands => deploy_commands_command(&plan, &mut out)?,
    }

    Ok(())
}
