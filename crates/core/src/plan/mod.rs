//! Deployment plans and the built-in plan for this project.
//!
//! For now we define:
//! - `DeploymentPlan`: target project id plus an ordered list of functions.
//! - `FunctionsLayout`: where function sources live on disk (path arithmetic only).
//! - `DeploymentPlan::builtin()`: the fixed plan the CLI reports on.

mod layout;

pub use layout::{FunctionsLayout, DEFAULT_FUNCTIONS_DIR, ENTRY_FILE};

use serde::{Deserialize, Serialize};

use crate::model::FunctionDescriptor;

/// Supabase project the built-in plan targets.
pub const PROJECT_ID: &str = "xrqobmncpllhkjjorjul";

/// Functions in the built-in plan, in deploy order.
pub const BUILTIN_FUNCTIONS: [&str; 3] =
    ["campaign-scheduler", "start-campaign", "update-session-tracking"];

const DASHBOARD_BASE_URL: &str = "https://supabase.com/dashboard/project";

/// A set of functions to deploy into one Supabase project.
///
/// Function order is significant: every report lists functions in the order
/// they appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub project_id: String,
    pub functions: Vec<FunctionDescriptor>,
}

impl DeploymentPlan {
    pub fn new(project_id: impl Into<String>, functions: Vec<FunctionDescriptor>) -> Self {
        Self { project_id: project_id.into(), functions }
    }

    /// The plan this repository ships with.
    pub fn builtin() -> Self {
        let layout = FunctionsLayout::default();
        let functions = BUILTIN_FUNCTIONS.iter().map(|name| layout.descriptor(name)).collect();
        Self::new(PROJECT_ID, functions)
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Dashboard page where functions can be created by hand.
    pub fn dashboard_url(&self) -> String {
        format!("{DASHBOARD_BASE_URL}/{}/functions", self.project_id)
    }

    /// One CLI deploy command per function, in plan order.
    pub fn deploy_commands(&self) -> Vec<String> {
        self.functions.iter().map(FunctionDescriptor::deploy_command).collect()
    }
}
