use serde::{Deserialize, Serialize};

use super::text::READY_STATUS;
use crate::plan::DeploymentPlan;

/// One function as it appears in a structured summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub name: String,
    pub path: String,
    pub status: String,
}

/// Serializable counterpart of the text report.
///
/// Carries the same facts as the human summary so tooling does not have to
/// scrape text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub project_id: String,
    pub function_count: usize,
    pub functions: Vec<FunctionSummary>,
    pub dashboard_url: String,
    pub deploy_commands: Vec<String>,
}

impl PlanSummary {
    pub fn from_plan(plan: &DeploymentPlan) -> Self {
        let functions = plan
            .functions
            .iter()
            .map(|func| FunctionSummary {
                name: func.name.clone(),
                path: func.path.clone(),
                status: READY_STATUS.to_string(),
            })
            .collect();

        Self {
            project_id: plan.project_id.clone(),
            function_count: plan.function_count(),
            functions,
            dashboard_url: plan.dashboard_url(),
            deploy_commands: plan.deploy_commands(),
        }
    }
}
