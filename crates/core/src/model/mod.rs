//! Core data model: the functions that make up a deployment plan.

use serde::{Deserialize, Serialize};

/// CLI used in the deploy instructions.
pub const SUPABASE_CLI: &str = "supabase";

/// A single Edge Function scheduled for deployment.
///
/// Only a name and the path of its entry file, relative to the repository
/// root. Descriptors are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub path: String,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into() }
    }

    /// Shell command that deploys this function with the Supabase CLI.
    ///
    /// Printed as advice only; nothing in this crate executes it.
    pub fn deploy_command(&self) -> String {
        format!("{SUPABASE_CLI} functions deploy {}", self.name)
    }
}
