use std::path::{Component, Path, PathBuf};

use crate::model::FunctionDescriptor;

/// Default directory holding Edge Function sources, relative to the repo root.
pub const DEFAULT_FUNCTIONS_DIR: &str = "supabase/functions";

/// Entry file every function directory contains.
pub const ENTRY_FILE: &str = "index.ts";

/// Logical layout of Edge Function sources.
///
/// Each function lives at `<functions_dir>/<name>/index.ts`. This is pure path
/// arithmetic and does *not* touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionsLayout {
    /// Directory containing one sub-directory per function.
    pub functions_dir: PathBuf,
}

impl Default for FunctionsLayout {
    fn default() -> Self {
        Self::new(DEFAULT_FUNCTIONS_DIR)
    }
}

impl FunctionsLayout {
    pub fn new(functions_dir: impl AsRef<Path>) -> Self {
        Self { functions_dir: functions_dir.as_ref().to_path_buf() }
    }

    /// Directory for a single function.
    pub fn function_dir(&self, name: &str) -> PathBuf {
        self.functions_dir.join(name)
    }

    /// Entry file for a single function.
    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.function_dir(name).join(ENTRY_FILE)
    }

    /// Entry path as a display string with `/` separators on every platform,
    /// so reports stay byte-identical across hosts.
    pub fn entry_path_string(&self, name: &str) -> String {
        let mut out = String::new();
        for component in self.entry_path(name).components() {
            match component {
                Component::RootDir => out.push('/'),
                other => {
                    if !out.is_empty() && !out.ends_with('/') {
                        out.push('/');
                    }
                    out.push_str(&other.as_os_str().to_string_lossy());
                }
            }
        }
        out
    }

    /// Build a descriptor whose path follows this layout.
    pub fn descriptor(&self, name: &str) -> FunctionDescriptor {
        FunctionDescriptor::new(name, self.entry_path_string(name))
    }
}
