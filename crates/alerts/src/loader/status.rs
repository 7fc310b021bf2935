use std::path::PathBuf;

/// Outcome of loading a single file.
#[derive(Debug)]
pub struct LoadResult {
    pub path: PathBuf,
    pub status: LoadStatus,
}

#[derive(Debug)]
pub enum LoadStatus {
    /// Document parsed; `automations` were converted from it.
    Loaded { automations: usize },
    /// Dotfile or not a JSON file.
    Skipped { reason: String },
    /// Read or parse error.
    Failed { error: String },
}

impl LoadResult {
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded { .. })
    }
}
