//! [`AutomationLoader`]: directory scan and per-file conversion.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use automation_core::{AutomationMetadataObject, Result};

use crate::convert::{convert_automation, convert_automation_list_to_automations};
use crate::jsonapi::{JsonApiAutomationOutList, JsonApiAutomationOutWithLinks, JsonApiIncluded};

use super::status::{LoadResult, LoadStatus};

/// A backend automation document: a list page or a single resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AutomationDocument {
    List(JsonApiAutomationOutList),
    Single {
        data: JsonApiAutomationOutWithLinks,
        #[serde(default)]
        included: Vec<JsonApiIncluded>,
    },
}

impl AutomationDocument {
    pub fn convert(&self) -> Vec<AutomationMetadataObject> {
        match self {
            AutomationDocument::List(list) => convert_automation_list_to_automations(list),
            AutomationDocument::Single { data, included } => {
                vec![convert_automation(data, included)]
            }
        }
    }
}

/// Loads automation documents from a directory tree.
///
/// Converted automations are kept in load order. Parse errors are reported
/// per file and never abort a scan.
pub struct AutomationLoader {
    root: PathBuf,
    automations: Vec<AutomationMetadataObject>,
}

impl AutomationLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            automations: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recursively scan the root directory, replacing anything loaded before.
    ///
    /// Files are visited in name order so results are stable across runs.
    pub fn load_all(&mut self) -> Result<Vec<LoadResult>> {
        self.automations.clear();
        let mut results = Vec::new();
        let root = self.root.clone();
        self.scan_dir_recursive(&root, &mut results)?;
        Ok(results)
    }

    fn scan_dir_recursive(&mut self, dir: &Path, results: &mut Vec<LoadResult>) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to read directory");
                return Ok(());
            }
        };

        let mut paths = entries
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        paths.sort();

        for path in paths {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    if path.is_file() {
                        results.push(LoadResult {
                            path,
                            status: LoadStatus::Skipped {
                                reason: "dotfile".to_string(),
                            },
                        });
                    }
                    continue;
                }
            }

            if path.is_dir() {
                self.scan_dir_recursive(&path, results)?;
                continue;
            }

            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if !is_json {
                results.push(LoadResult {
                    path,
                    status: LoadStatus::Skipped {
                        reason: "not a JSON file".to_string(),
                    },
                });
                continue;
            }

            match self.load_file(&path) {
                Ok(automations) => {
                    let count = automations.len();
                    info!(path = %path.display(), automations = count, "loaded automations");
                    self.automations.extend(automations);
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Loaded { automations: count },
                    });
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load automation file");
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Failed {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        Ok(())
    }

    /// Parse and convert a single document without storing it.
    pub fn load_file(&self, path: &Path) -> Result<Vec<AutomationMetadataObject>> {
        let contents = fs::read_to_string(path)?;
        let document: AutomationDocument = serde_json::from_str(&contents)?;
        Ok(document.convert())
    }

    pub fn automations(&self) -> &[AutomationMetadataObject] {
        &self.automations
    }

    /// First loaded automation with the given id.
    pub fn get(&self, id: &str) -> Option<&AutomationMetadataObject> {
        self.automations.iter().find(|a| a.id == id)
    }
}
