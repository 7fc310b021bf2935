//! Filesystem loader for automation documents.
//!
//! Scans a directory recursively for `*.json` JSON:API automation documents
//! (a list, or a single resource) and converts them into SDK automations.

mod core;
mod status;


pub use self::core::{AutomationDocument, AutomationLoader};
pub use self::status::{LoadResult, LoadStatus};
