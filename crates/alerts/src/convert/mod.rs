//! Backend-to-SDK converters.
//!
//! [`convert_automation`] is the entry point; the measure, filter, user and
//! export-definition converters are public for callers that hold those
//! resources on their own.

mod alert;
mod automation;
mod export_definition;
mod filter;
mod measure;
mod user;

pub use alert::{convert_alert, try_convert_alert};
pub use automation::{
    convert_automation, convert_automation_indexed, convert_automation_list_to_automations,
};
pub use export_definition::convert_export_definition;
pub use filter::convert_filter;
pub use measure::convert_measure;
pub use user::{convert_recipient, convert_user_identifier};
