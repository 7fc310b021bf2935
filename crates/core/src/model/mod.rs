//! SDK-native object shapes shared by the converters and the alert transformer.
//!
//! - `AutomationMetadataObject` / `AutomationDefinition`: saved and unsaved automations
//! - `AutomationAlert`: comparison or relative alert condition plus execution and trigger
//! - `Insight`, `Bucket`, `Measure`, `Filter`: the insight model metrics are discovered from

mod alert;
mod automation;
mod export_definition;
mod filter;
mod insight;
mod measure;
mod objref;
mod operators;
mod user;

pub use alert::*;
pub use automation::*;
pub use export_definition::*;
pub use filter::*;
pub use insight::*;
pub use measure::*;
pub use objref::*;
pub use operators::*;
pub use user::*;
