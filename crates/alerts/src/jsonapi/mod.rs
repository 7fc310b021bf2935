//! Backend JSON:API wire types.
//!
//! These mirror the backend payloads closely and stay permissive: missing
//! attributes, relationships or included resources deserialize to empty
//! values so conversion can degrade gracefully.

mod afm;
mod alert;
mod automation;
mod included;

pub use afm::*;
pub use alert::*;
pub use automation::*;
pub use included::*;
