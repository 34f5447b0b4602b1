//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - status: Device status snapshot and its rendered view
//! - notification: Transient operator notifications
//! - credentials: WiFi credential submission

pub mod credentials;
pub mod notification;
pub mod status;

pub use credentials::*;
pub use notification::*;
pub use status::*;
