//! Port traits separating the domain from concrete I/O.

pub mod record_port;
pub mod config_port;
pub mod report_port;
