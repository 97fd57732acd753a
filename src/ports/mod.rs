//! Port traits at the I/O seams of the pipeline.

pub mod alert_port;
pub mod config_port;
pub mod disclosure_port;
pub mod price_port;
