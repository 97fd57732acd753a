//! Concrete adapter implementations for ports.

pub mod console_alert;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod prompt;
pub mod text_report;
