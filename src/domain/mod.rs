//! Core domain types and logic.

pub mod disclosure;
pub mod normalize;
pub mod scoring;
pub mod cluster;
pub mod ranking;
pub mod screen;
pub mod selection;
pub mod price_change;
pub mod feed;
pub mod scan;
pub mod config_validation;
pub mod error;
