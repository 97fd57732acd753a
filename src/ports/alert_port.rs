//! Outbound notification port trait.

use crate::domain::error::InsiderError;

/// Delivers a rendered alert message to the analyst.
pub trait AlertPort {
    fn send(&self, message: &str) -> Result<(), InsiderError>;
}
