//! Each screen is a full page composed from the shared components.
pub mod converter;
