//! Shared components for the converter front end.
pub mod amount_field;
pub mod converter_button;
pub mod currency_chooser;
pub mod pico;
