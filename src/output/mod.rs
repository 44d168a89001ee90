//! Terminal output formatting
//!
//! Display utilities for the line-based front ends.

pub mod display;
pub mod formatters;

pub use display::{
    format_guess_result, print_check_result, print_guess_result, print_keyboard, print_statistics,
};
