//! Terminal output formatting
//!
//! Colored tiles, keyboard rendering, and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board, print_check_result, print_hint_result, print_keyboard,
    print_statistics,
};
