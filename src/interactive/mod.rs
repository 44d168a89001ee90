//! Interactive TUI interface

mod app;
mod input;
mod rendering;

pub use app::{App, Phase, run_tui};
pub use input::{KeyAction, map_key};
