//! CLI command handlers.
//!
//! Kept apart from main.rs so the command flow can be unit tested.

mod sbom;

use std::process::ExitCode;

pub use sbom::{generate, handle_generate};

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}
