//! Sentiment library - keyword-count text classification.
//!
//! This crate provides:
//! - The classifier and its two fixed keyword sets (`classify`)
//! - The per-session, newest-first history log (`history`)
//! - A unified adapter error type (`error`)
//!
//! Feature flags:
//! - `cli`: Command-line interface with an interactive prompt loop
//! - `server`: HTTP server exposing classification and history

// Core modules (always compiled, no optional dependencies)
pub mod classify;
pub mod error;
pub mod history;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Server module (feature-gated)
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use classify::{analyze, classify, Analysis, Label};
pub use error::AppError;
pub use history::{History, HistoryEntry};
