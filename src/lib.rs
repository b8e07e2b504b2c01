// Library root
// -----------
// This crate exposes the library surface for the `h2w` CLI, a small client
// for the Health2Wealth step-tracking API. The binary (`main.rs`) parses the
// command line and hands off to `commands`.
//
// Module responsibilities:
// - `api`: the blocking HTTP client and the `Transport` seam it implements.
// - `cli`: clap argument definitions and command dispatch.
// - `commands`: the user-facing operations (login, verify, dashboard, ...).
// - `config`: base URL, endpoint paths and token file location.
// - `credentials`: turns flags, prompts or the token file into an `Identity`.
// - `dashboard`: typed response payloads and the one-line summary.
// - `format`: thousands grouping and percentage rendering.
// - `token`: the on-disk token file.
// - `ui`: terminal prompts and the request spinner.
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod token;
pub mod ui;

pub use error::{H2wError, Result};
