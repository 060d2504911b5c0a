//! hbtui - a terminal browser for Honeybadger data
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod run;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod views;
