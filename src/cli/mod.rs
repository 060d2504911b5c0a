//! CLI module for hbtui.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use hbtui::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     Ok(CliCommand::Run(options)) => { /* load config, start the browser */ }
//!     Ok(CliCommand::Version) => println!("hbtui {}", hbtui::cli::VERSION),
//!     Ok(CliCommand::Help) => println!("{}", hbtui::cli::USAGE),
//!     Err(e) => { eprintln!("error: {}", e); std::process::exit(2); }
//! }
//! ```

pub mod args;

pub use args::{parse_args, ArgsError, CliCommand, CliOptions, USAGE};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `hbtui <version>`
pub fn version_line() -> String {
    format!("hbtui {}", VERSION)
}
