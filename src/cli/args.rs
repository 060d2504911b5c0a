//! Command-line argument parsing.

use std::path::PathBuf;

/// Options for running the browser. Unset fields fall back to the
/// environment, then the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub auth_token: Option<String>,
    pub endpoint: Option<String>,
    pub config_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the browser (default)
    Run(CliOptions),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgsError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} requires a value")]
    MissingValue(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

pub const USAGE: &str = "\
Usage: hbtui [OPTIONS]

Browse Honeybadger accounts, projects, faults and more in the terminal.

Options:
      --auth-token <TOKEN>  Personal auth token (env: HONEYBADGER_AUTH_TOKEN)
      --endpoint <URL>      API endpoint (env: HONEYBADGER_ENDPOINT)
      --config <PATH>       Config file (default: ~/.honeybadger-cli.yaml)
      --log-level <FILTER>  Log filter, e.g. debug or hbtui=trace (env: HBTUI_LOG)
  -h, --help                Print help
  -V, --version             Print version";

/// Parse command-line arguments (program name first) into a command.
///
/// ```
/// use hbtui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hbtui".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            _ => {}
        }

        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        let slot = match flag.as_str() {
            "--auth-token" => &mut options.auth_token,
            "--endpoint" => &mut options.endpoint,
            "--log-level" => &mut options.log_level,
            "--config" => {
                let value = take_value(&flag, inline, &mut args)?;
                options.config_path = Some(PathBuf::from(value));
                continue;
            }
            other if other.starts_with('-') => {
                return Err(ArgsError::UnknownOption(other.to_string()))
            }
            _ => return Err(ArgsError::UnexpectedArgument(arg)),
        };
        *slot = Some(take_value(&flag, inline, &mut args)?);
    }

    Ok(CliCommand::Run(options))
}

fn take_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    match inline.or_else(|| rest.next()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ArgsError::MissingValue(flag.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["hbtui".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(CliOptions::default())));
    }

    #[test]
    fn test_parse_separate_and_inline_values() {
        let command = parse(&[
            "--auth-token",
            "abc",
            "--endpoint=https://eu-api.honeybadger.io",
            "--config",
            "/tmp/hb.yaml",
            "--log-level=debug",
        ])
        .unwrap();

        assert_eq!(
            command,
            CliCommand::Run(CliOptions {
                auth_token: Some("abc".to_string()),
                endpoint: Some("https://eu-api.honeybadger.io".to_string()),
                config_path: Some(PathBuf::from("/tmp/hb.yaml")),
                log_level: Some("debug".to_string()),
            })
        );
    }

    #[test]
    fn test_inline_value_may_contain_equals() {
        let command = parse(&["--log-level=hbtui=trace"]).unwrap();
        match command {
            CliCommand::Run(options) => assert_eq!(options.log_level.as_deref(), Some("hbtui=trace")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ArgsError::UnknownOption("--unknown".to_string()))
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--auth-token"]),
            Err(ArgsError::MissingValue("--auth-token".to_string()))
        );
        assert_eq!(
            parse(&["--endpoint="]),
            Err(ArgsError::MissingValue("--endpoint".to_string()))
        );
    }

    #[test]
    fn test_positional_argument_is_rejected() {
        assert_eq!(
            parse(&["faults"]),
            Err(ArgsError::UnexpectedArgument("faults".to_string()))
        );
    }
}
