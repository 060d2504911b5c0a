use std::sync::Arc;

use color_eyre::Result;

use hbtui::adapters::ReqwestHttpClient;
use hbtui::adapters::reqwest_http::DEFAULT_TIMEOUT;
use hbtui::api::DataClient;
use hbtui::app::{App, ViewContext};
use hbtui::cli::{parse_args, version_line, CliCommand, USAGE};
use hbtui::config::Config;
use hbtui::logging::init_logging;
use hbtui::run::run_app;
use hbtui::terminal::{setup_panic_hook, TerminalManager};
use hbtui::views::root_view;

fn main() -> Result<()> {
    color_eyre::install()?;

    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(options)) => options,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = match Config::load(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let log_guard = init_logging(options.log_level.as_deref());
    tracing::info!(
        version = hbtui::cli::VERSION,
        endpoint = %config.endpoint,
        log_dir = ?log_guard.as_ref().map(|g| g.directory()),
        "starting"
    );

    let http = match ReqwestHttpClient::with_timeout(DEFAULT_TIMEOUT) {
        Ok(http) => http,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let client = Arc::new(DataClient::new(
        Arc::new(http),
        config.data_api_url(),
        &config.auth_token,
    ));

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        let mut app = App::new();
        let ctx = ViewContext::new(client, app.navigator());
        app.push(root_view(&ctx));
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    tracing::info!("exited");
    drop(log_guard);
    result
}
