use clap::Parser;
use std::process::ExitCode;

use yeetfile_serve::cli::Cli;
use yeetfile_serve::handler::static_files;
use yeetfile_serve::server::{Server, ShutdownSignal};
use yeetfile_serve::{logger, ServerConfig, ServerError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match ServerConfig::load(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_startup_error(&e);
            return ExitCode::FAILURE;
        }
    };

    // Multi-threaded runtime: one task per connection
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            logger::log_startup_error(&ServerError::Io(e));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(async_main(cfg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_startup_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn async_main(cfg: ServerConfig) -> Result<(), ServerError> {
    logger::log_banner(&cfg);

    let server = Server::bind(cfg)?;
    let shutdown = ShutdownSignal::register()?;

    let pages = match static_files::discover_html_pages(&server.config().root_directory).await {
        Ok(pages) => pages,
        Err(e) => {
            logger::log_warning(&format!("Could not enumerate HTML files: {e}"));
            Vec::new()
        }
    };
    logger::log_server_started(server.config(), &pages);

    let signal = server.run_until(shutdown.recv()).await;
    logger::log_shutdown(signal);
    Ok(())
}
