//! Muster CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use muster::audit::{Auditor, Reporter};
use muster::cli::Cli;
use muster::ui::{should_use_colors, MusterTheme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("muster=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("muster=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Muster starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = match cli.project_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let theme = if should_use_colors() {
        MusterTheme::new()
    } else {
        MusterTheme::plain()
    };
    let reporter = Reporter::new(theme);

    let session = Auditor::new(project_root).offline(cli.offline).run(&reporter);
    ExitCode::from(session.exit_code() as u8)
}
