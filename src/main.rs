//! Ecoscope - 3D drill-down data explorer

use clap::Parser;

use ecoscope::cli::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();

    // Initialize logging
    let filter = if app.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Ecoscope");

    app.run()
}
