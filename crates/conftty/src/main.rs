use std::io;

use clap::Parser;
use conftty::app::App;
use conftty::config::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    conftty::logging::init(&cli.log_file_path())?;

    let catalog = cli
        .load_catalog()
        .map_err(|error| io::Error::other(format!("Error: {error}")))?;
    tracing::info!(
        conference = %catalog.name,
        sessions = catalog.sessions.len(),
        speakers = catalog.speakers.len(),
        "catalog loaded"
    );

    let mut app = App::new(catalog, &cli.start_screen());

    conftty::runtime::run(&mut app).await
}
