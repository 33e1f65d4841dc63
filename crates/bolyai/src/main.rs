use anyhow::Context;
use bolyai_fetch::{Fetcher, ReqwestClient};
use clap::Parser;
use tracing::debug;

mod cli;
mod config;
mod logging;

use cli::App;
use config::Settings;

// Per-document failures are only logged; the exit status reflects startup
// problems alone.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let app = App::parse();
    let settings = Settings::load(&app).context("failed to load settings")?;
    let catalog = settings.catalog().context("invalid era selection")?;
    let tasks = catalog.tasks(&settings.download_dir);

    if app.list {
        for task in &tasks {
            println!("{task}");
        }
        return Ok(());
    }

    bolyai_fs::ensure_dir(&settings.download_dir).with_context(|| {
        format!("failed to create download folder {}", settings.download_dir.display())
    })?;

    let client = ReqwestClient::new().context("failed to build HTTP client")?;
    let fetcher = Fetcher::new(client);

    let report = bolyai_fetch::run(&fetcher, &tasks).await;
    debug!(?report, "run finished");

    Ok(())
}
