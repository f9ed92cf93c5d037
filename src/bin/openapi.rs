use std::io::{self, Write};

use anyhow::Context;
use bestchoice_api::config::Settings;

fn main() -> anyhow::Result<()> {
    let bootstrap = Settings::default().log_level();
    let settings =
        bestchoice_api::load_settings_logged(bootstrap).context("unable to load settings")?;
    bestchoice_api::init_logging(settings.log_level());

    tracing::info!("Generating OpenAPI document...");
    let doc = bestchoice_api::openapi::to_json()?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", doc)?;
    out.flush()?;
    Ok(())
}
