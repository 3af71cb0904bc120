use anyhow::Result;
use todoview::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        if path.exists() {
            eprintln!("❌ Config file already exists: {}", path.display());
            return Ok(());
        }
        return Config::generate_default_config(&path);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            eprintln!("\n💡 Fix the config file or run `todoview --init-config` to write a fresh one.");
            return Err(e);
        }
    };

    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    log::info!("Exited cleanly");
    Ok(())
}
