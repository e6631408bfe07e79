use clap::Parser;
use laptop_tiers::utils::{logger, validation::Validate};
use laptop_tiers::{server, CliConfig, ServerSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先讀設定檔才知道日誌格式
    let settings = match ServerSettings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_logger(settings.json_logs, settings.verbose);

    tracing::info!("Starting laptop-tiers server");
    tracing::debug!("Server settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = server::start_server(&settings).await {
        tracing::error!("❌ Server failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
