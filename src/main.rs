use clap::Parser;
use ticketswitch_json::utils::{logger, validation::Validate};
use ticketswitch_json::{CliConfig, FilePayloadSource, PayloadSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if file_config.json_logs() {
        logger::init_json_logger(file_config.log_level());
    } else {
        logger::init_cli_logger(config.verbose, file_config.log_level());
    }

    tracing::info!("Starting ticketswitch-json CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| file_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let source = FilePayloadSource::new(file_config.payload_dir());
    let payload = source.load(&config.input).await?;

    let Some(entity) = config.entity.map_payload(&payload) else {
        tracing::warn!("⚠️ Payload in {} holds no {}", config.input, config.entity);
        return Ok(());
    };

    let options = config.json_options(&file_config);
    let output = if config.pretty(&file_config) {
        entity.to_json_string_pretty(options)?
    } else {
        entity.to_json_string(options)?
    };

    tracing::info!("✅ Mapped {} from {}", config.entity, config.input);
    println!("{}", output);

    Ok(())
}
