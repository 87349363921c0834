pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::config::toml_config::TomlConfig;
    use crate::core::json::JsonOptions;
    use crate::domain::EntityKind;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "ticketswitch-json")]
    #[command(about = "Map raw ticketing API payloads into typed entities and re-emit them as JSON")]
    pub struct CliConfig {
        #[arg(long, help = "Raw payload file, relative to the configured payload directory")]
        pub input: String,

        #[arg(long, default_value = "order", help = "Entity kind to map the payload into")]
        pub entity: EntityKind,

        #[arg(long, help = "Optional TOML configuration file")]
        pub config: Option<String>,

        #[arg(long, help = "Emit absent attributes as null")]
        pub show_none: bool,

        #[arg(long, help = "Emit empty sequences and mappings")]
        pub show_empty: bool,

        #[arg(long, help = "Pretty-print the JSON output")]
        pub pretty: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 命令列旗標優先於 TOML 設定
        pub fn json_options(&self, file: &TomlConfig) -> JsonOptions {
            let base = file.json_options();
            JsonOptions::new(
                base.hide_none && !self.show_none,
                base.hide_empty && !self.show_empty,
            )
        }

        pub fn pretty(&self, file: &TomlConfig) -> bool {
            self.pretty || file.pretty()
        }

        pub fn load_file_config(&self) -> Result<TomlConfig> {
            match &self.config {
                Some(path) => TomlConfig::from_file(path),
                None => Ok(TomlConfig::default()),
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_path("input", &self.input)?;
            if let Some(path) = &self.config {
                validation::validate_path("config", path)?;
            }
            Ok(())
        }
    }

}
