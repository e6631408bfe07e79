#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_origin, validate_range, Validate};
use toml_config::{TomlConfig, DEFAULT_HOST, DEFAULT_PORT};

/// 合併檔案與命令列後的最終伺服器設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            json_logs: false,
            verbose: false,
        }
    }
}

impl From<TomlConfig> for ServerSettings {
    fn from(config: TomlConfig) -> Self {
        Self {
            host: config.server.host,
            port: config.server.port,
            allowed_origins: config.cors.allowed_origins,
            json_logs: config.logging.json,
            verbose: config.logging.verbose,
        }
    }
}

impl ServerSettings {
    /// 命令列參數覆蓋檔案設定
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Self::from(config)
            }
            None => Self::default(),
        };

        if let Some(host) = &cli.host {
            settings.host = host.clone();
        }
        if let Some(port) = cli.port {
            settings.port = port;
        }
        if !cli.allowed_origins.is_empty() {
            settings.allowed_origins = cli.allowed_origins.clone();
        }
        settings.json_logs |= cli.json_logs;
        settings.verbose |= cli.verbose;

        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProvider for ServerSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        // port 0 會讓作業系統隨機挑選
        validate_range("port", self.port, 1, u16::MAX)?;
        for origin in &self.allowed_origins {
            validate_origin("allowed_origins", origin)?;
        }
        Ok(())
    }
}
