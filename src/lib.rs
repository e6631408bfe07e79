pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{toml_config::TomlConfig, ServerSettings};

pub use crate::core::{classify, classify_gpu, classify_processor, recommend, RecommendationEngine};
pub use domain::model::{
    Activity, Classification, GpuForm, GpuSpec, LaptopSpec, ProcessorSpec, RamSpec, StorageSpec,
    Tier,
};
pub use utils::error::{Result, TierError};
