//! Wire types for the JSON boundary.
//!
//! Requests are decoded loosely (strings as sent by the client), then
//! normalized and validated into a [`LaptopSpec`] before the engine sees them.

use crate::core::rules::normalize;
use crate::domain::model::{GpuForm, GpuSpec, LaptopSpec, ProcessorSpec, RamSpec, StorageSpec};
use crate::utils::error::{Result, TierError};
use crate::utils::validation::{validate_min, validate_positive_float};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorRequest {
    pub manufacturer: String,
    pub brand: String,
    #[serde(default)]
    pub modifier: String,
    pub generation: u32,
    pub cores: u32,
    pub clock_speed_ghz: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuRequest {
    pub form: String,
    pub manufacturer: String,
    pub brand_prefix: String,
    #[serde(default)]
    pub cores: Option<u32>,
    #[serde(default)]
    pub vram_gb: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamRequest {
    pub size_gb: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageRequest {
    pub size_gb: u32,
    pub is_ssd: bool,
}

/// Body of `POST /recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub processor: ProcessorRequest,
    pub gpu: GpuRequest,
    pub ram: RamRequest,
    pub storage: StorageRequest,
}

impl RecommendRequest {
    /// Lower-cases string fields and rejects values the engine must never see.
    pub fn into_spec(self) -> Result<LaptopSpec> {
        let processor = self.processor;
        validate_min("processor.cores", processor.cores, 1)?;
        validate_positive_float("processor.clock_speed_ghz", processor.clock_speed_ghz)?;

        let form = GpuForm::parse(&self.gpu.form).ok_or_else(|| {
            TierError::validation(
                "gpu.form",
                format!("expected 'integrated' or 'dedicated', got '{}'", self.gpu.form),
            )
        })?;

        // integrated 不使用 VRAM 與核心數
        let (gpu_cores, vram_gb) = match form {
            GpuForm::Dedicated => (self.gpu.cores.unwrap_or(0), self.gpu.vram_gb.unwrap_or(0)),
            GpuForm::Integrated => (0, 0),
        };

        Ok(LaptopSpec {
            processor: ProcessorSpec {
                manufacturer: normalize(&processor.manufacturer),
                brand: normalize(&processor.brand),
                modifier: normalize(&processor.modifier),
                generation: processor.generation,
                cores: processor.cores,
                clock_speed_ghz: processor.clock_speed_ghz,
            },
            gpu: GpuSpec {
                form,
                manufacturer: normalize(&self.gpu.manufacturer),
                brand_prefix: normalize(&self.gpu.brand_prefix),
                cores: gpu_cores,
                vram_gb,
            },
            ram: RamSpec {
                size_gb: self.ram.size_gb,
            },
            storage: StorageSpec {
                size_gb: self.storage.size_gb,
                is_ssd: self.storage.is_ssd,
            },
        })
    }
}
