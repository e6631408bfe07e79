pub mod catalog;
pub mod gpu;
pub mod processor;
pub mod recommend;
pub mod rules;

pub use crate::domain::model::{
    Activity, Classification, GpuForm, GpuSpec, LaptopSpec, ProcessorSpec, RamSpec, StorageSpec,
    Tier,
};
pub use crate::domain::ports::{ConfigProvider, TierClassifier};
pub use gpu::classify_gpu;
pub use processor::classify_processor;
pub use recommend::{classify, recommend, RecommendationEngine};
