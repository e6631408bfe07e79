use crate::core::catalog::{gpu_activities, processor_activities, ram_activities, storage_activities};
use crate::core::gpu::GpuClassifier;
use crate::core::processor::ProcessorClassifier;
use crate::domain::model::{Activity, Classification, GpuSpec, LaptopSpec, ProcessorSpec, Tier};
use crate::domain::ports::TierClassifier;
use std::collections::HashSet;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// 保留第一次出現的位置，後續重複項目丟棄
pub fn dedup_preserving_order<I>(activities: I) -> Vec<Activity>
where
    I: IntoIterator<Item = Activity>,
{
    let mut seen = HashSet::new();
    activities
        .into_iter()
        .filter(|activity| seen.insert(*activity))
        .collect()
}

pub struct RecommendationEngine<P, G>
where
    P: TierClassifier<ProcessorSpec>,
    G: TierClassifier<GpuSpec>,
{
    processor: P,
    gpu: G,
}

impl RecommendationEngine<ProcessorClassifier, GpuClassifier> {
    pub fn new() -> Self {
        Self::with_classifiers(ProcessorClassifier, GpuClassifier)
    }
}

impl Default for RecommendationEngine<ProcessorClassifier, GpuClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, G> RecommendationEngine<P, G>
where
    P: TierClassifier<ProcessorSpec>,
    G: TierClassifier<GpuSpec>,
{
    pub fn with_classifiers(processor: P, gpu: G) -> Self {
        Self { processor, gpu }
    }

    pub fn classify(&self, spec: &LaptopSpec) -> Classification {
        let processor_tier = self.processor.classify(&spec.processor);
        let gpu_tier = self.gpu.classify(&spec.gpu);
        let activities = aggregate(spec, processor_tier, gpu_tier);

        tracing::debug!(
            "Classified laptop: processor={}, gpu={}, activities={}",
            processor_tier,
            gpu_tier,
            activities.len()
        );

        Classification {
            processor_tier,
            gpu_tier,
            activities,
        }
    }

    pub fn recommend(&self, spec: &LaptopSpec) -> Vec<Activity> {
        self.classify(spec).activities
    }
}

fn aggregate(spec: &LaptopSpec, processor_tier: Tier, gpu_tier: Tier) -> Vec<Activity> {
    let candidates = processor_activities(processor_tier)
        .iter()
        .chain(gpu_activities(gpu_tier, spec.gpu.form))
        .chain(ram_activities(&spec.ram))
        .chain(storage_activities(&spec.storage))
        .copied();

    let mut activities = dedup_preserving_order(candidates);
    activities.truncate(MAX_RECOMMENDATIONS);
    activities
}

/// 以預設分類器產生推薦清單
pub fn recommend(spec: &LaptopSpec) -> Vec<Activity> {
    RecommendationEngine::new().recommend(spec)
}

pub fn classify(spec: &LaptopSpec) -> Classification {
    RecommendationEngine::new().classify(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RamSpec, StorageSpec};

    struct FixedClassifier(Tier);

    impl<S> TierClassifier<S> for FixedClassifier {
        fn classify(&self, _spec: &S) -> Tier {
            self.0
        }
    }

    fn spec(gpu: GpuSpec, ram_gb: u32, is_ssd: bool) -> LaptopSpec {
        LaptopSpec {
            processor: ProcessorSpec {
                manufacturer: "intel".to_string(),
                brand: "core".to_string(),
                modifier: "i9".to_string(),
                generation: 12,
                cores: 8,
                clock_speed_ghz: 3.6,
            },
            gpu,
            ram: RamSpec { size_gb: ram_gb },
            storage: StorageSpec { size_gb: 512, is_ssd },
        }
    }

    #[test]
    fn test_dedup_keeps_first_position() {
        let result = dedup_preserving_order([
            Activity::Gaming,
            Activity::Academics,
            Activity::Gaming,
            Activity::Photography,
            Activity::Academics,
        ]);
        assert_eq!(result, vec![Activity::Gaming, Activity::Academics, Activity::Photography]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let once = dedup_preserving_order([Activity::Gaming, Activity::Gaming, Activity::Designing]);
        let twice = dedup_preserving_order(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_engine_with_stub_classifiers() {
        let engine = RecommendationEngine::with_classifiers(
            FixedClassifier(Tier::EntryLevel),
            FixedClassifier(Tier::EntryLevel),
        );
        let laptop = spec(GpuSpec::dedicated("nvidia", "geforce rtx", 4096, 8), 2, false);

        let result = engine.classify(&laptop);

        assert_eq!(result.processor_tier, Tier::EntryLevel);
        assert_eq!(result.gpu_tier, Tier::EntryLevel);
        assert_eq!(
            result.activities,
            vec![Activity::BusinessAndWork, Activity::Academics, Activity::Entertainment]
        );
    }

    #[test]
    fn test_truncates_to_five() {
        let laptop = spec(GpuSpec::dedicated("nvidia", "geforce rtx", 4096, 8), 16, true);
        let result = recommend(&laptop);
        assert_eq!(result.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_ram_and_storage_fill_remaining_slots() {
        let engine = RecommendationEngine::with_classifiers(
            FixedClassifier(Tier::LowMid),
            FixedClassifier(Tier::EntryLevel),
        );
        let laptop = spec(GpuSpec::dedicated("", "", 0, 0), 8, true);

        // 處理器 low-mid + RAM 8GB 重疊，SSD 補上剩餘名額
        assert_eq!(
            engine.recommend(&laptop),
            vec![
                Activity::SoftwareDevelopment,
                Activity::BusinessAndWork,
                Activity::Academics,
                Activity::VideoEditing,
                Activity::AudioProduction,
            ]
        );
    }
}
