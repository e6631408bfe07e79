use crate::core::rules::{find_policy, first_matching_band, normalize, Band, BrandPolicy, BrandRule};
use crate::domain::model::{ProcessorSpec, Tier};
use crate::domain::ports::TierClassifier;

#[derive(Debug, Clone, Copy)]
pub struct ProcessorThreshold {
    pub cores: u32,
    pub clock_speed_ghz: f64,
    pub generation: u32,
}

pub const PROCESSOR_BANDS: [Band<ProcessorThreshold>; 3] = [
    Band {
        min: ProcessorThreshold { cores: 8, clock_speed_ghz: 3.5, generation: 10 },
        tier: Tier::HighEnd,
    },
    Band {
        min: ProcessorThreshold { cores: 6, clock_speed_ghz: 3.0, generation: 8 },
        tier: Tier::HighMid,
    },
    Band {
        min: ProcessorThreshold { cores: 4, clock_speed_ghz: 2.5, generation: 6 },
        tier: Tier::LowMid,
    },
];

// Apple 系列不看基準，直接給固定等級
pub static PROCESSOR_RULES: [BrandRule; 14] = [
    BrandRule::new("intel", "core", "i9", BrandPolicy::Ceiling(Tier::HighMid)),
    BrandRule::new("intel", "core", "i7", BrandPolicy::Demote(Tier::HighMid)),
    BrandRule::new("intel", "core", "i5", BrandPolicy::Demote(Tier::LowMid)),
    BrandRule::new("intel", "core", "i3", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("intel", "pentium", "", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("intel", "celeron", "", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("amd", "ryzen", "9", BrandPolicy::Ceiling(Tier::HighMid)),
    BrandRule::new("amd", "ryzen", "7", BrandPolicy::Demote(Tier::HighMid)),
    BrandRule::new("amd", "ryzen", "5", BrandPolicy::Demote(Tier::LowMid)),
    BrandRule::new("amd", "ryzen", "3", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("amd", "athlon", "", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("apple", "m3", "", BrandPolicy::Fixed(Tier::HighEnd)),
    BrandRule::new("apple", "m2", "", BrandPolicy::Fixed(Tier::HighMid)),
    BrandRule::new("apple", "m1", "", BrandPolicy::Fixed(Tier::LowMid)),
];

/// 只依核心數、時脈、世代計算的基準等級
pub fn baseline_tier(spec: &ProcessorSpec) -> Tier {
    first_matching_band(&PROCESSOR_BANDS, |min| {
        spec.cores >= min.cores
            && spec.clock_speed_ghz >= min.clock_speed_ghz
            && spec.generation >= min.generation
    })
}

pub fn classify_processor(spec: &ProcessorSpec) -> Tier {
    let manufacturer = normalize(&spec.manufacturer);
    let brand = normalize(&spec.brand);
    let modifier = normalize(&spec.modifier);

    let Some(policy) = find_policy(&PROCESSOR_RULES, &manufacturer, &brand, &modifier) else {
        tracing::debug!(
            "Unrecognized processor {}/{}/{}, falling back to entry-level",
            manufacturer,
            brand,
            modifier
        );
        return Tier::EntryLevel;
    };

    let baseline = baseline_tier(spec);
    let tier = policy.resolve(baseline);
    tracing::debug!(
        "Processor {}/{}/{}: baseline={}, policy={:?}, tier={}",
        manufacturer,
        brand,
        modifier,
        baseline,
        policy,
        tier
    );
    tier
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessorClassifier;

impl TierClassifier<ProcessorSpec> for ProcessorClassifier {
    fn classify(&self, spec: &ProcessorSpec) -> Tier {
        classify_processor(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu(manufacturer: &str, brand: &str, modifier: &str, generation: u32, cores: u32, clock: f64) -> ProcessorSpec {
        ProcessorSpec {
            manufacturer: manufacturer.to_string(),
            brand: brand.to_string(),
            modifier: modifier.to_string(),
            generation,
            cores,
            clock_speed_ghz: clock,
        }
    }

    #[test]
    fn test_baseline_bands() {
        assert_eq!(baseline_tier(&cpu("", "", "", 12, 8, 3.6)), Tier::HighEnd);
        assert_eq!(baseline_tier(&cpu("", "", "", 9, 8, 3.6)), Tier::HighMid);
        assert_eq!(baseline_tier(&cpu("", "", "", 8, 6, 3.0)), Tier::HighMid);
        assert_eq!(baseline_tier(&cpu("", "", "", 6, 4, 2.5)), Tier::LowMid);
        assert_eq!(baseline_tier(&cpu("", "", "", 5, 16, 5.0)), Tier::EntryLevel);
    }

    #[test]
    fn test_intel_i9() {
        assert_eq!(classify_processor(&cpu("intel", "core", "i9", 12, 8, 3.6)), Tier::HighEnd);
        assert_eq!(classify_processor(&cpu("intel", "core", "i9", 8, 6, 3.0)), Tier::HighMid);
        assert_eq!(classify_processor(&cpu("intel", "core", "i9", 1, 1, 1.0)), Tier::HighMid);
    }

    #[test]
    fn test_intel_i7_demotes_unless_high_mid() {
        assert_eq!(classify_processor(&cpu("intel", "core", "i7", 8, 6, 3.0)), Tier::HighMid);
        assert_eq!(classify_processor(&cpu("intel", "core", "i7", 12, 8, 3.6)), Tier::LowMid);
        assert_eq!(classify_processor(&cpu("intel", "core", "i7", 6, 4, 2.5)), Tier::LowMid);
    }

    #[test]
    fn test_intel_i5_demotes_unless_low_mid() {
        assert_eq!(classify_processor(&cpu("intel", "core", "i5", 6, 4, 2.5)), Tier::LowMid);
        assert_eq!(classify_processor(&cpu("intel", "core", "i5", 8, 6, 3.0)), Tier::EntryLevel);
    }

    #[test]
    fn test_budget_lines_always_entry_level() {
        assert_eq!(classify_processor(&cpu("intel", "core", "i3", 12, 8, 3.6)), Tier::EntryLevel);
        assert_eq!(classify_processor(&cpu("intel", "pentium", "gold", 12, 8, 3.6)), Tier::EntryLevel);
        assert_eq!(classify_processor(&cpu("intel", "celeron", "", 12, 8, 3.6)), Tier::EntryLevel);
        assert_eq!(classify_processor(&cpu("amd", "athlon", "silver", 12, 8, 3.6)), Tier::EntryLevel);
    }

    #[test]
    fn test_amd_ryzen_mirrors_intel() {
        assert_eq!(classify_processor(&cpu("amd", "ryzen", "9", 12, 8, 3.6)), Tier::HighEnd);
        assert_eq!(classify_processor(&cpu("amd", "ryzen", "7", 8, 6, 3.0)), Tier::HighMid);
        assert_eq!(classify_processor(&cpu("amd", "ryzen", "5", 6, 4, 2.5)), Tier::LowMid);
        assert_eq!(classify_processor(&cpu("amd", "ryzen", "3", 12, 8, 3.6)), Tier::EntryLevel);
    }

    #[test]
    fn test_apple_ignores_baseline() {
        assert_eq!(classify_processor(&cpu("apple", "m3", "", 0, 0, 0.0)), Tier::HighEnd);
        assert_eq!(classify_processor(&cpu("apple", "m2", "pro", 0, 0, 0.0)), Tier::HighMid);
        assert_eq!(classify_processor(&cpu("apple", "m1", "", 20, 16, 5.0)), Tier::LowMid);
    }

    #[test]
    fn test_case_insensitive_and_unknown() {
        assert_eq!(classify_processor(&cpu("Intel", "CORE", " I9 ", 12, 8, 3.6)), Tier::HighEnd);
        assert_eq!(classify_processor(&cpu("qualcomm", "snapdragon", "x", 12, 8, 3.6)), Tier::EntryLevel);
        assert_eq!(classify_processor(&cpu("", "", "", 0, 0, 0.0)), Tier::EntryLevel);
    }

    #[test]
    fn test_classifier_trait() {
        let classifier = ProcessorClassifier;
        assert_eq!(classifier.classify(&cpu("apple", "m3", "", 0, 0, 0.0)), Tier::HighEnd);
    }
}
