use crate::core::rules::{find_policy, first_matching_band, normalize, Band, BrandPolicy, BrandRule};
use crate::domain::model::{GpuForm, GpuSpec, Tier};
use crate::domain::ports::TierClassifier;

#[derive(Debug, Clone, Copy)]
pub struct GpuThreshold {
    pub vram_gb: u32,
    pub cores: u32,
}

pub const DEDICATED_BANDS: [Band<GpuThreshold>; 3] = [
    Band { min: GpuThreshold { vram_gb: 8, cores: 4096 }, tier: Tier::HighEnd },
    Band { min: GpuThreshold { vram_gb: 4, cores: 2048 }, tier: Tier::HighMid },
    Band { min: GpuThreshold { vram_gb: 2, cores: 1024 }, tier: Tier::LowMid },
];

// GPU 只比對 (manufacturer, brand_prefix)，modifier 欄位留空
pub static DEDICATED_RULES: [BrandRule; 8] = [
    BrandRule::new("nvidia", "geforce rtx", "", BrandPolicy::Ceiling(Tier::HighMid)),
    BrandRule::new("nvidia", "geforce gtx", "", BrandPolicy::Demote(Tier::HighMid)),
    BrandRule::new("nvidia", "geforce gt", "", BrandPolicy::Demote(Tier::LowMid)),
    BrandRule::new("nvidia", "geforce mx", "", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("amd", "radeon rx", "", BrandPolicy::Ceiling(Tier::HighMid)),
    BrandRule::new("amd", "radeon vega", "", BrandPolicy::Demote(Tier::HighMid)),
    BrandRule::new("amd", "radeon pro", "", BrandPolicy::Demote(Tier::LowMid)),
    BrandRule::new("intel", "iris xe", "", BrandPolicy::Fixed(Tier::HighMid)),
];

pub static INTEGRATED_RULES: [BrandRule; 7] = [
    BrandRule::new("intel", "iris xe", "", BrandPolicy::Fixed(Tier::HighMid)),
    BrandRule::new("intel", "iris plus", "", BrandPolicy::Fixed(Tier::LowMid)),
    BrandRule::new("intel", "uhd", "", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("intel", "hd", "", BrandPolicy::Fixed(Tier::EntryLevel)),
    BrandRule::new("amd", "radeon vega", "", BrandPolicy::Fixed(Tier::HighMid)),
    BrandRule::new("amd", "radeon r", "", BrandPolicy::Fixed(Tier::LowMid)),
    BrandRule::new("amd", "radeon hd", "", BrandPolicy::Fixed(Tier::EntryLevel)),
];

/// 只依 VRAM 與核心數計算的基準等級 (dedicated 專用)
pub fn dedicated_baseline(spec: &GpuSpec) -> Tier {
    first_matching_band(&DEDICATED_BANDS, |min| {
        spec.vram_gb >= min.vram_gb && spec.cores >= min.cores
    })
}

pub fn classify_gpu(spec: &GpuSpec) -> Tier {
    let manufacturer = normalize(&spec.manufacturer);
    let brand_prefix = normalize(&spec.brand_prefix);

    let (rules, baseline) = match spec.form {
        GpuForm::Dedicated => (&DEDICATED_RULES[..], dedicated_baseline(spec)),
        // integrated 忽略 VRAM 與核心數
        GpuForm::Integrated => (&INTEGRATED_RULES[..], Tier::EntryLevel),
    };

    let tier = find_policy(rules, &manufacturer, &brand_prefix, "")
        .map(|policy| policy.resolve(baseline))
        .unwrap_or(Tier::EntryLevel);

    tracing::debug!(
        "GPU {:?} {}/{}: baseline={}, tier={}",
        spec.form,
        manufacturer,
        brand_prefix,
        baseline,
        tier
    );
    tier
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GpuClassifier;

impl TierClassifier<GpuSpec> for GpuClassifier {
    fn classify(&self, spec: &GpuSpec) -> Tier {
        classify_gpu(spec)
    }
}
