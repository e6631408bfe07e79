//! 各元件等級對應的候選用途清單。所有查表皆為全函數，可能回傳空清單。

use crate::domain::model::{Activity, GpuForm, RamSpec, StorageSpec, Tier};
use Activity::*;

const PROCESSOR_HIGH_END: &[Activity] = &[VideoEditing, Animation3d, DataScience, MachineLearning];
const PROCESSOR_HIGH_MID: &[Activity] = &[SoftwareDevelopment, DataScience, AudioProduction];
const PROCESSOR_LOW_MID: &[Activity] = &[SoftwareDevelopment, BusinessAndWork, Academics];
const PROCESSOR_ENTRY_LEVEL: &[Activity] = &[BusinessAndWork, Academics, Entertainment];

const GPU_HIGH_END: &[Activity] = &[Gaming, Animation3d, MachineLearning, LiveStreaming];
const GPU_HIGH_MID: &[Activity] = &[Gaming, Designing, Photography];
const GPU_INTEGRATED_LOWER: &[Activity] = &[Photography, Designing, ChurchPresentation];
const GPU_DEDICATED_LOW_MID: &[Activity] = &[Gaming];

/// RAM 門檻 (GB)，由大到小，第一個符合者勝出
const RAM_BANDS: &[(u32, &[Activity])] = &[
    (16, &[SoftwareDevelopment, LiveStreaming, VideoEditing]),
    (8, &[SoftwareDevelopment, BusinessAndWork]),
    (4, &[Academics, Entertainment]),
];

const STORAGE_SSD: &[Activity] = &[VideoEditing, AudioProduction];

pub fn processor_activities(tier: Tier) -> &'static [Activity] {
    match tier {
        Tier::HighEnd => PROCESSOR_HIGH_END,
        Tier::HighMid => PROCESSOR_HIGH_MID,
        Tier::LowMid => PROCESSOR_LOW_MID,
        Tier::EntryLevel => PROCESSOR_ENTRY_LEVEL,
    }
}

pub fn gpu_activities(tier: Tier, form: GpuForm) -> &'static [Activity] {
    match (tier, form) {
        (Tier::HighEnd, _) => GPU_HIGH_END,
        (Tier::HighMid, _) => GPU_HIGH_MID,
        (Tier::LowMid | Tier::EntryLevel, GpuForm::Integrated) => GPU_INTEGRATED_LOWER,
        (Tier::LowMid, GpuForm::Dedicated) => GPU_DEDICATED_LOW_MID,
        (Tier::EntryLevel, GpuForm::Dedicated) => &[],
    }
}

pub fn ram_activities(ram: &RamSpec) -> &'static [Activity] {
    RAM_BANDS
        .iter()
        .find(|(min_gb, _)| ram.size_gb >= *min_gb)
        .map(|(_, activities)| *activities)
        .unwrap_or(&[])
}

pub fn storage_activities(storage: &StorageSpec) -> &'static [Activity] {
    if storage.is_ssd {
        STORAGE_SSD
    } else {
        &[]
    }
}
