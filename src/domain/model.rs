use serde::{Deserialize, Serialize};
use std::fmt;

/// 效能等級，依 entry-level < low-mid < high-mid < high-end 排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    EntryLevel,
    LowMid,
    HighMid,
    HighEnd,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::EntryLevel, Tier::LowMid, Tier::HighMid, Tier::HighEnd];

    /// 降一級；entry-level 已是最低，維持不變
    pub fn demote(self) -> Self {
        match self {
            Tier::HighEnd => Tier::HighMid,
            Tier::HighMid => Tier::LowMid,
            Tier::LowMid | Tier::EntryLevel => Tier::EntryLevel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::EntryLevel => "entry-level",
            Tier::LowMid => "low-mid",
            Tier::HighMid => "high-mid",
            Tier::HighEnd => "high-end",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 推薦用途，固定 14 項
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Video Editing and Production")]
    VideoEditing,
    #[serde(rename = "Animations and 3D Rendering")]
    Animation3d,
    #[serde(rename = "Data Science and Analytics")]
    DataScience,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Gaming")]
    Gaming,
    #[serde(rename = "Live Streaming")]
    LiveStreaming,
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Audio Production")]
    AudioProduction,
    #[serde(rename = "Photography")]
    Photography,
    #[serde(rename = "Designing")]
    Designing,
    #[serde(rename = "Church Presentation")]
    ChurchPresentation,
    #[serde(rename = "Business and Work")]
    BusinessAndWork,
    #[serde(rename = "Academics")]
    Academics,
    #[serde(rename = "Entertainment")]
    Entertainment,
}

impl Activity {
    pub const ALL: [Activity; 14] = [
        Activity::VideoEditing,
        Activity::Animation3d,
        Activity::DataScience,
        Activity::MachineLearning,
        Activity::Gaming,
        Activity::LiveStreaming,
        Activity::SoftwareDevelopment,
        Activity::AudioProduction,
        Activity::Photography,
        Activity::Designing,
        Activity::ChurchPresentation,
        Activity::BusinessAndWork,
        Activity::Academics,
        Activity::Entertainment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Activity::VideoEditing => "Video Editing and Production",
            Activity::Animation3d => "Animations and 3D Rendering",
            Activity::DataScience => "Data Science and Analytics",
            Activity::MachineLearning => "Machine Learning",
            Activity::Gaming => "Gaming",
            Activity::LiveStreaming => "Live Streaming",
            Activity::SoftwareDevelopment => "Software Development",
            Activity::AudioProduction => "Audio Production",
            Activity::Photography => "Photography",
            Activity::Designing => "Designing",
            Activity::ChurchPresentation => "Church Presentation",
            Activity::BusinessAndWork => "Business and Work",
            Activity::Academics => "Academics",
            Activity::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorSpec {
    pub manufacturer: String,
    pub brand: String,
    pub modifier: String,
    pub generation: u32,
    pub cores: u32,
    pub clock_speed_ghz: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuForm {
    Integrated,
    Dedicated,
}

impl GpuForm {
    /// 不分大小寫解析；未知值回傳 None
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "integrated" => Some(GpuForm::Integrated),
            "dedicated" => Some(GpuForm::Dedicated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    pub form: GpuForm,
    pub manufacturer: String,
    pub brand_prefix: String,
    /// 僅 dedicated 有意義
    #[serde(default)]
    pub cores: u32,
    /// 僅 dedicated 有意義
    #[serde(default)]
    pub vram_gb: u32,
}

impl GpuSpec {
    pub fn integrated(manufacturer: &str, brand_prefix: &str) -> Self {
        Self {
            form: GpuForm::Integrated,
            manufacturer: manufacturer.to_string(),
            brand_prefix: brand_prefix.to_string(),
            cores: 0,
            vram_gb: 0,
        }
    }

    pub fn dedicated(manufacturer: &str, brand_prefix: &str, cores: u32, vram_gb: u32) -> Self {
        Self {
            form: GpuForm::Dedicated,
            manufacturer: manufacturer.to_string(),
            brand_prefix: brand_prefix.to_string(),
            cores,
            vram_gb,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamSpec {
    pub size_gb: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSpec {
    pub size_gb: u32,
    pub is_ssd: bool,
}

/// 一台筆電的完整規格，聚合器的輸入單位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopSpec {
    pub processor: ProcessorSpec,
    pub gpu: GpuSpec,
    pub ram: RamSpec,
    pub storage: StorageSpec,
}

/// 分級結果與最終推薦清單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub processor_tier: Tier,
    pub gpu_tier: Tier,
    pub activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::EntryLevel < Tier::LowMid);
        assert!(Tier::LowMid < Tier::HighMid);
        assert!(Tier::HighMid < Tier::HighEnd);
        assert_eq!(Tier::ALL.iter().max(), Some(&Tier::HighEnd));
    }

    #[test]
    fn test_tier_demote_stops_at_entry_level() {
        assert_eq!(Tier::HighEnd.demote(), Tier::HighMid);
        assert_eq!(Tier::LowMid.demote(), Tier::EntryLevel);
        assert_eq!(Tier::EntryLevel.demote(), Tier::EntryLevel);
    }

    #[test]
    fn test_tier_serializes_kebab_case() {
        let json = serde_json::to_string(&Tier::HighMid).unwrap();
        assert_eq!(json, "\"high-mid\"");
        assert_eq!(Tier::EntryLevel.to_string(), "entry-level");
    }

    #[test]
    fn test_activity_serializes_display_name() {
        for activity in Activity::ALL {
            let json = serde_json::to_string(&activity).unwrap();
            assert_eq!(json, format!("\"{}\"", activity.name()));
        }
    }

    #[test]
    fn test_gpu_form_parse_is_case_insensitive() {
        assert_eq!(GpuForm::parse("Integrated"), Some(GpuForm::Integrated));
        assert_eq!(GpuForm::parse(" DEDICATED "), Some(GpuForm::Dedicated));
        assert_eq!(GpuForm::parse("external"), None);
    }
}
