//! 分級規則的共用元件：門檻帶、品牌政策、字串正規化。

use crate::domain::model::Tier;

/// 依品牌預期將基準等級調整為最終等級
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandPolicy {
    /// 旗艦型號：基準高於預期則保留，否則拉到預期等級
    Ceiling(Tier),
    /// 中階型號：基準等於預期則保留，否則降到預期的下一級
    Demote(Tier),
    /// 固定等級，忽略基準
    Fixed(Tier),
}

impl BrandPolicy {
    pub fn resolve(self, baseline: Tier) -> Tier {
        match self {
            BrandPolicy::Ceiling(expected) => baseline.max(expected),
            BrandPolicy::Demote(expected) => {
                if baseline == expected {
                    expected
                } else {
                    expected.demote()
                }
            }
            BrandPolicy::Fixed(tier) => tier,
        }
    }
}

/// 門檻帶，由上而下評估，第一個符合者勝出
#[derive(Debug, Clone, Copy)]
pub struct Band<T> {
    pub min: T,
    pub tier: Tier,
}

pub fn first_matching_band<T, F>(bands: &[Band<T>], meets: F) -> Tier
where
    F: Fn(&T) -> bool,
{
    bands
        .iter()
        .find(|band| meets(&band.min))
        .map(|band| band.tier)
        .unwrap_or(Tier::EntryLevel)
}

/// 品牌規則：空字串欄位代表不比對
#[derive(Debug, Clone, Copy)]
pub struct BrandRule {
    pub manufacturer: &'static str,
    pub brand: &'static str,
    pub modifier: &'static str,
    pub policy: BrandPolicy,
}

impl BrandRule {
    pub const fn new(
        manufacturer: &'static str,
        brand: &'static str,
        modifier: &'static str,
        policy: BrandPolicy,
    ) -> Self {
        Self {
            manufacturer,
            brand,
            modifier,
            policy,
        }
    }

    fn matches(&self, manufacturer: &str, brand: &str, modifier: &str) -> bool {
        self.manufacturer == manufacturer
            && self.brand == brand
            && (self.modifier.is_empty() || self.modifier == modifier)
    }
}

/// 找出第一條符合的品牌規則；輸入需已正規化
pub fn find_policy(
    rules: &[BrandRule],
    manufacturer: &str,
    brand: &str,
    modifier: &str,
) -> Option<BrandPolicy> {
    rules
        .iter()
        .find(|rule| rule.matches(manufacturer, brand, modifier))
        .map(|rule| rule.policy)
}

/// 去頭尾空白、轉小寫、壓縮連續空白
pub fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}
