use crate::domain::model::Tier;

/// 將單一元件規格分級；實作必須是全函數，不可失敗
pub trait TierClassifier<S>: Send + Sync {
    fn classify(&self, spec: &S) -> Tier;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    /// 空清單代表允許任何來源
    fn allowed_origins(&self) -> &[String];
}
