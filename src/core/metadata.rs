use crate::domain::model::ResolvedComparison;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn for_comparison(resolved: &ResolvedComparison<'_>) -> Self {
        let primary = resolved.primary;
        let secondary = resolved.secondary;

        Self {
            title: format!(
                "{} {}모델과 {} {} 모델을 비교해 보세요.",
                primary.phone.name, primary.color.name, secondary.phone.name, secondary.color.name
            ),
            description: format!(
                "{}와 {}의 스마트폰 정보를 비교해 보세요.",
                primary.phone.name, secondary.phone.name
            ),
        }
    }
}

impl Default for PageMetadata {
    /// Site-wide metadata, used when no comparison is available.
    fn default() -> Self {
        Self {
            title: "I-Phone 비교하기".to_string(),
            description: "I-Phone을 비교해 보세요.".to_string(),
        }
    }
}
