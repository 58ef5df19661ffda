use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A job board that can be paged through for one search term.
///
/// Implementations own request building and response parsing; the
/// pagination loop, currency filter and salary estimation are shared.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Human-readable label used as the report title.
    fn label(&self) -> &str;

    /// Only vacancies in this currency contribute a salary estimate.
    fn accepted_currency(&self) -> &str;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}
