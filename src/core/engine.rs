use crate::core::collector::collect_statistics;
use crate::core::report::{print_report, ReportFormat};
use crate::domain::model::Statistics;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use std::io::Write;

pub struct SurveyEngine {
    languages: Vec<String>,
    sources: Vec<Box<dyn VacancySource>>,
}

impl SurveyEngine {
    pub fn new(languages: Vec<String>, sources: Vec<Box<dyn VacancySource>>) -> Self {
        Self { languages, sources }
    }

    /// Writes each report to `out` as soon as its source completes; a
    /// failing source writes nothing and stops the run.
    pub async fn run<W: Write>(
        &self,
        out: &mut W,
        format: ReportFormat,
    ) -> Result<Vec<(String, Statistics)>> {
        let mut reports = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            tracing::info!(
                "Collecting {} for {} languages",
                source.label(),
                self.languages.len()
            );
            let statistics = collect_statistics(source.as_ref(), &self.languages).await?;
            tracing::info!("✅ {} done", source.label());

            print_report(out, &statistics, source.label(), format)?;
            reports.push((source.label().to_string(), statistics));
        }
        Ok(reports)
    }
}
