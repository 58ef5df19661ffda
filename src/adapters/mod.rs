// Adapters layer: concrete job-board clients behind the VacancySource port.

pub mod head_hunter;
pub mod super_job;

pub use head_hunter::HeadHunterSource;
pub use super_job::SuperJobSource;

use crate::config::SurveyConfig;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Builds the enabled sources in report order: HeadHunter, then SuperJob.
///
/// The SuperJob key is resolved here, so a missing credential fails
/// before any request is made.
pub fn build_sources(config: &SurveyConfig) -> Result<Vec<Box<dyn VacancySource>>> {
    let mut sources: Vec<Box<dyn VacancySource>> = Vec::new();

    if config.head_hunter.enabled {
        sources.push(Box::new(HeadHunterSource::new(config.head_hunter.clone())?));
    }
    if config.super_job.enabled {
        sources.push(Box::new(SuperJobSource::from_config(config.super_job.clone())?));
    }

    Ok(sources)
}
