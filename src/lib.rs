pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{build_sources, HeadHunterSource, SuperJobSource};
pub use config::SurveyConfig;
pub use crate::core::{engine::SurveyEngine, report::ReportFormat};
pub use domain::model::{LanguageStats, Statistics};
pub use utils::error::{Result, SurveyError};
