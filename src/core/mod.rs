pub mod collector;
pub mod engine;
pub mod report;
pub mod salary;

pub use crate::domain::model::{FetchOutcome, LanguageStats, Statistics, Vacancy, VacancyPage};
pub use crate::domain::ports::VacancySource;
pub use crate::utils::error::Result;
