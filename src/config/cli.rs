use crate::config::SurveyConfig;
use crate::core::report::ReportFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceSelection {
    #[default]
    All,
    HeadHunter,
    SuperJob,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-survey")]
#[command(about = "Average programmer salaries from HeadHunter and SuperJob")]
pub struct CliArgs {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = SourceSelection::All)]
    pub source: SourceSelection,

    #[arg(long, value_delimiter = ',', help = "Override the surveyed languages")]
    pub languages: Vec<String>,

    #[arg(long, help = "Override the HeadHunter recency window in days")]
    pub period_days: Option<u32>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// 命令列參數覆寫設定檔中的對應欄位
    pub fn apply_to(&self, config: &mut SurveyConfig) {
        if !self.languages.is_empty() {
            config.survey.languages = self.languages.clone();
        }
        if let Some(days) = self.period_days {
            config.head_hunter.period_days = days;
        }
        match self.source {
            SourceSelection::All => {}
            SourceSelection::HeadHunter => config.super_job.enabled = false,
            SourceSelection::SuperJob => config.head_hunter.enabled = false,
        }
    }
}
