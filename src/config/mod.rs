#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "C#",
    "Go",
    "Ruby",
    "PHP",
    "Shell",
    "Scala",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub survey: SurveySection,
    pub head_hunter: HeadHunterConfig,
    pub super_job: SuperJobConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySection {
    pub languages: Vec<String>,
}

impl Default for SurveySection {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub enabled: bool,
    pub label: String,
    pub endpoint: String,
    pub area: u32,
    /// Only vacancies published within this many days are requested.
    pub period_days: u32,
    pub per_page: u32,
    pub currency: String,
    pub only_with_salary: bool,
    pub user_agent: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: "HeadHunter Moscow".to_string(),
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: 1,
            period_days: 30,
            per_page: 100,
            currency: "RUR".to_string(),
            only_with_salary: false,
            user_agent: concat!("salary-survey/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub enabled: bool,
    pub label: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub town: String,
    pub count: u32,
    pub currency: String,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: "SuperJob Moscow".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            api_key: None,
            api_key_env: "SJ_API_KEY".to_string(),
            town: "Москва".to_string(),
            count: 100,
            currency: "rub".to_string(),
        }
    }
}

impl SuperJobConfig {
    /// 取得 API 金鑰：先看設定檔，再看環境變數
    pub fn resolve_api_key(&self) -> Result<String> {
        let configured = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.contains("${"));
        if let Some(key) = configured {
            return Ok(key.to_string());
        }

        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SurveyError::MissingCredentialError {
                variable: self.api_key_env.clone(),
            })
    }
}

impl SurveyConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SurveyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SJ_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SurveyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn languages(&self) -> &[String] {
        &self.survey.languages
    }
}

impl Validate for SurveyConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("survey.languages", &self.survey.languages)?;

        if self.head_hunter.enabled {
            let hh = &self.head_hunter;
            validate_url("head_hunter.endpoint", &hh.endpoint)?;
            validate_positive_number("head_hunter.per_page", hh.per_page, 1)?;
            validate_positive_number("head_hunter.period_days", hh.period_days, 1)?;
            validate_non_empty_string("head_hunter.currency", &hh.currency)?;
        }

        if self.super_job.enabled {
            let sj = &self.super_job;
            validate_url("super_job.endpoint", &sj.endpoint)?;
            validate_positive_number("super_job.count", sj.count, 1)?;
            validate_non_empty_string("super_job.currency", &sj.currency)?;
            validate_non_empty_string("super_job.api_key_env", &sj.api_key_env)?;
        }

        if !self.head_hunter.enabled && !self.super_job.enabled {
            return Err(SurveyError::ConfigValidationError {
                field: "sources".to_string(),
                message: "At least one job board must be enabled".to_string(),
            });
        }

        Ok(())
    }
}
