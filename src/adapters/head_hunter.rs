use crate::config::HeadHunterConfig;
use crate::domain::model::{Vacancy, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, SurveyError};
use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhVacancy {
    #[serde(default)]
    salary: Option<HhSalary>,
}

/// Missing and `null` fields both fall back to defaults.
#[derive(Debug, Deserialize)]
struct HhResponse {
    #[serde(default)]
    items: Option<Vec<HhVacancy>>,
    #[serde(default)]
    pages: Option<u32>,
    #[serde(default)]
    found: Option<u64>,
}

impl From<HhResponse> for VacancyPage {
    fn from(response: HhResponse) -> Self {
        let vacancies = response
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| item.salary)
            .map(|salary| Vacancy {
                salary_from: salary.from,
                salary_to: salary.to,
                currency: salary.currency,
            })
            .collect();

        VacancyPage {
            vacancies,
            pages: response.pages.unwrap_or(1),
            found: response.found.unwrap_or(0),
        }
    }
}

/// Cut-off date for the `date_from` filter, `period_days` before `today`.
pub fn recency_cutoff(today: NaiveDate, period_days: u32) -> String {
    (today - Duration::days(i64::from(period_days)))
        .format("%Y-%m-%d")
        .to_string()
}

pub struct HeadHunterSource {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunterSource {
    /// hh.ru 拒絕沒有 User-Agent 的請求
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder().user_agent(config.user_agent.clone()).build()?;
        Ok(Self { client, config })
    }

    fn query(&self, language: &str, page: u32, date_from: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("text", format!("программист {}", language)),
            ("area", self.config.area.to_string()),
            ("date_from", date_from.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ];
        if self.config.only_with_salary {
            params.push(("only_with_salary", "true".to_string()));
        }
        params
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    fn label(&self) -> &str {
        &self.config.label
    }

    fn accepted_currency(&self) -> &str {
        &self.config.currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        // 每次請求都重新計算，與呼叫時間對齊
        let date_from = recency_cutoff(Local::now().date_naive(), self.config.period_days);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&self.query(language, page, &date_from))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("HeadHunter response status: {}", status);
        if !status.is_success() {
            return Err(SurveyError::HttpStatus {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let body: HhResponse = response.json().await?;
        Ok(body.into())
    }
}
