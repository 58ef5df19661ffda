use crate::config::SuperJobConfig;
use crate::domain::model::{Vacancy, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, SurveyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct SjVacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SjResponse {
    #[serde(default)]
    objects: Option<Vec<SjVacancy>>,
    #[serde(default)]
    total: Option<u64>,
}

/// SuperJob does not report a page count; it is derived from `total`.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    let pages = total / u64::from(page_size.max(1)) + 1;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

impl SjResponse {
    fn into_page(self, page_size: u32) -> VacancyPage {
        let found = self.total.unwrap_or(0);
        VacancyPage {
            vacancies: self
                .objects
                .unwrap_or_default()
                .into_iter()
                .map(|object| Vacancy {
                    salary_from: object.payment_from,
                    salary_to: object.payment_to,
                    currency: object.currency,
                })
                .collect(),
            pages: page_count(found, page_size),
            found,
        }
    }
}

pub struct SuperJobSource {
    client: Client,
    config: SuperJobConfig,
    api_key: String,
}

impl SuperJobSource {
    pub fn new(config: SuperJobConfig, api_key: String) -> Self {
        Self {
            client: Client::new(),
            config,
            api_key,
        }
    }

    /// 從設定或環境變數取得金鑰後建立，金鑰缺少時直接失敗
    pub fn from_config(config: SuperJobConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        Ok(Self::new(config, api_key))
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn label(&self) -> &str {
        &self.config.label
    }

    fn accepted_currency(&self) -> &str {
        &self.config.currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let params = [
            ("keywords", language.to_string()),
            ("town", self.config.town.clone()),
            ("count", self.config.count.to_string()),
            ("page", page.to_string()),
        ];

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("SuperJob response status: {}", status);
        if !status.is_success() {
            return Err(SurveyError::HttpStatus {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let body: SjResponse = response.json().await?;
        Ok(body.into_page(self.config.count))
    }
}
