use crate::core::salary::{average_salary, predict_salary};
use crate::domain::model::{FetchOutcome, LanguageStats, Statistics};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Walks every result page for `language` and collects salary estimates.
///
/// The page count is taken from the most recent response on every
/// iteration, so a board that changes it mid-walk is followed.
pub async fn fetch_salaries<S: VacancySource + ?Sized>(
    source: &S,
    language: &str,
) -> Result<FetchOutcome> {
    let mut outcome = FetchOutcome::default();
    let mut page = 0;
    let mut pages = 1;

    while page < pages {
        tracing::debug!("{}: requesting '{}' page {}", source.label(), language, page);
        let response = source.fetch_page(language, page).await?;
        pages = response.pages;
        outcome.vacancies_found = response.found;

        for vacancy in response.vacancies {
            if vacancy.currency.as_deref() != Some(source.accepted_currency()) {
                continue;
            }
            if let Some(salary) = predict_salary(vacancy.salary_from, vacancy.salary_to) {
                outcome.salaries.push(salary);
            }
        }

        page += 1;
    }

    Ok(outcome)
}

/// Runs the survey for one source, one language after another.
pub async fn collect_statistics<S: VacancySource + ?Sized>(
    source: &S,
    languages: &[String],
) -> Result<Statistics> {
    let mut statistics = Statistics::new();

    for language in languages {
        let outcome = fetch_salaries(source, language).await?;
        let (average, processed) = average_salary(&outcome.salaries);

        tracing::info!(
            "{}: {} found {}, processed {}, average {:?}",
            source.label(),
            language,
            outcome.vacancies_found,
            processed,
            average
        );

        statistics.insert(
            language.clone(),
            LanguageStats {
                vacancies_found: outcome.vacancies_found,
                vacancies_processed: processed,
                average_salary: average,
            },
        );
    }

    Ok(statistics)
}
