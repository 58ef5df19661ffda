use anyhow::Result;
use httpmock::prelude::*;
use salary_survey::config::{HeadHunterConfig, SuperJobConfig};
use salary_survey::core::collector::{collect_statistics, fetch_salaries};
use salary_survey::core::report::render_table;
use salary_survey::utils::error::SurveyError;
use salary_survey::{
    build_sources, HeadHunterSource, LanguageStats, ReportFormat, SuperJobSource, SurveyConfig,
    SurveyEngine,
};

fn head_hunter(server: &MockServer) -> HeadHunterSource {
    HeadHunterSource::new(HeadHunterConfig {
        endpoint: server.url("/vacancies"),
        ..HeadHunterConfig::default()
    })
    .unwrap()
}

fn super_job(server: &MockServer) -> SuperJobSource {
    SuperJobSource::new(
        SuperJobConfig {
            endpoint: server.url("/2.0/vacancies/"),
            ..SuperJobConfig::default()
        },
        "test-key".to_string(),
    )
}

fn python() -> Vec<String> {
    vec!["Python".to_string()]
}

fn config_for(server: &MockServer, languages: Vec<String>) -> SurveyConfig {
    let mut config = SurveyConfig::default();
    config.survey.languages = languages;
    config.head_hunter.endpoint = server.url("/vacancies");
    config.super_job.endpoint = server.url("/2.0/vacancies/");
    config.super_job.api_key = Some("test-key".to_string());
    config
}

#[tokio::test]
async fn test_head_hunter_walks_reported_pages() -> Result<()> {
    let server = MockServer::start();

    let page_mocks: Vec<_> = (0..3)
        .map(|page| {
            server.mock(|when, then| {
                when.method(GET)
                    .path("/vacancies")
                    .query_param("page", page.to_string().as_str());
                then.status(200).json_body(serde_json::json!({
                    "items": [{"salary": {"from": 100000, "to": null, "currency": "RUR"}}],
                    "pages": 3,
                    "found": 250
                }));
            })
        })
        .collect();

    let outcome = fetch_salaries(&head_hunter(&server), "Python").await?;

    for mock in &page_mocks {
        mock.assert_hits(1);
    }
    assert_eq!(outcome.salaries.len(), 3);
    assert_eq!(outcome.vacancies_found, 250);
    Ok(())
}

#[tokio::test]
async fn test_super_job_derives_pages_from_total() -> Result<()> {
    let server = MockServer::start();

    let page_mocks: Vec<_> = (0..3)
        .map(|page| {
            server.mock(|when, then| {
                when.method(GET)
                    .path("/2.0/vacancies/")
                    .header("X-Api-App-Id", "test-key")
                    .query_param("page", page.to_string().as_str());
                then.status(200).json_body(serde_json::json!({
                    "objects": [
                        {"payment_from": 100000, "payment_to": 200000, "currency": "rub"},
                        {"payment_from": 3000, "payment_to": 4000, "currency": "usd"}
                    ],
                    "total": 250
                }));
            })
        })
        .collect();
    let beyond = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/").query_param("page", "3");
        then.status(500);
    });

    let statistics = collect_statistics(&super_job(&server), &python()).await?;

    for mock in &page_mocks {
        mock.assert_hits(1);
    }
    beyond.assert_hits(0);
    assert_eq!(
        statistics.get("Python"),
        Some(&LanguageStats {
            vacancies_found: 250,
            vacancies_processed: 3,
            average_salary: Some(150_000),
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_rub_salary() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "программист Python");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "items": [{"salary": {"from": 100000, "to": 200000, "currency": "RUR"}}],
                "pages": 1,
                "found": 10
            }));
    });

    let statistics = collect_statistics(&head_hunter(&server), &python()).await?;

    api_mock.assert();
    assert_eq!(statistics.len(), 1);
    assert_eq!(
        statistics.get("Python"),
        Some(&LanguageStats {
            vacancies_found: 10,
            vacancies_processed: 1,
            average_salary: Some(150_000),
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_foreign_currency() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(200).json_body(serde_json::json!({
            "items": [{"salary": {"from": 100000, "to": 200000, "currency": "USD"}}],
            "pages": 1,
            "found": 10
        }));
    });

    let statistics = collect_statistics(&head_hunter(&server), &python()).await?;

    api_mock.assert();
    assert_eq!(
        statistics.get("Python"),
        Some(&LanguageStats {
            vacancies_found: 10,
            vacancies_processed: 0,
            average_salary: None,
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_engine_runs_sources_in_order() -> Result<()> {
    let server = MockServer::start();
    let hh_mock = server.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(200).json_body(serde_json::json!({
            "items": [{"salary": {"from": null, "to": 100000, "currency": "RUR"}}],
            "pages": 1,
            "found": 5
        }));
    });
    let sj_mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200).json_body(serde_json::json!({
            "objects": [{"payment_from": 50000, "payment_to": 0, "currency": "rub"}],
            "total": 1
        }));
    });

    let config = config_for(&server, vec!["Go".to_string(), "Rust".to_string()]);
    let engine = SurveyEngine::new(config.survey.languages.clone(), build_sources(&config)?);
    let mut out = Vec::new();
    let reports = engine.run(&mut out, ReportFormat::Table).await?;

    hh_mock.assert_hits(2);
    sj_mock.assert_hits(2);

    let labels: Vec<&str> = reports.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["HeadHunter Moscow", "SuperJob Moscow"]);

    let hh_go = reports[0].1.get("Go").unwrap();
    assert_eq!(hh_go.average_salary, Some(80_000));
    let sj_rust = reports[1].1.get("Rust").unwrap();
    assert_eq!(sj_rust.average_salary, Some(60_000));
    assert_eq!(sj_rust.vacancies_found, 1);

    let expected = format!(
        "{}\n\n{}\n\n",
        render_table(&reports[0].1, "HeadHunter Moscow"),
        render_table(&reports[1].1, "SuperJob Moscow")
    );
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}

#[tokio::test]
async fn test_http_failure_aborts_collection() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(500);
    });

    let languages = vec!["Python".to_string(), "Java".to_string()];
    let result = collect_statistics(&head_hunter(&server), &languages).await;

    api_mock.assert_hits(1);
    assert!(matches!(
        result,
        Err(SurveyError::HttpStatus { status: 500, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_engine_stops_at_failing_source() -> Result<()> {
    let server = MockServer::start();
    let hh_mock = server.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(503);
    });
    let sj_mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200).json_body(serde_json::json!({"objects": [], "total": 0}));
    });

    let config = config_for(&server, python());
    let engine = SurveyEngine::new(config.survey.languages.clone(), build_sources(&config)?);
    let mut out = Vec::new();
    let result = engine.run(&mut out, ReportFormat::Table).await;

    assert!(matches!(
        result,
        Err(SurveyError::HttpStatus { status: 503, .. })
    ));
    assert!(out.is_empty());
    hh_mock.assert_hits(1);
    sj_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_engine_keeps_earlier_report_when_later_source_fails() -> Result<()> {
    let server = MockServer::start();
    let hh_mock = server.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(200).json_body(serde_json::json!({
            "items": [{"salary": {"from": 100000, "to": 200000, "currency": "RUR"}}],
            "pages": 1,
            "found": 10
        }));
    });
    let sj_mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(500);
    });

    let config = config_for(&server, python());
    let engine = SurveyEngine::new(config.survey.languages.clone(), build_sources(&config)?);
    let mut out = Vec::new();
    let result = engine.run(&mut out, ReportFormat::Table).await;

    hh_mock.assert_hits(1);
    sj_mock.assert_hits(1);
    assert!(matches!(
        result,
        Err(SurveyError::HttpStatus { status: 500, .. })
    ));

    let mut statistics = salary_survey::Statistics::new();
    statistics.insert(
        "Python",
        LanguageStats {
            vacancies_found: 10,
            vacancies_processed: 1,
            average_salary: Some(150_000),
        },
    );
    let expected = format!("{}\n\n", render_table(&statistics, "HeadHunter Moscow"));
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}
