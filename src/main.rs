use clap::Parser;
use salary_survey::config::cli::LogFormat;
use salary_survey::utils::{logger, validation::Validate};
use salary_survey::{build_sources, CliArgs, SurveyConfig, SurveyEngine, SurveyError};

fn fail(e: &SurveyError) -> ! {
    tracing::error!(
        "❌ Survey failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // 先載入 .env，讓其中的 RUST_LOG 也能生效
    let dotenv = dotenvy::dotenv();

    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    // .env 不存在時沿用現有環境變數
    if let Err(e) = dotenv {
        tracing::debug!("No .env loaded: {}", e);
    }

    let mut config = match &args.config {
        Some(path) => SurveyConfig::from_file(path).unwrap_or_else(|e| fail(&e)),
        None => SurveyConfig::default(),
    };
    args.apply_to(&mut config);
    tracing::debug!("Surveyed languages: {:?}", config.languages());

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let sources = build_sources(&config).unwrap_or_else(|e| fail(&e));
    let engine = SurveyEngine::new(config.survey.languages.clone(), sources);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = engine.run(&mut stdout, args.format).await {
        fail(&e);
    }
}
