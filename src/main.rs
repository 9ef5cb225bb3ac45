use clap::Parser;
use rashi_mailer::config::JobConfig;
use rashi_mailer::core::{ConfigProvider, Mailer, Storage};
use rashi_mailer::utils::{logger, validation::Validate};
use rashi_mailer::{
    CliConfig, DeliverySummary, HoroscopeEngine, LocalStorage, OutboxMailer, SmtpConfig, SmtpMailer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting rashi-mailer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Fold in the job file before validating anything.
    let mut smtp_from_job: Option<SmtpConfig> = None;
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading job file: {}", path);
        let job = match JobConfig::from_file(&path) {
            Ok(job) => job,
            Err(e) => {
                eprintln!("❌ Failed to load job file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        };

        if let Err(e) = job.validate() {
            tracing::error!("❌ Job file validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }

        if job.smtp.is_some() {
            match job.smtp_config() {
                Ok(smtp) => smtp_from_job = Some(smtp),
                Err(e) => {
                    tracing::error!("❌ Job file SMTP settings invalid: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }

        config.apply_job(&job);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // Paths in the config are relative to the working directory.
    let storage = LocalStorage::new(".".to_string());

    let outcome = if config.dry_run {
        tracing::info!(
            "🔍 DRY RUN MODE - emails will be written to {}",
            config.outbox
        );
        let mailer = OutboxMailer::new(storage.clone(), config.outbox.clone());
        run_pipeline(storage, config, mailer, monitor_enabled).await
    } else {
        let smtp = match smtp_from_job {
            Some(smtp) => smtp,
            None => match SmtpConfig::from_env() {
                Ok(smtp) => smtp,
                Err(e) => {
                    tracing::error!("❌ SMTP configuration missing: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            },
        };

        if let Err(e) = smtp.validate() {
            tracing::error!("❌ SMTP configuration invalid: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }

        match SmtpMailer::new(&smtp) {
            Ok(mailer) => run_pipeline(storage, config, mailer, monitor_enabled).await,
            Err(e) => Err(e),
        }
    };

    match outcome {
        Ok(summary) => {
            tracing::info!("✅ Horoscope run completed!");
            println!(
                "📊 Summary: {}/{} emails sent successfully",
                summary.sent, summary.attempted
            );
            if summary.skipped > 0 {
                println!("⚠️  Skipped {} invalid record(s)", summary.skipped);
            }
            if summary.failed > 0 {
                println!("❌ {} delivery failure(s)", summary.failed);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Horoscope run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                rashi_mailer::utils::error::ErrorSeverity::Low => 0,
                rashi_mailer::utils::error::ErrorSeverity::Medium => 2,
                rashi_mailer::utils::error::ErrorSeverity::High => 1,
                rashi_mailer::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_pipeline<S, C, M>(
    storage: S,
    config: C,
    mailer: M,
    monitor_enabled: bool,
) -> rashi_mailer::Result<DeliverySummary>
where
    S: Storage + 'static,
    C: ConfigProvider + 'static,
    M: Mailer + 'static,
{
    let pipeline = rashi_mailer::DailyPipeline::new(storage, config, mailer);
    let engine = HoroscopeEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await
}
