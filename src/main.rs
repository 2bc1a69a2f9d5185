use clap::Parser;
use tuntiraportti::config::cli::LogFormat;
use tuntiraportti::utils::{logger, validation::Validate};
use tuntiraportti::{CliConfig, EtlEngine, LocalStorage, ReportError, ReportSettings, TimesheetPipeline};

fn fail(e: &ReportError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting tuntiraportti");
    tracing::debug!("CLI config: {:?}", cli);

    let working_dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let settings = match cli.resolve(&ReportSettings::executable_dir(), &working_dir) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    tracing::info!("📁 Input: {}", settings.input_path.display());
    tracing::info!("📁 Output: {}", settings.output_path.display());
    tracing::debug!(
        "Workday {}h, rounding {:?}, date locale {:?}, output encoding {:?}",
        settings.workday_length,
        settings.rounding,
        settings.date_locale,
        settings.output_encoding
    );

    let pipeline = TimesheetPipeline::new(LocalStorage::default(), settings);
    let engine = EtlEngine::new(pipeline);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no report will be written");
        let rendered = engine
            .preview()
            .and_then(|result| Ok(serde_json::to_string_pretty(&result.summary_rows)?));
        match rendered {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e),
        }
        return;
    }

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Report completed successfully!");
            println!("✅ Report saved to: {}", output_path);
        }
        Err(e) => fail(&e),
    }
}
