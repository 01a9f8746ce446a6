use garment_sizer::config::Settings;
use garment_sizer::core::{SizeChart, SizingEngine};
use garment_sizer::report::Report;
use garment_sizer::services::PatternExporter;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);
    info!("Starting garment sizer...");

    let chart = match &settings.engine.chart_path {
        Some(path) => match SizeChart::load(path) {
            Ok(chart) => chart,
            Err(e) => {
                error!("Failed to load size chart from {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SizeChart::standard(),
    };

    let engine = SizingEngine::new(Arc::new(chart), settings.engine.variant)
        .with_weighting(settings.effective_weighting());

    info!(
        "Engine initialized: variant={:?}, weighting={:?}, sizes={}",
        engine.variant(),
        engine.weighting(),
        engine.chart().len()
    );

    let request = settings.input.to_request();

    if settings.engine.enforce_bounds {
        if let Err(e) = request.validate_bounds() {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let recommendation = match engine.recommend(&request) {
        Ok(rec) => rec,
        Err(e) => {
            // Only the message is shown; no partial results
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", Report::new(&recommendation, engine.chart()));

    if settings.export.enabled {
        match &recommendation.pattern {
            Some(pattern) => {
                let exporter =
                    PatternExporter::new(&settings.export.directory, &settings.export.file_name);
                if let Err(e) = exporter.write(pattern) {
                    error!("Failed to export pattern measurements: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            None => warn!("Export requested but the {:?} variant produces no pattern", engine.variant()),
        }
    }

    ExitCode::SUCCESS
}
