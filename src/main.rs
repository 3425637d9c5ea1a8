// Smart KYC Checker API
// Serves the verification endpoint the upload client talks to.

use clap::Parser;
use kyc_checker::{
    config::ServerConfig,
    processing::{DocumentTextExtractor, OcrProcessor},
    server,
    validation::FraudChecker,
    KycChecker,
};

#[derive(Parser)]
#[command(name = "kyc_checker", version, about = "Cross-check two identity documents over HTTP")]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config;

    log::info!(
        "OCR language {}, name similarity threshold {}%",
        config.lang,
        config.name_threshold
    );

    let ocr = OcrProcessor::new(config.lang.clone(), config.tessdata.clone());
    let checker = KycChecker::new(
        Box::new(DocumentTextExtractor::new(ocr)),
        FraudChecker::new(config.name_threshold),
    );

    if let Err(err) = server::serve(&config, checker).await {
        eprintln!("Error running KYC checker: {}", err);
        std::process::exit(1);
    }
}
