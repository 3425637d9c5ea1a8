use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use kyc_checker::client::{
    load_document, HttpTransport, SubmitOutcome, TextColor, UploadController, UploadForm,
};
use kyc_checker::config::ClientConfig;
use kyc_checker::models::UploadedDocument;
use kyc_checker::utils::KycError;

/// Upload two identity documents and show the verdict
#[derive(Parser)]
#[command(name = "kyc_upload", version)]
struct Cli {
    /// First document (JPEG, PNG or PDF)
    doc1: Option<PathBuf>,

    /// Second document (JPEG, PNG or PDF)
    doc2: Option<PathBuf>,

    #[command(flatten)]
    config: ClientConfig,
}

fn selected(path: Option<&Path>) -> Result<Vec<UploadedDocument>, KycError> {
    path.map(load_document).into_iter().collect()
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let form = match (selected(cli.doc1.as_deref()), selected(cli.doc2.as_deref())) {
        (Ok(doc1), Ok(doc2)) => UploadForm::new(doc1, doc2),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("{}", format!("Could not read document: {}", err).red());
            std::process::exit(1);
        }
    };

    println!("Uploading to {}", cli.config.endpoint);
    let mut controller = UploadController::new(HttpTransport::new(&cli.config));

    match controller.submit(&form).await {
        SubmitOutcome::Rejected(alert) => {
            eprintln!("{}", alert.yellow().bold());
            std::process::exit(2);
        }
        SubmitOutcome::Rendered(rendered) => {
            let text = match rendered.color {
                TextColor::Success => rendered.text.green(),
                TextColor::Warning => rendered.text.red(),
                TextColor::Neutral => rendered.text.normal(),
            };
            println!("{}", text);
        }
    }
}
