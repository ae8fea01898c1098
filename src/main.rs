use license_compliance::adapters::outbound::cache::CachingKnowledgeRepository;
use license_compliance::adapters::outbound::console::TracingProgressReporter;
use license_compliance::adapters::outbound::filesystem::{
    FileSystemResultsStore, JsonKnowledgeCatalog,
};
use license_compliance::application::use_cases::AnalyzeLicensesUseCase;
use license_compliance::cli::Args;
use license_compliance::config::load_request_from_path;
use license_compliance::shared::error::{ExitCode, LicenseError};
use license_compliance::shared::Result;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(&args);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    // Configuration errors are reported before any store access
    let request = load_request_from_path(&args.config)?;

    // Create adapters (Dependency Injection)
    let results_store = FileSystemResultsStore::open(&args.store)?;
    let knowledge = CachingKnowledgeRepository::new(JsonKnowledgeCatalog::load(&args.catalog)?);
    let progress_reporter = TracingProgressReporter::new();

    tracing::debug!(store = %results_store.root().display(), "results store opened");

    let use_case = AnalyzeLicensesUseCase::new(results_store, knowledge, progress_reporter);
    let response = use_case.execute(request).await?;

    // The forward pointer is the only thing written to stdout
    println!("{}", serde_json::to_string(&response.forward_pointer())?);

    Ok(if response.status().is_success() {
        ExitCode::Success
    } else {
        ExitCode::AnalysisFailed
    })
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<LicenseError>() {
        Some(LicenseError::Config { .. }) | Some(LicenseError::Validation { .. }) => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}
