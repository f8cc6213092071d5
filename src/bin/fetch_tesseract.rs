use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use tesseract_assets::app::{App, RunOutcome};
use tesseract_assets::config::{ConfigLoader, DEFAULT_TARGET_DIR, FetchOptions};
use tesseract_assets::domain::AssetSet;
use tesseract_assets::error::FetchError;
use tesseract_assets::http::HttpAssetClient;
use tesseract_assets::output::{ConsoleOutput, JsonOutput, OutputMode};
use tesseract_assets::prompt;

#[derive(Parser)]
#[command(name = "fetch-tesseract")]
#[command(about = "Download the Tesseract.js OCR assets into a project directory")]
#[command(version, author)]
struct Cli {
    #[arg(long, default_value = DEFAULT_TARGET_DIR)]
    target_dir: Utf8PathBuf,

    #[arg(long, value_enum, default_value_t = AssetSet::Full)]
    assets: AssetSet,

    #[arg(long, help = "Skip the check for files already in the target directory")]
    no_confirm: bool,

    #[arg(long, help = "Do not write the .gitignore into the target directory")]
    no_ignore_file: bool,

    #[arg(long, short = 'y', help = "Continue without asking when files already exist")]
    yes: bool,

    #[arg(long, help = "Never read from stdin; existing files abort unless --yes is given")]
    non_interactive: bool,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<FetchError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &FetchError) -> u8 {
    match error {
        FetchError::InvalidFileName(_) | FetchError::DuplicateFileName(_) => 2,
        FetchError::Client(_) => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = ConfigLoader::resolve(FetchOptions {
        target_dir: Some(cli.target_dir),
        assets: cli.assets,
        no_confirm: cli.no_confirm,
        no_ignore_file: cli.no_ignore_file,
        yes: cli.yes,
        non_interactive: cli.non_interactive,
    })?;

    let client = HttpAssetClient::new()?;
    let app = App::new(client, prompt::for_config(&config, output_mode));

    let outcome = match output_mode {
        OutputMode::Human => app.run(&config, &ConsoleOutput)?,
        OutputMode::Json => app.run(&config, &JsonOutput)?,
    };

    if let OutputMode::Json = output_mode {
        match &outcome {
            RunOutcome::Completed(result) => JsonOutput::print_fetch(result).into_diagnostic()?,
            RunOutcome::Declined => JsonOutput::print_declined().into_diagnostic()?,
        }
    }
    Ok(())
}
