use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use md2html::{Error, convert_with};

#[derive(Parser)]
#[command(name = "md2html")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Markdown file to read
    input: PathBuf,

    /// HTML file to write (created or overwritten)
    output: PathBuf,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_input(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| {
        log::debug!("Failed to read {}: {e}", path.display());
        Error::MissingInput {
            path: path.to_path_buf(),
        }
    })
}

fn start_dir_for(input_path: &Path) -> &Path {
    input_path.parent().unwrap_or(Path::new("."))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = read_input(&cli.input)?;

    let (cfg, cfg_path) = md2html::config::load(cli.config.as_deref(), start_dir_for(&cli.input))?;
    if let Some(p) = cfg_path {
        log::info!("Using config {}", p.display());
    }

    let output = convert_with(&input, &cfg);
    fs::write(&cli.output, output)?;
    log::debug!("Wrote {}", cli.output.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
