// crates/logix-export-cli/src/main.rs

//! Reads a Logix 5000 export from disk and prints the parsed project as JSON.
//!
//! Usage: `logix-export <file> [--format l5k|l5x]`
//!
//! Without `--format` the format is taken from the file extension, falling
//! back to sniffing the content. Set `RUST_LOG=debug` for parse summaries.

use log::{debug, info};
use logix_export::{SourceFormat, load_project_from_str};
use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "usage: logix-export <file> [--format l5k|l5x]";

#[derive(Debug)]
enum CliError {
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(reason) => write!(f, "{}\n{}", reason, USAGE),
        }
    }
}

impl Error for CliError {}

struct Args {
    path: PathBuf,
    format: Option<SourceFormat>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut path = None;
    let mut format = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage(String::from("--format needs a value")))?;
                format = Some(SourceFormat::from_extension(&value).ok_or_else(|| {
                    CliError::Usage(format!("unknown format '{}'", value))
                })?);
            }
            "--help" | "-h" => return Err(CliError::Usage(String::from("help requested"))),
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return Err(CliError::Usage(format!("unexpected argument '{}'", arg))),
        }
    }

    Ok(Args {
        path: path.ok_or_else(|| CliError::Usage(String::from("missing input file")))?,
        format,
    })
}

/// Explicit flag, then file extension, then content sniffing.
fn select_format(path: &Path, explicit: Option<SourceFormat>, content: &str) -> SourceFormat {
    explicit
        .or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(SourceFormat::from_extension)
        })
        .unwrap_or_else(|| SourceFormat::detect(content))
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;

    let content = fs::read_to_string(&args.path)?;
    let format = select_format(&args.path, args.format, &content);
    debug!("Reading {} as {:?}", args.path.display(), format);

    let result = load_project_from_str(&content, format)?;
    info!(
        "Parsed {}: {} tags, {} routines, {} rungs",
        args.path.display(),
        result.tags.len(),
        result.routines.len(),
        result.rungs.len()
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
