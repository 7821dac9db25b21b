mod basis;
mod report;
mod runner;

pub use basis::{load_document, resolve_elements, BasisLoader, ExchangeLoader, FileLoader};
pub use runner::convert_all;

use self::report::report_summary;
use crate::config::{Args, Config};
use crate::io::setup_output;
use ::basis::{BasisFormat, DumpOptions, ElementTable};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub struct ConvertApplication {
    args: Args,
    config: Config,
}

impl ConvertApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.log_file.as_ref(), self.args.verbose);

        let table = ElementTable::iupac();
        let job = Job::resolve(&self.args, &self.config, &table)?;
        let loader = job.loader(&self.config, &table)?;
        let doc = load_document(loader.as_ref(), &table, &job.elements)?;
        if doc.atoms.is_empty() {
            return Err(eyre!("Basis set {} has no elements to convert", job.name));
        }
        report_summary(&job.name, &doc, &table);

        let options = DumpOptions {
            name: Some(job.name.clone()),
            description: job.description.clone(),
        };
        let summary = convert_all(
            &doc,
            &table,
            &job.formats,
            &options,
            &job.destination,
            job.overwrite,
        )
        .into_result()?;

        info!(
            "Done: {} written, {} skipped, {} warnings",
            summary.written, summary.skipped, summary.warnings
        );
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = &args.config_file else {
        return Ok(Config::default().with_defaults());
    };
    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

/// Where the Gaussian94 text comes from.
#[derive(Debug, PartialEq)]
enum Source {
    File(PathBuf),
    Exchange(String),
}

/// Conversion job with command-line values merged over the job file.
#[derive(Debug)]
struct Job {
    source: Source,
    elements: Vec<u32>,
    formats: Vec<BasisFormat>,
    destination: PathBuf,
    name: String,
    description: Option<String>,
    overwrite: bool,
}

impl Job {
    fn resolve(args: &Args, config: &Config, table: &ElementTable) -> Result<Self> {
        // a source on the command line replaces whatever the job file names
        let source = match (&args.input, &args.basis) {
            (Some(input), _) => Source::File(PathBuf::from(input)),
            (None, Some(basis)) => Source::Exchange(basis.clone()),
            (None, None) => match (&config.input, &config.basis) {
                (Some(input), _) => Source::File(PathBuf::from(input)),
                (None, Some(basis)) => Source::Exchange(basis.clone()),
                (None, None) => {
                    return Err(eyre!(
                        "Neither an input file nor a basis set name was given"
                    ))
                }
            },
        };

        let element_keys = args
            .elements
            .clone()
            .or_else(|| config.elements.clone())
            .unwrap_or_default();
        let elements = resolve_elements(table, &element_keys)?;

        let format_keys = args
            .formats
            .clone()
            .or_else(|| config.formats.clone())
            .unwrap_or_else(|| vec!["gaussian94".to_string()]);
        let formats = format_keys
            .iter()
            .map(|key| {
                key.parse::<BasisFormat>()
                    .wrap_err_with(|| format!("Unknown output format '{}'", key))
            })
            .collect::<Result<Vec<_>>>()?;

        let name = args
            .name
            .clone()
            .or_else(|| config.name.clone())
            .unwrap_or_else(|| match &source {
                Source::Exchange(basis) => basis.clone(),
                Source::File(path) => file_stem(path),
            });

        Ok(Self {
            source,
            elements,
            formats,
            destination: PathBuf::from(
                args.destination
                    .clone()
                    .or_else(|| config.destination.clone())
                    .unwrap_or_else(|| ".".to_string()),
            ),
            name,
            description: args.description.clone().or_else(|| config.description.clone()),
            overwrite: args.overwrite || config.overwrite.unwrap_or(false),
        })
    }

    fn loader(&self, config: &Config, table: &ElementTable) -> Result<Box<dyn BasisLoader>> {
        match &self.source {
            Source::File(path) => Ok(Box::new(FileLoader { path: path.clone() })),
            Source::Exchange(basis) => {
                let symbols = self
                    .elements
                    .iter()
                    .map(|z| Ok(table.by_atomic_number(*z)?.symbol.clone()))
                    .collect::<::basis::Result<Vec<_>>>()?;
                Ok(Box::new(ExchangeLoader {
                    base_url: config.base_url(),
                    name: basis.clone(),
                    symbols,
                    timeout: Duration::from_secs(config.timeout_secs()),
                }))
            }
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("basis")
        .to_string()
}
