use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tango::config::Config;
use tango::generator::{DirectionMode, SelectionCriteria};
use tango::layout::labels::DocumentLabels;
use tango::render::OutputFormat;
use tango::session::Session;
use tango::store::artifact_store::ArtifactStore;

#[derive(Parser)]
#[command(
    name = "tango",
    version,
    about = "Printable vocabulary tests with answer keys from CSV word lists"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Config file (default: user config dir)")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "More log output (-v info, -vv debug)")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report how many words fall in a number range
    Check {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Draw a test from a word list and write the sheet with its answer key
    Generate {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,

        #[arg(short, long, help = "Question direction")]
        mode: Option<DirectionMode>,

        #[arg(long, help = "Seed for a reproducible test")]
        seed: Option<u64>,

        #[arg(short, long, help = "Output format")]
        format: Option<OutputFormat>,

        #[arg(short, long, help = "Labels preset (ja, en, or a user preset)")]
        labels: Option<String>,

        #[arg(short, long, help = "Directory for the generated sheet")]
        out_dir: Option<PathBuf>,

        #[arg(long, help = "Date printed on the sheet (YYYY-MM-DD, default today)")]
        date: Option<NaiveDate>,
    },
    /// Write a config file with every default spelled out
    InitConfig {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

#[derive(Args)]
struct RangeArgs {
    #[arg(short, long, default_value = "1", help = "First word number (inclusive)")]
    start: String,

    #[arg(short, long, help = "Last word number (inclusive, default: highest in file)")]
    end: Option<String>,

    #[arg(short = 'n', long, help = "Number of questions")]
    count: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tango={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    match cli.command {
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to(&config_path)?;
            println!("{}", config_path.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file, range } => {
            let config = Config::load_from(&config_path)?;
            let default_mode = config.direction_mode;
            let mut session = Session::new(config);
            let loaded = import(&mut session, &file)?;

            let criteria = range.criteria(&session, default_mode)?;
            let availability = session
                .availability(criteria.start_num, criteria.end_num, criteria.question_count)
                .context("no vocabulary loaded")?;

            println!("Loaded {loaded} words from {}", file.display());
            println!("{availability}");
            Ok(if availability.sufficient {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Generate {
            file,
            range,
            mode,
            seed,
            format,
            labels,
            out_dir,
            date,
        } => {
            let config = Config::load_from(&config_path)?;
            let labels_name = labels.unwrap_or_else(|| config.labels.clone());
            let labels = load_labels(&labels_name)?;
            let mode = mode.unwrap_or(config.direction_mode);
            let mut session = match seed {
                Some(seed) => Session::with_seed(config, seed),
                None => Session::new(config),
            };

            let loaded = import(&mut session, &file)?;
            println!("Loaded {loaded} words from {}", file.display());

            let criteria = range.criteria(&session, mode)?;
            let items = session.generate(&criteria)?;
            println!("Generated {} questions", items.len());

            let format = format.unwrap_or(session.config.output_format);
            let renderer = format.renderer(session.config.text_columns, session.config.text_rows);
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&session.config.output_dir));
            let store = ArtifactStore::new(&out_dir)
                .with_context(|| format!("creating output directory {}", out_dir.display()))?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let path = session.export(renderer.as_ref(), &labels, date, &store)?;
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn import(session: &mut Session, file: &Path) -> Result<usize> {
    session
        .import_file(file)
        .with_context(|| format!("importing {}", file.display()))
}

fn load_labels(name: &str) -> Result<DocumentLabels> {
    match DocumentLabels::load(name) {
        Some(labels) => Ok(labels),
        None => bail!(
            "unknown labels preset {name:?} (bundled: {})",
            DocumentLabels::available().join(", ")
        ),
    }
}

impl RangeArgs {
    fn criteria(&self, session: &Session, mode: DirectionMode) -> Result<SelectionCriteria> {
        let end = match &self.end {
            Some(end) => end.clone(),
            None => session
                .records()
                .and_then(|r| r.max_number())
                .map(|n| n.to_string())
                .unwrap_or_default(),
        };
        let count = self
            .count
            .clone()
            .unwrap_or_else(|| session.config.question_count.to_string());

        Ok(SelectionCriteria::from_inputs(
            &self.start,
            &end,
            &count,
            mode.as_str(),
        )?)
    }
}
