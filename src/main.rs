use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};

use linkstate_sim::config::{ErrorPolicy, OutputFormat, SimConfig};
use linkstate_sim::script::read_until_blank;
use linkstate_sim::simulator::run_script;

#[derive(Parser)]
#[command(name = "linkstate-sim", about = "Simulate link-state routing over a scripted topology")]
struct Cli {
    /// Script to run; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    on_error: Option<ErrorPolicy>,

    /// Repeat for more log output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(policy) = cli.on_error {
        config.on_error = policy;
    }
    debug!("Using config {:?}", config);

    let input = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_until_blank(BufReader::new(file))?
        }
        None => read_until_blank(io::stdin().lock())?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&input, config, &mut out)?;
    Ok(())
}
