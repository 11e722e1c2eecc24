// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! cave-export
//!
//! Reads a reduced survey (JSON) and writes it as VRML 2.0, colouring each
//! leg by whether it was surveyed before or after a threshold date.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cave_app_core::{ConfigService, SettingsPort};
use cave_config_fs::FsConfigStore;
use cave_export_port::{export_survey, Survey};
use cave_vrml::{VrmlExporter, DATE_THRESHOLD_KEY, DATE_THRESHOLD_SCHEME_KEY};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Survey document (JSON)
    #[clap(value_name = "SURVEY")]
    input: PathBuf,

    /// Output file; standard output when omitted
    #[clap(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Legs dated on or after this day number are drawn in the "newer" colour
    #[clap(long, allow_negative_numbers = true)]
    threshold: Option<i64>,

    /// Colour scheme index (0-3; out-of-range values are clamped)
    #[clap(long, allow_negative_numbers = true)]
    scheme: Option<i64>,

    /// Read saved settings from this directory instead of the user config dir
    #[clap(long, value_name = "DIR", conflicts_with = "no_user_config")]
    config_dir: Option<PathBuf>,

    /// Ignore saved settings entirely
    #[clap(long)]
    no_user_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Command-line overrides layered over the saved settings.
struct CliSettings {
    overrides: Vec<(&'static str, i64)>,
    saved: Option<ConfigService<FsConfigStore>>,
}

impl CliSettings {
    fn from_args(args: &Args) -> Self {
        let overrides = [
            (DATE_THRESHOLD_KEY, args.threshold),
            (DATE_THRESHOLD_SCHEME_KEY, args.scheme),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect();

        let store = if args.no_user_config {
            None
        } else if let Some(dir) = &args.config_dir {
            Some(Ok(FsConfigStore::at(dir)))
        } else {
            Some(FsConfigStore::new())
        };
        let saved = match store {
            Some(Ok(store)) => Some(ConfigService::new(store)),
            Some(Err(err)) => {
                warn!(%err, "saved settings unavailable, using defaults");
                None
            }
            None => None,
        };

        Self { overrides, saved }
    }
}

impl SettingsPort for CliSettings {
    fn read_int(&self, key: &str, default: i64) -> i64 {
        if let Some((_, value)) = self.overrides.iter().find(|(k, _)| *k == key) {
            return *value;
        }
        self.saved
            .as_ref()
            .map_or(default, |saved| saved.read_int(key, default))
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn write_vrml<W: Write>(out: W, survey: &Survey, settings: &dyn SettingsPort) -> Result<()> {
    let mut exporter = VrmlExporter::new(out, Some(settings));
    export_survey(&mut exporter, survey).context("VRML export failed")?;
    let shapes = exporter.shapes_written();
    exporter
        .into_inner()
        .flush()
        .context("could not flush output")?;
    info!(shapes, "wrote VRML");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let file = File::open(&args.input)
        .with_context(|| format!("could not open survey {}", args.input.display()))?;
    let survey = Survey::from_reader(io::BufReader::new(file))
        .with_context(|| format!("could not load survey {}", args.input.display()))?;
    info!(legs = survey.legs.len(), stations = survey.stations.len(), "loaded survey");

    let settings = CliSettings::from_args(&args);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            write_vrml(BufWriter::new(file), &survey, &settings)
        }
        None => write_vrml(BufWriter::new(io::stdout().lock()), &survey, &settings),
    }
}
