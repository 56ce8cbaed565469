use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use roomplan::catalog::Catalog;
use roomplan::collision::check_layout;
use roomplan::config::EngineConfig;
use roomplan::engine::EngineCore;
use roomplan::error::LayoutError;
use roomplan::model::Room;
use roomplan::reflow::clamp_room;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("{0}")]
    Layout(#[from] LayoutError),
    #[error("write failed: {0}")]
    Output(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "roomplan", about = "Room layout checker and generator")]
struct Cli {
    /// JSON catalog of furniture templates; the built-in catalog when omitted.
    #[arg(long, env = "ROOMPLAN_CATALOG")]
    catalog: Option<PathBuf>,

    /// Pull furniture back inside the room when it shrinks.
    #[arg(long)]
    reclamp: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the furniture templates.
    Catalog,
    /// Report overlapping and out-of-room furniture in a layout file.
    Check { file: PathBuf },
    /// Resize the room of a layout file and print the re-flowed layout.
    Reflow {
        file: PathBuf,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Generate a random non-overlapping layout.
    Random {
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "roomplan failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when a check found problems.
fn run(cli: Cli) -> Result<bool, CliError> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json(&read_file(path)?)?,
        None => Catalog::builtin(),
    };
    let mut config = EngineConfig::from_env()?;
    if cli.reclamp {
        config.reclamp_furniture_on_resize = true;
    }

    match cli.command {
        Command::Catalog => {
            let mut out = io::stdout().lock();
            for t in catalog.templates() {
                writeln!(out, "{:<16} {:>6} × {:<6} zHeight {}", t.name, t.width, t.height, t.elevation)?;
            }
            Ok(true)
        }
        Command::Check { file } => {
            let mut core = EngineCore::with_config(config, catalog, Room::default());
            let report = core.load_layout_json(&read_file(&file)?)?;
            let check = check_layout(&core.store);

            let mut out = io::stdout().lock();
            writeln!(out, "{}: {} furniture, {} openings", file.display(), report.furniture, report.openings)?;
            for name in &report.skipped {
                writeln!(out, "  skipped unknown template '{name}'")?;
            }
            for (a, b) in &check.overlapping {
                writeln!(out, "  overlap: {} / {}", describe(&core, a), describe(&core, b))?;
            }
            for id in &check.out_of_bounds {
                writeln!(out, "  outside room: {}", describe(&core, id))?;
            }
            if check.is_clean() {
                writeln!(out, "  ok")?;
            }
            Ok(check.is_clean())
        }
        Command::Reflow { file, width, height, output } => {
            let mut core = EngineCore::with_config(config, catalog, Room::default());
            core.load_layout_json(&read_file(&file)?)?;
            core.set_room_size(width, height);
            emit(&core, output.as_deref())?;
            Ok(true)
        }
        Command::Random { width, height, count, seed, output } => {
            let mut core = EngineCore::with_config(config, catalog, clamp_room(width, height));
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            core.random_layout(&mut rng, count);
            if core.item_count() < count {
                tracing::warn!(requested = count, placed = core.item_count(), "room too full for every item");
            }
            emit(&core, output.as_deref())?;
            Ok(true)
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.display().to_string(), source })
}

fn emit(core: &EngineCore, output: Option<&Path>) -> Result<(), CliError> {
    let json = core.export_layout_json()?;
    match output {
        Some(path) => fs::write(path, json).map_err(|source| CliError::Io { path: path.display().to_string(), source }),
        None => {
            writeln!(io::stdout().lock(), "{json}")?;
            Ok(())
        }
    }
}

fn describe(core: &EngineCore, id: &roomplan::model::EntityId) -> String {
    core.furniture(id)
        .map_or_else(|| id.to_string(), |f| format!("{} at ({}, {})", f.template_name, f.x, f.y))
}
