use clap::{ArgAction, Parser, Subcommand};
use lp_app::{
    AppError, AppResult, ComparatorConfig, ComparisonSession, FileStorage, STANDARD_VOLUMES_ML,
    Volume, history_summary, result_rows,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "literprice")]
#[command(about = "literprice - compare drink prices per liter", long_about = None)]
struct Cli {
    /// YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the comparison history (overrides the config file)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare items given as VOLUME_ML:PRICE (e.g. 330:5.00 600:8.00 750:12.00)
    Compare {
        /// Items to compare; volumes outside the presets are entered as custom
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Show past comparisons, newest first
    History,
    /// Delete all past comparisons
    ClearHistory,
    /// List the preset volumes
    Volumes,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut config = match &cli.config {
        Some(path) => ComparatorConfig::load(path)?,
        None => ComparatorConfig::default(),
    };
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = Some(dir);
    }

    match cli.command {
        Commands::Compare { items } => cmd_compare(&config, &items),
        Commands::History => cmd_history(&config),
        Commands::ClearHistory => cmd_clear_history(&config),
        Commands::Volumes => {
            cmd_volumes();
            Ok(())
        }
    }
}

/// Split `VOLUME:PRICE` into a picker selection, the typed volume for
/// custom rows, and the raw price.
fn parse_item(item: &str) -> AppResult<(Volume, Option<String>, String)> {
    let (volume, price) = item.split_once(':').ok_or_else(|| {
        AppError::Config(format!("item {:?} is not in VOLUME_ML:PRICE form", item))
    })?;
    let volume = volume.trim();
    let preset = volume
        .parse::<u32>()
        .ok()
        .filter(|ml| STANDARD_VOLUMES_ML.contains(ml));
    Ok(match preset {
        Some(ml) => (Volume::Standard(ml), None, price.to_string()),
        None => (Volume::Custom, Some(volume.to_string()), price.to_string()),
    })
}

fn fill_session(session: &mut ComparisonSession<FileStorage>, items: &[String]) -> AppResult<()> {
    while session.entries().len() < items.len() {
        session.add_entry()?;
    }
    let ids: Vec<_> = session.entries().iter().map(|e| e.id).collect();
    for (id, item) in ids.into_iter().zip(items) {
        let (volume, custom, price) = parse_item(item)?;
        session.set_volume(id, volume)?;
        if let Some(custom) = custom {
            session.set_custom_volume(id, custom)?;
        }
        session.set_price(id, price)?;
    }
    Ok(())
}

fn cmd_compare(config: &ComparatorConfig, items: &[String]) -> AppResult<()> {
    let mut session = ComparisonSession::open(config)?;
    fill_session(&mut session, items)?;

    session.calculate()?;
    let rows = result_rows(session.current_results(), session.currency_symbol());

    println!("{:<8} {:>10} {:>12} {:>14}", "", "Volume", "Price", "Price/L");
    for row in rows {
        println!(
            "{:<8} {:>10} {:>12} {:>14}{}",
            row.label,
            row.volume,
            row.price,
            row.price_per_liter,
            if row.is_lowest_price { "  ✓ cheapest" } else { "" }
        );
    }
    Ok(())
}

fn cmd_history(config: &ComparatorConfig) -> AppResult<()> {
    let session = ComparisonSession::open(config)?;
    if session.history().is_empty() {
        println!("No comparisons recorded yet");
        return Ok(());
    }
    for record in session.history() {
        println!("  {}", history_summary(record, session.currency_symbol()));
    }
    Ok(())
}

fn cmd_clear_history(config: &ComparatorConfig) -> AppResult<()> {
    let mut session = ComparisonSession::open(config)?;
    session.clear_history()?;
    println!("✓ History cleared");
    Ok(())
}

fn cmd_volumes() {
    for volume in Volume::options() {
        match volume {
            Volume::Custom => println!("  any other value is entered as a custom volume"),
            other => println!("  {}", other.label()),
        }
    }
}
