use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use astral_chart::{BirthRecord, NatalChart};
use astral_config::EngineConfig;
use astral_core::sign_and_degree;
use astral_reading::{Engine, QuestionMode};
use astral_time::Instant;

#[derive(Parser)]
#[command(name = "astral", about = "Western astrology engine CLI")]
struct Cli {
    /// Engine configuration (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart for a birth record
    Chart {
        /// Birth record (TOML)
        birth: PathBuf,
    },
    /// Daily report: transits, category scores, Moon phase
    Daily {
        /// Birth record (TOML)
        birth: PathBuf,
        /// RFC 3339 instant (default: now, UTC)
        #[arg(long)]
        at: Option<String>,
        /// Profile identifier echoed in the report (default: record name)
        #[arg(long)]
        profile: Option<String>,
    },
    /// Answer a question against the day's report
    Ask {
        /// Birth record (TOML)
        birth: PathBuf,
        /// The question, e.g. "Should I text my ex tonight?"
        question: String,
        /// RFC 3339 instant (default: now, UTC)
        #[arg(long)]
        at: Option<String>,
        /// Open-ended guidance instead of a yes/no question
        #[arg(long)]
        guidance: bool,
    },
    /// Compatibility of two birth records
    Synastry {
        /// First birth record (TOML)
        first: PathBuf,
        /// Second birth record (TOML)
        second: PathBuf,
    },
    /// Sign and degree of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn load_engine(path: Option<&Path>) -> Result<Engine> {
    let config = match path {
        Some(p) => EngineConfig::load(p)
            .with_context(|| format!("loading engine config {}", p.display()))?,
        None => EngineConfig::default(),
    };
    Ok(Engine::new(config)?)
}

fn load_birth(path: &Path) -> Result<BirthRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading birth record {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing birth record {}", path.display()))
}

fn chart_for(engine: &Engine, path: &Path) -> Result<NatalChart> {
    let birth = load_birth(path)?;
    engine
        .build_chart(&birth)
        .with_context(|| format!("building chart for {}", birth.name))
}

fn instant_or_now(at: Option<&str>) -> Result<Instant> {
    match at {
        Some(s) => s.parse().with_context(|| format!("parsing instant {s:?}")),
        None => Ok(Instant::from_datetime(&chrono::Utc::now().fixed_offset())),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { lon } => {
            println!("{}", sign_and_degree(lon));
            Ok(())
        }
        Commands::Chart { birth } => {
            let engine = load_engine(cli.config.as_deref())?;
            print_json(&chart_for(&engine, &birth)?)
        }
        Commands::Daily { birth, at, profile } => {
            let engine = load_engine(cli.config.as_deref())?;
            let chart = chart_for(&engine, &birth)?;
            let instant = instant_or_now(at.as_deref())?;
            let profile = profile.unwrap_or_else(|| chart.birth.name.clone());
            print_json(&engine.daily_report(&chart, instant, &profile))
        }
        Commands::Ask {
            birth,
            question,
            at,
            guidance,
        } => {
            let engine = load_engine(cli.config.as_deref())?;
            let chart = chart_for(&engine, &birth)?;
            let instant = instant_or_now(at.as_deref())?;
            let report = engine.daily_report(&chart, instant, &chart.birth.name);
            let mode = if guidance {
                QuestionMode::Guidance
            } else {
                QuestionMode::YesNo
            };
            let result = engine.ask(&question, mode, &report);
            log::info!("{} -> {} ({})", question, result.verdict, result.score);
            print_json(&result)
        }
        Commands::Synastry { first, second } => {
            let engine = load_engine(cli.config.as_deref())?;
            let a = chart_for(&engine, &first)?;
            let b = chart_for(&engine, &second)?;
            print_json(&engine.synastry(&a, &b))
        }
    }
}
