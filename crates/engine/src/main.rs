//! Sheetsmith Engine - Command-line entry point.
//!
//! Reads stored records as JSON on stdin and prints results as JSON on
//! stdout. Logs go to stderr.

use std::io::Read;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sheetsmith_domain::TimeUnit;
use sheetsmith_engine::infrastructure::config::EngineConfig;
use sheetsmith_engine::App;

const USAGE: &str = "Usage: sheetsmith-engine <command>

Commands:
  rulesets                              List registered rulesets
  schema <ruleset>                      Print a ruleset schema
  generate <ruleset> [species] [class]  Roll a new character
  sheet [cosmic-modifier]               Derive a sheet view from an entity record on stdin
  advance <hour|day|month> <amount>     Advance the world record on stdin";

fn main() -> anyhow::Result<()> {
    // Load environment from repo root, then the working directory.
    load_dotenv_from_repo_root();
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetsmith_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env().context("loading engine configuration")?;
    tracing::debug!(
        default_ruleset = %config.default_ruleset,
        seeded = config.rng_seed.is_some(),
        "Configuration loaded"
    );
    let app = App::new(config).context("composing engine")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["rulesets"] => {
            for (id, name) in app.use_cases.sheet.list_rulesets() {
                println!("{id}\t{name}");
            }
            Ok(())
        }
        ["schema", ruleset] => print_json(&app.use_cases.sheet.schema(ruleset)),
        ["generate", ruleset, rest @ ..] if rest.len() <= 2 => {
            let species = rest.first().copied().unwrap_or_default();
            let class = rest.get(1).copied().unwrap_or_default();
            print_json(&app.use_cases.sheet.generate(ruleset, species, class))
        }
        ["sheet", rest @ ..] if rest.len() <= 1 => {
            let cosmic_modifier = match rest.first() {
                Some(raw) => raw
                    .parse::<i32>()
                    .with_context(|| format!("cosmic modifier must be an integer, got '{raw}'"))?,
                None => 0,
            };
            let view = app
                .use_cases
                .sheet
                .view_json(&read_stdin()?, cosmic_modifier)?;
            print_json(&view)
        }
        ["advance", unit, amount] => {
            let unit: TimeUnit = unit.parse()?;
            let amount: u32 = amount
                .parse()
                .with_context(|| format!("amount must be a non-negative integer, got '{amount}'"))?;
            let result = app
                .use_cases
                .time
                .advance_json(&read_stdin()?, unit, amount)?;
            tracing::info!(display = %result.display, "World clock now");
            print_json(&result.world)
        }
        [] => anyhow::bail!("{USAGE}"),
        [cmd, ..] => anyhow::bail!("Unknown or malformed command: {cmd}\n\n{USAGE}"),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading record from stdin")?;
    Ok(input)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{json}");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
