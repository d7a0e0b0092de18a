use std::env;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordgrid_engine::{Config, LetterDistribution, WordStore};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordgrid_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let store = WordStore::load(config.dictionary_path())?;

    // Load letter distribution, falling back to the built-in English table
    let distribution = match config.distribution_path() {
        Some(path) => LetterDistribution::load(path)?,
        None => {
            tracing::info!("DISTRIBUTION_PATH not set, using built-in English weights");
            LetterDistribution::english()
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("check") => {
            for word in &args[1..] {
                let verdict = if store.contains(word) { "found" } else { "not found" };
                println!("{}: {}", word, verdict);
            }
        }
        Some("draw") => {
            let count = args
                .get(1)
                .and_then(|n| n.parse().ok())
                .unwrap_or(config.draw.default_draw_count);
            let rack = draw_rack(&distribution, count)?;
            println!("{}", rack);
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: wordgrid [check WORD... | draw [N]]");
            std::process::exit(2);
        }
        None => {
            println!(
                "{} words ({:?} line endings), {} letters, total weight {}",
                store.word_count(),
                store.line_ending(),
                distribution.len(),
                distribution.total_weight()
            );
            println!("Sample rack: {}", draw_rack(&distribution, config.draw.default_draw_count)?);
        }
    }

    Ok(())
}

fn draw_rack(distribution: &LetterDistribution, count: usize) -> Result<String> {
    let mut rack = String::with_capacity(count);
    for _ in 0..count {
        rack.push(distribution.draw_random_codepoint()?);
    }
    Ok(rack)
}
