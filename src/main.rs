//! Curator CLI entrypoint.
//!
//! Loads the exported artifacts named by the environment, runs one
//! recommendation request, and prints the recommended article ids one per
//! line. Usage: `curator <user_id> [mode]` where mode is one of `auto`,
//! `cbf`, `cf`, `hybrid` (defaults to `auto`).

use anyhow::Context;

use curator::{Config, RecommendMode, RecommendRequest, Recommender};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);

    let user_id: u64 = args
        .next()
        .context("usage: curator <user_id> [auto|cbf|cf|hybrid]")?
        .parse()
        .context("user_id must be an unsigned integer")?;

    let mode = match args.next() {
        Some(raw) => raw.parse::<RecommendMode>()?,
        None => RecommendMode::Auto,
    };

    let config = Config::from_env()?;
    config.validate()?;

    let engine = Recommender::load(&config)?;
    let resources = engine.resources();
    tracing::info!(
        users = resources.interactions.user_count(),
        articles = resources.interactions.article_count(),
        events = resources.interactions.event_count(),
        embedded = resources.embeddings.len(),
        dim = resources.embeddings.dim(),
        catalog = resources.catalog.is_some(),
        "artifacts loaded"
    );

    let request = RecommendRequest::new(user_id)
        .with_mode(mode)
        .with_alpha(config.alpha)
        .with_history_threshold(config.history_threshold)
        .with_top_n(config.top_n);

    let articles = engine.recommend(&request)?;
    tracing::info!(user_id, mode = %mode, count = articles.len(), "recommendation complete");

    for article_id in articles {
        println!("{article_id}");
    }

    Ok(())
}
