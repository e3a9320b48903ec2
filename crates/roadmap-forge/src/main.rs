//! # roadmap-forge
//!
//! Command-line front end.
//!
//! - `roadmap-forge generate --topic <TOPIC> --level <LEVEL> [--json]` generates a
//!   roadmap as a guest and prints it.
//! - `roadmap-forge demo` runs the signed-in flow end to end: sign in, generate
//!   and save, hit the cooldown, favorite, share, open the shared link, list the
//!   dashboard, unshare and delete. Run with `RUST_LOG=debug` to see every
//!   actor request.

use anyhow::{Context, Result};
use chrono::{TimeDelta, Utc};
use clap::{Parser, Subcommand};
use roadmap_forge::config::Settings;
use roadmap_forge::generation::RateLimitState;
use roadmap_forge::lifecycle::{setup_tracing, RoadmapSystem};
use roadmap_forge::model::{Identity, Level, Roadmap, UserId};
use roadmap_forge::service::{GenerateRequest, ManualClock, RoadmapError};
use std::path::PathBuf;
use tracing::{error, info, warn, Instrument};

#[derive(Debug, Parser)]
#[command(name = "roadmap-forge", version, about = "Generate, save and share learning roadmaps")]
struct Cli {
    /// Configuration file (defaults to ./roadmap-forge.toml when present)
    #[arg(long, global = true, env = "ROADMAP_FORGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a roadmap without signing in
    Generate {
        /// What to learn, e.g. "Web Development"
        #[arg(long)]
        topic: String,

        /// beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        level: Level,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the signed-in flow against in-process actors
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("loading configuration")?;

    // Setup tracing once for the entire application
    setup_tracing(&settings.logging.filter);

    match cli.command {
        Command::Generate { topic, level, json } => generate(&settings, topic, level, json).await,
        Command::Demo => demo(&settings).await,
    }
}

async fn generate(settings: &Settings, topic: String, level: Level, json: bool) -> Result<()> {
    let system = RoadmapSystem::start(settings);
    let result = system
        .service
        .generate(
            &Identity::Guest,
            RateLimitState::default(),
            GenerateRequest { topic, level },
        )
        .await;
    system.shutdown().await?;

    let (outcome, _) = result?;
    let roadmap = outcome.roadmap();
    if json {
        println!("{}", serde_json::to_string_pretty(roadmap)?);
    } else {
        print_roadmap(roadmap);
    }
    Ok(())
}

fn print_roadmap(roadmap: &Roadmap) {
    println!("{} ({})", roadmap.topic, roadmap.level);
    for step in &roadmap.steps {
        println!();
        println!("{:>2}. {} [{}]", step.step_number, step.title, step.estimated_time);
        println!("    {}", step.description);
        for resource in &step.resources {
            println!("    - {}: {}", resource.label, resource.url);
        }
    }
}

async fn demo(settings: &Settings) -> Result<()> {
    info!("Starting roadmap demo");

    // Manual time so the cooldown can be skipped instead of slept through
    let clock = ManualClock::new(Utc::now());
    let system = RoadmapSystem::start_with_clock(settings, clock.clone());
    let service = &system.service;

    let me = service
        .sign_in(UserId::new("auth0|ada"), "ada@example.com")
        .instrument(tracing::info_span!("sign_in_flow"))
        .await?;

    let span = tracing::info_span!("generation");
    let (first, state) = async {
        let request = GenerateRequest {
            topic: "JavaScript".to_string(),
            level: Level::Beginner,
        };
        let (first, state) = service
            .generate(&me, RateLimitState::default(), request.clone())
            .await?;

        match service.generate(&me, state, request).await {
            Err(RoadmapError::RateLimited(e)) => warn!(wait_secs = e.seconds, "Cooldown enforced"),
            Err(e) => return Err(e),
            Ok(_) => info!("Cooldown disabled, second roadmap saved"),
        }
        Ok((first, state))
    }
    .instrument(span.clone())
    .await?;

    clock.advance(TimeDelta::from_std(settings.cooldown()).context("cooldown out of range")?);
    let (second, _) = service
        .generate(
            &me,
            state,
            GenerateRequest {
                topic: "Quantum Macrame".to_string(),
                level: Level::Advanced,
            },
        )
        .instrument(span)
        .await?;

    let first_id = first.saved_id().cloned().context("roadmap was not saved")?;
    let second_id = second.saved_id().cloned().context("roadmap was not saved")?;

    let span = tracing::info_span!("sharing");
    async {
        let favorite = service.toggle_favorite(&me, first_id.clone()).await?;
        info!(id = %first_id, favorite, "Favorite toggled");

        let token = service.share(&me, first_id.clone()).await?;
        let shared = service.shared_roadmap(&token).await?;
        info!(%token, topic = %shared.topic, steps = shared.steps.len(), "Opened shared link");

        service.unshare(&me, first_id.clone()).await?;
        match service.shared_roadmap(&token).await {
            Err(e) => info!(error = %e, "Shared link revoked"),
            Ok(_) => error!("Shared link still open after unshare"),
        }
        Ok::<_, RoadmapError>(())
    }
    .instrument(span)
    .await?;

    let dashboard = service.dashboard(&me).await?;
    for roadmap in &dashboard {
        info!(
            id = %roadmap.id,
            topic = %roadmap.topic,
            level = %roadmap.level,
            favorite = roadmap.is_favorite,
            steps = roadmap.steps.len(),
            "Dashboard entry"
        );
    }

    service.delete(&me, second_id).await?;
    let remaining = service.dashboard(&me).await?.len();
    info!(remaining, "Roadmap deleted");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
