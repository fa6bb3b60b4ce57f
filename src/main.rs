use anyhow::{Context, Result, anyhow};
use clap::Parser;
use snake3d::game::GameConfig;
use snake3d::game::config::MAX_AXIS_CELLS;
use snake3d::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake3d")]
#[command(version, about = "Snake on a 3D grid, played through three plane projections")]
struct Cli {
    /// JSON file with game settings; CLI flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells along each axis
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_AXIS_CELLS)))]
    cells: Option<u32>,

    /// Milliseconds between simulation ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(cells) = self.cells {
            config.screen_size = cells.checked_mul(config.unit_size).ok_or_else(|| {
                anyhow!(
                    "--cells {cells} with unit_size {} overflows the screen size",
                    config.unit_size
                )
            })?;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config
            .validate()
            .map_err(|msg| anyhow!("Invalid game configuration: {msg}"))?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::info!(?config, "configuration loaded");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
