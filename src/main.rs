use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use backprop_tutor::{
    optim::Sgd,
    report::{render_summary, render_table, render_walkthrough, traces_to_csv},
    train::{run, train_epoch},
    SessionConfig, Weights,
};

/// Step through backpropagation on a 2-2-2 sigmoid network.
///
/// Flags override values loaded from `--config`; anything not given keeps
/// the worked-example default.
#[derive(Parser)]
#[command(name = "backprop-tutor", version)]
struct Cli {
    /// JSON session config; flags given on the command line take precedence
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    x1: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    x2: Option<f64>,
    /// Target for output 1
    #[arg(long, allow_negative_numbers = true)]
    y1: Option<f64>,
    /// Target for output 2
    #[arg(long, allow_negative_numbers = true)]
    y2: Option<f64>,
    /// Learning rate
    #[arg(long, allow_negative_numbers = true)]
    lr: Option<f64>,
    /// Number of epochs (2 to 1000)
    #[arg(short, long, value_name = "INT")]
    epochs: Option<usize>,

    #[arg(long, allow_negative_numbers = true)]
    w1: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w2: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w3: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w4: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w5: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w6: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w7: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w8: Option<f64>,

    /// Start from weights drawn uniformly from [-1, 1) instead of the defaults
    #[arg(long)]
    random_weights: bool,
    /// Seed for --random-weights
    #[arg(long, requires = "random_weights")]
    seed: Option<u64>,

    /// Print the first epoch step by step before training
    #[arg(long)]
    show_forward: bool,
    /// Print the whole run as JSON instead of the text report
    #[arg(long)]
    json: bool,
    /// Write the per-epoch traces to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
    /// Save the effective session config as JSON
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

impl Cli {
    /// Layers defaults, the config file, random weights and explicit flags,
    /// in that order.
    fn session_config(&self) -> Result<SessionConfig> {
        let mut cfg = match &self.config {
            Some(path) => SessionConfig::load_json(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if self.random_weights {
            cfg.weights = match self.seed {
                Some(seed) => Weights::random(&mut StdRng::seed_from_u64(seed)),
                None => Weights::random(&mut rand::thread_rng()),
            };
        }

        let overrides = [
            (self.x1, &mut cfg.x1),
            (self.x2, &mut cfg.x2),
            (self.y1, &mut cfg.y1),
            (self.y2, &mut cfg.y2),
            (self.lr, &mut cfg.learning_rate),
            (self.w1, &mut cfg.weights.w1),
            (self.w2, &mut cfg.weights.w2),
            (self.w3, &mut cfg.weights.w3),
            (self.w4, &mut cfg.weights.w4),
            (self.w5, &mut cfg.weights.w5),
            (self.w6, &mut cfg.weights.w6),
            (self.w7, &mut cfg.weights.w7),
            (self.w8, &mut cfg.weights.w8),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value;
            }
        }
        if let Some(epochs) = self.epochs {
            cfg.epochs = epochs;
        }

        Ok(cfg)
    }
}

fn init_logging() {
    // Logs go to stderr so stdout stays clean for --json.
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.session_config()?;

    if let Some(path) = &cli.save_config {
        config.save_json(path)
            .with_context(|| format!("saving config to {}", path.display()))?;
        info!(path = %path.display(), "config saved");
    }

    let result = run(config).context("invalid session configuration")?;

    if let Some(path) = &cli.csv {
        std::fs::write(path, traces_to_csv(&result))
            .with_context(|| format!("writing traces to {}", path.display()))?;
        info!(path = %path.display(), "traces written");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if cli.show_forward {
        let before = config.weights;
        let mut after = before;
        let stats = train_epoch(&config, &mut after, &Sgd::new(config.learning_rate), 1);
        println!("{}", render_walkthrough(&config, &before, &stats, &after));
    }

    if let Some(summary) = result.summary() {
        print!("{}", render_summary(&summary));
    }
    println!();
    print!("{}", render_table(&result.report));

    Ok(())
}
