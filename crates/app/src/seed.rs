//! Launch options: seed, player name, and config path.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub player_name: Option<String>,
    pub config_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "maze-run", author, version, about = "Find the goal before the clock runs out")]
struct LaunchArgs {
    /// Seed for the first maze; a fresh one is drawn when absent
    #[arg(long)]
    seed: Option<u64>,
    /// Name shown in the title and the end-of-session message
    #[arg(long)]
    name: Option<String>,
    /// TOML settings file; defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Parses `--seed N`, `--name NAME` and `--config PATH`; each also accepts the
/// `--flag=value` form.
pub fn resolve_launch_options<I, T>(
    args: I,
    generated_seed: u64,
) -> Result<LaunchOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = LaunchArgs::try_parse_from(args)?;
    Ok(LaunchOptions {
        seed: match parsed.seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        player_name: parsed.name,
        config_path: parsed.config,
    })
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
