use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use codec::{PlayerState, SnapshotFields};
use tilesnap_tools::{
    demo_transcript, encode_snapshot, encode_state, format_hex, format_inspect_pretty,
    inspect_snapshot, parse_hex,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tilesnap-tools",
    version,
    about = "tilesnap snapshot encoding and inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode field values into checksummed snapshot bytes.
    Encode {
        #[arg(long)]
        x_tile: u8,
        #[arg(long)]
        x_sub: u8,
        #[arg(long)]
        y_tile: u8,
        /// Signed vertical velocity.
        #[arg(long, allow_hyphen_values = true)]
        velocity: i8,
        /// Output format.
        #[arg(long, value_enum, default_value_t = EncodeFormat::Hex)]
        format: EncodeFormat,
    },
    /// Decode snapshot bytes and check their checksum.
    Inspect {
        /// Snapshot bytes as hex, e.g. "4A A1 8D".
        hex: Option<String>,
        /// Read raw snapshot bytes from a file instead.
        #[arg(long, conflicts_with = "hex")]
        file: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
        /// Exit with an error if the checksum does not match.
        #[arg(long)]
        strict: bool,
    },
    /// Run the reference save/load flow.
    Demo,
    /// Encode a player state word.
    State(StateArgs),
}

#[derive(Args)]
struct StateArgs {
    #[arg(long, value_enum, default_value_t = PowerArg::Small)]
    power: PowerArg,
    #[arg(long, value_enum, default_value_t = DirectionArg::Left)]
    direction: DirectionArg,
    #[arg(long, value_enum, default_value_t = EnemyArg::None)]
    enemy: EnemyArg,
    #[arg(long)]
    jumping: bool,
    #[arg(long)]
    running: bool,
    #[arg(long, default_value_t = 0)]
    lives: u8,
    #[arg(long, default_value_t = 0)]
    level: u8,
    /// Output format.
    #[arg(long, value_enum, default_value_t = EncodeFormat::Hex)]
    format: EncodeFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncodeFormat {
    Hex,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Pretty,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PowerArg {
    Small,
    Super,
    Fire,
    Star,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EnemyArg {
    None,
    Goomba,
    Koopa,
    Bowser,
}

impl From<PowerArg> for codec::Power {
    fn from(arg: PowerArg) -> Self {
        match arg {
            PowerArg::Small => Self::Small,
            PowerArg::Super => Self::Super,
            PowerArg::Fire => Self::Fire,
            PowerArg::Star => Self::Star,
        }
    }
}

impl From<DirectionArg> for codec::Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Left => Self::Left,
            DirectionArg::Right => Self::Right,
        }
    }
}

impl From<EnemyArg> for codec::Enemy {
    fn from(arg: EnemyArg) -> Self {
        match arg {
            EnemyArg::None => Self::None,
            EnemyArg::Goomba => Self::Goomba,
            EnemyArg::Koopa => Self::Koopa,
            EnemyArg::Bowser => Self::Bowser,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            x_tile,
            x_sub,
            y_tile,
            velocity,
            format,
        } => {
            let report = encode_snapshot(SnapshotFields {
                x_tile,
                x_sub,
                y_tile,
                velocity_y: velocity,
            });
            match format {
                EncodeFormat::Hex => println!("{}", format_hex(&report.bytes)),
                EncodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
        Command::Inspect {
            hex,
            file,
            format,
            strict,
        } => {
            let bytes = match (hex, file) {
                (Some(hex), _) => parse_hex(&hex).context("parse hex input")?,
                (None, Some(path)) => fs::read(&path)
                    .with_context(|| format!("read snapshot {}", path.display()))?,
                (None, None) => bail!("provide snapshot bytes as hex or with --file"),
            };
            let report = inspect_snapshot(&bytes)?;
            if !report.valid {
                tracing::warn!(
                    stored = report.stored_checksum,
                    computed = report.computed_checksum,
                    "snapshot checksum mismatch"
                );
            }
            match format {
                InspectFormat::Pretty => println!("{}", format_inspect_pretty(&report)),
                InspectFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
            if strict && !report.valid {
                bail!("snapshot failed checksum validation");
            }
        }
        Command::Demo => {
            for line in demo_transcript() {
                println!("{line}");
            }
        }
        Command::State(args) => {
            let mut state = PlayerState::new();
            state.power = args.power.into();
            state.direction = args.direction.into();
            state.enemy = args.enemy.into();
            state.is_jumping = args.jumping;
            state.is_running = args.running;
            state.set_lives(args.lives);
            state.set_level(args.level);
            let report = encode_state(state);
            tracing::debug!(bits = report.bits, "encoded player state");
            match args.format {
                EncodeFormat::Hex => println!("{}", format_hex(&report.bytes)),
                EncodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
    }
    Ok(())
}
