use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tqc_tools::{
    decode_hex, encode_components, format_decode_pretty, format_roundtrip_pretty,
    options_from_flags, roundtrip, ValueKind,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tqc-tools",
    version,
    about = "tqc transform codec encoding and inspection tools"
)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode component values and print the bytes as hex.
    Encode {
        /// Codec to use.
        #[arg(value_enum)]
        kind: ValueKind,
        /// Components in order (x y z, or x y z w for quaternions).
        #[arg(required = true, allow_negative_numbers = true)]
        components: Vec<f32>,
        /// Maximum velocity magnitude (velocity only).
        #[arg(long)]
        max_velocity: Option<f32>,
        /// Reject out-of-range values and non-unit quaternions.
        #[arg(long, conflicts_with = "saturate")]
        strict: bool,
        /// Clamp out-of-range values instead of wrapping.
        #[arg(long)]
        saturate: bool,
    },
    /// Decode hex bytes into component values.
    Decode {
        /// Codec to use.
        #[arg(value_enum)]
        kind: ValueKind,
        /// Encoded bytes as hex.
        hex: String,
        /// Maximum velocity magnitude used at encode time (velocity only).
        #[arg(long)]
        max_velocity: Option<f32>,
        /// Reject quaternion encodings with no valid reconstruction.
        #[arg(long)]
        strict: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Encode then decode values and report the per-component error.
    Roundtrip {
        /// Codec to use.
        #[arg(value_enum)]
        kind: ValueKind,
        /// Components in order (x y z, or x y z w for quaternions).
        #[arg(required = true, allow_negative_numbers = true)]
        components: Vec<f32>,
        /// Maximum velocity magnitude (velocity only).
        #[arg(long)]
        max_velocity: Option<f32>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Encode {
            kind,
            components,
            max_velocity,
            strict,
            saturate,
        } => {
            let options = options_from_flags(strict, saturate);
            let bytes = encode_components(kind, &components, max_velocity, &options)
                .with_context(|| format!("encode {kind:?}"))?;
            println!("{}", hex::encode(bytes));
        }
        Command::Decode {
            kind,
            hex,
            max_velocity,
            strict,
            format,
        } => {
            let options = options_from_flags(strict, false);
            let output = decode_hex(kind, &hex, max_velocity, &options)
                .with_context(|| format!("decode {kind:?}"))?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => println!("{}", format_decode_pretty(&output)),
            }
        }
        Command::Roundtrip {
            kind,
            components,
            max_velocity,
            format,
        } => {
            let options = options_from_flags(false, false);
            let report = roundtrip(kind, &components, max_velocity, &options)
                .with_context(|| format!("roundtrip {kind:?}"))?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => println!("{}", format_roundtrip_pretty(&report)),
            }
        }
    }
    Ok(())
}
