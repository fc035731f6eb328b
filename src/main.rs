use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hicolor::models::AppConfig;
use hicolor::services::{self, Operation};
use hicolor_codec::{DitherPolicy, FormatVariant};

#[derive(Parser)]
#[command(name = "hicolor")]
#[command(version)]
#[command(about = "Convert PNG images to and from the HiColor 15/16-bit format")]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML file with default variant and dither policy
    /// (falls back to $HICOLOR_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG image to HiColor
    Encode {
        #[command(flatten)]
        target: TargetArgs,

        /// Source PNG image
        src: PathBuf,

        /// Destination file (default: SRC.hic)
        dest: Option<PathBuf>,
    },
    /// Convert a HiColor image to PNG
    Decode {
        /// Source HiColor image
        src: PathBuf,

        /// Destination file (default: SRC.png)
        dest: Option<PathBuf>,
    },
    /// Reduce a PNG image to HiColor colors and save it as PNG
    Quantize {
        #[command(flatten)]
        target: TargetArgs,

        /// Source PNG image
        src: PathBuf,

        /// Destination file (default: SRC.quant.png)
        dest: Option<PathBuf>,
    },
    /// Print the variant, width and height of a HiColor image
    Info {
        /// HiColor image
        file: PathBuf,
    },
    /// Print the codec version
    Version,
}

/// Variant and dither selection shared by `encode` and `quantize`.
#[derive(Args)]
struct TargetArgs {
    /// 15-bit output (5-5-5)
    #[arg(short = '5', long = "15-bit", conflicts_with = "bits16")]
    bits15: bool,

    /// 16-bit output (5-6-5)
    #[arg(short = '6', long = "16-bit")]
    bits16: bool,

    /// Dither policy: none, bayer, pattern or floyd-steinberg
    #[arg(short, long)]
    dither: Option<DitherPolicy>,
}

impl TargetArgs {
    /// Command-line choice, falling back to the config file.
    fn resolve(&self, config: &AppConfig) -> (FormatVariant, DitherPolicy) {
        let variant = if self.bits15 {
            FormatVariant::Variant15
        } else if self.bits16 {
            FormatVariant::Variant16
        } else {
            config.variant
        };
        (variant, self.dither.unwrap_or(config.dither))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "hicolor=debug"
    } else {
        "hicolor=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Encode { target, src, dest } => {
            let config = AppConfig::load(cli.config.as_deref())?;
            let (variant, dither) = target.resolve(&config);
            let dest = destination(Operation::Encode, &src, dest);
            services::encode(&src, &dest, variant, dither)?;
            tracing::info!(dest = %dest.display(), "Wrote HiColor image");
        }
        Commands::Decode { src, dest } => {
            let dest = destination(Operation::Decode, &src, dest);
            services::decode(&src, &dest)?;
            tracing::info!(dest = %dest.display(), "Wrote PNG image");
        }
        Commands::Quantize { target, src, dest } => {
            let config = AppConfig::load(cli.config.as_deref())?;
            let (variant, dither) = target.resolve(&config);
            let dest = destination(Operation::Quantize, &src, dest);
            services::quantize(&src, &dest, variant, dither)?;
            tracing::info!(dest = %dest.display(), "Wrote quantized PNG image");
        }
        Commands::Info { file } => {
            let meta = services::info(&file)?;
            println!(
                "{} {} {}",
                meta.variant.marker() as char,
                meta.width,
                meta.height
            );
        }
        Commands::Version => {
            println!("{}", hicolor_codec::VERSION);
        }
    }

    Ok(())
}

fn destination(op: Operation, src: &Path, dest: Option<PathBuf>) -> PathBuf {
    dest.unwrap_or_else(|| services::default_destination(op, src))
}
