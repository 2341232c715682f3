use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copyforge::cli::commands::generate::GenerateOptions;
use copyforge::config::{Config, ConfigLoader};
use copyforge::generate::GenerationMode;

#[derive(Parser)]
#[command(name = "copyforge")]
#[command(
    version,
    about = "Audience-targeted content generation with deterministic quality scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, help = "Load configuration from this file only")]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(help = "What to write about")]
    prompt: String,

    #[arg(
        short,
        long,
        default_value = "general",
        help = "Target platform: twitter, linkedin, email, or any other surface"
    )]
    platform: String,

    #[arg(long, help = "Provider (gemini, mistral, local); defaults from config")]
    provider: Option<String>,

    #[arg(short, long, help = "Sampling temperature (0.0-1.0); defaults from config")]
    temperature: Option<f64>,

    #[arg(
        long,
        help = "Built-in audience profile: general, developers, executives"
    )]
    profile: Option<String>,

    #[arg(long, default_value = "18-65", help = "Audience age group")]
    age_group: String,

    #[arg(long, default_value = "casual reader", help = "Audience persona")]
    persona: String,

    #[arg(long, default_value = "friendly", help = "Desired tone")]
    tone: String,

    #[arg(long, help = "Print the variant set as JSON")]
    json: bool,
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        GenerateOptions {
            prompt: args.prompt,
            platform: args.platform,
            provider: args.provider,
            temperature: args.temperature,
            profile: args.profile,
            age_group: args.age_group,
            persona: args.persona,
            tone: args.tone,
            json: args.json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one scored content variant
    Generate(GenerateArgs),

    /// Generate a primary/alternative pair for A/B comparison
    AbTest(GenerateArgs),

    /// Score existing text without generating anything
    Score {
        #[arg(help = "Text to score; reads stdin when omitted")]
        text: Option<String>,
        #[arg(short, long, default_value = "general", help = "Target platform")]
        platform: String,
        #[arg(long, help = "Print metrics as JSON")]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mcopyforge encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = cli.config;

    match cli.command {
        Commands::Generate(args) => {
            let config = load_config(config_path.as_deref())?;
            let rt = Runtime::new()?;
            rt.block_on(copyforge::cli::commands::generate::run(
                &config,
                args.into(),
                GenerationMode::Single,
            ))?;
        }
        Commands::AbTest(args) => {
            let config = load_config(config_path.as_deref())?;
            let rt = Runtime::new()?;
            rt.block_on(copyforge::cli::commands::generate::run(
                &config,
                args.into(),
                GenerationMode::AbTest,
            ))?;
        }
        Commands::Score {
            text,
            platform,
            json,
        } => {
            copyforge::cli::commands::score::run(text, &platform, json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                copyforge::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                copyforge::cli::commands::config::path()?;
            }
        },
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> copyforge::types::Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}
