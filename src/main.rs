//! CLI entry point for pavilion

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pavilion")]
#[command(version)]
#[command(about = "A static site generator that prerenders remote Markdown pages", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Fetch page sources and generate static files
    #[command(alias = "g")]
    Generate,

    /// Generate and serve the site locally
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// List configured pages
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pavilion=debug,info"
    } else {
        "pavilion=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            pavilion::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Generate => {
            let pavilion = pavilion::Pavilion::new(&base_dir)?;
            tracing::info!("Generating static files...");
            pavilion.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let pavilion = pavilion::Pavilion::new(&base_dir)?;

            // Local preview builds a root site
            tracing::info!("Generating static files...");
            pavilion.generate_dev().await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            pavilion::server::start(&pavilion, &ip, port).await?;
        }

        Commands::Clean => {
            let pavilion = pavilion::Pavilion::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            pavilion.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let pavilion = pavilion::Pavilion::new(&base_dir)?;
            pavilion::commands::list::run(&pavilion)?;
        }

        Commands::Version => {
            println!("pavilion version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
