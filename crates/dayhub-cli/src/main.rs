use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayhub", version, about = "Dayhub personal dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// To-do management
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Calendar event management
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Bookmark management
    Bookmark {
        #[command(subcommand)]
        action: commands::bookmark::BookmarkAction,
    },
    /// Pull external calendar events into the local store
    Sync,
    /// Run the reminder loop until interrupted
    Watch,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Todo { action } => commands::todo::run(action),
        Commands::Event { action } => commands::event::run(action),
        Commands::Bookmark { action } => commands::bookmark::run(action),
        Commands::Sync => commands::sync::run(),
        Commands::Watch => commands::watch::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
