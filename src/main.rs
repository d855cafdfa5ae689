//! Vidmarks command-line front end.
//!
//! Every subcommand maps to one bookmark store operation against the
//! storage configured in `settings.json`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use vidmarks::app::App;
use vidmarks::managers::bookmark_store::BookmarkStoreTrait;
use vidmarks::services::settings_engine::SettingsEngineTrait;
use vidmarks::types::bookmark::Bookmark;

#[derive(Parser)]
#[command(name = "vidmarks")]
#[command(about = "Save, tag, search and export video bookmarks", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (default: platform config directory)
    #[arg(long, global = true, env = "VIDMARKS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all bookmarks, most recent first.
    List,

    /// Bookmark a video URL.
    Add {
        url: String,
        /// Seek offset to reopen the video at (e.g. 1m30s)
        #[arg(short, long)]
        timestamp: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete a bookmark by id.
    Delete { id: String },

    /// Filter bookmarks by search term and/or tag.
    Search {
        /// Case-insensitive match against title and tags
        #[arg(short, long)]
        term: Option<String>,
        /// Only bookmarks carrying exactly this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Print every tag in use.
    Tags,

    /// Write all bookmarks to a JSON file.
    Export {
        /// Output path (default: the configured export filename)
        path: Option<PathBuf>,
    },

    /// Replace all bookmarks with the contents of a JSON file.
    Import { path: PathBuf },

    /// Show or edit settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current settings.
    Show,
    /// Set a value by dot-notation key, e.g. `storage.backend json`.
    Set { key: String, value: String },
    /// Restore default settings.
    Reset,
}

fn print_bookmarks(bookmarks: &[Bookmark]) {
    if bookmarks.is_empty() {
        println!("No bookmarks.");
        return;
    }
    for bm in bookmarks {
        println!("{}  {}", bm.id, bm.title);
        println!("    {}", bm.playback_url());
        if !bm.tags.is_empty() {
            println!("    tags: {}", bm.tags.join(", "));
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let cli = Cli::parse();
    let mut app = App::new(cli.config)?;

    match cli.command {
        Command::List => print_bookmarks(&app.store.query(None, None)),
        Command::Add { url, timestamp, tags } => {
            match app.store.add(&url, timestamp.as_deref(), tags.as_deref()).await {
                Ok(bm) => println!("Added {}  {}", bm.id, bm.title),
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
        Command::Delete { id } => app.store.delete(&id)?,
        Command::Search { term, tag } => {
            print_bookmarks(&app.store.query(term.as_deref(), tag.as_deref()))
        }
        Command::Tags => {
            for tag in app.store.distinct_tags() {
                println!("{}", tag);
            }
        }
        Command::Export { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(app.export_filename()));
            std::fs::write(&path, app.store.export()?)?;
            println!("Exported to {}", path.display());
        }
        Command::Import { path } => {
            let data = std::fs::read(&path)?;
            match app.store.import(&data) {
                Ok(count) => println!("Imported {} bookmarks", count),
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
        Command::Config(ConfigCommand::Show) => {
            println!("{}", serde_json::to_string_pretty(app.settings_engine.get_settings())?);
        }
        Command::Config(ConfigCommand::Set { key, value }) => {
            // Bare words are taken as strings, anything JSON-shaped as JSON.
            let value = serde_json::from_str::<serde_json::Value>(&value)
                .unwrap_or(serde_json::Value::String(value));
            app.settings_engine.set_value(&key, value)?;
        }
        Command::Config(ConfigCommand::Reset) => app.settings_engine.reset()?,
    }

    Ok(())
}
