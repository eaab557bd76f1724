pub mod add;
pub mod list;
pub mod menu;
pub mod review;
pub mod reviews;
pub mod search;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use localconnect_common::config::{Config, DEFAULT_DB_PATH};

#[derive(Parser)]
#[command(name = "localconnect")]
#[command(about = "A local business directory with reviews and ratings.")]
#[command(version)]
pub struct CommandLine {
    /// SQLite file holding the directory
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Reduce output (-q hides headers, -qq prints results only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show diagnostics (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive menu
    #[command(alias = "m")]
    Menu,
    /// Register a new business
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        /// City or area
        #[arg(long)]
        location: String,
        /// Phone number or e-mail
        #[arg(long)]
        contact: String,
        #[arg(long)]
        website: Option<String>,
    },
    /// List every business with its current rating
    #[command(alias = "l")]
    List,
    /// Find businesses by location and optionally category
    #[command(alias = "s")]
    Search {
        location: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Leave a review for a business
    #[command(alias = "r")]
    Review,
    /// Show the reviews left for a business
    Reviews { id: i64 },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            db_path: self.db.clone(),
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
