mod archive;
mod cli;
mod config;
mod display;
mod error;
mod launcher;
mod models;
mod posts;
mod prompt;
mod publish;
mod renderer;
mod vcs;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GBLOG_LOG";

#[derive(Parser)]
#[command(name = "gblog")]
#[command(about = "A personal blog published as GitHub Gists", long_about = None)]
#[command(version)]
struct Cli {
    /// Print debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog repository
    Init {
        /// Blog name (prompts for the details when omitted)
        name: Option<String>,

        /// Directory to create the blog in (defaults to $HOME/<name>)
        #[arg(long, requires = "name")]
        path: Option<PathBuf>,

        /// Skip creating the GitHub repository
        #[arg(long)]
        no_repo: bool,
    },
    /// Create a new post
    New {
        /// Post title (prompts for the details when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Post description
        #[arg(short, long)]
        description: Option<String>,

        /// Make the post public
        #[arg(long, conflicts_with = "private")]
        public: bool,

        /// Make the post private
        #[arg(long)]
        private: bool,
    },
    /// Open a post directory in the file manager
    Edit {
        /// Post ID (e.g. 0001 or 1)
        id: String,
    },
    /// List all posts
    List,
    /// Publish a post as a GitHub Gist
    Publish {
        /// Post ID (e.g. 0001 or 1)
        id: String,

        /// Update the existing gist instead of creating a new one
        #[arg(short, long)]
        update: bool,

        /// Do not open the gist in the browser
        #[arg(long)]
        no_open: bool,
    },
    /// Export all posts to a zip archive
    Export {
        /// Output file (defaults to gblog-export.zip)
        file: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init {
            name,
            path,
            no_repo,
        } => cli::init::run(name, path, no_repo),
        Commands::New {
            title,
            description,
            public,
            private,
        } => {
            let visibility = match (public, private) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cli::new::run(title, description, visibility)
        }
        Commands::Edit { id } => cli::edit::run(&id),
        Commands::List => cli::list::run(),
        Commands::Publish {
            id,
            update,
            no_open,
        } => cli::publish::run(&id, update, no_open),
        Commands::Export { file } => cli::export::run(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
