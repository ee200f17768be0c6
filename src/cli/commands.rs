//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Single-admin article manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where an article body comes from
#[derive(Args, Debug, Default)]
pub struct ContentArgs {
    /// Article body as HTML (or Markdown with --markdown)
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the article body from a file
    #[arg(long, value_name = "PATH")]
    pub content_file: Option<PathBuf>,

    /// Treat the body as Markdown and render it to HTML
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Admin username
        #[arg(long, default_value = "admin")]
        username: String,

        /// Admin password
        #[arg(long, default_value = "admin123")]
        password: String,

        /// Add a few sample articles
        #[arg(long)]
        with_samples: bool,
    },

    /// Log in as the admin
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// End the admin session
    Logout,

    /// Show session state and article counts
    Status,

    /// List published articles, newest first
    Feed,

    /// List all articles, including unpublished ones
    List,

    /// Show one article
    Show {
        /// Article id
        id: String,
    },

    /// Search titles, content and categories
    Search {
        /// Case-insensitive search text
        query: String,
    },

    /// Show article statistics
    Stats,

    /// Publish a new article
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        category: String,

        /// Summary shown in the feed (generated from content when omitted)
        #[arg(long, default_value = "")]
        excerpt: String,

        #[command(flatten)]
        body: ContentArgs,
    },

    /// Edit an existing article
    Edit {
        /// Article id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// New summary (an empty value regenerates it from content)
        #[arg(long)]
        excerpt: Option<String>,

        /// Publish or unpublish the article
        #[arg(long)]
        published: Option<bool>,

        #[command(flatten)]
        body: ContentArgs,
    },

    /// Delete an article
    Delete {
        /// Article id
        id: String,
    },

    /// Change the admin password
    Passwd {
        /// New password
        new_password: String,
    },

    /// Write a dated JSON backup of all data
    Export {
        /// Directory for the backup file
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Replace blog data with the contents of a backup file
    Import {
        /// Backup file produced by 'quire export'
        file: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
