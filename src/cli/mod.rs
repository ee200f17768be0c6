//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ContentArgs};
pub use output::{format_article, format_article_list, format_stats};
