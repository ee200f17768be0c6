use clap::Parser;
use quire::application::{init, BlogContext, ConfigService, InitOptions};
use quire::cli::{format_article, format_article_list, format_stats, Cli, Commands, ContentArgs};
use quire::domain::markup::render_markdown;
use quire::domain::{ArticleDraft, ArticlePatch};
use quire::error::{QuireError, Result};
use quire::infrastructure::{Config, FileSystemRepository};
use chrono::Local;
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by QUIRE_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIRE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open() -> Result<BlogContext> {
    BlogContext::open(FileSystemRepository::discover()?)
}

/// Open the workspace and make sure the admin is logged in
fn open_authenticated() -> Result<BlogContext> {
    let ctx = open()?;
    ctx.session.require_login()?;
    Ok(ctx)
}

/// Resolve --content / --content-file / --markdown into stored HTML
fn read_body(args: ContentArgs) -> Result<Option<String>> {
    let raw = match (args.content, args.content_file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)?,
        (None, None) => return Ok(None),
    };

    if args.markdown {
        Ok(Some(render_markdown(&raw)))
    } else {
        Ok(Some(raw))
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("quire - Single-admin article manager");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init {
            path,
            username,
            password,
            with_samples,
        } => {
            let options = InitOptions {
                username,
                password,
                with_samples,
                config: Config::new(),
            };
            let ctx = init(&path, &options)?;

            println!("Initialized quire blog at {}", path.display());
            println!("Admin: {}", options.username);
            if with_samples {
                println!("Articles: {}", ctx.articles.list()?.len());
            }
            Ok(())
        }
        Commands::Login { username, password } => {
            let ctx = open()?;
            if ctx.session.login(&username, &password)? {
                println!("Logged in as {}", username);
                Ok(())
            } else {
                Err(QuireError::InvalidCredentials)
            }
        }
        Commands::Logout => {
            open()?.session.logout()?;
            println!("Logged out");
            Ok(())
        }
        Commands::Status => {
            let ctx = open()?;
            match ctx.session.username()? {
                Some(name) if ctx.session.is_logged_in()? => println!("Logged in as {}", name),
                Some(name) => println!("Not logged in (admin: {})", name),
                None => println!("No admin account"),
            }
            print!("{}", format_stats(&ctx.articles.stats()?));
            Ok(())
        }
        Commands::Feed => {
            println!("{}", format_article_list(&open()?.articles.list_published()?));
            Ok(())
        }
        Commands::List => {
            println!("{}", format_article_list(&open()?.articles.list()?));
            Ok(())
        }
        Commands::Show { id } => {
            print!("{}", format_article(&open()?.articles.get(&id)?));
            Ok(())
        }
        Commands::Search { query } => {
            println!("{}", format_article_list(&open()?.articles.search(&query)?));
            Ok(())
        }
        Commands::Stats => {
            print!("{}", format_stats(&open()?.articles.stats()?));
            Ok(())
        }
        Commands::Add {
            title,
            category,
            excerpt,
            body,
        } => {
            let ctx = open_authenticated()?;
            let content = read_body(body)?.unwrap_or_default();
            let article = ctx
                .articles
                .add(ArticleDraft::new(title, category, content, excerpt))?;
            println!("Published {}", article.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            category,
            excerpt,
            published,
            body,
        } => {
            let ctx = open_authenticated()?;
            let patch = ArticlePatch {
                title,
                category,
                content: read_body(body)?,
                excerpt,
                date: None,
                published,
            };
            if patch.is_empty() {
                return Err(QuireError::InvalidDraft("nothing to change".to_string()));
            }

            let article = ctx
                .articles
                .update(&id, &patch.date(Local::now().date_naive()))?;
            println!("Updated {}", article.id);
            Ok(())
        }
        Commands::Delete { id } => {
            let ctx = open_authenticated()?;
            if ctx.articles.delete(&id)? {
                println!("Deleted {}", id);
                Ok(())
            } else {
                Err(QuireError::NotFound(id))
            }
        }
        Commands::Passwd { new_password } => {
            let ctx = open_authenticated()?;
            if ctx.session.change_password(&new_password)? {
                println!("Password changed");
                Ok(())
            } else {
                Err(QuireError::NoSessionInitialized)
            }
        }
        Commands::Export { output } => {
            let ctx = open_authenticated()?;
            let path = ctx.backup().write_backup(&output)?;
            println!("Backup written to {}", path.display());
            Ok(())
        }
        Commands::Import { file } => {
            let ctx = open_authenticated()?;
            let contents = fs::read_to_string(&file)?;
            let snapshot = ctx.backup().import_json(&contents)?;
            match snapshot.articles {
                Some(articles) => println!("Imported {} articles", articles.len()),
                None => println!("Imported session only"),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("excerpt_length = {}", config.excerpt_length);
                println!("hash_memory_kib = {}", config.hash_memory_kib);
                println!("hash_iterations = {}", config.hash_iterations);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: quire config [--list | <key> [<value>]]");
                println!("Valid keys: excerpt_length, hash_memory_kib, hash_iterations, created");
                Ok(())
            }
        }
    }
}
