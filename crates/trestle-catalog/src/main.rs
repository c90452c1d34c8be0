//! `trestle-catalog` - list and render widget stories.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::io;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use trestle_catalog::Catalog;

#[derive(Parser)]
#[command(name = "trestle-catalog")]
#[command(about = "List and render Trestle widget stories")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List story ids and titles
    List,

    /// Render a story
    Render {
        /// Story id, e.g. components-datatable--with-sorting
        id: String,

        /// Arg overrides as a YAML or JSON mapping, e.g. "loading: true"
        #[arg(long, env = "TRESTLE_ARGS")]
        set: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Serialized markup
    Html,
    /// Markup tree as JSON
    Json,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = Catalog::standard();
    match cli.command {
        Commands::List => {
            for story in catalog.stories() {
                println!("{}\t{}/{}", story.id, story.title, story.name);
            }
        }
        Commands::Render { id, set, format } => {
            info!(story = %id, "rendering");
            let node = catalog
                .render(&id, set.as_deref())
                .with_context(|| format!("failed to render {id}"))?;
            match format {
                Format::Html => println!("{}", node.to_html()),
                Format::Json => println!("{}", serde_json::to_string_pretty(&node)?),
            }
        }
    }
    Ok(())
}
