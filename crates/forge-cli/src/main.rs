//! CLI frontend for the Forge hero builder.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "forge",
    about = "Forge: build heroes for tactical fantasy roleplaying",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding saved heroes, homebrew, and options
    #[arg(long, global = true, env = "FORGE_DATA_DIR", default_value = ".forge")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries (ancestries, classes, kits, ...)
    Catalog {
        /// Kind of entry to list (omit for a summary of every kind)
        kind: Option<String>,
    },

    /// List the characteristic arrays a class may use
    Arrays {
        /// Class id (e.g. fury, tactician)
        class: String,
    },

    /// Create a new hero
    New {
        /// Name for the hero
        #[arg(short, long)]
        name: Option<String>,

        /// Campaign setting id (default: from options, else orden)
        #[arg(short, long)]
        setting: Option<String>,
    },

    /// List saved heroes
    List,

    /// Show a hero's sheet, section progress, and open choices
    Show {
        /// Hero id, id prefix, or name
        hero: String,
    },

    /// Change a hero's build (use "none" to clear a selection)
    Edit {
        /// Hero id, id prefix, or name
        hero: String,

        /// Rename the hero
        #[arg(long)]
        name: Option<String>,

        /// Ancestry id
        #[arg(long)]
        ancestry: Option<String>,

        /// Culture id
        #[arg(long)]
        culture: Option<String>,

        /// Environment id (bespoke cultures)
        #[arg(long)]
        environment: Option<String>,

        /// Organization id (bespoke cultures)
        #[arg(long)]
        organization: Option<String>,

        /// Upbringing id (bespoke cultures)
        #[arg(long)]
        upbringing: Option<String>,

        /// Career id
        #[arg(long)]
        career: Option<String>,

        /// Class id
        #[arg(long)]
        class: Option<String>,

        /// Characteristic array number, as listed by `forge arrays`
        #[arg(long)]
        characteristics: Option<usize>,

        /// Subclass id (repeat for classes that take several)
        #[arg(long = "subclass")]
        subclasses: Vec<String>,

        /// Kit id
        #[arg(long)]
        kit: Option<String>,

        /// Complication id
        #[arg(long)]
        complication: Option<String>,
    },

    /// Fill in a skill or language choice
    Choose {
        /// Hero id, id prefix, or name
        hero: String,

        /// Feature id (see `forge show`)
        feature: String,

        /// The picks
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Import a hero from an exported JSON file
    Import {
        /// Path to the .ds-hero file
        file: PathBuf,
    },

    /// Export a hero as JSON or Markdown
    Export {
        /// Hero id, id prefix, or name
        hero: String,

        /// Output format: json, markdown
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a hero
    Delete {
        /// Hero id, id prefix, or name
        hero: String,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_path();

    let result = match cli.command {
        Commands::Catalog { kind } => commands::catalog::run(data_dir, kind.as_deref()),
        Commands::Arrays { class } => commands::arrays::run(data_dir, &class),
        Commands::New { name, setting } => {
            commands::new::run(data_dir, name.as_deref(), setting.as_deref())
        }
        Commands::List => commands::list::run(data_dir),
        Commands::Show { hero } => commands::show::run(data_dir, &hero),
        Commands::Edit {
            hero,
            name,
            ancestry,
            culture,
            environment,
            organization,
            upbringing,
            career,
            class,
            characteristics,
            subclasses,
            kit,
            complication,
        } => {
            let changes = commands::edit::Changes {
                name,
                ancestry,
                culture,
                environment,
                organization,
                upbringing,
                career,
                class,
                characteristics,
                subclasses,
                kit,
                complication,
            };
            commands::edit::run(data_dir, &hero, &changes)
        }
        Commands::Choose {
            hero,
            feature,
            values,
        } => commands::choose::run(data_dir, &hero, &feature, &values),
        Commands::Import { file } => commands::import::run(data_dir, &file),
        Commands::Export {
            hero,
            format,
            output,
        } => commands::export::run(data_dir, &hero, &format, output.as_deref()),
        Commands::Delete { hero } => commands::delete::run(data_dir, &hero),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `FORGE_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("FORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
