//! Binary entrypoint for the Textquest CLI.
//!
//! Commands:
//! - `play` - interactive session over stdin/stdout
//! - `run <script>` - feed every line of a script to one fresh session and print the replies
//! - `init` - write a starter `textquest.toml` plus `data/world.json` and `data/messages.json`
//! - `check` - load and validate the configured world and catalog
//!
//! See the library crate docs for module-level details: `textquest::`.
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use textquest::config::{Config, DEFAULT_CONFIG_PATH};
use textquest::quest::{self, MessageCatalog, Session};

#[derive(Parser)]
#[command(name = "textquest")]
#[command(about = "A small turn-based text adventure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, one command per line
    Play,
    /// Run a script of commands against a fresh session
    Run {
        /// File with one command per line
        script: String,
    },
    /// Write a default configuration and seed data files
    Init {
        /// Directory for world.json and messages.json
        #[arg(long, default_value = "data")]
        data_dir: String,
    },
    /// Validate the configured world and message catalog
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing config file is fine: defaults select the bundled world.
    let config = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ if Path::new(&cli.config).exists() => Config::load(&cli.config)?,
        _ => Config::default(),
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play => {
            let world = config.load_world()?;
            let catalog = config.load_catalog()?;
            play(&config, &world, &catalog)?;
        }
        Commands::Run { script } => {
            let world = config.load_world()?;
            let catalog = config.load_catalog()?;
            let contents = std::fs::read_to_string(&script)
                .map_err(|e| anyhow!("Failed to read script {}: {}", script, e))?;
            info!("Running script {}", script);
            let replies = quest::process_all(&world, &catalog, contents.lines())?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for reply in replies {
                writeln!(out, "{}", reply)?;
            }
        }
        Commands::Init { data_dir } => {
            info!("Initializing new Textquest configuration");
            std::fs::create_dir_all(&data_dir)?;
            let world_path = Path::new(&data_dir).join("world.json");
            let catalog_path = Path::new(&data_dir).join("messages.json");
            quest::save_world_to_json(&world_path, &quest::canonical_world())?;
            quest::save_catalog_to_json(&catalog_path, &MessageCatalog::default())?;
            info!("Seed data written to {}", data_dir);

            let mut cfg = Config::default();
            cfg.game.world_file = Some(world_path.display().to_string());
            cfg.game.catalog_file = Some(catalog_path.display().to_string());
            let serialized = toml::to_string_pretty(&cfg)?;
            std::fs::write(&cli.config, serialized)?;
            println!("Configuration file created at {}", cli.config);
        }
        Commands::Check => {
            let world = config.load_world()?;
            quest::validate_world(&world)?;
            let catalog = config.load_catalog()?;
            let locked = world.locations.iter().filter(|l| l.locked).count();
            let items: usize = world
                .locations
                .iter()
                .flat_map(|l| l.objects.iter())
                .map(|o| o.items.len())
                .sum();
            let vocabulary = catalog.vocabulary();
            if world.locations.iter().all(|l| l.title != vocabulary.street) {
                warn!(
                    "No location titled {}; using the keys will never open a door",
                    vocabulary.street
                );
            }
            println!(
                "World OK: {} locations ({} locked), {} items, start={}",
                world.locations.len(),
                locked,
                items,
                world.start().map(|l| l.title.as_str()).unwrap_or_default()
            );
            println!(
                "Catalog OK: verbs {} / {} / {} / {} / {}",
                vocabulary.look, vocabulary.go, vocabulary.take, vocabulary.use_item, vocabulary.wear
            );
        }
    }

    Ok(())
}

fn play(config: &Config, world: &quest::WorldDefinition, catalog: &MessageCatalog) -> Result<()> {
    let mut session = Session::new(world, catalog)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.game.banner {
        writeln!(out, "{}", session.process(&catalog.vocabulary().look))?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "{}", config.game.prompt)?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        writeln!(out, "{}", session.process(&line))?;
    }
    writeln!(out)?;
    info!("Session ended");
    Ok(())
}

/// CLI verbosity overrides the configured level.
fn base_level(config: &Config, verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(base_level(config, verbosity));

    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Only echo to the console when a person is watching
            let is_tty = atty::is(atty::Stream::Stdout);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
            let _ = builder.try_init();
            return;
        }
    }

    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}
