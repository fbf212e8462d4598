use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

use stack_edit::{Config, Shell};

/// A line-buffer text editor with bounded undo/redo history
#[derive(Parser)]
#[command(name = "stack-edit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print the command menu before each prompt
    #[arg(long)]
    no_menu: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize default configuration file
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        return init_config();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(),
    };
    if cli.no_menu {
        config.editor.show_menu = false;
    }
    log::debug!("starting with {:?}", config.editor);

    let mut shell = Shell::new(&config.editor);
    shell.run(io::stdin().lock(), io::stdout().lock())
}

fn init_config() -> Result<()> {
    let config_path = Config::default_config_path();

    if config_path.exists() {
        eprintln!("Config file already exists at: {}", config_path.display());
        eprintln!("Remove it first or edit it manually.");
        return Ok(());
    }

    let config = Config::default();
    config.save_to_file(&config_path)?;
    println!(
        "Created default config file at: {}\n\n\
         History capacity: {}\n\
         Show menu:        {}",
        config_path.display(),
        config.editor.history_capacity,
        config.editor.show_menu
    );

    Ok(())
}
