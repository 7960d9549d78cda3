//! CLI: config → scan → extract → emit → write
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::console;
use crate::files;
use crate::pipeline::{self, SourceUnit};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate TypeScript interfaces from C# DTO classes
#[derive(Parser, Debug)]
#[command(name = "dotnet-to-ts", version, args_conflicts_with_subcommands = true)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// write a default config file
    Init(InitArgs),
    /// generate interfaces (the default when no subcommand is given)
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// path to the JSON config file
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// print each parsed class structure
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Args, Debug, Clone)]
struct InitArgs {
    /// where to write the config file
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    path: PathBuf,

    /// overwrite an existing config file
    #[arg(long, default_value_t = false)]
    force: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Some(Command::Init(target)) => target.run(),
            Some(Command::Generate(target)) => target.run(),
            None => self.generate.run(),
        }
    }
}

impl InitArgs {
    fn run(&self) -> Result<()> {
        if files::exists(&self.path) && !self.force {
            bail!("{} already exists (use --force to overwrite)", self.path.display());
        }
        files::write(&self.path, &Config::default().to_json_pretty())?;
        console::success(format!("Created config file: {}", self.path.display()));
        Ok(())
    }
}

impl GenerateArgs {
    fn run(&self) -> Result<()> {
        console::info("dotnet-to-ts - TypeScript generator for C# DTOs");

        // 1) config
        let config = Config::load(&self.config).context("Failed to load config")?;
        console::info(format!("Loaded config: {}", self.config.display()));
        console::debug(format!("{config:#?}"), self.verbose);

        // 2) discover + read
        console::step("Scanning for C# files...");
        let base_dir = std::env::current_dir().context("cannot resolve working directory")?;
        let source_paths = files::scan(&config.input, &base_dir)?;
        if source_paths.is_empty() {
            bail!("No C# files found with specified input patterns.");
        }
        console::success(format!("Found {} C# files.", source_paths.len()));
        let units = files::read_multiple(&source_paths)?
            .into_iter()
            .map(SourceUnit::from)
            .collect::<Vec<_>>();

        // 3) extract + emit
        let generation = pipeline::generate(&units, config.options.clone());
        for class in &generation.classes {
            let structure = serde_json::to_string_pretty(class)?;
            console::debug(format!("Parsed class structure: {structure}"), self.verbose);
        }
        for id in &generation.unparsed {
            console::debug(format!("No class declaration in {id}"), self.verbose);
        }
        if !generation.unparsed.is_empty() {
            console::warn(format!("Skipped {} files without a class declaration.", generation.unparsed.len()));
        }
        if generation.classes.is_empty() {
            bail!("No parsable classes found in C# files.");
        }
        console::success(format!("Parsed {} classes.", generation.classes.len()));

        // 4) write
        files::write(&config.output, &generation.output)?;
        console::success(format!("Written TypeScript interfaces to: {}", config.output.display()));
        console::success("Done!");
        Ok(())
    }
}
