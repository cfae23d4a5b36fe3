mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result};
use generate::GenerateCommand;
use type2go_ast::ClassDecl;
use type2go_manifest::Manifest;

/// Extension trait for exiting on spanned diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for type2go_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for type2go_parser::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Load type2go.toml, falling back to built-in defaults when absent.
pub(crate) fn load_manifest(path: &Path) -> Manifest {
    if path.exists() {
        Manifest::from_file(path).unwrap_or_exit()
    } else {
        Manifest::default()
    }
}

/// Parse every `.ts` file in the input directory and keep the classes
/// carrying a `GoModel` annotation, in filename order.
pub(crate) fn load_model_classes(input_dir: &Path) -> Result<Vec<ClassDecl>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(input_dir)
        .wrap_err_with(|| format!("Failed to read model directory '{}'", input_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "ts"))
        .collect();
    paths.sort();

    let mut classes = Vec::new();
    for path in &paths {
        let parsed = type2go_parser::parse_file(path).unwrap_or_exit();
        classes.extend(
            parsed
                .into_iter()
                .filter(|class| class.annotations.contains("GoModel")),
        );
    }
    Ok(classes)
}

#[derive(Parser)]
#[command(name = "type2go")]
#[command(version)]
#[command(about = "Generate Go structs from annotated TypeScript model classes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go structs from the configured model sources
    Generate(GenerateCommand),

    /// Parse and validate model sources without writing output
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
