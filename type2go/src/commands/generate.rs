use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use type2go_codegen::{NamingRegistry, emit_model};
use type2go_core::File;

use super::{load_manifest, load_model_classes, plural};

const BANNER_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the manifest file
    #[arg(short, long, default_value = "type2go.toml")]
    pub config: PathBuf,

    /// Output directory, overriding the manifest's output_dir
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print generated code to stdout instead of writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(&self.config);
        let classes = load_model_classes(&manifest.input_dir)?;
        let naming = NamingRegistry::new(manifest.naming.clone());
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| manifest.output_dir.clone());

        let timestamp = OffsetDateTime::now_utc()
            .format(BANNER_FORMAT)
            .wrap_err("Failed to format banner timestamp")?;

        let mut written: Vec<PathBuf> = Vec::new();
        let mut failed = 0usize;
        for class in &classes {
            // A malformed class must not block its siblings.
            let text = match emit_model(class, &naming, &timestamp) {
                Ok(text) => text,
                Err(error) => {
                    eprintln!("error: {}: {error}", class.name);
                    failed += 1;
                    continue;
                }
            };

            if self.dry_run {
                println!("==> {}.go", class.name);
                println!("{text}");
                println!();
                continue;
            }

            let path = output_dir.join(format!("{}.go", class.name));
            File::new(&path, text)
                .write()
                .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
            written.push(path);
        }

        if self.dry_run {
            println!(
                "{} model{} rendered (dry run)",
                classes.len() - failed,
                plural(classes.len() - failed),
            );
        } else {
            println!("Generated {} model{}", written.len(), plural(written.len()));
            for path in &written {
                println!("  {}", path.display());
            }
        }

        if failed > 0 {
            bail!("{failed} model{} failed to generate", plural(failed));
        }
        Ok(())
    }
}
