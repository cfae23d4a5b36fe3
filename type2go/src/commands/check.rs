use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use type2go_codegen::{NamingRegistry, emit_model};

use super::{load_manifest, load_model_classes, plural};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the manifest file
    #[arg(short, long, default_value = "type2go.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(&self.config);
        let classes = load_model_classes(&manifest.input_dir)?;
        let naming = NamingRegistry::new(manifest.naming.clone());

        let mut failed = 0usize;
        for class in &classes {
            // Dry emission exercises config resolution, type translation,
            // and tag assembly without touching the output directory.
            if let Err(error) = emit_model(class, &naming, "check") {
                eprintln!("error: {}: {error}", class.name);
                failed += 1;
                continue;
            }

            match &class.base {
                Some(base) => println!(
                    "  {} extends {} ({} field{})",
                    class.name,
                    base,
                    class.fields.len(),
                    plural(class.fields.len()),
                ),
                None => println!(
                    "  {} ({} field{})",
                    class.name,
                    class.fields.len(),
                    plural(class.fields.len()),
                ),
            }
        }

        if failed > 0 {
            bail!("{failed} model{} failed validation", plural(failed));
        }

        println!("{} model{} OK", classes.len(), plural(classes.len()));
        Ok(())
    }
}
