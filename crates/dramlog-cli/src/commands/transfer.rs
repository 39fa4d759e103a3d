use crate::commands::open_store;
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::Context;
use color_eyre::Result;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

pub fn run_export(out: Option<PathBuf>, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;
    let count = store.list()?.len();
    let json = store.export_all()?;

    match out {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            output.success(format!("Exported {} reviews to {}", count, path.display()));
        }
        None => {
            if output.format() == OutputFormat::Human {
                output.println(&json);
            } else {
                output.json(&serde_json::from_str(&json)?);
            }
        }
    }
    Ok(())
}

pub fn run_import(file: &Path, yes: bool, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;

    let existing = store.list()?.len();
    if existing > 0 && !yes {
        output.warn(format!("This replaces the {} reviews currently stored", existing));
        let confirmed = Confirm::new()
            .with_prompt("Continue?")
            .default(false)
            .interact()?;
        if !confirmed {
            output.info("Cancelled");
            return Ok(());
        }
    }

    let payload = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("failed to read {}", file.display()))?;
    let count = store.import_all(&payload)?;
    output.success(format!("Imported {} reviews", count));
    Ok(())
}
