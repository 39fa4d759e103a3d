use crate::commands::{open_store, read_payload};
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::Context;
use color_eyre::Result;
use dramlog_models::ReviewDraft;
use std::path::PathBuf;

pub fn run_save(file: Option<PathBuf>, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;

    let payload = read_payload(file.as_ref())?;
    let draft: ReviewDraft =
        serde_json::from_str(&payload).wrap_err("payload is not a valid draft")?;

    store.save_draft(&draft)?;
    output.success("Draft saved");
    Ok(())
}

pub fn run_show(output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;

    match store.draft()? {
        Some(draft) => {
            if output.format() == OutputFormat::Human {
                output.println(serde_json::to_string_pretty(&draft)?);
            } else {
                output.json(&serde_json::to_value(&draft)?);
            }
        }
        None => output.info("No pending draft"),
    }
    Ok(())
}

pub fn run_clear(output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;
    store.clear_draft()?;
    output.success("Draft cleared");
    Ok(())
}
