use crate::commands::{open_store, read_payload, resolve_id, validate_input};
use crate::output::Output;
use color_eyre::eyre::Context;
use color_eyre::Result;
use dramlog_models::ReviewInput;
use std::path::PathBuf;

pub fn run_update(id: &str, file: Option<PathBuf>, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;
    let id = resolve_id(&store, id)?;

    let payload = read_payload(file.as_ref())?;
    let input: ReviewInput =
        serde_json::from_str(&payload).wrap_err("payload is not a valid review")?;
    validate_input(&input)?;

    let review = store.update(&id, input)?;
    output.success(format!("Updated review {} ({})", review.id, review.whisky.name));
    Ok(())
}
