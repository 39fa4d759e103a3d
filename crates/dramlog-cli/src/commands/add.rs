use crate::commands::{open_store, read_payload, validate_input};
use crate::output::Output;
use color_eyre::eyre::Context;
use color_eyre::Result;
use dramlog_models::ReviewInput;
use std::path::PathBuf;

pub fn run_add(file: Option<PathBuf>, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;

    let payload = read_payload(file.as_ref())?;
    let input: ReviewInput =
        serde_json::from_str(&payload).wrap_err("payload is not a valid review")?;
    validate_input(&input)?;

    let review = store.create(input)?;
    output.success(format!(
        "Added review {} ({}, {}/100)",
        review.id,
        review.whisky.name,
        review.scores.total()
    ));
    Ok(())
}
