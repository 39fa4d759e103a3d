use crate::commands::{open_store, read_payload, resolve_id, validate_input};
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use dramlog_core::{decode_review, encode_review};
use dramlog_models::ReviewInput;
use serde_json::json;
use std::path::PathBuf;

pub fn run_encode(id: Option<String>, file: Option<PathBuf>, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;

    let input: ReviewInput = match (id, file) {
        (Some(id), None) => {
            let id = resolve_id(&store, &id)?;
            store.get(&id)?.into()
        }
        (None, Some(path)) => {
            let payload = read_payload(Some(&path))?;
            serde_json::from_str(&payload).wrap_err("payload is not a valid review")?
        }
        _ => return Err(eyre!("pass a review id or --file")),
    };

    let token = encode_review(&input)?;
    if output.format() == OutputFormat::Human {
        output.println(&token);
    } else {
        output.json(&json!({ "token": token }));
    }
    Ok(())
}

pub fn run_decode(token: &str, save: bool, output: &Output) -> Result<()> {
    let input = decode_review(token).ok_or_else(|| eyre!("not a valid share token"))?;

    if save {
        let (store, _config) = open_store()?;
        validate_input(&input)?;
        let review = store.create(input)?;
        output.success(format!("Saved shared review as {} ({})", review.id, review.whisky.name));
        return Ok(());
    }

    if output.format() == OutputFormat::Human {
        output.println(serde_json::to_string_pretty(&input)?);
    } else {
        output.json(&serde_json::to_value(&input)?);
    }
    Ok(())
}
