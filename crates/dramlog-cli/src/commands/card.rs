use crate::card_render::{card_file_name, render_card};
use crate::commands::{open_store, resolve_id, resolve_lang};
use crate::output::Output;
use color_eyre::eyre::Context;
use color_eyre::Result;
use dramlog_models::Lang;
use std::path::PathBuf;

pub fn run_card(id: &str, out: Option<PathBuf>, lang: Option<Lang>, output: &Output) -> Result<()> {
    let (store, config) = open_store()?;
    let id = resolve_id(&store, id)?;
    let review = store.get(&id)?;
    let lang = resolve_lang(lang, &store, &config);

    let card = render_card(&review, lang);
    let path = out.unwrap_or_else(|| PathBuf::from(card_file_name(&review.whisky.name)));
    std::fs::write(&path, format!("{}\n", card))
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;

    output.success(format!("Wrote tasting card to {}", path.display()));
    Ok(())
}
