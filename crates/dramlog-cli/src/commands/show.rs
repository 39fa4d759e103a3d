use crate::card_render::render_card;
use crate::commands::{open_store, resolve_id, resolve_lang};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use dramlog_models::Lang;

pub fn run_show(id: &str, lang: Option<Lang>, output: &Output) -> Result<()> {
    let (store, config) = open_store()?;
    let id = resolve_id(&store, id)?;
    let review = store.get(&id)?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&review)?);
        return Ok(());
    }

    let lang = resolve_lang(lang, &store, &config);
    output.println(render_card(&review, lang));
    Ok(())
}
