use crate::commands::open_store;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use dramlog_models::Rebuy;

pub fn run_list(output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;
    let reviews = store.list()?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&reviews)?);
        return Ok(());
    }

    if reviews.is_empty() {
        output.info("No reviews yet. Add one with: dramlog add review.json");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Whisky", "Distillery", "Score", "Rebuy", "Date"]);
    for review in &reviews {
        table.add_row(vec![
            review.id.chars().take(8).collect::<String>(),
            review.whisky.name.clone(),
            review.whisky.distillery.clone(),
            format!("{}/100", review.scores.total()),
            match review.would_rebuy {
                Some(Rebuy::Yes) => "yes".to_string(),
                Some(Rebuy::No) => "no".to_string(),
                Some(Rebuy::Maybe) => "maybe".to_string(),
                None => String::new(),
            },
            review.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    output.println(table.to_string());
    Ok(())
}
