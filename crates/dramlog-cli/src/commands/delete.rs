use crate::commands::{open_store, resolve_id};
use crate::output::Output;
use color_eyre::Result;
use dialoguer::Confirm;

pub fn run_delete(id: &str, yes: bool, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;
    let id = resolve_id(&store, id)?;
    let review = store.get(&id)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete review of '{}'?", review.whisky.name))
            .default(false)
            .interact()?;
        if !confirmed {
            output.info("Cancelled");
            return Ok(());
        }
    }

    store.delete(&id)?;
    output.success(format!("Deleted review {} ({})", id, review.whisky.name));
    Ok(())
}
