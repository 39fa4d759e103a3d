use crate::commands::open_store;
use crate::output::Output;
use color_eyre::Result;

pub fn run_clear(all: bool, reviews: bool, draft: bool, output: &Output) -> Result<()> {
    if !all && !reviews && !draft {
        output.warn("No clear option specified. Use --all, --reviews or --draft.");
        output.info("Example: dramlog clear --draft");
        return Ok(());
    }

    let (store, _config) = open_store()?;

    if all || reviews {
        store.clear_reviews()?;
        output.success("Cleared review collection");
    }
    if all || draft {
        store.clear_draft()?;
        output.success("Cleared draft");
    }
    Ok(())
}
