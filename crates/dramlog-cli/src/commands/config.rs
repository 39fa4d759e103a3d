use crate::commands::open_store;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use dramlog_config::PathManager;
use dramlog_models::Lang;
use serde_json::json;

pub fn run_show(output: &Output) -> Result<()> {
    let (store, config) = open_store()?;
    let path_manager = PathManager::default();

    let language = store.language().ok().flatten().unwrap_or(config.language);
    let reviewer = store.reviewer()?;

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "configFile": path_manager.config_file(),
            "dataDir": config.data_dir.unwrap_or_else(|| path_manager.data_dir().to_path_buf()),
            "language": language,
            "reviewer": reviewer,
        }));
        return Ok(());
    }

    output.println(format!("Config file: {}", path_manager.config_file().display()));
    output.println(format!(
        "Data dir:    {}",
        config
            .data_dir
            .unwrap_or_else(|| path_manager.data_dir().to_path_buf())
            .display()
    ));
    output.println(format!("Language:    {}", language.as_str()));
    output.println(format!(
        "Reviewer:    {}",
        reviewer.as_deref().unwrap_or("(not set)")
    ));
    Ok(())
}

pub fn run_lang(value: Option<Lang>, output: &Output) -> Result<()> {
    let (store, config) = open_store()?;
    match value {
        Some(lang) => {
            store.set_language(lang)?;
            output.success(format!("Language set to {}", lang.as_str()));
        }
        None => {
            let lang = store.language().ok().flatten().unwrap_or(config.language);
            output.println(lang.as_str());
        }
    }
    Ok(())
}

pub fn run_reviewer(name: Option<String>, output: &Output) -> Result<()> {
    let (store, _config) = open_store()?;
    match name {
        Some(name) => {
            store.set_reviewer(&name)?;
            output.success(format!("Reviewer set to {}", name));
        }
        None => match store.reviewer()? {
            Some(name) => output.println(name),
            None => output.info("No reviewer set"),
        },
    }
    Ok(())
}
