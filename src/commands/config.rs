//! Show or change the default template

use std::path::PathBuf;

use cotemplate::config::Config;
use cotemplate::output::{ConfigResult, OperationResult, OutputMode};

/// Show the configuration, or set/clear the default template
pub fn config(template: Option<PathBuf>, clear: bool, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = Config::load();

    if clear {
        config.set_template(None);
        config.save()?;
        OperationResult {
            success: true,
            message: "Cleared default template".to_string(),
        }
        .render(mode);
        return Ok(());
    }

    if let Some(path) = template {
        let message = format!("Default template set to {}", path.display());
        config.set_template(Some(path));
        config.save()?;
        OperationResult {
            success: true,
            message,
        }
        .render(mode);
        return Ok(());
    }

    ConfigResult {
        config_path: Config::config_path().display().to_string(),
        template: config.template.map(|t| t.display().to_string()),
    }
    .render(mode);
    Ok(())
}
