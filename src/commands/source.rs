//! Template source resolution
//!
//! An explicit path wins, then the configured default, then stdin.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use cotemplate::Template;
use cotemplate::config::Config;
use cotemplate::paths::STDIN_PATH;

/// Where a template is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// A template file
    File(PathBuf),
}

impl Source {
    /// Resolve the source for an optional command-line path
    pub fn resolve(file: Option<&Path>, config: &Config) -> Self {
        match file.or(config.template.as_deref()) {
            Some(path) if path == Path::new(STDIN_PATH) => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Stdin,
        }
    }

    /// Display name used in messages
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => STDIN_PATH.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole source into a new template
    pub fn load(&self) -> anyhow::Result<Template> {
        let mut template = Template::new();
        let read = match self {
            Self::Stdin => template.read_from(&mut io::stdin().lock())?,
            Self::File(path) => {
                let mut file = File::open(path)
                    .with_context(|| format!("Cannot open template: {}", path.display()))?;
                template
                    .read_from(&mut file)
                    .with_context(|| format!("Cannot read template: {}", path.display()))?
            },
        };
        log::debug!("loaded {read} bytes from {}", self.name());
        Ok(template)
    }
}

/// Resolve and load the template for a command
pub fn load_template(file: Option<&Path>) -> anyhow::Result<(Source, Template)> {
    let source = Source::resolve(file, &Config::load());
    let template = source.load()?;
    Ok((source, template))
}
