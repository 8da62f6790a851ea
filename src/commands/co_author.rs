//! Report the co-author credited by a template

use std::path::Path;

use cotemplate::output::{CoAuthorResult, OutputMode};

use super::source::load_template;

/// Print the identity from the template's first `Co-Authored-By:` trailer
pub fn co_author(file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (source, template) = load_template(file)?;
    let co_author = template.co_author();
    if co_author.is_none() {
        log::debug!("no co-author trailer in {}", source.name());
    }
    CoAuthorResult::new(co_author, source.name()).render(mode);
    Ok(())
}
