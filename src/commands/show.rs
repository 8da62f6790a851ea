//! Print a template verbatim

use std::io::{self, Write};
use std::path::Path;

use super::source::load_template;

/// Copy the template to stdout byte for byte
pub fn show(file: Option<&Path>) -> anyhow::Result<()> {
    let (source, template) = load_template(file)?;
    let mut stdout = io::stdout().lock();
    let written = template.write_to(&mut stdout)?;
    stdout.flush()?;
    log::debug!("wrote {written} bytes from {}", source.name());
    Ok(())
}
