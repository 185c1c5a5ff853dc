use log::{debug, info};

use crate::builder::template::substitute_placeholders;
use crate::config::BuildConfig;
use crate::markdown::{render_toc, MarkdownConverter};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Build the HTML page described by `config`.
///
/// Reads the Markdown source, converts it, renders the table of contents,
/// fills the template and writes the result over the output file. Any
/// failure aborts the build; a failed write may leave a partial file.
/// Returns the number of bytes written.
pub fn build_document(config: &BuildConfig, converter: &dyn MarkdownConverter) -> BoxResult<usize> {
    debug!("Reading source {}", config.source.display());
    let source = fs::read_file(&config.source)?;

    let conversion = converter.convert(&source)?;
    let toc = render_toc(&conversion.headings);
    debug!(
        "Converted {} bytes of Markdown into {} bytes of HTML",
        source.len(),
        conversion.html.len()
    );

    debug!("Reading template {}", config.template.display());
    let template = fs::read_file(&config.template)?;

    let page = substitute_placeholders(&template, &conversion.html, &config.title, &toc);

    fs::write_file(&config.output, &page)?;
    info!("Wrote {} ({} bytes)", config.output.display(), page.len());

    Ok(page.len())
}
