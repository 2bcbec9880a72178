//! HTML → bounded text, the network-free half of extraction.

use scraper::Html;
use tracing::debug;

use crate::error::{ExtractionError, Result};
use crate::pipeline::fields::SalientFields;
use crate::pipeline::normalize::{char_len, normalize_whitespace, truncate_chars};
use crate::pipeline::strip::strip_boilerplate;
use crate::types::{config::ExtractorConfig, result::ExtractionResult};

/// Run parse → strip → concatenate → normalize → truncate → validate over
/// an already-fetched HTML body.
///
/// The parse tree is owned by this call and dropped before it returns.
pub fn extract_from_html(
    html: &str,
    source_url: &str,
    config: &ExtractorConfig,
) -> Result<ExtractionResult> {
    let mut document = Html::parse_document(html);
    let stripped = strip_boilerplate(&mut document);
    let fields = SalientFields::from_document(&document);
    drop(document);

    let content = normalize_whitespace(&fields.concatenate());
    let content = truncate_chars(content, config.max_content_chars);

    let length = char_len(&content);
    if content.is_empty() || length < config.min_content_chars {
        debug!(url = %source_url, length, "Extracted content below minimum");
        return Err(ExtractionError::InsufficientContent { length });
    }

    debug!(
        url = %source_url,
        stripped_elements = stripped,
        html_len = html.len(),
        content_chars = length,
        "Extracted page content"
    );

    Ok(ExtractionResult::new(content, fields.title, source_url))
}
