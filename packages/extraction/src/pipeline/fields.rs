//! Salient text fields read from a stripped document.

use scraper::{ElementRef, Html, Selector};

/// Regions tried, in document order, for the page's main content.
pub const MAIN_CONTENT_SELECTOR: &str = "main, .main, .content, .main-content, article, .article";

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// The document regions judged likely to carry meaningful content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalientFields {
    pub title: String,
    pub meta_description: String,
    pub headings: String,
    pub paragraphs: String,
    pub main_content: String,
}

impl SalientFields {
    /// Read every field from the document independently.
    pub fn from_document(document: &Html) -> Self {
        let title = select(document, "title")
            .into_iter()
            .map(element_text)
            .collect::<String>()
            .trim()
            .to_string();

        let meta_description = select(document, r#"meta[name="description"]"#)
            .first()
            .and_then(|el| el.value().attr("content"))
            .unwrap_or_default()
            .to_string();

        let main_content = select(document, MAIN_CONTENT_SELECTOR)
            .first()
            .map(|el| element_text(*el))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| {
                select(document, "body")
                    .into_iter()
                    .map(element_text)
                    .collect()
            });

        Self {
            title,
            meta_description,
            headings: joined_trimmed(document, HEADING_SELECTOR),
            paragraphs: joined_trimmed(document, "p"),
            main_content,
        }
    }

    /// Join the non-empty fields with single spaces, in the fixed order
    /// title, meta description, headings, paragraphs, main content.
    pub fn concatenate(&self) -> String {
        [
            self.title.as_str(),
            self.meta_description.as_str(),
            self.headings.as_str(),
            self.paragraphs.as_str(),
            self.main_content.as_str(),
        ]
        .into_iter()
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn select<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn joined_trimmed(document: &Html, css: &str) -> String {
    select(document, css)
        .into_iter()
        .map(|el| element_text(el).trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(html: &str) -> SalientFields {
        SalientFields::from_document(&Html::parse_document(html))
    }

    #[test]
    fn test_title_and_meta() {
        let f = fields(
            r#"<html><head>
                <title>  Acme Corp  </title>
                <meta name="description" content="Rockets for everyone">
            </head><body></body></html>"#,
        );
        assert_eq!(f.title, "Acme Corp");
        assert_eq!(f.meta_description, "Rockets for everyone");
    }

    #[test]
    fn test_missing_meta_is_empty() {
        let f = fields("<html><head><meta name=\"keywords\" content=\"a,b\"></head></html>");
        assert_eq!(f.meta_description, "");
    }

    #[test]
    fn test_headings_and_paragraphs_in_document_order() {
        let f = fields(
            "<body><h2> Second level </h2><p> one </p><h1>Top</h1><p>two</p><h6>Tiny</h6></body>",
        );
        assert_eq!(f.headings, "Second level Top Tiny");
        assert_eq!(f.paragraphs, "one two");
    }

    #[test]
    fn test_main_content_takes_first_match() {
        let f = fields(
            r#"<body>
                <div class="content">First region</div>
                <article>Second region</article>
            </body>"#,
        );
        assert_eq!(f.main_content, "First region");
    }

    #[test]
    fn test_main_content_falls_back_to_body() {
        let f = fields("<body><div>Just a div</div><p>and a paragraph</p></body>");
        assert_eq!(f.main_content, "Just a divand a paragraph");
    }

    #[test]
    fn test_empty_main_falls_back_to_body() {
        let f = fields("<body><main></main><p>Outside</p></body>");
        assert_eq!(f.main_content, "Outside");
    }

    #[test]
    fn test_concatenate_skips_empty_fields() {
        let f = SalientFields {
            title: "Acme".into(),
            meta_description: String::new(),
            headings: "Welcome".into(),
            paragraphs: String::new(),
            main_content: "Body".into(),
        };
        assert_eq!(f.concatenate(), "Acme Welcome Body");
        assert_eq!(SalientFields::default().concatenate(), "");
    }
}
