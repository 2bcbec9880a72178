//! Boilerplate removal over the parsed document tree.

use scraper::{Html, Selector};

/// Elements that never carry page content: code, styling, and site chrome
/// matched by tag or by class.
pub const BOILERPLATE_SELECTOR: &str =
    "script, style, nav, footer, header, aside, .nav, .footer, .header, .sidebar";

/// Detach every boilerplate element from the document, in place.
///
/// Must run before any text is read: a detached subtree is unreachable
/// from the root, so none of its text shows up in later selections.
/// Returns the number of matched elements.
pub fn strip_boilerplate(document: &mut Html) -> usize {
    let Ok(selector) = Selector::parse(BOILERPLATE_SELECTOR) else {
        return 0;
    };

    let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
    let matched = ids.len();

    for id in ids {
        // Nested matches are detached from an already-detached parent; harmless.
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    matched
}
