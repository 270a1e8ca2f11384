//! Documentation page generation

use maud::{Markup, PreEscaped, html};

use crate::components::chrome::{chrome_header, version_nav};
use crate::components::footer::chrome_footer;
use crate::components::layout::page_wrapper;
use crate::document::Document;

/// Generates a complete documentation page
///
/// # Arguments
///
/// * `doc`: Document already filled by the chrome renderer
/// * `css_path`: Stylesheet path relative to the page
/// * `body_html`: Trusted body fragment inserted unescaped
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(doc: &Document, css_path: &str, body_html: &str) -> Markup {
    page_wrapper(
        doc.title(),
        &[css_path],
        html! {
            (chrome_header(doc))
            main class="page-content" {
                (PreEscaped(body_html))
            }
            (version_nav(doc))
        },
        chrome_footer(doc),
    )
}
