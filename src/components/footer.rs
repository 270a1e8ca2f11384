//! Copyright footer component

use maud::{Markup, html};

use super::chrome::anchor_nodes;
use crate::document::{Document, anchors};

/// Renders copyright line and donation link container
pub fn chrome_footer(doc: &Document) -> Markup {
    html! {
        footer class="page-footer" {
            p id=(anchors::COPYRIGHT) { (anchor_nodes(doc, anchors::COPYRIGHT)) }
            div id=(anchors::DONATION) class="donation" {
                (anchor_nodes(doc, anchors::DONATION))
            }
        }
    }
}
