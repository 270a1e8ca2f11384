//! Page chrome header and version navigation components

use maud::{Markup, html};

use crate::document::{Document, Node, anchors};

/// Renders child nodes of one document anchor
///
/// Missing anchors render as empty markup.
pub fn anchor_nodes(doc: &Document, id: &str) -> Markup {
    let nodes = doc.element(id).unwrap_or(&[]);
    html! {
        @for node in nodes {
            (node_markup(node))
        }
    }
}

fn node_markup(node: &Node) -> Markup {
    match node {
        Node::Text(text) => html! { (text) },
        Node::Link(link) => html! {
            a class=[link.class.as_deref()] href=(link.href) { (link.text) }
        },
    }
}

/// Renders page name heading with version label
pub fn chrome_header(doc: &Document) -> Markup {
    html! {
        header class="page-chrome" {
            h1 id=(anchors::PAGE_NAME) class="page-name" {
                (anchor_nodes(doc, anchors::PAGE_NAME))
            }
            span id=(anchors::VERSION_LABEL) class="page-version" {
                (anchor_nodes(doc, anchors::VERSION_LABEL))
            }
        }
    }
}

/// Renders the version history list
///
/// Each link sits in its own list item; text nodes are dropped since only
/// links belong in the list.
pub fn version_nav(doc: &Document) -> Markup {
    let links = doc.links(anchors::VERSION_LIST).unwrap_or_default();
    html! {
        nav class="version-nav" {
            h2 { "Versions" }
            ul id=(anchors::VERSION_LIST) class="version-list" {
                @for link in links {
                    li {
                        a class=[link.class.as_deref()] href=(link.href) { (link.text) }
                    }
                }
            }
        }
    }
}
