//! `<title>` extraction via html5ever.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parses `html` and returns the trimmed text of the first `<title>`
/// element, or `None` if there is none or it is empty. html5ever recovers
/// from malformed markup, so this only fails on documents that genuinely
/// carry no title text.
pub(super) fn extract_title(html: &str) -> Option<String> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let title_node = find_title(&dom.document)?;

    let mut text = String::new();
    for child in title_node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            text.push_str(&contents.borrow());
        }
    }

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn find_title(node: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if name.local.as_ref() == "title" {
            return Some(node.clone());
        }
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_title(child) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_text() {
        let html = "<html><head><title>Example Domain</title></head><body>hi</body></html>";
        assert_eq!(extract_title(html).as_deref(), Some("Example Domain"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let html = "<html><head><title>\n  Spaced Out \t</title></head></html>";
        assert_eq!(extract_title(html).as_deref(), Some("Spaced Out"));
    }

    #[test]
    fn first_title_wins() {
        let html = "<head><title>First</title><title>Second</title></head>";
        assert_eq!(extract_title(html).as_deref(), Some("First"));
    }

    #[test]
    fn malformed_markup_still_yields_title() {
        // No closing tags at all; the parser recovers.
        let html = "<head><title>Resilient";
        assert_eq!(extract_title(html).as_deref(), Some("Resilient"));
    }

    #[test]
    fn missing_title_is_none() {
        assert!(extract_title("<html><body>no head</body></html>").is_none());
        assert!(extract_title("plain text, not markup").is_none());
    }

    #[test]
    fn empty_title_is_none() {
        assert!(extract_title("<head><title>   </title></head>").is_none());
    }
}
