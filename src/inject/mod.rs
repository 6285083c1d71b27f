//! HTML transform hook: splice generated tags before `</head>`
//!
//! The injected block is meant to live inside a string literal of the host
//! pipeline, so every `"` is escaped as `\"` and the expanded layout uses
//! literal `\n` / `\t` escape sequences instead of raw line breaks.

use tracing::debug;

/// Marker the block is inserted in front of.
pub const HEAD_CLOSE: &str = "</head>";

/// Transform that injects a fixed tag block into HTML documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadInjector {
    block: String,
}

impl HeadInjector {
    /// Render `tags` once; `compact` selects the single-line layout.
    pub fn new(tags: &[String], compact: bool) -> Self {
        Self {
            block: render_tag_block(tags, compact),
        }
    }

    pub fn block(&self) -> &str {
        &self.block
    }

    /// Apply the transform to one document.
    pub fn transform(&self, document: &str) -> String {
        inject_head(document, &self.block)
    }
}

/// Escaped newline as it appears inside the string-literal context.
const ESCAPED_NEWLINE: &str = "\\n";

/// Render tags as one block.
///
/// Compact: tags concatenated with every newline removed.
/// Expanded: tags wrapped in marker comments, one per escaped line. Runs of
/// two or more escaped newlines produced by the join (tags that already end
/// in `\n`) collapse into a single real newline.
pub fn render_tag_block(tags: &[String], compact: bool) -> String {
    if compact {
        return tags.concat().replace('\n', "");
    }

    format!(
        "\\n\\n<!-- iconset v{version} -->\\n{body}\\n<!-- iconset -->\\n\\t",
        version = env!("CARGO_PKG_VERSION"),
        body = collapse_escaped_runs(&tags.join(ESCAPED_NEWLINE)),
    )
}

/// Replace every maximal run of at least two `\n` sequences with `'\n'`.
fn collapse_escaped_runs(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(idx) = rest.find(ESCAPED_NEWLINE) {
        out.push_str(&rest[..idx]);
        let mut tail = &rest[idx..];
        let mut run = 0;
        while let Some(next) = tail.strip_prefix(ESCAPED_NEWLINE) {
            run += 1;
            tail = next;
        }
        if run >= 2 {
            out.push('\n');
        } else {
            out.push_str(ESCAPED_NEWLINE);
        }
        rest = tail;
    }

    out.push_str(rest);
    out
}

/// Insert `block` immediately before the first `</head>`, escaping `"`.
///
/// A document without `</head>` is returned unchanged.
pub fn inject_head(document: &str, block: &str) -> String {
    let Some(idx) = document.find(HEAD_CLOSE) else {
        debug!("document has no closing head tag; leaving it unchanged");
        return document.to_string();
    };

    let escaped = block.replace('"', "\\\"");
    let mut out = String::with_capacity(document.len() + escaped.len());
    out.push_str(&document[..idx]);
    out.push_str(&escaped);
    out.push_str(&document[idx..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<String> {
        vec![
            "<link rel=\"icon\" href=\"/favicon.svg\">".to_string(),
            "<link rel=\"manifest\"\n href=\"/manifest.webmanifest\">".to_string(),
        ]
    }

    #[test]
    fn compact_block_strips_newlines() {
        let block = render_tag_block(&tags(), true);
        assert!(!block.contains('\n'));
        assert!(block.starts_with("<link rel=\"icon\""));
        assert!(block.contains("\"><link rel=\"manifest\" href="));
    }

    #[test]
    fn expanded_block_has_markers_and_escaped_newlines() {
        let block = render_tag_block(&tags(), false);
        assert!(block.starts_with("\\n\\n<!-- iconset v"));
        assert!(block.ends_with("\\n<!-- iconset -->\\n\\t"));
        assert!(block.contains("href=\"/favicon.svg\">\\n<link rel=\"manifest\""));
    }

    #[test]
    fn expanded_block_collapses_doubled_escaped_newlines() {
        let tags = vec![
            "<meta a>\\n".to_string(),
            "<meta b>".to_string(),
            "<meta c>\\n\\n".to_string(),
            "<meta d>".to_string(),
        ];
        let block = render_tag_block(&tags, false);
        assert!(block.contains("<meta a>\n<meta b>\\n<meta c>\n<meta d>\\n<!-- iconset -->"));
        // Marker padding outside the joined tags is left alone.
        assert!(block.starts_with("\\n\\n<!-- iconset v"));
    }

    #[test]
    fn single_escaped_newlines_are_kept() {
        assert_eq!(collapse_escaped_runs("a\\nb\\nc"), "a\\nb\\nc");
        assert_eq!(collapse_escaped_runs("a\\n\\n\\nb"), "a\nb");
        assert_eq!(collapse_escaped_runs("no escapes"), "no escapes");
    }

    #[test]
    fn injects_before_head_close_with_escaped_quotes() {
        let doc = "<html><head><title>t</title></head><body></body></html>";
        let out = inject_head(doc, "<meta name=\"a\">");
        assert_eq!(
            out,
            "<html><head><title>t</title><meta name=\\\"a\\\"></head><body></body></html>"
        );
    }

    #[test]
    fn only_first_head_close_is_used() {
        let doc = "<head></head><template></head></template>";
        let out = inject_head(doc, "X");
        assert_eq!(out, "<head>X</head><template></head></template>");
    }

    #[test]
    fn document_without_head_is_unchanged() {
        let doc = "<p>fragment</p>";
        assert_eq!(inject_head(doc, "<meta>"), doc);
    }

    #[test]
    fn injector_reuses_rendered_block() {
        let injector = HeadInjector::new(&tags(), true);
        let out = injector.transform("<head></head>");
        assert!(out.starts_with("<head><link rel=\\\"icon\\\""));
        assert!(out.ends_with("</head>"));
        assert_eq!(injector.block(), render_tag_block(&tags(), true));
    }
}
