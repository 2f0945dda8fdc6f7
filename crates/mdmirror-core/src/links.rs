//! Hyperlink extraction from fetched HTML.
//!
//! Parsing is tolerant: malformed markup yields whatever anchors the parser
//! can recover, and an unparseable document simply yields no links. The
//! crawl treats both the same way.

use scraper::{Html, Selector};

/// Returns the `href` values of all `<a href>` elements, in document order.
/// No resolution or filtering happens here; the scope rules decide what the
/// crawl admits.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").expect("static selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_document_order() {
        let html = r#"
            <html><body>
                <a href="/docs/foo">Foo</a>
                <p>text <a href="https://other.com/x">Other</a></p>
                <a href="docs/bar-relative">Bar</a>
            </body></html>
        "#;
        assert_eq!(
            extract_links(html),
            vec!["/docs/foo", "https://other.com/x", "docs/bar-relative"]
        );
    }

    #[test]
    fn skips_anchors_without_href() {
        let html = r#"<a name="top">Top</a><a href="/docs/a">A</a>"#;
        assert_eq!(extract_links(html), vec!["/docs/a"]);
    }

    #[test]
    fn nested_and_malformed_markup() {
        let html = r#"<div><a href="/a"><span>one</div></span><a href="/b">two"#;
        assert_eq!(extract_links(html), vec!["/a", "/b"]);
    }

    #[test]
    fn no_links_in_non_html() {
        assert!(extract_links("just some plain text").is_empty());
        assert!(extract_links("").is_empty());
    }
}
