//! HTML rendering for pages and the index.
//!
//! Output is a pure function of the title and link set, so the same page
//! always renders to the same bytes.

use std::collections::BTreeSet;

use fw_core::Page;

/// Filename of the index page inside the output directory.
pub const INDEX_FILENAME: &str = "index.html";

/// Render a page as an HTML5 document listing its outbound links.
#[must_use]
pub fn render_page(page: &Page) -> String {
    render_document(page.identifier(), page.outbound_links())
}

/// Render the index document linking to every page identifier.
#[must_use]
pub fn render_index(identifiers: &BTreeSet<String>) -> String {
    render_document(INDEX_FILENAME, identifiers)
}

/// Render a document with `title` as title and heading and one ordered
/// list entry per link, in ascending lexicographic order.
#[must_use]
pub fn render_document(title: &str, links: &BTreeSet<String>) -> String {
    let title = escape_html(title);
    let mut html = String::with_capacity(256 + links.len() * 128);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str("<ol>\n");
    for link in links {
        let link = escape_html(link);
        html.push_str(&format!("<li><a href=\"{link}\">{link}</a></li>\n"));
    }
    html.push_str("</ol>\n</body>\n</html>\n");

    html
}

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn hrefs(html: &str) -> Vec<String> {
        let anchor = Regex::new(r#"<a href="([^"]*)">([^<]*)</a>"#).unwrap();
        anchor
            .captures_iter(html)
            .map(|caps| {
                assert_eq!(&caps[1], &caps[2], "href and text must match");
                caps[1].to_owned()
            })
            .collect()
    }

    fn sample_page() -> Page {
        let mut page = Page::new("page_0_x.html");
        page.add_link("page_2_b.html");
        page.add_link("page_10_a.html");
        page.add_link("page_1_c.html");
        page
    }

    #[test]
    fn test_render_is_deterministic() {
        let page = sample_page();
        assert_eq!(render_page(&page), render_page(&page));
    }

    #[test]
    fn test_render_structure() {
        let html = render_page(&sample_page());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>page_0_x.html</title>"));
        assert!(html.contains("<h1>page_0_x.html</h1>"));
        assert!(html.contains("<ol>\n"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_links_round_trip_sorted() {
        let page = sample_page();
        let parsed = hrefs(&render_page(&page));
        let expected: Vec<String> = page.outbound_links().iter().cloned().collect();
        assert_eq!(parsed, expected);
        assert_eq!(parsed, vec!["page_10_a.html", "page_1_c.html", "page_2_b.html"]);
    }

    #[test]
    fn test_empty_links_render_empty_list() {
        let html = render_page(&Page::new("lonely.html"));
        assert!(html.contains("<ol>\n</ol>"));
        assert!(hrefs(&html).is_empty());
    }

    #[test]
    fn test_index_title() {
        let ids: BTreeSet<String> = ["b.html", "a.html"].iter().map(|s| s.to_string()).collect();
        let html = render_index(&ids);
        assert!(html.contains("<title>index.html</title>"));
        assert_eq!(hrefs(&html), vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#x27;");
        assert_eq!(escape_html("page_1.html"), "page_1.html");

        let html = render_document("<script>", &BTreeSet::new());
        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }
}
