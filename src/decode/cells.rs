// src/decode/cells.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

/// One `<td ...>` through the nearest `</td>`; content may span lines.
static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<td[^>]*>(.*?)</td>").expect("cell pattern should compile"));

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern should compile"));

/// Pull the text of every table cell out of `html`, in document order.
///
/// Nested markup is stripped and the text trimmed; cells left empty are
/// dropped so they never take a slot in the triple grouping.
#[instrument(level = "debug", skip(html), fields(html_len = html.len()))]
pub fn extract_cells(html: &str) -> Vec<String> {
    let mut matched = 0usize;
    let cells: Vec<String> = CELL_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .inspect(|_| matched += 1)
        .map(|inner| clean_cell(inner.as_str()))
        .filter(|text| !text.is_empty())
        .collect();

    debug!(matched, kept = cells.len(), "extracted table cells");
    cells
}

fn clean_cell(inner: &str) -> String {
    TAG_RE.replace_all(inner, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_tags() {
        assert_eq!(extract_cells("<td><b>A</b></td>"), vec!["A"]);
        assert_eq!(
            extract_cells(r#"<td class="c1"><p class="c2"><span class="c3">█</span></p></td>"#),
            vec!["█"]
        );
    }

    #[test]
    fn counts_every_non_empty_cell() {
        let html = "<table><tr><td>0</td><td>A</td><td>1</td></tr>\
                    <tr><td> 2 </td><td>B</td><td>3</td></tr></table>";
        assert_eq!(extract_cells(html), vec!["0", "A", "1", "2", "B", "3"]);
    }

    #[test]
    fn matches_do_not_span_cell_boundaries() {
        let html = "<td>1</td><td>2</td>";
        assert_eq!(extract_cells(html), vec!["1", "2"]);
    }

    #[test]
    fn multiline_cells_and_attributes() {
        let html = "<td colspan=\"1\"\n rowspan=\"1\">\n  <p>\n    7\n  </p>\n</td>";
        assert_eq!(extract_cells(html), vec!["7"]);
    }

    #[test]
    fn drops_blank_cells() {
        let html = "<td>   </td><td><span></span></td><td>x</td><td>\n</td>";
        assert_eq!(extract_cells(html), vec!["x"]);
    }

    #[test]
    fn no_cells_is_empty_not_an_error() {
        assert!(extract_cells("").is_empty());
        assert!(extract_cells("<html><body><p>nothing here</p></body></html>").is_empty());
    }

    #[test]
    fn entities_are_left_alone() {
        assert_eq!(extract_cells("<td>&amp;</td>"), vec!["&amp;"]);
    }
}
