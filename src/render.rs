//! Rendering of the filtered view.
//!
//! Rendering produces a small element tree rather than markup text. The tree
//! can be serialized with [`Node::to_markup`], which escapes every text and
//! attribute value, or handed to a UI framework that builds real DOM nodes
//! from it.

use crate::config::ElementIds;
use crate::record::InspectionRecord;

/// Maximum number of violations shown on a card.
pub const MAX_VIOLATIONS: usize = 3;

pub const EMPTY_STATE: &str = "No inspections match your filters.";
pub const NO_RESULTS: &str = "No results.";
pub const NO_VIOLATIONS: &str = "No violations listed.";

/// Escape text for insertion into markup.
///
/// Replaces `&`, `<`, `>`, `"` and `'`; everything else passes through.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with an optional class list and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Serialize to markup, escaping all text and attribute values.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                if let Some(class) = &el.class {
                    out.push_str(" class=\"");
                    out.push_str(&escape_html(class));
                    out.push('"');
                }
                out.push('>');
                for child in &el.children {
                    child.write_markup(out);
                }
                out.push_str("</");
                out.push_str(el.tag);
                out.push('>');
            }
        }
    }

    /// Concatenated text content of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Whether this node or a descendant carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        match self {
            Node::Text(_) => false,
            Node::Element(el) => {
                el.class
                    .as_deref()
                    .is_some_and(|c| c.split_whitespace().any(|c| c == class))
                    || el.children.iter().any(|child| child.has_class(class))
            }
        }
    }
}

/// Score classification shown on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBadge {
    Great,
    Good,
    Ok,
    Poor,
    Unknown,
}

impl ScoreBadge {
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::Unknown,
            Some(s) if s >= 95.0 => Self::Great,
            Some(s) if s >= 90.0 => Self::Good,
            Some(s) if s >= 80.0 => Self::Ok,
            Some(_) => Self::Poor,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Great => "score-great",
            Self::Good => "score-good",
            Self::Ok => "score-ok",
            Self::Poor => "score-poor",
            Self::Unknown => "score-unknown",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Text inside the score pill: the score, or a dash when absent.
fn score_text(score: Option<f64>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => "\u{2013}".to_string(),
    }
}

/// Class suffix for a status: lowercased, whitespace runs become dashes.
fn status_slug(status: Option<&str>) -> String {
    let slug = non_empty(status)
        .unwrap_or("")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() { "unknown".to_string() } else { slug }
}

/// Render one inspection card.
pub fn render_card(record: &InspectionRecord) -> Node {
    let name = non_empty(record.name.as_deref()).unwrap_or("Unknown");
    let status = non_empty(record.status.as_deref()).unwrap_or("Unknown");

    let header = Element::new("div")
        .class("card-header")
        .child(
            Element::new("div")
                .child(Element::new("h2").class("restaurant-name").text(name))
                .child(
                    Element::new("div")
                        .class("restaurant-meta")
                        .child(Element::new("span").text(record.city_or_empty()))
                        .text(" \u{b7} ")
                        .child(Element::new("span").text(record.address_or_empty())),
                ),
        )
        .child(
            Element::new("div")
                .class(format!(
                    "score-pill {}",
                    ScoreBadge::from_score(record.score).css_class()
                ))
                .text(score_text(record.score)),
        );

    let mut badges = Element::new("div").class("badge-row").child(
        Element::new("span")
            .class(format!("badge status-{}", status_slug(record.status.as_deref())))
            .text(status),
    );
    if let Some(date) = non_empty(record.last_inspection_date.as_deref()) {
        badges = badges.child(
            Element::new("span")
                .class("badge date-badge")
                .text(format!("Last inspection: {date}")),
        );
    }

    let violations = record.violations();
    let violations = if violations.is_empty() {
        Element::new("div")
            .class("violations none")
            .text(NO_VIOLATIONS)
    } else {
        let list = violations
            .iter()
            .take(MAX_VIOLATIONS)
            .fold(Element::new("ul"), |ul, v| {
                ul.child(Element::new("li").text(v.as_str()))
            });
        Element::new("div")
            .class("violations")
            .child(
                Element::new("div")
                    .class("violations-title")
                    .text("Recent violations:"),
            )
            .child(list)
    };

    Element::new("div")
        .class("inspection-card")
        .child(header)
        .child(
            Element::new("div")
                .class("card-body")
                .child(badges)
                .child(violations),
        )
        .into()
}

/// Summary line for a result count.
pub fn summary_text(count: usize) -> String {
    match count {
        0 => NO_RESULTS.to_string(),
        1 => "1 location shown".to_string(),
        n => format!("{n} locations shown"),
    }
}

/// Rendered result set: cards (or the empty placeholder) plus the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub nodes: Vec<Node>,
    pub summary: String,
    pub is_empty: bool,
}

impl RenderedView {
    /// Markup for the results container.
    pub fn to_markup(&self) -> String {
        self.nodes.iter().map(Node::to_markup).collect()
    }
}

/// Render the filtered view.
pub fn render_results(records: &[InspectionRecord]) -> RenderedView {
    if records.is_empty() {
        return RenderedView {
            nodes: vec![Element::new("p").class("empty-state").text(EMPTY_STATE).into()],
            summary: NO_RESULTS.to_string(),
            is_empty: true,
        };
    }

    RenderedView {
        nodes: records.iter().map(render_card).collect(),
        summary: summary_text(records.len()),
        is_empty: false,
    }
}

/// Wrap a rendered view into a standalone HTML document.
pub fn render_page(view: &RenderedView, error: Option<&str>) -> String {
    let ids = ElementIds::default();
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Inspection Results</title>\n</head>\n<body>\n");
    if let Some(message) = error {
        page.push_str(&format!(
            "<div id=\"{}\" class=\"error-message\">{}</div>\n",
            ids.error_message,
            escape_html(message)
        ));
    }
    page.push_str(&format!(
        "<p id=\"{}\">{}</p>\n",
        ids.summary_text,
        escape_html(&view.summary)
    ));
    page.push_str(&format!(
        "<div id=\"{}\">{}</div>\n",
        ids.results_container,
        view.to_markup()
    ));
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_markup(record: &InspectionRecord) -> String {
        render_card(record).to_markup()
    }

    #[test]
    fn test_escape_html_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_script_name_is_escaped() {
        let record = InspectionRecord::named("<script>alert(1)</script>");
        let markup = card_markup(&record);
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let record = InspectionRecord::named("x").with_status("a\"><b");
        let markup = card_markup(&record);
        assert!(markup.contains("class=\"badge status-a&quot;&gt;&lt;b\""));
    }

    #[test]
    fn test_score_badges() {
        assert_eq!(ScoreBadge::from_score(Some(96.0)), ScoreBadge::Great);
        assert_eq!(ScoreBadge::from_score(Some(95.0)), ScoreBadge::Great);
        assert_eq!(ScoreBadge::from_score(Some(94.9)), ScoreBadge::Good);
        assert_eq!(ScoreBadge::from_score(Some(90.0)), ScoreBadge::Good);
        assert_eq!(ScoreBadge::from_score(Some(80.0)), ScoreBadge::Ok);
        assert_eq!(ScoreBadge::from_score(Some(79.0)), ScoreBadge::Poor);
        assert_eq!(ScoreBadge::from_score(Some(0.0)), ScoreBadge::Poor);
        assert_eq!(ScoreBadge::from_score(None), ScoreBadge::Unknown);
    }

    #[test]
    fn test_score_pill_text() {
        let with = card_markup(&InspectionRecord::named("A").with_score(96.0));
        assert!(with.contains("<div class=\"score-pill score-great\">96</div>"));

        let fractional = card_markup(&InspectionRecord::named("A").with_score(88.5));
        assert!(fractional.contains("<div class=\"score-pill score-ok\">88.5</div>"));

        let without = card_markup(&InspectionRecord::named("B"));
        assert!(without.contains("<div class=\"score-pill score-unknown\">\u{2013}</div>"));
    }

    #[test]
    fn test_card_defaults() {
        let card = render_card(&InspectionRecord::default());
        let markup = card.to_markup();
        assert!(markup.contains("<h2 class=\"restaurant-name\">Unknown</h2>"));
        assert!(markup.contains("<span class=\"badge status-unknown\">Unknown</span>"));
        assert!(card.has_class("violations"));
        assert!(card.has_class("none"));
        assert!(markup.contains(NO_VIOLATIONS));
        assert!(!card.has_class("date-badge"));
    }

    #[test]
    fn test_status_class_is_slugged() {
        let card = render_card(&InspectionRecord::named("A").with_status("Conditional Pass"));
        assert!(card.has_class("status-conditional-pass"));
        assert!(card.text_content().contains("Conditional Pass"));
    }

    #[test]
    fn test_date_badge_when_present() {
        let mut record = InspectionRecord::named("A");
        record.last_inspection_date = Some("2024-05-02".to_string());
        let card = render_card(&record);
        assert!(card.has_class("date-badge"));
        assert!(card.text_content().contains("Last inspection: 2024-05-02"));

        record.last_inspection_date = Some(String::new());
        assert!(!render_card(&record).has_class("date-badge"));
    }

    #[test]
    fn test_only_first_three_violations() {
        let mut record = InspectionRecord::named("A");
        record.violations = Some(
            ["one", "two", "three", "four"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        let markup = card_markup(&record);
        assert!(markup.contains("Recent violations:"));
        assert_eq!(markup.matches("<li>").count(), 3);
        assert!(markup.contains("<li>three</li>"));
        assert!(!markup.contains("four"));
    }

    #[test]
    fn test_empty_violation_list_shows_placeholder() {
        let mut record = InspectionRecord::named("A");
        record.violations = Some(vec![]);
        assert!(card_markup(&record).contains(NO_VIOLATIONS));
    }

    #[test]
    fn test_meta_line() {
        let record = InspectionRecord::named("A")
            .with_city("Austin")
            .with_address("1 <Main>");
        let markup = card_markup(&record);
        assert!(markup.contains(
            "<div class=\"restaurant-meta\"><span>Austin</span> \u{b7} <span>1 &lt;Main&gt;</span></div>"
        ));
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(summary_text(0), "No results.");
        assert_eq!(summary_text(1), "1 location shown");
        assert_eq!(summary_text(2), "2 locations shown");
        assert_eq!(summary_text(10), "10 locations shown");
    }

    #[test]
    fn test_empty_results() {
        let view = render_results(&[]);
        assert!(view.is_empty);
        assert_eq!(view.summary, "No results.");
        assert_eq!(
            view.to_markup(),
            "<p class=\"empty-state\">No inspections match your filters.</p>"
        );
    }

    #[test]
    fn test_one_card_per_record() {
        let records = vec![
            InspectionRecord::named("A").with_score(96.0),
            InspectionRecord::named("C").with_score(82.0),
            InspectionRecord::named("B"),
        ];
        let view = render_results(&records);
        assert!(!view.is_empty);
        assert_eq!(view.nodes.len(), 3);
        assert_eq!(view.summary, "3 locations shown");
        assert!(view.nodes[0].has_class("score-great"));
        assert!(view.nodes[1].has_class("score-ok"));
        assert!(view.nodes[2].has_class("score-unknown"));
    }

    #[test]
    fn test_nested_markup() {
        let node: Node = Element::new("div")
            .class("card")
            .child(Element::new("h3").text("A & B"))
            .child(Element::new("ul").child(Element::new("li").class("v").text("x")))
            .into();
        assert_eq!(
            node.to_markup(),
            "<div class=\"card\"><h3>A &amp; B</h3><ul><li class=\"v\">x</li></ul></div>"
        );
    }

    #[test]
    fn test_page_without_error() {
        let page = render_page(&render_results(&[]), None);
        assert!(!page.contains("errorMessage"));
        assert!(page.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_page_contains_summary_and_error() {
        let view = render_results(&[]);
        let page = render_page(&view, Some("Could not <load>"));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<p id=\"summaryText\">No results.</p>"));
        assert!(page.contains("id=\"errorMessage\" class=\"error-message\">Could not &lt;load&gt;</div>"));
        assert!(page.contains("<div id=\"resultsContainer\"><p class=\"empty-state\">"));
    }
}
