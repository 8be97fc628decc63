//! HTML table renderer
//!
//! Renders the diff as a `<table class="diff">` with one row per line of the merged
//! text. Changed text inside a row is wrapped in `<ins>` / `<del>`; the row class
//! and the marker column say which side the row shows:
//!
//! | class     | marker   | row shows                        |
//! |-----------|----------|----------------------------------|
//! | `context` | `&nbsp;` | unchanged text only              |
//! | `added`   | `+`      | the line with its insertions     |
//! | `removed` | `-`      | the line with its deletions      |
//!
//! A line holding both insertions and deletions becomes a `removed` row followed
//! by an `added` row.
//!
//! Only `context_lines` unchanged rows are kept around each changed line. Each run
//! of visible rows starts with a `header` row giving its final-side line number,
//! which is exact because reconciliation never drops final-side text.

use crate::diffing::EditOp;
use crate::formats::detokenizer::detokenize;
use crate::formats::registry::{FormatError, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanClass {
    Context,
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    spans: Vec<(SpanClass, String)>,
    final_line: usize,
}

impl Row {
    fn new(final_line: usize) -> Self {
        Row {
            spans: Vec::new(),
            final_line,
        }
    }

    fn has(&self, class: SpanClass) -> bool {
        self.spans.iter().any(|(c, _)| *c == class)
    }

    fn is_changed(&self) -> bool {
        self.has(SpanClass::Added) || self.has(SpanClass::Removed)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlTableRenderer {
    context_lines: usize,
}

impl HtmlTableRenderer {
    pub fn new(context_lines: usize) -> Self {
        HtmlTableRenderer { context_lines }
    }

    /// Which rows survive context trimming
    fn visible(&self, rows: &[Row]) -> Vec<bool> {
        // Distance to the nearest changed row, swept from both ends
        let mut distance = vec![usize::MAX; rows.len()];

        let mut nearest = None;
        for (i, row) in rows.iter().enumerate() {
            if row.is_changed() {
                nearest = Some(i);
            }
            if let Some(c) = nearest {
                distance[i] = i - c;
            }
        }

        nearest = None;
        for (i, row) in rows.iter().enumerate().rev() {
            if row.is_changed() {
                nearest = Some(i);
            }
            if let Some(c) = nearest {
                distance[i] = distance[i].min(c - i);
            }
        }

        distance
            .into_iter()
            .map(|d| d <= self.context_lines)
            .collect()
    }
}

impl Default for HtmlTableRenderer {
    fn default() -> Self {
        HtmlTableRenderer::new(4)
    }
}

impl Renderer for HtmlTableRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML table, one row per line, with context around changes"
    }

    fn render(&self, ops: &[EditOp]) -> Result<String, FormatError> {
        let rows = split_rows(ops);
        let visible = self.visible(&rows);

        let mut out = String::from("<table class=\"diff\">\n");
        let mut previous_visible = false;
        for (row, show) in rows.iter().zip(visible) {
            if show && !previous_visible {
                out.push_str(&format!(
                    "<tr class=\"header\"><th colspan=\"2\">@@ +{} @@</th></tr>\n",
                    row.final_line
                ));
            }
            if show {
                render_row(row, &mut out);
            }
            previous_visible = show;
        }
        out.push_str("</table>\n");
        Ok(out)
    }
}

/// Lay the edit script out as lines of classified spans
fn split_rows(ops: &[EditOp]) -> Vec<Row> {
    let mut spans = Vec::new();
    for op in ops {
        match op {
            EditOp::Copy { tokens } => spans.push((SpanClass::Context, detokenize(tokens))),
            EditOp::Insert { tokens } => spans.push((SpanClass::Added, detokenize(tokens))),
            EditOp::Delete { tokens } => spans.push((SpanClass::Removed, detokenize(tokens))),
            EditOp::Replace { orig, r#final } => {
                spans.push((SpanClass::Removed, detokenize(orig)));
                spans.push((SpanClass::Added, detokenize(r#final)));
            }
        }
    }

    let mut rows = Vec::new();
    let mut final_line = 1;
    let mut current = Row::new(final_line);

    for (class, text) in spans {
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                // A deleted newline does not exist on the final side
                if class != SpanClass::Removed {
                    final_line += 1;
                }
                rows.push(std::mem::replace(&mut current, Row::new(final_line)));
            }
            if !piece.is_empty() {
                current.spans.push((class, piece.to_string()));
            }
        }
    }
    if !current.spans.is_empty() {
        rows.push(current);
    }

    rows
}

fn render_row(row: &Row, out: &mut String) {
    match (row.has(SpanClass::Removed), row.has(SpanClass::Added)) {
        (true, true) => {
            render_side(row, SpanClass::Removed, out);
            render_side(row, SpanClass::Added, out);
        }
        (true, false) => render_side(row, SpanClass::Removed, out),
        (false, true) => render_side(row, SpanClass::Added, out),
        (false, false) => render_side(row, SpanClass::Context, out),
    }
}

/// One table row: the unchanged spans plus the spans of `side`
fn render_side(row: &Row, side: SpanClass, out: &mut String) {
    let (class, marker) = match side {
        SpanClass::Context => ("context", "&nbsp;"),
        SpanClass::Added => ("added", "+"),
        SpanClass::Removed => ("removed", "-"),
    };

    let mut cell = String::new();
    for (span_class, text) in &row.spans {
        let text = escape_html(text);
        match span_class {
            SpanClass::Context => cell.push_str(&text),
            SpanClass::Added if side == SpanClass::Added => {
                cell.push_str(&format!("<ins>{text}</ins>"))
            }
            SpanClass::Removed if side == SpanClass::Removed => {
                cell.push_str(&format!("<del>{text}</del>"))
            }
            _ => {}
        }
    }
    out.push_str(&format!(
        "<tr class=\"{class}\"><th width=\"15\">{marker}</th><td>{cell}</td></tr>\n"
    ));
}

fn escape_html(text: &str) -> String {
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
