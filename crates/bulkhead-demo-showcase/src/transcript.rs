#![forbid(unsafe_code)]

//! Transcript rendering: committed element trees printed as boxed text.
//!
//! Box edges are aligned by display width, not byte or char count, so
//! transcripts with emoji or CJK text keep their right edge straight.

use bulkhead_core::Element;
use unicode_width::UnicodeWidthStr;

/// Print one committed frame under a pass label.
pub fn print_pass(label: &str, element: &Element) {
    print!("{}", boxed(label, element));
}

/// A narration line between passes.
pub fn print_note(text: &str) {
    println!("  · {text}");
}

/// Render a frame as a labeled box.
pub fn boxed(label: &str, element: &Element) -> String {
    let body = lines(element);
    let content = body
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
        .max(label.width() + 2);

    let mut out = String::new();
    out.push_str(&format!(
        "┌─ {label} {}┐\n",
        "─".repeat(content - 1 - label.width())
    ));
    for line in &body {
        out.push_str(&format!(
            "│ {line}{} │\n",
            " ".repeat(content - line.width())
        ));
    }
    out.push_str(&format!("└{}┘\n", "─".repeat(content + 2)));
    out
}

/// Flatten an element tree into indented lines.
fn lines(element: &Element) -> Vec<String> {
    let mut out = Vec::new();
    lines_into(element, 0, &mut out);
    out
}

fn lines_into(element: &Element, depth: usize, out: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match element {
        Element::Empty => out.push(format!("{pad}(empty)")),
        Element::Text(text) => out.push(format!("{pad}{text}")),
        Element::Node(node) => {
            let mut heading = format!("{pad}<{}", node.kind());
            for (name, value) in node.attrs() {
                heading.push_str(&format!(" {name}={value}"));
            }
            heading.push('>');
            out.push(heading);
            for child in node.children() {
                lines_into(child, depth + 1, out);
            }
        }
    }
}
