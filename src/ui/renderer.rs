//! Plain-text rendering of a [`ResultView`].
//!
//! Used by the CLI to print the current page. Output is built into a
//! `String` so it can be asserted on; the caller decides where it goes.
//!
//! # Layout
//!
//! ```text
//! 3 posts · page 1 of 1 · query "dock"
//! Tags: [x] DevOps (2)  [ ] React (3)
//!
//!  1. Docker basics  #devops
//!     Containers from scratch.
//! ```

use crate::ui::viewmodel::{ItemView, ResultView};
use std::fmt::Write as _;

const HIGHLIGHT: &str = "\u{1b}[1;33m";
const DIM: &str = "\u{1b}[2m";
const RESET: &str = "\u{1b}[0m";

/// Output styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// No escape sequences.
    #[default]
    Plain,
    /// ANSI colors: match highlights in bold yellow, secondary text dimmed.
    Ansi,
}

/// Renders the view as terminal text.
///
/// # Example
///
/// ```rust
/// use postlist::app::ListController;
/// use postlist::location::MemoryLocation;
/// use postlist::storage::MemorySlot;
/// use postlist::ui::{render, TextStyle};
/// use postlist::{Config, ContentItem};
///
/// let items = vec![ContentItem::new("a", "Docker basics", ["DevOps"])];
/// let mut list = ListController::new(items, MemoryLocation::default(), MemorySlot::new(), &Config::default());
/// list.mount();
///
/// let text = render(&list.view(), TextStyle::Plain);
/// assert!(text.starts_with("1 post · page 1 of 1"));
/// assert!(text.contains(" 1. Docker basics  #devops"));
/// ```
#[must_use]
pub fn render(view: &ResultView, style: TextStyle) -> String {
    let mut out = String::new();
    render_summary(&mut out, view);
    render_tags(&mut out, view);
    out.push('\n');

    if let Some(empty) = &view.empty_state {
        let _ = writeln!(out, "{}", empty.title);
        let _ = writeln!(out, "  {}", dim(&empty.description, style));
        if empty.can_reset {
            let _ = writeln!(out, "  {}", dim("(use --reset to clear filters)", style));
        }
        return out;
    }

    let first = (view.pagination.page as usize - 1) * view.pagination.page_size + 1;
    for (offset, item) in view.items.iter().enumerate() {
        render_item(&mut out, first + offset, item, style);
    }
    out
}

fn render_summary(out: &mut String, view: &ResultView) {
    let p = &view.pagination;
    let noun = if p.total == 1 { "post" } else { "posts" };
    let _ = write!(out, "{} {noun} · page {} of {}", p.total, p.page, p.total_pages);
    if !view.query.trim().is_empty() {
        let _ = write!(out, " · query \"{}\"", view.query.trim());
    }
    out.push('\n');
}

fn render_tags(out: &mut String, view: &ResultView) {
    if view.tags.is_empty() {
        return;
    }
    let chips = view
        .tags
        .iter()
        .map(|tag| {
            let mark = if tag.active { 'x' } else { ' ' };
            format!("[{mark}] {} ({})", tag.label, tag.count)
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "Tags: {chips}");
}

fn render_item(out: &mut String, number: usize, item: &ItemView, style: TextStyle) {
    let _ = write!(out, "{number:>2}. {}", highlighted(&item.title, &item.title_highlights, style));
    for tag in &item.tags {
        let _ = write!(out, "  #{}", tag.id);
    }
    out.push('\n');

    if !item.excerpt.is_empty() {
        let _ = writeln!(out, "    {}", dim(&item.excerpt, style));
    }
}

/// Wraps the highlighted character ranges of `text` in ANSI escapes.
fn highlighted(text: &str, ranges: &[(usize, usize)], style: TextStyle) -> String {
    if ranges.is_empty() || style == TextStyle::Plain {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * 12);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }
        out.push_str(HIGHLIGHT);
        out.extend(&chars[start.max(current_pos)..end.max(current_pos)]);
        out.push_str(RESET);
        current_pos = end.max(current_pos);
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
    out
}

fn dim(text: &str, style: TextStyle) -> String {
    match style {
        TextStyle::Plain => text.to_string(),
        TextStyle::Ansi => format!("{DIM}{text}{RESET}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_are_wrapped_per_range() {
        let out = highlighted("Docker basics", &[(0, 4), (7, 8)], TextStyle::Ansi);
        assert_eq!(out, format!("{HIGHLIGHT}Dock{RESET}er {HIGHLIGHT}b{RESET}asics"));
    }

    #[test]
    fn plain_style_ignores_highlights() {
        assert_eq!(highlighted("Docker", &[(0, 2)], TextStyle::Plain), "Docker");
    }

    #[test]
    fn out_of_range_highlights_are_clipped() {
        let out = highlighted("ab", &[(1, 9)], TextStyle::Ansi);
        assert_eq!(out, format!("a{HIGHLIGHT}b{RESET}"));
    }
}
