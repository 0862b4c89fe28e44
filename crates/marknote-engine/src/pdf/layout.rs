//! Pure page layout for PDF export.
//!
//! The export consumes the same pulldown-cmark event stream the preview
//! renders - never the raw markdown string - flattens it into styled
//! blocks, wraps them to the usable page width and splits the result into
//! A4 pages. Everything here is plain data in, plain data out; the
//! printpdf glue lives in `writer`.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

// A4 geometry, in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const TOP_MARGIN_MM: f32 = 10.0;
pub const SIDE_MARGIN_MM: f32 = 15.0;
pub const BOTTOM_MARGIN_MM: f32 = 15.0;
pub const USABLE_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * SIDE_MARGIN_MM;
pub const USABLE_HEIGHT_MM: f32 = PAGE_HEIGHT_MM - TOP_MARGIN_MM - BOTTOM_MARGIN_MM;

const MM_PER_PT: f32 = 0.352_778;
const LINE_SPACING: f32 = 1.4;
// Average glyph advance as a fraction of the font size. Helvetica metrics
// hover around half the em; Courier is fixed at 0.6.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;
const MONO_GLYPH_WIDTH_FACTOR: f32 = 0.6;

const LIST_INDENT_MM: f32 = 6.0;

/// A structural block extracted from the rendered stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    CodeBlock(Vec<String>),
    ListItem { marker: String, depth: usize, text: String },
    Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Regular,
    Bold,
    Mono,
}

/// One typeset line, ready for the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub font: FontKind,
    pub size_pt: f32,
    pub indent_mm: f32,
    /// Extra gap after this line (set on the last line of a block).
    pub space_after_mm: f32,
}

pub fn line_height_mm(size_pt: f32) -> f32 {
    size_pt * MM_PER_PT * LINE_SPACING
}

/// How many characters fit on one line at the given size.
pub fn max_chars_per_line(width_mm: f32, size_pt: f32, font: FontKind) -> usize {
    let factor = match font {
        FontKind::Mono => MONO_GLYPH_WIDTH_FACTOR,
        _ => GLYPH_WIDTH_FACTOR,
    };
    let chars = width_mm / (size_pt * factor * MM_PER_PT);
    (chars.floor() as usize).max(1)
}

/// Greedy word wrap; words longer than the budget are split hard.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                break;
            }
            if current.is_empty() {
                // Oversized word: take what fits and carry the rest over
                let split = word
                    .char_indices()
                    .nth(max_chars)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                lines.push(word[..split].to_string());
                word = &word[split..];
                if word.is_empty() {
                    break;
                }
            } else {
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Flatten the rendered markdown stream into layout blocks.
pub fn collect_blocks(markdown: &str) -> Vec<Block> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    struct OpenItem {
        marker: String,
        depth: usize,
        text: String,
        flushed: bool,
    }

    let mut blocks = Vec::new();
    let mut text_buf = String::new();
    let mut heading_level: Option<u8> = None;
    let mut code_buf: Option<String> = None;
    // Counters for open lists: Some(next number) for ordered, None for bullets
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut item_stack: Vec<OpenItem> = Vec::new();

    fn flush_item(blocks: &mut Vec<Block>, item: &mut OpenItem) {
        let text = std::mem::take(&mut item.text);
        let text = text.trim().to_string();
        if !text.is_empty() || !item.flushed {
            blocks.push(Block::ListItem {
                marker: item.marker.clone(),
                depth: item.depth,
                text,
            });
        }
        item.flushed = true;
    }

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading_level = Some(level as u8);
                text_buf.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                blocks.push(Block::Heading {
                    level: heading_level.take().unwrap_or(1),
                    text: std::mem::take(&mut text_buf).trim().to_string(),
                });
            }
            Event::Start(Tag::CodeBlock(_)) => {
                code_buf = Some(String::new());
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(code) = code_buf.take() {
                    let lines = code
                        .trim_end_matches('\n')
                        .split('\n')
                        .map(str::to_string)
                        .collect();
                    blocks.push(Block::CodeBlock(lines));
                }
            }
            Event::Start(Tag::List(start)) => {
                // A nested list closes out the text of the item holding it
                if let Some(item) = item_stack.last_mut() {
                    flush_item(&mut blocks, item);
                }
                list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
            }
            Event::Start(Tag::Item) => {
                let marker = match list_stack.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{number}.");
                        *number += 1;
                        marker
                    }
                    _ => "-".to_string(),
                };
                item_stack.push(OpenItem {
                    marker,
                    depth: list_stack.len().saturating_sub(1),
                    text: String::new(),
                    flushed: false,
                });
            }
            Event::End(TagEnd::Item) => {
                if let Some(mut item) = item_stack.pop() {
                    flush_item(&mut blocks, &mut item);
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if item_stack.is_empty() {
                    let text = std::mem::take(&mut text_buf).trim().to_string();
                    if !text.is_empty() {
                        blocks.push(Block::Paragraph(text));
                    }
                }
            }
            Event::Rule => {
                blocks.push(Block::Rule);
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(code) = code_buf.as_mut() {
                    code.push_str(&text);
                } else if let Some(item) = item_stack.last_mut() {
                    item.text.push_str(&text);
                } else {
                    text_buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(code) = code_buf.as_mut() {
                    code.push('\n');
                } else if let Some(item) = item_stack.last_mut() {
                    item.text.push(' ');
                } else {
                    text_buf.push(' ');
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Typeset blocks into wrapped lines at the usable page width.
pub fn layout_lines(blocks: &[Block]) -> Vec<Line> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let size_pt = match level {
                    1 => 20.0,
                    2 => 16.0,
                    _ => 13.0,
                };
                push_wrapped(&mut lines, text, FontKind::Bold, size_pt, 0.0, 2.5);
            }
            Block::Paragraph(text) => {
                push_wrapped(&mut lines, text, FontKind::Regular, 11.0, 0.0, 2.0);
            }
            Block::CodeBlock(code_lines) => {
                let size_pt = 9.5;
                for (i, code_line) in code_lines.iter().enumerate() {
                    let last = i + 1 == code_lines.len();
                    // Code is pre-formatted; overlong lines are clipped by
                    // a hard split rather than re-wrapped
                    let budget =
                        max_chars_per_line(USABLE_WIDTH_MM - 4.0, size_pt, FontKind::Mono);
                    let pieces = split_hard(code_line, budget);
                    let piece_count = pieces.len();
                    for (j, piece) in pieces.into_iter().enumerate() {
                        lines.push(Line {
                            text: piece,
                            font: FontKind::Mono,
                            size_pt,
                            indent_mm: 4.0,
                            space_after_mm: if last && j + 1 == piece_count { 2.0 } else { 0.0 },
                        });
                    }
                }
            }
            Block::ListItem {
                marker,
                depth,
                text,
            } => {
                let indent = LIST_INDENT_MM * (*depth as f32 + 1.0) - LIST_INDENT_MM;
                let full = format!("{marker} {text}");
                push_wrapped(&mut lines, &full, FontKind::Regular, 11.0, indent, 0.8);
            }
            Block::Rule => {
                lines.push(Line {
                    text: "-".repeat(40),
                    font: FontKind::Regular,
                    size_pt: 11.0,
                    indent_mm: 0.0,
                    space_after_mm: 2.0,
                });
            }
        }
    }

    lines
}

fn push_wrapped(
    lines: &mut Vec<Line>,
    text: &str,
    font: FontKind,
    size_pt: f32,
    indent_mm: f32,
    space_after_mm: f32,
) {
    let budget = max_chars_per_line(USABLE_WIDTH_MM - indent_mm, size_pt, font);
    let wrapped = wrap(text, budget);
    let count = wrapped.len();
    for (i, line_text) in wrapped.into_iter().enumerate() {
        lines.push(Line {
            text: line_text,
            font,
            size_pt,
            indent_mm,
            space_after_mm: if i + 1 == count { space_after_mm } else { 0.0 },
        });
    }
}

fn split_hard(text: &str, max_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Split lines into pages, breaking when the usable height is exhausted.
/// The fixed top margin applies to every page; a block's trailing gap
/// never forces a break on its own.
pub fn paginate(lines: Vec<Line>) -> Vec<Vec<Line>> {
    let mut pages = Vec::new();
    let mut current: Vec<Line> = Vec::new();
    let mut used_mm = 0.0_f32;

    for line in lines {
        let height = line_height_mm(line.size_pt);
        if used_mm + height > USABLE_HEIGHT_MM && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            used_mm = 0.0;
        }
        used_mm += height + line.space_after_mm;
        current.push(line);
    }

    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("short text", 40), vec!["short text"]);
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_splits_oversized_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_of_empty_text_yields_no_lines() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn collect_blocks_extracts_headings_and_paragraphs() {
        let blocks = collect_blocks("# Title\n\nSome *emphasised* body.\n");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: "Title".to_string()
                },
                Block::Paragraph("Some emphasised body.".to_string()),
            ]
        );
    }

    #[test]
    fn collect_blocks_numbers_ordered_lists() {
        let blocks = collect_blocks("1. first\n2. second\n");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem {
                    marker: "1.".to_string(),
                    depth: 0,
                    text: "first".to_string()
                },
                Block::ListItem {
                    marker: "2.".to_string(),
                    depth: 0,
                    text: "second".to_string()
                },
            ]
        );
    }

    #[test]
    fn collect_blocks_keeps_nested_items_in_document_order() {
        let blocks = collect_blocks("- parent\n  - child\n- sibling\n");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem {
                    marker: "-".to_string(),
                    depth: 0,
                    text: "parent".to_string()
                },
                Block::ListItem {
                    marker: "-".to_string(),
                    depth: 1,
                    text: "child".to_string()
                },
                Block::ListItem {
                    marker: "-".to_string(),
                    depth: 0,
                    text: "sibling".to_string()
                },
            ]
        );
    }

    #[test]
    fn collect_blocks_preserves_code_lines() {
        let blocks = collect_blocks("```\nlet x = 1;\nlet y = 2;\n```\n");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock(vec![
                "let x = 1;".to_string(),
                "let y = 2;".to_string()
            ])]
        );
    }

    #[test]
    fn headings_are_set_larger_and_bold() {
        let lines = layout_lines(&[Block::Heading {
            level: 1,
            text: "Title".to_string(),
        }]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].font, FontKind::Bold);
        assert!(lines[0].size_pt > 11.0);
    }

    #[test]
    fn list_items_are_indented_by_depth() {
        let lines = layout_lines(&[
            Block::ListItem {
                marker: "-".to_string(),
                depth: 0,
                text: "top".to_string(),
            },
            Block::ListItem {
                marker: "-".to_string(),
                depth: 1,
                text: "nested".to_string(),
            },
        ]);
        assert!(lines[1].indent_mm > lines[0].indent_mm);
        assert_eq!(lines[0].text, "- top");
    }

    #[test]
    fn only_the_last_wrapped_line_carries_the_block_gap() {
        let long = "word ".repeat(60);
        let lines = layout_lines(&[Block::Paragraph(long.trim().to_string())]);
        assert!(lines.len() > 1);
        assert!(lines[..lines.len() - 1]
            .iter()
            .all(|l| l.space_after_mm == 0.0));
        assert!(lines.last().unwrap().space_after_mm > 0.0);
    }

    #[test]
    fn short_documents_fit_on_one_page() {
        let lines = layout_lines(&collect_blocks("# Title\n\nA short paragraph.\n"));
        assert_eq!(paginate(lines).len(), 1);
    }

    #[test]
    fn long_documents_break_onto_further_pages() {
        let markdown = "paragraph\n\n".repeat(200);
        let lines = layout_lines(&collect_blocks(&markdown));
        let pages = paginate(lines.clone());
        assert!(pages.len() > 1);

        // No page exceeds the usable height
        for page in &pages {
            let sum: f32 = page.iter().map(|l| line_height_mm(l.size_pt)).sum();
            assert!(sum <= USABLE_HEIGHT_MM);
        }

        // And nothing is lost across the breaks
        let total: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(total, lines.len());
    }
}
