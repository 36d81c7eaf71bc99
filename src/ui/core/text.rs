use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0usize;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
///
/// Words wider than a line are broken at grapheme boundaries. When the text
/// does not fit, the last line ends with an ellipsis.
pub fn wrap(text: &str, width: u16, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let limit = width as usize;

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_w = 0usize;
    let mut overflow = false;

    'words: for word in text.split_whitespace() {
        let word_w = word.width();
        let sep = usize::from(line_w > 0);
        if line_w + sep + word_w <= limit {
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_w += sep + word_w;
            continue;
        }

        if line_w > 0 {
            lines.push(std::mem::take(&mut line));
            line_w = 0;
            if lines.len() == max_lines {
                overflow = true;
                break 'words;
            }
        }

        for g in word.graphemes(true) {
            let w = g.width();
            if line_w + w > limit {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
                if lines.len() == max_lines {
                    overflow = true;
                    break 'words;
                }
            }
            line.push_str(g);
            line_w += w;
        }
    }

    if !overflow && line_w > 0 {
        if lines.len() == max_lines {
            overflow = true;
        } else {
            lines.push(line);
        }
    }

    if overflow {
        if let Some(last) = lines.last_mut() {
            let mut marked = last.clone();
            marked.push_str(ELLIPSIS);
            *last = truncate(&marked, width);
        }
    }

    lines
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
