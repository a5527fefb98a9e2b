//! Generic block splitter: cuts raw text into per-event chunks.

use super::patterns::{SPLIT_DATE, is_boundary_line};

/// How far above a date line we look for a blank line or boundary marker.
const LOOK_BACK_LINES: usize = 3;

/// Lines absorbed above a date line when no blank/marker line is found.
const DEFAULT_ABSORB_LINES: usize = 2;

/// Split `text` into blocks that each hopefully describe one event.
///
/// 1. Two or more lines carrying *distinct* date substrings become block
///    starts (the first block always starts at the top of the text).
/// 2. Otherwise, two or more boundary-marker lines become block starts.
/// 3. Otherwise the whole text is one block.
pub fn split_blocks(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();

    if let Some(blocks) = split_on_dates(&lines) {
        return blocks;
    }
    if let Some(blocks) = split_on_markers(&lines) {
        return blocks;
    }

    vec![text.to_string()]
}

fn split_on_dates(lines: &[&str]) -> Option<Vec<String>> {
    // first line of each distinct date value
    let mut seen: Vec<&str> = Vec::new();
    let mut starts: Vec<usize> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if let Some(m) = SPLIT_DATE.find(line) {
            let value = m.as_str().trim();
            if !seen.contains(&value) {
                seen.push(value);
                starts.push(idx);
            }
        }
    }

    if starts.len() < 2 {
        return None;
    }

    let blocks = starts
        .iter()
        .enumerate()
        .map(|(b, &date_line)| {
            let start = if b == 0 {
                0
            } else {
                block_start(lines, date_line, starts[b - 1] + 1)
            };
            let end = starts.get(b + 1).copied().unwrap_or(lines.len());
            lines[start..end].join("\n")
        })
        .collect();

    Some(blocks)
}

/// Where a block whose date sits on `date_line` should begin.
///
/// A blank line or separator rule within the look-back window starts the
/// block right after it; a boundary marker starts the block at the marker
/// itself. Without either, a couple of preceding lines are taken as well.
/// The block never reaches back past `min_start` (the line after the
/// previous block's date line).
fn block_start(lines: &[&str], date_line: usize, min_start: usize) -> usize {
    let floor = date_line.saturating_sub(LOOK_BACK_LINES).max(min_start);

    for lb in (floor..date_line).rev() {
        let trimmed = lines[lb].trim();
        if trimmed.is_empty() || is_separator(trimmed) {
            return lb + 1;
        }
        if is_boundary_line(trimmed) {
            return lb;
        }
    }

    date_line.saturating_sub(DEFAULT_ABSORB_LINES).max(min_start)
}

fn split_on_markers(lines: &[&str]) -> Option<Vec<String>> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_boundary_line(line.trim()))
        .map(|(idx, _)| idx)
        .collect();

    if starts.len() < 2 {
        return None;
    }

    let blocks: Vec<String> = starts
        .iter()
        .enumerate()
        .map(|(b, &start)| {
            let end = starts.get(b + 1).copied().unwrap_or(lines.len());
            let body: Vec<&str> = lines[start..end]
                .iter()
                .copied()
                .skip_while(|l| l.trim().is_empty() || is_separator(l.trim()))
                .collect();
            body.join("\n").trim().to_string()
        })
        .filter(|block| !block.is_empty())
        .collect();

    (blocks.len() >= 2).then_some(blocks)
}

/// "-----", "=====", "___" rules between events.
fn is_separator(line: &str) -> bool {
    line.chars().count() >= 3 && line.chars().all(|c| matches!(c, '-' | '=' | '_'))
}
