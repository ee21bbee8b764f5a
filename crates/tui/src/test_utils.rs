//! Test utilities for the TUI crate.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string, one line per row.
///
/// Trailing whitespace is trimmed from each line.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Returns `true` if the first cell of the first occurrence of `needle` in
/// `buf` carries `modifier`.
#[must_use]
pub(crate) fn row_with_modifier(
    buf: &Buffer,
    needle: &str,
    modifier: ratatui::style::Modifier,
) -> bool {
    for y in 0..buf.area.height {
        let row: String = (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect();
        if let Some(byte_idx) = row.find(needle) {
            let col = row[..byte_idx].chars().count() as u16;
            if let Some(cell) = buf.cell((col, y)) {
                return cell.modifier.contains(modifier);
            }
        }
    }
    false
}
