//! Layout rules of the tab strip that do not depend on a particular UI toolkit.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    Rounded,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corners {
    pub left: Corner,
    pub right: Corner,
}

impl Corners {
    /// The outer corners of the strip are rounded, unless scroll hints take their place.
    #[must_use]
    pub fn for_header(index: usize, count: usize, overflowing: bool) -> Self {
        let rounded = |outer: bool| {
            if outer && !overflowing {
                Corner::Rounded
            } else {
                Corner::Square
            }
        };

        Self {
            left: rounded(index == 0),
            right: rounded(index + 1 == count),
        }
    }
}

/// Headers that fit into `available` starting at `offset`.
///
/// Never empty while there are headers, even if the first one does not fit.
#[must_use]
pub fn visible_range(widths: &[u32], offset: usize, available: u32) -> Range<usize> {
    if widths.is_empty() {
        return 0..0;
    }

    let start = offset.min(widths.len() - 1);
    let mut used = 0u32;
    let mut end = start;

    for &width in &widths[start..] {
        if end > start && used.saturating_add(width) > available {
            break;
        }
        used = used.saturating_add(width);
        end += 1;
    }

    start..end
}

/// Offset that makes the `target` header visible with the least scrolling.
#[must_use]
pub fn scroll_into_view(target: usize, offset: usize, widths: &[u32], available: u32) -> usize {
    if target >= widths.len() {
        return offset.min(widths.len().saturating_sub(1));
    }
    if target <= offset {
        return target;
    }

    let mut offset = offset;
    while !visible_range(widths, offset, available).contains(&target) {
        offset += 1;
    }
    offset
}
