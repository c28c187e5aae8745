/// A clamped `[start, end)` window over a collection.
///
/// Bounds are kept as requested (possibly fractional) and truncated only when
/// applied, so `0.5..1.9` selects the same items as `0..1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceRange {
    pub start: f64,
    pub end: f64,
}

impl SliceRange {
    pub const EMPTY: SliceRange = SliceRange {
        start: 0.0,
        end: 0.0,
    };

    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.start.trunc() as usize).min(items.len());
        let end = (self.end.trunc() as usize).min(items.len());
        if end <= start {
            return &[];
        }
        &items[start..end]
    }
}

/// Clamp a requested window to `0 <= start <= end <= length`.
///
/// Anything out of bounds or malformed collapses to `(0, 0)`; an `end` past
/// the collection is pulled back to `length`.
pub fn valid_range(start: f64, end: f64, length: usize) -> SliceRange {
    if start.is_nan() || end.is_nan() {
        return SliceRange::EMPTY;
    }

    let length = length as f64;

    if start < 0.0 || start >= length {
        return SliceRange::EMPTY;
    }

    if end > start && end <= length {
        SliceRange { start, end }
    } else if end > length && start > length {
        SliceRange::EMPTY
    } else if end > length {
        SliceRange { start, end: length }
    } else {
        SliceRange::EMPTY
    }
}

/// Parse a query value the way gateway clients expect numbers to parse:
/// surrounding whitespace is ignored and a blank value means zero.
///
/// `Infinity` (optionally signed) and overflowing literals such as `1e999`
/// are infinite bounds; the `inf`/`infinity` spellings `f64::from_str` also
/// takes are rejected.
pub fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let value = trimmed.parse::<f64>().ok()?;
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        let unsigned = trimmed.trim_start_matches(|c: char| c == '+' || c == '-');
        let spelled =
            unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
        if spelled && unsigned != "Infinity" {
            return None;
        }
    }
    Some(value)
}
