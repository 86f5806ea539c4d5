//! Lenient header probes used before committing to a strict decode

use serde::{Deserialize, Serialize};

/// Bounding box declared by a pattern header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSize {
    pub width: usize,
    pub height: usize,
}

/// Find the first `x = W, y = H` header with positive dimensions
///
/// Returns `None` rather than an error when no usable header exists.
pub fn detect_pattern_size(pattern: &str) -> Option<PatternSize> {
    pattern
        .lines()
        .filter(|line| line.starts_with('x'))
        .find_map(parse_header)
}

/// Read the pattern name from the first `#N` line, if any
pub fn detect_pattern_name(pattern: &str) -> Option<String> {
    pattern
        .lines()
        .filter_map(|line| line.strip_prefix("#N"))
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

fn parse_header(line: &str) -> Option<PatternSize> {
    // "x = 3, y = 3, rule = B3/S23" splits on '=' into ["x ", " 3, y ", " 3, rule ", ...]
    let mut fields = line.split('=').skip(1);
    let width = leading_positive(fields.next()?)?;
    let height = leading_positive(fields.next()?)?;
    Some(PatternSize { width, height })
}

/// Parse the leading decimal digits of a field, ignoring whatever follows
fn leading_positive(field: &str) -> Option<usize> {
    let field = field.trim_start();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok().filter(|&n| n > 0)
}
