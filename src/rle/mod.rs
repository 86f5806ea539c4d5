//! Run-length encoded (RLE) pattern codec
//!
//! Patterns are plain text: `#` comment lines, one `x = W, y = H, rule = ...`
//! header and a body of `<count><tag>` runs where the tag is `b` (dead),
//! `o` (alive), `$` (end of row) or `!` (end of pattern).

pub mod decoder;
pub mod encoder;
pub mod probe;

pub use decoder::decode_pattern;
pub use encoder::{encode_pattern, export_file_name, DEFAULT_PATTERN_NAME, RLE_MIME_TYPE};
pub use probe::{detect_pattern_name, detect_pattern_size, PatternSize};
