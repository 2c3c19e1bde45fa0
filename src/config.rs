//! Fixed text-format settings. These are not configurable at runtime.

/// Encoding used for every read and write. Invalid sequences read as U+FFFD.
pub const ENCODING: &str = "utf-8";

/// Separator placed between lines by `write_lines`.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Bytes that end a line when reading. `\r\n` counts as a single terminator.
pub const LINE_TERMINATORS: [u8; 2] = [b'\n', b'\r'];
