//! Whole-file text I/O.
//!
//! Every write replaces the target: an existing file is deleted and a new one created in
//! its place. Reads of a missing file yield empty results instead of an error.
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::config::ENCODING;
use crate::error::{Action, Error, Result};
use crate::store::lines;

/// Reads the file and concatenates its lines without any separator.
///
/// Line boundaries are not preserved: a file holding `ab\ncd` reads as `abcd`.
pub fn read_all(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let Some(text) = read_text(path)? else {
        tracing::trace!(path = %path.display(), "read_all: no such file");
        return Ok(String::new());
    };
    let content = lines::split_lines(&text).concat();
    tracing::debug!(path = %path.display(), bytes = content.len(), "read_all");
    Ok(content)
}

/// Replaces the file with `content`, written verbatim. `None` leaves the file alone.
pub fn write_all(content: Option<&str>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let Some(content) = content else {
        tracing::trace!(path = %path.display(), "write_all: nothing to write");
        return Ok(());
    };
    replace_file(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "write_all");
    Ok(())
}

/// Reads the file as lines with terminators stripped.
///
/// A file whose last byte is a line terminator gets one extra empty line, so lists written
/// by [`write_lines`] that end in `""` read back unchanged.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let Some(text) = read_text(path)? else {
        tracing::trace!(path = %path.display(), "read_lines: no such file");
        return Ok(Vec::new());
    };
    let mut result = lines::split_lines(&text);
    if lines::ends_with_terminator(text.as_bytes()) {
        tracing::debug!(path = %path.display(), "trailing terminator, appending empty line");
        result.push(String::new());
    }
    tracing::debug!(path = %path.display(), lines = result.len(), "read_lines");
    Ok(result)
}

/// Replaces the file with `lines` joined by CRLF, with no separator after the last line.
///
/// `None` leaves the file alone. An empty slice produces an empty file.
pub fn write_lines<S: AsRef<str>>(lines: Option<&[S]>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let Some(lines) = lines else {
        tracing::trace!(path = %path.display(), "write_lines: nothing to write");
        return Ok(());
    };
    let joined = lines::join_lines(lines);
    replace_file(path, &joined)?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "write_lines");
    Ok(())
}

/// Returns `None` when the file does not exist. Invalid UTF-8 decodes lossily.
fn read_text(path: &Path) -> Result<Option<String>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(Action::Open, path, e)),
    };
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| Error::io(Action::Read, path, e))?;
    let text = String::from_utf8(bytes).unwrap_or_else(|e| {
        tracing::debug!(
            path = %path.display(),
            encoding = ENCODING,
            "invalid byte sequences replaced with U+FFFD"
        );
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    });
    Ok(Some(text))
}

fn replace_file(path: &Path, contents: &str) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(Action::Delete, path, e)),
    }
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::io(Action::Create, path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| Error::io(Action::Write, path, e))?;
    writer.flush().map_err(|e| Error::io(Action::Flush, path, e))
}
