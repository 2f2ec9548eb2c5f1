//! Writes a finished wordlist to disk.
//!
//! The list is written to a hidden sibling file first and renamed over the
//! destination once it is fully flushed, so a failed write never leaves a
//! truncated list at the destination.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, Result};

/// Writes `words` one per line, each terminated by `\n`.
pub fn write_lines<W, S>(writer: &mut W, words: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for word in words {
        writer.write_all(word.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Creates or replaces the file at `path` with `words`, one per line.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(words), fields(word_count = words.len()))
)]
pub fn write_wordlist<S: AsRef<str>>(path: &Path, words: &[S]) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let tmp = staging_path(path).map_err(io_error)?;
    if let Err(source) = write_staged(&tmp, words).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error(source));
    }

    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), words = words.len(), "wrote wordlist");
    Ok(())
}

fn write_staged<S: AsRef<str>>(tmp: &Path, words: &[S]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(tmp)?);
    write_lines(&mut writer, words)?;
    let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
    file.sync_all()
}

fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut staged = std::ffi::OsString::from(".");
    staged.push(name);
    staged.push(".tmp");
    Ok(path.with_file_name(staged))
}
