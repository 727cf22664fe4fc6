use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `body` to `path` atomically: temp file, fsync, rename, dir sync.
/// A reader never observes a partially written record file.
pub fn write_atomic(path: &Path, body: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {dir:?}"))?;
    }

    let tmp_path = path.with_extension("rci.tmp");
    let mut f = File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file {tmp_path:?}"))?;
    f.write_all(body.as_bytes())?;
    f.flush()?;
    f.sync_all()
        .with_context(|| format!("Failed to sync temp file {tmp_path:?}"))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to finalize file {path:?}"))?;

    #[cfg(unix)]
    if let Some(dir) = path.parent() {
        let dir_file = File::open(dir)
            .with_context(|| format!("Failed to open directory {dir:?}"))?;
        dir_file
            .sync_all()
            .with_context(|| format!("Failed to sync directory {dir:?}"))?;
    }

    Ok(())
}

/// Read a `KEY:value` line file into `(key, value)` pairs.
/// Keys are uppercased and trimmed, values trimmed; malformed lines skipped.
pub fn read_kv_lines(path: &Path) -> Result<Vec<(String, String)>> {
    use std::io::{BufRead, BufReader};

    let file = File::open(path).with_context(|| format!("Failed to open {path:?}"))?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some((key, val)) = line.split_once(':') {
            pairs.push((key.trim().to_uppercase(), val.trim().to_string()));
        }
    }
    Ok(pairs)
}

/// Escape newlines so multi-line text survives the one-record-per-line format.
pub fn escape_text(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

pub fn unescape_text(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    let mut chars = v.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
