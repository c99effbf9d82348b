//! Writing converted chunks to stdout or files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Print chunks to stdout, separated by a blank line.
pub fn print_chunks(chunks: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{chunk}")?;
    }
    out.flush()
}

/// Write chunks to `path`. A single chunk goes to `path` itself, several chunks go to
/// numbered siblings (`out.tana` becomes `out_1.tana`, `out_2.tana`, ...).
pub fn write_chunks(path: &str, chunks: &[String]) -> io::Result<()> {
    if let [chunk] = chunks {
        return fs::write(path, chunk);
    }

    for (i, chunk) in chunks.iter().enumerate() {
        let target = chunk_path(Path::new(path), i + 1);
        fs::write(&target, chunk)?;
        log::info!("wrote chunk {} of {} to {}", i + 1, chunks.len(), target.display());
    }
    Ok(())
}

pub fn chunk_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index}"),
    };
    path.with_file_name(name)
}
