//! Memory image emitters.
//!
//! A word stream can be serialized two ways: as the raw little-endian
//! bytes the device DMA engine loads directly, or as an `address:
//! data` hex listing for simulation testbenches and manual SDRAM
//! loading. Both render the same words in the same order.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::Result;

/// Serialization format of the memory image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryFormat {
    /// Raw little-endian words, no framing.
    Binary,
    /// One `{address:08x}: {word:08x}` line per word.
    MemText,
}

impl MemoryFormat {
    /// File extension used when mirroring batch output paths.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Binary => "bin",
            Self::MemText => "mem",
        }
    }
}

/// Writes each word as 4 bytes in the packing byte order.
///
/// Re-reading the output and regrouping it into little-endian 32-bit
/// words reproduces the input stream exactly.
pub fn write_binary<W: Write>(mut out: W, words: &[u32]) -> io::Result<()> {
    for word in words {
        out.write_all(&word.to_le_bytes())?;
    }
    Ok(())
}

/// Writes the `address: data` listing, one word per line.
///
/// Addresses count words, not bytes, starting from zero.
pub fn write_memtext<W: Write>(mut out: W, words: &[u32]) -> io::Result<()> {
    for (address, word) in words.iter().enumerate() {
        writeln!(out, "{address:08x}: {word:08x}")?;
    }
    Ok(())
}

/// Serializes `words` to `path` in the given format.
///
/// Missing parent directories are created. The file is written to a
/// temporary sibling path and renamed into place once complete, so a
/// failed emit never leaves a truncated output behind.
pub fn emit_to_path(path: &Path, format: MemoryFormat, words: &[u32]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_sibling(path);
    let write_result = (|| {
        let mut out = BufWriter::new(fs::File::create(&tmp_path)?);
        match format {
            MemoryFormat::Binary => write_binary(&mut out, words)?,
            MemoryFormat::MemText => write_memtext(&mut out, words)?,
        }
        out.flush()
    })();

    match write_result {
        Ok(()) => {
            fs::rename(&tmp_path, path)?;
            Ok(())
        }
        Err(err) => {
            let _ = fs::remove_file(&tmp_path);
            Err(err.into())
        }
    }
}

fn tmp_sibling(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
