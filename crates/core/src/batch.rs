//! Batch conversion driver.
//!
//! Walks an input directory tree, mirrors its structure under the
//! output root and runs the decode, normalize, pack, emit pipeline
//! for every image file found. A failure on one file is logged and
//! recorded but never aborts the rest of the batch, so partial
//! progress is always preserved. Re-running a batch is idempotent.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use image::io::Reader;

use crate::{
    emit::{self, MemoryFormat},
    letterbox, pack_image, CanvasSize, Error, Result,
};

/// File extensions (case-insensitive) picked up by the tree walker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// One unit of batch work: a source image and its resolved output.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: MemoryFormat,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Output paths of successfully converted files.
    pub converted: Vec<PathBuf>,
    /// Input paths that failed, with the reason.
    pub failures: Vec<(PathBuf, Error)>,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the full pipeline for a single job.
///
/// The output file appears only after the whole pipeline has
/// succeeded; any stage failure is returned to the caller.
pub fn convert_file(job: &ConversionJob, canvas: CanvasSize) -> Result<()> {
    let image = Reader::open(&job.input)?.decode()?.to_rgb8();
    let frame = letterbox(&image, canvas)?;
    let words = pack_image(&frame);
    emit::emit_to_path(&job.output, job.format, &words)?;
    log::info!("processed {:?} -> {:?}", job.input, job.output);
    Ok(())
}

/// Converts every image under `input_root`, mirroring relative paths
/// under `output_root` with the format's extension.
///
/// Only batch-level setup problems (missing input root, uncreatable
/// output root, unreadable directories) are returned as errors.
/// Per-file failures of any kind end up in the summary instead.
pub fn convert_tree(
    input_root: &Path,
    output_root: &Path,
    format: MemoryFormat,
    canvas: CanvasSize,
) -> Result<BatchSummary> {
    if !input_root.is_dir() {
        return Err(Error::InputNotFound {
            path: input_root.to_path_buf(),
        });
    }
    canvas.validate()?;
    fs::create_dir_all(output_root)?;

    let mut summary = BatchSummary::default();
    walk(input_root, output_root, format, canvas, &mut summary)?;
    log::info!(
        "converted {} files, {} failures",
        summary.converted.len(),
        summary.failures.len()
    );
    Ok(summary)
}

fn walk(
    src_dir: &Path,
    dst_dir: &Path,
    format: MemoryFormat,
    canvas: CanvasSize,
    summary: &mut BatchSummary,
) -> Result<()> {
    // Sorted traversal keeps repeated runs reporting identically.
    let mut entries = fs::read_dir(src_dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk(
                &path,
                &dst_dir.join(entry.file_name()),
                format,
                canvas,
                summary,
            )?;
        } else if is_image_file(&path) {
            let mut output = dst_dir.join(entry.file_name());
            output.set_extension(format.extension());
            let job = ConversionJob {
                input: path,
                output,
                format,
            };
            match convert_file(&job, canvas) {
                Ok(()) => summary.converted.push(job.output),
                Err(err) => {
                    log::error!("failed to process {:?}: {err}", job.input);
                    summary.failures.push((job.input, err));
                }
            }
        }
    }
    Ok(())
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
