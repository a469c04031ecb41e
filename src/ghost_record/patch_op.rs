use super::record::GhostRecord;
use crate::bit_write::BitWrite;
use crate::checksum;
use crate::error::GhostError;
use crate::types::{FinishTime, MILLIS_SPAN, MINUTES_SPAN, SECONDS_SPAN};
use log::debug;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// ─── Patch ──────────────────────────────────────────────────────────────────

/// Outcome of a committed patch.
#[derive(Debug, Clone)]
pub struct PatchReport {
    /// Finish time decoded from the source before patching.
    pub original: FinishTime,
    /// Finish time written into the copy.
    pub patched: FinishTime,
    /// Recomputed trailer value of the committed copy.
    pub crc: u32,
    /// Where the copy landed.
    pub output: PathBuf,
}

/// Derive `<stem>_OUTPUT.<ext>` next to the source.
pub fn derived_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("ghost");
    let mut name = format!("{stem}_OUTPUT");
    if let Some(ext) = source.extension().and_then(OsStr::to_str) {
        name.push('.');
        name.push_str(ext);
    }
    source.with_file_name(name)
}

/// Patch the finish time of the ghost at `source` into a new file.
///
/// The source is never mutated. The copy is built in a temp file in the
/// destination directory and renamed onto `output` (or the derived
/// `_OUTPUT` path) only after the trailer is rewritten, so a failure at any
/// step leaves either the untouched original or a fully valid output,
/// never a half-patched file.
///
/// Steps, in order, aborting on the first failure:
/// 1. open the source and validate the magic
/// 2. snapshot the current finish time
/// 3. copy the source bytes into the temp file
/// 4. write the three new field values
/// 5. recompute the CRC-32 over everything before the trailer and store it,
///    then persist the temp file onto the output path
pub fn patch_finish_time(
    source: &Path,
    output: Option<&Path>,
    time: FinishTime,
) -> Result<PatchReport, GhostError> {
    let mut record = GhostRecord::open(File::open(source)?)?;
    let original = record.finish_time()?;
    debug!("{} decodes as {}", source.display(), original);

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| derived_output_path(source));

    // Temp file in the destination directory keeps the final rename on one
    // filesystem.
    let dir = output.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;

    let mut src = record.into_inner();
    src.seek(SeekFrom::Start(0))?;
    io::copy(&mut src, tmp.as_file_mut())?;
    drop(src);

    let file = tmp.as_file_mut();
    file.write_span(MINUTES_SPAN, time.minutes as u64)?;
    file.write_span(SECONDS_SPAN, time.seconds as u64)?;
    file.write_span(MILLIS_SPAN, time.millis as u64)?;
    file.flush()?;

    let crc = checksum::compute(file)?;
    checksum::write_trailer(file, crc)?;

    tmp.persist(&output).map_err(|e| GhostError::Io(e.error))?;
    debug!("committed {} with trailer {crc:#010x}", output.display());

    Ok(PatchReport {
        original,
        patched: time,
        crc,
        output,
    })
}
