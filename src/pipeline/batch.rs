//! Batch runs: synthesize every catalog item and write the PNGs.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::foundation::error::{ForgeError, ForgeResult};
use crate::pipeline::{
    spec::{ItemSpec, ProductKind},
    synth::{GlyphOutcome, SynthesizedItem, Synthesizer},
};

#[derive(Clone, Debug)]
pub struct BatchOptions {
    pub out_dir: PathBuf,
    /// Synthesize items on a rayon pool.
    pub parallel: bool,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl BatchOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            parallel: false,
            threads: None,
        }
    }
}

/// One written file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WrittenItem {
    pub kind: ProductKind,
    pub identifier: String,
    pub path: PathBuf,
    pub glyph: GlyphOutcome,
}

/// Outcome of a completed batch, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchReport {
    pub written: Vec<WrittenItem>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.written.iter().map(|w| w.path.as_path())
    }

    /// Items whose primary glyph could not be drawn.
    pub fn degraded(&self) -> impl Iterator<Item = &WrittenItem> {
        self.written.iter().filter(|w| w.glyph.is_degraded())
    }

    pub fn extend(&mut self, other: BatchReport) {
        self.written.extend(other.written);
    }
}

/// Synthesize and write every item of `kind`, in order.
///
/// The output directory is created if needed. Font problems only degrade the affected item;
/// any other error stops the batch.
#[tracing::instrument(skip_all, fields(kind = %kind, n = items.len()))]
pub fn run_batch(
    synth: &Synthesizer<'_>,
    kind: ProductKind,
    items: &[ItemSpec],
    opts: &BatchOptions,
) -> ForgeResult<BatchReport> {
    std::fs::create_dir_all(&opts.out_dir).map_err(|e| ForgeError::io(&opts.out_dir, e))?;

    let write_one = |item: &ItemSpec| -> ForgeResult<WrittenItem> {
        let done = synth.synthesize(kind, item)?;
        write_item(&opts.out_dir, done)
    };

    let written = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        let results: Vec<ForgeResult<WrittenItem>> =
            pool.install(|| items.par_iter().map(write_one).collect());
        results.into_iter().collect::<ForgeResult<Vec<_>>>()?
    } else {
        items.iter().map(write_one).collect::<ForgeResult<Vec<_>>>()?
    };

    let report = BatchReport { written };
    tracing::info!(
        written = report.len(),
        degraded = report.degraded().count(),
        "{kind} batch complete"
    );
    Ok(report)
}

fn write_item(out_dir: &Path, item: SynthesizedItem) -> ForgeResult<WrittenItem> {
    let path = out_dir.join(&item.file_name);
    write_atomic(&path, &item.png)?;
    tracing::info!(path = %path.display(), glyph = ?item.glyph, "wrote");
    Ok(WrittenItem {
        kind: item.kind,
        identifier: item.identifier,
        path,
        glyph: item.glyph,
    })
}

/// Write to a sibling `*.tmp` file and rename it over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> ForgeResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let discard = |err: ForgeError| {
        let _ = std::fs::remove_file(&tmp);
        err
    };
    std::fs::write(&tmp, bytes).map_err(|e| discard(ForgeError::io(&tmp, e)))?;
    std::fs::rename(&tmp, path).map_err(|e| discard(ForgeError::io(path, e)))
}

fn build_thread_pool(threads: Option<usize>) -> ForgeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ForgeError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ForgeError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
