// src/merger.rs
use crate::error::{ErrorContext, Result};
use crate::types::{MergeSummary, Tool};
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Concatenates the per-tool output files into one result file.
pub struct ResultMerger {
    work_dir: PathBuf,
    output: PathBuf,
}

impl ResultMerger {
    pub fn new(work_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            output: output.into(),
        }
    }

    /// Writes every present tool output, in tool order, into the merged file.
    /// Missing outputs are skipped; the merged file is always recreated.
    pub fn merge(&self) -> Result<MergeSummary> {
        let mut outfile = File::create(&self.output)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;

        let mut included = Vec::new();
        let mut bytes_written = 0;

        for tool in Tool::ALL {
            let path = self.work_dir.join(tool.output_file());
            if !path.exists() {
                debug!("{}: no output at {}, skipping", tool, path.display());
                continue;
            }

            let contents = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
            outfile
                .write_all(&contents)
                .with_context(|| format!("Failed to write {}", self.output.display()))?;

            bytes_written += contents.len();
            included.push(tool);
        }

        debug!("Merged {} files into {}", included.len(), self.output.display());

        Ok(MergeSummary {
            output: self.output.clone(),
            included,
            bytes_written,
        })
    }
}
