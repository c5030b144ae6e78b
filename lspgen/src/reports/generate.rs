//! Generate command report data structures.

use lspgen_core::Tally;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Line counts per bucket.
    pub tally: Tally,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Specs were written to disk.
    Written,
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Specs that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A spec in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let GenerationResult::Preview(preview) = &self.result {
            for file in &preview.files {
                out.divider(&file.path);
                out.preformatted(&file.content);
            }
            out.divider("Summary");
        }

        self.render_summary(out);
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        out.preformatted(&format!("{} have no package", self.tally.none));
        out.preformatted(&format!("{} found", self.tally.single));
        out.preformatted(&format!("{} have multiple packages", self.tally.multiple));
    }
}
