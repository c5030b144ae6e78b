use crate::Classification;

/// Per-bucket line counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Lines without a package.
    pub none: usize,
    /// Lines with exactly one package (one file each).
    pub single: usize,
    /// Lines with two or more package tokens.
    pub multiple: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line.
    pub fn record(&mut self, classification: &Classification<'_>) {
        match classification {
            Classification::None => self.none += 1,
            Classification::Single { .. } => self.single += 1,
            Classification::Multiple => self.multiple += 1,
        }
    }

    /// Total number of lines seen.
    pub fn total(&self) -> usize {
        self.none + self.single + self.multiple
    }
}
