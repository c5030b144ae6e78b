//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult};
pub use output::{Report, TerminalOutput};
