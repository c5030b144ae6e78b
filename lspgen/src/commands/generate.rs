use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use lspgen_core::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Mapping file to read (defaults to ./gen.txt)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory for generated specs (defaults to ./lua/nixrun/lsp)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Preview generated specs without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::generate(ops::generate::GenerateOptions {
            input: &self.input,
            output_dir: &self.output,
            dry_run: self.dry_run,
        })
        .wrap_err("Failed to generate LSP specs")?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
