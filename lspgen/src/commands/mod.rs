mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "lspgen")]
#[command(version)]
#[command(about = "Generate nixrun LSP package specs from a gen.txt mapping")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_tracing(self.verbose);
        self.generate.run()
    }
}

/// Log to stderr so stdout only carries the report.
///
/// `RUST_LOG` directives are kept; `--verbose` adds DEBUG, otherwise WARN.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
