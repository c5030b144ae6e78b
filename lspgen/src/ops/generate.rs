//! Generate operation - Lua specs from a gen.txt mapping.

use std::path::Path;

use eyre::Result;
use lspgen_core::{GeneratedFile, ensure_dir, open_input, scan};
use tracing::{debug, info};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Mapping file to read.
    pub input: &'a Path,
    /// Directory the specs are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Opens the input, makes sure the output directory exists, then writes one
/// spec per single-package line in input order. Stops at the first error;
/// specs already written are left in place.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let input = open_input(opts.input)?;

    if opts.dry_run {
        let mut files = Vec::new();
        let tally = scan(input, opts.input, |spec| {
            files.push(PreviewFile {
                path: spec.path(opts.output_dir).display().to_string(),
                content: spec.render()?,
            });
            Ok(())
        })?;

        return Ok(GenerateReport {
            tally,
            result: GenerationResult::Preview(PreviewResult { files }),
        });
    }

    ensure_dir(opts.output_dir)?;
    let tally = scan(input, opts.input, |spec| {
        let path = spec.write(opts.output_dir)?;
        debug!(path = %path.display(), package = spec.package, "wrote spec");
        Ok(())
    })?;
    info!(
        count = tally.single,
        dir = %opts.output_dir.display(),
        "generated specs"
    );

    Ok(GenerateReport {
        tally,
        result: GenerationResult::Written,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lspgen_core::{Error, Tally};
    use tempfile::TempDir;

    use super::*;

    const SCENARIO: &str = "alpha=foo\nbeta=\ngamma=foo,bar\ndelta\nepsilon=baz\n";

    struct Workspace {
        temp: TempDir,
    }

    impl Workspace {
        fn new(mapping: &str) -> Self {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join("gen.txt"), mapping).unwrap();
            Self { temp }
        }

        fn input(&self) -> std::path::PathBuf {
            self.temp.path().join("gen.txt")
        }

        fn output_dir(&self) -> std::path::PathBuf {
            self.temp.path().join("lua").join("nixrun").join("lsp")
        }

        fn run(&self, dry_run: bool) -> Result<GenerateReport> {
            generate(GenerateOptions {
                input: &self.input(),
                output_dir: &self.output_dir(),
                dry_run,
            })
        }
    }

    #[test]
    fn test_generate_scenario() {
        let ws = Workspace::new(SCENARIO);

        let report = ws.run(false).unwrap();

        assert_eq!(
            report.tally,
            Tally {
                none: 2,
                single: 2,
                multiple: 1,
            }
        );
        assert!(matches!(report.result, GenerationResult::Written));

        let out = ws.output_dir();
        assert_eq!(
            fs::read_to_string(out.join("alpha.lua")).unwrap(),
            "return {\n\tpackage = \"foo\",\n}"
        );
        assert_eq!(
            fs::read_to_string(out.join("epsilon.lua")).unwrap(),
            "return {\n\tpackage = \"baz\",\n}"
        );
        let mut names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["alpha.lua", "epsilon.lua"]);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let ws = Workspace::new(SCENARIO);
        let path = ws.output_dir().join("alpha.lua");

        ws.run(false).unwrap();
        let first = fs::read(&path).unwrap();
        ws.run(false).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_overwrites_existing_spec() {
        let ws = Workspace::new("alpha=foo\n");
        fs::create_dir_all(ws.output_dir()).unwrap();
        fs::write(ws.output_dir().join("alpha.lua"), "stale").unwrap();

        ws.run(false).unwrap();

        assert_eq!(
            fs::read_to_string(ws.output_dir().join("alpha.lua")).unwrap(),
            "return {\n\tpackage = \"foo\",\n}"
        );
    }

    #[test]
    fn test_generate_creates_output_dir_for_empty_input() {
        let ws = Workspace::new("");

        let report = ws.run(false).unwrap();

        assert_eq!(report.tally.total(), 0);
        assert!(ws.output_dir().is_dir());
    }

    #[test]
    fn test_generate_missing_input_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("out");

        let err = generate(GenerateOptions {
            input: &temp.path().join("gen.txt"),
            output_dir: &output_dir,
            dry_run: false,
        })
        .unwrap_err();

        let err = err.downcast_ref::<Box<Error>>().unwrap();
        assert!(matches!(**err, Error::InputUnavailable { .. }));
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_generate_keeps_files_written_before_failure() {
        let ws = Workspace::new("alpha=foo\nsub/dir=bar\nomega=baz\n");

        let err = ws.run(false).unwrap_err();

        let err = err.downcast_ref::<Box<Error>>().unwrap();
        assert!(matches!(**err, Error::Write { .. }));
        assert!(ws.output_dir().join("alpha.lua").exists());
        assert!(!ws.output_dir().join("omega.lua").exists());
    }

    #[test]
    fn test_generate_absolute_identifier_stays_in_output_dir() {
        let temp = TempDir::new().unwrap();
        let escaped = temp.path().join("escaped");
        let ws = Workspace::new(&format!("{}=pkg\n", escaped.display()));

        let err = ws.run(false).unwrap_err();

        let err = err.downcast_ref::<Box<Error>>().unwrap();
        let Error::Write { path, .. } = &**err else {
            panic!("expected write error, got {err}");
        };
        assert!(path.starts_with(ws.output_dir()));
        assert!(!temp.path().join("escaped.lua").exists());
    }

    #[test]
    fn test_generate_dry_run() {
        let ws = Workspace::new(SCENARIO);

        let report = ws.run(true).unwrap();

        assert_eq!(report.tally.single, 2);
        let GenerationResult::Preview(preview) = &report.result else {
            panic!("expected preview");
        };
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                ws.output_dir().join("alpha.lua").display().to_string(),
                ws.output_dir().join("epsilon.lua").display().to_string(),
            ]
        );
        assert_eq!(preview.files[1].content, "return {\n\tpackage = \"baz\",\n}");
        assert!(!ws.output_dir().exists());
    }
}
