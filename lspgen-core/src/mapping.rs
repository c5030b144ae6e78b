//! Line classification for `gen.txt` mappings.
//!
//! A line has the shape `<identifier>=<package>[,<package>...]`. Tokens are
//! used verbatim: nothing is trimmed, and only the literal empty string
//! counts as "no package".

/// Separates the identifier from its package list. Only the first one counts.
pub const VALUE_DELIMITER: char = '=';

/// Separates package tokens inside the value field.
pub const PACKAGE_DELIMITER: char = ',';

/// One input line split into its identifier and package tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub identifier: &'a str,
    pub packages: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Split a line on the first `=` and its value on every `,`.
    ///
    /// Returns `None` when the line has no `=` at all.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (identifier, value) = line.split_once(VALUE_DELIMITER)?;
        Some(Self {
            identifier,
            packages: value.split(PACKAGE_DELIMITER).collect(),
        })
    }

    /// Classify by arity alone.
    ///
    /// `a=x,` is `Multiple` even though only one token is non-empty.
    pub fn classify(&self) -> Classification<'a> {
        match self.packages.as_slice() {
            [] | [""] => Classification::None,
            [package] => Classification::Single {
                identifier: self.identifier,
                package: *package,
            },
            _ => Classification::Multiple,
        }
    }
}

/// Which bucket a line falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// No `=`, or an empty value.
    None,
    /// Exactly one non-empty package; this line produces a file.
    Single {
        identifier: &'a str,
        package: &'a str,
    },
    /// Two or more tokens, empty or not.
    Multiple,
}

impl Classification<'_> {
    /// Short bucket name used in log output.
    pub fn bucket(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single { .. } => "single",
            Self::Multiple => "multiple",
        }
    }
}

/// Classify a raw input line.
pub fn classify(line: &str) -> Classification<'_> {
    Record::parse(line).map_or(Classification::None, |record| record.classify())
}
