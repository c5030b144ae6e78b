//! Lua package spec files.

use std::path::{Path, PathBuf};

use crate::{Error, GeneratedFile, Result};

/// Extension of generated spec files, without the dot.
pub const EXTENSION: &str = "lua";

/// Encode `s` as a double-quoted string literal.
///
/// JSON string escaping covers quotes, backslashes and control characters,
/// all of which Lua reads back identically for the names found in practice.
pub fn lua_string(s: &str) -> serde_json::Result<String> {
    serde_json::to_string(s)
}

/// `<identifier>.lua`, returning a table with a single `package` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSpec<'a> {
    pub identifier: &'a str,
    pub package: &'a str,
}

impl<'a> PackageSpec<'a> {
    pub fn new(identifier: &'a str, package: &'a str) -> Self {
        Self {
            identifier,
            package,
        }
    }
}

impl GeneratedFile for PackageSpec<'_> {
    /// `<base>/<identifier>.lua`, joined as text so an identifier that
    /// starts with `/` stays under `base` instead of replacing it.
    fn path(&self, base: &Path) -> PathBuf {
        let mut path = base.as_os_str().to_os_string();
        path.push("/");
        path.push(self.identifier);
        path.push(".");
        path.push(EXTENSION);
        PathBuf::from(path)
    }

    fn render(&self) -> Result<String> {
        let package = lua_string(self.package).map_err(|source| {
            Box::new(Error::Serialization {
                identifier: self.identifier.to_string(),
                source,
            })
        })?;
        Ok(format!("return {{\n\tpackage = {},\n}}", package))
    }
}
