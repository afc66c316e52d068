//! Template contents for the managed config files

use std::fs;

use crate::config::TemplateSource;
use crate::error::{Error, Result};

const PRETTIERRC: &str = include_str!("../templates/.prettierrc");
const PRETTIERIGNORE: &str = include_str!("../templates/.prettierignore");

/// Look up a compiled-in template by managed file name
pub fn embedded(name: &str) -> Option<&'static str> {
    match name {
        ".prettierrc" => Some(PRETTIERRC),
        ".prettierignore" => Some(PRETTIERIGNORE),
        _ => None,
    }
}

/// Load the template bytes for `name` from `source`
///
/// Contents are opaque and copied verbatim, so an on-disk template is read as raw bytes.
pub fn load(source: &TemplateSource, name: &str) -> Result<Vec<u8>> {
    match source {
        TemplateSource::Embedded => embedded(name)
            .map(|s| s.as_bytes().to_vec())
            .ok_or_else(|| {
                Error::io(
                    name,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no embedded template"),
                )
            }),
        TemplateSource::Dir(dir) => {
            let path = dir.join(name);
            fs::read(&path).map_err(|e| Error::io(path, e))
        }
    }
}
