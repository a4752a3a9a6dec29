//! `cf-langs ext` — look up the source extension for a language name.

use std::io::Write;

use anyhow::bail;
use serde::Serialize;

use super::output::print_json;

#[derive(Serialize)]
struct ExtLookup<'a> {
    name: &'a str,
    extension: &'static str,
}

/// Print the extension for `name`, failing when no table prefix matches.
///
/// With `json` the result is a `{"name", "extension"}` object.
pub fn run<W: Write>(out: &mut W, name: &str, json: bool) -> anyhow::Result<()> {
    let Some(extension) = cf_langs::extension_for(name) else {
        bail!("no known extension for language {name:?}");
    };

    if json {
        return print_json(out, &ExtLookup { name, extension });
    }
    writeln!(out, "{extension}")?;
    Ok(())
}
