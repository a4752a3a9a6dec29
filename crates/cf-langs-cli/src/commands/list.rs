//! `cf-langs list` — print the built-in language table.

use std::io::Write;

use cf_langs::{Language, LANGS};

/// Print [`LANGS`] in table order.
pub fn run<W: Write>(out: &mut W, json: bool) -> anyhow::Result<()> {
    let langs: Vec<Language> = LANGS
        .iter()
        .map(|(id, name)| Language::new(*id, *name))
        .collect();
    super::output::write_languages(out, &langs, json)
}
