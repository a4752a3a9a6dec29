//! Rendering of language lists as text or JSON.

use std::io::Write;

use cf_langs::Language;

/// Write `langs` as `id<TAB>name<TAB>ext` lines, or as a JSON array.
///
/// Scraped labels keep markup whitespace, so text output collapses every
/// whitespace run in the name to a single space to keep one record per
/// line. Unknown extensions print as `-`.
pub fn write_languages<W: Write>(out: &mut W, langs: &[Language], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(out, &langs);
    }

    for lang in langs {
        writeln!(
            out,
            "{}\t{}\t{}",
            lang.id,
            single_line(&lang.name),
            lang.extension.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

/// Pretty-print `value` as JSON followed by a newline.
pub fn print_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write the `{"error": true, "message": ..}` object used for failures
/// under `--json`.
pub fn write_json_error<W: Write>(out: &mut W, err: &anyhow::Error) -> anyhow::Result<()> {
    print_json(
        out,
        &serde_json::json!({
            "error": true,
            "message": format!("{err:#}"),
        }),
    )
}

fn single_line(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
