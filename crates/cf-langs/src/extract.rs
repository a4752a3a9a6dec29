//! Regex extraction of the language selector from raw submit-page HTML.
//!
//! Extraction runs in two passes: [`find_lang_block`] cuts out the first
//! `programTypeId` selector, then [`find_lang`] collects every
//! `value="…"` / `>label<` pair inside it. No DOM is built; the patterns
//! operate on bytes so a page with stray invalid UTF-8 still scans.

use std::sync::OnceLock;

use regex::bytes::Regex;

use crate::types::{LangError, LangMap, LangResult};

// Unicode mode is off so `.` and `[\s\S]` also step over invalid UTF-8.
const BLOCK_PATTERN: &str = r#"(?s-u)name="programTypeId".+?</select>"#;
const OPTION_PATTERN: &str = r#"(?-u)value="(.+?)"[\s\S]*?>([\s\S]+?)<"#;

fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BLOCK_PATTERN).expect("block pattern is valid"))
}

fn option_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(OPTION_PATTERN).expect("option pattern is valid"))
}

/// Return the first `name="programTypeId" … </select>` fragment of `body`.
///
/// The match is non-greedy, so it stops at the first `</select>` after the
/// marker. Later selectors are ignored.
pub fn find_lang_block(body: &[u8]) -> LangResult<&[u8]> {
    block_regex()
        .find(body)
        .map(|m| m.as_bytes())
        .ok_or(LangError::BlockNotFound)
}

/// Collect every option id and label in `block`.
///
/// Labels are kept verbatim, surrounding whitespace included. When an id
/// appears twice the later label wins.
pub fn find_lang(block: &[u8]) -> LangResult<LangMap> {
    let mut langs = LangMap::new();

    for caps in option_regex().captures_iter(block) {
        let id = String::from_utf8_lossy(&caps[1]).into_owned();
        let name = String::from_utf8_lossy(&caps[2]).into_owned();
        if let Some(previous) = langs.insert(id.clone(), name) {
            tracing::warn!(%id, %previous, "duplicate language id, keeping later label");
        }
    }

    if langs.is_empty() {
        return Err(LangError::NoLanguages);
    }

    tracing::debug!(count = langs.len(), "extracted language options");
    Ok(langs)
}

/// Run both extraction passes over a full page.
pub fn extract_langs(body: &[u8]) -> LangResult<LangMap> {
    let block = find_lang_block(body)?;
    find_lang(block)
}
