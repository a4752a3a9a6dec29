//! `cf-langs fetch` — scrape the live language list.

use std::io::Write;

use anyhow::Context;
use cf_langs::{languages, ClientConfig, LangClient};

use super::output::write_languages;
use crate::config::{resolve_submit_url, resolve_timeout};

/// Fetch the selector at `url` (or the configured default) and print it.
pub async fn run<W: Write>(
    out: &mut W,
    url: Option<&str>,
    timeout_ms: Option<u64>,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let url = resolve_submit_url(url);
    let config = ClientConfig {
        timeout: resolve_timeout(timeout_ms),
        // The status line would corrupt JSON on stdout.
        announce: !quiet && !json,
        ..ClientConfig::default()
    };

    let client = LangClient::new(config)?;
    let map = client
        .get_lang_list(&url)
        .await
        .with_context(|| format!("failed to get language list from {url}"))?;

    tracing::info!(count = map.len(), %url, "fetched language list");
    write_languages(out, &languages(&map), json)
}
