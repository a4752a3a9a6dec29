//! cf-langs — language list scraper and static language tables for the
//! Codeforces judge.

pub mod client;
pub mod extract;
pub mod tables;
pub mod types;

pub use client::{get_lang_list, status_line, ClientConfig, LangClient, STATUS_LINE};
pub use extract::{extract_langs, find_lang, find_lang_block};
pub use tables::{extension_for, extension_for_id, lang_name, langs, langs_ext, LANGS, LANGS_EXT};
pub use types::*;
