//! Hand-maintained language tables.
//!
//! [`LANGS`] mirrors the judge's selector at the time it was captured and is
//! not refreshed from the network. [`LANGS_EXT`] is keyed by the short names
//! the judge prints in submission listings, which drift from the selector
//! labels, so lookups go through [`extension_for`] rather than exact keys.

use std::collections::HashMap;
use std::sync::OnceLock;

// Generated from the submit page source with
//   ^[\s\S]*?value="(.+?)"[\s\S]*?>([\s\S]+?)<[\s\S]*?$
// replaced by
//   ("\1", "\2"),
/// Language id to display name.
pub static LANGS: &[(&str, &str)] = &[
    ("43", "GNU GCC C11 5.1.0"),
    ("52", "Clang++17 Diagnostics"),
    ("42", "GNU G++11 5.1.0"),
    ("50", "GNU G++14 6.4.0"),
    ("54", "GNU G++17 7.3.0"),
    ("2", "Microsoft Visual C++ 2010"),
    ("59", "Microsoft Visual C++ 2017"),
    ("9", "C# Mono 5.18"),
    ("28", "D DMD32 v2.083.1"),
    ("32", "Go 1.11.4"),
    ("12", "Haskell GHC 8.6.3"),
    ("36", "Java 1.8.0_162"),
    ("48", "Kotlin 1.3.10"),
    ("19", "OCaml 4.02.1"),
    ("3", "Delphi 7"),
    ("4", "Free Pascal 3.0.2"),
    ("51", "PascalABC.NET 3.4.2"),
    ("13", "Perl 5.20.1"),
    ("6", "PHP 7.2.13"),
    ("7", "Python 2.7.15"),
    ("31", "Python 3.7.2"),
    ("40", "PyPy 2.7 (6.0.0)"),
    ("41", "PyPy 3.5 (6.0.0)"),
    ("8", "Ruby 2.0.0p645"),
    ("49", "Rust 1.31.1"),
    ("20", "Scala 2.12.8"),
    ("34", "JavaScript V8 4.8.0"),
    ("55", "Node.js 9.4.0"),
];

/// Display-name prefix to source-file extension.
pub static LANGS_EXT: &[(&str, &str)] = &[
    ("GNU C11", "c"),
    ("Clang++17 Diagnostics", "cpp"),
    ("GNU C++11", "cpp"),
    ("GNU C++14", "cpp"),
    ("GNU C++17", "cpp"),
    ("MS C++", "cpp"),
    ("MS C++ 2017", "cpp"),
    ("Mono C#", "cs"),
    ("D", "d"),
    ("Go", "go"),
    ("Haskell", "hs"),
    ("Kotlin", "kt"),
    ("Ocaml", "ml"),
    ("Delphi", "pas"),
    ("FPC", "pas"),
    ("PascalABC.NET", "pas"),
    ("Perl", "pl"),
    ("PHP", "php"),
    ("Python 2", "py"),
    ("Python 3", "py"),
    ("PyPy 2", "py"),
    ("PyPy 3", "py"),
    ("Ruby", "rb"),
    ("Rust", "rs"),
    ("JavaScript", "js"),
    ("Node.js", "js"),
];

/// [`LANGS`] indexed by id.
pub fn langs() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| LANGS.iter().copied().collect())
}

/// [`LANGS_EXT`] indexed by prefix.
pub fn langs_ext() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| LANGS_EXT.iter().copied().collect())
}

/// Display name for a language id.
pub fn lang_name(id: &str) -> Option<&'static str> {
    langs().get(id).copied()
}

/// Resolve the file extension for a display name.
///
/// A key matches when it is an ASCII case-insensitive prefix of `name` that
/// ends on a word boundary, so `"D"` matches `"D DMD32 v2.083.1"` but not
/// `"Delphi 7"`. The longest matching key wins. Whitespace runs in `name`
/// count as a single space.
pub fn extension_for(name: &str) -> Option<&'static str> {
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    LANGS_EXT
        .iter()
        .filter(|(prefix, _)| is_word_prefix(prefix, &name))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, ext)| *ext)
}

/// Resolve the file extension for a language id via its display name.
pub fn extension_for_id(id: &str) -> Option<&'static str> {
    lang_name(id).and_then(extension_for)
}

fn is_word_prefix(prefix: &str, name: &str) -> bool {
    let Some(head) = name.get(..prefix.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(prefix) {
        return false;
    }
    name[prefix.len()..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_ascii_alphanumeric())
}
