//! File name rules shared by configuration validation and name sanitizing.
//!
//! A packaged app name becomes a directory and executable name on every
//! target platform, so it has to satisfy the strictest of them (Windows).

use regex::Regex;
use std::sync::OnceLock;

/// Longest file name most file systems accept, in bytes.
const MAX_NAME_BYTES: usize = 255;

struct FilenameRules {
    illegal: Regex,
    control: Regex,
    reserved: Regex,
    windows_reserved: Regex,
    windows_trailing: Regex,
}

fn rules() -> &'static FilenameRules {
    static RULES: OnceLock<FilenameRules> = OnceLock::new();
    RULES.get_or_init(|| FilenameRules {
        illegal: Regex::new(r#"[/?<>\\:*|"]"#).expect("valid regex"),
        control: Regex::new(r"[\x00-\x1f\x{80}-\x{9f}]").expect("valid regex"),
        reserved: Regex::new(r"^\.+$").expect("valid regex"),
        windows_reserved: Regex::new(r"(?i)^(con|prn|aux|nul|com[0-9]|lpt[0-9])(\..*)?$")
            .expect("valid regex"),
        windows_trailing: Regex::new(r"[. ]+$").expect("valid regex"),
    })
}

/// Remove everything that is not allowed in a file name.
///
/// Strips reserved and control characters, names made only of dots,
/// Windows device names and trailing dots or spaces, then truncates to
/// 255 bytes on a character boundary.
#[must_use]
pub fn filesystem_safe(input: &str) -> String {
    let rules = rules();
    let cleaned = rules.illegal.replace_all(input, "");
    let cleaned = rules.control.replace_all(&cleaned, "");
    let cleaned = rules.reserved.replace(&cleaned, "");
    let cleaned = rules.windows_reserved.replace(&cleaned, "");
    let cleaned = rules.windows_trailing.replace(&cleaned, "");
    truncate_bytes(&cleaned, MAX_NAME_BYTES).to_string()
}

/// Whether `name` is a non-empty ASCII name that [`filesystem_safe`] leaves
/// untouched.
#[must_use]
pub fn is_safe_app_name(name: &str) -> bool {
    !name.is_empty() && name.is_ascii() && filesystem_safe(name) == name
}

fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
