// Username heuristics: patterns common to throwaway and bulk-created accounts.
//
// The patterns are compiled once into a static, ordered table. Matching stops
// at the first hit. regex-lite has no backreferences, so the "same character
// repeated" check is a plain run-length scan instead of a regex.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

/// Minimum run of one repeated character that counts as suspicious.
const REPEATED_CHAR_RUN: usize = 4;

/// One entry in the suspicious-username table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernamePattern {
    /// Stable identifier, used in logs
    pub name: &'static str,
    /// What the pattern looks for, for the rule listing
    pub summary: &'static str,
    matcher: Matcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matcher {
    Regex(&'static str),
    RepeatedChar(usize),
}

/// The suspicious-username patterns, in evaluation order.
///
/// short_prefix_many_digits is a subset of name_then_digits and sits first so
/// that logs name the narrower pattern.
pub static PATTERNS: [UsernamePattern; 7] = [
    UsernamePattern {
        name: "all_digits",
        summary: "entirely numeric",
        matcher: Matcher::Regex(r"^\d+$"),
    },
    UsernamePattern {
        name: "short_prefix_many_digits",
        summary: "1-3 letters followed by 6+ digits",
        matcher: Matcher::Regex(r"(?i)^[a-z]{1,3}\d{6,}$"),
    },
    UsernamePattern {
        name: "name_then_digits",
        summary: "letters followed by 4+ digits",
        matcher: Matcher::Regex(r"(?i)^[a-z]+\d{4,}$"),
    },
    UsernamePattern {
        name: "repeated_char",
        summary: "one character repeated 4+ times in a row",
        matcher: Matcher::RepeatedChar(REPEATED_CHAR_RUN),
    },
    UsernamePattern {
        name: "generic_user",
        summary: "\"user\" followed by digits",
        matcher: Matcher::Regex(r"(?i)^user\d+$"),
    },
    UsernamePattern {
        name: "underscored_digits",
        summary: "digits wrapped in underscores",
        matcher: Matcher::Regex(r"_+\d+_+"),
    },
    UsernamePattern {
        name: "keyword",
        summary: "contains temp, fake, test, bot or spam",
        matcher: Matcher::Regex(r"(?i)temp|fake|test|bot|spam"),
    },
];

/// Compiled regexes, index-aligned with `PATTERNS`. `None` for non-regex matchers.
static COMPILED: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|p| match p.matcher {
            Matcher::Regex(src) => {
                Some(Regex::new(src).expect("username patterns are static and valid"))
            }
            Matcher::RepeatedChar(_) => None,
        })
        .collect()
});

/// Return the first pattern the username matches, if any.
pub fn matching_pattern(username: &str) -> Option<&'static UsernamePattern> {
    let hit = PATTERNS
        .iter()
        .zip(COMPILED.iter())
        .find(|(pattern, compiled)| match (pattern.matcher, compiled) {
            (Matcher::RepeatedChar(run), _) => has_repeated_run(username, run),
            (Matcher::Regex(_), Some(re)) => re.is_match(username),
            (Matcher::Regex(_), None) => false,
        })
        .map(|(pattern, _)| pattern);

    if let Some(pattern) = hit {
        debug!(username, pattern = pattern.name, "Suspicious username pattern");
    }
    hit
}

/// Whether the username matches any known fake-account pattern.
pub fn is_suspicious_username(username: &str) -> bool {
    matching_pattern(username).is_some()
}

/// True if any character appears `run` or more times consecutively.
///
/// Line terminators never count, mirroring the usual "any character" regex
/// class which excludes them.
pub fn has_repeated_run(text: &str, run: usize) -> bool {
    if run == 0 {
        return true;
    }
    let mut prev: Option<char> = None;
    let mut count = 0usize;
    for c in text.chars() {
        if is_line_terminator(c) {
            prev = None;
            count = 0;
            continue;
        }
        if prev == Some(c) {
            count += 1;
        } else {
            prev = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
