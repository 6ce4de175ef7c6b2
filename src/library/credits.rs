/// Separator between requester and title in a track's display name.
pub const CREDITS_SEPARATOR: &str = " - ";

/// Requester and title parsed from a `"requester - title.mp3"` display name.
///
/// A name without the separator has no title. The requester is whatever
/// precedes the first separator, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credits {
    pub requester: Option<String>,
    pub title: Option<String>,
}

/// Parse credits out of `name`, first stripping one trailing extension from
/// `extensions` (case-insensitive, with or without a leading dot).
pub fn parse_credits(name: &str, extensions: &[String]) -> Credits {
    let stem = strip_extension(name, extensions);
    let mut parts = stem.split(CREDITS_SEPARATOR);
    Credits {
        requester: parts.next().map(str::to_string),
        title: parts.next().map(str::to_string),
    }
}

fn strip_extension<'a>(name: &'a str, extensions: &[String]) -> &'a str {
    let lower = name.to_ascii_lowercase();
    for ext in extensions {
        let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        if ext.is_empty() {
            continue;
        }
        let suffix = format!(".{ext}");
        if lower.ends_with(&suffix) {
            return &name[..name.len() - suffix.len()];
        }
    }
    name
}
