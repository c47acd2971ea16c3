use std::collections::HashMap;

/// Splits an explicit `{#anchor}` suffix off heading text.
///
/// Returns the heading text without the suffix and the anchor, or the
/// original text and `None` when no valid suffix is present. Anchors may only
/// contain ASCII alphanumerics, `-`, and `_`.
///
/// # Examples
///
/// ```
/// use docslot_core::slug::split_explicit_anchor;
///
/// assert_eq!(split_explicit_anchor("Headers {#request-headers}"), ("Headers", Some("request-headers")));
/// assert_eq!(split_explicit_anchor("Headers"), ("Headers", None));
/// ```
pub fn split_explicit_anchor(text: &str) -> (&str, Option<&str>) {
    let trimmed = text.trim_end();
    let Some(without_close) = trimmed.strip_suffix('}') else {
        return (text, None);
    };
    let Some(open) = without_close.rfind("{#") else {
        return (text, None);
    };

    let anchor = &without_close[open + 2..];
    let valid = !anchor.is_empty()
        && anchor
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid {
        return (text, None);
    }

    (without_close[..open].trim_end(), Some(anchor))
}

/// Generates unique, github-slugger compatible heading ids for one page.
#[derive(Debug, Default, Clone)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a slugger with no ids issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the id for a heading, suffixing `-1`, `-2`, ... on repeats.
    ///
    /// A suffixed candidate that was already issued (or reserved) is skipped,
    /// so every returned id is unique within this slugger.
    pub fn slug(&mut self, text: &str) -> String {
        let base = normalize(text);
        let mut candidate = base.clone();
        while self.seen.contains_key(&candidate) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }

    /// Marks an explicit id as taken so generated ids avoid it.
    pub fn reserve(&mut self, id: &str) {
        self.seen.entry(id.to_string()).or_insert(0);
    }
}

/// Lowercases and strips punctuation the way github-slugger does.
///
/// Spaces become hyphens; hyphens are neither collapsed nor trimmed.
pub fn normalize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            slug.push(ch.to_ascii_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        } else if !ch.is_ascii() && (ch.is_alphanumeric() || is_combining_mark(ch)) {
            slug.extend(ch.to_lowercase());
        }
    }
    if slug.is_empty() {
        slug.push_str("heading");
    }
    slug
}

// Mn/Mc ranges for the scripts docs are commonly translated into.
fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch as u32,
        0x0300..=0x036F
            | 0x0591..=0x05C7
            | 0x0610..=0x061A
            | 0x064B..=0x065F
            | 0x0900..=0x0903
            | 0x093A..=0x094F
            | 0x0951..=0x0957
            | 0x0962..=0x0963
            | 0x0E31..=0x0E3A
            | 0x0E47..=0x0E4E
            | 0x1AB0..=0x1AFF
            | 0x1DC0..=0x1DFF
            | 0x3099..=0x309A
            | 0xFE20..=0xFE2F
    )
}
