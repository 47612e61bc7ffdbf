// src/core/html.rs
//
// Sequential, case-insensitive tag scanning over third-party HTML.
// Tolerant by construction: no DOM, no validation, unmatched tags simply
// end the current block search. Nested identical tags are not tracked;
// the close pattern is the first one found after the opener (non-greedy).

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Inner text of the first `open_pat…close_pat` block, case-insensitive.
/// `open_pat` is a tag prefix (`"<thead"`), attributes are skipped up to `>`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next `o…c` block starting at or after `from`. Returns byte offsets of the
/// whole block, opener and closer included.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Content between the opener's `>` and the closer's `<`.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Drop every `<…>` sequence. Not recursive; a stray `<` swallows text up
/// to the next `>`, which is what the source pages call for.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode the entity set the FFME result pages actually use, nothing more.
/// Replacement order matters: `&amp;lt;` degrades to `<` in two passes,
/// matching the page producer's own double-encoding quirks.
pub fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

/// Canonical cell text: tags stripped first, then entities, then whitespace.
/// Tag-strip before entity decode: a literal `&lt;b&gt;` in cell text
/// survives as `<b>` instead of vanishing.
pub fn decode_cell(inner: &str) -> String {
    super::sanitize::normalize_ws(&decode_entities(&strip_tags(inner)))
}
