// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// One-char case fold. Chars whose lowercase expands to several chars are
/// left alone so positions in the folded text line up with the original.
fn fold(c: char) -> char {
    let mut low = c.to_lowercase();
    match (low.next(), low.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Case-insensitive substring test, accent-aware ('É' matches 'é').
/// An empty needle matches everything.
pub fn contains_ci(text: &str, needle: &str) -> bool {
    if needle.is_empty() { return true; }
    let t: Vec<char> = text.chars().map(fold).collect();
    let n: Vec<char> = needle.chars().map(fold).collect();
    if n.len() > t.len() { return false; }
    t.windows(n.len()).any(|w| w == n.as_slice())
}

/// Remove every case-insensitive occurrence of `needle`, treated as a
/// literal. Left-to-right, non-overlapping.
pub fn remove_ci(text: &str, needle: &str) -> String {
    if needle.is_empty() { return text.to_string(); }
    let t: Vec<char> = text.chars().collect();
    let n: Vec<char> = needle.chars().map(fold).collect();

    let mut out = String::with_capacity(text.len());
    let mut i = 0usize;
    while i < t.len() {
        let hit = i + n.len() <= t.len()
            && t[i..i + n.len()].iter().map(|&c| fold(c)).eq(n.iter().copied());
        if hit {
            i += n.len();
        } else {
            out.push(t[i]);
            i += 1;
        }
    }
    out
}

/// Strip the accent from one precomposed Latin letter, identity otherwise.
/// Covers Latin-1 Supplement and the Latin Extended-A letters that show up
/// in French/European competitor names.
pub fn strip_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'À'..='Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'È'..='Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'Ì'..='Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => 'N',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'Ò'..='Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => 'O',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'Ù'..='Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' | 'Ÿ' => 'Y',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => 'S',
        'ź' | 'ż' | 'ž' => 'z',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        _ => c,
    }
}

/// Comparison key for name matching: accents stripped (precomposed letters
/// folded to their base, combining marks U+0300–U+036F dropped), lowercased,
/// trimmed. `normalize_name_key("Éléa") == normalize_name_key("elea")`.
pub fn normalize_name_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if ('\u{0300}'..='\u{036f}').contains(&c) {
            continue;
        }
        for l in strip_accent(c).to_lowercase() {
            out.push(l);
        }
    }
    out.trim().to_string()
}
