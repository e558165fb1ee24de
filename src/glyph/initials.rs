/// Derive the 1-2 letter abbreviation drawn when an item has no usable emoji.
///
/// `"default"` and `"guest"` are special-cased. Otherwise the identifier is split into
/// camelCase words (a new word starts at every uppercase letter after the first character);
/// two or more words yield the first letters of the first two words, a single word yields
/// its first two characters. The result is uppercased.
pub fn initials(identifier: &str) -> String {
    match identifier {
        "default" => return "D".to_string(),
        "guest" => return "G".to_string(),
        _ => {}
    }

    let words = camel_words(identifier);
    if let [first, second, ..] = words.as_slice() {
        let mut out = String::new();
        out.extend(first.chars().next());
        out.extend(second.chars().next());
        return out.to_uppercase();
    }
    identifier.chars().take(2).collect::<String>().to_uppercase()
}

fn camel_words(identifier: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (i, ch) in identifier.char_indices().skip(1) {
        if ch.is_uppercase() {
            words.push(&identifier[start..i]);
            start = i;
        }
    }
    if !identifier.is_empty() {
        words.push(&identifier[start..]);
    }
    words
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/initials.rs"]
mod tests;
