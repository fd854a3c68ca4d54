//! Text normalization shared by ingestion, the tag catalog and the search index.
//!
//! Everything that compares user-facing text goes through [`fold`]: lowercase
//! plus removal of the Latin diacritics found in Western and Central European
//! content ("Filosofía" and "filosofia" compare equal). Tag identifiers and
//! content slugs are derived from folded text.

/// Lowercases `text` and strips Latin diacritics.
///
/// Characters without a known base letter pass through lowercased.
///
/// # Example
///
/// ```
/// use postlist::domain::text::fold;
///
/// assert_eq!(fold("Filosofía Ñandú"), "filosofia nandu");
/// assert_eq!(fold("Straße"), "strasse");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match fold_char(c) {
            Folded::One(base) => folded.push(base),
            Folded::Two(a, b) => {
                folded.push(a);
                folded.push(b);
            }
        }
    }
    folded
}

enum Folded {
    One(char),
    Two(char, char),
}

const fn fold_char(c: char) -> Folded {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'æ' => return Folded::Two('a', 'e'),
        'œ' => return Folded::Two('o', 'e'),
        'ß' => return Folded::Two('s', 's'),
        other => other,
    };
    Folded::One(base)
}

/// Folds `text` and collapses every run of non-alphanumeric characters into a
/// single `-`, trimming leading and trailing dashes.
///
/// Returns an empty string when nothing alphanumeric remains. The result never
/// contains a comma, which keeps identifiers safe inside the comma-joined
/// `tags` URL parameter.
///
/// # Example
///
/// ```
/// use postlist::domain::text::slugify;
///
/// assert_eq!(slugify("  Guía de React, 2024!  "), "guia-de-react-2024");
/// assert_eq!(slugify("¿?"), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in fold(text).chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Derives the canonical tag identifier for a tag label or a raw identifier.
///
/// Identifiers are slugs, so normalizing an identifier is a no-op:
/// `tag_id(&tag_id(x)) == tag_id(x)`.
#[must_use]
pub fn tag_id(label: &str) -> String {
    slugify(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_handles_spanish_and_german() {
        assert_eq!(fold("CANCIÓN pingüino"), "cancion pinguino");
        assert_eq!(fold("Ökonomie"), "okonomie");
    }

    #[test]
    fn fold_leaves_non_latin_text_lowercased() {
        assert_eq!(fold("Ωmega"), "ωmega");
        assert_eq!(fold("日本"), "日本");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Dev -- Ops"), "dev-ops");
        assert_eq!(slugify("react,css"), "react-css");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn tag_id_is_idempotent() {
        for label in ["Filosofía", "  Node.js ", "C++", "Ciencia de datos"] {
            let once = tag_id(label);
            assert_eq!(tag_id(&once), once);
        }
    }
}
