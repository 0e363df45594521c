//! Language code helpers shared by word generation and pictogram lookup.

use crate::constants::DEFAULT_LANGUAGE;
use unicode_normalization::UnicodeNormalization;

/// Reduces a language tag to its two-letter code.
///
/// Two-letter codes pass through, `xx-YY` tags lose their region, anything
/// else falls back to the default language.
///
/// ```
/// use coreboard::pictograms::language::two_letter_code;
///
/// assert_eq!(two_letter_code("es"), "es");
/// assert_eq!(two_letter_code("pt-BR"), "pt");
/// assert_eq!(two_letter_code("spa"), "en");
/// ```
#[must_use]
pub fn two_letter_code(language: &str) -> String {
    let language = language.trim();
    if language.chars().count() == 2 {
        return language.to_string();
    }
    if let Some((lang, region)) = language.split_once('-') {
        let is_lower_pair = lang.len() == 2 && lang.chars().all(|c| c.is_ascii_lowercase());
        let is_upper_pair = region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase());
        if is_lower_pair && is_upper_pair {
            return lang.to_string();
        }
    }
    DEFAULT_LANGUAGE.to_string()
}

/// Maps three-letter codes to the two-letter locales symbol APIs expect.
///
/// Unknown codes pass through unchanged.
#[must_use]
pub fn locale_for_symbols(language: &str) -> &str {
    match language {
        "eng" => "en",
        "spa" => "es",
        "por" => "pt",
        other => other,
    }
}

/// English name of a language, for prompts. Falls back to the code itself.
#[must_use]
pub fn language_name(language: &str) -> String {
    let name = match two_letter_code(language).as_str() {
        "en" => "English",
        "es" => "Spanish",
        "pt" => "Portuguese",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "ca" => "Catalan",
        "nl" => "Dutch",
        _ => return language.to_string(),
    };
    name.to_string()
}

/// Removes combining diacritical marks (`é` → `e`).
#[must_use]
pub fn strip_diacritics(word: &str) -> String {
    word.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_letter_code() {
        assert_eq!(two_letter_code("en"), "en");
        assert_eq!(two_letter_code("en-US"), "en");
        assert_eq!(two_letter_code("en-us"), "en");
        assert_eq!(two_letter_code("eng"), "en");
        assert_eq!(two_letter_code("ca"), "ca");
        assert_eq!(two_letter_code(""), "en");
    }

    #[test]
    fn test_locale_for_symbols() {
        assert_eq!(locale_for_symbols("eng"), "en");
        assert_eq!(locale_for_symbols("spa"), "es");
        assert_eq!(locale_for_symbols("por"), "pt");
        assert_eq!(locale_for_symbols("fr"), "fr");
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("es"), "Spanish");
        assert_eq!(language_name("pt-BR"), "Portuguese");
        assert_eq!(language_name("xx"), "xx");
    }

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("canción"), "cancion");
        assert_eq!(strip_diacritics("pingüino"), "pinguino");
        assert_eq!(strip_diacritics("ñandú"), "nandu");
        assert_eq!(strip_diacritics("plain"), "plain");
    }
}
