// ============================================================================
// Locale
// Number-format profile used to read decimal text
// ============================================================================

use super::errors::LocaleError;
use std::fmt;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// No-break space, the grouping separator of most continental European locales
const NBSP: char = '\u{00A0}';

/// Narrow no-break space, written in place of NBSP by newer locale data
const NARROW_NBSP: char = '\u{202F}';

/// Environment variables consulted for the ambient locale, highest priority first
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

static AMBIENT: OnceLock<Locale> = OnceLock::new();

/// Symbols governing how numeric text is written under a locale.
///
/// A `Locale` is captured by every comparator when it is built and is used
/// for every later parse that comparator performs. It is never part of the
/// wire form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Locale {
    /// Language tag in `lang-REGION` form (e.g. "de-DE"), "und" for root
    tag: String,

    /// Separates integer and fractional digits
    decimal_separator: char,

    /// Separates digit groups in the integer part
    grouping_separator: char,

    /// Marks negative values (ASCII '-' is always accepted as well)
    minus_sign: char,
}

impl Locale {
    /// Locale-neutral profile: `1,234.5`.
    pub fn root() -> Self {
        Self::with_symbols("und", '.', ',')
    }

    /// Build a custom profile.
    ///
    /// # Errors
    /// Returns a [`LocaleError`] if the separators are equal, are ASCII
    /// digits, or collide with a sign character.
    pub fn custom(
        tag: impl Into<String>,
        decimal_separator: char,
        grouping_separator: char,
    ) -> Result<Self, LocaleError> {
        let locale = Self::with_symbols(tag, decimal_separator, grouping_separator);
        locale.validate()?;
        Ok(locale)
    }

    /// Builder method: Set the minus sign
    ///
    /// # Errors
    /// Returns a [`LocaleError`] if the sign is a digit or equals a separator.
    pub fn with_minus_sign(mut self, minus_sign: char) -> Result<Self, LocaleError> {
        self.minus_sign = minus_sign;
        self.validate()?;
        Ok(self)
    }

    /// Resolve a BCP-47 (`de-CH`) or POSIX (`de_CH.UTF-8@euro`) tag.
    ///
    /// Unknown languages keep their tag but read numbers with root symbols.
    pub fn for_tag(tag: &str) -> Self {
        let Some((language, region)) = split_tag(tag) else {
            return Self::root();
        };

        let canonical = match &region {
            Some(region) => format!("{language}-{region}"),
            None => language.clone(),
        };

        let (decimal, grouping) = symbols_for(&language, region.as_deref());
        Self::with_symbols(canonical, decimal, grouping)
    }

    /// The process's ambient locale.
    ///
    /// Resolved once from `LC_ALL`, `LC_NUMERIC` and `LANG` (first non-empty
    /// wins), falling back to [`Locale::root`].
    pub fn ambient() -> Self {
        AMBIENT
            .get_or_init(|| {
                let locale = resolve_ambient(|name| std::env::var(name).ok());
                tracing::debug!("Resolved ambient locale: {}", locale);
                locale
            })
            .clone()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    pub fn minus_sign(&self) -> char {
        self.minus_sign
    }

    /// True for the grouping separator. The two no-break spaces stand in
    /// for each other.
    #[inline]
    pub(crate) fn is_grouping(&self, ch: char) -> bool {
        ch == self.grouping_separator
            || (is_no_break_space(ch) && is_no_break_space(self.grouping_separator))
    }

    /// True for the locale minus sign and for ASCII '-'.
    #[inline]
    pub(crate) fn is_minus(&self, ch: char) -> bool {
        ch == self.minus_sign || ch == '-'
    }

    fn with_symbols(tag: impl Into<String>, decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            tag: tag.into(),
            decimal_separator,
            grouping_separator,
            minus_sign: '-',
        }
    }

    fn validate(&self) -> Result<(), LocaleError> {
        for symbol in [self.decimal_separator, self.grouping_separator, self.minus_sign] {
            if symbol.is_ascii_digit() {
                return Err(LocaleError::DigitSymbol(symbol));
            }
        }

        if self.is_grouping(self.decimal_separator) {
            return Err(LocaleError::SeparatorClash(self.decimal_separator));
        }

        for separator in [self.decimal_separator, self.grouping_separator] {
            if separator == '+' || self.is_minus(separator) {
                return Err(LocaleError::SignClash(separator));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Profiles (Factory Methods)
// ============================================================================

impl Locale {
    /// en-US: `1,234.5`
    pub fn us() -> Self {
        Self::for_tag("en-US")
    }

    /// de-DE: `1.234,5`
    pub fn germany() -> Self {
        Self::for_tag("de-DE")
    }

    /// fr-FR: `1 234,5` with a no-break space
    pub fn france() -> Self {
        Self::for_tag("fr-FR")
    }

    /// de-CH: `1'234.5`
    pub fn switzerland() -> Self {
        Self::for_tag("de-CH")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ambient()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (decimal {:?}, grouping {:?})",
            self.tag, self.decimal_separator, self.grouping_separator
        )
    }
}

// ============================================================================
// Tag Resolution
// ============================================================================

fn is_no_break_space(ch: char) -> bool {
    ch == NBSP || ch == NARROW_NBSP
}

/// First non-empty lookup of the locale variables, resolved through the table.
fn resolve_ambient<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .map(|value| Locale::for_tag(value.trim()))
        .unwrap_or_else(Locale::root)
}

/// Split a tag into a lowercase language and optional uppercase region.
///
/// Returns `None` for the POSIX "C" locale and for empty tags.
fn split_tag(tag: &str) -> Option<(String, Option<String>)> {
    // Drop POSIX codeset and modifier: de_DE.UTF-8@euro
    let base = tag.split(['.', '@']).next().unwrap_or_default();
    if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return None;
    }

    let mut subtags = base.split(['-', '_']).filter(|s| !s.is_empty());
    let language = subtags.next()?.to_ascii_lowercase();
    if !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    // Skip script subtags (e.g. "Latn"); a region is 2 letters or 3 digits
    let region = subtags
        .find(|s| {
            (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
                || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
        })
        .map(|s| s.to_ascii_uppercase());

    Some((language, region))
}

/// Decimal and grouping separators for a language/region pair.
fn symbols_for(language: &str, region: Option<&str>) -> (char, char) {
    match (language, region) {
        ("de", Some("CH" | "LI")) | ("it", Some("CH")) => ('.', '\''),
        ("es", Some("MX" | "US")) => ('.', ','),
        (
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr" | "sl"
            | "sr" | "vi" | "is" | "ca" | "eu" | "gl",
            _,
        ) => (',', '.'),
        (
            "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "nn" | "no" | "fi" | "uk" | "bg"
            | "hu" | "lt" | "lv" | "et" | "be" | "kk",
            _,
        ) => (',', NBSP),
        _ => ('.', ','),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_symbols() {
        let root = Locale::root();
        assert_eq!(root.tag(), "und");
        assert_eq!(root.decimal_separator(), '.');
        assert_eq!(root.grouping_separator(), ',');
        assert_eq!(root.minus_sign(), '-');
    }

    #[test]
    fn test_for_tag_table() {
        assert_eq!(Locale::germany().decimal_separator(), ',');
        assert_eq!(Locale::germany().grouping_separator(), '.');
        assert_eq!(Locale::france().grouping_separator(), NBSP);
        assert!(Locale::france().is_grouping(NARROW_NBSP));
        assert!(!Locale::us().is_grouping(NARROW_NBSP));
        assert_eq!(Locale::switzerland().decimal_separator(), '.');
        assert_eq!(Locale::switzerland().grouping_separator(), '\'');
        assert_eq!(Locale::us().tag(), "en-US");
    }

    #[test]
    fn test_for_tag_posix_forms() {
        let de = Locale::for_tag("de_DE.UTF-8@euro");
        assert_eq!(de.tag(), "de-DE");
        assert_eq!(de.decimal_separator(), ',');

        assert_eq!(Locale::for_tag("C"), Locale::root());
        assert_eq!(Locale::for_tag("POSIX.UTF-8"), Locale::root());
        assert_eq!(Locale::for_tag(""), Locale::root());
    }

    #[test]
    fn test_for_tag_script_subtag() {
        let sr = Locale::for_tag("sr-Latn-RS");
        assert_eq!(sr.tag(), "sr-RS");
        assert_eq!(sr.decimal_separator(), ',');
    }

    #[test]
    fn test_unknown_language_keeps_tag() {
        let xx = Locale::for_tag("xx-YY");
        assert_eq!(xx.tag(), "xx-YY");
        assert_eq!(xx.decimal_separator(), '.');
        assert_eq!(xx.grouping_separator(), ',');
    }

    #[test]
    fn test_resolve_ambient_priority() {
        let env = |name: &str| match name {
            "LC_ALL" => Some(String::new()),
            "LC_NUMERIC" => Some("fr_FR.UTF-8".to_string()),
            "LANG" => Some("en_US.UTF-8".to_string()),
            _ => None,
        };
        assert_eq!(resolve_ambient(env).tag(), "fr-FR");

        assert_eq!(resolve_ambient(|_| None), Locale::root());
    }

    #[test]
    fn test_ambient_is_stable() {
        assert_eq!(Locale::ambient(), Locale::ambient());
        assert_eq!(Locale::default(), Locale::ambient());
    }

    #[test]
    fn test_custom_validation() {
        assert!(Locale::custom("x-test", ',', ' ').is_ok());
        assert_eq!(
            Locale::custom("x-test", '\u{202F}', '\u{00A0}'),
            Err(LocaleError::SeparatorClash('\u{202F}'))
        );
        assert_eq!(
            Locale::custom("x-test", '.', '.'),
            Err(LocaleError::SeparatorClash('.'))
        );
        assert_eq!(
            Locale::custom("x-test", '5', ','),
            Err(LocaleError::DigitSymbol('5'))
        );
        assert_eq!(
            Locale::custom("x-test", '-', ','),
            Err(LocaleError::SignClash('-'))
        );

        let locale = Locale::custom("x-test", ',', '.').unwrap();
        assert_eq!(
            locale.clone().with_minus_sign(','),
            Err(LocaleError::SignClash(','))
        );
        assert_eq!(locale.with_minus_sign('\u{2212}').unwrap().minus_sign(), '\u{2212}');
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let locale = Locale::germany();
        let json = serde_json::to_string(&locale).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
