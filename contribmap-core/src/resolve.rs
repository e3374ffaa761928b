//! Free-text profile location -> country code.
//!
//! Resolution runs through four tiers and stops at the first hit:
//! blocklist, ordered rules, fuzzy registry search (countries and their
//! subdivisions), and a literal scan for country names inside the text.

use crate::country::CountryCode;
use crate::registry;
use tracing::debug;

/// Profile values that are not places, including two-letter strings that
/// collide with abbreviations ("CI" is usually continuous integration, not
/// Côte d'Ivoire).
pub const LOCATION_BLOCKLIST: &[&str] = &[
    "ci", "cd", "api", "bot", "n/a", "none", "unknown", "earth", "world", "internet", "remote",
];

/// How a rule fragment has to sit in the location text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Anywhere, even inside a longer word.
    Anywhere,
    /// As whole words: "usa" matches "Austin, USA" but not "Busan".
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRule {
    pub fragment: &'static str,
    pub code: &'static str,
    pub boundary: Boundary,
}

impl LocationRule {
    pub fn matches(&self, text: &str) -> bool {
        match self.boundary {
            Boundary::Anywhere => text.contains(self.fragment),
            Boundary::Word => contains_words(text, self.fragment),
        }
    }
}

const fn anywhere(fragment: &'static str, code: &'static str) -> LocationRule {
    LocationRule {
        fragment,
        code,
        boundary: Boundary::Anywhere,
    }
}

const fn word(fragment: &'static str, code: &'static str) -> LocationRule {
    LocationRule {
        fragment,
        code,
        boundary: Boundary::Word,
    }
}

/// Rules tried in order, first match wins.
///
/// "ukraine" leads and matches anywhere, so no other country named in the
/// same text can take it. The rest match whole words only. A fragment that
/// is contained in another fragment must come after it, otherwise the
/// shorter one shadows the longer: "south korea" before "korea".
/// `test_rule_order_respects_specificity` walks the whole table to enforce
/// this.
pub const LOCATION_RULES: &[LocationRule] = &[
    anywhere("ukraine", "ua"),
    word("united states", "us"),
    word("united kingdom", "gb"),
    word("usa", "us"),
    word("michigan", "us"),
    word("milwaukee", "us"),
    word("fukuoka", "jp"),
    word("uk", "gb"),
    word("russia", "ru"),
    word("china", "cn"),
    word("germany", "de"),
    word("france", "fr"),
    word("italy", "it"),
    word("milan", "it"),
    word("japan", "jp"),
    word("osaka", "jp"),
    word("australia", "au"),
    word("nigeria", "ng"),
    word("madagascar", "mg"),
    word("antananarivo", "mg"),
    word("côte d'ivoire", "ci"),
    word("ivory coast", "ci"),
    word("south korea", "kr"),
    word("north korea", "kp"),
    word("korea", "kr"),
    word("indiana", "us"),
    word("india", "in"),
    word("san francisco", "us"),
    word("california", "us"),
    word("new york", "us"),
    word("seattle", "us"),
    word("london", "gb"),
    word("berlin", "de"),
    word("munich", "de"),
    word("paris", "fr"),
    word("tokyo", "jp"),
    word("beijing", "cn"),
    word("shanghai", "cn"),
    word("bengaluru", "in"),
    word("bangalore", "in"),
    word("toronto", "ca"),
    word("sydney", "au"),
    word("moscow", "ru"),
    word("kyiv", "ua"),
    word("amsterdam", "nl"),
    word("são paulo", "br"),
    word("sao paulo", "br"),
    word("brasil", "br"),
    word("deutschland", "de"),
    word("türkiye", "tr"),
    word("turkey", "tr"),
    word("vietnam", "vn"),
    word("taiwan", "tw"),
];

/// True if `fragment` occurs in `text` with no letter or digit touching
/// either end.
fn contains_words(text: &str, fragment: &str) -> bool {
    text.match_indices(fragment).any(|(start, _)| {
        let end = start + fragment.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Resolve a profile location to a country code.
///
/// Never fails: anything that cannot be placed is `None`.
pub fn resolve(location: Option<&str>) -> Option<CountryCode> {
    let normalized = location?.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if LOCATION_BLOCKLIST.contains(&normalized.as_str()) {
        debug!("Location '{}' is blocklisted", normalized);
        return None;
    }

    if let Some(rule) = LOCATION_RULES.iter().find(|rule| rule.matches(&normalized)) {
        return CountryCode::new(rule.code);
    }

    // The registry scan only runs when fuzzy search has no candidate at all.
    let country = match registry::search_fuzzy(&normalized).first() {
        Some(country) => Some(*country),
        None => registry::find_name_in(&normalized),
    };

    let code = country.and_then(|c| CountryCode::new(c.alpha2));
    if code.is_none() {
        debug!("Could not resolve location '{}'", normalized);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(location: &str) -> Option<String> {
        resolve(Some(location)).map(|c| c.to_string())
    }

    #[test]
    fn test_rule_order_respects_specificity() {
        for (later_idx, later) in LOCATION_RULES.iter().enumerate() {
            for earlier in &LOCATION_RULES[..later_idx] {
                assert!(
                    !later.fragment.contains(earlier.fragment),
                    "rule '{}' shadows the more specific '{}'; move it after",
                    earlier.fragment,
                    later.fragment
                );
            }
        }
    }

    #[test]
    fn test_known_ordering_traps() {
        assert_eq!(code("Ukraine").as_deref(), Some("ua"));
        assert_eq!(code("Kyiv, UKRAINE").as_deref(), Some("ua"));
        assert_eq!(code("UK").as_deref(), Some("gb"));
        assert_eq!(code("Indiana").as_deref(), Some("us"));
        assert_eq!(code("Pune, India").as_deref(), Some("in"));
        assert_eq!(code("Seoul, South Korea").as_deref(), Some("kr"));
        assert_eq!(code("Pyongyang, North Korea").as_deref(), Some("kp"));
        assert_eq!(code("Milwaukee, WI").as_deref(), Some("us"));
        assert_eq!(code("Fukuoka").as_deref(), Some("jp"));
        assert_eq!(code("Busan, South Korea").as_deref(), Some("kr"));
        assert_eq!(code("Jerusalem, Israel").as_deref(), Some("il"));
        assert_eq!(code("Lausanne, Switzerland").as_deref(), Some("ch"));
        assert_eq!(code("Phuket, Thailand").as_deref(), Some("th"));
        assert_eq!(code("Indianapolis, IN, USA").as_deref(), Some("us"));
        assert_eq!(code("Austin, USA").as_deref(), Some("us"));
        assert_eq!(code("Leeds (UK)").as_deref(), Some("gb"));
    }

    #[test]
    fn test_ukraine_wins_over_any_other_country() {
        let others = LOCATION_RULES
            .iter()
            .map(|rule| rule.fragment)
            .chain(registry::COUNTRIES.iter().map(|c| c.name));
        let ukraine = ["Ukraine", "UKRAINE", "ukraine", "Ukraine🇺🇦"];
        let separators = [", ", " / ", " (ex-", "-", " ", ""];

        for other in others {
            for spelling in ukraine {
                for sep in separators {
                    for location in [
                        format!("{}{}{}", spelling, sep, other),
                        format!("{}{}{}", other, sep, spelling),
                    ] {
                        assert_eq!(code(&location).as_deref(), Some("ua"), "{:?}", location);
                    }
                }
            }
        }
        assert_eq!(code("Ukraine (ex-United Kingdom)").as_deref(), Some("ua"));
        assert_eq!(code("Kyiv, Ukraine / United States").as_deref(), Some("ua"));
    }

    #[test]
    fn test_word_boundaries() {
        assert!(contains_words("austin, usa", "usa"));
        assert!(contains_words("usa", "usa"));
        assert!(contains_words("(uk)", "uk"));
        assert!(!contains_words("busan", "usa"));
        assert!(!contains_words("phuket", "uk"));
        assert!(!contains_words("indianapolis", "india"));
        assert!(contains_words("são paulo", "são paulo"));
        assert!(contains_words("abidjan, côte d'ivoire", "côte d'ivoire"));
    }

    #[test]
    fn test_rules_resolve_to_valid_codes() {
        for rule in LOCATION_RULES {
            assert!(
                registry::by_alpha2(rule.code).is_some(),
                "rule '{}' maps to unknown code '{}'",
                rule.fragment,
                rule.code
            );
            assert_eq!(rule.fragment.trim(), rule.fragment);
            assert_eq!(rule.fragment.to_lowercase(), rule.fragment);
        }
    }

    #[test]
    fn test_blocklist_tokens() {
        for token in LOCATION_BLOCKLIST {
            assert_eq!(resolve(Some(token)), None);
            assert_eq!(resolve(Some(&token.to_uppercase())), None);
            assert_eq!(resolve(Some(&format!("  {}\t", token))), None);
        }
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(resolve(None), None);
        assert_eq!(resolve(Some("")), None);
        assert_eq!(resolve(Some("   ")), None);
    }

    #[test]
    fn test_city_rules() {
        assert_eq!(code("Milan").as_deref(), Some("it"));
        assert_eq!(code("Osaka, JP").as_deref(), Some("jp"));
        assert_eq!(code("Antananarivo").as_deref(), Some("mg"));
        assert_eq!(code("Ann Arbor, Michigan").as_deref(), Some("us"));
    }

    #[test]
    fn test_fuzzy_tier() {
        assert_eq!(code("Brazil").as_deref(), Some("br"));
        assert_eq!(code("NL").as_deref(), Some("nl"));
        assert_eq!(code("Czechia").as_deref(), Some("cz"));
        assert_eq!(code("Viet Nam").as_deref(), Some("vn"));
    }

    #[test]
    fn test_subdivision_tier() {
        assert_eq!(code("Texas").as_deref(), Some("us"));
        assert_eq!(code("Bavaria").as_deref(), Some("de"));
        assert_eq!(code("Ontario").as_deref(), Some("ca"));
        assert_eq!(code("Catalonia").as_deref(), Some("es"));
    }

    #[test]
    fn test_literal_scan_tier() {
        assert_eq!(code("Tehran, Iran").as_deref(), Some("ir"));
        assert_eq!(code("Caracas, Venezuela").as_deref(), Some("ve"));
        assert_eq!(code("Bucharest, Romania").as_deref(), Some("ro"));
        assert_eq!(code("Oslo, Norway").as_deref(), Some("no"));
        assert_eq!(code("Zürich, Switzerland").as_deref(), Some("ch"));
    }

    #[test]
    fn test_unresolvable() {
        assert_eq!(code("somewhere over the rainbow"), None);
        assert_eq!(code("localhost"), None);
    }
}
