// src/env.rs
use eframe::egui;

/// Language tags written right-to-left. Matched as prefixes.
const RTL_LANGUAGES: [&str; 4] = ["ar", "he", "fa", "ur"];

/// Source of the user's language preference.
pub trait Environment {
    /// Preferred language tag such as `de-de`, if one is known.
    fn language(&self) -> Option<String>;
}

/// Reads the locale from the process environment.
#[derive(Debug, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn language(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find_map(|value| normalize_locale(&value))
    }
}

/// A language chosen up front, e.g. from settings or in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(pub Option<String>);

impl Environment for FixedEnvironment {
    fn language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Turns a POSIX locale like `de_DE.UTF-8@euro` into `de-de`.
/// `C`, `POSIX` and empty values carry no language.
fn normalize_locale(raw: &str) -> Option<String> {
    let tag = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('_', "-").to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    pub fn detect(env: &dyn Environment) -> Self {
        let language = env
            .language()
            .unwrap_or_else(|| "en".to_string())
            .to_lowercase();

        if RTL_LANGUAGES.iter().any(|rtl| language.starts_with(rtl)) {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }

    pub fn is_rtl(self) -> bool {
        self == TextDirection::RightToLeft
    }

    /// Layout for a horizontal row in this reading direction.
    pub fn row_layout(self) -> egui::Layout {
        match self {
            TextDirection::LeftToRight => egui::Layout::left_to_right(egui::Align::Center),
            TextDirection::RightToLeft => egui::Layout::right_to_left(egui::Align::Center),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(language: Option<&str>) -> TextDirection {
        TextDirection::detect(&FixedEnvironment(language.map(str::to_string)))
    }

    #[test]
    fn rtl_languages_match_by_prefix() {
        assert_eq!(detect(Some("ar")), TextDirection::RightToLeft);
        assert_eq!(detect(Some("he-IL")), TextDirection::RightToLeft);
        assert_eq!(detect(Some("FA-ir")), TextDirection::RightToLeft);
        assert_eq!(detect(Some("ur-pk")), TextDirection::RightToLeft);
    }

    #[test]
    fn other_languages_are_ltr() {
        assert_eq!(detect(Some("de-de")), TextDirection::LeftToRight);
        assert_eq!(detect(Some("en-us")), TextDirection::LeftToRight);
        assert_eq!(detect(None), TextDirection::LeftToRight);
    }

    #[test]
    fn normalizes_posix_locales() {
        assert_eq!(normalize_locale("de_DE.UTF-8"), Some("de-de".to_string()));
        assert_eq!(normalize_locale("ar_EG@latin"), Some("ar-eg".to_string()));
        assert_eq!(normalize_locale("C.UTF-8"), None);
        assert_eq!(normalize_locale("POSIX"), None);
        assert_eq!(normalize_locale(""), None);
    }
}
