use serde::{Deserialize, Serialize};

/// Display locale for time labels.
///
/// Unknown tags fail closed to the default (French) instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    /// Resolve a BCP 47 style tag (`fr`, `fr-FR`, `en_GB`, ...).
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Locale::French,
            "en" => Locale::English,
            _ => {
                tracing::warn!(tag, fallback = "fr", "unsupported locale, using default");
                Locale::default()
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::French => "fr",
            Locale::English => "en",
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::from_tag(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}
