use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `shortHand` value marking the provider used when no flag matches.
pub const DEFAULT_SHORT_HAND: &str = "default";

/// One search engine as stored in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// URL prefix the query is appended to.
    pub url: String,
    /// Single-letter flag token, or `"default"` for the fallback provider.
    #[serde(rename = "shortHand")]
    pub short_hand: String,
}

impl ProviderEntry {
    pub fn new(url: impl Into<String>, short_hand: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            short_hand: short_hand.into(),
        }
    }

    /// Returns `true` if this entry is the fallback provider.
    pub fn is_default(&self) -> bool {
        self.short_hand == DEFAULT_SHORT_HAND
    }
}

/// A provider entry together with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub name: String,
    pub entry: ProviderEntry,
}

impl Provider {
    pub fn new(name: impl Into<String>, entry: ProviderEntry) -> Self {
        Self {
            name: name.into(),
            entry,
        }
    }

    /// The `-<shortHand>` token selecting this provider.
    pub fn short_flag(&self) -> String {
        format!("-{}", self.entry.short_hand)
    }

    /// The `--<name>` token selecting this provider.
    pub fn long_flag(&self) -> String {
        format!("--{}", self.name)
    }

    /// Returns `true` if `token` is this provider's short or long flag.
    pub fn matches(&self, token: &str) -> bool {
        token.strip_prefix("--") == Some(self.name.as_str())
            || token.strip_prefix('-') == Some(self.entry.short_hand.as_str())
    }
}

/// Provider name to entry mapping, in file order.
///
/// Order only matters for display and for which provider wins when two
/// share a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMapping {
    providers: Vec<Provider>,
}

impl ConfigMapping {
    /// Builds a mapping from providers in display order.
    ///
    /// A later provider with an already-used name replaces the earlier one,
    /// matching how a JSON object with duplicate keys is read.
    pub fn new(providers: impl IntoIterator<Item = Provider>) -> Self {
        let mut mapping = Self::default();
        for provider in providers {
            mapping.insert(provider);
        }
        mapping
    }

    fn insert(&mut self, provider: Provider) {
        if let Some(existing) = self.providers.iter_mut().find(|p| p.name == provider.name) {
            existing.entry = provider.entry;
        } else {
            self.providers.push(provider);
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn into_providers(self) -> Vec<Provider> {
        self.providers
    }

    /// Parses the config file format: a JSON object of
    /// `name -> { "url": ..., "shortHand": ... }`.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let raw: Map<String, Value> = serde_json::from_str(contents)?;

        let providers = raw
            .into_iter()
            .map(|(name, value)| {
                let entry = serde_json::from_value::<ProviderEntry>(value)
                    .map_err(|e| serde_json::Error::custom(format!("provider '{name}': {e}")))?;
                Ok(Provider::new(name, entry))
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        Ok(Self::new(providers))
    }

    /// Serializes the mapping as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut map = Map::new();
        for provider in &self.providers {
            map.insert(provider.name.clone(), serde_json::to_value(&provider.entry)?);
        }

        let mut json = serde_json::to_string_pretty(&Value::Object(map))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reddit() -> Provider {
        Provider::new(
            "reddit",
            ProviderEntry::new("https://www.reddit.com/search?q=", "r"),
        )
    }

    #[test]
    fn test_provider_flags() {
        let provider = reddit();
        assert_eq!(provider.short_flag(), "-r");
        assert_eq!(provider.long_flag(), "--reddit");
    }

    #[test]
    fn test_provider_matches_short_and_long_flag() {
        let provider = reddit();
        assert!(provider.matches("-r"));
        assert!(provider.matches("--reddit"));
        assert!(!provider.matches("r"));
        assert!(!provider.matches("--r"));
        assert!(!provider.matches("-reddit"));
        assert!(!provider.matches("reddit"));
    }

    #[test]
    fn test_from_json_preserves_file_order() {
        let json = r#"{
            "zeta": { "url": "https://z.example/?q=", "shortHand": "z" },
            "alpha": { "url": "https://a.example/?q=", "shortHand": "default" },
            "mid": { "url": "https://m.example/?q=", "shortHand": "m" }
        }"#;

        let mapping = ConfigMapping::from_json(json).unwrap();
        let names: Vec<_> = mapping.providers().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert!(mapping.providers()[1].entry.is_default());
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let json = r#"{ "ddg": { "url": "https://duckduckgo.com/?q=", "shortHand": "d", "note": "x" } }"#;

        let mapping = ConfigMapping::from_json(json).unwrap();
        assert_eq!(mapping.providers()[0].entry.short_hand, "d");
    }

    #[test]
    fn test_from_json_rejects_missing_short_hand() {
        let json = r#"{ "ddg": { "url": "https://duckduckgo.com/?q=" } }"#;

        let err = ConfigMapping::from_json(json).unwrap_err();
        assert!(err.to_string().contains("provider 'ddg'"));
        assert!(err.to_string().contains("shortHand"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(ConfigMapping::from_json("[]").is_err());
        assert!(ConfigMapping::from_json("not json").is_err());
        assert!(ConfigMapping::from_json("").is_err());
    }

    #[test]
    fn test_to_json_uses_config_field_names() {
        let mapping = ConfigMapping::new([reddit()]);
        let json = mapping.to_json().unwrap();

        assert!(json.contains("\"shortHand\": \"r\""));
        assert!(json.contains("\"url\": \"https://www.reddit.com/search?q=\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_duplicate_name_replaces_entry_in_place() {
        let mapping = ConfigMapping::new([
            reddit(),
            Provider::new("google", ProviderEntry::new("https://g/?q=", "default")),
            Provider::new("reddit", ProviderEntry::new("https://old.reddit.com/?q=", "o")),
        ]);

        assert_eq!(mapping.providers().len(), 2);
        assert_eq!(mapping.providers()[0].name, "reddit");
        assert_eq!(mapping.providers()[0].entry.short_hand, "o");
    }
}
