use super::mapping::{ConfigMapping, DEFAULT_SHORT_HAND, Provider, ProviderEntry};

/// Built-in providers as `(name, url prefix, shortHand)`, in display order.
pub const SAMPLE_PROVIDERS: &[(&str, &str, &str)] = &[
    ("google", "https://www.google.com/search?q=", DEFAULT_SHORT_HAND),
    ("twitter", "https://twitter.com/search?src=typd&q=%23", "t"),
    ("reddit", "https://www.reddit.com/search?q=", "r"),
    ("stackoverflow", "http://stackoverflow.com/search?q=", "s"),
    ("leo", "http://dict.leo.org/ende/index_de.html#/search=", "l"),
];

/// The mapping written to a fresh config file.
pub fn sample_mapping() -> ConfigMapping {
    ConfigMapping::new(SAMPLE_PROVIDERS.iter().map(|(name, url, short_hand)| {
        Provider::new(*name, ProviderEntry::new(*url, *short_hand))
    }))
}
