use std::collections::BTreeMap;
use std::env;

/// Built-in feed registry: source name -> RSS URL
const DEFAULT_SOURCES: &[(&str, &str)] = &[
    ("cnn", "http://rss.cnn.com/rss/cnn_topstories.rss?format=xml"),
    ("fox", "http://feeds.foxnews.com/foxnews/latest?format=xml"),
];

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Number of articles returned when the request has no `count`
    pub default_count: usize,
    /// Upstream feed request timeout
    pub feed_timeout_secs: u64,
    /// Supported sources, keyed by lower-case name
    pub sources: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            default_count: 10,
            feed_timeout_secs: 30,
            sources: default_sources(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let sources = match lookup("NEWS_SOURCES") {
            Some(raw) => {
                let parsed = parse_sources(&raw);
                if parsed.is_empty() {
                    tracing::warn!("NEWS_SOURCES has no valid entries, using built-in sources");
                    defaults.sources
                } else {
                    parsed
                }
            }
            None => defaults.sources,
        };

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            default_count: lookup("NEWS_DEFAULT_COUNT")
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.default_count),
            feed_timeout_secs: lookup("FEED_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.feed_timeout_secs),
            sources,
        }
    }
}

pub fn default_sources() -> BTreeMap<String, String> {
    DEFAULT_SOURCES
        .iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect()
}

/// Parse `name=url,name=url`. Malformed entries are skipped.
pub fn parse_sources(raw: &str) -> BTreeMap<String, String> {
    raw.split(',')
        .filter_map(|entry| {
            let (name, url) = entry.split_once('=')?;
            let name = name.trim().to_lowercase();
            let url = url.trim();
            if name.is_empty() || url.is_empty() {
                tracing::warn!("Skipping malformed NEWS_SOURCES entry: {:?}", entry);
                return None;
            }
            Some((name, url.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 5000);
        assert_eq!(config.default_count, 10);
        assert_eq!(config.feed_timeout_secs, 30);
        assert!(config.sources.contains_key("cnn"));
        assert!(config.sources.contains_key("fox"));
    }

    #[test]
    fn env_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("NEWS_DEFAULT_COUNT", "25"),
            ("NEWS_SOURCES", "BBC=http://feeds.bbci.co.uk/news/rss.xml"),
        ]));
        assert_eq!(config.port, 8081);
        assert_eq!(config.default_count, 25);
        assert_eq!(config.sources.len(), 1);
        assert_eq!(
            config.sources.get("bbc").map(String::as_str),
            Some("http://feeds.bbci.co.uk/news/rss.xml")
        );
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("NEWS_SOURCES", "garbage"),
        ]));
        assert_eq!(config.port, 5000);
        assert_eq!(config.sources, default_sources());
    }

    #[test]
    fn parse_sources_skips_malformed_entries() {
        let sources = parse_sources("a=http://a.test/rss, =http://x, b=, c=http://c.test/rss?x=1");
        assert_eq!(sources.len(), 2);
        assert_eq!(sources["a"], "http://a.test/rss");
        // only the first '=' separates name from url
        assert_eq!(sources["c"], "http://c.test/rss?x=1");
    }
}
