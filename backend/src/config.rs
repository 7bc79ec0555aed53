use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_FEATURED_LIMIT: usize = 6;
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;
pub const DEFAULT_CORS_ORIGIN_PREFIX: &str = "http://localhost";
pub const DEFAULT_VOTES_PER_MINUTE: u32 = 30;
pub const DEFAULT_COMMENTS_PER_MINUTE: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub featured_limit: usize,
    pub similar_limit: usize,
    pub cors_origin_prefix: String,
    pub votes_per_minute: u32,
    pub comments_per_minute: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            featured_limit: DEFAULT_FEATURED_LIMIT,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
            cors_origin_prefix: DEFAULT_CORS_ORIGIN_PREFIX.to_string(),
            votes_per_minute: DEFAULT_VOTES_PER_MINUTE,
            comments_per_minute: DEFAULT_COMMENTS_PER_MINUTE,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?} - using default", key, raw);
            default
        }),
        None => default,
    }
}

impl ServerConfig {
    /// Reads settings through `lookup` (the deployment's secret store), falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            featured_limit: parse_or("FEATURED_LIMIT", lookup("FEATURED_LIMIT"), defaults.featured_limit),
            similar_limit: parse_or("SIMILAR_LIMIT", lookup("SIMILAR_LIMIT"), defaults.similar_limit),
            cors_origin_prefix: lookup("CORS_ORIGIN_PREFIX")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.cors_origin_prefix),
            votes_per_minute: parse_or("VOTES_PER_MINUTE", lookup("VOTES_PER_MINUTE"), defaults.votes_per_minute),
            comments_per_minute: parse_or("COMMENTS_PER_MINUTE", lookup("COMMENTS_PER_MINUTE"), defaults.comments_per_minute),
        }
    }
}
