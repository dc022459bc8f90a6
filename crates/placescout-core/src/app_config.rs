use crate::rank::RankingPolicy;

/// Process-wide, read-only settings. The API key is shared by every search,
/// detail, photo, and autocomplete call and is never mutated after load.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub places_api_key: String,
    pub places_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub readiness_max_attempts: u32,
    pub readiness_interval_ms: u64,
    pub photo_max_width: u32,
    pub default_ranking: RankingPolicy,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("places_api_key", &"[redacted]")
            .field("places_base_url", &self.places_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("readiness_max_attempts", &self.readiness_max_attempts)
            .field("readiness_interval_ms", &self.readiness_interval_ms)
            .field("photo_max_width", &self.photo_max_width)
            .field("default_ranking", &self.default_ranking)
            .finish()
    }
}
