#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Base URL of the OpenAI-compatible chat API the search agent talks to.
    pub agent_base_url: String,
    pub agent_api_key: String,
    pub agent_model: String,
    pub agent_timeout_secs: u64,
    /// Default number of posts requested per retrieval.
    pub max_results: usize,
    /// Default seconds between monitoring cycles.
    pub interval_secs: u64,
    /// Default number of topics extracted per batch.
    pub topic_count: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("agent_base_url", &self.agent_base_url)
            .field("agent_api_key", &"[redacted]")
            .field("agent_model", &self.agent_model)
            .field("agent_timeout_secs", &self.agent_timeout_secs)
            .field("max_results", &self.max_results)
            .field("interval_secs", &self.interval_secs)
            .field("topic_count", &self.topic_count)
            .finish()
    }
}
