use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    pub base_url: String,
    /// Publishable (anon) key, sent both as `apikey` and bearer token.
    pub api_key: String,
    pub timeout: Duration,
}

impl BackendConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load backend configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let api_key = env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");

        if base_url.trim().is_empty() {
            panic!("SUPABASE_URL must not be empty");
        }

        let timeout_secs = env::var("SUPABASE_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .unwrap_or_else(|_| panic!("Invalid SUPABASE_TIMEOUT_SECS value"))
            })
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Root of the table API: `{base_url}/rest/v1`
    pub fn rest_root(&self) -> String {
        format!("{}/rest/v1", self.base_url.trim_end_matches('/'))
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_root(), table)
    }
}
