use std::env;

/// Ordered list of generation backend base URLs. Read once from
/// `ZIMAGE_API_URLS` (comma-separated) and fixed for the lifetime of the
/// client; order is significant for both dispatch policies.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPolicy {
    Failover,
    RoundRobin,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: Option<ApiConfig>,
    pub policy: DispatchPolicy,
    pub output_dir: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig { urls: Vec::new() }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let raw = env::var("ZIMAGE_API_URLS").unwrap_or_default();

        ApiConfig {
            urls: parse_url_list(&raw),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }

    pub fn with_urls(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.urls.extend(urls.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Splits a comma-separated URL string, trimming whitespace and discarding
/// empty entries. Order is preserved.
pub fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect()
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        DispatchPolicy::Failover
    }
}

impl DispatchPolicy {
    pub fn from_env() -> Self {
        env::var("ZIMAGE_DISPATCH_POLICY")
            .ok()
            .map(|val| Self::parse(&val))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "round-robin" | "round_robin" | "roundrobin" => DispatchPolicy::RoundRobin,
            _ => DispatchPolicy::Failover,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchPolicy::Failover => "failover",
            DispatchPolicy::RoundRobin => "round-robin",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: None,
            policy: DispatchPolicy::Failover,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var("ZIMAGE_OUTPUT_DIR").ok();

        Config {
            api: Some(ApiConfig::from_env()),
            policy: DispatchPolicy::from_env(),
            output_dir,
        }
    }

    pub fn with_api(mut self, config: ApiConfig) -> Self {
        self.api = Some(config);
        self
    }

    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_list() {
        let urls = parse_url_list("http://a.example.com, http://b.example.com ,,http://c.example.com ");
        assert_eq!(
            urls,
            vec![
                "http://a.example.com",
                "http://b.example.com",
                "http://c.example.com"
            ]
        );
    }

    #[test]
    fn test_parse_url_list_empty() {
        assert!(parse_url_list("").is_empty());
        assert!(parse_url_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_url_list_single() {
        assert_eq!(
            parse_url_list("https://node.modal.run"),
            vec!["https://node.modal.run"]
        );
    }

    #[test]
    fn test_dispatch_policy_parse() {
        assert_eq!(DispatchPolicy::parse("round-robin"), DispatchPolicy::RoundRobin);
        assert_eq!(DispatchPolicy::parse("ROUND_ROBIN"), DispatchPolicy::RoundRobin);
        assert_eq!(DispatchPolicy::parse("failover"), DispatchPolicy::Failover);
        assert_eq!(DispatchPolicy::parse("anything-else"), DispatchPolicy::Failover);
    }

    #[test]
    fn test_api_config_builder() {
        let config = ApiConfig::new()
            .with_url("http://a.example.com")
            .with_urls(vec!["http://b.example.com", "http://c.example.com"]);
        assert_eq!(config.urls.len(), 3);
        assert_eq!(config.urls[0], "http://a.example.com");
        assert!(!config.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_api(ApiConfig::new().with_url("http://a.example.com"))
            .with_policy(DispatchPolicy::RoundRobin)
            .with_output_dir("out");
        assert_eq!(config.policy, DispatchPolicy::RoundRobin);
        assert_eq!(config.output_dir.as_deref(), Some("out"));
        assert!(config.api.is_some());
    }
}
