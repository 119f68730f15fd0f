use serde::Deserialize;

/// Which resolver adapter to wire in at startup.
///
/// The choice is made once from configuration, not probed at runtime:
/// `rich` queries nameservers directly and reports real TTLs, `basic`
/// delegates to the operating system and substitutes the default TTL.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub enum ResolverStrategy {
    Rich,
    Basic,
}

impl ResolverStrategy {
    /// Parse a strategy from a string, defaulting to the rich resolver.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "basic" => Self::Basic,
            _ => Self::Rich,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rich => "rich",
            Self::Basic => "basic",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub geo_api_url: String,
    pub geo_timeout_secs: u64,
    pub resolver_strategy: ResolverStrategy,
    pub resolver_timeout_secs: u64,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            db_path: "dns_lookup_history.db".to_string(),
            geo_api_url: "https://ipapi.co/{ip}/json/".to_string(),
            geo_timeout_secs: 10,
            resolver_strategy: ResolverStrategy::Rich,
            resolver_timeout_secs: 10,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    // DNSLENS_LISTEN_ADDR wins; a bare PORT override keeps the
    // conventional deploy-time contract
    let listen_addr = std::env::var("DNSLENS_LISTEN_ADDR").unwrap_or_else(|_| {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .unwrap_or(5000);
        format!("0.0.0.0:{port}")
    });

    let db_path = std::env::var("DNSLENS_DB_PATH")
        .unwrap_or_else(|_| "dns_lookup_history.db".to_string());

    let geo_api_url = std::env::var("DNSLENS_GEO_API_URL")
        .unwrap_or_else(|_| "https://ipapi.co/{ip}/json/".to_string());

    let geo_timeout_secs = std::env::var("DNSLENS_GEO_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    let resolver_strategy = ResolverStrategy::from_str(
        &std::env::var("DNSLENS_RESOLVER").unwrap_or_else(|_| "rich".to_string()),
    );

    let resolver_timeout_secs = std::env::var("DNSLENS_RESOLVER_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        listen_addr,
        db_path,
        geo_api_url,
        geo_timeout_secs,
        resolver_strategy,
        resolver_timeout_secs,
        debug,
    })
}
