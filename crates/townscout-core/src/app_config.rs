use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub nominatim_base_url: String,
    pub overpass_base_url: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub default_limit: usize,
    pub max_limit: usize,
    pub overpass_fetch_cap: usize,
}
