//! HTTP plumbing for listing imports.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::info;
use url::Url;

const USER_AGENT: &str = "pcx/1.0";
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Per-domain rate limiter using last-request-time tracking.
/// Ensures at most `requests_per_second` requests per domain.
pub struct RateLimiter {
    last_request: Mutex<HashMap<String, Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(requests_per_second: f64) -> Self {
        Self {
            last_request: Mutex::new(HashMap::new()),
            min_interval: Duration::from_secs_f64(1.0 / requests_per_second),
        }
    }

    /// Wait until enough time has elapsed since the last request to the
    /// same domain.
    pub async fn wait_for_domain(&self, url: &str) -> Result<(), String> {
        let domain = Url::parse(url)
            .map_err(|e| format!("Failed to parse URL '{}': {}", url, e))?
            .host_str()
            .ok_or_else(|| format!("No host in URL: {}", url))?
            .to_string();

        let sleep_duration = {
            let map = self.last_request.lock().unwrap();
            map.get(&domain).and_then(|last| {
                let elapsed = last.elapsed();
                (elapsed < self.min_interval).then(|| self.min_interval - elapsed)
            })
        };

        if let Some(duration) = sleep_duration {
            tokio::time::sleep(duration).await;
        }

        let mut map = self.last_request.lock().unwrap();
        map.insert(domain, Instant::now());
        Ok(())
    }
}

/// Rate-limited HTTP client for store listing pages.
pub struct ImportHttpClient {
    client: reqwest::Client,
    rate_limiter: RateLimiter,
}

impl ImportHttpClient {
    /// 1 request/second per domain, 20 second fetch timeout.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            rate_limiter: RateLimiter::new(1.0),
        }
    }

    /// Fetch a page's HTML body.
    pub async fn fetch_page(&self, url: &str) -> Result<String, String> {
        self.rate_limiter.wait_for_domain(url).await?;

        info!("Fetching page: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch '{}': {}", url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "HTTP error fetching '{}': {} {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ));
        }

        response
            .text()
            .await
            .map_err(|e| format!("Failed to read body of '{}': {}", url, e))
    }
}

impl Default for ImportHttpClient {
    fn default() -> Self {
        Self::new()
    }
}
