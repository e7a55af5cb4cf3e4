use anyhow::{Context, Result};
use tracing::{info, warn};
use url::Url;

/// Entry point a navigation source drives. Nothing in this crate produces
/// navigation events; the host collaborator subscribes the checker to its
/// own "before navigate" hook.
pub trait NavigationHook: Send + Sync {
    fn on_before_navigate(&self, url: &str);
}

/// Membership check of one hostname against a fixed deny-list. Observational
/// only: a match is logged, never acted on.
pub struct HostnameChecker {
    malicious_domains: Vec<String>,
}

impl HostnameChecker {
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            malicious_domains: domains.into_iter().map(|d| d.to_lowercase()).collect(),
        }
    }

    /// Parses the URL and compares its hostname case-insensitively against
    /// the fixed list. Errors on URLs that do not parse or have no host.
    pub fn check(&self, url: &str) -> Result<bool> {
        info!("Checking URL: {}", url);

        let parsed = Url::parse(url).with_context(|| format!("Invalid URL: {}", url))?;
        let hostname = parsed
            .host_str()
            .with_context(|| format!("URL has no hostname: {}", url))?;

        info!("Hostname: {}", hostname);

        let matched = self
            .malicious_domains
            .iter()
            .any(|domain| hostname.eq_ignore_ascii_case(domain));

        if matched {
            info!("Blocked: {}", hostname);
        }
        Ok(matched)
    }
}

impl NavigationHook for HostnameChecker {
    fn on_before_navigate(&self, url: &str) {
        if let Err(e) = self.check(url) {
            warn!("Hostname check skipped: {:#}", e);
        }
    }
}
