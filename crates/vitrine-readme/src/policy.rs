//! Internal-host skip policy.
//!
//! Some projects live on a private forge that CI builders cannot reach.
//! When the policy is active, any project whose repository hostname
//! matches (or is a subdomain of) a configured internal host is skipped
//! before candidate generation, counted separately from fetch failures.

use url::Url;

/// Environment variable carrying the comma-separated internal host list.
pub const INTERNAL_HOSTS_VAR: &str = "INTERNAL_README_HOSTS";

/// Environment variable that force-enables the skip policy.
pub const SKIP_OVERRIDE_VAR: &str = "SKIP_INTERNAL_READMES";

/// Hosting-platform indicator that implies the skip policy.
pub const NETLIFY_VAR: &str = "NETLIFY";

/// The one internal host assumed when no list is configured.
pub const DEFAULT_INTERNAL_HOST: &str = "git.internal.example";

/// Skip-internal policy: an on/off flag plus the internal host list.
#[derive(Debug, Clone)]
pub struct SkipPolicy {
    /// Whether skipping is active at all
    active: bool,
    /// Hostnames considered internal
    hosts: Vec<String>,
}

impl SkipPolicy {
    /// Create a policy with an explicit flag and host list.
    pub fn new(active: bool, hosts: Vec<String>) -> Self {
        Self { active, hosts }
    }

    /// A policy that never skips anything.
    pub fn disabled() -> Self {
        Self {
            active: false,
            hosts: Vec::new(),
        }
    }

    /// Build the policy from the process environment.
    ///
    /// Active when `NETLIFY=true` (builds on the hosting platform cannot
    /// reach the private forge) or when `SKIP_INTERNAL_READMES=1` is set
    /// explicitly. Hosts come from the comma-separated
    /// `INTERNAL_README_HOSTS`, defaulting to [`DEFAULT_INTERNAL_HOST`].
    pub fn from_env() -> Self {
        let netlify = std::env::var(NETLIFY_VAR).is_ok_and(|v| v == "true");
        let forced = std::env::var(SKIP_OVERRIDE_VAR).is_ok_and(|v| v == "1");
        let hosts = std::env::var(INTERNAL_HOSTS_VAR)
            .unwrap_or_else(|_| DEFAULT_INTERNAL_HOST.to_string());
        Self {
            active: netlify || forced,
            hosts: parse_host_list(&hosts),
        }
    }

    /// Whether the policy is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The configured internal hosts.
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Whether the URL's hostname exactly matches or is a subdomain of a
    /// configured internal host. Unparseable URLs are never internal.
    pub fn is_internal(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(hostname) = parsed.host_str() else {
            return false;
        };
        self.hosts
            .iter()
            .any(|host| hostname == host || hostname.ends_with(&format!(".{host}")))
    }

    /// Whether a project at this repository URL should be skipped.
    pub fn should_skip(&self, url: &str) -> bool {
        self.active && self.is_internal(url)
    }
}

/// Split a comma-separated host list, trimming whitespace and dropping
/// empty entries.
fn parse_host_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
