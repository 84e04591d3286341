//! # Resolver environment
//!
//! [`TcsCatEnv`] holds what a catalog-generation invocation needs to talk to
//! the name-resolution service: an HTTP agent and the [`ResolverConfig`] it was
//! built from. A new environment is built for every invocation; nothing is
//! cached between two of them.
//!
//! ```text
//! TcsCatEnv
//! ├── http_client (ureq::Agent)
//! └── config      (ResolverConfig: base_url, timeout)
//! ```
use std::time::Duration;

use ureq::Agent;

use crate::tcs_errors::TcsCatError;

/// SIMBAD script interface
pub const SIMBAD_SCRIPT_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-script";

/// Where and how to reach the name-resolution service.
///
/// # Fields
///
/// * `base_url` - endpoint of the SIMBAD script interface
/// * `timeout` - global timeout of one request, `None` waits indefinitely
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            base_url: SIMBAD_SCRIPT_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TcsCatEnv {
    pub http_client: Agent,
    pub config: ResolverConfig,
}

impl Default for TcsCatEnv {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl TcsCatEnv {
    /// Create a new environment with its own HTTP agent.
    pub fn new(config: ResolverConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(config.timeout)
            .build();
        let agent: Agent = agent_config.into();

        TcsCatEnv {
            http_client: agent,
            config,
        }
    }

    /// Send a GET request to the configured endpoint with the given query
    /// parameters and return the response body.
    pub(crate) fn get_with_query(&self, params: &[(&str, &str)]) -> Result<String, TcsCatError> {
        let mut request = self.http_client.get(self.config.base_url.as_str());
        for &(key, value) in params {
            request = request.query(key, value);
        }
        let body = request.call()?.body_mut().read_to_string()?;
        Ok(body)
    }
}
