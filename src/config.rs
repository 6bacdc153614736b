//! Configuration for the upstream client and the hosting server

use std::fmt;
use std::net::SocketAddr;
use log::debug;

/// Default xAI API base URL
pub const XAI_API_BASE: &str = "https://api.x.ai/v1";

/// Environment variable holding the upstream secret
pub const API_KEY_VAR: &str = "XAI_API_KEY";
pub const API_BASE_VAR: &str = "XAI_API_BASE";
pub const TIMEOUT_VAR: &str = "XAI_TIMEOUT_SECS";
pub const BIND_VAR: &str = "OVERMIND_BIND";

pub const DEFAULT_BIND: &str = "127.0.0.1:8888";

/// Upstream proxy configuration
#[derive(Clone)]
pub struct ProxyConfig
{   /// Bearer secret for the upstream API
    pub api_key: String
  , /// API base URL
    pub api_base: String
  , /// Request timeout in seconds, none unless set
    pub timeout_secs: Option<u64>
}

impl fmt::Debug for ProxyConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("ProxyConfig")
          .field("api_key", &"<redacted>")
          .field("api_base", &self.api_base)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

impl ProxyConfig
{   pub fn new(api_key: impl Into<String>) -> Self
    {   ProxyConfig
        {   api_key: api_key.into()
          , api_base: XAI_API_BASE.to_string()
          , timeout_secs: None
        }
    }

    /// Point the client at another API base (mock servers, proxies)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self
    {   self.api_base = api_base.into();
        self
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let api_key = lookup(API_KEY_VAR)
          .filter(|k| !k.trim().is_empty())
          .ok_or_else(|| crate::error::Error::MissingApiKey(
            API_KEY_VAR.to_string()
          ))?;

        let api_base = lookup(API_BASE_VAR)
          .map(|b| b.trim_end_matches('/').to_string())
          .filter(|b| !b.is_empty())
          .unwrap_or_else(|| XAI_API_BASE.to_string());

        let timeout_secs = match lookup(TIMEOUT_VAR)
        {   Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
              crate::error::Error::InvalidConfiguration(
                format!("{} must be whole seconds, got '{}'", TIMEOUT_VAR, raw)
              )
            })?)
          , None => None
        };

        debug!("Proxy config: api_base={} timeout={:?}", api_base, timeout_secs);
        Ok(ProxyConfig
        {   api_key
          , api_base
          , timeout_secs
        })
    }
}

/// Hosting server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig
{   /// Address to bind the HTTP listener to
    pub bind: SocketAddr
}

impl ServerConfig
{   pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let raw = lookup(BIND_VAR)
          .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = raw.parse::<SocketAddr>().map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("{} '{}': {}", BIND_VAR, raw, e)
          )
        })?;
        Ok(ServerConfig { bind })
    }
}
