pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod persona;
pub mod handler;
pub mod server;

use std::sync::Arc;
use log::debug;

/*

overmind forwards a user message to the xAI chat-completion API under a
fixed persona and hands the reply back as JSON. each persona is one
ProxyHandler; nothing survives between calls.

overmind/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and handler wiring
│   ├── main.rs         # Binary: env, logging, serve
│   ├── error.rs        # Error type
│   ├── config.rs       # Proxy and server configuration
│   ├── request.rs      # Incoming/outgoing per-call types
│   ├── persona.rs      # chat-grok and drip.reservoir personas
│   ├── handler.rs      # The proxy state machine
│   ├── server.rs       # axum / Netlify event adapter
│   └── providers/
│       ├── mod.rs
│       └── xai.rs      # xAI chat-completion client
└── tests/              # Integration tests against a mock upstream

*/

pub use error::Error;
pub use config::{ProxyConfig, ServerConfig};
pub use handler::ProxyHandler;
pub use persona::PersonaConfig;
pub use request::{IncomingRequest, OutgoingResponse};

/// Build one handler per persona, all sharing a client built from `config`
pub fn build_handlers(
  config: &ProxyConfig
, personas: Vec<PersonaConfig>
) -> Result<Vec<Arc<ProxyHandler>>, Error>
{   debug!("Building {} handlers", personas.len());
    let client = providers::XaiClient::new(config)?;
    Ok(personas
      .into_iter()
      .map(|persona| Arc::new(ProxyHandler::new(persona, client.clone())))
      .collect())
}
