//! Hosting adapter
//!
//! Mounts each persona handler at `/.netlify/functions/<name>` and
//! accepts raw Netlify events, so the handlers never see platform types.

use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use log::{debug, error, info};
use crate::handler::ProxyHandler;
use crate::request::{IncomingRequest, OutgoingResponse};

pub const FUNCTIONS_PREFIX: &str = "/.netlify/functions";

impl IntoResponse for OutgoingResponse
{   fn into_response(self) -> Response
    {   let status = StatusCode::from_u16(self.status_code)
          .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body
        {   Some(body) => (
              status
            , [(header::CONTENT_TYPE, self.kind.content_type())]
            , body
            ).into_response()
          , None => status.into_response()
        }
    }
}

/// Convert what axum hands us into the platform-neutral request
pub fn to_incoming(method: &Method, body: &[u8]) -> IncomingRequest
{   let body = match std::str::from_utf8(body)
    {   Ok("") => None
      , Ok(text) => Some(text.to_string())
      , Err(e) => {
          debug!("Dropping non UTF-8 body: {}", e);
          None
        }
    };
    IncomingRequest::new(method.as_str(), body)
}

async fn function_handler(
  State(handler): State<Arc<ProxyHandler>>
, method: Method
, body: Bytes
) -> OutgoingResponse
{   debug!("{} {}", method, handler.persona().name);
    handler.handle(to_incoming(&method, &body)).await
}

/// Build the router serving every handler
pub fn router(handlers: Vec<Arc<ProxyHandler>>) -> Router
{   handlers.into_iter().fold(Router::new(), |app, handler| {
      let path = format!("{}/{}", FUNCTIONS_PREFIX, handler.persona().name);
      debug!("Mounting {}", path);
      app.route(
        &path
      , any(function_handler).with_state(handler)
      )
    })
}

/// Handle a Netlify event JSON and return the response JSON
pub async fn handle_event(handler: &ProxyHandler, event: &str)
  -> Result<String, crate::error::Error>
{   let request: IncomingRequest = serde_json::from_str(event)?;
    let response = handler.handle(request).await;
    Ok(serde_json::to_string(&response)?)
}

/// Bind and serve until the process is stopped
pub async fn serve(
  config: &crate::config::ServerConfig
, handlers: Vec<Arc<ProxyHandler>>
) -> Result<(), crate::error::Error>
{   let names: Vec<&'static str> = handlers.iter()
      .map(|h| h.persona().name)
      .collect();
    let app = router(handlers);

    let listener = tokio::net::TcpListener::bind(config.bind).await
      .map_err(|e| {
        error!("Failed to bind {}: {}", config.bind, e);
        crate::error::Error::InvalidConfiguration(
          format!("cannot bind {}: {}", config.bind, e)
        )
      })?;

    info!("Listening on {}", config.bind);
    for name in names
    {   info!("  POST {}/{}", FUNCTIONS_PREFIX, name);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
