//! The LLM proxy handler
//!
//! One `ProxyHandler` per persona. Each call walks
//! `Received -> Validated -> UpstreamCalled -> Responded`, leaving early
//! with a 4xx at validation or the persona fallback on any failure.

use log::{debug, error, info};
use serde_json::Value;
use crate::request::{ChatPayload, IncomingRequest, OutgoingResponse};
use crate::providers::xai::{XaiChatRequest, XaiClient};
use crate::persona::PersonaConfig;

pub const NO_QUERY: &str = "No query.";

/// Outcome of the validation step
enum Validated
{   Forward(String)
  , Reject(OutgoingResponse)
}

#[derive(Debug, Clone)]
pub struct ProxyHandler
{   persona: PersonaConfig
  , client: XaiClient
}

impl ProxyHandler
{   pub fn new(
      persona: PersonaConfig
    , client: XaiClient
    ) -> Self
    {   debug!("Creating ProxyHandler for {}", persona.name);
        ProxyHandler
        {   persona
          , client
        }
    }

    pub fn persona(&self) -> &PersonaConfig
    {   &self.persona
    }

    /// Handle one invocation, always producing a response
    pub async fn handle(&self, request: IncomingRequest)
      -> OutgoingResponse
    {   debug!("{} received {} request", self.persona.name, request.method);

        if request.method != "POST"
        {   info!("{} rejected method {}", self.persona.name, request.method);
            return match self.persona.wrong_method_body
            {   Some(text) => OutgoingResponse::text(405, text)
              , None => OutgoingResponse::empty(405)
            };
        }

        match self.proxy(request).await
        {   Ok(response) => response
          , Err(e) => {
              error!("{} failed: {}", self.persona.name, e);
              self.fallback()
            }
        }
    }

    async fn proxy(&self, request: IncomingRequest)
      -> Result<OutgoingResponse, crate::error::Error>
    {   let text = match self.validate(&request)?
        {   Validated::Forward(text) => text
          , Validated::Reject(response) => return Ok(response)
        };

        let upstream = XaiChatRequest::for_persona(&self.persona, text);
        let content = self.client
          .send_chat(&upstream, self.persona.check_upstream_status)
          .await?;

        let reply = match (content, self.persona.trim_reply)
        {   (Some(text), true) => Value::from(text.trim())
          , (None, true) => return Err(crate::error::Error::ParseError(
              "upstream reply has no content to trim".to_string()
            ))
          , (content, false) => Value::from(content)
        };

        Ok(OutgoingResponse::json_field(
          200
        , self.persona.success_field
        , reply
        ))
    }

    fn validate(&self, request: &IncomingRequest)
      -> Result<Validated, crate::error::Error>
    {   let payload = ChatPayload::extract(
          request.body.as_deref()
        , self.persona.input_field
        )?;

        match payload
        {   ChatPayload::Text(text) => Ok(Validated::Forward(text))
          , ChatPayload::Missing if self.persona.validate_input => {
              info!("{} request has no {}", self.persona.name, self.persona.input_field);
              Ok(Validated::Reject(
                OutgoingResponse::json_field(400, "error", NO_QUERY)
              ))
            }
          , ChatPayload::Missing => Err(crate::error::Error::MissingField(
              self.persona.input_field.to_string()
            ))
        }
    }

    fn fallback(&self) -> OutgoingResponse
    {   OutgoingResponse::json_field(
          500
        , self.persona.fallback_field
        , self.persona.fallback_message
        )
    }
}
