use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XaiChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: usize
  , pub temperature: f32
}

impl XaiChatRequest
{   /// System persona followed by the user text, nothing else
    pub fn for_persona(
      persona: &crate::persona::PersonaConfig
    , user_text: String
    ) -> Self
    {   XaiChatRequest
        {   model: persona.model.to_string()
          , messages: vec![
              ChatMessage::system(persona.system_prompt())
            , ChatMessage::user(user_text)
            ]
          , max_tokens: persona.max_tokens
          , temperature: persona.temperature
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct XaiChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChoiceMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage
{   /// Null or absent when the model produced no text
    #[serde(default)]
    pub content: Option<String>
}

// ===== xAI Client =====

/// Stateless chat-completion client, one POST per call
#[derive(Clone)]
pub struct XaiClient
{   api_key: String
  , api_base: String
  , http_client: reqwest::Client
}

impl fmt::Debug for XaiClient
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("XaiClient")
          .field("api_base", &self.api_base)
          .field("api_key", &"<redacted>")
          .finish()
    }
}

impl XaiClient
{   pub fn new(config: &crate::config::ProxyConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating XaiClient for {}", config.api_base);
        if config.api_key.trim().is_empty()
        {   error!("Empty xAI API key");
            return Err(crate::error::Error::MissingApiKey(
              crate::config::API_KEY_VAR.to_string()
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(XaiClient
        {   api_key: config.api_key.clone()
          , api_base: config.api_base.trim_end_matches('/').to_string()
          , http_client
        })
    }

    pub fn completions_url(&self) -> String
    {   format!("{}/chat/completions", self.api_base)
    }

    /// Send one chat completion and return the first choice's content,
    /// `None` when that content is null
    ///
    /// With `require_success` unset the body is parsed whatever the
    /// status, so an error body only fails once it lacks `choices`.
    pub async fn send_chat(
      &self
    , request: &XaiChatRequest
    , require_success: bool
    ) -> Result<Option<String>, crate::error::Error>
    {   debug!("Sending chat completion to model: {}", request.model);
        trace!("xAI request: {:?}", request);

        let response = self.http_client
          .post(self.completions_url())
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("xAI response status: {}", status);

        if require_success && !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("xAI API error {}: {}", status, error_text);
            return Err(crate::error::Error::ApiError(
              format!("xAI error {}: {}", status, error_text)
            ));
        }

        let chat_response: XaiChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        chat_response.choices.into_iter().next()
          .map(|c| {
            trace!("First choice finish_reason: {:?}", c.finish_reason);
            c.message.content
          })
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })
    }
}
