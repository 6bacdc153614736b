//! Per-invocation request and response types
//!
//! Field names follow the Netlify function event/response shape so the
//! same values travel over the axum adapter or a raw event.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The HTTP call received from the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingRequest
{   /// HTTP method, compared case-sensitively against "POST"
    #[serde(rename = "httpMethod")]
    pub method: String
  , /// Raw JSON body text, if any
    #[serde(default)]
    pub body: Option<String>
}

impl IncomingRequest
{   pub fn new(
      method: impl Into<String>
    , body: Option<String>
    ) -> Self
    {   IncomingRequest
        {   method: method.into()
          , body
        }
    }

    pub fn post(body: impl Into<String>) -> Self
    {   Self::new("POST", Some(body.into()))
    }
}

/// The user input pulled out of the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatPayload
{   /// Field held a non-empty string
    Text(String)
  , /// Field was absent or held a falsy value (null, "", false, 0)
    Missing
}

/// Values that carry no input: null, false, zero and the empty string
fn is_falsy(value: &Value) -> bool
{   match value
    {   Value::Null => true
      , Value::Bool(b) => !b
      , Value::Number(n) => n.as_f64() == Some(0.0)
      , Value::String(s) => s.is_empty()
      , Value::Array(_) | Value::Object(_) => false
    }
}

impl ChatPayload
{   /// Parse `body` as JSON and read the string field `field`
    ///
    /// An absent body, text that is not JSON, or a JSON `null` is a parse
    /// error. Any other non-object body has no fields and reads as
    /// `Missing`, as do empty field values. Any other non-string
    /// value is a parse error.
    pub fn extract(
      body: Option<&str>
    , field: &str
    ) -> Result<Self, crate::error::Error>
    {   let raw = body.ok_or_else(|| {
          crate::error::Error::ParseError(
            "request has no body".to_string()
          )
        })?;
        let value: Value = serde_json::from_str(raw)?;
        let object = match value
        {   Value::Object(object) => object
          , Value::Null => return Err(crate::error::Error::ParseError(
              "request body is null".to_string()
            ))
          , _ => return Ok(ChatPayload::Missing)
        };

        match object.get(field)
        {   None => Ok(ChatPayload::Missing)
          , Some(v) if is_falsy(v) => Ok(ChatPayload::Missing)
          , Some(Value::String(s)) => Ok(ChatPayload::Text(s.clone()))
          , Some(other) => Err(crate::error::Error::ParseError(
              format!("'{}' must be a string, got {}", field, other)
            ))
        }
    }
}

/// How the response body should be labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind
{   Json
  , Text
}

impl BodyKind
{   pub fn content_type(&self) -> &'static str
    {   match self
        {   BodyKind::Json => "application/json"
          , BodyKind::Text => "text/plain; charset=utf-8"
        }
    }
}

/// What is returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingResponse
{   #[serde(rename = "statusCode")]
    pub status_code: u16
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>
  , #[serde(skip)]
    pub kind: BodyKind
}

impl OutgoingResponse
{   /// Response whose body is a single-field JSON object
    pub fn json_field(
      status_code: u16
    , field: &str
    , value: impl Into<Value>
    ) -> Self
    {   let mut object = serde_json::Map::new();
        object.insert(field.to_string(), value.into());
        OutgoingResponse
        {   status_code
          , body: Some(Value::Object(object).to_string())
          , kind: BodyKind::Json
        }
    }

    pub fn text(status_code: u16, text: &str) -> Self
    {   OutgoingResponse
        {   status_code
          , body: Some(text.to_string())
          , kind: BodyKind::Text
        }
    }

    pub fn empty(status_code: u16) -> Self
    {   OutgoingResponse
        {   status_code
          , body: None
          , kind: BodyKind::Text
        }
    }

    /// Parse the body back as JSON, mostly for callers and tests
    pub fn json(&self) -> Option<Value>
    {   self.body.as_deref()
          .and_then(|b| serde_json::from_str(b).ok())
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn extract_reads_string_field()
    {   let payload = ChatPayload::extract(
          Some(r#"{"message":"  who are you?  "}"#), "message"
        ).unwrap();
        assert_eq!(payload, ChatPayload::Text("  who are you?  ".to_string()));
    }

    #[test]
    fn extract_treats_absent_and_falsy_as_missing()
    {   for body in [
          r#"{}"#, r#"{"query":null}"#, r#"{"query":""}"#
        , r#"{"query":false}"#, r#"{"query":0}"#, r#"{"query":0.0}"#
        , "[1,2]", r#""hello""#, "5", "true"
        ]
        {   assert_eq!(
              ChatPayload::extract(Some(body), "query").unwrap()
            , ChatPayload::Missing
            );
        }
    }

    #[test]
    fn extract_rejects_bad_bodies()
    {   assert!(ChatPayload::extract(None, "query").is_err());
        assert!(ChatPayload::extract(Some("not json"), "query").is_err());
        assert!(ChatPayload::extract(Some("null"), "query").is_err());
        assert!(ChatPayload::extract(Some(r#"{"query":7}"#), "query").is_err());
        assert!(ChatPayload::extract(Some(r#"{"query":true}"#), "query").is_err());
    }

    #[test]
    fn json_field_escapes_content()
    {   let response = OutgoingResponse::json_field(200, "reply", "say \"hi\"");
        assert_eq!(response.body.as_deref(), Some(r#"{"reply":"say \"hi\""}"#));
        assert_eq!(response.kind.content_type(), "application/json");

        let response = OutgoingResponse::json_field(200, "lore", None::<String>);
        assert_eq!(response.body.as_deref(), Some(r#"{"lore":null}"#));
    }

    #[test]
    fn incoming_request_reads_netlify_event()
    {   let event: IncomingRequest = serde_json::from_str(
          r#"{"httpMethod":"GET","path":"/.netlify/functions/chat-grok"}"#
        ).unwrap();
        assert_eq!(event, IncomingRequest::new("GET", None));
    }
}
