use std::fmt;

/// Custom error type for overmind operations
/// Every variant collapses into a persona fallback at the handler edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Upstream API key is missing or empty
    MissingApiKey(String)
  , /// Invalid configuration value
    InvalidConfiguration(String)
  , /// HTTP transport error talking to the upstream
    HttpError(String)
  , /// Upstream returned a non-success status
    ApiError(String)
  , /// Failed to parse a JSON body (incoming or upstream)
    ParseError(String)
  , /// No choices in upstream response
    NoChoicesInResponse
  , /// Required input field absent from the request body
    MissingField(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f, "Missing API key: {} not set", var)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::MissingField(field) => {
              write!(f, "Request body has no '{}' field", field)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::ParseError(e.to_string())
    }
}

impl From<std::io::Error> for Error
{   fn from(e: std::io::Error) -> Self
    {   Error::Other(e.to_string())
    }
}
