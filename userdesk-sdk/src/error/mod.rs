use thiserror::Error;
use wasm_bindgen::JsValue;

pub use api_err::ApiError;

pub mod api_err;

pub type Result<T> = std::result::Result<T, Error>;

pub type Reason = String;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// server answered with a non-2xx status
    #[error("server error: {0}")]
    Network(ApiError),
    /// the request never produced a response
    #[error("request failed: {0}")]
    Request(Reason),
    /// convert server message to local type
    #[error("convert failed: {0}")]
    Convert(Reason),
    /// browser storage unavailable or rejected the write
    #[error("storage error: {0}")]
    Storage(Reason),
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Error::Convert(err.to_string()),
            err => Error::Request(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Convert(value.to_string())
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
