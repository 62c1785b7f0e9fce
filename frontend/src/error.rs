use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("no window available")]
    NoWindow,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<gloo_net::Error> for SiteError {
    fn from(err: gloo_net::Error) -> Self {
        SiteError::Transport(err.to_string())
    }
}
