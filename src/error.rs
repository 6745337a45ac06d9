use std::fmt;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while setting up or running a lesson.
#[derive(Debug, Clone, PartialEq)]
pub enum GlError {
    /// The canvas exists but a WebGL 2 context couldn't be created for it.
    ContextUnavailable,
    /// No DOM element with this id, or it has the wrong type.
    MissingElement(String),
    /// The linked program has no active uniform with this name.
    MissingUniform(String),
    ShaderCompile(String),
    ProgramLink(String),
    /// A `create_*` call returned `None`.
    ResourceCreation(&'static str),
    Config(String),
    /// An exception thrown by a browser API.
    Js(String),
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlError::ContextUnavailable => write!(f, "WebGL 2 is not supported"),
            GlError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            GlError::MissingUniform(name) => write!(f, "Missing uniform: {}", name),
            GlError::ShaderCompile(log) => write!(f, "Error compiling shader: {}", log),
            GlError::ProgramLink(log) => write!(f, "Error linking program: {}", log),
            GlError::ResourceCreation(what) => write!(f, "Unable to create {}", what),
            GlError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            GlError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for GlError {}

impl From<JsValue> for GlError {
    fn from(value: JsValue) -> Self {
        GlError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<GlError> for JsValue {
    fn from(err: GlError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type GlResult<T> = Result<T, GlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details() {
        assert_eq!(GlError::MissingElement("x".into()).to_string(), "Missing element: #x");
        assert_eq!(
            GlError::MissingUniform("u_matrix".into()).to_string(),
            "Missing uniform: u_matrix"
        );
        assert_eq!(
            GlError::ResourceCreation("buffer").to_string(),
            "Unable to create buffer"
        );
    }
}
