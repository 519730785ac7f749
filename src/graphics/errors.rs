use crate::log;
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum GraphicsError
{
    /// A value outside of the legal set for a pipeline parameter
    #[display("Bad enum value {value} for {parameter}")]
    InvalidEnum
    {
        parameter: &'static str,
        value:     i32,
    },
    #[display("{source} for file {path}")]
    Io
    {
        source: std::io::Error,
        path:   String,
    },
    /// The pipeline configuration is not a well formed document
    #[display("Ill-formed pipeline configuration: {source}")]
    Config
    {
        source: serde_json::Error,
    },
    /// The bytes are not a SPIR-V module
    #[display("Malformed SPIR-V from {origin}: {reason}")]
    InvalidSpirv
    {
        origin: String,
        reason: String,
    },
    #[display("No file loaded in this {stage} shader for reloading")]
    NoShaderFile
    {
        stage: &'static str,
    },
    #[display("Frame rate must be at least 1")]
    InvalidFrameRate,
    #[display("Could not present frame: {reason}")]
    Present
    {
        reason: String,
    },
    #[display("{source}")]
    Input
    {
        source: crate::input::InputError,
    },
}

impl log::ProjectError for GraphicsError
{
    fn title(&self) -> String
    {
        String::from(match *self {
            GraphicsError::InvalidEnum { .. } => "Pipeline",
            GraphicsError::Io { .. } => "IO",
            GraphicsError::Config { .. } => "Config",
            GraphicsError::InvalidSpirv { .. } | GraphicsError::NoShaderFile { .. } => "Shader",
            GraphicsError::InvalidFrameRate | GraphicsError::Present { .. } => "Render Loop",
            GraphicsError::Input { .. } => "Input",
        })
    }
}

impl From<serde_json::Error> for GraphicsError
{
    fn from(source: serde_json::Error) -> Self { GraphicsError::Config { source } }
}

impl From<crate::input::InputError> for GraphicsError
{
    fn from(source: crate::input::InputError) -> Self { GraphicsError::Input { source } }
}

pub trait IOResultToResultExt<T>
{
    fn to_result(self, path: &str) -> crate::graphics::Result<T>;
}

impl<T> IOResultToResultExt<T> for std::io::Result<T>
{
    fn to_result(self, path: &str) -> crate::graphics::Result<T>
    {
        self.map_err(|source| GraphicsError::Io { source, path: path.to_string() })
    }
}
