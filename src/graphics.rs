pub mod config;
mod errors;
pub mod pipeline;
pub mod render_loop;
pub mod shader;

pub use config::PipelineConfig;
pub use errors::{GraphicsError, IOResultToResultExt};
pub use pipeline::{ClearBuffers, PipelineState};
pub use render_loop::{render_loop, Frame, Platform};
pub use shader::{FragmentShader, Shader, ShaderStage, VertexShader};

pub type Result<T> = std::result::Result<T, GraphicsError>;
