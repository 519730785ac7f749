use crate::graphics::errors::IOResultToResultExt;
use crate::graphics::pipeline::PipelineState;
use crate::graphics::Result;
use crate::maths::Colour;
use ash::vk;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On disk description of a [`PipelineState`]
///
/// ```json
/// {
///     "depth": { "enable_depth_test": true, "depth_function": "less", "clear_depth_value": 1.0 },
///     "clear_colour": { "red": 0.1, "green": 0.2, "blue": 0.3, "alpha": 1.0 },
///     "cull_face": { "enable_culling": true, "rotation_direction": "clockwise", "keeping": "back" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineConfig
{
    pub depth:        DepthConfig,
    pub clear_colour: ClearColourConfig,
    pub cull_face:    CullFaceConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepthConfig
{
    pub enable_depth_test: bool,
    pub depth_function:    DepthFunction,
    pub clear_depth_value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClearColourConfig
{
    pub red:   f32,
    pub green: f32,
    pub blue:  f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CullFaceConfig
{
    pub enable_culling:     bool,
    /// "clockwise", anything else means counter clockwise
    pub rotation_direction: String,
    /// "front", "back" or "front_back"
    pub keeping:            String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthFunction
{
    Less,
    Equal,
    LessEqual,
    Never,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

impl From<DepthFunction> for vk::CompareOp
{
    fn from(function: DepthFunction) -> Self
    {
        match function {
            DepthFunction::Less => vk::CompareOp::LESS,
            DepthFunction::Equal => vk::CompareOp::EQUAL,
            DepthFunction::LessEqual => vk::CompareOp::LESS_OR_EQUAL,
            DepthFunction::Never => vk::CompareOp::NEVER,
            DepthFunction::Greater => vk::CompareOp::GREATER,
            DepthFunction::NotEqual => vk::CompareOp::NOT_EQUAL,
            DepthFunction::GreaterEqual => vk::CompareOp::GREATER_OR_EQUAL,
            DepthFunction::Always => vk::CompareOp::ALWAYS,
        }
    }
}

impl From<ClearColourConfig> for Colour
{
    fn from(colour: ClearColourConfig) -> Self { Colour::new([colour.red, colour.green, colour.blue, colour.alpha]) }
}

impl CullFaceConfig
{
    pub fn front_face(&self) -> vk::FrontFace
    {
        match self.rotation_direction.as_str() {
            "clockwise" => vk::FrontFace::CLOCKWISE,
            _ => vk::FrontFace::COUNTER_CLOCKWISE,
        }
    }

    pub fn cull_mode(&self) -> vk::CullModeFlags
    {
        match self.keeping.as_str() {
            "front" => vk::CullModeFlags::FRONT,
            "back" => vk::CullModeFlags::BACK,
            "front_back" => vk::CullModeFlags::FRONT_AND_BACK,
            other => {
                tracing::warn!("Unknown cull face \"{}\", culling front faces", other);
                vk::CullModeFlags::FRONT
            }
        }
    }
}

impl PipelineConfig
{
    pub fn from_json(json: &str) -> Result<Self> { Ok(serde_json::from_str(json)?) }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self>
    {
        let path = path.as_ref();
        let json = fs::read_to_string(path).to_result(&path.display().to_string())?;
        Self::from_json(&json)
    }
}

impl PipelineState
{
    pub fn apply_config(&mut self, config: &PipelineConfig) -> Result<&mut Self>
    {
        self.set_depth_test(config.depth.enable_depth_test)
            .set_depth_clear_value(config.depth.clear_depth_value)
            .set_clear_colour(config.clear_colour.into())
            .set_culling(config.cull_face.enable_culling);
        self.set_depth_test_function(config.depth.depth_function.into())?;
        self.set_rotation_direction(config.cull_face.front_face())?;
        self.set_cull_face(config.cull_face.cull_mode())?;
        Ok(self)
    }

    pub fn from_config_str(json: &str) -> Result<Self>
    {
        let mut state = PipelineState::default();
        state.apply_config(&PipelineConfig::from_json(json)?)?;
        Ok(state)
    }

    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self>
    {
        let path = path.as_ref();
        let mut state = PipelineState::default();
        state.apply_config(&PipelineConfig::from_file(path)?)?;
        tracing::info!("Loaded pipeline configuration from {}", path.display());
        Ok(state)
    }
}
