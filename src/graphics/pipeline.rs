use crate::graphics::errors::GraphicsError;
use crate::graphics::Result;
use crate::maths::Colour;
use ash::vk;

/// Legal depth test functions
const DEPTH_FUNCTIONS: [vk::CompareOp; 8] = [
    vk::CompareOp::LESS,
    vk::CompareOp::NEVER,
    vk::CompareOp::EQUAL,
    vk::CompareOp::LESS_OR_EQUAL,
    vk::CompareOp::GREATER,
    vk::CompareOp::NOT_EQUAL,
    vk::CompareOp::GREATER_OR_EQUAL,
    vk::CompareOp::ALWAYS,
];

/// Legal faces to cull when culling is enabled
const CULL_FACES: [vk::CullModeFlags; 3] =
    [vk::CullModeFlags::FRONT, vk::CullModeFlags::BACK, vk::CullModeFlags::FRONT_AND_BACK];

impl From<Colour> for vk::ClearColorValue
{
    fn from(colour: Colour) -> Self { vk::ClearColorValue { float32: colour.into() } }
}

/// Which buffers a frame starts by clearing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearBuffers
{
    pub colour:  bool,
    pub depth:   bool,
    pub stencil: bool,
}

impl ClearBuffers
{
    pub const ALL: ClearBuffers = ClearBuffers { colour: true, depth: true, stencil: true };
    pub const COLOUR_AND_DEPTH: ClearBuffers = ClearBuffers { colour: true, depth: true, stencil: false };

    pub fn colour_load_op(&self) -> vk::AttachmentLoadOp { load_op(self.colour) }
    pub fn depth_load_op(&self) -> vk::AttachmentLoadOp { load_op(self.depth) }
    pub fn stencil_load_op(&self) -> vk::AttachmentLoadOp { load_op(self.stencil) }
}

fn load_op(clear: bool) -> vk::AttachmentLoadOp
{
    if clear {
        vk::AttachmentLoadOp::CLEAR
    } else {
        vk::AttachmentLoadOp::LOAD // Keep what the attachment already holds
    }
}

/// The fixed function state a graphics pipeline and its render pass are created with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineState
{
    depth_test:        bool,
    depth_function:    vk::CompareOp,
    depth_clear_value: f32,
    clear_colour:      Colour,
    culling:           bool,
    front_face:        vk::FrontFace,
    cull_face:         vk::CullModeFlags,
}

impl Default for PipelineState
{
    fn default() -> Self
    {
        PipelineState {
            depth_test:        false,
            depth_function:    vk::CompareOp::LESS,
            depth_clear_value: 1.0,
            clear_colour:      Colour::zero(),
            culling:           false,
            front_face:        vk::FrontFace::COUNTER_CLOCKWISE,
            cull_face:         vk::CullModeFlags::BACK,
        }
    }
}

impl PipelineState
{
    pub fn new() -> Self { Self::default() }

    pub fn depth_test(&self) -> bool { self.depth_test }

    pub fn set_depth_test(&mut self, enable: bool) -> &mut Self
    {
        tracing::debug!("Depth test {}", if enable { "enabled" } else { "disabled" });
        self.depth_test = enable;
        self
    }

    pub fn depth_test_function(&self) -> vk::CompareOp { self.depth_function }

    pub fn set_depth_test_function(&mut self, function: vk::CompareOp) -> Result<&mut Self>
    {
        if !DEPTH_FUNCTIONS.contains(&function) {
            return Err(GraphicsError::InvalidEnum { parameter: "depth test function", value: function.as_raw() });
        }
        tracing::debug!("Depth test function set to {:?}", function);
        self.depth_function = function;
        Ok(self)
    }

    pub fn depth_clear_value(&self) -> f32 { self.depth_clear_value }

    pub fn set_depth_clear_value(&mut self, value: f32) -> &mut Self
    {
        self.depth_clear_value = value;
        self
    }

    pub fn clear_colour(&self) -> Colour { self.clear_colour }

    pub fn set_clear_colour(&mut self, colour: Colour) -> &mut Self
    {
        tracing::debug!("Clear colour set to {}", colour);
        self.clear_colour = colour;
        self
    }

    pub fn set_clear_rgba(&mut self, red: f32, green: f32, blue: f32, alpha: f32) -> &mut Self
    {
        self.set_clear_colour(Colour::new([red, green, blue, alpha]))
    }

    pub fn culling(&self) -> bool { self.culling }

    pub fn set_culling(&mut self, enable: bool) -> &mut Self
    {
        tracing::debug!("Face culling {}", if enable { "enabled" } else { "disabled" });
        self.culling = enable;
        self
    }

    /// Winding order of front facing triangles
    pub fn rotation_direction(&self) -> vk::FrontFace { self.front_face }

    pub fn set_rotation_direction(&mut self, direction: vk::FrontFace) -> Result<&mut Self>
    {
        if direction != vk::FrontFace::CLOCKWISE && direction != vk::FrontFace::COUNTER_CLOCKWISE {
            return Err(GraphicsError::InvalidEnum { parameter: "rotation direction", value: direction.as_raw() });
        }
        self.front_face = direction;
        Ok(self)
    }

    pub fn cull_face(&self) -> vk::CullModeFlags { self.cull_face }

    pub fn set_cull_face(&mut self, face: vk::CullModeFlags) -> Result<&mut Self>
    {
        if !CULL_FACES.contains(&face) {
            return Err(GraphicsError::InvalidEnum { parameter: "cull face", value: face.as_raw() as i32 });
        }
        self.cull_face = face;
        Ok(self)
    }

    /// Clear values for the requested buffers, in attachment order: colour then depth/stencil
    pub fn clear_values(&self, buffers: ClearBuffers) -> Vec<vk::ClearValue>
    {
        let mut values = Vec::with_capacity(2);
        if buffers.colour {
            values.push(vk::ClearValue { color: self.clear_colour.into() });
        }
        if buffers.depth || buffers.stencil {
            values.push(vk::ClearValue {
                depth_stencil: vk::ClearDepthStencilValue { depth: self.depth_clear_value, stencil: 0 },
            });
        }
        values
    }

    pub fn rasterization_state(&self) -> vk::PipelineRasterizationStateCreateInfo<'static>
    {
        let cull_mode = if self.culling { self.cull_face } else { vk::CullModeFlags::NONE };

        vk::PipelineRasterizationStateCreateInfo::default()
            .depth_clamp_enable(false) // Discard fragments beyond the near and far planes
            .depth_bias_enable(false)
            .rasterizer_discard_enable(false)
            .polygon_mode(vk::PolygonMode::FILL)
            .line_width(1.0)
            .cull_mode(cull_mode)
            .front_face(self.front_face)
    }

    pub fn depth_stencil_state(&self) -> vk::PipelineDepthStencilStateCreateInfo<'static>
    {
        vk::PipelineDepthStencilStateCreateInfo::default()
            .depth_test_enable(self.depth_test)
            .depth_write_enable(self.depth_test)
            .depth_compare_op(self.depth_function)
            .depth_bounds_test_enable(false)
            .stencil_test_enable(false)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn defaults()
    {
        let state = PipelineState::new();
        assert!(!state.depth_test());
        assert_eq!(state.depth_test_function(), vk::CompareOp::LESS);
        assert_eq!(state.depth_clear_value(), 1.0);
        assert_eq!(state.clear_colour(), Colour::zero());
        assert!(!state.culling());
        assert_eq!(state.rotation_direction(), vk::FrontFace::COUNTER_CLOCKWISE);
        assert_eq!(state.cull_face(), vk::CullModeFlags::BACK);
    }

    #[test]
    fn clear_colour_round_trips()
    {
        let mut state = PipelineState::new();
        let colour = Colour::new([0.1, 0.2, 0.3, 1.0]);
        state.set_clear_colour(colour);
        assert_eq!(state.clear_colour(), colour);

        state.set_clear_rgba(1.0, 0.5, 0.25, 0.0);
        assert_eq!(state.clear_colour().as_array(), &[1.0, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn depth_function_is_validated()
    {
        let mut state = PipelineState::new();
        for function in DEPTH_FUNCTIONS {
            state.set_depth_test_function(function).unwrap();
            assert_eq!(state.depth_test_function(), function);
        }

        let error = state.set_depth_test_function(vk::CompareOp::from_raw(42)).unwrap_err();
        assert!(matches!(error, GraphicsError::InvalidEnum { value: 42, .. }));
        assert_eq!(state.depth_test_function(), vk::CompareOp::ALWAYS);
    }

    #[test]
    fn rotation_direction_is_validated()
    {
        let mut state = PipelineState::new();
        state.set_rotation_direction(vk::FrontFace::CLOCKWISE).unwrap();
        assert_eq!(state.rotation_direction(), vk::FrontFace::CLOCKWISE);
        assert!(state.set_rotation_direction(vk::FrontFace::from_raw(7)).is_err());
        assert_eq!(state.rotation_direction(), vk::FrontFace::CLOCKWISE);
    }

    #[test]
    fn cull_face_is_validated()
    {
        let mut state = PipelineState::new();
        state.set_cull_face(vk::CullModeFlags::FRONT_AND_BACK).unwrap();
        assert_eq!(state.cull_face(), vk::CullModeFlags::FRONT_AND_BACK);
        assert!(state.set_cull_face(vk::CullModeFlags::NONE).is_err());
        assert_eq!(state.cull_face(), vk::CullModeFlags::FRONT_AND_BACK);
    }

    #[test]
    fn clear_values_follow_requested_buffers()
    {
        let mut state = PipelineState::new();
        state.set_clear_rgba(0.1, 0.2, 0.3, 1.0).set_depth_clear_value(0.5);

        assert!(state.clear_values(ClearBuffers::default()).is_empty());

        let values = state.clear_values(ClearBuffers::COLOUR_AND_DEPTH);
        assert_eq!(values.len(), 2);
        let (colour, depth) = unsafe { (values[0].color.float32, values[1].depth_stencil) };
        assert_eq!(Colour::new(colour), state.clear_colour());
        assert_eq!((depth.depth, depth.stencil), (0.5, 0));

        let stencil_only = ClearBuffers { stencil: true, ..ClearBuffers::default() };
        assert_eq!(state.clear_values(stencil_only).len(), 1);
    }

    #[test]
    fn load_ops_match_clear_flags()
    {
        let buffers = ClearBuffers { colour: true, depth: false, stencil: false };
        assert_eq!(buffers.colour_load_op(), vk::AttachmentLoadOp::CLEAR);
        assert_eq!(buffers.depth_load_op(), vk::AttachmentLoadOp::LOAD);
        assert_eq!(ClearBuffers::ALL.stencil_load_op(), vk::AttachmentLoadOp::CLEAR);
    }

    #[test]
    fn create_infos_reflect_state()
    {
        let mut state = PipelineState::new();
        assert_eq!(state.rasterization_state().cull_mode, vk::CullModeFlags::NONE);
        assert_eq!(state.depth_stencil_state().depth_test_enable, vk::FALSE);

        state.set_culling(true).set_depth_test(true);
        state.set_cull_face(vk::CullModeFlags::FRONT).unwrap();
        state.set_rotation_direction(vk::FrontFace::CLOCKWISE).unwrap();
        state.set_depth_test_function(vk::CompareOp::GREATER_OR_EQUAL).unwrap();

        let rasterization = state.rasterization_state();
        assert_eq!(rasterization.cull_mode, vk::CullModeFlags::FRONT);
        assert_eq!(rasterization.front_face, vk::FrontFace::CLOCKWISE);
        assert_eq!(rasterization.polygon_mode, vk::PolygonMode::FILL);

        let depth = state.depth_stencil_state();
        assert_eq!(depth.depth_test_enable, vk::TRUE);
        assert_eq!(depth.depth_write_enable, vk::TRUE);
        assert_eq!(depth.depth_compare_op, vk::CompareOp::GREATER_OR_EQUAL);
    }
}
