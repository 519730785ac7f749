use ash::vk;
use mtlkit::graphics::shader::SPIRV_MAGIC;
use mtlkit::graphics::{GraphicsError, VertexShader};
use std::path::{Path, PathBuf};

fn shader_asset(name: &str) -> PathBuf { Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/shaders").join(name) }

#[test]
fn bundled_vertex_shader_loads()
{
    let shader = VertexShader::from_file(shader_asset("empty.vert.spv")).unwrap();
    assert_eq!(shader.code().first(), Some(&SPIRV_MAGIC));
    assert_eq!(shader.module_create_info().code_size, 4 * shader.code().len());
    assert_eq!(shader.stage_create_info(vk::ShaderModule::null()).stage, vk::ShaderStageFlags::VERTEX);
}

#[test]
fn non_spirv_file_is_rejected()
{
    let result = VertexShader::from_file(shader_asset("../pipeline.json"));
    assert!(matches!(result, Err(GraphicsError::InvalidSpirv { .. })));
}
