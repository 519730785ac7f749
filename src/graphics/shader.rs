use crate::graphics::errors::{GraphicsError, IOResultToResultExt};
use crate::graphics::Result;
use ash::vk;
use std::ffi::CStr;
use std::fs;
use std::io::Cursor;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// First word of every SPIR-V module
pub const SPIRV_MAGIC: u32 = 0x0723_0203;

const ENTRY_POINT: &CStr = c"main";

mod sealed
{
    pub trait Sealed {}
}

/// A programmable pipeline stage, only the stage markers below implement it
pub trait ShaderStage: sealed::Sealed
{
    const FLAGS: vk::ShaderStageFlags;
    const NAME: &'static str;
}

macro_rules! shader_stages {
    ($($stage:ident => $flags:ident, $name:literal;)*) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub enum $stage {}

            impl sealed::Sealed for $stage {}

            impl ShaderStage for $stage
            {
                const FLAGS: vk::ShaderStageFlags = vk::ShaderStageFlags::$flags;
                const NAME: &'static str = $name;
            }
        )*
    };
}

shader_stages! {
    VertexStage => VERTEX, "vertex";
    FragmentStage => FRAGMENT, "fragment";
    ComputeStage => COMPUTE, "compute";
    GeometryStage => GEOMETRY, "geometry";
    TessellationControlStage => TESSELLATION_CONTROL, "tessellation control";
    TessellationEvaluationStage => TESSELLATION_EVALUATION, "tessellation evaluation";
}

pub type VertexShader = Shader<VertexStage>;
pub type FragmentShader = Shader<FragmentStage>;
pub type ComputeShader = Shader<ComputeStage>;
pub type GeometryShader = Shader<GeometryStage>;
pub type TessellationControlShader = Shader<TessellationControlStage>;
pub type TessellationEvaluationShader = Shader<TessellationEvaluationStage>;

/// SPIR-V code for the stage `S`
///
/// ```no_run
/// use mtlkit::graphics::shader::VertexShader;
///
/// let mut vertex = VertexShader::from_file("shaders/triangle.vert.spv")?;
/// // after the file was recompiled
/// vertex.reload()?;
/// let create_info = vertex.module_create_info();
/// # Ok::<(), mtlkit::graphics::GraphicsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Shader<S: ShaderStage>
{
    code:  Vec<u32>,
    path:  Option<PathBuf>,
    stage: PhantomData<S>,
}

impl<S: ShaderStage> Shader<S>
{
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self>
    {
        let path = path.as_ref();
        let code = read_file(path)?;
        tracing::debug!("Loaded {} shader from {}", S::NAME, path.display());
        Ok(Shader { code, path: Some(path.to_path_buf()), stage: PhantomData })
    }

    /// A shader built from memory has no file to be reloaded from
    pub fn from_bytes(bytes: &[u8]) -> Result<Self>
    {
        Ok(Shader { code: parse(bytes, "memory")?, path: None, stage: PhantomData })
    }

    /// Reads the file the shader was loaded from again, the current code is kept if that fails
    pub fn reload(&mut self) -> Result<&mut Self>
    {
        let path = self.path.as_deref().ok_or(GraphicsError::NoShaderFile { stage: S::NAME })?;
        self.code = read_file(path)?;
        tracing::info!("Reloaded {} shader from {}", S::NAME, path.display());
        Ok(self)
    }

    pub fn code(&self) -> &[u32] { &self.code }
    pub fn path(&self) -> Option<&Path> { self.path.as_deref() }
    pub fn stage(&self) -> vk::ShaderStageFlags { S::FLAGS }

    pub fn module_create_info(&self) -> vk::ShaderModuleCreateInfo<'_>
    {
        vk::ShaderModuleCreateInfo::default().code(&self.code)
    }

    /// Stage description for a module created from [`Shader::module_create_info`], entered through `main`
    pub fn stage_create_info(&self, module: vk::ShaderModule) -> vk::PipelineShaderStageCreateInfo<'static>
    {
        vk::PipelineShaderStageCreateInfo::default()
            .stage(S::FLAGS)
            .module(module)
            .name(ENTRY_POINT)
    }
}

fn read_file(path: &Path) -> Result<Vec<u32>>
{
    let origin = path.display().to_string();
    let bytes = fs::read(path).to_result(&origin)?;
    parse(&bytes, &origin)
}

fn parse(bytes: &[u8], origin: &str) -> Result<Vec<u32>>
{
    let invalid = |reason: String| GraphicsError::InvalidSpirv { origin: origin.to_string(), reason };

    // Byte swapped modules are turned around by read_spv
    let code = ash::util::read_spv(&mut Cursor::new(bytes)).map_err(|error| invalid(error.to_string()))?;
    if code.first() != Some(&SPIRV_MAGIC) {
        return Err(invalid(String::from("missing SPIR-V magic number")));
    }
    Ok(code)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use ash::vk::Handle;

    fn module_words(extra: &[u32]) -> Vec<u32>
    {
        let mut words = vec![SPIRV_MAGIC, 0x0001_0000, 0, 1, 0];
        words.extend_from_slice(extra);
        words
    }

    fn little_endian(words: &[u32]) -> Vec<u8> { words.iter().flat_map(|word| word.to_le_bytes()).collect() }

    #[test]
    fn loads_from_memory_in_either_byte_order()
    {
        let words = module_words(&[]);
        let shader = FragmentShader::from_bytes(&little_endian(&words)).unwrap();
        assert_eq!(shader.code(), words.as_slice());
        assert!(shader.path().is_none());

        let big_endian: Vec<u8> = words.iter().flat_map(|word| word.to_be_bytes()).collect();
        assert_eq!(FragmentShader::from_bytes(&big_endian).unwrap().code(), words.as_slice());
    }

    #[test]
    fn malformed_code_is_rejected()
    {
        let truncated = FragmentShader::from_bytes(&[0x03, 0x02, 0x23]);
        assert!(matches!(truncated, Err(GraphicsError::InvalidSpirv { .. })));

        let not_spirv = VertexShader::from_bytes(b"#version 450\nvoid main() {}");
        assert!(matches!(not_spirv, Err(GraphicsError::InvalidSpirv { .. })));

        assert!(matches!(VertexShader::from_bytes(&[]), Err(GraphicsError::InvalidSpirv { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error()
    {
        match ComputeShader::from_file("does/not/exist.comp.spv") {
            Err(GraphicsError::Io { path, .. }) => assert!(path.ends_with("exist.comp.spv")),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn reload_picks_up_changes_and_keeps_code_on_failure()
    {
        let path = std::env::temp_dir().join(format!("mtlkit-reload-{}.spv", std::process::id()));
        fs::write(&path, little_endian(&module_words(&[]))).unwrap();

        let mut shader = VertexShader::from_file(&path).unwrap();
        assert_eq!(shader.code().len(), 5);
        assert_eq!(shader.path(), Some(path.as_path()));

        // OpNop appended
        fs::write(&path, little_endian(&module_words(&[0x0001_0000]))).unwrap();
        assert_eq!(shader.reload().unwrap().code().len(), 6);

        fs::write(&path, b"garbage!").unwrap();
        assert!(matches!(shader.reload(), Err(GraphicsError::InvalidSpirv { .. })));
        assert_eq!(shader.code().len(), 6);

        fs::remove_file(&path).unwrap();
        assert!(matches!(shader.reload(), Err(GraphicsError::Io { .. })));
        assert_eq!(shader.code().len(), 6);
    }

    #[test]
    fn shader_from_memory_cannot_reload()
    {
        let mut shader = GeometryShader::from_bytes(&little_endian(&module_words(&[]))).unwrap();
        let error = shader.reload().unwrap_err();
        assert!(matches!(error, GraphicsError::NoShaderFile { stage: "geometry" }));
        assert_eq!(error.to_string(), "No file loaded in this geometry shader for reloading");
    }

    #[test]
    fn create_infos_carry_code_and_stage()
    {
        let shader = TessellationControlShader::from_bytes(&little_endian(&module_words(&[]))).unwrap();
        assert_eq!(shader.stage(), vk::ShaderStageFlags::TESSELLATION_CONTROL);

        let module_info = shader.module_create_info();
        assert_eq!(module_info.code_size, 20);
        assert_eq!(module_info.p_code, shader.code().as_ptr());

        let module = vk::ShaderModule::from_raw(7);
        let stage_info = shader.stage_create_info(module);
        assert_eq!(stage_info.stage, vk::ShaderStageFlags::TESSELLATION_CONTROL);
        assert_eq!(stage_info.module, module);
        assert_eq!(unsafe { CStr::from_ptr(stage_info.p_name) }, c"main");
    }
}
