//! Fixed size maths vectors for graphics programs, with the pipeline state, input tracking and
//! frame loop that consume them

pub mod graphics;
pub mod input;
pub mod log;
pub mod maths;
