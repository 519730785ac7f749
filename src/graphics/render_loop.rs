use crate::graphics::errors::GraphicsError;
use crate::graphics::Result;
use crate::input::{EventManager, InputEvent};
use ash::vk;
use std::thread;
use std::time::Duration;

/// The window and context the loop draws into
pub trait Platform
{
    /// Events received since the previous call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Shows the frame that was just drawn
    fn present(&mut self) -> Result<()>;

    /// Current drawable size in pixels
    fn window_size(&self) -> vk::Extent2D;
}

/// Handed to the draw callback once per frame
pub struct Frame<'a>
{
    pub index:    u64,
    pub viewport: vk::Viewport,
    pub events:   &'a EventManager,
}

/// The region of the framebuffer that the output is rendered to, covering the whole window
pub fn viewport(extent: vk::Extent2D) -> vk::Viewport
{
    vk::Viewport::default()
        .x(0.0)
        .y(0.0)
        .width(extent.width as f32)
        .height(extent.height as f32)
        .min_depth(0.0)
        .max_depth(1.0)
}

/// Catches events, draws and presents until the events or `draw` ask to stop
///
/// `draw` returns true to stop the loop. The frame a stop is requested on is still drawn and presented.
/// At most `frame_rate` frames are presented per second. Returns the number of frames presented.
pub fn render_loop<P, F>(platform: &mut P, events: &mut EventManager, frame_rate: u32, mut draw: F) -> Result<u64>
where
    P: Platform,
    F: FnMut(&Frame<'_>) -> bool,
{
    if frame_rate == 0 {
        return Err(GraphicsError::InvalidFrameRate);
    }
    let delay = Duration::from_millis(u64::from(1000 / frame_rate));
    tracing::info!("Starting render loop at {} frames per second", frame_rate);

    let mut frames = 0;
    loop {
        let mut stop = events.catch_events(platform.poll_events())?;

        let frame = Frame { index: frames, viewport: viewport(platform.window_size()), events: &*events };
        stop |= draw(&frame);

        platform.present()?;
        frames += 1;
        if stop {
            break;
        }
        thread::sleep(delay);
    }

    tracing::info!("Render loop stopped after {} frames", frames);
    Ok(frames)
}
