pub mod keymap;

use crate::log;
use derive_more::{Display, Error};
pub use keymap::{scancode_for, Scancode};

/// Number of physical keys tracked, scancodes at or above this are rejected
pub const SCANCODE_COUNT: usize = 512;

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum InputError
{
    #[display("Requested key {scancode} is out of bound")]
    OutOfRange
    {
        scancode: Scancode,
    },
}

impl log::ProjectError for InputError
{
    fn title(&self) -> String { String::from("Input") }
}

/// What the windowing layer reports between two frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent
{
    WindowClose,
    KeyDown(Scancode),
    KeyUp(Scancode),
}

/// Tracks which physical keys are held down
#[derive(Debug, Clone)]
pub struct EventManager
{
    states: [bool; SCANCODE_COUNT],
}

impl Default for EventManager
{
    fn default() -> Self { Self::new() }
}

impl EventManager
{
    pub fn new() -> Self { EventManager { states: [false; SCANCODE_COUNT] } }

    /// Applies every event to the key states
    ///
    /// Returns true if the program should quit, that is the window was closed or escape was pressed.
    /// A batch holding an out of range scancode is rejected whole, no key state changes.
    pub fn catch_events<I>(&mut self, events: I) -> Result<bool>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let events: Vec<InputEvent> = events.into_iter().collect();
        if let Some(scancode) = events.iter().find_map(|event| match *event {
            InputEvent::KeyDown(scancode) | InputEvent::KeyUp(scancode) if scancode.index() >= SCANCODE_COUNT => {
                Some(scancode)
            }
            _ => None,
        }) {
            return Err(InputError::OutOfRange { scancode });
        }

        let mut quit = false;
        for event in events {
            match event {
                InputEvent::WindowClose => quit = true,
                InputEvent::KeyDown(scancode) => {
                    *self.state_mut(scancode)? = true;
                    quit |= scancode == Scancode::ESCAPE;
                }
                InputEvent::KeyUp(scancode) => *self.state_mut(scancode)? = false,
            }
        }

        if quit {
            tracing::debug!("Quit requested");
        }
        Ok(quit)
    }

    /// Whether the key under `character` on a QWERTY keyboard is held, unmapped characters are never pressed
    ///
    /// ```
    /// use mtlkit::input::{EventManager, InputEvent};
    /// use mtlkit::key;
    ///
    /// let mut events = EventManager::new();
    /// events.catch_events([InputEvent::KeyDown(key!(Q))]).unwrap();
    /// assert!(events.key_pressed('q'));
    /// ```
    pub fn key_pressed(&self, character: char) -> bool
    {
        scancode_for(character)
            .and_then(|scancode| self.scancode_pressed(scancode).ok())
            .unwrap_or(false)
    }

    pub fn key_released(&self, character: char) -> bool { !self.key_pressed(character) }

    pub fn scancode_pressed(&self, scancode: Scancode) -> Result<bool>
    {
        self.states
            .get(scancode.index())
            .copied()
            .ok_or(InputError::OutOfRange { scancode })
    }

    fn state_mut(&mut self, scancode: Scancode) -> Result<&mut bool>
    {
        self.states
            .get_mut(scancode.index())
            .ok_or(InputError::OutOfRange { scancode })
    }
}
