//! Input state: latched logical intents decoupled from raw key events.
//!
//! Movement and soft-drop keys latch here and are sampled by the loop
//! driver's repeat tick; rotation never passes through this type because it
//! fires on the key-down edge. Held intents age out after a timeout so
//! terminals that never emit key-release events cannot leave an intent
//! stuck on (key repeats refresh the age).

pub mod map;

pub use map::{is_restart, map_key, should_quit};

use crate::types::{LogicalKey, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct InputState {
    // Age in ms since the intent was last pressed or refreshed.
    left: Option<u32>,
    right: Option<u32>,
    soft_drop: Option<u32>,
    release_timeout_ms: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            left: None,
            right: None,
            soft_drop: None,
            release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Latch a held intent. Rotation keys are not latched; repeated
    /// key-down events (terminal auto-repeat) refresh the age.
    pub fn key_down(&mut self, key: LogicalKey) {
        match key {
            LogicalKey::Left => self.left = Some(0),
            LogicalKey::Right => self.right = Some(0),
            LogicalKey::SoftDrop => self.soft_drop = Some(0),
            LogicalKey::RotateCw | LogicalKey::RotateCcw => {}
        }
    }

    pub fn key_up(&mut self, key: LogicalKey) {
        match key {
            LogicalKey::Left => self.left = None,
            LogicalKey::Right => self.right = None,
            LogicalKey::SoftDrop => self.soft_drop = None,
            LogicalKey::RotateCw | LogicalKey::RotateCcw => {}
        }
    }

    /// Age held intents by the frame delta, auto-releasing any that passed
    /// the release timeout.
    pub fn advance(&mut self, delta_ms: u32) {
        let timeout = self.release_timeout_ms;
        for slot in [&mut self.left, &mut self.right, &mut self.soft_drop] {
            if let Some(age) = slot {
                *age = age.saturating_add(delta_ms);
                if *age > timeout {
                    *slot = None;
                }
            }
        }
    }

    pub fn left_held(&self) -> bool {
        self.left.is_some()
    }

    pub fn right_held(&self) -> bool {
        self.right.is_some()
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop.is_some()
    }

    pub fn clear(&mut self) {
        self.left = None;
        self.right = None;
        self.soft_drop = None;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
