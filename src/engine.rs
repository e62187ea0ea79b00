//! Loop driver: turns wall-clock frame deltas into simulation ticks.
//!
//! Two independent accumulators advance by the same per-frame delta. The
//! gravity accumulator fires one automatic drop each time it reaches the
//! level's drop interval; the repeat accumulator samples the latched input
//! intents every [`MOVE_REPEAT_MS`]. Rotation bypasses both and fires on the
//! key-down edge.

use arrayvec::ArrayVec;

use crate::core::Game;
use crate::input::InputState;
use crate::types::{LogicalKey, SwipeDirection, MOVE_REPEAT_MS};

/// One-shot commands produced by the repeat tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
}

#[derive(Debug, Clone)]
pub struct Engine {
    game: Game,
    input: InputState,
    running: bool,
    gravity_acc_ms: u32,
    repeat_acc_ms: u32,
}

impl Engine {
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(seed),
            input: InputState::new(),
            running: false,
            gravity_acc_ms: 0,
            repeat_acc_ms: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Direct simulation access for scenario setup in tests and tools.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg(test)]
    pub(crate) fn gravity_elapsed_ms(&self) -> u32 {
        self.gravity_acc_ms
    }

    /// Begin processing `advance` calls.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt processing; `advance` becomes a no-op until `start`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Re-initialize every piece of state for a fresh round and clear any
    /// latched input. Does not change the running flag.
    pub fn new_game(&mut self) {
        self.game.reset();
        self.input.clear();
        self.gravity_acc_ms = 0;
        self.repeat_acc_ms = 0;
    }

    /// Advance the simulation by a frame delta in milliseconds. Negative
    /// deltas clamp to zero. No-op while stopped or after game over.
    pub fn advance(&mut self, delta_ms: i64) {
        if !self.running || self.game.is_game_over() {
            return;
        }
        let delta = u32::try_from(delta_ms.max(0)).unwrap_or(u32::MAX);

        self.input.advance(delta);
        self.gravity_acc_ms = self.gravity_acc_ms.saturating_add(delta);
        self.repeat_acc_ms = self.repeat_acc_ms.saturating_add(delta);

        if self.gravity_acc_ms >= self.game.drop_interval_ms() {
            self.gravity_acc_ms = 0;
            self.game.step_down();
        }

        if self.repeat_acc_ms >= MOVE_REPEAT_MS {
            self.repeat_acc_ms = 0;
            for command in self.held_commands() {
                self.apply(command);
            }
        }
    }

    /// Key-down edge: rotation fires immediately, movement intents latch.
    pub fn on_key_down(&mut self, key: LogicalKey) {
        match key {
            LogicalKey::RotateCw => {
                self.game.rotate(true);
            }
            LogicalKey::RotateCcw => {
                self.game.rotate(false);
            }
            _ => self.input.key_down(key),
        }
    }

    pub fn on_key_up(&mut self, key: LogicalKey) {
        self.input.key_up(key);
    }

    /// Touch equivalents: swipes are one-shot moves, a tap rotates.
    pub fn on_swipe(&mut self, direction: SwipeDirection) {
        let command = match direction {
            SwipeDirection::Left => Command::MoveLeft,
            SwipeDirection::Right => Command::MoveRight,
            SwipeDirection::Down => Command::SoftDrop,
        };
        self.apply(command);
    }

    pub fn on_tap(&mut self) {
        self.game.rotate(true);
    }

    fn held_commands(&self) -> ArrayVec<Command, 3> {
        let mut commands = ArrayVec::new();
        if self.input.left_held() {
            commands.push(Command::MoveLeft);
        }
        if self.input.right_held() {
            commands.push(Command::MoveRight);
        }
        if self.input.soft_drop_held() {
            commands.push(Command::SoftDrop);
        }
        commands
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                self.game.move_horizontal(-1);
            }
            Command::MoveRight => {
                self.game.move_horizontal(1);
            }
            Command::SoftDrop => {
                // An on-demand drop restarts the gravity countdown but never
                // touches the interval itself.
                if self.game.step_down() {
                    self.gravity_acc_ms = 0;
                }
            }
        }
    }
}
