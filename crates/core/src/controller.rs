//! Input/timing controller: rotation debounce, DAS and gravity.
//!
//! The controller owns every piece of timing state that survives between
//! frames. It never touches the board; it only moves the active piece when
//! the validity check allows it and tells the caller when gravity was blocked.

use crate::board::Board;
use crate::tetromino::Tetromino;
use crate::types::{GameAction, InputFrame, TimingConfig};

/// Result of the gravity phase for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityStep {
    /// Delay has not elapsed yet.
    Idle,
    /// Piece moved down one row.
    Fell,
    /// Delay elapsed but the row below is blocked; the piece must lock.
    Blocked,
}

#[derive(Debug, Clone)]
pub struct InputController {
    timing: TimingConfig,
    /// Set by a rotation press, cleared once both rotation keys are up.
    rotate_latched: bool,
    /// Direction remembered from the previous frame (-1, 0, +1).
    shift_direction: i8,
    /// Clock time of the next auto-shift step.
    next_shift_time: f64,
}

impl InputController {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            rotate_latched: false,
            shift_direction: 0,
            next_shift_time: 0.0,
        }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn rotate_latched(&self) -> bool {
        self.rotate_latched
    }

    pub fn shift_direction(&self) -> i8 {
        self.shift_direction
    }

    pub fn next_shift_time(&self) -> f64 {
        self.next_shift_time
    }

    /// Forget held-key history (used on restart).
    pub fn reset(&mut self) {
        self.rotate_latched = false;
        self.shift_direction = 0;
        self.next_shift_time = 0.0;
    }

    /// Rotate once per press. Clockwise wins when both keys go down together.
    ///
    /// The latch is set even when the rotation is rejected, so holding the key
    /// against a wall does not retry every frame.
    pub fn apply_rotation(
        &mut self,
        input: &InputFrame,
        piece: &mut Tetromino,
        board: &Board,
    ) -> bool {
        if !input.any_rotation_held() {
            self.rotate_latched = false;
            return false;
        }
        if self.rotate_latched {
            return false;
        }
        self.rotate_latched = true;

        let clockwise = input.is_held(GameAction::RotateCw);
        let candidate = piece.rotated(clockwise);
        if candidate.is_valid(board) {
            *piece = candidate;
            true
        } else {
            false
        }
    }

    /// Delayed auto shift.
    ///
    /// A new direction moves at once and arms the initial delay. Holding the
    /// same direction then moves every time the timer expires, re-armed with
    /// the shorter repeat delay.
    pub fn apply_shift(
        &mut self,
        input: &InputFrame,
        now: f64,
        piece: &mut Tetromino,
        board: &Board,
    ) -> bool {
        let direction = input.horizontal_direction();
        if direction == 0 {
            self.shift_direction = 0;
            return false;
        }

        if direction != self.shift_direction {
            self.shift_direction = direction;
            self.next_shift_time = now + self.timing.initial_shift_delay;
        } else if now >= self.next_shift_time {
            self.next_shift_time = now + self.timing.shift_repeat_delay;
        } else {
            return false;
        }

        let candidate = piece.shifted(direction, 0);
        if candidate.is_valid(board) {
            *piece = candidate;
            true
        } else {
            false
        }
    }

    /// Seconds per row for this frame.
    pub fn gravity_delay(&self, input: &InputFrame, level: u32) -> f64 {
        if input.is_held(GameAction::SoftDrop) {
            self.timing.soft_drop_delay
        } else {
            self.timing.gravity_delay(level)
        }
    }

    /// Move the piece down one row once its gravity delay has elapsed.
    ///
    /// On `Blocked` the piece is left exactly where it was.
    pub fn apply_gravity(
        &self,
        input: &InputFrame,
        now: f64,
        level: u32,
        piece: &mut Tetromino,
        board: &Board,
    ) -> GravityStep {
        if now - piece.last_move_time <= self.gravity_delay(input, level) {
            return GravityStep::Idle;
        }

        let candidate = piece.shifted(0, 1);
        if !candidate.is_valid(board) {
            return GravityStep::Blocked;
        }
        *piece = Tetromino {
            last_move_time: now,
            ..candidate
        };
        GravityStep::Fell
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(TimingConfig::default())
    }
}
