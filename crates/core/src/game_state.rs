//! Game state module - owns one play session
//!
//! Ties together the board, the active piece, the input/timing controller and
//! the piece source. [`GameState::update`] is the only entry point the frame
//! loop needs: it takes the keyboard snapshot and the clock, and runs
//! rotation, auto-shift, gravity, locking, line clears and spawning in that
//! order.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::controller::{GravityStep, InputController};
use crate::rng::{PieceSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::Tetromino;
use crate::types::{GameAction, InputFrame, PieceKind, TimingConfig};

/// Something that happened during one [`GameState::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new session began (grid cleared).
    Started,
    Rotated,
    Shifted,
    /// Gravity moved the piece down one row.
    Fell,
    /// The piece was written into the grid; `lines` full rows were removed.
    Locked { lines: u8 },
    Spawned(PieceKind),
    /// The freshly spawned piece did not fit.
    GameOver,
}

/// Events of a single frame, in the order they happened.
pub type FrameEvents = ArrayVec<GameEvent, 8>;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Option<Tetromino>,
    controller: InputController,
    source: R,
    /// Supplied from outside; nothing in the engine advances it.
    level: u32,
    lines: u32,
    /// Pieces spawned in the current session.
    pieces: u32,
    started: bool,
    game_over: bool,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed), TimingConfig::default())
    }
}

impl<R: PieceSource> GameState<R> {
    /// Create a session that draws pieces from `source`.
    pub fn with_source(source: R, timing: TimingConfig) -> Self {
        Self {
            board: Board::new(),
            active: None,
            controller: InputController::new(timing),
            source,
            level: 0,
            lines: 0,
            pieces: 0,
            started: false,
            game_over: false,
        }
    }

    /// Begin a new session: clear the grid and timing history, then spawn.
    ///
    /// Returns false if the very first piece does not fit.
    pub fn start(&mut self, now: f64) -> bool {
        self.board.clear();
        self.controller.reset();
        self.active = None;
        self.lines = 0;
        self.pieces = 0;
        self.game_over = false;
        self.started = true;
        self.spawn_piece(now)
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Select the gravity table row. Persists across restarts.
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    /// Rows cleared in this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Direct access to the falling piece, for scripted setups.
    pub fn active_mut(&mut self) -> Option<&mut Tetromino> {
        self.active.as_mut()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access to the grid, for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    /// Advance one frame.
    ///
    /// While no session is running only the start action is looked at.
    pub fn update(&mut self, input: &InputFrame, now: f64) -> FrameEvents {
        let mut events = FrameEvents::new();

        if !self.started {
            if input.is_held(GameAction::Start) {
                events.push(GameEvent::Started);
                self.start(now);
                self.push_spawn_result(&mut events);
            }
            return events;
        }

        let Some(mut piece) = self.active else {
            return events;
        };

        if self
            .controller
            .apply_rotation(input, &mut piece, &self.board)
        {
            events.push(GameEvent::Rotated);
        }
        if self
            .controller
            .apply_shift(input, now, &mut piece, &self.board)
        {
            events.push(GameEvent::Shifted);
        }

        let step = self
            .controller
            .apply_gravity(input, now, self.level, &mut piece, &self.board);
        self.active = Some(piece);

        match step {
            GravityStep::Idle => {}
            GravityStep::Fell => events.push(GameEvent::Fell),
            GravityStep::Blocked => {
                let lines = self.lock_piece(now);
                events.push(GameEvent::Locked { lines: lines as u8 });
                self.push_spawn_result(&mut events);
            }
        }

        events
    }

    fn push_spawn_result(&self, events: &mut FrameEvents) {
        match self.active {
            Some(piece) => events.push(GameEvent::Spawned(piece.kind)),
            None if self.game_over => events.push(GameEvent::GameOver),
            None => {}
        }
    }

    /// Spawn a new piece from the source.
    ///
    /// If it does not fit the session ends: no active piece, `game_over` set,
    /// and nothing moves until the next start.
    pub fn spawn_piece(&mut self, now: f64) -> bool {
        let piece = Tetromino::spawn(self.source.next_piece(), now);
        if !piece.is_valid(&self.board) {
            self.top_out();
            return false;
        }

        self.active = Some(piece);
        self.pieces = self.pieces.wrapping_add(1);
        true
    }

    fn top_out(&mut self) {
        self.active = None;
        self.game_over = true;
        self.started = false;
    }

    /// Write the active piece into the grid, clear full rows and spawn the
    /// next piece. Returns the number of rows cleared.
    ///
    /// A piece that comes to rest with any cell above row 0 ends the session
    /// instead of spawning.
    pub fn lock_piece(&mut self, now: f64) -> usize {
        let Some(piece) = self.active.take() else {
            return 0;
        };

        let fits = self.board.lock_cells(&piece.cells(), piece.color());
        let cleared = self.board.clear_full_rows();
        self.lines += cleared as u32;

        if fits {
            self.spawn_piece(now);
        } else {
            self.top_out();
        }
        cleared
    }

    /// Row the active piece would come to rest on (for a drop shadow).
    pub fn ghost_y(&self) -> Option<i8> {
        let mut ghost = self.active?;
        loop {
            let below = ghost.shifted(0, 1);
            if !below.is_valid(&self.board) {
                return Some(ghost.y);
            }
            ghost = below;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.started = self.started;
        out.game_over = self.game_over;
        out.level = self.level;
        out.lines = self.lines;
        out.pieces = self.pieces;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Rotation, BOARD_WIDTH};

    fn only(kind: PieceKind) -> GameState<impl FnMut() -> PieceKind> {
        GameState::with_source(move || kind, TimingConfig::default())
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert_eq!(state.level, 0);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::new(12345);
        assert!(state.start(0.0));
        assert!(state.started);
        assert!(state.active.is_some());
        assert_eq!(state.pieces, 1);
    }

    #[test]
    fn test_update_ignores_input_before_start() {
        let mut state = GameState::new(1);
        let left = InputFrame::new().with(GameAction::MoveLeft);
        assert!(state.update(&left, 5.0).is_empty());
        assert!(state.active.is_none());
    }

    #[test]
    fn test_start_action_begins_session() {
        let mut state = only(PieceKind::T);
        let events = state.update(&InputFrame::new().with(GameAction::Start), 2.0);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::Started, GameEvent::Spawned(PieceKind::T)]
        );
        assert_eq!(state.active.unwrap().last_move_time, 2.0);
    }

    #[test]
    fn test_lock_writes_exactly_four_cells() {
        let mut state = only(PieceKind::T);
        state.start(0.0);
        let piece = Tetromino {
            kind: PieceKind::T,
            rotation: Rotation::North,
            x: 2,
            y: 18,
            last_move_time: 0.0,
        };
        state.active = Some(piece);

        assert_eq!(state.lock_piece(1.0), 0);
        let color = PieceKind::T.color().packed();
        for (x, y) in piece.cells() {
            assert_eq!(state.board.get(x, y), Some(color));
        }
        assert_eq!(state.board.occupied_count(), 4);
    }

    #[test]
    fn test_lock_clears_completed_row() {
        let mut state = only(PieceKind::I);
        state.start(0.0);
        let filler = Color::rgb(1, 1, 1).packed();
        for x in 4..BOARD_WIDTH as i8 {
            state.board.set(x, 19, filler);
        }
        // Flat I covering columns 0..=3 of the bottom row.
        state.active = Some(Tetromino {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 0,
            y: 18,
            last_move_time: 0.0,
        });

        assert_eq!(state.lock_piece(1.0), 1);
        assert_eq!(state.lines, 1);
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_gravity_lock_and_spawn_in_one_frame() {
        let mut state = only(PieceKind::O);
        state.start(0.0);
        state.active.as_mut().unwrap().y = 18;

        let events = state.update(&InputFrame::new(), 1.0);
        assert_eq!(
            events.as_slice(),
            &[
                GameEvent::Locked { lines: 0 },
                GameEvent::Spawned(PieceKind::O)
            ]
        );
        assert_eq!(state.board.occupied_count(), 4);
        assert_eq!(state.active.unwrap().y, 0);
        assert_eq!(state.active.unwrap().last_move_time, 1.0);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut state = only(PieceKind::T);
        state.start(0.0);
        state.board.fill_row(1, Color::rgb(5, 5, 5));
        state.board.set(9, 1, 0);

        // The T sitting on the filled row cannot fall; its replacement collides.
        let events = state.update(&InputFrame::new(), 1.0);
        assert!(events.contains(&GameEvent::GameOver));
        assert!(state.game_over);
        assert!(!state.started);
        assert!(state.active.is_none());

        // Frozen until start.
        let before = state.board.clone();
        let soft = InputFrame::new().with(GameAction::SoftDrop);
        assert!(state.update(&soft, 5.0).is_empty());
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_lock_above_top_row_ends_session_without_spawning() {
        let mut state = only(PieceKind::I);
        state.start(0.0);
        state.active = Some(Tetromino {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: 1,
            y: -2,
            last_move_time: 0.0,
        });

        assert_eq!(state.lock_piece(1.0), 0);
        assert!(state.game_over);
        assert!(!state.started);
        assert!(state.active.is_none());
        assert_eq!(state.pieces, 1);
        assert_eq!(state.board.occupied_count(), 2);
    }

    #[test]
    fn test_restart_clears_grid() {
        let mut state = only(PieceKind::T);
        state.start(0.0);
        state.board.fill_row(1, Color::rgb(5, 5, 5));
        state.board.set(9, 1, 0);
        state.update(&InputFrame::new(), 1.0);
        assert!(state.game_over);

        state.update(&InputFrame::new().with(GameAction::Start), 2.0);
        assert!(state.started);
        assert!(!state.game_over);
        assert_eq!(state.board.occupied_count(), 0);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_level_survives_restart() {
        let mut state = only(PieceKind::S);
        state.set_level(3);
        state.start(0.0);
        state.start(1.0);
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_ghost_y_rests_on_floor() {
        let mut state = only(PieceKind::O);
        state.start(0.0);
        assert_eq!(state.ghost_y(), Some(18));
        state.board.set(4, 10, 1);
        assert_eq!(state.ghost_y(), Some(8));
    }

    #[test]
    fn test_snapshot_reports_active_cells() {
        let mut state = only(PieceKind::L);
        state.start(0.0);
        let snap = state.snapshot();
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::L);
        assert_eq!(active.cells, state.active.unwrap().cells());
        assert_eq!(active.color, PieceKind::L.color());
        assert!(snap.started);
        assert!(!snap.game_over);
    }
}
