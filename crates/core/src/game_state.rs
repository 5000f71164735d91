//! Game state module - the controller
//!
//! Owns the board, the active and next pieces, the score and the session phase.
//! An external scheduler drives it: [`GameState::frame`] (or [`GameState::tick`]
//! without rendering) once per frame with the elapsed milliseconds, and
//! [`GameState::apply_intent`] whenever the player acts. Both take `&mut self`,
//! so input and frame updates always see the same state.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::render::{FrameControl, Renderer};
use crate::rng::PieceGenerator;
use crate::snapshot::GameSnapshot;
use crate::types::{GameEvent, Intent, Phase, BASE_FALL_MS, MAX_SPEED, POINTS_PER_LINE};

/// Events produced by a single tick (at most lock, clear and game over)
pub type TickEvents = ArrayVec<GameEvent, 4>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    generator: PieceGenerator,
    phase: Phase,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    /// Milliseconds since the active piece last fell
    fall_timer_ms: u32,
}

impl GameState {
    /// Create an idle game with default settings and the given seed
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::default().with_seed(seed))
    }

    /// Create an idle game from a validated configuration
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.rows as usize),
            active: None,
            next: None,
            generator: PieceGenerator::new(config.seed),
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            fall_timer_ms: 0,
        }
    }

    /// Start a new session, discarding any previous one
    pub fn start(&mut self) {
        self.board = Board::new(self.config.rows as usize);
        self.active = Some(self.generator.next_piece());
        self.next = Some(self.generator.next_piece());
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.fall_timer_ms = 0;
        self.phase = Phase::Playing;
        info!(
            seed = self.generator.seed(),
            rows = self.config.rows,
            policy = self.config.rotation_policy.as_str(),
            "game started"
        );
    }

    /// Play trigger: starts a session from `Idle` or `GameOver`.
    ///
    /// Returns false and changes nothing while a session is in progress.
    pub fn play(&mut self) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }
        self.start();
        true
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    /// Time between automatic falls: `BASE_FALL_MS / min(speed, MAX_SPEED)`
    pub fn fall_interval_ms(&self) -> u32 {
        BASE_FALL_MS / self.config.speed.clamp(1, MAX_SPEED)
    }

    /// Advance the simulation by `elapsed_ms`.
    ///
    /// A resting piece locks (clearing rows, scoring and promoting the next
    /// piece); otherwise the piece falls one row once the fall interval has
    /// passed. Does nothing outside [`Phase::Playing`].
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvents {
        let mut events = TickEvents::new();
        if self.phase != Phase::Playing {
            return events;
        }
        let Some(active) = self.active else {
            return events;
        };

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);

        if self.board.can_lock(&active) {
            self.lock_active(active, &mut events);
        } else if self.fall_timer_ms >= self.fall_interval_ms() {
            if let Some(piece) = self.active.as_mut() {
                piece.translate(0, 1);
            }
            self.fall_timer_ms = 0;
            trace!("piece fell");
            let _ = events.try_push(GameEvent::Fell);
        }

        events
    }

    /// One scheduled frame: tick, then render.
    ///
    /// After game over the state is rendered once more and [`FrameControl::Stop`]
    /// tells the scheduler there is nothing left to animate.
    pub fn frame<R: Renderer + ?Sized>(&mut self, elapsed_ms: u32, renderer: &mut R) -> FrameControl {
        if self.phase == Phase::GameOver {
            self.render(renderer);
            return FrameControl::Stop;
        }
        self.tick(elapsed_ms);
        self.render(renderer);
        FrameControl::Continue
    }

    /// Paint the current state
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let layout = renderer.layout(self.board.rows(), self.board.cols());
        renderer.render(
            &self.board,
            self.active.as_ref(),
            self.score,
            self.phase == Phase::GameOver,
            &layout,
        );
        if let Some(next) = &self.next {
            renderer.render_next(next);
        }
        if self.phase != Phase::Playing {
            renderer.render_play_button();
        }
    }

    /// Apply a player intent. Rejected intents change nothing and return false.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        match intent {
            Intent::MoveLeft => self.try_shift(-1),
            Intent::MoveRight => self.try_shift(1),
            Intent::Rotate => self.try_rotate(),
            Intent::SoftDrop => self.soft_drop(),
        }
    }

    /// Shift the active piece horizontally if it stays in bounds and off the stack
    fn try_shift(&mut self, dx: i32) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !self.board.is_within_horizontal_bounds(piece, dx) || self.board.collides(piece, dx, 0) {
            return false;
        }
        piece.translate(dx, 0);
        true
    }

    /// Rotate the active piece with the configured policy
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let before = *piece;
        if !piece.rotate_with(self.config.rotation_policy, &self.board) {
            return false;
        }
        // Rotation validates itself; this only guards against a placement it missed.
        if !piece.fits(&self.board) {
            *piece = before;
            return false;
        }
        true
    }

    /// Move the active piece down one row unless it is already resting
    fn soft_drop(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if self.board.can_lock(piece) {
            return false;
        }
        piece.translate(0, 1);
        true
    }

    fn lock_active(&mut self, active: Piece, events: &mut TickEvents) {
        let outcome = self.board.lock(&active);
        let cleared = self.board.clear_full_rows() as u32;
        let points = cleared * POINTS_PER_LINE;

        self.score = self.score.saturating_add(points);
        self.lines += cleared;
        self.pieces_locked += 1;

        let _ = events.try_push(GameEvent::Locked {
            kind: active.kind(),
            above_board: outcome.above_board,
        });
        if cleared > 0 {
            let _ = events.try_push(GameEvent::LinesCleared {
                lines: cleared,
                points,
            });
        }
        debug!(
            kind = active.kind().as_str(),
            lines = cleared,
            score = self.score,
            "piece locked"
        );

        let promoted = self
            .next
            .take()
            .unwrap_or_else(|| self.generator.next_piece());
        self.active = Some(promoted);
        self.next = Some(self.generator.next_piece());

        let blocked_out = !promoted.fits(&self.board);
        if outcome.above_board || blocked_out {
            self.phase = Phase::GameOver;
            let _ = events.try_push(GameEvent::GameOver);
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_locked,
                "game over"
            );
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active;
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.speed = self.config.speed;
        out.fall_timer_ms = self.fall_timer_ms;
        out.rotation_policy = self.config.rotation_policy;
        out.seed = self.generator.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Layout;
    use crate::types::{PieceKind, RotationPolicy};

    /// Renderer that records which steps ran.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl Renderer for Recorder {
        fn layout(&self, rows: usize, cols: usize) -> Layout {
            Layout::centered(40, rows, cols, 2, 1)
        }
        fn clear(&mut self) {
            self.calls.push("clear");
        }
        fn render_board(&mut self, _board: &Board, _layout: &Layout) {
            self.calls.push("board");
        }
        fn render_piece(&mut self, _piece: &Piece, _layout: &Layout) {
            self.calls.push("piece");
        }
        fn render_score(&mut self, _score: u32) {
            self.calls.push("score");
        }
        fn render_game_over(&mut self) {
            self.calls.push("game_over");
        }
        fn draw_border(&mut self, _layout: &Layout) {
            self.calls.push("border");
        }
        fn render_play_button(&mut self) {
            self.calls.push("play");
        }
    }

    fn playing(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state
    }

    #[test]
    fn test_new_game_is_idle() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.active().is_none());
        assert!(state.next().is_none());
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().rows(), 20);
        assert_eq!(state.board().cols(), 10);
    }

    #[test]
    fn test_from_config_validates() {
        assert_eq!(
            GameState::from_config(GameConfig::default().with_speed(0)).unwrap_err(),
            ConfigError::Speed
        );
        let state = GameState::from_config(GameConfig::default().with_rows(12)).unwrap();
        assert_eq!(state.board().rows(), 12);
    }

    #[test]
    fn test_start_spawns_active_and_next() {
        let state = playing(12345);
        assert!(state.is_playing());
        let active = state.active().unwrap();
        assert_eq!(active, &Piece::spawn(active.kind()));
        assert!(state.next().is_some());
    }

    #[test]
    fn test_idle_ignores_ticks_and_intents() {
        let mut state = GameState::new(1);
        assert!(state.tick(5000).is_empty());
        assert!(!state.apply_intent(Intent::MoveRight));
        assert!(!state.apply_intent(Intent::Rotate));
    }

    #[test]
    fn test_fall_interval_caps_at_max_speed() {
        let at = |speed| {
            GameState::from_config(GameConfig::default().with_speed(speed))
                .unwrap()
                .fall_interval_ms()
        };
        assert_eq!(at(1), 1000);
        assert_eq!(at(2), 500);
        assert_eq!(at(5), 200);
        assert_eq!(at(9), 200);
    }

    #[test]
    fn test_piece_falls_after_interval() {
        let mut state = playing(3);
        state.set_active(Piece::spawn(PieceKind::O));
        let start = *state.active().unwrap();

        assert!(state.tick(999).is_empty());
        assert_eq!(state.active().unwrap(), &start);

        let events = state.tick(1);
        assert_eq!(events.as_slice(), &[GameEvent::Fell]);
        assert_eq!(state.active().unwrap(), &start.translated(0, 1));

        // Timer resets after a fall.
        assert!(state.tick(500).is_empty());
    }

    #[test]
    fn test_resting_piece_locks_and_promotes_next() {
        let mut state = playing(9);
        state.set_active(Piece::spawn(PieceKind::O).translated(0, 18));
        let next = *state.next().unwrap();

        let events = state.tick(16);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::Locked {
                kind: PieceKind::O,
                above_board: false
            }]
        );
        assert_eq!(state.active(), Some(&next));
        assert!(state.next().is_some());
        assert_eq!(state.pieces_locked(), 1);
        for (x, y) in [(0, 18), (1, 18), (0, 19), (1, 19)] {
            assert_eq!(state.board().get(x, y), Some(PieceKind::O.cell_value()));
        }
    }

    #[test]
    fn test_lock_frame_does_not_also_fall() {
        let mut state = playing(9);
        state.set_active(Piece::spawn(PieceKind::O).translated(0, 18));
        let events = state.tick(5000);
        assert!(!events.contains(&GameEvent::Fell));
    }

    #[test]
    fn test_single_line_clear_scores_100() {
        let mut state = playing(5);
        for x in 0..9 {
            state.board_mut().set(x, 19, Some(PieceKind::I));
        }
        // Vertical I occupying (9, 16..=19): only (9, 19) lands in the bottom row.
        state.set_active(Piece::from_blocks(
            PieceKind::I,
            [(9, 16), (9, 17), (9, 18), (9, 19)],
        ));

        let events = state.tick(16);
        assert!(events.contains(&GameEvent::LinesCleared {
            lines: 1,
            points: 100
        }));
        assert_eq!(state.score(), 100);
        assert_eq!(state.lines(), 1);
        // The remaining three I blocks shifted down with the stack.
        assert_eq!(state.board().get(9, 19), Some(PieceKind::I.cell_value()));
        assert_eq!(state.board().get(9, 16), Some(0));
        assert_eq!(state.board().filled_count(), 3);
    }

    #[test]
    fn test_four_line_clear_scores_400_in_one_lock() {
        let mut state = playing(5);
        for y in 16..20 {
            for x in 0..9 {
                state.board_mut().set(x, y, Some(PieceKind::T));
            }
        }
        state.set_active(Piece::from_blocks(
            PieceKind::I,
            [(9, 16), (9, 17), (9, 18), (9, 19)],
        ));

        let events = state.tick(16);
        assert!(events.contains(&GameEvent::LinesCleared {
            lines: 4,
            points: 400
        }));
        assert_eq!(state.score(), 400);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_lock_above_board_ends_game() {
        let mut state = playing(5);
        for y in 0..20 {
            state.board_mut().set(4, y, Some(PieceKind::L));
        }
        state.set_active(Piece::from_blocks(
            PieceKind::I,
            [(4, -4), (4, -3), (4, -2), (4, -1)],
        ));

        let events = state.tick(16);
        assert!(events.contains(&GameEvent::Locked {
            kind: PieceKind::I,
            above_board: true
        }));
        assert_eq!(events.last(), Some(&GameEvent::GameOver));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut state = playing(5);
        // Fill the spawn corner so whatever comes next overlaps it.
        for x in 0..4 {
            for y in 0..2 {
                state.board_mut().set(x, y, Some(PieceKind::Z));
            }
        }
        state.set_active(Piece::spawn(PieceKind::O).translated(6, 18));

        let events = state.tick(16);
        assert_eq!(events.last(), Some(&GameEvent::GameOver));
        assert!(state.is_game_over());
        assert!(state.tick(16).is_empty());
        assert!(!state.apply_intent(Intent::MoveLeft));
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = playing(5);
        for x in 0..4 {
            for y in 0..2 {
                state.board_mut().set(x, y, Some(PieceKind::Z));
            }
        }
        state.set_active(Piece::spawn(PieceKind::O).translated(6, 18));
        state.tick(16);
        assert!(state.is_game_over());

        state.start();
        assert!(state.is_playing());
        assert_eq!(state.score(), 0);
        assert_eq!(state.pieces_locked(), 0);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_play_only_starts_when_not_playing() {
        let mut state = GameState::new(5);
        assert!(state.play());
        assert!(state.is_playing());

        state.board_mut().set(9, 19, Some(PieceKind::L));
        let active = *state.active().unwrap();
        assert!(!state.play());
        assert_eq!(state.active(), Some(&active));
        assert_eq!(state.board().filled_count(), 1);
    }

    #[test]
    fn test_horizontal_moves_respect_walls_and_stack() {
        let mut state = playing(1);
        state.set_active(Piece::spawn(PieceKind::O).translated(0, 5));

        assert!(!state.apply_intent(Intent::MoveLeft));
        assert!(state.apply_intent(Intent::MoveRight));
        assert_eq!(state.active().unwrap().pivot(), (1, 5));

        state.board_mut().set(3, 6, Some(PieceKind::S));
        assert!(!state.apply_intent(Intent::MoveRight));
        assert_eq!(state.active().unwrap().pivot(), (1, 5));
    }

    #[test]
    fn test_soft_drop_stops_at_rest() {
        let mut state = playing(1);
        state.set_active(Piece::spawn(PieceKind::O).translated(0, 17));

        assert!(state.apply_intent(Intent::SoftDrop));
        assert_eq!(state.active().unwrap().pivot(), (0, 18));
        assert!(!state.apply_intent(Intent::SoftDrop));
        assert_eq!(state.active().unwrap().pivot(), (0, 18));
    }

    #[test]
    fn test_rotation_follows_configured_policy() {
        let vertical = Piece::from_blocks(PieceKind::I, [(7, 4), (7, 5), (7, 6), (7, 7)]);

        let mut anchored = playing(1);
        anchored.set_active(vertical);
        assert!(!anchored.apply_intent(Intent::Rotate));
        assert_eq!(anchored.active(), Some(&vertical));

        let config = GameConfig::default().with_rotation_policy(RotationPolicy::WallKick);
        let mut kicked = GameState::from_config(config).unwrap();
        kicked.start();
        kicked.set_active(vertical);
        assert!(kicked.apply_intent(Intent::Rotate));
        assert_eq!(kicked.active().unwrap().pivot(), (6, 4));
    }

    #[test]
    fn test_frame_renders_in_order_and_stops_after_game_over() {
        let mut state = GameState::new(1);
        let mut recorder = Recorder::default();

        assert_eq!(state.frame(16, &mut recorder), FrameControl::Continue);
        assert_eq!(
            recorder.calls,
            vec!["clear", "board", "score", "border", "play"]
        );

        state.start();
        recorder.calls.clear();
        assert_eq!(state.frame(16, &mut recorder), FrameControl::Continue);
        assert_eq!(
            recorder.calls,
            vec!["clear", "board", "piece", "score", "border"]
        );

        for x in 0..4 {
            for y in 0..2 {
                state.board_mut().set(x, y, Some(PieceKind::Z));
            }
        }
        state.set_active(Piece::spawn(PieceKind::O).translated(6, 18));
        // The frame that ends the game keeps the loop alive for one more frame.
        assert_eq!(state.frame(16, &mut recorder), FrameControl::Continue);
        recorder.calls.clear();
        assert_eq!(state.frame(16, &mut recorder), FrameControl::Stop);
        assert!(recorder.calls.contains(&"game_over"));
        assert!(recorder.calls.contains(&"play"));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = playing(77);
        state.tick(400);
        let snap = state.snapshot();
        assert!(snap.playable());
        assert_eq!(snap.seed, 77);
        assert_eq!(snap.fall_timer_ms, 400);
        assert_eq!(snap.active, state.active().copied());
        assert_eq!(snap.board, *state.board());
    }
}
