//! Turn control for a single game.
//!
//! ## Flow
//!
//! 1. The presentation layer submits a position with [`TurnController::play_move`].
//! 2. The controller asks the [`RuleEngine`] whether it is legal and applies it.
//! 3. The opponent takes the turn only if it has a legal move; otherwise the
//!    mover plays again (a forced pass, never an explicit action).
//! 4. Legal-move annotations are recomputed for whoever is now to move.
//!
//! Game over is not stored. It is the query "neither color can move".

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Cells};
use crate::bot::{BotStrategy, FirstLegalMove};
use crate::core::{Color, GameConfig, GameMode, MoveError, Piece, Position};
use crate::rules::RuleEngine;

use super::score::{Outcome, Score};
use super::state::GameState;

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Where the disc was placed.
    pub position: Position,
    /// Who placed it.
    pub player: Color,
    /// Opponent discs turned over.
    pub flipped: usize,
    /// Player to move after this one.
    pub next_player: Color,
    /// True if the opponent had no legal move and was skipped.
    pub opponent_passed: bool,
}

/// Owns the board and turn state for one game.
pub struct TurnController {
    board: Board,
    rules: RuleEngine,
    state: GameState,
    config: GameConfig,
    strategy: Box<dyn BotStrategy>,
}

impl std::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("state", &self.state)
            .field("strategy", &self.strategy.name())
            .field("board", &self.board)
            .finish()
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// A standard game between two humans.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// A game from the standard opening with the given configuration.
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_board(Board::new(), config)
    }

    /// A game starting from an arbitrary position.
    ///
    /// If the opening player has no legal move but the other color does,
    /// the turn passes before any move is attempted.
    pub fn with_board(board: Board, config: GameConfig) -> Self {
        let mut controller = Self {
            board,
            rules: RuleEngine::new(),
            state: GameState::new(&config),
            config,
            strategy: Box::new(FirstLegalMove),
        };
        controller.ensure_valid_turn();
        controller.mark_legal_moves();
        controller
    }

    /// Replace the bot's move selection.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl BotStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn BotStrategy>) {
        self.strategy = strategy;
    }

    /// Choose human-vs-human or human-vs-bot.
    ///
    /// With `vs_bot` and no color the bot plays White.
    pub fn set_mode(&mut self, vs_bot: bool, bot_color: Option<Color>) {
        let mode = GameMode::from_choice(vs_bot, bot_color);
        self.state.mode = mode;
        self.config.mode = mode;
        debug!(?mode, "game mode set");
    }

    /// Throw away the current game and start again from the opening,
    /// keeping the mode and bot strategy.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.state = GameState::new(&self.config);
        self.ensure_valid_turn();
        self.mark_legal_moves();
        info!(mode = ?self.config.mode, "new game");
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    /// Every cell with its piece and legal-move flag, row-major from the
    /// top-left corner.
    pub fn cells(&self) -> Cells<'_> {
        self.board.cells()
    }

    /// True if `player` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, player: Color) -> bool {
        self.rules.has_legal_move(&self.board, player)
    }

    /// Legal moves for the player to move, row-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Position> {
        self.rules.legal_moves(&self.board, self.state.current_player)
    }

    /// True if neither color can move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White)
    }

    #[must_use]
    pub fn count_pieces(&self, color: Color) -> usize {
        self.board.count(Piece::from(color))
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Final result, `None` while the game is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_game_over().then(|| self.score().leader())
    }

    /// Result line comparing the current counts, e.g. `Black wins (33 - 31)`.
    #[must_use]
    pub fn winner_text(&self) -> String {
        self.score().winner_text()
    }

    // === Commands ===

    /// Play `position` for the current player.
    ///
    /// Returns false, leaving everything untouched, if the move is illegal.
    pub fn play_move(&mut self, position: Position) -> bool {
        self.try_play_move(position).is_ok()
    }

    /// [`play_move`](Self::play_move) from raw coordinates. Off-board
    /// coordinates are simply not legal.
    pub fn play_at(&mut self, row: usize, col: usize) -> bool {
        self.try_play_at(row, col).is_ok()
    }

    pub fn try_play_at(&mut self, row: usize, col: usize) -> Result<TurnReport, MoveError> {
        let position = Position::try_from((row, col))?;
        self.try_play_move(position)
    }

    /// Play `position` for the current player, reporting why a move was
    /// rejected.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player))]
    pub fn try_play_move(&mut self, position: Position) -> Result<TurnReport, MoveError> {
        let player = self.state.current_player;

        if !self.board.cell(position).is_empty() {
            return Err(MoveError::Occupied { position });
        }
        if !self.rules.is_legal(&self.board, position, player) {
            return Err(MoveError::NoCapture { position, player });
        }

        let flipped = self.rules.apply(&mut self.board, position, player);
        self.state.moves_played += 1;
        debug!(%position, flipped, "move applied");

        let opponent_passed = !self.switch_turn();
        self.mark_legal_moves();

        if self.is_game_over() {
            info!(score = %self.score(), "game over");
        }

        Ok(TurnReport {
            position,
            player,
            flipped,
            next_player: self.state.current_player,
            opponent_passed,
        })
    }

    /// Let the bot move if it is the bot's turn.
    ///
    /// Returns the position played, `None` if it is not the bot's turn or
    /// the bot has no move.
    #[instrument(level = "debug", skip(self))]
    pub fn bot_move_if_needed(&mut self) -> Option<Position> {
        if !self.state.is_bot_turn() {
            return None;
        }

        let player = self.state.current_player;
        let choice = self.strategy.choose(&self.board, player)?;
        debug!(strategy = self.strategy.name(), %choice, "bot chose");

        match self.try_play_move(choice) {
            Ok(report) => Some(report.position),
            Err(err) => {
                warn!(strategy = self.strategy.name(), %err, "bot chose an illegal move");
                None
            }
        }
    }

    /// Keep moving for the bot until a human is to move or the game ends.
    ///
    /// Returns the number of bot moves played.
    pub fn play_bot_turns(&mut self) -> usize {
        let mut played = 0;
        while self.bot_move_if_needed().is_some() {
            played += 1;
        }
        played
    }

    // === Turn bookkeeping ===

    /// Hand the turn to the opponent if it can move. Returns whether the
    /// turn changed hands.
    fn switch_turn(&mut self) -> bool {
        let opponent = self.state.current_player.opponent();
        if self.has_legal_move(opponent) {
            self.state.current_player = opponent;
            true
        } else {
            info!(passed = %opponent, "no legal move, turn stays");
            false
        }
    }

    /// If the player to move is stuck but the opponent is not, pass.
    fn ensure_valid_turn(&mut self) {
        let player = self.state.current_player;
        if !self.has_legal_move(player) && self.has_legal_move(player.opponent()) {
            info!(passed = %player, "no legal move at start, turn passes");
            self.state.current_player = player.opponent();
        }
    }

    fn mark_legal_moves(&mut self) {
        let moves = self.legal_moves();
        self.board.clear_legal_moves();
        for position in moves {
            self.board.set_legal_move(position, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::RandomMove;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn marked(controller: &TurnController) -> Vec<Position> {
        controller
            .cells()
            .filter(|c| c.is_legal_move())
            .map(|c| c.position())
            .collect()
    }

    #[test]
    fn test_new_game_black_to_move() {
        let controller = TurnController::new();
        assert_eq!(controller.current_player(), Color::Black);
        assert_eq!(controller.mode(), GameMode::HumanVsHuman);
        assert!(!controller.is_game_over());
        assert_eq!(controller.score(), Score::new(2, 2));
        assert_eq!(controller.outcome(), None);
    }

    #[test]
    fn test_opening_annotations() {
        let controller = TurnController::new();
        assert_eq!(marked(&controller), controller.legal_moves());
        assert_eq!(marked(&controller).len(), 4);
    }

    #[test]
    fn test_play_move_flips_and_passes_turn() {
        let mut controller = TurnController::new();

        let report = controller.try_play_move(pos(4, 5)).unwrap();

        assert_eq!(report.player, Color::Black);
        assert_eq!(report.flipped, 1);
        assert_eq!(report.next_player, Color::White);
        assert!(!report.opponent_passed);
        assert_eq!(controller.board().piece(pos(4, 4)), Piece::Black);
        assert_eq!(controller.count_pieces(Color::Black), 4);
        assert_eq!(controller.count_pieces(Color::White), 1);
        assert_eq!(controller.current_player(), Color::White);
        assert_eq!(controller.state().moves_played, 1);
    }

    #[test]
    fn test_annotations_follow_the_turn() {
        let mut controller = TurnController::new();
        assert!(controller.play_move(pos(2, 3)));

        let expected = RuleEngine::new().legal_moves(controller.board(), Color::White);
        assert_eq!(marked(&controller), expected);
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut controller = TurnController::new();
        let before = controller.board().clone();

        assert_eq!(
            controller.try_play_move(pos(0, 0)),
            Err(MoveError::NoCapture {
                position: pos(0, 0),
                player: Color::Black
            })
        );
        assert_eq!(
            controller.try_play_move(pos(3, 3)),
            Err(MoveError::Occupied { position: pos(3, 3) })
        );
        assert!(!controller.play_move(pos(2, 4)));

        assert_eq!(controller.board(), &before);
        assert_eq!(controller.current_player(), Color::Black);
        assert_eq!(controller.state().moves_played, 0);
    }

    #[test]
    fn test_play_at_rejects_off_board() {
        let mut controller = TurnController::new();
        assert!(!controller.play_at(8, 0));
        assert!(!controller.play_at(0, 100));
        assert!(matches!(
            controller.try_play_at(9, 9),
            Err(MoveError::OutOfBounds(_))
        ));
        assert!(controller.play_at(2, 3));
    }

    #[test]
    fn test_set_mode() {
        let mut controller = TurnController::new();

        controller.set_mode(true, None);
        assert_eq!(controller.mode(), GameMode::HumanVsBot { bot: Color::White });

        controller.set_mode(true, Some(Color::Black));
        assert_eq!(controller.mode(), GameMode::HumanVsBot { bot: Color::Black });

        controller.set_mode(false, Some(Color::Black));
        assert_eq!(controller.mode(), GameMode::HumanVsHuman);
    }

    #[test]
    fn test_bot_waits_for_its_turn() {
        let mut controller = TurnController::new();
        assert_eq!(controller.bot_move_if_needed(), None);

        controller.set_mode(true, Some(Color::White));
        assert_eq!(controller.bot_move_if_needed(), None);
        assert_eq!(controller.current_player(), Color::Black);
    }

    #[test]
    fn test_bot_plays_first_legal_move() {
        let mut controller = TurnController::with_config(GameConfig::new().vs_bot(Color::White));
        assert!(controller.play_move(pos(2, 3)));
        assert_eq!(controller.current_player(), Color::White);

        let expected = controller.legal_moves()[0];
        assert_eq!(controller.bot_move_if_needed(), Some(expected));
        assert_eq!(controller.current_player(), Color::Black);
    }

    #[test]
    fn test_bot_opens_when_black() {
        let mut controller = TurnController::with_config(GameConfig::new().vs_bot(Color::Black));
        assert_eq!(controller.bot_move_if_needed(), Some(pos(2, 3)));
        assert_eq!(controller.current_player(), Color::White);
    }

    #[test]
    fn test_random_strategy_plays_legal_moves() {
        let mut controller = TurnController::with_config(GameConfig::new().vs_bot(Color::Black))
            .with_strategy(RandomMove::new(3));
        let legal = controller.legal_moves();
        let played = controller.bot_move_if_needed().unwrap();
        assert!(legal.contains(&played));
    }

    #[test]
    fn test_new_game_resets_board_keeps_mode() {
        let mut controller = TurnController::new();
        controller.set_mode(true, Some(Color::White));
        controller.play_move(pos(2, 3));

        controller.new_game();
        assert_eq!(controller.board().count(Piece::Empty), 60);
        assert_eq!(controller.current_player(), Color::Black);
        assert_eq!(controller.mode(), GameMode::HumanVsBot { bot: Color::White });
        assert_eq!(controller.state().moves_played, 0);
    }

    #[test]
    fn test_debug_names_strategy() {
        let controller = TurnController::new().with_strategy(RandomMove::new(0));
        assert!(format!("{:?}", controller).contains("random"));
    }
}
