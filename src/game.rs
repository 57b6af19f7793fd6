#![cfg(feature = "std")]

//! A single game session: turn-by-turn state machine from the first prompt
//! to the play-again decision.

use std::format;

use crate::{
    board::Board,
    common::GameResult,
    config::GameConfig,
    console::{InputSource, OutputSink},
    moves::{is_quit, parse_move, parse_rematch, Rematch},
    player::Player,
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// `winner` completed a line.
    Victory(Player),
    /// The board filled with no line completed.
    Draw,
    /// `quitter` gave up; the opponent wins.
    Forfeit { quitter: Player },
}

impl SessionOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            SessionOutcome::Victory(player) => Some(player),
            SessionOutcome::Forfeit { quitter } => Some(quitter.opponent()),
            SessionOutcome::Draw => None,
        }
    }
}

/// Position of a session in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for `player` to enter a move or quit.
    AwaitingMove(Player),
    /// `player`'s mark was placed and the board shown.
    MoveAccepted(Player),
    /// The board was evaluated after `player`'s move.
    Evaluated { player: Player, result: GameResult },
    /// The game is over; waiting for a play-again answer.
    AwaitingRematchDecision(SessionOutcome),
    /// Nothing left to do in this session.
    Finished(Rematch),
}

pub struct GameSession {
    board: Board,
    state: SessionState,
    turn_count: usize,
    outcome: Option<SessionOutcome>,
}

impl GameSession {
    /// Start a session on a fresh board built from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_board(Board::with_config(config))
    }

    /// Start a session on an existing board. Player one moves first.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            state: SessionState::AwaitingMove(Player::One),
            turn_count: 0,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Moves accepted so far.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Set once the game is over.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Player whose turn it is, while a move is pending.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            SessionState::AwaitingMove(player) | SessionState::MoveAccepted(player) => Some(player),
            SessionState::Evaluated { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Clear the screen, greet the players and show the empty board.
    pub fn introduce<O: OutputSink>(&self, output: &mut O) -> anyhow::Result<()> {
        output.clear()?;
        output.write_line("Welcome to Tic Tac Toe!\n")?;
        let view = self.board.view(Some("Here's the current board: "));
        output.write_line(&format!("{}", view))
    }

    /// Play the whole session and return the play-again decision.
    pub fn run<C>(&mut self, console: &mut C) -> anyhow::Result<Rematch>
    where
        C: InputSource + OutputSink,
    {
        self.introduce(console)?;
        loop {
            if let SessionState::Finished(decision) = self.step(console)? {
                return Ok(decision);
            }
        }
    }

    /// Advance one transition and return the new state.
    pub fn step<C>(&mut self, console: &mut C) -> anyhow::Result<SessionState>
    where
        C: InputSource + OutputSink,
    {
        let state = self.state;
        self.state = match state {
            SessionState::AwaitingMove(player) => self.await_move(player, console)?,
            SessionState::MoveAccepted(player) => SessionState::Evaluated {
                player,
                result: self.board.evaluate(),
            },
            SessionState::Evaluated { player, result } => self.conclude(player, result, console)?,
            SessionState::AwaitingRematchDecision(_) => self.await_rematch(console)?,
            finished @ SessionState::Finished(_) => finished,
        };
        Ok(self.state)
    }

    /// Prompt `player` until a move lands or they quit. Rejected input keeps
    /// the turn with the same player.
    fn await_move<C>(&mut self, player: Player, console: &mut C) -> anyhow::Result<SessionState>
    where
        C: InputSource + OutputSink,
    {
        loop {
            let symbol = self.board.symbol_for(player.into());
            console.write(&format!(
                "Player {} enter a coord x,y to place your {} or enter 'q' to give up: ",
                player.number(),
                symbol
            ))?;
            let Some(raw) = console.read_line()? else {
                log::info!("input closed while waiting for {}", player);
                return Ok(SessionState::Finished(Rematch::Exit));
            };
            console.write_line("")?;
            let input = raw.to_lowercase();

            if is_quit(&input) {
                let outcome = SessionOutcome::Forfeit { quitter: player };
                console.write_line(&format!(
                    "Player {} has given up. Player {} wins!\n",
                    player.number(),
                    player.opponent().number()
                ))?;
                log::info!("{} forfeited after {} moves", player, self.turn_count);
                self.outcome = Some(outcome);
                return Ok(SessionState::AwaitingRematchDecision(outcome));
            }

            let (x, y) = match parse_move(&input, self.board.scale()) {
                Ok(coords) => coords,
                Err(err) => {
                    log::debug!("rejected move {:?} from {}: {:?}", raw, player, err);
                    console.write_line(&format!("{}\n", err))?;
                    continue;
                }
            };

            if self.board.is_occupied(x, y) {
                log::debug!("{} picked occupied cell ({}, {})", player, x, y);
                console.write_line("Oh no, a piece is already at this place! Try again...\n")?;
                continue;
            }

            self.board.set_occupancy(x, y, player)?;
            self.turn_count += 1;
            log::debug!("{} placed at ({}, {}), turn {}", player, x, y, self.turn_count);
            let view = self.board.view(Some("Move accepted, here's the current board:"));
            console.write_line(&format!("{}", view))?;
            return Ok(SessionState::MoveAccepted(player));
        }
    }

    fn conclude<O: OutputSink>(
        &mut self,
        player: Player,
        result: GameResult,
        output: &mut O,
    ) -> anyhow::Result<SessionState> {
        let outcome = match result {
            GameResult::NoResult => return Ok(SessionState::AwaitingMove(player.opponent())),
            GameResult::Victory => {
                output.write_line("Move accepted, well done you've won the game!\n")?;
                SessionOutcome::Victory(player)
            }
            GameResult::Draw => {
                output.write_line("No vacant cells remain, it's a draw!\n")?;
                SessionOutcome::Draw
            }
        };
        log::info!("game over after {} moves: {:?}", self.turn_count, outcome);
        self.outcome = Some(outcome);
        Ok(SessionState::AwaitingRematchDecision(outcome))
    }

    fn await_rematch<C>(&mut self, console: &mut C) -> anyhow::Result<SessionState>
    where
        C: InputSource + OutputSink,
    {
        loop {
            console.write("Would you like to play again? (enter 'y' for yes or 'n' for no): ")?;
            let Some(answer) = console.read_line()? else {
                return Ok(SessionState::Finished(Rematch::Exit));
            };
            match parse_rematch(&answer) {
                Some(decision) => return Ok(SessionState::Finished(decision)),
                None => {
                    log::debug!("unrecognised rematch answer {:?}", answer);
                    console.write_line("I don't recognise that input. Try again...")?;
                }
            }
        }
    }
}

/// Run sessions back to back until a player declines a rematch.
pub fn play<C>(config: &GameConfig, console: &mut C) -> anyhow::Result<usize>
where
    C: InputSource + OutputSink,
{
    let mut played = 0;
    loop {
        let mut session = GameSession::new(config);
        let decision = session.run(console)?;
        played += 1;
        if decision == Rematch::Exit {
            log::debug!("rematch declined after {} session(s)", played);
            return Ok(played);
        }
    }
}
