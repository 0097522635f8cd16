//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
///
/// Serializes as `""`, `"X"`, or `"O"` to match the wire format
/// existing clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[serde(rename = "")]
    Empty,
    /// Cell occupied by X.
    X,
    /// Cell occupied by O.
    O,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Fixed-size grid addressed by `(row, col)`, each in `0..3`.
/// Serializes transparently as a bare 3x3 array of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Checks if the cell at the given coordinates is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&cell| cell != Cell::Empty)
    }

    /// Places a player's mark at the given coordinates.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = player.into();
    }

    /// Checks for a winner on the board.
    ///
    /// Scans the 8 winning lines; any line fully occupied by one
    /// player's mark wins. Line order has no observable effect.
    pub fn winner(&self) -> Option<Player> {
        for [a, b, c] in LINES {
            let cell = self.cells[a.0][a.1];
            if cell != Cell::Empty && cell == self.cells[b.0][b.1] && cell == self.cells[c.0][c.1] {
                return match cell {
                    Cell::X => Some(Player::X),
                    Cell::O => Some(Player::O),
                    Cell::Empty => None,
                };
            }
        }
        None
    }

    /// Formats the board as a human-readable string for logs.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row_index, row) in self.cells.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => ' ',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                result.push(symbol);
                if col_index < 2 {
                    result.push('|');
                }
            }
            if row_index < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a fresh game state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    ///
    /// Once the game is over this is no longer a turn indicator; it
    /// remains whatever it was when the terminal move was made.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies a move (unchecked - use `Game::make_move` for validation).
    pub(crate) fn apply_move(&mut self, row: usize, col: usize, player: Player) {
        self.board.place(row, col, player);
    }

    /// Flips the current player.
    pub(crate) fn flip_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Returns a by-value snapshot of this state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            current_player: self.current_player,
            winner: match self.status {
                GameStatus::Won(player) => Some(player),
                _ => None,
            },
            game_over: self.status != GameStatus::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of a game state.
///
/// This is the compatibility surface served to clients: `board` as a
/// 3x3 grid of `""`/`"X"`/`"O"`, `current_player`, `winner` (null when
/// nobody has won), and `game_over`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board contents.
    pub board: Board,
    /// Current player to move (last mover once the game is over).
    pub current_player: Player,
    /// The winner, if any.
    pub winner: Option<Player>,
    /// Whether the game has ended (win or draw).
    pub game_over: bool,
}
