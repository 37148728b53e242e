//! The guess grid
//!
//! Rows of five cells, written left to right through a single write cursor.
//! Only the current row can change; once a row has been revealed and the
//! cursor has moved on, it stays as it is.

use crate::core::{Evaluation, WORD_LENGTH};

/// Row/column of a cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Typed into the current row, not yet evaluated
    Active,
    Revealed(Evaluation),
}

/// A single tile
///
/// A cell is `Active` or `Revealed` only while it holds a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<u8>,
    state: CellState,
}

impl Cell {
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    #[must_use]
    pub fn letter_char(&self) -> Option<char> {
        self.letter.map(char::from)
    }

    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }
}

pub type Row = [Cell; WORD_LENGTH];

#[derive(Debug, Clone)]
pub struct Board {
    rows: Vec<Row>,
    current_row: usize,
}

impl Board {
    /// Empty board with `rows` rows (at least one)
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![[Cell::default(); WORD_LENGTH]; rows.max(1)],
            current_row: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the writable row, `None` once every row has been used
    #[must_use]
    pub fn current_row(&self) -> Option<usize> {
        (self.current_row < self.rows.len()).then_some(self.current_row)
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.rows.get(position.row)?.get(position.col)
    }

    /// Write a letter into the next empty cell of the current row
    ///
    /// Returns the written position, or `None` if the row is already full.
    pub fn press_letter(&mut self, letter: u8) -> Option<Position> {
        let row_index = self.current_row()?;
        let row = &mut self.rows[row_index];
        let col = row.iter().position(|cell| cell.letter.is_none())?;

        row[col] = Cell {
            letter: Some(letter.to_ascii_lowercase()),
            state: CellState::Active,
        };
        Some(Position::new(row_index, col))
    }

    /// Clear the most recently typed cell of the current row
    ///
    /// Returns the cleared position, or `None` if nothing was typed.
    pub fn delete_letter(&mut self) -> Option<Position> {
        let position = *self.active_tiles().last()?;
        self.rows[position.row][position.col] = Cell::default();
        Some(position)
    }

    /// Positions of the typed, unevaluated cells of the current row, in order
    #[must_use]
    pub fn active_tiles(&self) -> Vec<Position> {
        let Some(row_index) = self.current_row() else {
            return Vec::new();
        };

        self.rows[row_index]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.state == CellState::Active)
            .map(|(col, _)| Position::new(row_index, col))
            .collect()
    }

    /// Letters of the active tiles, in order
    #[must_use]
    pub fn active_letters(&self) -> Vec<u8> {
        self.active_tiles()
            .into_iter()
            .filter_map(|position| self.cell(position).and_then(Cell::letter))
            .collect()
    }

    /// Record the evaluation of a typed cell in the current row
    ///
    /// Returns `false` (and changes nothing) for cells outside the current
    /// row or without a letter.
    pub(crate) fn reveal_cell(&mut self, position: Position, evaluation: Evaluation) -> bool {
        if self.current_row() != Some(position.row) {
            return false;
        }
        match self.rows[position.row].get_mut(position.col) {
            Some(cell) if cell.letter.is_some() => {
                cell.state = CellState::Revealed(evaluation);
                true
            }
            _ => false,
        }
    }

    /// Move the write cursor past the current row
    pub(crate) fn advance_row(&mut self) {
        if self.current_row < self.rows.len() {
            self.current_row += 1;
        }
    }

    /// Whether any cell on the board is still without a letter
    #[must_use]
    pub fn has_empty_cells(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|cell| cell.letter.is_none())
    }
}
