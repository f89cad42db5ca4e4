//! 9x9 Sudoku modeled as a finite-domain CSP.
//!
//! One variable per cell; domains are `1..=9` for empty cells and a fixed
//! singleton for givens (which MRV therefore assigns first, without any
//! special-casing). The constraints are "no two peers share a value", where
//! a cell's peers are the other cells of its row, column and 3x3 block.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::{
    csp::backtracking::{Assignment, BacktrackingSolver, CspStats, DomainMap},
    error::{Result, SearchError},
};

/// One cell of the grid; rows and columns are numbered `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// A parsed puzzle instance: the variable list (row-major), the domain of
/// every cell, and the precomputed peer relation used by both the
/// consistency check and the legal-value count that drives MRV.
pub struct SudokuBoard {
    variables: Vec<Cell>,
    domains: DomainMap<Cell, u8>,
    peers: HashMap<Cell, HashSet<Cell>>,
}

impl SudokuBoard {
    /// Parses nine row strings of nine characters; `0` or `.` marks an
    /// empty cell.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        if rows.len() != 9 {
            return Err(SearchError::MalformedInput(format!(
                "puzzle must have 9 rows, got {}",
                rows.len()
            ))
            .into());
        }

        let variables = all_cells();
        let mut domains = DomainMap::new();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.chars().count() != 9 {
                return Err(SearchError::MalformedInput(format!(
                    "row {} must have 9 cells, got {:?}",
                    row_idx + 1,
                    row
                ))
                .into());
            }
            for (col_idx, ch) in row.chars().enumerate() {
                let cell = Cell {
                    row: row_idx as u8 + 1,
                    col: col_idx as u8 + 1,
                };
                let domain = match ch {
                    '0' | '.' => (1..=9).collect(),
                    '1'..='9' => vec![ch.to_digit(10).unwrap_or_default() as u8],
                    other => {
                        return Err(SearchError::MalformedInput(format!(
                            "cell {cell} must be 1-9 or '.'/0 for empty, got {other:?}"
                        ))
                        .into())
                    }
                };
                domains.insert(cell, domain);
            }
        }

        Ok(Self {
            variables,
            domains,
            peers: build_peers(),
        })
    }

    /// Parses a single 81-character row-major string.
    pub fn parse_line(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.chars().count() != 81 {
            return Err(SearchError::MalformedInput(format!(
                "puzzle line must have 81 characters, got {}",
                line.chars().count()
            ))
            .into());
        }
        let chars: Vec<char> = line.chars().collect();
        let rows: Vec<String> = chars.chunks(9).map(|chunk| chunk.iter().collect()).collect();
        let borrowed: Vec<&str> = rows.iter().map(String::as_str).collect();
        Self::parse(&borrowed)
    }

    /// True if assigning `value` to `cell` conflicts with no assigned peer.
    pub fn is_consistent(&self, cell: &Cell, value: &u8, assignment: &Assignment<Cell, u8>) -> bool {
        self.peers[cell]
            .iter()
            .all(|peer| assignment.get(peer) != Some(value))
    }

    /// The values of `cell`'s domain that conflict with no assigned peer.
    pub fn legal_values(&self, cell: &Cell, assignment: &Assignment<Cell, u8>) -> Vec<u8> {
        self.domains[cell]
            .iter()
            .filter(|value| self.is_consistent(cell, value, assignment))
            .copied()
            .collect()
    }

    /// Solves the puzzle with MRV backtracking. `Ok(None)` means the puzzle
    /// has no solution.
    pub fn solve(&self) -> Result<(Option<Assignment<Cell, u8>>, CspStats)> {
        let solver = BacktrackingSolver::mrv();
        solver.solve(
            &self.variables,
            &self.domains,
            &|cell, value, assignment| self.is_consistent(cell, value, assignment),
            &|cell, assignment| self.legal_values(cell, assignment),
        )
    }

    pub fn variables(&self) -> &[Cell] {
        &self.variables
    }

    pub fn domains(&self) -> &DomainMap<Cell, u8> {
        &self.domains
    }

    pub fn peers(&self, cell: &Cell) -> &HashSet<Cell> {
        &self.peers[cell]
    }

    /// Renders a (typically complete) assignment as a grid with band
    /// separators. Unassigned cells print as `.`.
    pub fn render(assignment: &Assignment<Cell, u8>) -> String {
        let mut out = String::new();
        for row in 1..=9u8 {
            if row == 4 || row == 7 {
                out.push_str(&"-".repeat(21));
                out.push('\n');
            }
            let mut fields: Vec<String> = Vec::new();
            for col in 1..=9u8 {
                if col == 4 || col == 7 {
                    fields.push("|".to_string());
                }
                let cell = Cell { row, col };
                fields.push(
                    assignment
                        .get(&cell)
                        .map_or_else(|| ".".to_string(), u8::to_string),
                );
            }
            out.push_str(&fields.join(" "));
            out.push('\n');
        }
        out
    }
}

fn all_cells() -> Vec<Cell> {
    let mut cells = Vec::with_capacity(81);
    for row in 1..=9 {
        for col in 1..=9 {
            cells.push(Cell { row, col });
        }
    }
    cells
}

/// For each cell, the set of other cells that must differ from it: same
/// row, same column, or same 3x3 block.
fn build_peers() -> HashMap<Cell, HashSet<Cell>> {
    let mut peers = HashMap::with_capacity(81);
    for cell in all_cells() {
        let block_row = (cell.row - 1) / 3 * 3 + 1;
        let block_col = (cell.col - 1) / 3 * 3 + 1;
        let mut related = HashSet::new();
        for other in all_cells() {
            if other == cell {
                continue;
            }
            let same_row = other.row == cell.row;
            let same_col = other.col == cell.col;
            let same_block = (other.row - 1) / 3 * 3 + 1 == block_row
                && (other.col - 1) / 3 * 3 + 1 == block_col;
            if same_row || same_col || same_block {
                related.insert(other);
            }
        }
        peers.insert(cell, related);
    }
    peers
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Cell, SudokuBoard};

    /// The classic moderately easy fixture with a unique solution.
    pub const PUZZLE: [&str; 9] = [
        "530070000",
        "600195000",
        "098000060",
        "800060003",
        "400803001",
        "700020006",
        "060000280",
        "000419005",
        "000080079",
    ];

    const SOLUTION: [[u8; 9]; 9] = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    #[test]
    fn every_cell_has_twenty_peers() {
        let board = SudokuBoard::parse(&PUZZLE).unwrap();
        for &cell in board.variables() {
            assert_eq!(board.peers(&cell).len(), 20);
            assert!(!board.peers(&cell).contains(&cell));
        }
    }

    #[test]
    fn solves_the_classic_puzzle_to_its_unique_solution() {
        let board = SudokuBoard::parse(&PUZZLE).unwrap();
        let (solution, stats) = board.solve().unwrap();
        let solution = solution.expect("the puzzle is solvable");

        let mut grid = [[0u8; 9]; 9];
        for (cell, value) in &solution {
            grid[cell.row as usize - 1][cell.col as usize - 1] = *value;
        }
        assert_eq!(grid, SOLUTION);
        assert!(stats.assignments_tried >= 81);
    }

    #[test]
    fn solved_assignment_is_sound() {
        let board = SudokuBoard::parse(&PUZZLE).unwrap();
        let (solution, _) = board.solve().unwrap();
        let solution = solution.unwrap();

        for &cell in board.variables() {
            let value = solution[&cell];
            assert!(board.domains()[&cell].contains(&value));
            for peer in board.peers(&cell) {
                assert_ne!(solution[peer], value, "{cell} conflicts with {peer}");
            }
        }
    }

    #[test]
    fn contradictory_givens_are_unsatisfiable_not_an_error() {
        let mut rows = PUZZLE;
        // Two fives in the first row.
        rows[0] = "550070000";
        let board = SudokuBoard::parse(&rows).unwrap();
        let (solution, _) = board.solve().unwrap();
        assert!(solution.is_none());
    }

    #[test]
    fn malformed_shapes_are_rejected_before_solving() {
        assert!(SudokuBoard::parse(&PUZZLE[..8]).is_err());
        let mut rows = PUZZLE;
        rows[3] = "12345678";
        assert!(SudokuBoard::parse(&rows).is_err());
        rows[3] = "12345678x";
        assert!(SudokuBoard::parse(&rows).is_err());
        assert!(SudokuBoard::parse_line("123").is_err());
    }

    #[test]
    fn parse_line_matches_parse_rows() {
        let line: String = PUZZLE.concat();
        let board = SudokuBoard::parse_line(&line).unwrap();
        assert_eq!(
            board.domains()[&Cell { row: 1, col: 1 }],
            vec![5],
            "givens become singleton domains"
        );
        assert_eq!(board.domains()[&Cell { row: 1, col: 3 }].len(), 9);
    }
}
