use std::fmt;

use rustc_hash::FxHashMap;

use crate::{crossword::Direction, Error};

/// Index of a variable in `Crossword::variables`.
pub type VarId = usize;

/// A maximal run of fillable cells that takes exactly one word.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Variable {
    pub(crate) start_row: usize,
    pub(crate) start_col: usize,
    pub(crate) direction: Direction,
    pub(crate) length: usize,
}

impl Variable {
    pub fn new(start_row: usize, start_col: usize, direction: Direction, length: usize) -> Variable {
        Variable {
            start_row,
            start_col,
            direction,
            length,
        }
    }

    pub fn start_row(&self) -> usize {
        self.start_row
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// The grid cell holding the `index`-th letter of this variable.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.start_row, self.start_col + index),
            Direction::Down => (self.start_row + index, self.start_col),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |index| self.cell(index))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(
            f,
            "{} ({}, {}) len {}",
            direction, self.start_row, self.start_col, self.length
        )
    }
}

/// Finds every run of at least two fillable cells in `structure` (row-major,
/// `height * width` cells). Across runs come first in row-major order, then
/// down runs in column-major order.
pub(crate) fn parse_variables(structure: &[bool], height: usize, width: usize) -> Vec<Variable> {
    let mut result = vec![];

    for row in 0..height {
        let mut start_col = None;
        let mut length = 0;

        for col in 0..width {
            if structure[row * width + col] {
                // found a cell; is it our first?
                if start_col.is_none() {
                    start_col = Some(col);
                }
                length += 1;
            } else {
                if let Some(start_col) = start_col.take() {
                    push_run(&mut result, row, start_col, Direction::Across, length);
                }
                length = 0;
            }
        }
        // have to process end of row
        if let Some(start_col) = start_col {
            push_run(&mut result, row, start_col, Direction::Across, length);
        }
    }

    for col in 0..width {
        let mut start_row = None;
        let mut length = 0;

        for row in 0..height {
            if structure[row * width + col] {
                if start_row.is_none() {
                    start_row = Some(row);
                }
                length += 1;
            } else {
                if let Some(start_row) = start_row.take() {
                    push_run(&mut result, start_row, col, Direction::Down, length);
                }
                length = 0;
            }
        }
        if let Some(start_row) = start_row {
            push_run(&mut result, start_row, col, Direction::Down, length);
        }
    }

    result
}

fn push_run(
    result: &mut Vec<Variable>,
    start_row: usize,
    start_col: usize,
    direction: Direction,
    length: usize,
) {
    // a lone cell is not an entry in that direction
    if length > 1 {
        result.push(Variable::new(start_row, start_col, direction, length));
    }
}

/// Maps every covered cell to the variable covering it in each direction, along
/// with the letter index of that cell within the variable.
pub(crate) fn build_lookup(
    variables: &[Variable],
) -> Result<FxHashMap<(Direction, usize, usize), (VarId, usize)>, Error> {
    let mut result = FxHashMap::default();

    for (var, variable) in variables.iter().enumerate() {
        for (index, (row, col)) in variable.cells().enumerate() {
            let key = (variable.direction, row, col);
            if let Some((other, _)) = result.insert(key, (var, index)) {
                return Err(Error::ConflictingVariables {
                    first: variables[other],
                    second: *variable,
                });
            }
        }
    }

    Ok(result)
}

/// Overlap map for every ordered pair of crossing variables. Only pairs that
/// share a cell get an entry; both orders are present.
pub(crate) fn build_overlaps(
    lookup: &FxHashMap<(Direction, usize, usize), (VarId, usize)>,
) -> FxHashMap<(VarId, VarId), (usize, usize)> {
    let mut result = FxHashMap::default();

    for (&(direction, row, col), &(across, i)) in lookup {
        if direction != Direction::Across {
            continue;
        }
        if let Some(&(down, j)) = lookup.get(&(Direction::Down, row, col)) {
            result.insert((across, down), (i, j));
            result.insert((down, across), (j, i));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::{build_lookup, build_overlaps, parse_variables, Variable};
    use crate::{Direction, Error};

    fn structure(rows: &[&str]) -> (Vec<bool>, usize, usize) {
        let cells = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c != '*'))
            .collect();
        (cells, rows.len(), rows[0].len())
    }

    #[test]
    fn parse_variables_works() {
        let (cells, height, width) = structure(&["   ", "   ", "   "]);
        let result = parse_variables(&cells, height, width);

        assert_eq!(result.len(), 6);
        assert_eq!(result[0], Variable::new(0, 0, Direction::Across, 3));
        assert_eq!(result[1], Variable::new(1, 0, Direction::Across, 3));
        assert_eq!(result[2], Variable::new(2, 0, Direction::Across, 3));
        assert_eq!(result[3], Variable::new(0, 0, Direction::Down, 3));
        assert_eq!(result[5], Variable::new(0, 2, Direction::Down, 3));
    }

    #[test]
    fn parse_variables_skips_single_cells() {
        let (cells, height, width) = structure(&["*  ", "  *", " **"]);
        let result = parse_variables(&cells, height, width);

        assert_eq!(
            result,
            vec![
                Variable::new(0, 1, Direction::Across, 2),
                Variable::new(1, 0, Direction::Across, 2),
                Variable::new(1, 0, Direction::Down, 2),
                Variable::new(0, 1, Direction::Down, 2),
            ]
        );
    }

    #[test]
    fn parse_variables_splits_on_blocks() {
        let (cells, height, width) = structure(&["  *   "]);
        let result = parse_variables(&cells, height, width);

        assert_eq!(
            result,
            vec![
                Variable::new(0, 0, Direction::Across, 2),
                Variable::new(0, 3, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn overlaps_are_symmetric() {
        let (cells, height, width) = structure(&["   ", " **", " **"]);
        let variables = parse_variables(&cells, height, width);
        assert_eq!(
            variables,
            vec![
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(0, 0, Direction::Down, 3),
            ]
        );

        let lookup = build_lookup(&variables).unwrap();
        let overlaps = build_overlaps(&lookup);

        assert_eq!(overlaps.len(), 2);
        assert_eq!(overlaps.get(&(0, 1)), Some(&(0, 0)));
        assert_eq!(overlaps.get(&(1, 0)), Some(&(0, 0)));
    }

    #[test]
    fn overlap_indices_follow_cell_position() {
        let variables = vec![
            Variable::new(1, 0, Direction::Across, 4),
            Variable::new(0, 2, Direction::Down, 3),
        ];
        let lookup = build_lookup(&variables).unwrap();
        let overlaps = build_overlaps(&lookup);

        assert_eq!(overlaps.get(&(0, 1)), Some(&(2, 1)));
        assert_eq!(overlaps.get(&(1, 0)), Some(&(1, 2)));
    }

    #[test]
    fn same_direction_sharing_is_rejected() {
        let variables = vec![
            Variable::new(0, 0, Direction::Across, 3),
            Variable::new(0, 2, Direction::Across, 2),
        ];

        assert_eq!(
            build_lookup(&variables).unwrap_err(),
            Error::ConflictingVariables {
                first: variables[0],
                second: variables[1],
            }
        );
    }

    #[test]
    fn cells_follow_direction() {
        let down = Variable::new(1, 2, Direction::Down, 3);
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(down.to_string(), "down (1, 2) len 3");
    }
}
