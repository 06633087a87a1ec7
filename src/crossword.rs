use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    assignment::Assignment,
    parse::{build_lookup, build_overlaps, parse_variables, VarId, Variable},
    Error,
};

/// Index of a word in `Crossword::words`. Ids follow lexicographic order.
pub type WordId = usize;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

#[derive(Debug, Clone)]
pub(crate) struct Word {
    pub(crate) text: String,
    pub(crate) letters: Vec<char>,
}

impl Word {
    pub(crate) fn len(&self) -> usize {
        self.letters.len()
    }
}

/// Immutable puzzle structure: the grid, its variables, how they cross, and
/// the candidate words.
#[derive(Debug, Clone)]
pub struct Crossword {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) structure: Vec<bool>,
    pub(crate) variables: Vec<Variable>,
    pub(crate) variable_ids: FxHashMap<Variable, VarId>,
    pub(crate) overlaps: FxHashMap<(VarId, VarId), (usize, usize)>,
    pub(crate) neighbors: Vec<Vec<VarId>>,
    pub(crate) words: Vec<Word>,
    pub(crate) word_ids: FxHashMap<String, WordId>,
}

impl Crossword {
    /// Builds a crossword from a grid of fillable (`true`) and blocked cells.
    /// Every run of two or more fillable cells becomes a variable.
    pub fn new<I, S>(structure: Vec<Vec<bool>>, words: I) -> Result<Crossword, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (height, width, structure) = flatten(structure)?;
        let variables = parse_variables(&structure, height, width);
        Crossword::build(height, width, structure, variables, words)
    }

    /// Builds a crossword from an explicit variable list. Every variable must
    /// lie on fillable cells inside the grid.
    pub fn with_variables<I, S>(
        height: usize,
        width: usize,
        structure: Vec<Vec<bool>>,
        variables: Vec<Variable>,
        words: I,
    ) -> Result<Crossword, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (found_height, found_width, structure) = flatten(structure)?;
        if found_height != height || found_width != width {
            return Err(Error::InvalidDimensions { height, width });
        }

        let mut seen = FxHashSet::default();
        for variable in &variables {
            if variable.length == 0 {
                return Err(Error::ZeroLength {
                    variable: *variable,
                });
            }
            if !seen.insert(*variable) {
                return Err(Error::DuplicateVariable {
                    variable: *variable,
                });
            }
            for (row, col) in variable.cells() {
                if row >= height || col >= width {
                    return Err(Error::OutOfBounds {
                        variable: *variable,
                    });
                }
                if !structure[row * width + col] {
                    return Err(Error::BlockedCell {
                        variable: *variable,
                        row,
                        col,
                    });
                }
            }
        }

        Crossword::build(height, width, structure, variables, words)
    }

    fn build<I, S>(
        height: usize,
        width: usize,
        structure: Vec<bool>,
        variables: Vec<Variable>,
        words: I,
    ) -> Result<Crossword, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lookup = build_lookup(&variables)?;
        let overlaps = build_overlaps(&lookup);

        let mut neighbors = vec![vec![]; variables.len()];
        for &(x, y) in overlaps.keys() {
            neighbors[x].push(y);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        let variable_ids = variables
            .iter()
            .enumerate()
            .map(|(var, variable)| (*variable, var))
            .collect();

        let mut normalized = BTreeSet::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                return Err(Error::EmptyWord);
            }
            normalized.insert(word.to_uppercase());
        }

        let words: Vec<Word> = normalized
            .into_iter()
            .map(|text| Word {
                letters: text.chars().collect(),
                text,
            })
            .collect();
        let word_ids = words
            .iter()
            .enumerate()
            .map(|(id, word)| (word.text.clone(), id))
            .collect();

        log::debug!(
            "Built {}x{} crossword with {} variables, {} crossings and {} words",
            height,
            width,
            variables.len(),
            overlaps.len() / 2,
            words.len()
        );

        Ok(Crossword {
            height,
            width,
            structure,
            variables,
            variable_ids,
            overlaps,
            neighbors,
            words,
            word_ids,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `false` for blocked cells and for cells outside the grid.
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.structure[row * self.width + col]
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Panics if `var` is not a valid id.
    pub fn variable(&self, var: VarId) -> &Variable {
        &self.variables[var]
    }

    pub fn variable_id(&self, variable: &Variable) -> Option<VarId> {
        self.variable_ids.get(variable).copied()
    }

    /// Letter positions `(i, j)` at which `x`'s word and `y`'s word must agree.
    pub fn overlap(&self, x: VarId, y: VarId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    pub fn overlap_between(
        &self,
        x: &Variable,
        y: &Variable,
    ) -> Result<Option<(usize, usize)>, Error> {
        let x = self.require(x)?;
        let y = self.require(y)?;
        Ok(self.overlap(x, y))
    }

    /// Variables crossing `var`, in id order.
    pub fn neighbors(&self, var: VarId) -> &[VarId] {
        &self.neighbors[var]
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|word| word.text.as_str())
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id].text
    }

    /// Looks a word up after the same normalization applied to the word list.
    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.word_ids.get(&word.trim().to_uppercase()).copied()
    }

    pub(crate) fn require(&self, variable: &Variable) -> Result<VarId, Error> {
        self.variable_id(variable)
            .ok_or(Error::UnknownVariable {
                variable: *variable,
            })
    }

    /// Letters placed by `assignment`, row by row. Blocked cells and cells no
    /// assigned variable covers are `None`.
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.width]; self.height];

        for (variable, word) in assignment.iter() {
            for ((row, col), c) in variable.cells().zip(word.chars()) {
                if self.is_fillable(row, col) {
                    letters[row][col] = Some(c);
                }
            }
        }

        letters
    }
}

fn flatten(structure: Vec<Vec<bool>>) -> Result<(usize, usize, Vec<bool>), Error> {
    let height = structure.len();
    let width = structure.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(Error::InvalidDimensions { height, width });
    }

    let mut cells = Vec::with_capacity(height * width);
    for (row, line) in structure.into_iter().enumerate() {
        if line.len() != width {
            return Err(Error::RaggedRow {
                row,
                expected: width,
                found: line.len(),
            });
        }
        cells.extend(line);
    }

    Ok((height, width, cells))
}
