use rustc_hash::FxHashSet;

use crate::{
    assignment::Assignment,
    crossword::WordId,
    parse::VarId,
    Crossword, Error,
};

pub mod arc;
pub mod backtrack;
pub mod domain;
pub mod simple;

pub trait Filler {
    /// Fills every variable of `crossword`. `Ok(None)` means no fill exists.
    fn fill(&mut self, crossword: &Crossword) -> Result<Option<Assignment>, Error>;
}

/// Knobs for `BacktrackingFiller`.
///
/// ```
/// use xwords_csp::fill::FillConfig;
///
/// let config = FillConfig::default()
///     .with_inference(false)
///     .with_progress_interval(0);
/// assert!(config.arc_consistency);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillConfig {
    /// Run AC-3 over every crossing before searching.
    pub arc_consistency: bool,

    /// Re-establish arc consistency around each assigned variable during
    /// search. Removals are rolled back when the branch fails.
    pub inference: bool,

    /// Log progress every this many search nodes. 0 disables.
    pub progress_interval: u64,
}

impl Default for FillConfig {
    fn default() -> Self {
        FillConfig {
            arc_consistency: true,
            inference: true,
            progress_interval: 10_000,
        }
    }
}

impl FillConfig {
    pub fn with_arc_consistency(mut self, arc_consistency: bool) -> Self {
        self.arc_consistency = arc_consistency;
        self
    }

    pub fn with_inference(mut self, inference: bool) -> Self {
        self.inference = inference;
        self
    }

    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }
}

/// Counters from the most recent fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Partial assignments expanded.
    pub nodes: u64,
    /// Values tried and then undone.
    pub backtracks: u64,
}

/// The assignment search extends and undoes in place, by id.
#[derive(Debug, Clone)]
pub(crate) struct PartialAssignment {
    words: Vec<Option<WordId>>,
    used: FxHashSet<WordId>,
}

impl PartialAssignment {
    pub(crate) fn new(crossword: &Crossword) -> PartialAssignment {
        PartialAssignment {
            words: vec![None; crossword.variables.len()],
            used: FxHashSet::default(),
        }
    }

    pub(crate) fn is_assigned(&self, var: VarId) -> bool {
        self.words[var].is_some()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.words.iter().all(Option::is_some)
    }

    pub(crate) fn assign(&mut self, var: VarId, word: WordId) {
        debug_assert!(self.words[var].is_none(), "variable {} assigned twice", var);
        self.words[var] = Some(word);
        self.used.insert(word);
    }

    pub(crate) fn unassign(&mut self, var: VarId) {
        if let Some(word) = self.words[var].take() {
            self.used.remove(&word);
        }
    }

    /// Whether `var = word` keeps the assignment consistent: the word fits,
    /// is not used elsewhere, and agrees with every assigned crossing.
    pub(crate) fn is_consistent_with(&self, crossword: &Crossword, var: VarId, word: WordId) -> bool {
        let letters = &crossword.words[word].letters;
        if letters.len() != crossword.variables[var].length || self.used.contains(&word) {
            return false;
        }

        crossword.neighbors(var).iter().all(|&neighbor| {
            match (self.words[neighbor], crossword.overlap(var, neighbor)) {
                (Some(other), Some((i, j))) => letters[i] == crossword.words[other].letters[j],
                _ => true,
            }
        })
    }

    pub(crate) fn to_assignment(&self, crossword: &Crossword) -> Assignment {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(var, word)| {
                word.map(|word| (crossword.variables[var], crossword.words[word].text.clone()))
            })
            .collect()
    }
}
