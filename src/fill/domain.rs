//! Candidate word sets for each variable, with an undo trail so search can
//! roll back whatever propagation removed inside a failed branch.

use rustc_hash::FxHashSet;

use crate::{crossword::WordId, parse::VarId, Crossword};

/// Position on the removal trail, returned by `Domains::checkpoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

#[derive(Debug, Clone)]
pub struct Domains {
    sets: Vec<FxHashSet<WordId>>,
    trail: Vec<(VarId, WordId)>,
}

impl Domains {
    /// Every word is a candidate for every variable.
    pub fn full(crossword: &Crossword) -> Domains {
        let all: FxHashSet<WordId> = (0..crossword.words.len()).collect();
        Domains {
            sets: vec![all; crossword.variables.len()],
            trail: vec![],
        }
    }

    pub fn len(&self, var: VarId) -> usize {
        self.sets[var].len()
    }

    pub fn is_empty(&self, var: VarId) -> bool {
        self.sets[var].is_empty()
    }

    pub fn contains(&self, var: VarId, word: WordId) -> bool {
        self.sets[var].contains(&word)
    }

    /// Candidates for `var` in arbitrary order.
    pub fn iter(&self, var: VarId) -> impl Iterator<Item = WordId> + '_ {
        self.sets[var].iter().copied()
    }

    /// Candidates for `var` in id order.
    pub fn sorted(&self, var: VarId) -> Vec<WordId> {
        let mut words: Vec<WordId> = self.iter(var).collect();
        words.sort_unstable();
        words
    }

    pub fn remove(&mut self, var: VarId, word: WordId) -> bool {
        let removed = self.sets[var].remove(&word);
        if removed {
            self.trail.push((var, word));
        }
        removed
    }

    /// Shrinks the domain of `var` to `{word}`.
    pub fn restrict(&mut self, var: VarId, word: WordId) {
        let others: Vec<WordId> = self.iter(var).filter(|other| *other != word).collect();
        for other in others {
            self.remove(var, other);
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Puts back every word removed since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        while self.trail.len() > checkpoint.0 {
            if let Some((var, word)) = self.trail.pop() {
                self.sets[var].insert(word);
            }
        }
    }
}

/// Removes every word whose length differs from its variable's length.
pub fn enforce_node_consistency(crossword: &Crossword, domains: &mut Domains) {
    for (var, variable) in crossword.variables.iter().enumerate() {
        let non_unary: Vec<WordId> = domains
            .iter(var)
            .filter(|word| crossword.words[*word].len() != variable.length)
            .collect();
        for word in non_unary {
            domains.remove(var, word);
        }
    }
}
