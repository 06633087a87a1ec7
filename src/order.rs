use core::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::{
    crossword::WordId,
    fill::{domain::Domains, PartialAssignment},
    parse::VarId,
    Crossword,
};

/// Ranks unassigned variables: the greatest score is filled next.
#[derive(Eq, PartialEq, Debug)]
pub(crate) struct VariableScore {
    var: VarId,
    remaining: usize,
    degree: usize,
}

impl PartialOrd for VariableScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VariableScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining values wins
        if self.remaining != other.remaining {
            return other.remaining.cmp(&self.remaining);
        }
        // more crossings wins
        if self.degree != other.degree {
            return self.degree.cmp(&other.degree);
        }
        // lower id wins
        other.var.cmp(&self.var)
    }
}

/// Minimum remaining values, then highest degree, then lowest id. `None` once
/// every variable is assigned.
pub(crate) fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &PartialAssignment,
) -> Option<VarId> {
    (0..crossword.variables.len())
        .filter(|var| !assignment.is_assigned(*var))
        .map(|var| VariableScore {
            var,
            remaining: domains.len(var),
            degree: crossword.neighbors(var).len(),
        })
        .max()
        .map(|score| score.var)
}

/// How many candidates a value rules out for unassigned neighbors; ties go to
/// the lower word id.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug)]
pub(crate) struct ValueScore {
    eliminated: usize,
    word: WordId,
}

/// `var`'s remaining words, least constraining first.
pub(crate) fn order_domain_values(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &PartialAssignment,
    var: VarId,
) -> Vec<WordId> {
    // for each unassigned neighbor: its letter position, its domain size, and
    // how many of its words have each letter there
    let crossings: Vec<(usize, usize, FxHashMap<char, usize>)> = crossword
        .neighbors(var)
        .iter()
        .filter(|neighbor| !assignment.is_assigned(**neighbor))
        .filter_map(|&neighbor| {
            let (i, j) = crossword.overlap(var, neighbor)?;
            let mut letter_counts = FxHashMap::default();
            for word in domains.iter(neighbor) {
                *letter_counts
                    .entry(crossword.words[word].letters[j])
                    .or_insert(0) += 1;
            }
            Some((i, domains.len(neighbor), letter_counts))
        })
        .collect();

    let mut scores: Vec<ValueScore> = domains
        .iter(var)
        .map(|word| {
            let letters = &crossword.words[word].letters;
            let eliminated = crossings
                .iter()
                .map(|(i, total, letter_counts)| {
                    total - letter_counts.get(&letters[*i]).copied().unwrap_or(0)
                })
                .sum();
            ValueScore { eliminated, word }
        })
        .collect();

    scores.sort_unstable();
    scores.into_iter().map(|score| score.word).collect()
}
