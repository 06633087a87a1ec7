//! AC-3 over crossing variables. A pair `(x, y)` is consistent when every word
//! left for `x` has some word left for `y` with the same letter in the shared
//! cell.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::{crossword::WordId, fill::domain::Domains, parse::VarId, Crossword};

/// Outcome of propagation. A wipeout proves the puzzle (or the current
/// branch) has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Consistent,
    Wipeout { variable: VarId },
}

impl Propagation {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Propagation::Consistent)
    }
}

/// Makes `x` arc consistent with `y`. Returns whether anything was removed
/// from `x`'s domain.
pub fn revise(crossword: &Crossword, domains: &mut Domains, x: VarId, y: VarId) -> bool {
    let (i, j) = match crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    let supported: FxHashSet<char> = domains
        .iter(y)
        .map(|word| crossword.words[word].letters[j])
        .collect();

    let non_binary: Vec<WordId> = domains
        .iter(x)
        .filter(|word| !supported.contains(&crossword.words[*word].letters[i]))
        .collect();

    for word in &non_binary {
        domains.remove(x, *word);
    }

    if !non_binary.is_empty() {
        log::trace!(
            "Revised {} against {}: removed {} words",
            crossword.variables[x],
            crossword.variables[y],
            non_binary.len()
        );
    }

    !non_binary.is_empty()
}

/// Every ordered pair of crossing variables.
pub fn all_arcs(crossword: &Crossword) -> Vec<(VarId, VarId)> {
    (0..crossword.variables.len())
        .flat_map(|x| crossword.neighbors(x).iter().map(move |&y| (x, y)))
        .collect()
}

/// The arcs to re-check after `var`'s domain shrinks: `(z, var)` for every
/// neighbor `z`.
pub fn arcs_into(crossword: &Crossword, var: VarId) -> Vec<(VarId, VarId)> {
    crossword.neighbors(var).iter().map(|&z| (z, var)).collect()
}

/// Propagates until no domain changes or one empties. `arcs` seeds the queue;
/// `None` starts from every crossing pair.
pub fn ac3(
    crossword: &Crossword,
    domains: &mut Domains,
    arcs: Option<Vec<(VarId, VarId)>>,
) -> Propagation {
    let arcs = arcs.unwrap_or_else(|| all_arcs(crossword));

    let mut queued: FxHashSet<(VarId, VarId)> = arcs.iter().copied().collect();
    let mut queue: VecDeque<(VarId, VarId)> = arcs.into_iter().collect();

    while let Some((x, y)) = queue.pop_front() {
        queued.remove(&(x, y));

        if !revise(crossword, domains, x, y) {
            continue;
        }
        if domains.is_empty(x) {
            log::debug!("Domain of {} wiped out", crossword.variables[x]);
            return Propagation::Wipeout { variable: x };
        }
        for &z in crossword.neighbors(x) {
            if z != y && queued.insert((z, x)) {
                queue.push_back((z, x));
            }
        }
    }

    Propagation::Consistent
}
