use std::time::Instant;

use crate::{
    assignment::Assignment,
    crossword::WordId,
    fill::{
        domain::{enforce_node_consistency, Domains},
        FillStats, Filler, PartialAssignment,
    },
    Crossword, Error,
};

/// Chronological backtracking with no propagation and no heuristics:
/// variables in id order, words in id order. Slow, but easy to trust.
#[derive(Debug, Clone, Default)]
pub struct SimpleFiller {
    stats: FillStats,
}

impl SimpleFiller {
    pub fn new() -> SimpleFiller {
        SimpleFiller::default()
    }

    pub fn stats(&self) -> FillStats {
        self.stats
    }
}

impl Filler for SimpleFiller {
    fn fill(&mut self, crossword: &Crossword) -> Result<Option<Assignment>, Error> {
        let start = Instant::now();
        self.stats = FillStats::default();

        let mut domains = Domains::full(crossword);
        enforce_node_consistency(crossword, &mut domains);

        let variable_count = crossword.variables.len();
        let candidates: Vec<Vec<WordId>> = (0..variable_count).map(|var| domains.sorted(var)).collect();

        let mut assignment = PartialAssignment::new(crossword);
        // next[var] indexes the first candidate of var not yet tried
        let mut next = vec![0; variable_count];
        let mut var = 0;

        while var < variable_count {
            let mut placed = false;
            while next[var] < candidates[var].len() {
                let word = candidates[var][next[var]];
                next[var] += 1;
                if assignment.is_consistent_with(crossword, var, word) {
                    assignment.assign(var, word);
                    placed = true;
                    break;
                }
            }

            if placed {
                self.stats.nodes += 1;
                var += 1;
                continue;
            }

            next[var] = 0;
            if var == 0 {
                log::info!(
                    "No fill after {} nodes in {}ms",
                    self.stats.nodes,
                    start.elapsed().as_millis()
                );
                return Ok(None);
            }
            var -= 1;
            assignment.unassign(var);
            self.stats.backtracks += 1;
        }

        log::info!(
            "Filled after {} nodes in {}ms",
            self.stats.nodes,
            start.elapsed().as_millis()
        );
        Ok(Some(assignment.to_assignment(crossword)))
    }
}
