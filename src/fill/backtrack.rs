use std::time::Instant;

use crate::{
    assignment::Assignment,
    crossword::WordId,
    fill::{
        arc::{ac3, arcs_into, Propagation},
        domain::{enforce_node_consistency, Domains},
        FillConfig, FillStats, Filler, PartialAssignment,
    },
    order::{order_domain_values, select_unassigned_variable},
    parse::{VarId, Variable},
    Crossword, Error,
};

/// Backtracking search over arc-consistent domains, choosing the most
/// constrained variable and trying its least constraining values first.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingFiller {
    config: FillConfig,
    seeds: Vec<(Variable, String)>,
    stats: FillStats,
}

impl BacktrackingFiller {
    pub fn new(config: FillConfig) -> BacktrackingFiller {
        BacktrackingFiller {
            config,
            seeds: vec![],
            stats: FillStats::default(),
        }
    }

    /// Pins `variable` to `word` for every subsequent fill. The word must be in
    /// the crossword's word list; this is checked when filling.
    pub fn with_seed(mut self, variable: Variable, word: impl Into<String>) -> BacktrackingFiller {
        self.seeds.push((variable, word.into()));
        self
    }

    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Counters from the most recent call to `fill`.
    pub fn stats(&self) -> FillStats {
        self.stats
    }

    fn resolve_seeds(&self, crossword: &Crossword) -> Result<Vec<(VarId, WordId)>, Error> {
        self.seeds
            .iter()
            .map(|(variable, word)| {
                let var = crossword.require(variable)?;
                let id = crossword.word_id(word).ok_or_else(|| Error::UnknownWord {
                    word: word.clone(),
                })?;
                if crossword.words[id].len() != variable.length {
                    return Err(Error::LengthMismatch {
                        variable: *variable,
                        word: crossword.word(id).to_owned(),
                    });
                }
                Ok((var, id))
            })
            .collect()
    }

    fn backtrack(
        &mut self,
        crossword: &Crossword,
        domains: &mut Domains,
        assignment: &mut PartialAssignment,
        start: &Instant,
    ) -> bool {
        let var = match select_unassigned_variable(crossword, domains, assignment) {
            Some(var) => var,
            None => return true,
        };

        self.stats.nodes += 1;
        if self.config.progress_interval > 0 && self.stats.nodes % self.config.progress_interval == 0 {
            log::debug!(
                "Expanded {} nodes ({} backtracks), throughput: {:.2}/ms",
                self.stats.nodes,
                self.stats.backtracks,
                self.stats.nodes as f64 / start.elapsed().as_millis().max(1) as f64
            );
        }

        for word in order_domain_values(crossword, domains, assignment, var) {
            debug_assert_eq!(
                crossword.words[word].len(),
                crossword.variables[var].length,
                "node consistency left a misfit word in the domain of {}",
                crossword.variables[var]
            );
            if !assignment.is_consistent_with(crossword, var, word) {
                continue;
            }

            assignment.assign(var, word);
            let checkpoint = domains.checkpoint();

            let viable = if self.config.inference {
                domains.restrict(var, word);
                ac3(crossword, domains, Some(arcs_into(crossword, var))).is_consistent()
            } else {
                true
            };

            if viable && self.backtrack(crossword, domains, assignment, start) {
                return true;
            }

            domains.rollback(checkpoint);
            assignment.unassign(var);
            self.stats.backtracks += 1;
        }

        false
    }
}

impl Filler for BacktrackingFiller {
    fn fill(&mut self, crossword: &Crossword) -> Result<Option<Assignment>, Error> {
        let start = Instant::now();
        self.stats = FillStats::default();

        let seeds = self.resolve_seeds(crossword)?;

        let mut domains = Domains::full(crossword);
        enforce_node_consistency(crossword, &mut domains);
        for (var, word) in seeds {
            domains.restrict(var, word);
        }

        if self.config.arc_consistency {
            if let Propagation::Wipeout { variable } = ac3(crossword, &mut domains, None) {
                log::info!(
                    "No fill: arc consistency emptied the domain of {}",
                    crossword.variables[variable]
                );
                return Ok(None);
            }
        }

        let mut assignment = PartialAssignment::new(crossword);
        let filled = self.backtrack(crossword, &mut domains, &mut assignment, &start);

        log::info!(
            "{} after {} nodes and {} backtracks in {}ms",
            if filled { "Filled" } else { "No fill" },
            self.stats.nodes,
            self.stats.backtracks,
            start.elapsed().as_millis()
        );

        Ok(filled.then(|| assignment.to_assignment(crossword)))
    }
}
