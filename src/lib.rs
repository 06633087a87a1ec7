//! Crossword fill as a constraint satisfaction problem.
//!
//! A [`Crossword`] describes the grid and the candidate words. Fillers in
//! [`fill`] enforce node consistency, propagate crossings with AC-3 and then
//! backtrack to an [`Assignment`] of distinct words, or report that none
//! exists.
//!
//! ```
//! use xwords_csp::{solve, Crossword};
//!
//! let crossword = Crossword::new(
//!     vec![vec![true, true, true], vec![true, false, false], vec![true, false, false]],
//!     ["cat", "cow", "dog"],
//! )?;
//!
//! let assignment = solve(&crossword).expect("a fill exists");
//! assert!(assignment.is_consistent(&crossword));
//! # Ok::<(), xwords_csp::Error>(())
//! ```

pub mod assignment;
pub mod crossword;
mod error;
pub mod fill;
mod order;
pub mod parse;

pub use assignment::Assignment;
pub use crossword::{Crossword, Direction, WordId};
pub use error::Error;
pub use fill::{backtrack::BacktrackingFiller, FillConfig, Filler};
pub use parse::{VarId, Variable};

/// Fills `crossword` with the default `BacktrackingFiller`. `None` means no fill
/// exists.
pub fn solve(crossword: &Crossword) -> Option<Assignment> {
    // no seeds, so nothing to validate
    BacktrackingFiller::default().fill(crossword).ok().flatten()
}
