use std::collections::{btree_map, BTreeMap};

use rustc_hash::FxHashSet;

use crate::{Crossword, Variable};

/// Words placed on variables. Iterates in `Variable` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<Variable, String>,
}

impl Assignment {
    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.words.get(variable).map(String::as_str)
    }

    pub fn insert(&mut self, variable: Variable, word: String) -> Option<String> {
        self.words.insert(variable, word)
    }

    pub fn remove(&mut self, variable: &Variable) -> Option<String> {
        self.words.remove(variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> + '_ {
        self.words.iter().map(|(variable, word)| (variable, word.as_str()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every variable of `crossword` has a word, and nothing else does.
    pub fn is_complete(&self, crossword: &Crossword) -> bool {
        self.len() == crossword.variables().len()
            && self
                .words
                .keys()
                .all(|variable| crossword.variable_id(variable).is_some())
    }

    /// Words are distinct, fit their variables, and agree wherever two
    /// assigned variables cross.
    pub fn is_consistent(&self, crossword: &Crossword) -> bool {
        let mut used = FxHashSet::default();

        for (variable, word) in self.iter() {
            if !used.insert(word) {
                return false;
            }
            if word.chars().count() != variable.length() {
                return false;
            }

            let var = match crossword.variable_id(variable) {
                Some(var) => var,
                None => return false,
            };
            let letters: Vec<char> = word.chars().collect();

            for &neighbor in crossword.neighbors(var) {
                let other = match self.get(crossword.variable(neighbor)) {
                    Some(other) => other,
                    None => continue,
                };
                if let Some((i, j)) = crossword.overlap(var, neighbor) {
                    if other.chars().nth(j) != Some(letters[i]) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl IntoIterator for Assignment {
    type Item = (Variable, String);
    type IntoIter = btree_map::IntoIter<Variable, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl FromIterator<(Variable, String)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, String)>>(iter: T) -> Self {
        Assignment {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Assignment;
    use crate::{crossword::tests::grid, Crossword};

    fn corner() -> Crossword {
        Crossword::new(grid(&["   ", " **", " **"]), ["cat", "cow", "dog"]).unwrap()
    }

    #[test]
    fn consistent_assignment() {
        let crossword = corner();
        let assignment: Assignment = vec![
            (*crossword.variable(0), String::from("CAT")),
            (*crossword.variable(1), String::from("COW")),
        ]
        .into_iter()
        .collect();

        assert!(assignment.is_complete(&crossword));
        assert!(assignment.is_consistent(&crossword));
    }

    #[test]
    fn crossing_letters_must_agree() {
        let crossword = corner();
        let mut assignment = Assignment::default();
        assignment.insert(*crossword.variable(0), String::from("CAT"));
        assignment.insert(*crossword.variable(1), String::from("DOG"));

        assert!(!assignment.is_consistent(&crossword));
    }

    #[test]
    fn words_must_be_distinct() {
        let crossword = corner();
        let mut assignment = Assignment::default();
        assignment.insert(*crossword.variable(0), String::from("CAT"));
        assignment.insert(*crossword.variable(1), String::from("CAT"));

        assert!(!assignment.is_consistent(&crossword));
    }

    #[test]
    fn lengths_must_match() {
        let crossword = corner();
        let mut assignment = Assignment::default();
        assignment.insert(*crossword.variable(0), String::from("CATS"));

        assert!(!assignment.is_consistent(&crossword));
        assert!(!assignment.is_complete(&crossword));
    }
}
