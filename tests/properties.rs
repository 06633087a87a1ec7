use proptest::prelude::*;

use xwords_csp::{
    fill::{
        arc::{ac3, Propagation},
        domain::{enforce_node_consistency, Domains},
        simple::SimpleFiller,
    },
    Assignment, BacktrackingFiller, Crossword, FillConfig, Filler,
};

/// Every complete consistent assignment, found by plain enumeration.
fn all_fills(crossword: &Crossword) -> Vec<Assignment> {
    fn extend(crossword: &Crossword, var: usize, partial: &mut Assignment, found: &mut Vec<Assignment>) {
        if var == crossword.variables().len() {
            found.push(partial.clone());
            return;
        }
        let variable = *crossword.variable(var);
        for word in crossword.words() {
            if word.chars().count() != variable.length() {
                continue;
            }
            partial.insert(variable, word.to_owned());
            if partial.is_consistent(crossword) {
                extend(crossword, var + 1, partial, found);
            }
            partial.remove(&variable);
        }
    }

    let mut found = vec![];
    extend(crossword, 0, &mut Assignment::default(), &mut found);
    found
}

fn letter(crossword: &Crossword, word: usize, index: usize) -> char {
    crossword.word(word).chars().nth(index).unwrap()
}

fn puzzle() -> impl Strategy<Value = Crossword> {
    (
        prop::collection::vec(prop::collection::vec(prop::bool::weighted(0.75), 3), 3),
        prop::collection::vec("[AB]{2,3}", 1..7),
    )
        .prop_map(|(structure, words)| Crossword::new(structure, words).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn node_consistency_keeps_exactly_the_fitting_words(crossword in puzzle()) {
        let mut domains = Domains::full(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        for (var, variable) in crossword.variables().iter().enumerate() {
            let expected: Vec<usize> = (0..crossword.words().count())
                .filter(|word| crossword.word(*word).chars().count() == variable.length())
                .collect();
            prop_assert_eq!(domains.sorted(var), expected);
        }
    }

    #[test]
    fn arc_consistency_leaves_every_word_supported(crossword in puzzle()) {
        let mut domains = Domains::full(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        if ac3(&crossword, &mut domains, None) == Propagation::Consistent {
            for x in 0..crossword.variables().len() {
                for &y in crossword.neighbors(x) {
                    let (i, j) = crossword.overlap(x, y).unwrap();
                    for wx in domains.iter(x) {
                        let supported = domains
                            .iter(y)
                            .any(|wy| letter(&crossword, wy, j) == letter(&crossword, wx, i));
                        prop_assert!(supported);
                    }
                }
            }
        }
    }

    #[test]
    fn arc_consistency_keeps_every_solution(crossword in puzzle()) {
        let fills = all_fills(&crossword);

        let mut domains = Domains::full(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        match ac3(&crossword, &mut domains, None) {
            Propagation::Wipeout { .. } => prop_assert!(fills.is_empty()),
            Propagation::Consistent => {
                for fill in &fills {
                    for (variable, word) in fill.iter() {
                        let var = crossword.variable_id(variable).unwrap();
                        let word = crossword.word_id(word).unwrap();
                        prop_assert!(domains.contains(var, word));
                    }
                }
            }
        }
    }

    #[test]
    fn fillers_find_a_fill_iff_one_exists(crossword in puzzle()) {
        let exists = !all_fills(&crossword).is_empty();

        let configs = [
            FillConfig::default(),
            FillConfig::default().with_inference(false),
            FillConfig::default().with_arc_consistency(false).with_inference(false),
        ];
        for config in configs {
            let result = BacktrackingFiller::new(config).fill(&crossword).unwrap();
            prop_assert_eq!(result.is_some(), exists);
            if let Some(assignment) = result {
                prop_assert!(assignment.is_complete(&crossword));
                prop_assert!(assignment.is_consistent(&crossword));
            }
        }

        let result = SimpleFiller::new().fill(&crossword).unwrap();
        prop_assert_eq!(result.is_some(), exists);
    }

    #[test]
    fn fills_are_deterministic(crossword in puzzle()) {
        let first = BacktrackingFiller::default().fill(&crossword).unwrap();
        let second = BacktrackingFiller::default().fill(&crossword.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rollback_restores_domains_exactly(crossword in puzzle()) {
        let mut domains = Domains::full(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        let before: Vec<Vec<usize>> = (0..crossword.variables().len()).map(|var| domains.sorted(var)).collect();

        let checkpoint = domains.checkpoint();
        if !crossword.variables().is_empty() {
            if let Some(word) = domains.sorted(0).first().copied() {
                domains.restrict(0, word);
            }
        }
        ac3(&crossword, &mut domains, None);
        domains.rollback(checkpoint);

        let after: Vec<Vec<usize>> = (0..crossword.variables().len()).map(|var| domains.sorted(var)).collect();
        prop_assert_eq!(before, after);
    }
}
