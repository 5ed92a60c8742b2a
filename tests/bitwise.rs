use otter_sha::{
    generic::random::MinimalPCG32,
    procedures::bitwise::{propagate, propagate_column},
    structures::{
        gc::Gc,
        operation::OpKind,
    },
};

use rand::{seq::SliceRandom, SeedableRng};

/// Operations whose columns are checked exhaustively.
const NARROW: [OpKind; 5] = [OpKind::Xor3, OpKind::Maj, OpKind::Ch, OpKind::Add(2), OpKind::Add(3)];

/// Additions whose columns are checked on a sample of strings.
const WIDE: [OpKind; 3] = [OpKind::Add(5), OpKind::Add(6), OpKind::Add(7)];

const SAMPLES: usize = 400;

/// Every combination of pairs admitted by the given conditions.
fn admitted(conditions: &[Gc]) -> Vec<Vec<(bool, bool)>> {
    let mut combinations = vec![vec![]];
    for gc in conditions {
        combinations = combinations
            .into_iter()
            .flat_map(|combination| {
                gc.pairs().map(move |pair| {
                    let mut extended = combination.clone();
                    extended.push(pair);
                    extended
                })
            })
            .collect();
    }
    combinations
}

/// Every string of `length` conditions from `alphabet`.
fn strings(alphabet: &[Gc], length: usize) -> Vec<Vec<Gc>> {
    let mut strings = vec![vec![]];
    for _ in 0..length {
        strings = strings
            .into_iter()
            .flat_map(|string: Vec<Gc>| {
                alphabet.iter().map(move |gc| {
                    let mut extended = string.clone();
                    extended.push(*gc);
                    extended
                })
            })
            .collect();
    }
    strings
}

fn evaluate(kind: OpKind, pairs: &[(bool, bool)]) -> Vec<(bool, bool)> {
    let x = pairs.iter().map(|pair| pair.0).collect::<Vec<_>>();
    let x_prime = pairs.iter().map(|pair| pair.1).collect::<Vec<_>>();
    let mut y = vec![false; kind.output_count()];
    let mut y_prime = vec![false; kind.output_count()];
    kind.evaluate(&x, &mut y);
    kind.evaluate(&x_prime, &mut y_prime);
    y.into_iter().zip(y_prime).collect()
}

fn alphabet() -> Vec<Gc> {
    "?-x0u1n5"
        .chars()
        .filter_map(Gc::from_char)
        .collect()
}

/// `count` strings of `length` conditions from `alphabet`, chosen at random.
fn sampled(rng: &mut MinimalPCG32, alphabet: &[Gc], length: usize, count: usize) -> Vec<Vec<Gc>> {
    (0..count)
        .map(|_| {
            (0..length)
                .filter_map(|_| alphabet.choose(rng).copied())
                .collect()
        })
        .collect()
}

mod scenarios {
    use super::*;

    #[test]
    fn addition_of_six() {
        assert_eq!(
            propagate(OpKind::Add(6), "-0n10n", "???"),
            Some(("-0n10n".to_string(), "5x-".to_string()))
        );
    }

    #[test]
    fn addition_of_seven() {
        assert_eq!(
            propagate(OpKind::Add(7), "110?100", "1??"),
            Some(("1101100".to_string(), "100".to_string()))
        );
    }

    #[test]
    fn choice_of_equal_inputs() {
        assert_eq!(
            propagate(OpKind::Ch, "---", "?"),
            Some(("---".to_string(), "-".to_string()))
        );
        assert_eq!(propagate(OpKind::Ch, "---", "x"), None);
    }

    #[test]
    fn choice_by_a_known_bit() {
        // The first input is 1, and so the output is the second input.
        assert_eq!(
            propagate(OpKind::Ch, "1u?", "?"),
            Some(("1u?".to_string(), "u".to_string()))
        );
    }

    #[test]
    fn majority_of_differences() {
        assert_eq!(
            propagate(OpKind::Maj, "uu?", "?"),
            Some(("uu?".to_string(), "u".to_string()))
        );
    }
}

mod soundness {
    use super::*;

    fn output_alphabet() -> Vec<Gc> {
        "?-x1".chars().filter_map(Gc::from_char).collect()
    }

    /// Every pair of instances admitted by the inputs and outputs is kept by propagation, and satisfies each relation found.
    fn check(kind: OpKind, inputs: &[Gc], outputs: &[Gc]) {
        let outcome = propagate_column(kind, inputs, outputs);

        for pairs in admitted(inputs) {
            let produced = evaluate(kind, &pairs);
            if !produced
                .iter()
                .zip(outputs)
                .all(|((y, y_prime), gc)| gc.admits(*y, *y_prime))
            {
                continue;
            }

            let Some(outcome) = &outcome else {
                panic!("{kind} {inputs:?} {outputs:?} lost {pairs:?}");
            };
            for (pair, gc) in pairs.iter().zip(&outcome.inputs) {
                assert!(gc.admits(pair.0, pair.1), "{kind} {inputs:?} {outputs:?}");
            }
            for (pair, gc) in produced.iter().zip(&outcome.outputs) {
                assert!(gc.admits(pair.0, pair.1), "{kind} {inputs:?} {outputs:?}");
            }
            for (p, q, value) in &outcome.relations {
                let difference = |position: usize| match position < pairs.len() {
                    true => pairs[position].0 != pairs[position].1,
                    false => {
                        let output = produced[position - pairs.len()];
                        output.0 != output.1
                    }
                };
                assert_eq!(difference(*p) ^ difference(*q), *value);
            }
        }
    }

    #[test]
    fn narrow_operations() {
        let (alphabet, output_alphabet) = (alphabet(), output_alphabet());
        for kind in NARROW {
            for inputs in strings(&alphabet, kind.input_count()) {
                for outputs in strings(&output_alphabet, kind.output_count()) {
                    check(kind, &inputs, &outputs);
                }
            }
        }
    }

    #[test]
    fn wide_additions() {
        let (alphabet, output_alphabet) = (alphabet(), output_alphabet());
        let mut rng = MinimalPCG32::seed_from_u64(5);
        for kind in WIDE {
            let inputs = sampled(&mut rng, &alphabet, kind.input_count(), SAMPLES);
            let outputs = sampled(&mut rng, &output_alphabet, kind.output_count(), SAMPLES);
            for (inputs, outputs) in inputs.iter().zip(&outputs) {
                check(kind, inputs, outputs);
            }
        }
    }
}

mod idempotence {
    use super::*;

    fn check(kind: OpKind, inputs: &[Gc]) {
        let outputs = vec![Gc::ANY; kind.output_count()];
        let Some(once) = propagate_column(kind, inputs, &outputs) else {
            return;
        };
        let twice = propagate_column(kind, &once.inputs, &once.outputs);
        assert_eq!(twice.as_ref(), Some(&once), "{kind} {inputs:?}");
    }

    #[test]
    fn propagating_twice() {
        let alphabet = alphabet();
        for kind in NARROW {
            for inputs in strings(&alphabet, kind.input_count()) {
                check(kind, &inputs);
            }
        }
    }

    #[test]
    fn propagating_twice_wide() {
        let alphabet = alphabet();
        let mut rng = MinimalPCG32::seed_from_u64(11);
        for kind in WIDE {
            for inputs in sampled(&mut rng, &alphabet, kind.input_count(), SAMPLES) {
                check(kind, &inputs);
            }
        }
    }

    #[test]
    fn refinement_only() {
        let alphabet = alphabet();
        for inputs in strings(&alphabet, 3) {
            let outputs = [Gc::ANY];
            if let Some(outcome) = propagate_column(OpKind::Xor3, &inputs, &outputs) {
                for (refined, original) in outcome.inputs.iter().zip(&inputs) {
                    assert!(refined.is_subset_of(*original));
                }
            }
        }
    }
}
