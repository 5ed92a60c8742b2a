/*!
Bitwise propagation of a single column of an operation.

# Overview

Given the conditions of the inputs and outputs of an operation at some column, every combination of pairs admitted by the input conditions is evaluated on both instances.
A combination *survives* if the pairs of the outputs it produces are admitted by the output conditions.
The refined condition of each input and each output is then the union of the pairs seen across all surviving combinations.

If no combination survives, the column is contradictory.

```rust
# use otter_sha::procedures::bitwise::propagate;
# use otter_sha::structures::operation::OpKind;
let (inputs, outputs) = propagate(OpKind::Add(6), "-0n10n", "???").unwrap();
assert_eq!(inputs, "-0n10n");
assert_eq!(outputs, "5x-");

assert_eq!(propagate(OpKind::Xor3, "uu-", "x"), None);
```

Propagation only removes pairs no surviving combination uses, so every concrete solution of the column is kept, and propagating a result a second time changes nothing.

# Relations

Alongside refined conditions, propagation notes pairs of positions (inputs, then outputs) whose differences are related.
That is, positions *p* and *q* such that Δ*p* ⊕ Δ*q* takes the same value on every surviving combination, while neither Δ*p* nor Δ*q* is fixed.
These are the raw material of [two-bit equations](crate::structures::equation).
*/

use crate::structures::{
    gc::{gc_string, parse_gc_string, Gc, PAIRS},
    operation::OpKind,
};

/// The result of propagating a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnOutcome {
    /// The refined conditions of each input.
    pub inputs: Vec<Gc>,

    /// The refined conditions of each output.
    pub outputs: Vec<Gc>,

    /// Positions (inputs first, then outputs) with related differences, together with the xor of the differences.
    pub relations: Vec<(usize, usize, bool)>,
}

/// The largest number of positions in a column, given the widest addition.
pub const POSITIONS_MAX: usize = 16;

/// Propagates a column, returning `None` if no combination of the inputs is consistent with the outputs.
///
/// # Soundness
/// The lengths of `inputs` and `outputs` are assumed to match `kind`, and to total at most [POSITIONS_MAX].
pub fn propagate_column(kind: OpKind, inputs: &[Gc], outputs: &[Gc]) -> Option<ColumnOutcome> {
    let positions = inputs.len() + outputs.len();
    assert!(positions <= POSITIONS_MAX, "! Column of {positions} positions");

    let options: Vec<Vec<usize>> = inputs
        .iter()
        .map(|gc| gc.pair_indicies().collect())
        .collect();
    if options.iter().any(|pairs| pairs.is_empty()) {
        return None;
    }

    let mut refined_inputs = vec![0_u8; inputs.len()];
    let mut refined_outputs = vec![0_u8; outputs.len()];

    // The distinct difference patterns of surviving combinations, by position.
    let mut patterns: Vec<u16> = Vec::default();

    let mut choice = vec![0_usize; inputs.len()];
    let mut x = vec![false; inputs.len()];
    let mut x_prime = vec![false; inputs.len()];
    let mut y = vec![false; outputs.len()];
    let mut y_prime = vec![false; outputs.len()];

    'combinations: loop {
        for (index, option) in choice.iter().enumerate() {
            (x[index], x_prime[index]) = PAIRS[options[index][*option]];
        }
        kind.evaluate(&x, &mut y);
        kind.evaluate(&x_prime, &mut y_prime);

        if outputs
            .iter()
            .enumerate()
            .all(|(index, gc)| gc.admits(y[index], y_prime[index]))
        {
            let mut pattern = 0_u16;
            for (index, option) in choice.iter().enumerate() {
                let pair_index = options[index][*option];
                refined_inputs[index] |= 1 << pair_index;
                if x[index] != x_prime[index] {
                    pattern |= 1 << index;
                }
            }
            for index in 0..outputs.len() {
                refined_outputs[index] |= Gc::pair(y[index], y_prime[index]).mask();
                if y[index] != y_prime[index] {
                    pattern |= 1 << (inputs.len() + index);
                }
            }
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }

        // Advance the choice, as a mixed radix counter.
        for (index, option) in choice.iter_mut().enumerate() {
            *option += 1;
            if *option < options[index].len() {
                continue 'combinations;
            }
            *option = 0;
        }
        break;
    }

    if patterns.is_empty() {
        return None;
    }

    Some(ColumnOutcome {
        inputs: refined_inputs.into_iter().map(Gc::from_mask).collect(),
        outputs: refined_outputs.into_iter().map(Gc::from_mask).collect(),
        relations: relations(&patterns, positions),
    })
}

/// Pairs of positions whose differences agree (or disagree) on every pattern, where neither difference is fixed.
fn relations(patterns: &[u16], positions: usize) -> Vec<(usize, usize, bool)> {
    let always = patterns.iter().fold(u16::MAX, |acc, p| acc & p);
    let sometimes = patterns.iter().fold(0, |acc, p| acc | p);
    let free = (0..positions)
        .filter(|p| (sometimes >> p) & 1 == 1 && (always >> p) & 1 == 0)
        .collect::<Vec<_>>();

    let mut relations = Vec::default();
    for (index, p) in free.iter().enumerate() {
        for q in &free[index + 1..] {
            let value = |pattern: &u16| ((pattern >> p) ^ (pattern >> q)) & 1 == 1;
            let first = value(&patterns[0]);
            if patterns.iter().all(|pattern| value(pattern) == first) {
                relations.push((*p, *q, first));
            }
        }
    }
    relations
}

/// Propagates a column given as strings of conditions, with position 0 first.
///
/// Returns `None` if the column is contradictory, if the strings are not conditions of the arity of `kind`, or if the column is too wide to propagate.
pub fn propagate(kind: OpKind, inputs: &str, outputs: &str) -> Option<(String, String)> {
    let inputs = parse_gc_string(inputs)?;
    let outputs = parse_gc_string(outputs)?;
    if inputs.len() != kind.input_count() || outputs.len() != kind.output_count() {
        return None;
    }
    if inputs.len() + outputs.len() > POSITIONS_MAX {
        return None;
    }
    let outcome = propagate_column(kind, &inputs, &outputs)?;
    Some((gc_string(&outcome.inputs), gc_string(&outcome.outputs)))
}

#[cfg(test)]
mod bitwise_tests {
    use super::*;

    #[test]
    fn xor_of_differences() {
        assert_eq!(
            propagate(OpKind::Xor3, "x-x", "?"),
            Some(("x-x".to_string(), "-".to_string()))
        );
        assert_eq!(
            propagate(OpKind::Xor3, "uu0", "?"),
            Some(("uu0".to_string(), "0".to_string()))
        );
    }

    #[test]
    fn maj_forces_inputs() {
        // If the majority is 1 and one input is 0, the others are 1.
        assert_eq!(
            propagate(OpKind::Maj, "0??", "1"),
            Some(("011".to_string(), "1".to_string()))
        );
    }

    #[test]
    fn relation_through_xor() {
        // Only the three free differences are related, which is not a two-bit relation.
        let outcome =
            propagate_column(OpKind::Xor3, &[Gc::ANY, Gc::ANY, Gc::DASH], &[Gc::ANY]).unwrap();
        assert!(outcome.relations.is_empty());

        // With the output difference fixed, the free input differences are related.
        let outcome =
            propagate_column(OpKind::Xor3, &[Gc::ANY, Gc::ANY, Gc::DASH], &[Gc::X]).unwrap();
        assert_eq!(outcome.relations, vec![(0, 1, true)]);
    }

    #[test]
    fn malformed_strings() {
        assert_eq!(propagate(OpKind::Xor3, "--", "?"), None);
        assert_eq!(propagate(OpKind::Maj, "--Z", "?"), None);
    }

    #[test]
    fn wide_additions() {
        let widest = "-".repeat(OpKind::ADD_INPUTS_MAX as usize);
        assert_eq!(
            propagate(OpKind::Add(OpKind::ADD_INPUTS_MAX), &widest, "????"),
            Some((widest.clone(), "----".to_string()))
        );

        let wider = "-".repeat(14);
        assert_eq!(propagate(OpKind::Add(14), &wider, "????"), None);
        assert_eq!(OpKind::from_name("add", 14), None);
    }
}
