/*!
Wordwise propagation of addition equations.

# Overview

An addition equation states the sum of its positive words equals the sum of its negative words, modulo 2<sup>*n*</sup>.
As the equation holds on both instances, it also holds of the signed differences of the words, where the signed difference of a word is the sum over bits of 2<sup>*j*</sup> · (*x*<sub>*j*</sub> − *x'*<sub>*j*</sub>).

A word is *grounded* when each of its bits is grounded, and so the signed difference of the word is known (see [to_integer]).
When only one or two words of an equation are not grounded, and those words lie on the same side of the equation, the grounded words fold into a constant *c*, and the remaining words satisfy Σ δ(*w*) ≡ *c*.

# Derivation

The words are derived a column at a time, from the least significant bit.
Each bit contributes one of the signed differences its condition admits, and the set of carries which may enter each column is tracked forward from a carry of 0 into column 0.
A carry *c* into column *j* leads to a carry of (*c* + Σ *d* − *c*<sub>*j*</sub>) / 2 into column *j* + 1, whenever the numerator is even.

A run of columns is an *island* while more than one carry may leave it.
Once the carries leaving a column are a single value, the island closes: the carries of each column of the island are pruned backward to those which reach the closing carry, and each bit is restricted to the signed differences used by some surviving path.
The final island closes at the most significant column, where any carry is admissible.

```rust
# use otter_sha::procedures::wordwise::derive_words;
let derived = derive_words(&["--xxxx-xx--x", "--B--D-BBBB-"], 1147).unwrap();
assert_eq!(derived, vec!["--uunu-nx--x", "--u--n-B-BB-"]);
```

Derivation only removes signed differences which no solution of the equation uses, and a bit is only refined to the intersection of its condition with the admissible differences.

# Relations

As each column of an island is pruned, the pattern of non-zero differences of each surviving combination is noted.
Bits of two words at the same column whose differences agree (or disagree) on every pattern, while neither difference is fixed, are [related](WordRelation), and are the wordwise source of [two-bit equations](crate::structures::equation).
*/

use std::collections::BTreeSet;

use crate::structures::gc::{gc_string, parse_gc_string, Gc};

/// The result of wordwise propagation of an equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Derivation {
    /// The equation was not examined, as no word, more than two words, or words on both sides are ungrounded.
    Skipped,

    /// No assignment of signed differences satisfies the equation.
    Contradiction,

    /// The conditions of every word of the equation, positive words first, each least significant bit first.
    /// Together with relations between the words, indexed in the same order.
    Refined {
        words: Vec<Vec<Gc>>,
        relations: Vec<WordRelation>,
    },
}

/// Bits at column `col` of two words with related differences, Δ*first* ⊕ Δ*second* = `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordRelation {
    pub first: usize,
    pub second: usize,
    pub col: usize,
    pub value: bool,
}

/// Refined words, together with the distinct patterns of non-zero differences used at each column.
struct Islands {
    words: Vec<Vec<Gc>>,
    patterns: Vec<BTreeSet<Vec<bool>>>,
}

fn mask(size: usize) -> u64 {
    match size >= u64::BITS as usize {
        true => u64::MAX,
        false => (1 << size) - 1,
    }
}

/// The signed difference of a grounded word (least significant bit first), modulo 2<sup>*n*</sup>.
///
/// ```rust
/// # use otter_sha::procedures::wordwise::to_integer;
/// # use otter_sha::structures::gc::parse_gc_string;
/// let mut word = parse_gc_string("u-n").unwrap();
/// word.reverse();
/// assert_eq!(to_integer(&word), Some(3));
/// ```
pub fn to_integer(word: &[Gc]) -> Option<u64> {
    let mut value = 0_u64;
    for (col, gc) in word.iter().enumerate() {
        let power = 1_u64.checked_shl(col as u32).unwrap_or(0);
        match gc.signed_difference()? {
            1 => value = value.wrapping_add(power),
            -1 => value = value.wrapping_sub(power),
            _ => {}
        }
    }
    Some(value & mask(word.len()))
}

/// A grounded word with signed difference `value`, with the same zero and non-zero differences as `pattern`.
///
/// The signs of the non-zero differences are the only choice, and as 2<sup>*n*−1</sup> ≡ −2<sup>*n*−1</sup> the most significant bit keeps the sign of the pattern.
/// Returns `None` if `pattern` is not grounded, or if no choice of signs gives `value`.
pub fn from_integer(value: u64, pattern: &[Gc]) -> Option<Vec<Gc>> {
    let size = pattern.len();
    let mask = mask(size);

    let mut signed = 0_u64;
    for (col, gc) in pattern.iter().enumerate() {
        match gc.signed_difference()? {
            0 => {}
            _ => signed |= 1 << col,
        }
    }

    // With b the positive bits, Σ ±2^j = 2b − signed.
    let twice = (value & mask).wrapping_add(signed) & mask;
    if twice & 1 == 1 {
        return None;
    }
    let mut positive = twice >> 1;
    if size > 0 && pattern[size - 1] == Gc::U {
        positive |= 1 << (size - 1);
    }
    if positive & !signed != 0 {
        return None;
    }

    Some(
        pattern
            .iter()
            .enumerate()
            .map(|(col, gc)| match (signed >> col) & 1 == 1 {
                false => *gc,
                true if (positive >> col) & 1 == 1 => Gc::U,
                true => Gc::N,
            })
            .collect(),
    )
}

/// Every combination of one choice from each list.
fn combinations(choices: &[Vec<i8>]) -> Vec<Vec<i8>> {
    let mut combinations = vec![Vec::default()];
    for options in choices {
        combinations = combinations
            .into_iter()
            .flat_map(|combination: Vec<i8>| {
                options.iter().map(move |option| {
                    let mut extended = combination.clone();
                    extended.push(*option);
                    extended
                })
            })
            .collect();
    }
    combinations
}

/// The carry out of a column, if the column is consistent with the target bit.
fn carry_out(carry: i64, combination: &[i8], target: bool) -> Option<i64> {
    let total = carry + combination.iter().map(|d| *d as i64).sum::<i64>() - target as i64;
    match total % 2 == 0 {
        true => Some(total / 2),
        false => None,
    }
}

/// Refines words (each least significant bit first) such that Σ δ(*w*) ≡ `constant`.
///
/// Returns `None` if no choice of signed differences satisfies the equation.
pub fn derive(words: &[Vec<Gc>], constant: u64) -> Option<Vec<Vec<Gc>>> {
    derive_islands(words, constant).map(|islands| islands.words)
}

fn derive_islands(words: &[Vec<Gc>], constant: u64) -> Option<Islands> {
    let Some(size) = words.first().map(|word| word.len()) else {
        return match constant {
            0 => Some(Islands {
                words: Vec::default(),
                patterns: Vec::default(),
            }),
            _ => None,
        };
    };
    assert!(
        words.iter().all(|word| word.len() == size),
        "! Words of distinct sizes"
    );

    let columns: Vec<Vec<Vec<i8>>> = (0..size)
        .map(|col| {
            words
                .iter()
                .map(|word| word[col].signed_differences().collect())
                .collect()
        })
        .collect();
    let target = |col: usize| (constant >> col) & 1 == 1;

    let mut islands = Islands {
        words: words.to_vec(),
        patterns: vec![BTreeSet::default(); size],
    };

    let mut island_start = 0;
    let mut carries: Vec<BTreeSet<i64>> = vec![BTreeSet::from([0])];

    for col in 0..size {
        let mut next = BTreeSet::default();
        for carry in &carries[col - island_start] {
            for combination in combinations(&columns[col]) {
                if let Some(out) = carry_out(*carry, &combination, target(col)) {
                    next.insert(out);
                }
            }
        }
        if next.is_empty() {
            return None;
        }
        carries.push(next);

        if carries[carries.len() - 1].len() == 1 || col + 1 == size {
            close_island(island_start, col, &carries, &columns, target, &mut islands)?;
            island_start = col + 1;
            carries = vec![carries.pop().unwrap_or_default()];
        }
    }

    Some(islands)
}

/// Restricts the bits of the columns `start..=end` to the differences used on some path through the carries of the island.
fn close_island(
    start: usize,
    end: usize,
    carries: &[BTreeSet<i64>],
    columns: &[Vec<Vec<i8>>],
    target: impl Fn(usize) -> bool,
    islands: &mut Islands,
) -> Option<()> {
    let mut reachable = carries[end + 1 - start].clone();

    for col in (start..=end).rev() {
        let mut admissible = vec![Gc::CONTRADICTION; islands.words.len()];
        let mut previous = BTreeSet::default();

        for carry in &carries[col - start] {
            for combination in combinations(&columns[col]) {
                match carry_out(*carry, &combination, target(col)) {
                    Some(out) if reachable.contains(&out) => {
                        previous.insert(*carry);
                        for (index, difference) in combination.iter().enumerate() {
                            admissible[index] = admissible[index]
                                .union(Gc::from_signed_difference(*difference));
                        }
                        islands.patterns[col].insert(combination.iter().map(|d| *d != 0).collect());
                    }
                    _ => {}
                }
            }
        }

        if previous.is_empty() {
            return None;
        }
        for (word, allowed) in islands.words.iter_mut().zip(admissible) {
            word[col] = word[col].intersect(allowed);
        }
        reachable = previous;
    }
    Some(())
}

/// Pairs of words whose differences at a column agree (or disagree) on every pattern, where neither difference is fixed.
fn relations(patterns: &[BTreeSet<Vec<bool>>]) -> Vec<WordRelation> {
    let mut relations = Vec::default();
    for (col, patterns) in patterns.iter().enumerate() {
        let Some(first_pattern) = patterns.first() else {
            continue;
        };
        let free = (0..first_pattern.len())
            .filter(|index| {
                patterns.iter().any(|pattern| pattern[*index])
                    && patterns.iter().any(|pattern| !pattern[*index])
            })
            .collect::<Vec<_>>();

        for (index, first) in free.iter().enumerate() {
            for second in &free[index + 1..] {
                let value = first_pattern[*first] ^ first_pattern[*second];
                if patterns
                    .iter()
                    .all(|pattern| pattern[*first] ^ pattern[*second] == value)
                {
                    relations.push(WordRelation {
                        first: *first,
                        second: *second,
                        col,
                        value,
                    });
                }
            }
        }
    }
    relations
}

/// Wordwise propagation of the equation Σ `positive` ≡ Σ `negative`, with each word least significant bit first.
pub fn propagate_sum(positive: &[Vec<Gc>], negative: &[Vec<Gc>]) -> Derivation {
    let is_grounded = |word: &Vec<Gc>| word.iter().all(|gc| gc.is_grounded());

    let ungrounded_positive = positive.iter().filter(|w| !is_grounded(w)).count();
    let ungrounded_negative = negative.iter().filter(|w| !is_grounded(w)).count();

    match (ungrounded_positive, ungrounded_negative) {
        (0, 0) => return Derivation::Skipped,
        (p, n) if p > 0 && n > 0 => return Derivation::Skipped,
        (p, n) if p + n > 2 => return Derivation::Skipped,
        _ => {}
    }

    if positive
        .iter()
        .chain(negative)
        .any(|word| word.iter().any(|gc| gc.is_contradiction()))
    {
        return Derivation::Skipped;
    }

    // Σ grounded positive − Σ grounded negative.
    let mut folded = 0_u64;
    for word in positive.iter().filter(|w| is_grounded(w)) {
        folded = folded.wrapping_add(to_integer(word).unwrap_or(0));
    }
    for word in negative.iter().filter(|w| is_grounded(w)) {
        folded = folded.wrapping_sub(to_integer(word).unwrap_or(0));
    }

    let size = positive.iter().chain(negative).map(|w| w.len()).next().unwrap_or(0);
    let constant = match ungrounded_positive {
        0 => folded & mask(size),
        _ => folded.wrapping_neg() & mask(size),
    };

    let (side, offset) = match ungrounded_positive {
        0 => (negative, positive.len()),
        _ => (positive, 0),
    };
    let indicies = side
        .iter()
        .enumerate()
        .filter(|(_, word)| !is_grounded(word))
        .map(|(index, _)| offset + index)
        .collect::<Vec<_>>();

    let mut words: Vec<Vec<Gc>> = positive.iter().chain(negative).cloned().collect();
    let ungrounded = indicies.iter().map(|i| words[*i].clone()).collect::<Vec<_>>();

    match derive_islands(&ungrounded, constant) {
        None => Derivation::Contradiction,
        Some(islands) => {
            let relations = relations(&islands.patterns)
                .into_iter()
                .map(|relation| WordRelation {
                    first: indicies[relation.first],
                    second: indicies[relation.second],
                    ..relation
                })
                .collect();
            for (index, word) in indicies.into_iter().zip(islands.words) {
                words[index] = word;
            }
            Derivation::Refined { words, relations }
        }
    }
}

/// Derives words given as strings (most significant bit first) such that Σ δ(*w*) ≡ `constant`.
///
/// Returns `None` if some string is not a string of conditions, the strings differ in length, or no choice of signed differences satisfies the equation.
pub fn derive_words(words: &[&str], constant: u64) -> Option<Vec<String>> {
    let mut parsed = Vec::with_capacity(words.len());
    for word in words {
        let mut gcs = parse_gc_string(word)?;
        gcs.reverse();
        parsed.push(gcs);
    }
    if parsed.windows(2).any(|pair| pair[0].len() != pair[1].len()) {
        return None;
    }
    let derived = derive(&parsed, constant)?;
    Some(
        derived
            .into_iter()
            .map(|mut word| {
                word.reverse();
                gc_string(&word)
            })
            .collect(),
    )
}

#[cfg(test)]
mod wordwise_tests {
    use super::*;

    fn lsb_first(string: &str) -> Vec<Gc> {
        let mut word = parse_gc_string(string).unwrap();
        word.reverse();
        word
    }

    #[test]
    fn integer_of_grounded() {
        assert_eq!(to_integer(&lsb_first("----")), Some(0));
        assert_eq!(to_integer(&lsb_first("---n")), Some(15));
        assert_eq!(to_integer(&lsb_first("u0-1")), Some(8));
        assert_eq!(to_integer(&lsb_first("x---")), None);
    }

    #[test]
    fn sign_of_top_bit_is_kept() {
        let pattern = lsb_first("n-u-");
        // −8 + 2 ≡ 8 + 2 (mod 16)
        assert_eq!(from_integer(10, &pattern), Some(pattern.clone()));
        assert_eq!(from_integer(6, &pattern), Some(lsb_first("n-n-")));
        assert_eq!(from_integer(1, &pattern), None);
    }

    #[test]
    fn skips() {
        let open = lsb_first("xx");
        let fixed = lsb_first("u-");
        assert_eq!(
            propagate_sum(&[fixed.clone()], &[fixed.clone()]),
            Derivation::Skipped
        );
        assert_eq!(
            propagate_sum(&[open.clone()], &[open.clone()]),
            Derivation::Skipped
        );
        assert_eq!(
            propagate_sum(&[open.clone(), open.clone(), open.clone()], &[fixed]),
            Derivation::Skipped
        );
    }

    #[test]
    fn single_word_is_determined() {
        // u- + ?? ≡ 00, so ?? holds 2 (mod 4), as either n- or u-.
        let derivation = propagate_sum(&[lsb_first("u-"), lsb_first("??")], &[lsb_first("00")]);
        let Derivation::Refined { words, relations } = derivation else {
            panic!("{derivation:?}");
        };
        assert_eq!(gc_string(&words[1].iter().rev().copied().collect::<Vec<_>>()), "x-");
        assert!(relations.is_empty());
    }

    #[test]
    fn parity_relates_two_words() {
        // ? + ? ≡ -, so either both bits differ or neither does.
        let derivation = propagate_sum(&[lsb_first("?"), lsb_first("?")], &[lsb_first("-")]);
        let Derivation::Refined { words, relations } = derivation else {
            panic!("{derivation:?}");
        };
        assert_eq!(words[0], lsb_first("?"));
        assert_eq!(
            relations,
            vec![WordRelation {
                first: 0,
                second: 1,
                col: 0,
                value: false
            }]
        );

        // ? + ? ≡ u, so exactly one bit differs.
        let derivation = propagate_sum(&[lsb_first("?"), lsb_first("?")], &[lsb_first("u")]);
        let Derivation::Refined { relations, .. } = derivation else {
            panic!("{derivation:?}");
        };
        assert_eq!(relations.len(), 1);
        assert!(relations[0].value);
    }

    #[test]
    fn carries_relate_higher_columns() {
        // The grounded low column leaves no carry, so the second column is related, though the third is not.
        let derivation = propagate_sum(&[lsb_first("??-"), lsb_first("??-")], &[lsb_first("---")]);
        let Derivation::Refined { relations, .. } = derivation else {
            panic!("{derivation:?}");
        };
        assert_eq!(
            relations,
            vec![WordRelation {
                first: 0,
                second: 1,
                col: 1,
                value: false
            }]
        );

        // Relations are indexed by the words of the equation, grounded words included.
        let derivation = propagate_sum(
            &[lsb_first("?-"), lsb_first("--"), lsb_first("?-")],
            &[lsb_first("--")],
        );
        let Derivation::Refined { relations, .. } = derivation else {
            panic!("{derivation:?}");
        };
        let pairs = relations
            .iter()
            .map(|relation| (relation.first, relation.second))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(0, 2)]);
    }

    #[test]
    fn contradiction() {
        // A word with no difference may not carry a difference of 1.
        assert_eq!(derive(&[lsb_first("--")], 1), None);
        assert_eq!(
            propagate_sum(&[lsb_first("---u")], &[lsb_first("0--0")]),
            Derivation::Skipped
        );
        assert_eq!(
            propagate_sum(&[lsb_first("---u")], &[lsb_first("0--5")]),
            Derivation::Contradiction
        );
    }
}
