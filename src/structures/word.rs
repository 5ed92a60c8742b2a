/*!
Words, and views of words.

A [Word] is a fixed number of bits, each bit holding the atoms of its slots (see [encoding](crate::structures::encoding)) and the current [condition](Gc) of the bit.
Words are stored once, in the [state](crate::db::state) of a propagator, and are referred to by a [WordId].

A [SoftWord] is a view of bits, each bit given as a [BitRef] --- a (word, column) pair.
Views are used wherever the step function reads a word through a rotation, a shift, or an offset, and so a soft word never holds conditions of its own.
Bits outside of a word (e.g. shifted in by a right shift, or a carry into column 0) are read from the shared [zero word](ZERO_WORD).

```rust
# use otter_sha::structures::word::{SoftWord, BitRef};
// Bit 0 of a rotation right by 2 is bit 2 of the word.
let view = SoftWord::rotr(7, 2, 8);
assert_eq!(view.get(0), BitRef { word: 7, col: 2 });
assert_eq!(view.get(7), BitRef { word: 7, col: 1 });
```
*/

use crate::structures::{
    atom::{Atom, NO_ATOM},
    gc::Gc,
    step::Role,
};

/// An index to a word.
pub type WordId = usize;

/// The word whose bits are always `0`.
pub const ZERO_WORD: WordId = 0;

/// The location of a bit, as a (word, column) pair with column 0 the least significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitRef {
    pub word: WordId,
    pub col: usize,
}

impl BitRef {
    /// Whether the bit is a bit of the zero word.
    pub fn is_zero(&self) -> bool {
        self.word == ZERO_WORD
    }
}

/// A bit, as the atoms of each slot together with the current condition of the bit.
#[derive(Clone, Debug)]
pub struct Bit {
    /// The atoms of each slot, with [NO_ATOM] for each slot without an atom.
    pub atoms: [Atom; 4],

    /// The condition of the bit on the current valuation, as of the last refresh.
    pub gc: Gc,
}

impl Default for Bit {
    fn default() -> Self {
        Bit {
            atoms: [NO_ATOM; 4],
            gc: Gc::ANY,
        }
    }
}

impl Bit {
    /// Whether some slot of the bit has an atom.
    pub fn has_atoms(&self) -> bool {
        self.atoms.iter().any(|atom| *atom != NO_ATOM)
    }
}

/// A word of the step function.
#[derive(Clone, Debug)]
pub struct Word {
    pub role: Role,
    pub round: i32,
    pub bits: Vec<Bit>,
}

impl Word {
    pub fn new(role: Role, round: i32, size: usize) -> Self {
        Word {
            role,
            round,
            bits: vec![Bit::default(); size],
        }
    }

    /// The conditions of the word, most significant bit first.
    pub fn gc_string(&self) -> Vec<Gc> {
        self.bits.iter().rev().map(|bit| bit.gc).collect()
    }

    /// Whether no bit of the word has an atom.
    pub fn is_vacant(&self) -> bool {
        !self.bits.iter().any(|bit| bit.has_atoms())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{} ", self.role, self.round)?;
        for bit in self.bits.iter().rev() {
            write!(f, "{}", bit.gc)?;
        }
        Ok(())
    }
}

/// A view of bits from one or more words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoftWord {
    refs: Vec<BitRef>,
}

impl SoftWord {
    /// A view of each bit of `word`, unchanged.
    pub fn identity(word: WordId, size: usize) -> Self {
        SoftWord {
            refs: (0..size).map(|col| BitRef { word, col }).collect(),
        }
    }

    /// A view of `word` rotated right by `amount`.
    pub fn rotr(word: WordId, amount: usize, size: usize) -> Self {
        SoftWord {
            refs: (0..size)
                .map(|col| BitRef {
                    word,
                    col: (col + amount) % size,
                })
                .collect(),
        }
    }

    /// A view of `word` shifted right by `amount`, with zero bits shifted in.
    pub fn shr(word: WordId, amount: usize, size: usize) -> Self {
        SoftWord {
            refs: (0..size)
                .map(|col| match col + amount < size {
                    true => BitRef {
                        word,
                        col: col + amount,
                    },
                    false => BitRef {
                        word: ZERO_WORD,
                        col,
                    },
                })
                .collect(),
        }
    }

    /// A view of `word` shifted left by `amount`, with zero bits shifted in.
    ///
    /// Used to read carries into a column, as the carry into column *j* is held by column *j* − `amount` of a carry word.
    pub fn shl(word: WordId, amount: usize, size: usize) -> Self {
        SoftWord {
            refs: (0..size)
                .map(|col| match col >= amount {
                    true => BitRef {
                        word,
                        col: col - amount,
                    },
                    false => BitRef {
                        word: ZERO_WORD,
                        col,
                    },
                })
                .collect(),
        }
    }

    /// The bit viewed at `col`.
    pub fn get(&self, col: usize) -> BitRef {
        self.refs[col]
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn refs(&self) -> &[BitRef] {
        &self.refs
    }
}

#[cfg(test)]
mod word_tests {
    use super::*;

    #[test]
    fn shifts_pad_with_zero() {
        let right = SoftWord::shr(3, 3, 8);
        assert_eq!(right.get(4), BitRef { word: 3, col: 7 });
        assert!(right.get(5).is_zero());

        let left = SoftWord::shl(3, 2, 8);
        assert!(left.get(0).is_zero());
        assert!(left.get(1).is_zero());
        assert_eq!(left.get(2), BitRef { word: 3, col: 0 });
    }

    #[test]
    fn string_is_most_significant_first() {
        let mut word = Word::new(Role::A, 0, 3);
        word.bits[0].gc = Gc::ZERO;
        word.bits[2].gc = Gc::X;
        assert_eq!(crate::structures::gc::gc_string(&word.gc_string()), "x?0");
        assert!(word.is_vacant());
    }
}
