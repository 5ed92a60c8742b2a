/*!
Encodings of a bit as boolean variables.

An encoding fixes how many variables (*slots*) represent one bit, and how an assignment to those variables is read as a [generalized condition](crate::structures::gc).

Each encoding is described by a table of *literal regions*.
The region of a literal is the condition which remains when the literal is true.
For example, in the 1-bit encoding the region of the difference slot being false is `-`.

From the table:
- [refresh](Encoding::refresh) is the intersection of the regions of every assigned slot.
  So, a bit with no assigned slot is `?`.
- [closure](Encoding::closure) is the intersection of every region containing a condition, which is the tightest condition the encoding is able to represent.
- [forcing literals](Encoding::forcing_literals) of a condition are the literals whose regions contain the condition.

# Encodings

- [OneBit](Encoding::OneBit): slots (*x*, *x'*, Δ), with Δ = *x* ⊕ *x'*.
- [FourBit](Encoding::FourBit): one indicator slot for each pair, in the order of [PAIRS](crate::structures::gc::PAIRS).
  An indicator which is false excludes the pair, and an indicator which is true pins the pair.
- [Li2024](Encoding::Li2024): slots (*f*, *g*), with *f* the difference and *g* the sign of a difference.
  The combination *f* = 0, *g* = 1 is excluded by the formula.

```rust
# use otter_sha::structures::encoding::Encoding;
# use otter_sha::structures::gc::Gc;
let one_bit = Encoding::OneBit;
assert_eq!(one_bit.refresh(&[None, None, Some(false)]), Gc::DASH);
assert_eq!(one_bit.refresh(&[Some(true), None, Some(true)]), Gc::U);

let li = Encoding::Li2024;
assert_eq!(li.refresh(&[Some(true), Some(false)]), Gc::N);
assert_eq!(li.closure(Gc::ZERO), Gc::DASH);
```
*/

use crate::structures::{
    atom::{Atom, NO_ATOM},
    gc::Gc,
    literal::{CLiteral, Literal},
};

/// An encoding of a bit as boolean variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Encoding {
    OneBit,
    FourBit,
    Li2024,
}

/// The region of a literal: the slot of the literal, the polarity of the literal, and the condition which remains when the literal is true.
pub type Region = (usize, bool, Gc);

const ONE_BIT_REGIONS: [Region; 6] = [
    (0, false, Gc::from_mask(0b0101)), // 5
    (0, true, Gc::from_mask(0b1010)),  // A
    (1, false, Gc::from_mask(0b0011)), // 3
    (1, true, Gc::from_mask(0b1100)),  // C
    (2, false, Gc::DASH),
    (2, true, Gc::X),
];

const FOUR_BIT_REGIONS: [Region; 8] = [
    (0, false, Gc::from_mask(0b1110)),
    (0, true, Gc::from_mask(0b0001)),
    (1, false, Gc::from_mask(0b1101)),
    (1, true, Gc::from_mask(0b0010)),
    (2, false, Gc::from_mask(0b1011)),
    (2, true, Gc::from_mask(0b0100)),
    (3, false, Gc::from_mask(0b0111)),
    (3, true, Gc::from_mask(0b1000)),
];

const LI_2024_REGIONS: [Region; 4] = [
    (0, false, Gc::DASH),
    (0, true, Gc::X),
    (1, false, Gc::from_mask(0b1101)), // D
    (1, true, Gc::U),
];

impl Encoding {
    pub const MIN: Encoding = Encoding::OneBit;
    pub const MAX: Encoding = Encoding::Li2024;

    /// The number of variables representing one bit.
    pub fn slots(self) -> usize {
        match self {
            Self::OneBit => 3,
            Self::FourBit => 4,
            Self::Li2024 => 2,
        }
    }

    /// The table of literal regions.
    pub fn regions(self) -> &'static [Region] {
        match self {
            Self::OneBit => &ONE_BIT_REGIONS,
            Self::FourBit => &FOUR_BIT_REGIONS,
            Self::Li2024 => &LI_2024_REGIONS,
        }
    }

    /// The slot holding the difference of a bit, if the encoding has such a slot.
    pub fn difference_slot(self) -> Option<usize> {
        match self {
            Self::OneBit => Some(2),
            Self::FourBit => None,
            Self::Li2024 => Some(0),
        }
    }

    /// The condition of a bit, given the values of each slot of the bit.
    ///
    /// Values beyond the slots of the encoding are ignored.
    pub fn refresh(self, values: &[Option<bool>]) -> Gc {
        let mut condition = Gc::ANY;
        for (slot, polarity, region) in self.regions() {
            if values.get(*slot).copied().flatten() == Some(*polarity) {
                condition = condition.intersect(*region);
            }
        }
        condition
    }

    /// The tightest condition representable by the encoding which contains `condition`.
    pub fn closure(self, condition: Gc) -> Gc {
        self.regions()
            .iter()
            .filter(|(_, _, region)| condition.is_subset_of(*region))
            .fold(Gc::ANY, |closure, (_, _, region)| closure.intersect(*region))
    }

    /// Every condition the encoding is able to represent, excluding the contradiction.
    pub fn alphabet(self) -> Vec<Gc> {
        (1..16)
            .map(Gc::from_mask)
            .filter(|gc| self.closure(*gc) == *gc)
            .collect()
    }

    /// Every literal over `atoms` implied by `condition`, in slot order.
    ///
    /// Slots without an atom are skipped, and nothing is implied by the contradiction.
    pub fn forcing_literals(self, atoms: &[Atom], condition: Gc) -> Vec<CLiteral> {
        if condition.is_contradiction() {
            return Vec::default();
        }
        self.regions()
            .iter()
            .filter(|(slot, _, region)| {
                condition.is_subset_of(*region)
                    && atoms.get(*slot).is_some_and(|atom| *atom != NO_ATOM)
            })
            .map(|(slot, polarity, _)| CLiteral::new(atoms[*slot], *polarity))
            .collect()
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneBit => write!(f, "1-bit"),
            Self::FourBit => write!(f, "4-bit"),
            Self::Li2024 => write!(f, "li2024"),
        }
    }
}
