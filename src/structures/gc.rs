/*!
Generalized conditions (GC), the symbols of a differential characteristic.

A generalized condition on one bit is the set of pairs (*x*, *x'*) the bit may take across two instances of the hash function.
With four possible pairs there are sixteen conditions, each stored as a 4-bit mask and written as a single character:

| mask | char | pairs                    | mask | char | pairs                    |
|------|------|--------------------------|------|------|--------------------------|
| 0    | `#`  | (none)                   | 8    | `1`  | (1,1)                    |
| 1    | `0`  | (0,0)                    | 9    | `-`  | (0,0) (1,1)              |
| 2    | `u`  | (1,0)                    | 10   | `A`  | (1,0) (1,1)              |
| 3    | `3`  | (0,0) (1,0)              | 11   | `B`  | (0,0) (1,0) (1,1)        |
| 4    | `n`  | (0,1)                    | 12   | `C`  | (0,1) (1,1)              |
| 5    | `5`  | (0,0) (0,1)              | 13   | `D`  | (0,0) (0,1) (1,1)        |
| 6    | `x`  | (1,0) (0,1)              | 14   | `E`  | (1,0) (0,1) (1,1)        |
| 7    | `7`  | (0,0) (1,0) (0,1)        | 15   | `?`  | all                      |

Conditions are ordered by refinement: a condition with fewer pairs says more about a bit.
`#` admits nothing, and so is only ever seen as the result of propagation reaching a contradiction.

```rust
# use otter_sha::structures::gc::Gc;
let x = Gc::from_char('x').unwrap();
let u = Gc::from_char('u').unwrap();

assert!(u.refines(x));
assert!(!x.refines(u));
assert_eq!(x.intersect(Gc::from_char('B').unwrap()), u);
assert_eq!(u.signed_difference(), Some(1));
```

# Strings

A string of conditions describes a word, and is written with the most significant bit first.
So, in `"-x0"` the least significant bit is `0`.
*/

/// The characters of conditions, indexed by mask.
const CHARS: [char; 16] = [
    '#', '0', 'u', '3', 'n', '5', 'x', '7', '1', '-', 'A', 'B', 'C', 'D', 'E', '?',
];

/// The pairs (*x*, *x'*) of a condition, indexed by the position of the pair in a mask.
pub const PAIRS: [(bool, bool); 4] = [(false, false), (true, false), (false, true), (true, true)];

/// A generalized condition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gc(u8);

impl Gc {
    /// `#`, the contradiction.
    pub const CONTRADICTION: Gc = Gc(0);
    /// `0`
    pub const ZERO: Gc = Gc(1);
    /// `u`, a difference with *x* = 1.
    pub const U: Gc = Gc(2);
    /// `n`, a difference with *x* = 0.
    pub const N: Gc = Gc(4);
    /// `x`, some difference.
    pub const X: Gc = Gc(6);
    /// `1`
    pub const ONE: Gc = Gc(8);
    /// `-`, no difference.
    pub const DASH: Gc = Gc(9);
    /// `?`, no information.
    pub const ANY: Gc = Gc(15);

    /// The condition with the given mask, using only the low four bits of the mask.
    pub const fn from_mask(mask: u8) -> Gc {
        Gc(mask & 0b1111)
    }

    pub const fn mask(self) -> u8 {
        self.0
    }

    /// The condition admitting the single pair (*x*, *x'*).
    pub const fn pair(x: bool, x_prime: bool) -> Gc {
        Gc(1 << (x as u8 | ((x_prime as u8) << 1)))
    }

    pub fn from_char(c: char) -> Option<Gc> {
        CHARS.iter().position(|k| *k == c).map(|mask| Gc(mask as u8))
    }

    pub fn to_char(self) -> char {
        CHARS[self.0 as usize]
    }

    /// Whether the pair (*x*, *x'*) is admitted by the condition.
    pub fn admits(self, x: bool, x_prime: bool) -> bool {
        self.0 & Gc::pair(x, x_prime).0 != 0
    }

    /// The indicies (as in [PAIRS]) of pairs admitted by the condition.
    pub fn pair_indicies(self) -> impl Iterator<Item = usize> {
        let mask = self.0;
        (0..4).filter(move |index| (mask >> index) & 1 == 1)
    }

    /// The pairs admitted by the condition.
    pub fn pairs(self) -> impl Iterator<Item = (bool, bool)> {
        self.pair_indicies().map(|index| PAIRS[index])
    }

    pub fn union(self, other: Gc) -> Gc {
        Gc(self.0 | other.0)
    }

    pub fn intersect(self, other: Gc) -> Gc {
        Gc(self.0 & other.0)
    }

    pub fn is_contradiction(self) -> bool {
        self.0 == 0
    }

    /// Whether every pair admitted by `self` is admitted by `other`.
    pub fn is_subset_of(self, other: Gc) -> bool {
        self.0 & !other.0 == 0
    }

    /// Whether `self` is strictly more informative than `other`.
    pub fn refines(self, other: Gc) -> bool {
        self.is_subset_of(other) && self != other
    }

    /// Whether the signed difference of the condition is known.
    pub fn is_grounded(self) -> bool {
        !self.is_contradiction() && (self.is_subset_of(Gc::DASH) || self == Gc::U || self == Gc::N)
    }

    /// The signed difference *x* − *x'* of a grounded condition.
    pub fn signed_difference(self) -> Option<i8> {
        match self {
            Gc::U => Some(1),
            Gc::N => Some(-1),
            _ if self.is_grounded() => Some(0),
            _ => None,
        }
    }

    /// The condition of all pairs with the given signed difference.
    pub fn from_signed_difference(difference: i8) -> Gc {
        match difference.signum() {
            1 => Gc::U,
            -1 => Gc::N,
            _ => Gc::DASH,
        }
    }

    /// The signed differences of pairs admitted by the condition, in ascending order.
    pub fn signed_differences(self) -> impl Iterator<Item = i8> {
        [-1, 0, 1]
            .into_iter()
            .filter(move |d| !self.intersect(Gc::from_signed_difference(*d)).is_contradiction())
    }

    /// The (unsigned) difference *x* ⊕ *x'*, if every admitted pair agrees on it.
    pub fn difference(self) -> Option<bool> {
        match self {
            _ if self.is_contradiction() => None,
            _ if self.is_subset_of(Gc::DASH) => Some(false),
            _ if self.is_subset_of(Gc::X) => Some(true),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::fmt::Debug for Gc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Reads a string of conditions, if every character is a condition.
pub fn parse_gc_string(string: &str) -> Option<Vec<Gc>> {
    string.chars().map(Gc::from_char).collect()
}

/// Writes a string of conditions.
pub fn gc_string(conditions: &[Gc]) -> String {
    conditions.iter().map(|gc| gc.to_char()).collect()
}

#[cfg(test)]
mod gc_tests {
    use super::*;

    #[test]
    fn chars_round_trip() {
        for mask in 0..16 {
            let gc = Gc::from_mask(mask);
            assert_eq!(Gc::from_char(gc.to_char()), Some(gc));
        }
        assert_eq!(Gc::from_char('z'), None);
    }

    #[test]
    fn pairs_of_named_conditions() {
        assert_eq!(Gc::U.pairs().collect::<Vec<_>>(), vec![(true, false)]);
        assert_eq!(Gc::N.pairs().collect::<Vec<_>>(), vec![(false, true)]);
        assert_eq!(
            Gc::DASH.pairs().collect::<Vec<_>>(),
            vec![(false, false), (true, true)]
        );
        assert_eq!(Gc::pair(true, true), Gc::ONE);
        assert_eq!(Gc::pair(false, false), Gc::ZERO);
    }

    #[test]
    fn grounded() {
        let grounded = "01un-".chars().map(|c| Gc::from_char(c).unwrap());
        assert!(grounded.into_iter().all(|gc| gc.is_grounded()));

        let ungrounded = "?x3BDE#".chars().map(|c| Gc::from_char(c).unwrap());
        assert!(ungrounded.into_iter().all(|gc| !gc.is_grounded()));
    }

    #[test]
    fn signed_differences() {
        let b = Gc::from_char('B').unwrap();
        assert_eq!(b.signed_differences().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(Gc::ANY.signed_differences().collect::<Vec<_>>(), vec![-1, 0, 1]);
        assert_eq!(Gc::X.difference(), Some(true));
        assert_eq!(Gc::ONE.difference(), Some(false));
        assert_eq!(Gc::ANY.difference(), None);
    }

    #[test]
    fn refinement_is_strict() {
        assert!(Gc::ONE.refines(Gc::DASH));
        assert!(!Gc::DASH.refines(Gc::DASH));
        assert!(!Gc::U.refines(Gc::N));
    }
}
