/*!
Incremental consistency of two-bit equations, through signed sets.

Each atom belongs to a set of atoms whose differences are related to it, and carries a sign relative to a representative of its set.
So, two atoms in the same set have a known xor: the xor of their signs.

Adding an equation Δ*a* ⊕ Δ*b* = *v* merges the sets of *a* and *b*, flipping the signs of one set if needed.
If *a* and *b* already share a set, the equation is either implied (the xor of their signs is *v*), or contradicts the equations already added.

```rust
# use otter_sha::procedures::two_bit::signed_sets::check_consistency;
# use otter_sha::structures::equation::Equation;
let equations = [
    Equation::new(1, 2, false, vec![]),
    Equation::new(2, 3, false, vec![]),
    Equation::new(3, 4, false, vec![]),
    Equation::new(1, 4, true, vec![]),
];
let conflicts = check_consistency(&equations, false);
assert_eq!(conflicts, vec![Equation::new(1, 4, true, vec![])]);
```
*/

use std::collections::HashMap;

use crate::structures::{atom::Atom, equation::Equation};

/// Disjoint sets of atoms, each atom signed relative to the representative of its set.
#[derive(Clone, Debug, Default)]
pub struct SignedSets {
    /// The parent of each atom which is not a representative, with the sign of the atom relative to the parent.
    parents: HashMap<Atom, (Atom, bool)>,
}

impl SignedSets {
    /// The representative of the set of `atom`, and the sign of `atom` relative to the representative.
    pub fn find(&mut self, atom: Atom) -> (Atom, bool) {
        let mut path = Vec::default();
        let mut current = atom;
        while let Some(&(parent, sign)) = self.parents.get(&current) {
            path.push((current, sign));
            current = parent;
        }

        let mut sign = false;
        for (node, edge) in path.iter().rev() {
            sign ^= edge;
            self.parents.insert(*node, (current, sign));
        }
        (current, sign)
    }

    /// The xor of the differences of `a` and `b`, if known.
    pub fn relation(&mut self, a: Atom, b: Atom) -> Option<bool> {
        let (root_a, sign_a) = self.find(a);
        let (root_b, sign_b) = self.find(b);
        match root_a == root_b {
            true => Some(sign_a ^ sign_b),
            false => None,
        }
    }

    /// Relates `a` and `b` by `value`, returning false if the relation contradicts those already made.
    pub fn relate(&mut self, a: Atom, b: Atom, value: bool) -> bool {
        let (root_a, sign_a) = self.find(a);
        let (root_b, sign_b) = self.find(b);
        if root_a == root_b {
            return sign_a ^ sign_b == value;
        }
        self.parents.insert(root_a, (root_b, sign_a ^ sign_b ^ value));
        true
    }
}

/// Adds each equation in turn, returning those equations which contradict the equations added before them.
///
/// A contradicting equation is not added.
/// Unless `exhaustive`, only the first contradicting equation is returned.
pub fn check_consistency(equations: &[Equation], exhaustive: bool) -> Vec<Equation> {
    let mut sets = SignedSets::default();
    let mut conflicts = Vec::default();
    for equation in equations {
        if !sets.relate(equation.a, equation.b, equation.value) {
            conflicts.push(equation.clone());
            if !exhaustive {
                break;
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod signed_sets_tests {
    use super::*;

    #[test]
    fn relations_compose() {
        let mut sets = SignedSets::default();
        assert!(sets.relate(1, 2, true));
        assert!(sets.relate(3, 2, true));
        assert!(sets.relate(4, 5, false));
        assert_eq!(sets.relation(1, 3), Some(false));
        assert_eq!(sets.relation(1, 4), None);
        assert!(sets.relate(5, 3, true));
        assert_eq!(sets.relation(4, 1), Some(true));
        assert!(!sets.relate(4, 2, true));
    }

    #[test]
    fn self_relation() {
        let equations = [Equation::new(7, 7, true, vec![-1])];
        assert_eq!(check_consistency(&equations, false).len(), 1);
    }

    #[test]
    fn exhaustive_collects_every_conflict() {
        let equations = [
            Equation::new(1, 2, false, vec![]),
            Equation::new(1, 2, true, vec![]),
            Equation::new(3, 4, true, vec![]),
            Equation::new(4, 3, false, vec![]),
        ];
        assert_eq!(check_consistency(&equations, false).len(), 1);
        assert_eq!(check_consistency(&equations, true).len(), 2);
    }
}
