/*!
Two-bit equations.

A two-bit equation records that the differences of two bits are related: Δ*a* ⊕ Δ*b* = *value*.
Here, *a* and *b* are the atoms of the difference slots of the bits (see [Encoding::difference_slot](crate::structures::encoding::Encoding::difference_slot)).

Each equation carries an antecedent, a clause whose literals are all false on the valuation the equation was found on.
So, the antecedent reads "these assignments are incompatible with the negation of the equation", and the union of the antecedents of a jointly inconsistent collection of equations is a clause which blocks the collection.

An equation holds only so long as its antecedent is false, and is discarded once any literal of the antecedent is unassigned or flipped.
*/

use crate::structures::{
    atom::Atom,
    literal::{CClause, CLiteral},
};

/// A two-bit equation, Δ`a` ⊕ Δ`b` = `value`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Equation {
    pub a: Atom,
    pub b: Atom,
    pub value: bool,
    pub antecedent: CClause,
}

impl Equation {
    /// An equation with the atoms ordered, so `a` < `b`.
    pub fn new(a: Atom, b: Atom, value: bool, antecedent: CClause) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Equation {
            a,
            b,
            value,
            antecedent,
        }
    }

    /// Whether the antecedent of the equation remains false, given the value of a literal.
    pub fn is_live(&self, value_of: impl Fn(CLiteral) -> Option<bool>) -> bool {
        self.antecedent
            .iter()
            .all(|literal| value_of(*literal) == Some(false))
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Δ{} ⊕ Δ{} = {}", self.a, self.b, self.value as u8)
    }
}
