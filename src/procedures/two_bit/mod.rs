/*!
Consistency of two-bit equations.

Bitwise propagation of a column, or wordwise propagation of a sum, may find that the differences of two bits are related, as an [Equation] Δ*a* ⊕ Δ*b* = *v*.
The equations of every column are kept on the operation and the equations of a sum on the sum, each replaced on the next propagation, and an equation is *live* while its antecedent remains false.

Live equations may be jointly inconsistent even though each column is consistent.
For example, Δ1 ⊕ Δ2 = 0, Δ2 ⊕ Δ3 = 0, and Δ1 ⊕ Δ3 = 1.
An inconsistency is blocked by the clause of the antecedents of the inconsistent equations.

Two methods of finding a blocking clause are available, by [TwoBitStrategy]:
- [UnionFind](TwoBitStrategy::UnionFind): [signed sets](signed_sets) detect whether any inconsistency exists, and if so the [kernel] of the equations gives the shortest clause from a basis of inconsistent collections.
- [Graph](TwoBitStrategy::Graph): equations are added to a [graph] one at a time, and a shortest odd cycle closed by an equation gives a clause.

Neither method is complete with respect to the shortest possible clause.

Two-bit reasoning requires a slot holding the difference of a bit, and so is inert for encodings without such a slot.
*/

pub mod graph;
pub mod kernel;
pub mod signed_sets;

use crate::{
    config::TwoBitStrategy,
    context::GenericPropagator,
    misc::log::targets::{self},
    structures::{equation::Equation, literal::CClause},
};

impl<R: rand::Rng + std::default::Default> GenericPropagator<R> {
    /// Every live equation.
    pub fn live_equations(&self) -> Vec<Equation> {
        let columns = self
            .state
            .operations
            .iter()
            .flat_map(|operation| operation.equations.iter().flatten());
        let sums = self.state.sums.iter().flat_map(|sum| sum.equations.iter());
        let mut live: Vec<Equation> = columns
            .chain(sums)
            .filter(|equation| equation.is_live(|literal| self.assignment.literal_value(literal)))
            .cloned()
            .collect();
        live.sort_unstable_by(|a, b| (a.a, a.b, a.value).cmp(&(b.a, b.b, b.value)));
        live
    }

    /// A clause blocking some inconsistent collection of live equations, if any such collection is found.
    pub fn check_two_bit(&mut self) -> Option<CClause> {
        let strategy = self.config.two_bit.value;
        if strategy == TwoBitStrategy::Off || self.state.encoding.difference_slot().is_none() {
            return None;
        }

        self.counters.two_bit_checks += 1;
        let equations = self.live_equations();

        let clause = match strategy {
            TwoBitStrategy::Off => None,

            TwoBitStrategy::UnionFind => match signed_sets::check_consistency(&equations, false).is_empty() {
                true => None,
                false => kernel::shortest_clause(&equations),
            },

            TwoBitStrategy::Graph => graph::graph_clause(&equations),
        };

        match clause {
            Some(clause) if clause.is_empty() => {
                log::warn!(target: targets::TWO_BIT, "Inconsistent equations without antecedents");
                None
            }

            Some(clause) => {
                log::trace!(target: targets::TWO_BIT, "Blocking clause {clause:?} from {} equations", equations.len());
                self.counters.two_bit_conflicts += 1;
                Some(clause)
            }

            None => None,
        }
    }
}
