/*!
Exhaustive consistency of two-bit equations, through the left null space of the equations over GF(2).

Equations are the rows of a matrix *A*, with a 1 at the column of each of the two atoms of the equation, and the values of the equations form the right-hand side *v*.
A vector *y* in the left null space of *A* (so *y*<sup>T</sup>*A* = 0) selects a collection of equations whose atoms cancel.
If the values of the selected equations also sum to 1, the collection is jointly inconsistent.

A basis of the left null space is found by eliminating on the augmented matrix [*A* | *I*], as each row whose *A* part is reduced to zero holds a null vector in its *I* part.
If the equations are inconsistent then some basis vector selects an inconsistent collection.
*/

use std::collections::BTreeMap;

use crate::{
    generic::gf2::BitRow,
    structures::{atom::Atom, equation::Equation, literal::CClause},
};

/// Collections of equations, as indicies, selected by a basis of the left null space and inconsistent.
pub fn inconsistent_subsets(equations: &[Equation]) -> Vec<Vec<usize>> {
    let mut columns: BTreeMap<Atom, usize> = BTreeMap::default();
    for equation in equations {
        let next = columns.len();
        columns.entry(equation.a).or_insert(next);
        let next = columns.len();
        columns.entry(equation.b).or_insert(next);
    }
    let width = columns.len();

    let mut rows: Vec<BitRow> = equations
        .iter()
        .enumerate()
        .map(|(index, equation)| {
            let mut row = BitRow::zeros(width + equations.len());
            row.flip(columns[&equation.a]);
            row.flip(columns[&equation.b]);
            row.set(width + index, true);
            row
        })
        .collect();

    let mut rank = 0;
    for column in 0..width {
        let Some(pivot) = (rank..rows.len()).find(|r| rows[*r].get(column)) else {
            continue;
        };
        rows.swap(rank, pivot);
        let pivot_row = rows[rank].clone();
        for (index, row) in rows.iter_mut().enumerate() {
            if index != rank && row.get(column) {
                row.xor_assign(&pivot_row);
            }
        }
        rank += 1;
    }

    rows.iter()
        .skip(rank)
        .filter_map(|row| {
            debug_assert!(row.first_one().map_or(true, |first| first >= width));
            let selected = row
                .ones()
                .filter(|index| *index >= width)
                .map(|index| index - width)
                .collect::<Vec<_>>();
            let parity = selected
                .iter()
                .fold(false, |parity, index| parity ^ equations[*index].value);
            match parity {
                true => Some(selected),
                false => None,
            }
        })
        .collect()
}

/// The union of the antecedents of the selected equations, sorted and without duplicates.
pub fn blocking_clause(equations: &[Equation], selected: &[usize]) -> CClause {
    let mut clause: CClause = selected
        .iter()
        .flat_map(|index| equations[*index].antecedent.iter().copied())
        .collect();
    clause.sort_unstable();
    clause.dedup();
    clause
}

/// The blocking clause of the inconsistent collection with the fewest equations, if any collection is inconsistent.
///
/// Ties between collections of the same weight are broken by the length of the clause.
pub fn shortest_clause(equations: &[Equation]) -> Option<CClause> {
    inconsistent_subsets(equations)
        .into_iter()
        .map(|selected| (selected.len(), blocking_clause(equations, &selected)))
        .min_by_key(|(weight, clause)| (*weight, clause.len()))
        .map(|(_, clause)| clause)
}
