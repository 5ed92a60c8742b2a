/*!
Consistency of two-bit equations, through cycles of a graph.

Atoms are the vertices of a graph, and each equation an edge labelled with the value of the equation.
A cycle whose labels sum to 1 is inconsistent.

Equations are added one at a time.
Before an equation Δ*a* ⊕ Δ*b* = *v* is added, a breadth-first search over pairs of (vertex, parity) looks for a path from *a* to *b* with parity ¬*v*.
Such a path, closed by the equation, is a shortest inconsistent cycle through the equation, and the antecedents of the equation and of each edge of the path form a blocking clause.
An equation which closes an inconsistent cycle is not added, so the graph always remains consistent.

Of two equations between the same atoms with the same value, the graph keeps the equation with the shorter antecedent.
*/

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

use crate::structures::{atom::Atom, equation::Equation, literal::CClause};

/// A graph of equations, with each edge weighted by the index of an equation.
struct EquationGraph<'e> {
    equations: &'e [Equation],
    graph: UnGraph<Atom, usize>,
    nodes: HashMap<Atom, NodeIndex>,
}

impl<'e> EquationGraph<'e> {
    fn new(equations: &'e [Equation]) -> Self {
        EquationGraph {
            equations,
            graph: UnGraph::default(),
            nodes: HashMap::default(),
        }
    }

    fn node(&mut self, atom: Atom) -> NodeIndex {
        match self.nodes.get(&atom) {
            Some(node) => *node,
            None => {
                let node = self.graph.add_node(atom);
                self.nodes.insert(atom, node);
                node
            }
        }
    }

    /// The equations of a shortest path from `from` to `to` whose values sum to `parity`.
    fn path(&self, from: NodeIndex, to: NodeIndex, parity: bool) -> Option<Vec<usize>> {
        let start = (from, false);
        let mut previous: HashMap<(NodeIndex, bool), ((NodeIndex, bool), usize)> =
            HashMap::default();
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(state) = queue.pop_front() {
            if state == (to, parity) {
                let mut path = Vec::default();
                let mut current = state;
                while let Some((before, equation)) = previous.get(&current) {
                    path.push(*equation);
                    current = *before;
                }
                return Some(path);
            }

            let (node, sign) = state;
            for edge in self.graph.edges(node) {
                let other = match edge.source() == node {
                    true => edge.target(),
                    false => edge.source(),
                };
                let next = (other, sign ^ self.equations[*edge.weight()].value);
                if seen.insert(next) {
                    previous.insert(next, (state, *edge.weight()));
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Adds the equation at `index`, or returns a blocking clause if the equation closes an inconsistent cycle.
    fn add(&mut self, index: usize) -> Option<CClause> {
        let equations = self.equations;
        let equation = &equations[index];
        let a = self.node(equation.a);
        let b = self.node(equation.b);

        if a == b {
            return match equation.value {
                true => Some(clause_of(equations, &[index])),
                false => None,
            };
        }

        if let Some(path) = self.path(a, b, !equation.value) {
            let mut selected = path;
            selected.push(index);
            return Some(clause_of(equations, &selected));
        }

        match self.graph.find_edge(a, b) {
            Some(edge) => {
                let kept = self.graph[edge];
                if equation.antecedent.len() < equations[kept].antecedent.len() {
                    self.graph[edge] = index;
                }
            }
            None => {
                self.graph.add_edge(a, b, index);
            }
        }
        None
    }
}

fn clause_of(equations: &[Equation], selected: &[usize]) -> CClause {
    let mut clause: CClause = selected
        .iter()
        .flat_map(|index| equations[*index].antecedent.iter().copied())
        .collect();
    clause.sort_unstable();
    clause.dedup();
    clause
}

/// The shortest blocking clause found while adding each equation in turn to a graph, if any.
pub fn graph_clause(equations: &[Equation]) -> Option<CClause> {
    let mut graph = EquationGraph::new(equations);
    let mut shortest: Option<CClause> = None;
    for index in 0..equations.len() {
        if let Some(clause) = graph.add(index) {
            match &shortest {
                Some(kept) if kept.len() <= clause.len() => {}
                _ => shortest = Some(clause),
            }
        }
    }
    shortest
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn square() {
        let equations = [
            Equation::new(1, 2, false, vec![-10]),
            Equation::new(2, 3, false, vec![-11]),
            Equation::new(3, 4, false, vec![-12]),
            Equation::new(1, 4, true, vec![-13]),
        ];
        assert_eq!(graph_clause(&equations), Some(vec![-13, -12, -11, -10]));
    }

    #[test]
    fn shortcut_is_preferred() {
        let equations = [
            Equation::new(1, 2, true, vec![-10]),
            Equation::new(2, 3, true, vec![-11]),
            Equation::new(3, 4, true, vec![-12]),
            Equation::new(1, 3, false, vec![-14]),
            Equation::new(1, 4, false, vec![-13]),
        ];
        // 1 − 3 − 4 closes with two edges, rather than three.
        assert_eq!(graph_clause(&equations), Some(vec![-14, -13, -12]));
    }

    #[test]
    fn shorter_antecedent_is_kept() {
        let equations = [
            Equation::new(1, 2, true, vec![-10, -11, -12]),
            Equation::new(2, 1, true, vec![-20]),
            Equation::new(1, 2, false, vec![-30]),
        ];
        assert_eq!(graph_clause(&equations), Some(vec![-30, -20]));
    }

    #[test]
    fn consistent() {
        let equations = [
            Equation::new(1, 2, true, vec![-10]),
            Equation::new(2, 3, true, vec![-11]),
            Equation::new(3, 1, false, vec![-12]),
        ];
        assert_eq!(graph_clause(&equations), None);
    }
}
