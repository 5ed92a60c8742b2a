use otter_sha::{
    generic::random::MinimalPCG32,
    procedures::two_bit::{graph::graph_clause, kernel, signed_sets::check_consistency},
    structures::{equation::Equation, literal::CLiteral},
};

use rand::{Rng, SeedableRng};

/// Equations over a handful of atoms, each with an antecedent unique to the equation.
fn random_equations(rng: &mut MinimalPCG32, atoms: u32, count: usize) -> Vec<Equation> {
    (0..count)
        .map(|index| {
            let a = rng.gen_range(1..=atoms);
            let mut b = rng.gen_range(1..=atoms);
            if a == b {
                b = a % atoms + 1;
            }
            Equation::new(a, b, rng.gen_bool(0.5), vec![-(100 + index as CLiteral)])
        })
        .collect()
}

/// The equations whose antecedents appear in `clause`.
fn selected(equations: &[Equation], clause: &[CLiteral]) -> Vec<Equation> {
    equations
        .iter()
        .filter(|equation| equation.antecedent.iter().all(|literal| clause.contains(literal)))
        .cloned()
        .collect()
}

mod scenarios {
    use super::*;

    #[test]
    fn square_with_one_odd_edge() {
        let equations = [
            Equation::new(1, 2, false, vec![]),
            Equation::new(2, 3, false, vec![]),
            Equation::new(3, 4, false, vec![]),
            Equation::new(1, 4, true, vec![]),
        ];
        assert_eq!(
            check_consistency(&equations, false),
            vec![Equation::new(1, 4, true, vec![])]
        );
    }

    #[test]
    fn clauses_of_a_square() {
        let equations = [
            Equation::new(1, 2, false, vec![-11]),
            Equation::new(2, 3, false, vec![-12, -13]),
            Equation::new(3, 4, false, vec![-14]),
            Equation::new(4, 1, true, vec![-11, -15]),
        ];
        let expected = vec![-15, -14, -13, -12, -11];
        assert_eq!(kernel::shortest_clause(&equations), Some(expected.clone()));
        assert_eq!(graph_clause(&equations), Some(expected));
    }

    #[test]
    fn disjoint_cycles() {
        // Of two inconsistent triangles, the clause of the triangle with fewer antecedent literals is kept.
        let equations = [
            Equation::new(1, 2, true, vec![-21, -22]),
            Equation::new(2, 3, true, vec![-23]),
            Equation::new(3, 1, true, vec![-24]),
            Equation::new(4, 5, true, vec![-31]),
            Equation::new(5, 6, false, vec![-31]),
            Equation::new(6, 4, false, vec![-32]),
        ];
        assert_eq!(kernel::shortest_clause(&equations), Some(vec![-32, -31]));
        assert_eq!(graph_clause(&equations), Some(vec![-32, -31]));
    }
}

mod agreement {
    use super::*;

    #[test]
    fn methods_agree_on_consistency() {
        let mut rng = MinimalPCG32::seed_from_u64(29);
        for _ in 0..200 {
            let count = rng.gen_range(1..12);
            let equations = random_equations(&mut rng, 6, count);

            let consistent = check_consistency(&equations, false).is_empty();
            assert_eq!(
                consistent,
                kernel::inconsistent_subsets(&equations).is_empty(),
                "{equations:?}"
            );
            assert_eq!(consistent, graph_clause(&equations).is_none(), "{equations:?}");
            assert_eq!(consistent, kernel::shortest_clause(&equations).is_none());
        }
    }

    #[test]
    fn clauses_block_inconsistent_equations() {
        let mut rng = MinimalPCG32::seed_from_u64(83);
        for _ in 0..200 {
            let count = rng.gen_range(1..12);
            let equations = random_equations(&mut rng, 6, count);

            for clause in [kernel::shortest_clause(&equations), graph_clause(&equations)]
                .into_iter()
                .flatten()
            {
                let blocked = selected(&equations, &clause);
                assert!(!blocked.is_empty());
                assert!(
                    !check_consistency(&blocked, false).is_empty(),
                    "{clause:?} of {equations:?}"
                );
            }
        }
    }
}
