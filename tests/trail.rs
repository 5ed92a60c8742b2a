use otter_sha::{
    db::{
        assignment::PartialAssignment,
        trail::Trail,
        var_info::{VarIndex, VarInfo},
    },
    structures::{literal::CLiteral, step::Role, word::BitRef},
};

/// An index tracking atoms 1 to 12, three slots to a bit.
fn index() -> VarIndex {
    let mut index = VarIndex::default();
    for atom in 1..=12 {
        let info = VarInfo {
            bit: BitRef {
                word: 1,
                col: (atom as usize - 1) / 3,
            },
            slot: (atom as usize - 1) % 3,
            role: Role::A,
            round: 0,
            consumers: Vec::default(),
            sums: Vec::default(),
            fixed: false,
        };
        assert!(index.insert(atom, info));
    }
    index
}

/// Assigns literals level by level, opening a new level before each but the first.
fn assign_levels(levels: &[&[CLiteral]], index: &VarIndex) -> (PartialAssignment, Trail) {
    let mut assignment = PartialAssignment::new(index.max_atom());
    let mut trail = Trail::default();
    for (level, literals) in levels.iter().enumerate() {
        if level > 0 {
            trail.push_level();
        }
        for literal in literals.iter() {
            assignment.assign(*literal, index);
            trail.store_assignment(*literal);
        }
    }
    (assignment, trail)
}

mod backtracking {
    use super::*;

    #[test]
    fn backtrack_is_idempotent() {
        let index = index();
        let levels: [&[CLiteral]; 4] = [&[1, -2], &[3, 5, -7], &[-9, 4], &[11, -12, 6]];

        let (mut assignment, mut trail) = assign_levels(&levels, &index);
        for literal in trail.pop_to(1) {
            assignment.unassign(literal, &index);
        }

        let (fresh, fresh_trail) = assign_levels(&levels[..2], &index);
        assert_eq!(assignment, fresh);
        assert_eq!(trail.assignments(), fresh_trail.assignments());
        assert_eq!(trail.level(), 1);
    }

    #[test]
    fn fixed_atoms_survive() {
        let mut index = index();
        let (mut assignment, mut trail) = assign_levels(&[&[], &[8, -10]], &index);
        if let Some(info) = index.get_mut(8) {
            info.fixed = true;
        }

        for literal in trail.pop_to(0) {
            assignment.unassign(literal, &index);
        }
        assert_eq!(assignment.value_of(8), Some(true));
        assert_eq!(assignment.value_of(10), None);
    }

    #[test]
    fn dirty_bits_follow_changes() {
        let index = index();
        let (mut assignment, mut trail) = assign_levels(&[&[1], &[2, 5]], &index);
        assert_eq!(
            assignment.take_dirty(),
            vec![BitRef { word: 1, col: 0 }, BitRef { word: 1, col: 1 }]
        );

        for literal in trail.pop_to(0) {
            assignment.unassign(literal, &index);
        }
        assert_eq!(
            assignment.take_dirty(),
            vec![BitRef { word: 1, col: 1 }, BitRef { word: 1, col: 0 }]
        );
        assert!(!assignment.has_dirty());
    }
}
