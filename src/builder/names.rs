//! Names of configuration entries.

use crate::{structures::step::Role, types::err::BuildError};

/// A configuration entry, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    /// The number of rounds.
    Order,

    /// The first identifier of the zero sentinel.
    Zero,

    /// The first identifier of a bit, or the identifier of a single slot of a bit.
    Bit {
        role: Role,
        round: i32,
        col: usize,
        slot: Option<usize>,
    },
}

/// Parses a name as `order`, `zero`, `<role>_<round>_<col>`, or `<role>_<round>_<col>_<f|g>`.
///
/// ```rust
/// # use otter_sha::builder::names::{parse_name, Entry};
/// # use otter_sha::structures::step::Role;
/// assert_eq!(
///     parse_name("Tc2_12_31"),
///     Ok(Entry::Bit { role: Role::TCarryTwo, round: 12, col: 31, slot: None })
/// );
/// assert_eq!(
///     parse_name("E_-3_0_g"),
///     Ok(Entry::Bit { role: Role::E, round: -3, col: 0, slot: Some(1) })
/// );
/// ```
pub fn parse_name(name: &str) -> Result<Entry, BuildError> {
    match name {
        "order" => return Ok(Entry::Order),
        "zero" => return Ok(Entry::Zero),
        _ => {}
    }

    let malformed = || BuildError::MalformedName(name.to_string());

    let parts = name.split('_').collect::<Vec<_>>();
    let (role, round, col, suffix) = match parts[..] {
        [role, round, col] => (role, round, col, None),
        [role, round, col, suffix] => (role, round, col, Some(suffix)),
        _ => return Err(malformed()),
    };

    let Some(role) = Role::from_name(role) else {
        return Err(BuildError::UnknownRole(role.to_string()));
    };
    let round = round.parse::<i32>().map_err(|_| malformed())?;
    let col = col.parse::<usize>().map_err(|_| malformed())?;
    let slot = match suffix {
        None => None,
        Some("f") => Some(0),
        Some("g") => Some(1),
        Some(_) => return Err(malformed()),
    };

    Ok(Entry::Bit {
        role,
        round,
        col,
        slot,
    })
}

#[cfg(test)]
mod names_tests {
    use super::*;

    #[test]
    fn special_names() {
        assert_eq!(parse_name("order"), Ok(Entry::Order));
        assert_eq!(parse_name("zero"), Ok(Entry::Zero));
    }

    #[test]
    fn malformed() {
        assert_eq!(
            parse_name("A_0"),
            Err(BuildError::MalformedName("A_0".to_string()))
        );
        assert_eq!(
            parse_name("A_x_0"),
            Err(BuildError::MalformedName("A_x_0".to_string()))
        );
        assert_eq!(
            parse_name("A_0_0_h"),
            Err(BuildError::MalformedName("A_0_0_h".to_string()))
        );
        assert_eq!(
            parse_name("Q_0_0"),
            Err(BuildError::UnknownRole("Q".to_string()))
        );
    }
}
