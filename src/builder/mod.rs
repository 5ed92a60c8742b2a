/*!
Tools for building a propagator.

A propagator is built from a sequence of (name, identifier) pairs, each assigning atoms to a named bit.

- `<role>_<round>_<col>` gives the first atom of a bit, and the atoms of the remaining slots of the bit follow consecutively.
- `<role>_<round>_<col>_f` and `<role>_<round>_<col>_g` give the atom of the first or second slot of a bit, under the [li2024](crate::structures::encoding::Encoding::Li2024) encoding.
- `zero` gives the first atom of the zero sentinel.
- `order` gives the number of rounds, and [builds](topology) the topology.

Roles are `A`, `E`, `W`, `S0`, `S1`, `s0`, `s1`, `MAJ`, `CH`, `T`, `K`, and the carries `Wc1`, `Wc2`, `Tc1`, `Tc2`, `Ec1`, `Ac1`, `Ac2`.

After the order is given, the topology is fixed and any further entry is an error.
Bits which are never mentioned are allowed, and are always `?`.

```rust
# use otter_sha::context::Propagator;
# use otter_sha::config::Config;
# use otter_sha::types::err::{BuildError, ErrorKind};
let mut propagator = Propagator::from_config(Config::default());
assert_eq!(
    propagator.configure("A_0_32", 10),
    Err(ErrorKind::Build(BuildError::ColumnOutOfRange(32)))
);
assert_eq!(
    propagator.configure("order", 1),
    Err(ErrorKind::Build(BuildError::MissingZero))
);
```
*/

pub mod names;
pub mod topology;

use std::io::BufRead;

use crate::{
    context::GenericPropagator,
    db::{
        assignment::PartialAssignment,
        state::{State, FIRST_ROUND, ORDER_MAX},
        var_info::VarInfo,
    },
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        encoding::Encoding,
        word::{BitRef, Word},
    },
    types::err::{self, BuildError, ErrorKind},
};

use names::{parse_name, Entry};

/// The atoms of `count` consecutive slots from `first`.
fn consecutive_atoms(first: i64, count: usize) -> Result<Vec<Atom>, BuildError> {
    let last = first.checked_add(count as i64 - 1);
    match last {
        Some(last) if first >= 1 && last <= ATOM_MAX as i64 => {
            Ok((0..count as i64).map(|offset| (first + offset) as Atom).collect())
        }
        _ => Err(BuildError::InvalidIdentifier(first)),
    }
}

impl State {
    /// Applies a configuration entry, returning true if the entry built the topology.
    pub fn configure(&mut self, name: &str, value: i64) -> Result<bool, ErrorKind> {
        if self.is_built() {
            return Err(BuildError::AlreadyBuilt.into());
        }

        match parse_name(name)? {
            Entry::Order => {
                if !(1..=ORDER_MAX as i64).contains(&value) {
                    return Err(BuildError::InvalidOrder(value).into());
                }
                self.build(value as usize)?;
                Ok(true)
            }

            Entry::Zero => {
                let mut atoms = [0; 4];
                for (slot, atom) in consecutive_atoms(value, self.encoding.slots())?
                    .into_iter()
                    .enumerate()
                {
                    if self.var_index.get(atom).is_some() {
                        return Err(BuildError::DuplicateAtom(atom).into());
                    }
                    atoms[slot] = atom;
                }
                self.zero_atoms = Some(atoms);
                Ok(false)
            }

            Entry::Bit {
                role,
                round,
                col,
                slot,
            } => {
                if round < FIRST_ROUND
                    || round >= ORDER_MAX as i32
                    || (!role.is_register() && round < 0)
                {
                    return Err(BuildError::RoundOutOfRange(round).into());
                }
                if col >= self.word_size {
                    return Err(BuildError::ColumnOutOfRange(col).into());
                }

                let slotted: Vec<(usize, Atom)> = match slot {
                    Some(_) if self.encoding != Encoding::Li2024 => {
                        return Err(BuildError::MalformedName(name.to_string()).into());
                    }
                    Some(slot) => vec![(slot, consecutive_atoms(value, 1)?[0])],
                    None => consecutive_atoms(value, self.encoding.slots())?
                        .into_iter()
                        .enumerate()
                        .collect(),
                };

                let word = match self.configured.get(&(role, round)) {
                    Some(word) => *word,
                    None => {
                        self.words.push(Word::new(role, round, self.word_size));
                        let word = self.words.len() - 1;
                        self.configured.insert((role, round), word);
                        word
                    }
                };
                let bit = BitRef { word, col };

                for (slot, atom) in slotted {
                    let info = VarInfo {
                        bit,
                        slot,
                        role,
                        round,
                        consumers: Vec::default(),
                        sums: Vec::default(),
                        fixed: false,
                    };
                    if self.is_zero_atom(atom) || !self.var_index.insert(atom, info) {
                        return Err(BuildError::DuplicateAtom(atom).into());
                    }
                    self.words[word].bits[col].atoms[slot] = atom;
                }
                Ok(false)
            }
        }
    }
}

/// Methods for building the propagator.
impl<R: rand::Rng + std::default::Default> GenericPropagator<R> {
    /// Applies a configuration entry.
    /// For details, see [builder](crate::builder).
    pub fn configure(&mut self, name: &str, value: i64) -> Result<(), ErrorKind> {
        match self.state.configure(name, value) {
            Ok(true) => {
                self.assignment = PartialAssignment::new(self.state.var_index.max_atom());
                log::info!(target: targets::BUILDER, "{} atoms tracked", self.state.var_index.iter().count());
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(e) => {
                log::error!(target: targets::BUILDER, "Entry {name} {value}: {e:?}");
                Err(e)
            }
        }
    }

    /// Reads configuration entries, one `<name> <identifier>` pair per line.
    ///
    /// Lines may be prefixed with `c`, as comments of a DIMACS file, and lines which are empty are skipped.
    ///
    /// ```rust
    /// # use otter_sha::context::Propagator;
    /// # use otter_sha::config::Config;
    /// let mut propagator = Propagator::from_config(Config::default());
    /// let entries = "c zero 1\nc A_-4_0 4\n\nW_0_3 7\n";
    /// assert_eq!(propagator.read_configuration(entries.as_bytes()), Ok(3));
    /// ```
    pub fn read_configuration(&mut self, reader: impl BufRead) -> Result<usize, ErrorKind> {
        let mut count = 0;
        for (index, line) in reader.lines().enumerate() {
            let Ok(line) = line else {
                return Err(err::ParseError::Line(index + 1).into());
            };
            let mut fields = line.split_whitespace().peekable();
            if fields.peek() == Some(&"c") {
                fields.next();
            }
            let (name, value) = match (fields.next(), fields.next(), fields.next()) {
                (None, _, _) => continue,
                (Some(name), Some(value), None) => (name, value),
                _ => return Err(err::ParseError::Line(index + 1).into()),
            };
            let Ok(value) = value.parse::<i64>() else {
                return Err(err::ParseError::Line(index + 1).into());
            };
            self.configure(name, value)?;
            count += 1;
        }
        Ok(count)
    }

    /// Seeds the bitwise cache from a rule database.
    /// For details, see [load_rules](crate::db::cache::Cache::load_rules).
    ///
    /// ```rust
    /// # use otter_sha::context::Propagator;
    /// # use otter_sha::config::Config;
    /// let mut propagator = Propagator::from_config(Config::default());
    /// assert_eq!(propagator.read_rules("maj uu? ?\n".as_bytes()), Ok(1));
    /// assert!(propagator.read_rules("mux --- ?\n".as_bytes()).is_err());
    /// ```
    pub fn read_rules(&mut self, reader: impl BufRead) -> Result<usize, ErrorKind> {
        self.bit_cache.load_rules(reader).inspect_err(|e| {
            log::error!(target: targets::CACHE, "Rule database: {e:?}");
        })
    }
}
