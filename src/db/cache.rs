/*!
Caches of propagation results.

Bitwise propagation of a column depends only on the kind of the operation and the conditions of the column, and likewise wordwise derivation depends only on the kind of the sum and the conditions of its words.
So, results are cached by those, without regard to which atoms the conditions were read from.

A cache is cleared whenever an insertion would take it beyond its limit.

The bitwise cache may also be seeded from a rule database, with [load_rules](Cache::load_rules).
Each record of a rule database is a line `<op> <inputs> <outputs>`, with `<op>` one of `xor3`, `maj`, `ch`, or `add`, and the patterns written as [condition strings](crate::structures::gc::parse_gc_string).
A record is taken as the result of propagating the inputs against outputs which are each `?`, and a record whose outputs contain `#` is taken as a contradiction.

```rust
# use otter_sha::db::cache::BitCache;
let mut cache = BitCache::new(64);
let rules = "xor3 --- ?\nadd -0n10n ???\n";
assert_eq!(cache.load_rules(rules.as_bytes()), Ok(2));
assert_eq!(cache.len(), 2);
```
*/

use std::{collections::HashMap, hash::Hash, io::BufRead};

use crate::{
    misc::log::targets::{self},
    procedures::{bitwise::ColumnOutcome, wordwise::Derivation},
    structures::{
        gc::{parse_gc_string, Gc},
        operation::{OpKind, SumKind},
    },
    types::err::{self, ErrorKind},
};

/// A cache, cleared when full.
#[derive(Clone, Debug)]
pub struct Cache<K, V> {
    map: HashMap<K, V>,
    limit: usize,

    /// A count of lookups which found an entry.
    pub hits: usize,

    /// A count of lookups which found nothing.
    pub misses: usize,

    /// A count of clears due to the limit.
    pub clears: usize,
}

/// The key of a bitwise propagation: the kind of operation, and the conditions of the inputs and outputs of a column.
pub type BitKey = (OpKind, Vec<Gc>, Vec<Gc>);

/// Bitwise propagation results, where `None` records a contradiction.
pub type BitCache = Cache<BitKey, Option<ColumnOutcome>>;

/// The key of a wordwise derivation: the kind of sum, and the concatenated conditions of each word of the sum.
pub type WordKey = (SumKind, Vec<Gc>);

pub type WordCache = Cache<WordKey, Derivation>;

impl<K: Eq + Hash, V: Clone> Cache<K, V> {
    pub fn new(limit: usize) -> Self {
        Cache {
            map: HashMap::default(),
            limit,
            hits: 0,
            misses: 0,
            clears: 0,
        }
    }

    /// A copy of the value cached for `key`, if any.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.map.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Caches `value` for `key`, first clearing the cache if it is full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.limit == 0 {
            return;
        }
        if self.map.len() >= self.limit && !self.map.contains_key(&key) {
            log::debug!(target: targets::CACHE, "Cleared at {} entries", self.map.len());
            self.map.clear();
            self.clears += 1;
        }
        self.map.insert(key, value);
    }

    /// The cached value for `key`, or else the result of `f`, which is then cached.
    pub fn get_or_insert_with(&mut self, key: K, f: impl FnOnce(&K) -> V) -> V {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = f(&key);
        self.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Cache<BitKey, Option<ColumnOutcome>> {
    /// Seeds the cache from a rule database, returning the number of records read.
    pub fn load_rules(&mut self, reader: impl BufRead) -> Result<usize, ErrorKind> {
        let mut count = 0;
        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let Ok(line) = line else {
                return Err(err::ParseError::Line(number).into());
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields = line.split_whitespace().collect::<Vec<_>>();
            let [name, inputs, outputs] = fields[..] else {
                return Err(err::ParseError::Line(number).into());
            };

            let Some(inputs) = parse_gc_string(inputs) else {
                return Err(err::ParseError::Pattern(number).into());
            };
            let Some(outputs) = parse_gc_string(outputs) else {
                return Err(err::ParseError::Pattern(number).into());
            };

            let kind = match OpKind::from_name(name, inputs.len()) {
                Some(kind) => kind,
                None if matches!(name, "xor3" | "maj" | "ch" | "add") => {
                    return Err(err::ParseError::Pattern(number).into());
                }
                None => return Err(err::ParseError::UnknownOperation(number).into()),
            };
            if outputs.len() != kind.output_count() {
                return Err(err::ParseError::Pattern(number).into());
            }

            let key = (kind, inputs.clone(), vec![Gc::ANY; outputs.len()]);
            let value = match outputs.iter().any(|gc| gc.is_contradiction()) {
                true => None,
                false => Some(ColumnOutcome {
                    inputs,
                    outputs,
                    relations: Vec::default(),
                }),
            };
            self.insert(key, value);
            count += 1;
        }
        log::info!(target: targets::CACHE, "Loaded {count} rules");
        Ok(count)
    }
}

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[test]
    fn cleared_at_limit() {
        let mut cache: Cache<u32, u32> = Cache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);
        assert_eq!(cache.len(), 2);
        cache.insert(3, 3);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.clears, 1);
        assert_eq!(cache.get(&3), Some(3));
        assert_eq!(cache.get(&1), None);
        assert_eq!((cache.hits, cache.misses), (1, 1));
    }

    #[test]
    fn zero_limit_stores_nothing() {
        let mut cache: Cache<u32, u32> = Cache::new(0);
        assert_eq!(cache.get_or_insert_with(1, |k| k + 1), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn rules_are_keyed_on_open_outputs() {
        let mut cache = BitCache::new(16);
        assert_eq!(cache.load_rules("maj 1-0 #\n\nch u01 n\n".as_bytes()), Ok(2));

        let key = (OpKind::Maj, parse_gc_string("1-0").unwrap(), vec![Gc::ANY]);
        assert_eq!(cache.get(&key), Some(None));

        let key = (OpKind::Ch, parse_gc_string("u01").unwrap(), vec![Gc::ANY]);
        let outcome = cache.get(&key).flatten().unwrap();
        assert_eq!(outcome.outputs, vec![Gc::N]);
    }

    #[test]
    fn malformed_rules() {
        let mut cache = BitCache::new(16);
        assert_eq!(
            cache.load_rules("xor3 --- ?\nxor3 ---".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
        assert_eq!(
            cache.load_rules("sub --- ?".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::UnknownOperation(1)))
        );
        assert_eq!(
            cache.load_rules("xor3 -- ?".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Pattern(1)))
        );
        assert_eq!(
            cache.load_rules("add -Z- ??".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Pattern(1)))
        );
    }
}
