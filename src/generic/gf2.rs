//! Rows of bits, read as vectors over GF(2).
//!
//! Addition of rows is exclusive or, and so Gaussian elimination over GF(2) only ever xors one row into another.

/// A fixed length row of bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitRow {
    blocks: Vec<u64>,
    length: usize,
}

impl BitRow {
    /// A row of `length` zeros.
    pub fn zeros(length: usize) -> Self {
        BitRow {
            blocks: vec![0; length.div_ceil(64)],
            length,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn get(&self, index: usize) -> bool {
        (self.blocks[index / 64] >> (index % 64)) & 1 == 1
    }

    pub fn set(&mut self, index: usize, value: bool) {
        match value {
            true => self.blocks[index / 64] |= 1 << (index % 64),
            false => self.blocks[index / 64] &= !(1 << (index % 64)),
        }
    }

    pub fn flip(&mut self, index: usize) {
        self.blocks[index / 64] ^= 1 << (index % 64);
    }

    /// Adds (over GF(2)) `other` to `self`.
    ///
    /// # Soundness
    /// Rows are assumed to be of the same length.
    pub fn xor_assign(&mut self, other: &BitRow) {
        for (block, other_block) in self.blocks.iter_mut().zip(&other.blocks) {
            *block ^= other_block;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.blocks.iter().all(|block| *block == 0)
    }

    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|block| block.count_ones() as usize).sum()
    }

    /// The indicies of set bits, in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.length).filter(|index| self.get(*index))
    }

    /// The index of the lowest set bit, if some bit is set.
    pub fn first_one(&self) -> Option<usize> {
        self.blocks
            .iter()
            .enumerate()
            .find(|(_, block)| **block != 0)
            .map(|(index, block)| index * 64 + block.trailing_zeros() as usize)
    }
}

#[cfg(test)]
mod gf2_tests {
    use super::*;

    #[test]
    fn xor_cancels() {
        let mut row = BitRow::zeros(130);
        row.set(0, true);
        row.set(64, true);
        row.set(129, true);
        assert_eq!(row.count_ones(), 3);
        assert_eq!(row.ones().collect::<Vec<_>>(), vec![0, 64, 129]);

        let copy = row.clone();
        row.xor_assign(&copy);
        assert!(row.is_zero());
        assert_eq!(row.first_one(), None);
    }

    #[test]
    fn first_one_across_blocks() {
        let mut row = BitRow::zeros(100);
        row.flip(70);
        assert_eq!(row.first_one(), Some(70));
        row.flip(70);
        assert!(row.is_zero());
    }
}
