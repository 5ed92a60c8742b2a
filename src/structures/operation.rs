/*!
Operations, the functional units of the step function.

An [Operation] is identified by its [kind](OpKind) and round, reads [soft words](SoftWord) as inputs, and writes words (through identity views) as outputs.
Operations are bitsliced: the inputs and outputs at column *j* are related by the function of the operation alone, so propagation examines an operation one column at a time.

Additions are bitsliced by treating the carries between columns as words of their own.
The inputs of an addition at column *j* are the addends at *j* followed by the carries into *j*, and the outputs are the bits of the column sum, most significant first.
For example, the addition for T has five addends and two carries in, and so outputs `[carry-2, carry-1, sum]` at each column.

A [SumEquation] is the word-level view of an addition, used by [wordwise propagation](crate::procedures::wordwise).
*/

use crate::structures::{
    equation::Equation,
    step::Role,
    word::{BitRef, SoftWord, WordId},
};

/// An index to an operation.
pub type OpId = usize;

/// An index to a sum equation.
pub type SumId = usize;

/// The kind of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpKind {
    /// The exclusive or of three bits.
    Xor3,

    /// The majority of three bits.
    Maj,

    /// The choice of the second or third bit, by the first.
    Ch,

    /// The sum of some number of bits, written in binary.
    Add(u8),
}

impl OpKind {
    /// The most inputs of an addition, so a column of the addition has at most sixteen positions.
    pub const ADD_INPUTS_MAX: u8 = 12;

    pub fn input_count(self) -> usize {
        match self {
            Self::Xor3 | Self::Maj | Self::Ch => 3,
            Self::Add(inputs) => inputs as usize,
        }
    }

    /// The number of outputs, which for an addition is the number of bits required to write the largest sum.
    pub fn output_count(self) -> usize {
        match self {
            Self::Xor3 | Self::Maj | Self::Ch => 1,
            Self::Add(inputs) => (u8::BITS - inputs.leading_zeros()) as usize,
        }
    }

    /// Writes the outputs of the operation on `inputs` to `outputs`.
    ///
    /// # Soundness
    /// The lengths of `inputs` and `outputs` are assumed to match the kind.
    pub fn evaluate(self, inputs: &[bool], outputs: &mut [bool]) {
        match self {
            Self::Xor3 => outputs[0] = inputs[0] ^ inputs[1] ^ inputs[2],
            Self::Maj => {
                outputs[0] = (inputs[0] & inputs[1]) | (inputs[0] & inputs[2]) | (inputs[1] & inputs[2])
            }
            Self::Ch => outputs[0] = (inputs[0] & inputs[1]) | (!inputs[0] & inputs[2]),
            Self::Add(_) => {
                let sum = inputs.iter().filter(|input| **input).count();
                let width = outputs.len();
                for (index, output) in outputs.iter_mut().enumerate() {
                    *output = (sum >> (width - 1 - index)) & 1 == 1;
                }
            }
        }
    }

    /// The name of the kind, as used in a rule database.
    pub fn name(self) -> &'static str {
        match self {
            Self::Xor3 => "xor3",
            Self::Maj => "maj",
            Self::Ch => "ch",
            Self::Add(_) => "add",
        }
    }

    /// The kind with the given name, taking `inputs` as the arity of an addition.
    pub fn from_name(name: &str, inputs: usize) -> Option<OpKind> {
        match name {
            "xor3" if inputs == 3 => Some(Self::Xor3),
            "maj" if inputs == 3 => Some(Self::Maj),
            "ch" if inputs == 3 => Some(Self::Ch),
            "add" if (1..=Self::ADD_INPUTS_MAX as usize).contains(&inputs) => {
                Some(Self::Add(inputs as u8))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add(inputs) => write!(f, "add{inputs}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// An operation of the step function.
#[derive(Clone, Debug)]
pub struct Operation {
    pub kind: OpKind,
    pub round: i32,

    /// The role of the (primary) output of the operation.
    pub role: Role,

    pub inputs: Vec<SoftWord>,
    pub outputs: Vec<SoftWord>,

    /// The two-bit equations found on the last propagation of each column.
    pub equations: Vec<Vec<Equation>>,
}

impl Operation {
    pub fn new(
        kind: OpKind,
        round: i32,
        role: Role,
        inputs: Vec<SoftWord>,
        outputs: Vec<SoftWord>,
        size: usize,
    ) -> Self {
        debug_assert_eq!(inputs.len(), kind.input_count());
        debug_assert_eq!(outputs.len(), kind.output_count());
        Operation {
            kind,
            round,
            role,
            inputs,
            outputs,
            equations: vec![Vec::default(); size],
        }
    }

    /// The input bits at `col`.
    pub fn input_bits(&self, col: usize) -> Vec<BitRef> {
        self.inputs.iter().map(|input| input.get(col)).collect()
    }

    /// The output bits at `col`.
    pub fn output_bits(&self, col: usize) -> Vec<BitRef> {
        self.outputs.iter().map(|output| output.get(col)).collect()
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]@{}", self.kind, self.role, self.round)
    }
}

/// The kind of a sum equation, by the word defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SumKind {
    W,
    T,
    E,
    A,
}

/// A word-level addition: the sum of the positive words is the sum of the negative words, modulo 2^n.
#[derive(Clone, Debug)]
pub struct SumEquation {
    pub kind: SumKind,
    pub round: i32,
    pub positive: Vec<WordId>,
    pub negative: Vec<WordId>,

    /// The two-bit equations found on the last refining propagation of the sum.
    pub equations: Vec<Equation>,
}

impl SumEquation {
    /// Every word of the equation, positive words first.
    pub fn words(&self) -> impl Iterator<Item = WordId> + '_ {
        self.positive.iter().chain(self.negative.iter()).copied()
    }
}

#[cfg(test)]
mod operation_tests {
    use super::*;

    #[test]
    fn add_widths() {
        assert_eq!(OpKind::Add(2).output_count(), 2);
        assert_eq!(OpKind::Add(3).output_count(), 2);
        assert_eq!(OpKind::Add(5).output_count(), 3);
        assert_eq!(OpKind::Add(7).output_count(), 3);
    }

    #[test]
    fn add_writes_most_significant_first() {
        let mut outputs = [false; 3];
        OpKind::Add(7).evaluate(&[true, true, false, true, true, false, false], &mut outputs);
        assert_eq!(outputs, [true, false, false]);
    }

    #[test]
    fn ch_chooses() {
        let mut output = [false];
        OpKind::Ch.evaluate(&[true, true, false], &mut output);
        assert!(output[0]);
        OpKind::Ch.evaluate(&[false, true, false], &mut output);
        assert!(!output[0]);
    }
}
