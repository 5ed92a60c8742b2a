/// Which method, if any, is used to check the consistency of two-bit equations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TwoBitStrategy {
    /// Two-bit equations are neither collected nor checked.
    Off,

    /// Signed union-find detection, with the shortest conflict extracted through the GF(2) kernel of the equations.
    UnionFind,

    /// Breadth-first search for a shortest odd cycle through each added equation.
    Graph,
}

impl TwoBitStrategy {
    pub const MIN: TwoBitStrategy = TwoBitStrategy::Off;
    pub const MAX: TwoBitStrategy = TwoBitStrategy::Graph;
}

impl std::fmt::Display for TwoBitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::UnionFind => write!(f, "union_find"),
            Self::Graph => write!(f, "graph"),
        }
    }
}
