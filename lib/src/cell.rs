/// One position of the parsed layout grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum LayoutCell {
    /// A playable hole carrying its dense cell index, assigned in row-major
    /// scan order.
    Hole { index: usize, goal: bool },
    /// A position pegs can never occupy.
    #[default]
    Void,
}

impl LayoutCell {
    pub(crate) fn index(&self) -> Option<usize> {
        match self {
            Self::Hole { index, .. } => Some(*index),
            Self::Void => None,
        }
    }
}
