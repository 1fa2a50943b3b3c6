//! The fixed directional action set.

use std::fmt;

/// One of the four directional action slots available at every node.
///
/// An action is *not* a compass direction: `Action(0)` means "the outgoing
/// edge whose locally-sorted exit rank is 0 at the current node", whichever
/// physical edge that happens to be.  See the crate docs for the sort order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action(pub u8);

impl Action {
    /// Size of the fixed action set.
    pub const COUNT: usize = 4;

    /// All actions in ascending slot order.
    pub const ALL: [Action; Action::COUNT] = [Action(0), Action(1), Action(2), Action(3)];

    /// Cast to `usize` for direct use as a Q-table column index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}
