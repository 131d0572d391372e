use std::cmp::Ordering;
use std::ops::Sub;

/// Integer pixel coordinate in screen space.
///
/// `x` is the column and `y` the row; `(0, 0)` is the first pixel of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

impl IVec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orders points by row first, then by column.
    pub fn cmp_yx(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl Sub<IVec2> for IVec2 {
    type Output = IVec2;

    fn sub(self, rhs: IVec2) -> Self::Output {
        IVec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
