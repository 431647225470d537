use super::geometry::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub(crate) fn axis(self) -> Axis {
        match self {
            Orientation::Left | Orientation::Right => Axis::Horizontal,
            Orientation::Up | Orientation::Down => Axis::Vertical,
        }
    }

    /// Return the cell one step from `cell` in this direction.  The result
    /// may lie outside the field.
    pub(crate) fn advance(self, cell: Cell) -> Cell {
        match self {
            Orientation::Up => cell.offset(0, -1),
            Orientation::Down => cell.offset(0, 1),
            Orientation::Left => cell.offset(-1, 0),
            Orientation::Right => cell.offset(1, 0),
        }
    }
}
