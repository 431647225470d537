use rand::Rng;

/// An axis-aligned square on the playing field.  Coordinates are in field
/// units and refer to the top-left corner.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) size: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32, size: i32) -> Cell {
        Cell { x, y, size }
    }

    /// Return the cell `dx` cells to the right and `dy` cells down from this
    /// one
    pub(crate) fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell {
            x: self.x + dx * self.size,
            y: self.y + dy * self.size,
            ..self
        }
    }

    /// Test whether `other` lies entirely within `self`
    pub(crate) fn contains(self, other: Cell) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.x + other.size <= self.x + self.size
            && other.y + other.size <= self.y + self.size
    }
}

/// The rectangular playing field, anchored at the origin
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) cell_size: i32,
}

impl Field {
    /// Number of grid columns
    pub(crate) fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of grid rows
    pub(crate) fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Test whether `cell` lies entirely within the field
    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x + cell.size <= self.width
            && cell.y + cell.size <= self.height
    }

    /// Return a uniformly random grid-aligned cell inside the field
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let col = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        Cell::new(col * self.cell_size, row * self.cell_size, self.cell_size)
    }

    /// Return the grid `(column, row)` of a grid-aligned cell
    pub(crate) fn grid_position(self, cell: Cell) -> (i32, i32) {
        (cell.x / self.cell_size, cell.y / self.cell_size)
    }
}
