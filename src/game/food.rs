use super::geometry::{Cell, Field};
use crate::consts;
use rand::Rng;

/// A single food item on the field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    cell: Cell,
    value: u32,
    /// Frames drawn since the food was last placed, saturating at
    /// [`FOOD_GROW_IN_FRAMES`][consts::FOOD_GROW_IN_FRAMES]
    grown: u8,
}

impl Food {
    /// Create a food item at a random position in `field`
    pub(crate) fn new<R: Rng + ?Sized>(rng: &mut R, field: Field) -> Food {
        let origin = Cell::new(0, 0, field.cell_size);
        let mut food = Food::at(origin, *consts::FOOD_VALUES.start());
        food.respawn(rng, field);
        food
    }

    /// Create a food item at a fixed position with a fixed value
    pub(crate) fn at(cell: Cell, value: u32) -> Food {
        Food {
            cell,
            value,
            grown: 0,
        }
    }

    pub(crate) fn cell(&self) -> Cell {
        self.cell
    }

    /// Number of points the food is worth
    pub(crate) fn value(&self) -> u32 {
        self.value
    }

    /// Move the food to a uniformly random cell in `field` and give it a new
    /// random value.  The new cell may be under the snake.
    pub(crate) fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, field: Field) {
        self.cell = field.random_cell(rng);
        self.value = rng.random_range(consts::FOOD_VALUES);
        self.grown = 0;
    }

    /// Advance the grow-in animation by one frame
    pub(crate) fn grow_in(&mut self) {
        if self.grown < consts::FOOD_GROW_IN_FRAMES {
            self.grown += 1;
        }
    }

    /// Return the glyphs to draw the food with at its current size
    pub(crate) fn symbol(&self) -> &'static str {
        let stages = consts::FOOD_SYMBOLS.len();
        let frames = usize::from(consts::FOOD_GROW_IN_FRAMES) + 1;
        let i = usize::from(self.grown) * stages / frames;
        consts::FOOD_SYMBOLS[i.min(stages - 1)]
    }
}
