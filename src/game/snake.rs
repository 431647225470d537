use super::direction::Orientation;
use super::food::Food;
use super::geometry::{Cell, Field};
use crate::config::GameConfig;
use crate::consts;
use std::collections::VecDeque;
use std::time::Duration;

/// The player's snake.
///
/// All cells are in field units relative to the top-left corner of the
/// field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells making up the snake, head first
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake last moved (or will move, if it has
    /// not moved yet)
    pub(super) orientation: Orientation,

    /// A turn requested since the last movement, applied by the next one
    pub(super) pending: Option<Orientation>,

    /// Time between movements
    pub(super) interval: Duration,

    /// Total value of the food eaten so far
    pub(super) score: u32,

    cell_size: i32,
    initial_interval: Duration,
    min_interval: Duration,
    interval_step: Duration,
}

impl Snake {
    /// Create a snake of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// cells in the top-left corner of the field, facing right
    pub(crate) fn new(config: &GameConfig) -> Snake {
        let mut snake = Snake {
            body: VecDeque::new(),
            orientation: Orientation::Right,
            pending: None,
            interval: config.initial_interval,
            score: 0,
            cell_size: config.field.cell_size,
            initial_interval: config.initial_interval,
            min_interval: config.min_interval,
            interval_step: config.interval_step,
        };
        snake.reset();
        snake
    }

    /// Restore the snake to its starting length, position, direction, speed,
    /// and score
    pub(crate) fn reset(&mut self) {
        self.orientation = Orientation::Right;
        self.pending = None;
        self.score = 0;
        self.interval = self.initial_interval;
        self.body.clear();
        for _ in 0..consts::INITIAL_SNAKE_LENGTH {
            self.grow();
        }
    }

    pub(crate) fn head(&self) -> Cell {
        // `body` is never empty outside of `reset()`
        self.body[0]
    }

    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Request that the snake turn to face `requested` on its next movement.
    ///
    /// The request is rejected (and `false` returned) if `requested` lies on
    /// the same axis as the direction of the last movement, so the snake can
    /// never double back on itself, not even by two quick turns between
    /// movements.
    pub(crate) fn change_orientation(&mut self, requested: Orientation) -> bool {
        if requested.axis() == self.orientation.axis() {
            false
        } else {
            self.pending = Some(requested);
            true
        }
    }

    /// Move the snake forwards one cell within `field`.  Returns `false` if
    /// the snake died by leaving the field or running into itself, in which
    /// case the body is left exactly as it was before the call.
    pub(crate) fn advance(&mut self, field: Field) -> bool {
        if let Some(o) = self.pending.take() {
            self.orientation = o;
        }
        let head = self.orientation.advance(self.head());
        self.body.push_front(head);
        let tail = self.body.pop_back();
        if self.dead(field) {
            // Discard the fatal head and put the tail back
            self.body.pop_front();
            self.body.extend(tail);
            false
        } else {
            true
        }
    }

    /// If the snake's head is on top of `food`, eat it: add its value to the
    /// score, speed up (unless already at the speed limit), and grow by one
    /// cell.
    ///
    /// Growing puts a new head one cell ahead of the current one.  If that
    /// cell is outside `field` or already part of the body, the snake chokes:
    /// nothing about it changes and [`Eating::Choked`] is returned.
    pub(crate) fn check_eaten(&mut self, food: &Food, field: Field) -> Eating {
        if !self.head().contains(food.cell()) {
            return Eating::Missed;
        }
        let next = self.orientation.advance(self.head());
        if !field.contains(next) || self.body.contains(&next) {
            return Eating::Choked;
        }
        self.score += food.value();
        if self.interval > self.min_interval {
            self.interval = self
                .interval
                .saturating_sub(self.interval_step)
                .max(self.min_interval);
        }
        self.grow();
        Eating::Ate
    }

    /// Add a new head one cell ahead of the current one
    fn grow(&mut self) {
        let head = match self.body.front() {
            Some(&head) => self.orientation.advance(head),
            None => self
                .orientation
                .advance(Cell::new(-self.cell_size, 0, self.cell_size)),
        };
        self.body.push_front(head);
    }

    fn dead(&self, field: Field) -> bool {
        let head = self.head();
        !field.contains(head) || self.body.iter().skip(1).any(|&c| c == head)
    }
}

/// Outcome of [`Snake::check_eaten()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Eating {
    /// The food is not under the head
    Missed,
    Ate,
    /// The food is under the head, but growing would take the snake off the
    /// field or into itself
    Choked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snake_with(cells: &[(i32, i32)], orientation: Orientation) -> Snake {
        let mut snake = Snake::new(&GameConfig::default());
        snake.body = cells.iter().map(|&(x, y)| Cell::new(x, y, 20)).collect();
        snake.orientation = orientation;
        snake
    }

    fn positions(snake: &Snake) -> Vec<(i32, i32)> {
        snake.body().iter().map(|c| (c.x, c.y)).collect()
    }

    fn field() -> Field {
        GameConfig::default().field
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(&GameConfig::default());
        assert_eq!(positions(&snake), [(40, 0), (20, 0), (0, 0)]);
        assert_eq!(snake.orientation(), Orientation::Right);
        assert_eq!(snake.score(), 0);
        assert_eq!(snake.interval(), Duration::from_millis(300));
    }

    #[test]
    fn reset_restores_everything() {
        let mut snake = snake_with(
            &[(200, 200), (200, 220), (200, 240), (200, 260)],
            Orientation::Up,
        );
        snake.score = 17;
        snake.interval = Duration::from_millis(200);
        snake.pending = Some(Orientation::Left);
        snake.reset();
        assert_eq!(positions(&snake), [(40, 0), (20, 0), (0, 0)]);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.orientation(), Orientation::Right);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.score(), 0);
        assert_eq!(snake.interval(), Duration::from_millis(300));
    }

    #[rstest]
    #[case(Orientation::Up, Orientation::Up, false)]
    #[case(Orientation::Up, Orientation::Down, false)]
    #[case(Orientation::Up, Orientation::Left, true)]
    #[case(Orientation::Up, Orientation::Right, true)]
    #[case(Orientation::Down, Orientation::Up, false)]
    #[case(Orientation::Down, Orientation::Down, false)]
    #[case(Orientation::Down, Orientation::Left, true)]
    #[case(Orientation::Down, Orientation::Right, true)]
    #[case(Orientation::Left, Orientation::Up, true)]
    #[case(Orientation::Left, Orientation::Down, true)]
    #[case(Orientation::Left, Orientation::Left, false)]
    #[case(Orientation::Left, Orientation::Right, false)]
    #[case(Orientation::Right, Orientation::Up, true)]
    #[case(Orientation::Right, Orientation::Down, true)]
    #[case(Orientation::Right, Orientation::Left, false)]
    #[case(Orientation::Right, Orientation::Right, false)]
    fn test_change_orientation(
        #[case] current: Orientation,
        #[case] requested: Orientation,
        #[case] accepted: bool,
    ) {
        let mut snake = snake_with(&[(200, 200), (200, 220), (200, 240)], current);
        assert_eq!(snake.change_orientation(requested), accepted);
        let expected = if accepted { requested } else { current };
        assert_eq!(snake.pending.unwrap_or(snake.orientation), expected);
        assert_eq!(snake.orientation(), current);
    }

    #[test]
    fn turn_applies_on_next_advance() {
        let mut snake = Snake::new(&GameConfig::default());
        assert!(snake.change_orientation(Orientation::Down));
        assert_eq!(snake.orientation(), Orientation::Right);
        assert!(snake.advance(field()));
        assert_eq!(snake.orientation(), Orientation::Down);
        assert_eq!(positions(&snake), [(40, 20), (40, 0), (20, 0)]);
    }

    #[test]
    fn no_reversal_by_two_quick_turns() {
        let mut snake = snake_with(&[(200, 200), (180, 200), (160, 200)], Orientation::Right);
        assert!(snake.change_orientation(Orientation::Up));
        // Still validated against the direction of the last movement:
        assert!(!snake.change_orientation(Orientation::Left));
        assert!(snake.advance(field()));
        assert_eq!(snake.head(), Cell::new(200, 180, 20));
    }

    #[test]
    fn later_turn_replaces_earlier() {
        let mut snake = snake_with(&[(200, 200), (180, 200), (160, 200)], Orientation::Right);
        assert!(snake.change_orientation(Orientation::Up));
        assert!(snake.change_orientation(Orientation::Down));
        assert!(snake.advance(field()));
        assert_eq!(snake.head(), Cell::new(200, 220, 20));
    }

    #[test]
    fn three_advances_right() {
        let mut snake = snake_with(&[(40, 0), (20, 0), (0, 0)], Orientation::Right);
        for x in [60, 80, 100] {
            assert!(snake.advance(field()));
            assert_eq!(snake.head(), Cell::new(x, 0, 20));
            assert_eq!(snake.len(), 3);
        }
        assert_eq!(positions(&snake), [(100, 0), (80, 0), (60, 0)]);
    }

    #[rstest]
    #[case(&[(620, 100), (600, 100), (580, 100)], Orientation::Right)]
    #[case(&[(0, 100), (20, 100), (40, 100)], Orientation::Left)]
    #[case(&[(100, 0), (100, 20), (100, 40)], Orientation::Up)]
    #[case(&[(100, 460), (100, 440), (100, 420)], Orientation::Down)]
    fn dies_at_boundary(#[case] cells: &[(i32, i32)], #[case] orientation: Orientation) {
        let mut snake = snake_with(cells, orientation);
        let before = snake.body.clone();
        assert!(!snake.advance(field()));
        assert_eq!(snake.body, before);
    }

    #[test]
    fn dies_on_own_body() {
        // Head at (100, 100) moving down into the fourth cell at (100, 120),
        // which stays put because only the last cell is vacated
        let mut snake = snake_with(
            &[(100, 100), (120, 100), (120, 120), (100, 120), (80, 120)],
            Orientation::Down,
        );
        let before = snake.body.clone();
        assert!(!snake.advance(field()));
        assert_eq!(snake.body, before);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn may_follow_own_tail() {
        // The tail vacates (100, 120) in the same step that the head enters it
        let mut snake = snake_with(
            &[(100, 100), (120, 100), (120, 120), (100, 120)],
            Orientation::Down,
        );
        assert!(snake.advance(field()));
        assert_eq!(
            positions(&snake),
            [(100, 120), (100, 100), (120, 100), (120, 120)]
        );
    }

    #[test]
    fn advance_preserves_length() {
        let mut snake = Snake::new(&GameConfig::default());
        let turns = [Orientation::Down, Orientation::Right, Orientation::Down];
        for turn in turns {
            let _ = snake.change_orientation(turn);
            for _ in 0..5 {
                assert!(snake.advance(field()));
                assert_eq!(snake.len(), 3);
            }
        }
    }

    #[test]
    fn eat_food_at_head() {
        let mut snake = Snake::new(&GameConfig::default());
        let food = Food::at(Cell::new(40, 0, 20), 4);
        assert_eq!(snake.check_eaten(&food, field()), Eating::Ate);
        assert_eq!(snake.score(), 4);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(60, 0, 20));
        assert_eq!(snake.interval(), Duration::from_millis(260));
        // The head has moved on, so the same food can't be eaten twice
        assert_eq!(snake.check_eaten(&food, field()), Eating::Missed);
        assert_eq!(snake.score(), 4);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn miss_food() {
        let mut snake = Snake::new(&GameConfig::default());
        let before = snake.clone();
        let food = Food::at(Cell::new(20, 0, 20), 3);
        assert_eq!(snake.check_eaten(&food, field()), Eating::Missed);
        assert_eq!(snake, before);
    }

    #[test]
    fn interval_floor() {
        let mut snake = Snake::new(&GameConfig::default());
        let mut intervals = Vec::new();
        for _ in 0..10 {
            let food = Food::at(snake.head(), 1);
            assert_eq!(snake.check_eaten(&food, field()), Eating::Ate);
            intervals.push(snake.interval().as_millis());
        }
        assert_eq!(
            intervals,
            [260, 220, 200, 200, 200, 200, 200, 200, 200, 200]
        );
        assert_eq!(snake.score(), 10);
        assert_eq!(snake.len(), 13);
    }

    #[rstest]
    #[case(&[(620, 100), (600, 100), (580, 100)], Orientation::Right)]
    #[case(&[(100, 0), (100, 20), (100, 40)], Orientation::Up)]
    #[case(&[(0, 460), (20, 460), (40, 460)], Orientation::Left)]
    fn chokes_growing_off_field(#[case] cells: &[(i32, i32)], #[case] orientation: Orientation) {
        let mut snake = snake_with(cells, orientation);
        let before = snake.clone();
        let food = Food::at(snake.head(), 3);
        assert_eq!(snake.check_eaten(&food, field()), Eating::Choked);
        assert_eq!(snake, before);
    }

    #[test]
    fn chokes_growing_into_body() {
        let mut snake = snake_with(
            &[(100, 100), (100, 80), (120, 80), (120, 100), (120, 120)],
            Orientation::Right,
        );
        let before = snake.clone();
        let food = Food::at(Cell::new(100, 100, 20), 2);
        assert_eq!(snake.check_eaten(&food, field()), Eating::Choked);
        assert_eq!(snake, before);
    }
}
