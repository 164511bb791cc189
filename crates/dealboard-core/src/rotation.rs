//! Active-group state for the rotating top-deals display.
//!
//! Timing lives with the caller; this module only owns the index arithmetic.
//! Manual steps and auto-advance share the same modular step and do not
//! affect each other's schedule.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation {
    active_index: usize,
    group_count: usize,
}

impl Rotation {
    #[must_use]
    pub fn new(group_count: usize) -> Self {
        Self {
            active_index: 0,
            group_count,
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// `true` when there is more than one group to cycle through.
    #[must_use]
    pub fn can_rotate(&self) -> bool {
        self.group_count > 1
    }

    /// Starts over at group 0 with a new group count.
    pub fn reset(&mut self, group_count: usize) {
        *self = Self::new(group_count);
    }

    /// Timer-driven step. Returns `false` and leaves the index alone when
    /// there is nothing to rotate.
    pub fn advance(&mut self) -> bool {
        self.step(Direction::Next)
    }

    /// Manual or timer step in either direction, wrapping at both ends.
    pub fn step(&mut self, direction: Direction) -> bool {
        if !self.can_rotate() {
            return false;
        }
        self.active_index = match direction {
            Direction::Next => (self.active_index + 1) % self.group_count,
            Direction::Previous => {
                (self.active_index + self.group_count - 1) % self.group_count
            }
        };
        true
    }
}
