use std::ops::{BitOr, BitOrAssign};

/// A grid coordinate, 1-indexed on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    /// The neighbour one step in `d`, or `None` when that step leaves a
    /// `size`-by-`size` grid.
    pub fn step_toward(&self, d: Direction, size: usize) -> Option<Site> {
        let (row, col) = match d {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::West => (self.row, self.col.checked_sub(1)?),
            Direction::East => (self.row, self.col + 1),
        };
        if row >= 1 && row <= size && col >= 1 && col <= size {
            Some(Site { row, col })
        } else {
            None
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> [Direction; 4] {
        [Direction::North, Direction::South,
        Direction::West, Direction::East]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SiteState {
    Blocked,
    Open,
}

/// Which edges of the grid a component touches. Only meaningful on the
/// root of a component.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Reach {
    pub top: bool,
    pub bottom: bool,
}

impl Reach {
    pub const NONE: Reach = Reach { top: false, bottom: false };

    pub fn for_row(row: usize, size: usize) -> Reach {
        Reach {
            top: row == 1,
            bottom: row == size,
        }
    }

    pub fn spans(&self) -> bool {
        self.top && self.bottom
    }
}

impl BitOr for Reach {
    type Output = Reach;

    fn bitor(self, other: Reach) -> Reach {
        Reach {
            top: self.top || other.top,
            bottom: self.bottom || other.bottom,
        }
    }
}

impl BitOrAssign for Reach {
    fn bitor_assign(&mut self, other: Reach) {
        *self = *self | other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbours() {
        let s = Site::new(1, 1);
        let n: Vec<Site> = Direction::adjacent_directions().iter()
            .filter_map(|&d| s.step_toward(d, 3))
            .collect();
        assert_eq!(n, vec![Site::new(2, 1), Site::new(1, 2)]);
    }

    #[test]
    fn interior_has_four_neighbours() {
        let s = Site::new(2, 2);
        let n = Direction::adjacent_directions().iter()
            .filter_map(|&d| s.step_toward(d, 3))
            .count();
        assert_eq!(n, 4);
    }

    #[test]
    fn single_site_grid_touches_both_edges() {
        assert!(Reach::for_row(1, 1).spans());
        assert_eq!(Reach::for_row(2, 3), Reach::NONE);
        assert_eq!(Reach::for_row(3, 3), Reach { top: false, bottom: true });
    }

    #[test]
    fn reach_accumulates() {
        let mut r = Reach::NONE;
        r |= Reach { top: true, bottom: false };
        assert!(!r.spans());
        r |= Reach { top: false, bottom: true };
        assert!(r.spans());
    }
}
