//! Day selection with clamped navigation

/// Current position in a day sequence of fixed, non-zero length.
///
/// Every mutation clamps into `0..len`; out-of-range requests are never
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySelection {
    index: usize,
    len: usize,
}

impl DaySelection {
    /// Start at the first day. A zero `len` is treated as one.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: if len == 0 { 1 } else { len },
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn day_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.len - 1
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.index == self.last_index()
    }

    /// Jump to `index`, clamped. Returns whether the position moved.
    pub fn go_to(&mut self, index: isize) -> bool {
        let target = usize::try_from(index.max(0))
            .unwrap_or(0)
            .min(self.last_index());
        let moved = target != self.index;
        self.index = target;
        moved
    }

    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    pub fn prev(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let current = isize::try_from(self.index).unwrap_or(isize::MAX);
        self.go_to(current.saturating_add(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_clamps_into_range() {
        let mut sel = DaySelection::new(5);
        for (request, expected) in [(-10, 0), (-1, 0), (0, 0), (3, 3), (4, 4), (5, 4), (99, 4)] {
            sel.go_to(request);
            assert_eq!(sel.index(), expected, "request {request}");
        }
        sel.go_to(isize::MAX);
        assert_eq!(sel.index(), 4);
        sel.go_to(isize::MIN);
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut sel = DaySelection::new(3);
        assert!(!sel.prev());
        assert_eq!(sel.index(), 0);
        assert!(sel.next());
        assert!(sel.next());
        assert!(sel.is_last());
        assert!(!sel.next());
        assert!(!sel.next());
        assert_eq!(sel.index(), 2);
    }

    #[test]
    fn go_to_reports_movement() {
        let mut sel = DaySelection::new(4);
        assert!(sel.go_to(2));
        assert!(!sel.go_to(2));
        assert!(sel.prev());
        assert_eq!(sel.index(), 1);
    }

    #[test]
    fn single_day_never_moves() {
        let mut sel = DaySelection::new(1);
        assert!(sel.is_first() && sel.is_last());
        assert!(!sel.next());
        assert!(!sel.prev());
        assert!(!sel.go_to(7));
    }

    #[test]
    fn zero_length_is_treated_as_one() {
        let sel = DaySelection::new(0);
        assert_eq!(sel.day_count(), 1);
        assert_eq!(sel.last_index(), 0);
    }
}
