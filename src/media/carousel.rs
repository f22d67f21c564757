/// Which way to step through a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An ordered list of items with a wrapping cursor.
///
/// `index` is always `< items.len()` while the list is non-empty and is
/// left at 0 otherwise.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
        }
    }
}

impl<T> Carousel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents and rewind to the first item.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = 0;
    }

    pub fn clear(&mut self) {
        self.set_items(Vec::new());
    }

    /// Step one item in `direction`, wrapping at either end. No-op when empty.
    pub fn navigate(&mut self, direction: Direction) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = match direction {
            Direction::Forward => (self.index + 1) % len,
            Direction::Backward => (self.index + len - 1) % len,
        };
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// One-based position and length, for "2 / 5" style labels.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.index + 1, self.items.len()))
        }
    }
}

impl<T> From<Vec<T>> for Carousel<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_then_backward_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut carousel = Carousel::from((0..len).collect::<Vec<_>>());
                for _ in 0..start {
                    carousel.navigate(Direction::Forward);
                }
                assert_eq!(carousel.index(), start);

                carousel.navigate(Direction::Forward);
                carousel.navigate(Direction::Backward);
                assert_eq!(carousel.index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn len_steps_forward_is_a_full_cycle() {
        for len in 1..8 {
            let mut carousel = Carousel::from(vec!['x'; len]);
            carousel.navigate(Direction::Forward);
            let start = carousel.index();
            for _ in 0..len {
                carousel.navigate(Direction::Forward);
            }
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut carousel = Carousel::from(vec!["a", "b", "c"]);
        carousel.navigate(Direction::Backward);
        assert_eq!(carousel.current(), Some(&"c"));
        carousel.navigate(Direction::Forward);
        assert_eq!(carousel.current(), Some(&"a"));
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut carousel: Carousel<u8> = Carousel::new();
        carousel.navigate(Direction::Forward);
        carousel.navigate(Direction::Backward);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
        assert!(carousel.position().is_none());
    }

    #[test]
    fn set_items_rewinds() {
        let mut carousel = Carousel::from(vec![1, 2, 3]);
        carousel.navigate(Direction::Forward);
        carousel.navigate(Direction::Forward);
        assert_eq!(carousel.position(), Some((3, 3)));

        carousel.set_items(vec![7, 8]);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current(), Some(&7));

        carousel.clear();
        assert!(carousel.is_empty());
    }
}
