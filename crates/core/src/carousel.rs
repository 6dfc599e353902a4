//! Cyclic image index used by product cards and the detail gallery.

/// Index into a fixed-size image list that wraps in both directions.
///
/// An empty carousel is valid; it simply has no current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arrows and thumbnails only make sense with more than one image.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn current<'a, S>(&self, items: &'a [S]) -> Option<&'a S> {
        items.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.select(0);
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
        assert_eq!(c.current::<&str>(&[]), None);
    }

    #[test]
    fn controls_need_two_images() {
        assert!(!Carousel::new(1).has_controls());
        assert!(Carousel::new(2).has_controls());
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut c = Carousel::new(3);
        c.select(2);
        c.select(3);
        assert_eq!(c.index(), 2);
        assert_eq!(c.current(&["a", "b", "c"]), Some(&"c"));
    }

    proptest! {
        /// Property: N "next" clicks on K images land on N mod K.
        #[test]
        fn next_clicks_wrap_modulo_len(k in 1usize..50, n in 0usize..500) {
            let mut c = Carousel::new(k);
            for _ in 0..n {
                c.next();
            }
            prop_assert_eq!(c.index(), n % k);
        }

        /// Property: prev undoes next.
        #[test]
        fn prev_undoes_next(k in 1usize..50, start in 0usize..50) {
            let mut c = Carousel::new(k);
            c.select(start % k);
            let before = c.index();
            c.next();
            c.prev();
            prop_assert_eq!(c.index(), before);
        }
    }
}
