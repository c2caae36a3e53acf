use std::rc::Rc;

use yew::Reducible;

/// Coarse viewport bucket deciding how many carousel items are shown at
/// once. Recomputed on resize, never persisted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl ViewportClass {
    pub const MEDIUM_MIN_PX: f64 = 768.0;
    pub const WIDE_MIN_PX: f64 = 1024.0;

    pub fn from_width(width: f64) -> Self {
        if width >= Self::WIDE_MIN_PX {
            ViewportClass::Wide
        } else if width >= Self::MEDIUM_MIN_PX {
            ViewportClass::Medium
        } else {
            ViewportClass::Narrow
        }
    }

    pub fn items_per_page(self) -> usize {
        match self {
            ViewportClass::Wide => 4,
            ViewportClass::Medium => 2,
            ViewportClass::Narrow => 1,
        }
    }
}

/// Scroll position over a fixed, ordered item collection. The collection
/// itself lives with the caller; the controller only tracks the leading
/// visible index and wraps it at the boundaries.
///
/// All mutation goes through [`CarouselAction`] and `reduce`, so timer
/// ticks, manual clicks and resize reclassification never interleave
/// within one transition.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Carousel {
    index: usize,
    item_count: usize,
    per_page: usize,
}

pub enum CarouselAction {
    Advance,
    Retreat,
    JumpTo(usize),
    Reclassify(ViewportClass),
}

impl Carousel {
    /// `item_count` must be non-zero; empty collections should not mount a
    /// carousel at all.
    pub fn new(item_count: usize, per_page: usize) -> Self {
        debug_assert!(item_count > 0);
        Self {
            index: 0,
            item_count,
            per_page: per_page.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of advances needed to come back around to the start.
    pub fn page_count(&self) -> usize {
        (self.item_count + self.per_page - 1) / self.per_page
    }

    pub fn advance(&mut self) {
        if self.index + self.per_page >= self.item_count {
            self.index = 0;
        } else {
            self.index += self.per_page;
        }
    }

    pub fn retreat(&mut self) {
        if self.index < self.per_page {
            self.index = self.item_count.saturating_sub(self.per_page);
        } else {
            self.index -= self.per_page;
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        self.index = index.min(self.item_count - 1);
    }

    /// Changing the page size deliberately leaves the index alone; it can
    /// transiently point past the new visible window until the next
    /// advance, which is a harmless display quirk.
    pub fn reclassify(&mut self, viewport: ViewportClass) {
        self.per_page = viewport.items_per_page();
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::JumpTo(index) => next.jump_to(index),
            CarouselAction::Reclassify(viewport) => next.reclassify(viewport),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_breakpoints() {
        assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1023.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(767.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(320.0), ViewportClass::Narrow);
    }

    #[test]
    fn eight_items_four_per_page_cycles_in_two() {
        let mut carousel = Carousel::new(8, 4);
        carousel.advance();
        assert_eq!(carousel.index(), 4);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn partial_last_page_wraps_to_zero() {
        // 5 items, 4 per page, sitting on the partial page: 4 + 4 >= 5.
        let mut carousel = Carousel::new(5, 4);
        carousel.advance();
        assert_eq!(carousel.index(), 4);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn advance_returns_to_start_after_page_count_calls() {
        for &(count, per) in &[(8, 4), (7, 2), (5, 1), (9, 4), (3, 1)] {
            let mut carousel = Carousel::new(count, per);
            for _ in 0..carousel.page_count() {
                carousel.advance();
                assert!(carousel.index() < count);
            }
            assert_eq!(carousel.index(), 0, "count={} per={}", count, per);
        }
    }

    #[test]
    fn retreat_from_zero_lands_on_last_window() {
        let mut carousel = Carousel::new(8, 4);
        carousel.retreat();
        assert_eq!(carousel.index(), 4);

        let mut single = Carousel::new(3, 1);
        single.retreat();
        assert_eq!(single.index(), 2);
    }

    #[test]
    fn retreat_never_goes_negative_when_page_exceeds_count() {
        let mut carousel = Carousel::new(3, 4);
        carousel.retreat();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn reclassify_keeps_index() {
        let mut carousel = Carousel::new(8, 4);
        carousel.advance();
        assert_eq!(carousel.index(), 4);
        carousel.reclassify(ViewportClass::Narrow);
        assert_eq!(carousel.per_page(), 1);
        assert_eq!(carousel.index(), 4);
        carousel.reclassify(ViewportClass::Wide);
        assert_eq!(carousel.per_page(), 4);
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn jump_to_clamps_into_range() {
        let mut carousel = Carousel::new(3, 1);
        carousel.jump_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.jump_to(99);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn reduce_serializes_all_mutations() {
        let state: Rc<Carousel> = Rc::new(Carousel::new(8, 4));
        let state = state.reduce(CarouselAction::Advance);
        assert_eq!(state.index(), 4);
        let state = state.reduce(CarouselAction::Reclassify(ViewportClass::Medium));
        assert_eq!(state.per_page(), 2);
        assert_eq!(state.index(), 4);
        let state = state.reduce(CarouselAction::Retreat);
        assert_eq!(state.index(), 2);
        let state = state.reduce(CarouselAction::JumpTo(0));
        assert_eq!(state.index(), 0);
    }
}
