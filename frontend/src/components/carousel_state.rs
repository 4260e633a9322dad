use std::rc::Rc;
use yew::prelude::*;

/// Index/autoplay state of the feature carousel.
///
/// While autoplay is on the rendered track has one extra element at the end,
/// a copy of slide 0, so `index` may sit at `len` until the transition into
/// it finishes and the wrap-reset snaps it back to 0.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    autoplay: bool,
    paused: bool,
    transitioning: bool,
}

pub enum CarouselAction {
    ToggleAutoplay,
    Advance,
    TransitionFinished,
    Prev,
    Next,
    GoTo(usize),
    PointerEnter,
    PointerLeave,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            autoplay: false,
            paused: false,
            transitioning: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    // true for empty and single-slide decks
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Number of elements on the track, including the trailing copy of
    /// slide 0 while autoplay is on.
    pub fn displayed_len(&self) -> usize {
        if self.autoplay && self.len > 0 {
            self.len + 1
        } else {
            self.len
        }
    }

    pub fn is_active_dot(&self, i: usize) -> bool {
        self.index == i
    }

    pub fn toggle_autoplay(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.autoplay {
            self.autoplay = false;
            // the copy of slide 0 disappears with autoplay
            if self.index >= self.len {
                self.transitioning = false;
                self.index = 0;
            }
        } else {
            if self.index + 1 == self.len {
                self.index = 0;
            }
            self.autoplay = true;
        }
    }

    pub fn advance(&mut self) {
        if !self.autoplay || self.paused || self.index >= self.len {
            return;
        }
        self.transitioning = true;
        self.index += 1;
    }

    pub fn transition_finished(&mut self) {
        if self.autoplay && self.len > 0 && self.index == self.len {
            self.transitioning = false;
            self.index = 0;
        }
    }

    pub fn prev(&mut self) {
        if self.is_first() {
            return;
        }
        self.transitioning = true;
        self.index -= 1;
        self.autoplay = false;
    }

    pub fn next(&mut self) {
        if self.is_last() {
            return;
        }
        self.transitioning = true;
        self.index += 1;
        self.autoplay = false;
    }

    pub fn go_to(&mut self, i: usize) {
        if i >= self.len {
            return;
        }
        self.transitioning = false;
        self.index = i;
        self.autoplay = false;
    }

    pub fn pointer_enter(&mut self) {
        self.paused = true;
    }

    pub fn pointer_leave(&mut self) {
        self.paused = false;
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::ToggleAutoplay => next.toggle_autoplay(),
            CarouselAction::Advance => next.advance(),
            CarouselAction::TransitionFinished => {
                next.transition_finished();
                if next.index == 0 && self.index != 0 {
                    log::debug!("Carousel wrapped back to the first slide");
                }
            }
            CarouselAction::Prev => next.prev(),
            CarouselAction::Next => next.next(),
            CarouselAction::GoTo(i) => next.go_to(i),
            CarouselAction::PointerEnter => next.pointer_enter(),
            CarouselAction::PointerLeave => next.pointer_leave(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(len: usize) -> CarouselState {
        let mut state = CarouselState::new(len);
        state.toggle_autoplay();
        state
    }

    #[test]
    fn starts_at_first_slide() {
        for len in 1..10 {
            let state = CarouselState::new(len);
            assert_eq!(state.index(), 0);
            assert!(!state.autoplay());
            assert!(!state.paused());
        }
    }

    #[test]
    fn next_stops_at_last_slide() {
        let mut state = CarouselState::new(6);
        for _ in 0..5 {
            state.next();
        }
        assert_eq!(state.index(), 5);
        assert!(state.is_last());
        state.next();
        assert_eq!(state.index(), 5);
    }

    #[test]
    fn prev_at_first_slide_is_noop() {
        let mut state = CarouselState::new(6);
        let before = state.clone();
        state.prev();
        assert_eq!(state, before);
    }

    #[test]
    fn prev_moves_back_with_animation() {
        let mut state = CarouselState::new(4);
        state.go_to(2);
        assert!(!state.transitioning());
        state.prev();
        assert_eq!(state.index(), 1);
        assert!(state.transitioning());
    }

    #[test]
    fn autoplay_wraps_through_clone() {
        let mut state = playing(6);
        assert_eq!(state.displayed_len(), 7);
        for _ in 0..6 {
            state.advance();
            state.transition_finished();
        }
        assert_eq!(state.index(), 0);
        assert!(!state.transitioning());
        assert!(state.autoplay());
    }

    #[test]
    fn six_slide_tick_sequence() {
        let mut state = playing(6);
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.advance();
            seen.push(state.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);

        state.advance();
        assert_eq!(state.index(), 5);
        state.transition_finished();
        assert_eq!(state.index(), 5);

        state.advance();
        assert_eq!(state.index(), 6);
        assert!(state.transitioning());
        state.transition_finished();
        assert_eq!(state.index(), 0);
        assert!(!state.transitioning());
    }

    #[test]
    fn advance_never_passes_clone() {
        let mut state = playing(3);
        for _ in 0..10 {
            state.advance();
        }
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn advance_requires_autoplay() {
        let mut state = CarouselState::new(3);
        state.advance();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn toggle_from_last_slide_restarts_at_first() {
        let mut state = CarouselState::new(4);
        state.go_to(3);
        state.toggle_autoplay();
        assert!(state.autoplay());
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn toggle_off_keeps_index() {
        let mut state = playing(5);
        state.advance();
        state.advance();
        state.toggle_autoplay();
        assert!(!state.autoplay());
        assert_eq!(state.index(), 2);
        assert_eq!(state.displayed_len(), 5);
    }

    #[test]
    fn toggle_off_on_clone_snaps_to_first() {
        let mut state = playing(2);
        state.advance();
        state.advance();
        assert_eq!(state.index(), 2);
        state.toggle_autoplay();
        assert_eq!(state.index(), 0);
        assert!(!state.transitioning());
    }

    #[test]
    fn manual_navigation_stops_autoplay() {
        let mut state = playing(5);
        state.advance();
        state.next();
        assert!(!state.autoplay());

        let mut state = playing(5);
        state.advance();
        state.prev();
        assert!(!state.autoplay());

        let mut state = playing(5);
        state.go_to(3);
        assert!(!state.autoplay());
        assert_eq!(state.index(), 3);
        assert!(!state.transitioning());
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut state = CarouselState::new(3);
        state.go_to(3);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn hover_pauses_advancement() {
        let mut state = playing(4);
        state.pointer_enter();
        assert!(state.paused());
        state.advance();
        assert_eq!(state.index(), 0);

        state.pointer_leave();
        assert!(!state.paused());
        state.advance();
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn hover_does_not_touch_index() {
        let mut state = playing(4);
        state.advance();
        state.pointer_enter();
        state.pointer_leave();
        assert_eq!(state.index(), 1);
        assert!(state.autoplay());
    }

    #[test]
    fn empty_deck_is_static() {
        let mut state = CarouselState::new(0);
        assert!(state.is_first());
        assert!(state.is_last());
        state.toggle_autoplay();
        state.advance();
        state.next();
        state.prev();
        state.go_to(0);
        assert_eq!(state.index(), 0);
        assert!(!state.autoplay());
        assert_eq!(state.displayed_len(), 0);
    }

    #[test]
    fn single_slide_has_no_manual_moves() {
        let mut state = CarouselState::new(1);
        assert!(state.is_first());
        assert!(state.is_last());
        state.next();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn reducer_returns_same_rc_when_unchanged() {
        let state = Rc::new(CarouselState::new(3));
        let reduced = state.clone().reduce(CarouselAction::Prev);
        assert!(Rc::ptr_eq(&state, &reduced));

        let reduced = state.clone().reduce(CarouselAction::Next);
        assert_eq!(reduced.index(), 1);
    }
}
