use std::rc::Rc;

use yew::Reducible;

use super::phases::PHASES;

/// Navigation requests understood by [`PresentationState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JourneyAction {
    GoTo(usize),
    Next,
    Previous,
    ToggleAutoplay,
    /// Fired by the autoplay interval scheduled under `epoch`.
    Tick { epoch: u32 },
}

/// Which phase of the demo is showing and whether it advances on its own.
///
/// Manual navigation clamps at both ends and always switches autoplay off.
/// Only autoplay ticks wrap from the last phase back to the first.
///
/// `epoch` identifies the current autoplay schedule. It changes whenever the
/// schedule is cancelled or restarted, and ticks carrying an older epoch are
/// dropped, so a tick that was already queued when the viewer took over can
/// never move the demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationState {
    current: usize,
    autoplay: bool,
    epoch: u32,
    phase_count: usize,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::new(PHASES.len())
    }
}

impl PresentationState {
    /// A sequence always holds at least one phase.
    pub fn new(phase_count: usize) -> Self {
        Self {
            current: 0,
            autoplay: true,
            epoch: 0,
            phase_count: phase_count.max(1),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn phase_count(&self) -> usize {
        self.phase_count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.phase_count
    }

    /// The interval should exist only while autoplay is on and the demo has
    /// been seen.
    pub fn timer_running(&self, visible: bool) -> bool {
        self.autoplay && visible
    }

    /// Jump to `index`. Out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.phase_count {
            return false;
        }
        self.current = index;
        if self.autoplay {
            self.autoplay = false;
            self.bump_epoch();
        }
        true
    }

    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
        self.bump_epoch();
    }

    /// Advance one phase on behalf of the autoplay interval, wrapping at the
    /// end. Ticks from a cancelled schedule or while paused do nothing.
    pub fn tick(&mut self, epoch: u32) -> bool {
        if !self.autoplay || epoch != self.epoch {
            return false;
        }
        self.current = (self.current + 1) % self.phase_count;
        true
    }

    /// Applies `action`, returning whether anything changed.
    pub fn apply(&mut self, action: JourneyAction) -> bool {
        match action {
            JourneyAction::GoTo(index) => self.go_to(index),
            JourneyAction::Next => self.next(),
            JourneyAction::Previous => self.previous(),
            JourneyAction::ToggleAutoplay => {
                self.toggle_autoplay();
                true
            }
            JourneyAction::Tick { epoch } => self.tick(epoch),
        }
    }

    /// Text for the assistive-technology live region.
    pub fn announcement(&self, title: &str) -> String {
        format!("Phase {} of {}: {}", self.current + 1, self.phase_count, title)
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}

impl Reducible for PresentationState {
    type Action = JourneyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Maps a `KeyboardEvent.key` value to a navigation request.
pub fn action_for_key(key: &str) -> Option<JourneyAction> {
    match key {
        "ArrowLeft" | "ArrowUp" => Some(JourneyAction::Previous),
        "ArrowRight" | "ArrowDown" => Some(JourneyAction::Next),
        " " => Some(JourneyAction::ToggleAutoplay),
        _ => None,
    }
}

/// Focused controls keep their own keys. Space on a button activates it.
pub fn keeps_own_keys(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || matches!(
            tag_name.to_ascii_lowercase().as_str(),
            "input" | "textarea" | "select" | "button"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut PresentationState, key: &str) {
        if let Some(action) = action_for_key(key) {
            state.apply(action);
        }
    }

    #[test]
    fn starts_on_first_phase_with_autoplay() {
        let state = PresentationState::default();
        assert_eq!(state.current_index(), 0);
        assert!(state.autoplay());
        assert_eq!(state.phase_count(), 4);
    }

    #[test]
    fn go_to_valid_index_selects_it_and_stops_autoplay() {
        for index in 0..4 {
            let mut state = PresentationState::new(4);
            assert!(state.go_to(index));
            assert_eq!(state.current_index(), index);
            assert!(!state.autoplay());
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        for index in [4, 5, 100, usize::MAX] {
            let mut state = PresentationState::new(4);
            state.tick(0);
            let before = state.clone();
            assert!(!state.go_to(index));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn manual_navigation_clamps_at_both_ends() {
        let mut state = PresentationState::new(4);
        assert!(!state.previous());
        assert_eq!(state.current_index(), 0);
        assert!(state.autoplay());

        state.go_to(3);
        assert!(!state.next());
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn autoplay_wraps_after_a_full_cycle() {
        let mut state = PresentationState::new(4);
        for _ in 0..4 {
            assert!(state.tick(state.epoch()));
        }
        assert_eq!(state.current_index(), 0);
        assert!(state.autoplay());
    }

    #[test]
    fn toggling_twice_restores_autoplay_and_keeps_index() {
        let mut state = PresentationState::new(4);
        state.tick(0);
        state.toggle_autoplay();
        assert!(!state.autoplay());
        state.toggle_autoplay();
        assert!(state.autoplay());
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn manual_navigation_cancels_pending_tick() {
        for action in [
            JourneyAction::GoTo(2),
            JourneyAction::Next,
            JourneyAction::Previous,
        ] {
            let mut state = PresentationState::new(4);
            state.tick(0);
            let pending = state.epoch();
            assert!(state.apply(action));
            assert!(!state.autoplay());
            let index = state.current_index();
            assert!(!state.tick(pending));
            assert_eq!(state.current_index(), index);
        }
    }

    #[test]
    fn tick_from_previous_schedule_is_dropped_after_resume() {
        let mut state = PresentationState::new(4);
        let old = state.epoch();
        state.toggle_autoplay();
        state.toggle_autoplay();
        assert!(!state.tick(old));
        assert!(state.tick(state.epoch()));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn right_arrow_walks_to_the_end_and_stops() {
        let mut state = PresentationState::default();
        for _ in 0..3 {
            press(&mut state, "ArrowRight");
        }
        assert_eq!(state.current_index(), 3);
        assert!(!state.autoplay());
        press(&mut state, "ArrowRight");
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn two_ticks_without_input_reach_third_phase() {
        let mut state = PresentationState::default();
        state.apply(JourneyAction::Tick { epoch: state.epoch() });
        state.apply(JourneyAction::Tick { epoch: state.epoch() });
        assert_eq!(state.current_index(), 2);
        assert!(state.autoplay());
    }

    #[test]
    fn key_mapping() {
        assert_eq!(action_for_key("ArrowUp"), Some(JourneyAction::Previous));
        assert_eq!(action_for_key("ArrowLeft"), Some(JourneyAction::Previous));
        assert_eq!(action_for_key("ArrowDown"), Some(JourneyAction::Next));
        assert_eq!(action_for_key(" "), Some(JourneyAction::ToggleAutoplay));
        assert_eq!(action_for_key("Enter"), None);
        assert_eq!(action_for_key("a"), None);
    }

    #[test]
    fn form_controls_keep_their_keys() {
        assert!(keeps_own_keys("INPUT", false));
        assert!(keeps_own_keys("select", false));
        assert!(keeps_own_keys("DIV", true));
        assert!(!keeps_own_keys("DIV", false));
        assert!(!keeps_own_keys("SECTION", false));
    }

    #[test]
    fn focused_buttons_keep_space() {
        assert!(keeps_own_keys("BUTTON", false));
        assert!(keeps_own_keys("button", false));
    }

    #[test]
    fn timer_runs_only_when_visible_and_playing() {
        let mut state = PresentationState::new(4);
        assert!(!state.timer_running(false));
        assert!(state.timer_running(true));
        state.toggle_autoplay();
        assert!(!state.timer_running(true));
    }

    #[test]
    fn reducer_keeps_the_same_state_on_no_op() {
        let state = Rc::new(PresentationState::new(4));
        let same = state.clone().reduce(JourneyAction::Previous);
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.reduce(JourneyAction::Next);
        assert_eq!(moved.current_index(), 1);
    }

    #[test]
    fn announcement_counts_from_one() {
        let mut state = PresentationState::new(4);
        state.go_to(1);
        assert_eq!(state.announcement("Finding Matches"), "Phase 2 of 4: Finding Matches");
    }
}
