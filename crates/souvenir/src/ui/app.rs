//! UI application state.
//!
//! One `App` value owns every piece of mutable state: the navigator, the
//! swipe tracker, the audio controller, and the overlay. Input events are
//! applied here; rendering reads from it and never mutates.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::time::Instant;

use crate::audio::{AudioController, Playback};
use crate::milestone::MilestoneSet;
use crate::moment::Moment;
use crate::store::MomentStore;
use crate::timeline::{
    days_since_milestones, Counter, Direction, Navigator, SwipeTracker, TRANSITION_DURATION,
};

/// Which overlay, if any, sits on top of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No overlay; the card receives input.
    #[default]
    None,
    /// The diary modal for the current moment.
    Diary,
    /// The enlarged image view for the current moment.
    Lightbox,
}

/// The viewer's state.
#[derive(Debug)]
pub struct App {
    store: MomentStore,
    milestones: MilestoneSet,
    navigator: Navigator,
    swipe: SwipeTracker,
    audio: AudioController<Box<dyn Playback>>,
    overlay: Overlay,
    transition_deadline: Option<Instant>,
    quit: bool,
}

impl App {
    /// Assemble the viewer over the given store.
    #[must_use]
    pub fn new(
        store: MomentStore,
        milestones: MilestoneSet,
        audio: AudioController<Box<dyn Playback>>,
    ) -> Self {
        let navigator = Navigator::new(store.len());
        Self {
            store,
            milestones,
            navigator,
            swipe: SwipeTracker::new(),
            audio,
            overlay: Overlay::None,
            transition_deadline: None,
            quit: false,
        }
    }

    /// The moment under the cursor.
    #[must_use]
    pub fn current_moment(&self) -> &Moment {
        self.store
            .get(self.navigator.current())
            .unwrap_or_else(|| self.store.last())
    }

    /// Milestone counters for the current moment's date.
    #[must_use]
    pub fn counters(&self) -> Vec<Counter> {
        days_since_milestones(self.current_moment().date, &self.milestones)
    }

    /// The `"{index+1} / {total}"` position indicator.
    #[must_use]
    pub fn position_label(&self) -> String {
        self.navigator.position_label()
    }

    /// The overlay currently shown.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Whether a card transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    /// Whether background music is playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.audio.is_playing()
    }

    /// Whether the viewer should exit its loop.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// When the pending transition elapses, if one is in flight.
    #[must_use]
    pub fn transition_deadline(&self) -> Option<Instant> {
        self.transition_deadline
    }

    /// Apply the pending index move; called when the delay elapses.
    pub fn finish_transition(&mut self) {
        self.navigator.complete_transition();
        self.transition_deadline = None;
    }

    /// Pause playback on the way out.
    pub fn shutdown(&mut self) {
        self.audio.shutdown();
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings work with or without an overlay.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        if key.code == KeyCode::Char('m') {
            self.audio.toggle();
            return;
        }

        match self.overlay {
            Overlay::Diary | Overlay::Lightbox => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.overlay = Overlay::None;
                }
            }
            Overlay::None => match key.code {
                KeyCode::Left | KeyCode::Char('p') => self.request_navigation(Direction::Backward),
                KeyCode::Right | KeyCode::Char('n') => self.request_navigation(Direction::Forward),
                KeyCode::Enter | KeyCode::Char('d') => self.overlay = Overlay::Diary,
                KeyCode::Char('i') => {
                    if self.current_moment().has_image() {
                        self.overlay = Overlay::Lightbox;
                    }
                }
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.overlay != Overlay::None {
            self.swipe.cancel();
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.begin(i32::from(mouse.column));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(direction) = self.swipe.finish(i32::from(mouse.column)) {
                    self.request_navigation(direction);
                }
            }
            _ => {}
        }
    }

    fn request_navigation(&mut self, direction: Direction) {
        if self.navigator.navigate(direction).started() {
            self.transition_deadline = Some(Instant::now() + TRANSITION_DURATION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::PlaybackError;
    use crate::store;

    #[derive(Debug, Default)]
    struct TogglePlayback {
        paused: bool,
    }

    impl Playback for TogglePlayback {
        fn resume(&mut self) -> Result<(), PlaybackError> {
            self.paused = false;
            Ok(())
        }

        fn pause(&mut self) {
            self.paused = true;
        }
    }

    fn app() -> App {
        let audio: Box<dyn Playback> = Box::new(TogglePlayback::default());
        App::new(
            store::seed().unwrap(),
            MilestoneSet::standard(),
            AudioController::start(audio, false),
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_right_key_starts_transition() {
        let mut app = app();
        app.handle_event(&key(KeyCode::Right));
        assert!(app.is_transitioning());
        assert!(app.transition_deadline().is_some());
        // Index moves only once the delay elapses.
        assert_eq!(app.position_label(), "1 / 8");
        app.finish_transition();
        assert_eq!(app.position_label(), "2 / 8");
    }

    #[test]
    fn test_rapid_keys_are_swallowed() {
        let mut app = app();
        app.handle_event(&key(KeyCode::Right));
        app.handle_event(&key(KeyCode::Right));
        app.handle_event(&key(KeyCode::Left));
        app.finish_transition();
        assert_eq!(app.position_label(), "2 / 8");
    }

    #[test]
    fn test_left_key_wraps_backwards() {
        let mut app = app();
        app.handle_event(&key(KeyCode::Left));
        app.finish_transition();
        assert_eq!(app.position_label(), "8 / 8");
    }

    #[test]
    fn test_mouse_drag_past_threshold_navigates() {
        let mut app = app();
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 100));
        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 49));
        assert!(app.is_transitioning());
        app.finish_transition();
        assert_eq!(app.position_label(), "2 / 8");
    }

    #[test]
    fn test_short_mouse_drag_is_ignored() {
        let mut app = app();
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 100));
        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 51));
        assert!(!app.is_transitioning());
        assert_eq!(app.position_label(), "1 / 8");
    }

    #[test]
    fn test_diary_opens_and_closes() {
        let mut app = app();
        app.handle_event(&key(KeyCode::Enter));
        assert_eq!(app.overlay(), Overlay::Diary);
        app.handle_event(&key(KeyCode::Esc));
        assert_eq!(app.overlay(), Overlay::None);
    }

    #[test]
    fn test_navigation_keys_do_nothing_under_overlay() {
        let mut app = app();
        app.handle_event(&key(KeyCode::Char('d')));
        app.handle_event(&key(KeyCode::Right));
        assert!(!app.is_transitioning());
        assert_eq!(app.overlay(), Overlay::Diary);
    }

    #[test]
    fn test_lightbox_requires_an_image() {
        let mut app = app();
        // First card has a tone, not a photo.
        assert!(!app.current_moment().has_image());
        app.handle_event(&key(KeyCode::Char('i')));
        assert_eq!(app.overlay(), Overlay::None);

        // Move onto the seaside photo card.
        app.handle_event(&key(KeyCode::Right));
        app.finish_transition();
        assert!(app.current_moment().has_image());
        app.handle_event(&key(KeyCode::Char('i')));
        assert_eq!(app.overlay(), Overlay::Lightbox);
    }

    #[test]
    fn test_music_toggle_works_everywhere() {
        let mut app = app();
        assert!(!app.is_playing());
        app.handle_event(&key(KeyCode::Char('m')));
        assert!(app.is_playing());

        app.handle_event(&key(KeyCode::Char('d')));
        app.handle_event(&key(KeyCode::Char('m')));
        assert!(!app.is_playing());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_event(&key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_counters_follow_current_card() {
        let mut app = app();
        assert_eq!(app.counters().len(), 1);
        // Jump to the reunion card (index 3).
        for _ in 0..3 {
            app.handle_event(&key(KeyCode::Right));
            app.finish_transition();
        }
        let labels: Vec<&str> = app.counters().iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["相知", "再相遇"]);
    }
}
