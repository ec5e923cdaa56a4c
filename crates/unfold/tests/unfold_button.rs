//! Integration tests for the unfold button state machine.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use unfold::image::{Rgba, RgbaImage};
use unfold::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ButtonContent)]
enum Letter {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ButtonContent)]
#[button_content(image = Shape::icon)]
enum Shape {
    Dot,
    Ring,
}

impl Shape {
    fn icon(&self) -> Option<DisplayImage> {
        Some(DisplayImage::new(RgbaImage::from_pixel(
            2,
            2,
            Rgba([0, 0, 0, 255]),
        )))
    }
}

const SIDE: f32 = 55.0;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn letters() -> UnfoldButton<Letter> {
    init_tracing();
    UnfoldButton::new(UnfoldConfig::default()).unwrap()
}

fn record(button: &UnfoldButton<Letter>) -> Arc<Mutex<Vec<Option<Letter>>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    button
        .selection_changed
        .connect(move |item| sink.lock().push(*item));
    log
}

fn frame_of(button: &UnfoldButton<Letter>, item: Letter) -> Rect {
    button.button(item).unwrap().frame()
}

/// Run the current transition to its end through the frame clock.
fn settle<T: ButtonContent>(button: &mut UnfoldButton<T>) {
    let start = Instant::now();
    button.tick(start);
    assert!(!button.tick(start + Duration::from_millis(600)));
    assert!(!button.is_animating());
}

fn open(button: &mut UnfoldButton<Letter>) {
    let selected = button.selected();
    assert!(button.tap(selected.index()));
    settle(button);
    assert_eq!(button.state(), UnfoldState::Open);
}

fn assert_exactly_one_set_active<T: ButtonContent>(button: &UnfoldButton<T>) {
    assert_ne!(
        button.open_constraints().is_active(),
        button.close_constraints().is_active()
    );
}

#[test]
fn test_initial_closed_layout() {
    let button = letters();

    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(button.selected(), Letter::A);
    assert_eq!(button.usable_items(), &[Letter::A, Letter::B, Letter::C]);
    assert_eq!(button.active_layout(), ActiveLayout::Close);
    assert_exactly_one_set_active(&button);

    assert_eq!(button.frame(), Rect::new(0.0, 0.0, SIDE, SIDE));
    assert_eq!(frame_of(&button, Letter::A), Rect::new(0.0, 0.0, SIDE, SIDE));
    // Items after the selection are stacked on its trailing edge.
    assert_eq!(frame_of(&button, Letter::B), Rect::new(SIDE, 0.0, 0.0, SIDE));
    assert_eq!(frame_of(&button, Letter::C), Rect::new(SIDE, 0.0, 0.0, SIDE));
    assert!(!button.button(Letter::B).unwrap().is_visible());
    assert_eq!(button.highlight().alpha, 0.0);
}

#[test]
fn test_tags_round_trip() {
    for item in Letter::all_values() {
        assert_eq!(Letter::from_index(item.index()), Some(item));
    }
    let button = letters();
    for visual in button.buttons() {
        assert_eq!(visual.tag(), visual.item().index());
    }
}

#[test]
fn test_tap_while_closed_unfolds() {
    let mut button = letters();
    let log = record(&button);

    assert!(button.tap(Letter::A.index()));
    assert_eq!(button.state(), UnfoldState::Opening);
    assert_eq!(button.active_layout(), ActiveLayout::Open);
    assert_exactly_one_set_active(&button);
    assert!(button.is_animating());
    assert_eq!(*log.lock(), vec![None]);

    let start = Instant::now();
    assert!(button.tick(start));
    assert!(button.tick(start + Duration::from_millis(200)));
    assert_eq!(button.state(), UnfoldState::Opening);
    assert!(!button.tick(start + Duration::from_millis(500)));
    assert_eq!(button.state(), UnfoldState::Open);

    assert_eq!(frame_of(&button, Letter::A), Rect::new(0.0, 0.0, SIDE, SIDE));
    assert_eq!(frame_of(&button, Letter::B), Rect::new(SIDE, 0.0, SIDE, SIDE));
    assert_eq!(frame_of(&button, Letter::C), Rect::new(2.0 * SIDE, 0.0, SIDE, SIDE));
    assert_eq!(button.frame(), Rect::new(0.0, 0.0, 3.0 * SIDE, SIDE));

    let palette = button.config().palette;
    assert_eq!(button.button(Letter::A).unwrap().tint(), palette.highlight);
    assert_eq!(button.button(Letter::B).unwrap().tint(), palette.button);
    assert_eq!(button.highlight().alpha, 1.0);
    assert_eq!(button.highlight().frame, frame_of(&button, Letter::A));

    // Settling emits nothing further.
    assert_eq!(*log.lock(), vec![None]);
}

#[test]
fn test_tap_while_open_picks_and_folds() {
    let mut button = letters();
    let log = record(&button);
    open(&mut button);

    assert!(button.tap(Letter::C.index()));
    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(button.selected(), Letter::C);
    assert_eq!(button.active_layout(), ActiveLayout::Close);
    assert_exactly_one_set_active(&button);
    assert_eq!(*log.lock(), vec![None, Some(Letter::C)]);

    settle(&mut button);
    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(frame_of(&button, Letter::C), Rect::new(0.0, 0.0, SIDE, SIDE));
    assert_eq!(frame_of(&button, Letter::A), Rect::new(0.0, 0.0, 0.0, SIDE));
    assert_eq!(frame_of(&button, Letter::B), Rect::new(0.0, 0.0, 0.0, SIDE));
    assert_eq!(button.frame(), Rect::new(0.0, 0.0, SIDE, SIDE));

    let palette = button.config().palette;
    assert!(button.buttons().all(|visual| visual.tint() == palette.button));
    assert_eq!(button.highlight().alpha, 0.0);
}

#[test]
fn test_force_close_when_closed_changes_nothing() {
    let mut button = letters();
    let log = record(&button);
    let close_before = button.close_constraints().clone();
    let open_before = button.open_constraints().clone();

    button.force_close();

    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(button.close_constraints(), &close_before);
    assert_eq!(button.open_constraints(), &open_before);
    assert!(!button.is_animating());
    assert!(log.lock().is_empty());
}

#[test]
fn test_force_close_when_open() {
    let mut button = letters();
    button.select(Letter::B).unwrap();
    settle(&mut button);
    open(&mut button);
    let log = record(&button);

    button.force_close();
    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(button.selected(), Letter::B);
    assert_eq!(button.active_layout(), ActiveLayout::Close);
    assert_exactly_one_set_active(&button);

    settle(&mut button);
    assert_eq!(frame_of(&button, Letter::B), Rect::new(0.0, 0.0, SIDE, SIDE));
    assert!(log.lock().is_empty());

    // A second call is a no-op.
    button.force_close();
    assert!(!button.is_animating());
}

#[test]
fn test_tap_while_opening_behaves_as_open() {
    let mut button = letters();
    let log = record(&button);

    assert!(button.tap(Letter::A.index()));
    assert!(button.tap(Letter::B.index()));

    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(button.selected(), Letter::B);
    assert_eq!(*log.lock(), vec![None, Some(Letter::B)]);
    assert_exactly_one_set_active(&button);

    settle(&mut button);
    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(frame_of(&button, Letter::B), Rect::new(0.0, 0.0, SIDE, SIDE));
}

#[test]
fn test_second_transition_starts_from_presented_geometry() {
    let mut button = letters();

    assert!(button.tap(Letter::A.index()));
    let start = Instant::now();
    button.tick(start);
    button.tick(start + Duration::from_millis(100));
    let halfway = button.frame();
    assert!(halfway.width() > SIDE && halfway.width() < 3.0 * SIDE);

    assert!(button.tap(Letter::C.index()));
    assert_exactly_one_set_active(&button);

    // The replacing transition picks up where the first one was.
    let restart = start + Duration::from_millis(120);
    assert!(button.tick(restart));
    assert_eq!(button.frame(), halfway);

    assert!(!button.tick(restart + Duration::from_millis(500)));
    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(button.frame(), button.target_frame());
    assert_eq!(frame_of(&button, Letter::C), Rect::new(0.0, 0.0, SIDE, SIDE));
}

#[test]
fn test_superseded_opening_never_completes() {
    let mut button = letters();

    assert!(button.tap(Letter::A.index()));
    button.force_close();
    settle(&mut button);

    assert_eq!(button.state(), UnfoldState::Closed);
    assert_eq!(button.active_layout(), ActiveLayout::Close);
}

#[test]
fn test_invalid_tag_is_ignored() {
    let mut button = letters();
    let log = record(&button);

    assert!(!button.tap(99));
    assert_eq!(button.state(), UnfoldState::Closed);
    assert!(!button.is_animating());
    assert!(log.lock().is_empty());
}

#[test]
fn test_tap_on_item_outside_universe_is_ignored() {
    let mut button = letters();
    button.set_usable_items([Letter::A, Letter::B]);
    let log = record(&button);

    assert!(!button.tap(Letter::C.index()));
    assert_eq!(button.state(), UnfoldState::Closed);
    assert!(log.lock().is_empty());
}

#[test]
fn test_try_tap_reports_rejection() {
    let mut button = letters();
    assert!(matches!(button.try_tap(99), Err(UnfoldError::InvalidTag(99))));

    button.set_usable_items([Letter::A, Letter::B]);
    let index = Letter::C.index();
    assert!(matches!(
        button.try_tap(index),
        Err(UnfoldError::UnknownItem { index: i }) if i == index
    ));
    assert_eq!(button.state(), UnfoldState::Closed);
    assert!(!button.is_animating());

    button.try_tap(Letter::A.index()).unwrap();
    assert_eq!(button.state(), UnfoldState::Opening);
}

#[test]
fn test_empty_universe_while_open() {
    let mut button = letters();
    open(&mut button);
    let log = record(&button);

    button.set_usable_items(Vec::new());
    assert!(button.open_constraints().is_empty());
    assert!(button.close_constraints().is_empty());
    assert_eq!(button.buttons().count(), 0);
    assert_eq!(button.frame().width(), 0.0);
    assert!(!button.is_animating());

    assert!(!button.tap(Letter::A.index()));
    assert!(log.lock().is_empty());
}

#[test]
fn test_universe_replacement_keeps_present_selection() {
    let mut button = letters();
    button.select(Letter::B).unwrap();
    let log = record(&button);

    button.set_usable_items([Letter::C, Letter::B]);
    assert_eq!(button.selected(), Letter::B);
    assert_eq!(button.usable_items(), &[Letter::C, Letter::B]);
    // Applied at once.
    assert!(!button.is_animating());
    assert_eq!(frame_of(&button, Letter::B), Rect::new(0.0, 0.0, SIDE, SIDE));
    assert_eq!(frame_of(&button, Letter::C), Rect::new(0.0, 0.0, 0.0, SIDE));

    button.set_usable_items([Letter::C]);
    assert_eq!(button.selected(), Letter::C);
    assert!(button.button(Letter::B).is_none());
    assert!(log.lock().is_empty());
}

#[test]
fn test_universe_replacement_drops_duplicates() {
    let mut button = letters();
    button.set_usable_items([Letter::B, Letter::B, Letter::A, Letter::B]);
    assert_eq!(button.usable_items(), &[Letter::B, Letter::A]);
    assert_eq!(button.buttons().count(), 2);
}

#[test]
fn test_universe_replacement_while_opening_settles_open() {
    let mut button = letters();
    assert!(button.tap(Letter::A.index()));

    button.set_usable_items([Letter::A, Letter::C]);
    assert_eq!(button.state(), UnfoldState::Open);
    assert!(!button.is_animating());
    assert_eq!(button.frame().width(), 2.0 * SIDE);
    assert_eq!(frame_of(&button, Letter::C), Rect::new(SIDE, 0.0, SIDE, SIDE));
}

#[test]
fn test_programmatic_selection() {
    let mut button = letters();
    let log = record(&button);

    button.select(Letter::A).unwrap();
    assert!(!button.is_animating());

    button.select(Letter::B).unwrap();
    assert_eq!(button.selected(), Letter::B);
    assert_eq!(button.state(), UnfoldState::Closed);
    assert!(button.is_animating());
    settle(&mut button);
    assert_eq!(frame_of(&button, Letter::B), Rect::new(0.0, 0.0, SIDE, SIDE));
    assert_eq!(frame_of(&button, Letter::A), Rect::new(0.0, 0.0, 0.0, SIDE));
    assert!(log.lock().is_empty());
}

#[test]
fn test_programmatic_selection_while_open_moves_highlight() {
    let mut button = letters();
    open(&mut button);

    button.select(Letter::C).unwrap();
    settle(&mut button);
    assert_eq!(button.state(), UnfoldState::Open);
    assert_eq!(button.highlight().frame, frame_of(&button, Letter::C));

    let palette = button.config().palette;
    assert_eq!(button.button(Letter::C).unwrap().tint(), palette.highlight);
    assert_eq!(button.button(Letter::A).unwrap().tint(), palette.button);
}

#[test]
fn test_select_unknown_item_fails() {
    let mut button = letters();
    button.set_usable_items([Letter::A, Letter::B]);

    let err = button.select(Letter::C).unwrap_err();
    assert!(matches!(err, UnfoldError::UnknownItem { index: 2 }));
    assert_eq!(button.selected(), Letter::A);
    assert!(!button.is_animating());
}

#[test]
fn test_safe_inset() {
    let mut button = letters();

    button.set_safe_inset(20.0);
    assert!(button.is_animating());
    settle(&mut button);
    assert_eq!(frame_of(&button, Letter::A), Rect::new(20.0, 0.0, SIDE, SIDE));
    assert_eq!(button.frame(), Rect::new(0.0, 0.0, 20.0 + SIDE, SIDE));

    open(&mut button);
    assert_eq!(frame_of(&button, Letter::A).left(), 20.0);
    assert_eq!(button.frame().width(), 20.0 + 3.0 * SIDE);

    // Unchanged inset is a no-op.
    button.set_safe_inset(20.0);
    assert!(!button.is_animating());
}

#[test]
fn test_non_finite_safe_inset_is_ignored() {
    let mut button = letters();
    button.set_safe_inset(10.0);
    settle(&mut button);

    for inset in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        button.set_safe_inset(inset);
        assert!(!button.is_animating(), "{inset} started an animation");
        assert_eq!(button.safe_inset(), 10.0);
    }
    assert_eq!(frame_of(&button, Letter::A), Rect::new(10.0, 0.0, SIDE, SIDE));
    assert_eq!(button.frame(), Rect::new(0.0, 0.0, 10.0 + SIDE, SIDE));
}

#[test]
fn test_negative_safe_inset_counts_as_zero() {
    let mut button = letters();
    button.set_safe_inset(12.0);
    settle(&mut button);

    button.set_safe_inset(-20.0);
    assert_eq!(button.safe_inset(), 0.0);
    settle(&mut button);
    assert_eq!(frame_of(&button, Letter::A), Rect::new(0.0, 0.0, SIDE, SIDE));
    assert_eq!(button.frame(), Rect::new(0.0, 0.0, SIDE, SIDE));

    // Already at zero, so further negative insets change nothing.
    button.set_safe_inset(-5.0);
    assert!(!button.is_animating());
    button.set_safe_inset(0.0);
    assert!(!button.is_animating());
}

#[test]
fn test_backdrop_follows_frame() {
    init_tracing();
    let frames = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&frames);
    let mut button =
        UnfoldButton::<Letter>::with_backdrop(UnfoldConfig::default(), move |frame: Rect| {
            sink.lock().push(frame)
        })
        .unwrap();

    assert_eq!(frames.lock().last(), Some(&Rect::new(0.0, 0.0, SIDE, SIDE)));

    let start = Instant::now();
    button.tap(Letter::A.index());
    button.tick(start);
    button.tick(start + Duration::from_millis(100));
    assert_eq!(frames.lock().last(), Some(&button.frame()));
    button.tick(start + Duration::from_millis(500));
    assert_eq!(
        frames.lock().last(),
        Some(&Rect::new(0.0, 0.0, 3.0 * SIDE, SIDE))
    );
}

#[test]
fn test_frame_changed_signal() {
    let mut button = letters();
    let widths = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&widths);
    button
        .frame_changed
        .connect(move |frame| sink.lock().push(frame.width()));

    open(&mut button);
    assert_eq!(widths.lock().last(), Some(&(3.0 * SIDE)));

    // Re-applying the same geometry does not emit.
    let count = widths.lock().len();
    button.set_usable_items([Letter::A, Letter::B, Letter::C]);
    assert_eq!(widths.lock().len(), count);
}

#[test]
fn test_commands_from_another_thread() {
    let mut button = letters();
    let log = record(&button);
    let sender = button.command_sender();

    std::thread::spawn(move || {
        sender
            .post(UnfoldCommand::SetUsableItems(vec![Letter::B, Letter::C]))
            .unwrap();
        sender.post(UnfoldCommand::Tap(Letter::B.index())).unwrap();
        sender.post(UnfoldCommand::Select(Letter::A)).unwrap();
    })
    .join()
    .unwrap();

    // Nothing happens until the owning thread drains the queue.
    assert_eq!(button.state(), UnfoldState::Closed);

    assert_eq!(button.process_pending(), 3);
    assert_eq!(button.usable_items(), &[Letter::B, Letter::C]);
    assert_eq!(button.selected(), Letter::B);
    assert_eq!(button.state(), UnfoldState::Opening);
    assert_eq!(*log.lock(), vec![None]);

    assert_eq!(button.process_pending(), 0);
}

#[test]
fn test_command_sender_outlives_widget() {
    let button = letters();
    let sender = button.command_sender();
    drop(button);
    assert!(matches!(
        sender.post(UnfoldCommand::ForceClose),
        Err(UnfoldError::QueueClosed)
    ));
}

#[test]
fn test_button_at() {
    let mut button = letters();
    assert_eq!(button.button_at(Point::new(10.0, 10.0)), Some(Letter::A.index()));
    assert_eq!(button.button_at(Point::new(60.0, 10.0)), None);

    open(&mut button);
    assert_eq!(
        button.button_at(Point::new(2.0 * SIDE + 1.0, 10.0)),
        Some(Letter::C.index())
    );
}

#[test]
fn test_origin_moves_geometry() {
    let mut button = letters();
    button.set_origin(Point::new(10.0, 5.0));
    assert_eq!(button.frame(), Rect::new(10.0, 5.0, SIDE, SIDE));
    assert_eq!(frame_of(&button, Letter::A), Rect::new(10.0, 5.0, SIDE, SIDE));
}

#[test]
fn test_rectangular_buttons() {
    init_tracing();
    let config = UnfoldConfig::default().with_button_size(Size::new(40.0, 30.0));
    let mut button = UnfoldButton::<Letter>::new(config).unwrap();
    assert_eq!(button.frame(), Rect::new(0.0, 0.0, 40.0, 30.0));

    open(&mut button);
    assert_eq!(button.frame(), Rect::new(0.0, 0.0, 120.0, 30.0));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = UnfoldConfig::default().with_button_size(-1.0);
    assert!(matches!(
        UnfoldButton::<Letter>::new(config),
        Err(UnfoldError::Config(_))
    ));
}

#[test]
fn test_rendered_images_follow_tints() {
    init_tracing();
    let mut button = UnfoldButton::<Shape>::new(UnfoldConfig::default()).unwrap();
    let palette = button.config().palette;

    assert!(button.tap(Shape::Dot.index()));
    settle(&mut button);

    let dot = button.button(Shape::Dot).unwrap().rendered_image().unwrap();
    assert_eq!(dot.get_pixel(0, 0).0, palette.highlight.to_rgba8());

    let ring = button.button(Shape::Ring).unwrap().rendered_image().unwrap();
    assert_eq!(ring.get_pixel(1, 1).0, palette.button.to_rgba8());
}
