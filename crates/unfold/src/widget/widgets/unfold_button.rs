//! The unfold button widget.
//!
//! This module provides [`UnfoldButton`], a row of buttons that is folded
//! into the single selected button and unfolds into the whole row when
//! tapped. Tapping a button of the unfolded row selects it and folds the row
//! again.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use unfold::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ButtonContent)]
//! enum Timer {
//!     Off,
//!     Three,
//!     Ten,
//! }
//!
//! let mut button = UnfoldButton::<Timer>::new(UnfoldConfig::default()).unwrap();
//! button.selection_changed.connect(|item| println!("selection: {item:?}"));
//!
//! // Unfold, then pick `Ten`.
//! assert!(button.tap(Timer::Off.index()));
//! assert_eq!(button.state(), UnfoldState::Opening);
//! button.tick(Instant::now());
//! button.finish_animation();
//! assert_eq!(button.state(), UnfoldState::Open);
//!
//! assert!(button.tap(Timer::Ten.index()));
//! assert_eq!(button.selected(), Timer::Ten);
//! assert_eq!(button.state(), UnfoldState::Closed);
//! ```
//!
//! # Signals
//!
//! - `selection_changed(Option<T>)`: `None` when the row starts to unfold,
//!   `Some(item)` when an item is picked by tap
//! - `frame_changed(Rect)`: the presented frame moved or resized

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use unfold_core::image::RgbaImage;
use unfold_core::logging::{PerfSpan, span_names, targets};
use unfold_core::{
    ButtonContent, CommandQueue, CommandSender, DisplayImage, Result, Signal, ThreadAffinity,
    UnfoldError,
};

use crate::config::UnfoldConfig;
use crate::types::{Color, Point, Rect};
use crate::widget::animation::{Interpolate, Spring, Transition, TransitionState};
use crate::widget::layout::{ConstraintSet, LayoutFrames, build_close, build_open, resolve};

/// Logical state of the widget.
///
/// The state changes as soon as a transition is requested; the presented
/// geometry follows over the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnfoldState {
    /// Only the selected button is shown.
    #[default]
    Closed,
    /// The row is unfolding; taps behave as in [`UnfoldState::Open`].
    Opening,
    /// The whole row is shown.
    Open,
}

/// Which constraint set drives the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveLayout {
    /// The folded set.
    Close,
    /// The unfolded set.
    Open,
}

/// Work posted to the widget from another thread.
///
/// Commands are applied in posting order by [`UnfoldButton::process_pending`].
#[derive(Debug, Clone, PartialEq)]
pub enum UnfoldCommand<T> {
    /// Tap the button with this tag.
    Tap(i64),
    /// Select an item programmatically.
    Select(T),
    /// Replace the item universe.
    SetUsableItems(Vec<T>),
    /// Change the leading safe inset.
    SetSafeInset(f32),
    /// Fold the row without notifying observers.
    ForceClose,
}

/// A view whose frame tracks the widget's presented frame.
///
/// The backdrop is resized on every layout pass, including every animation
/// frame.
pub trait Backdrop {
    /// Move the backdrop to `frame`.
    fn set_frame(&mut self, frame: Rect);
}

impl<F: FnMut(Rect)> Backdrop for F {
    fn set_frame(&mut self, frame: Rect) {
        self(frame)
    }
}

/// Presentation of one button.
#[derive(Debug, Clone)]
pub struct ButtonVisual<T> {
    item: T,
    tag: i64,
    image: Option<DisplayImage>,
    frame: Rect,
    tint: Color,
}

impl<T: ButtonContent> ButtonVisual<T> {
    fn new(item: T, frame: Rect, tint: Color) -> Self {
        Self {
            item,
            tag: item.index(),
            image: item.display_image(),
            frame,
            tint,
        }
    }

    /// The item this button selects.
    pub fn item(&self) -> T {
        self.item
    }

    /// The button's tag, equal to the item's index.
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// The item's template image.
    pub fn image(&self) -> Option<&DisplayImage> {
        self.image.as_ref()
    }

    /// The presented frame.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The presented tint.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Whether the button currently covers any area.
    pub fn is_visible(&self) -> bool {
        !self.frame.is_empty()
    }

    /// The template image rendered with the current tint.
    pub fn rendered_image(&self) -> Option<RgbaImage> {
        self.image
            .as_ref()
            .map(|image| image.tinted(self.tint.to_rgba8()))
    }
}

/// Presentation of the highlight marker behind the selected button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightVisual {
    /// The presented frame.
    pub frame: Rect,
    /// The overlay color from the palette.
    pub color: Color,
    /// Fade factor: 0.0 when folded, 1.0 when unfolded.
    pub alpha: f32,
}

impl HighlightVisual {
    /// The overlay color with the fade applied.
    pub fn effective_color(&self) -> Color {
        self.color.with_alpha(self.color.a * self.alpha)
    }
}

/// Snapshot of everything the animation moves.
#[derive(Debug, Clone, PartialEq)]
struct Presentation<T> {
    container: Rect,
    buttons: Vec<(T, Rect, Color)>,
    highlight: Rect,
    overlay_alpha: f32,
}

impl<T: Copy + PartialEq> Interpolate for Presentation<T> {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        let buttons = target
            .buttons
            .iter()
            .map(|&(item, frame, tint)| {
                match self.buttons.iter().find(|(from, _, _)| *from == item) {
                    Some(&(_, from_frame, from_tint)) => (
                        item,
                        from_frame.interpolate(&frame, t),
                        from_tint.interpolate(&tint, t),
                    ),
                    None => (item, frame, tint),
                }
            })
            .collect();

        Self {
            container: self.container.interpolate(&target.container, t),
            buttons,
            highlight: self.highlight.interpolate(&target.highlight, t),
            overlay_alpha: self.overlay_alpha.interpolate(&target.overlay_alpha, t),
        }
    }
}

/// A row of buttons that folds into its selected button.
///
/// `UnfoldButton` is generic over the [`ButtonContent`] it offers. Every item
/// of the current universe gets one button, tagged with the item's index.
/// Exactly one item is selected at any time; while the universe is non-empty
/// the selection is always part of it.
///
/// # Threading
///
/// The widget belongs to the thread that created it and every mutating call
/// checks this in debug builds. Other threads post [`UnfoldCommand`]s through
/// [`command_sender`](Self::command_sender); the owning thread applies them
/// with [`process_pending`](Self::process_pending).
///
/// # Animation
///
/// Transitions run on a fixed critically damped spring. The widget has no
/// clock of its own: the host calls [`tick`](Self::tick) once per frame.
pub struct UnfoldButton<T: ButtonContent> {
    config: UnfoldConfig,
    origin: Point,
    safe_inset: f32,

    state: UnfoldState,
    selected: T,
    all_selection: Vec<T>,
    visuals: HashMap<T, ButtonVisual<T>>,

    open_constraints: ConstraintSet<T>,
    close_constraints: ConstraintSet<T>,

    frame: Rect,
    highlight: HighlightVisual,
    transition: Option<Transition<Presentation<T>>>,

    backdrop: Option<Box<dyn Backdrop>>,
    queue: CommandQueue<UnfoldCommand<T>>,
    affinity: ThreadAffinity,

    /// Signal emitted when the selection is reported to observers.
    ///
    /// Carries `None` when the row starts to unfold and `Some(item)` when an
    /// item is picked by tap. Programmatic selection is not reported.
    pub selection_changed: Signal<Option<T>>,

    /// Signal emitted when the presented frame changes.
    pub frame_changed: Signal<Rect>,
}

impl<T: ButtonContent> UnfoldButton<T> {
    /// Create a folded widget offering every value of `T`.
    ///
    /// The initial selection is the value with index 0, or the first value
    /// if no value has index 0.
    ///
    /// Fails with [`UnfoldError::EmptyContent`] if `T` has no values and with
    /// [`UnfoldError::Config`] if the configuration is unusable.
    pub fn new(config: UnfoldConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a widget whose backdrop follows its frame.
    pub fn with_backdrop(config: UnfoldConfig, backdrop: impl Backdrop + 'static) -> Result<Self> {
        Self::build(config, Some(Box::new(backdrop)))
    }

    fn build(config: UnfoldConfig, backdrop: Option<Box<dyn Backdrop>>) -> Result<Self> {
        config.validate()?;

        let all_selection = dedupe(T::all_values());
        let Some(&first) = all_selection.first() else {
            return Err(UnfoldError::EmptyContent {
                type_name: std::any::type_name::<T>(),
            });
        };
        let selected = T::from_index(0)
            .filter(|item| all_selection.contains(item))
            .unwrap_or(first);

        let height = config.button_size.size().height;
        let mut button = Self {
            config,
            origin: Point::ZERO,
            safe_inset: 0.0,
            state: UnfoldState::Closed,
            selected,
            all_selection: Vec::new(),
            visuals: HashMap::new(),
            open_constraints: ConstraintSet::new(),
            close_constraints: ConstraintSet::new(),
            frame: Rect::new(0.0, 0.0, 0.0, height),
            highlight: HighlightVisual {
                frame: Rect::new(0.0, 0.0, 0.0, height),
                color: config.palette.overlay,
                alpha: 0.0,
            },
            transition: None,
            backdrop,
            queue: CommandQueue::new(),
            affinity: ThreadAffinity::current(),
            selection_changed: Signal::new(),
            frame_changed: Signal::new(),
        };

        button.reset_visuals(all_selection);
        button.rebuild_layouts();
        button.apply_layout(false);

        tracing::debug!(
            target: targets::WIDGET,
            content = std::any::type_name::<T>(),
            items = button.all_selection.len(),
            selected = ?button.selected,
            "created unfold button"
        );
        Ok(button)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The logical state.
    pub fn state(&self) -> UnfoldState {
        self.state
    }

    /// The selected item.
    pub fn selected(&self) -> T {
        self.selected
    }

    /// The item universe, in display order.
    pub fn usable_items(&self) -> &[T] {
        &self.all_selection
    }

    /// The configuration the widget was built with.
    pub fn config(&self) -> &UnfoldConfig {
        &self.config
    }

    /// The leading safe inset.
    pub fn safe_inset(&self) -> f32 {
        self.safe_inset
    }

    /// The presented frame.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The frame the widget settles at once the running animation ends.
    pub fn target_frame(&self) -> Rect {
        self.resolve_active().container
    }

    /// Button presentations, in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &ButtonVisual<T>> + '_ {
        self.all_selection
            .iter()
            .filter_map(|item| self.visuals.get(item))
    }

    /// The presentation of `item`'s button.
    pub fn button(&self, item: T) -> Option<&ButtonVisual<T>> {
        self.visuals.get(&item)
    }

    /// The highlight marker's presentation.
    pub fn highlight(&self) -> &HighlightVisual {
        &self.highlight
    }

    /// Which constraint set is active.
    pub fn active_layout(&self) -> ActiveLayout {
        if self.open_constraints.is_active() {
            ActiveLayout::Open
        } else {
            ActiveLayout::Close
        }
    }

    /// The unfolded constraint set.
    pub fn open_constraints(&self) -> &ConstraintSet<T> {
        &self.open_constraints
    }

    /// The folded constraint set.
    pub fn close_constraints(&self) -> &ConstraintSet<T> {
        &self.close_constraints
    }

    /// Whether a transition is in progress.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The tag of the visible button under `point`, if any.
    ///
    /// The selected button wins where buttons overlap.
    pub fn button_at(&self, point: Point) -> Option<i64> {
        let selected = self.visuals.get(&self.selected);
        selected
            .into_iter()
            .chain(self.buttons())
            .find(|visual| visual.frame.contains(point))
            .map(|visual| visual.tag)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a tap on the button tagged `tag`.
    ///
    /// While folded, the row unfolds and observers receive `None`. Otherwise
    /// the tapped item becomes the selection, observers receive it and the
    /// row folds.
    ///
    /// Returns `false`, leaving everything unchanged, if the tag maps to no
    /// item or to an item without a button. See [`try_tap`](Self::try_tap)
    /// for the reason.
    pub fn tap(&mut self, tag: i64) -> bool {
        match self.try_tap(tag) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(target: targets::WIDGET, tag, %error, "tap ignored");
                false
            }
        }
    }

    /// Like [`tap`](Self::tap), but reports why a tap was rejected.
    ///
    /// Fails with [`UnfoldError::InvalidTag`] if `tag` maps to no content
    /// value, and with [`UnfoldError::UnknownItem`] if the item has no
    /// button. Nothing changes on failure.
    pub fn try_tap(&mut self, tag: i64) -> Result<()> {
        self.affinity.debug_assert_same_thread();

        let item = T::from_index(tag).ok_or(UnfoldError::InvalidTag(tag))?;
        if !self.visuals.contains_key(&item) {
            return Err(UnfoldError::UnknownItem { index: tag });
        }

        match self.state {
            UnfoldState::Closed => {
                tracing::debug!(target: targets::WIDGET, ?item, "unfolding");
                self.state = UnfoldState::Opening;
                self.selection_changed.emit(None);
                self.switch_layout(ActiveLayout::Open);
                self.apply_layout(true);
            }
            UnfoldState::Opening | UnfoldState::Open => {
                tracing::debug!(target: targets::WIDGET, ?item, "picked item, folding");
                self.selected = item;
                self.state = UnfoldState::Closed;
                self.selection_changed.emit(Some(item));
                self.rebuild_layouts();
                self.switch_layout(ActiveLayout::Close);
                self.apply_layout(true);
            }
        }
        Ok(())
    }

    /// Fold the row without notifying observers.
    ///
    /// Does nothing when already folded.
    pub fn force_close(&mut self) {
        self.affinity.debug_assert_same_thread();

        if self.state == UnfoldState::Closed {
            tracing::trace!(target: targets::WIDGET, "force_close ignored: already closed");
            return;
        }
        tracing::debug!(target: targets::WIDGET, from = ?self.state, "force closing");
        self.state = UnfoldState::Closed;
        self.switch_layout(ActiveLayout::Close);
        self.apply_layout(true);
    }

    /// Select `item` without notifying observers.
    ///
    /// The current state is re-applied with animation around the new
    /// selection. Selecting the current selection does nothing.
    ///
    /// Fails with [`UnfoldError::UnknownItem`] if the universe is non-empty
    /// and does not contain `item`.
    pub fn select(&mut self, item: T) -> Result<()> {
        self.affinity.debug_assert_same_thread();

        if !self.all_selection.is_empty() && !self.all_selection.contains(&item) {
            return Err(UnfoldError::UnknownItem {
                index: item.index(),
            });
        }
        if item == self.selected {
            return Ok(());
        }

        tracing::debug!(target: targets::WIDGET, ?item, "selected programmatically");
        self.selected = item;
        self.rebuild_layouts();
        self.apply_layout(true);
        Ok(())
    }

    /// Replace the item universe.
    ///
    /// Duplicates are dropped, keeping the first occurrence. All buttons are
    /// rebuilt and the active layout is applied without animation. If the
    /// selection is not part of a non-empty new universe, the first new item
    /// becomes the selection; observers are not notified.
    pub fn set_usable_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.affinity.debug_assert_same_thread();

        let items = dedupe(items);
        if let Some(&first) = items.first()
            && !items.contains(&self.selected)
        {
            tracing::debug!(
                target: targets::WIDGET,
                previous = ?self.selected,
                replacement = ?first,
                "selection left the usable items"
            );
            self.selected = first;
        }

        tracing::debug!(target: targets::WIDGET, items = items.len(), "usable items replaced");
        self.reset_visuals(items);
        self.rebuild_layouts();
        self.apply_layout(false);
    }

    /// Set the space kept free before the first button.
    ///
    /// Both layouts are rebuilt and the current state is re-applied with
    /// animation. Setting the current inset does nothing. Negative insets
    /// count as zero; non-finite ones are ignored.
    pub fn set_safe_inset(&mut self, inset: f32) {
        self.affinity.debug_assert_same_thread();

        if !inset.is_finite() {
            tracing::warn!(target: targets::WIDGET, inset, "safe inset ignored: not finite");
            return;
        }
        let inset = inset.max(0.0);
        if inset == self.safe_inset {
            return;
        }
        tracing::debug!(target: targets::WIDGET, inset, "safe inset changed");
        self.safe_inset = inset;
        self.rebuild_layouts();
        self.apply_layout(true);
    }

    /// Move the widget's leading top corner.
    ///
    /// The geometry follows immediately, without animation.
    pub fn set_origin(&mut self, origin: Point) {
        self.affinity.debug_assert_same_thread();

        if origin == self.origin {
            return;
        }
        self.origin = origin;
        self.apply_layout(false);
    }

    // =========================================================================
    // Frame clock
    // =========================================================================

    /// Advance the running animation to `now`.
    ///
    /// Returns `true` while the animation still needs frames.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.affinity.debug_assert_same_thread();

        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        let _perf = PerfSpan::new(span_names::ANIMATION_TICK);

        match transition.sample(now) {
            TransitionState::Running { value, .. } => {
                self.present(value);
                true
            }
            TransitionState::Finished(value) => {
                self.transition = None;
                self.present(value);
                self.complete_transition();
                false
            }
        }
    }

    /// Jump to the end of the running animation.
    pub fn finish_animation(&mut self) {
        self.affinity.debug_assert_same_thread();

        if let Some(transition) = self.transition.take() {
            self.present(transition.target().clone());
            self.complete_transition();
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Get a sender that other threads can post commands through.
    pub fn command_sender(&self) -> CommandSender<UnfoldCommand<T>> {
        self.queue.sender()
    }

    /// Apply every pending command in posting order.
    ///
    /// Returns the number of commands applied.
    pub fn process_pending(&mut self) -> usize {
        let mut pending = Vec::new();
        let count = self.queue.drain(|command| pending.push(command));
        for command in pending {
            self.handle(command);
        }
        count
    }

    fn handle(&mut self, command: UnfoldCommand<T>) {
        tracing::trace!(target: targets::WIDGET, ?command, "handling command");
        match command {
            UnfoldCommand::Tap(tag) => {
                self.tap(tag);
            }
            UnfoldCommand::Select(item) => {
                if let Err(error) = self.select(item) {
                    tracing::warn!(target: targets::WIDGET, %error, "posted selection rejected");
                }
            }
            UnfoldCommand::SetUsableItems(items) => self.set_usable_items(items),
            UnfoldCommand::SetSafeInset(inset) => self.set_safe_inset(inset),
            UnfoldCommand::ForceClose => self.force_close(),
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn reset_visuals(&mut self, items: Vec<T>) {
        let size = self.config.button_size.size();
        let tint = self.config.palette.button;
        let frame = Rect::new(self.origin.x, self.origin.y, size.width, size.height);

        self.visuals = items
            .iter()
            .map(|&item| (item, ButtonVisual::new(item, frame, tint)))
            .collect();
        self.all_selection = items;
    }

    /// Rebuild both sets, keeping the active one active.
    fn rebuild_layouts(&mut self) {
        let active = self.active_layout();
        self.open_constraints = build_open(&self.all_selection, self.selected, self.safe_inset);
        self.close_constraints = build_close(&self.all_selection, self.selected, self.safe_inset);
        match active {
            ActiveLayout::Open => self.open_constraints.activate(),
            ActiveLayout::Close => self.close_constraints.activate(),
        };
    }

    /// Deactivate the other set, then activate `target`.
    fn switch_layout(&mut self, target: ActiveLayout) {
        let (from, to) = match target {
            ActiveLayout::Open => (&mut self.close_constraints, &mut self.open_constraints),
            ActiveLayout::Close => (&mut self.open_constraints, &mut self.close_constraints),
        };
        from.deactivate();
        to.activate();
        tracing::trace!(target: targets::LAYOUT, ?target, "switched constraint set");
    }

    fn resolve_active(&self) -> LayoutFrames<T> {
        let set = match self.active_layout() {
            ActiveLayout::Open => &self.open_constraints,
            ActiveLayout::Close => &self.close_constraints,
        };
        resolve(
            set,
            &self.all_selection,
            self.origin,
            self.config.button_size.size(),
        )
    }

    /// Where the current state settles.
    fn target_presentation(&self) -> Presentation<T> {
        let frames = self.resolve_active();
        let palette = &self.config.palette;
        let unfolded = self.state != UnfoldState::Closed;

        let buttons = frames
            .buttons
            .iter()
            .map(|&(item, frame)| {
                let tint = if unfolded && item == self.selected {
                    palette.highlight
                } else {
                    palette.button
                };
                (item, frame, tint)
            })
            .collect();

        let container = frames.container;
        let highlight = frames
            .highlight
            .unwrap_or_else(|| Rect::new(container.left(), container.top(), 0.0, container.height()));

        Presentation {
            container,
            buttons,
            highlight,
            overlay_alpha: if unfolded { 1.0 } else { 0.0 },
        }
    }

    /// What is on screen right now.
    fn presented(&self) -> Presentation<T> {
        Presentation {
            container: self.frame,
            buttons: self
                .buttons()
                .map(|visual| (visual.item, visual.frame, visual.tint))
                .collect(),
            highlight: self.highlight.frame,
            overlay_alpha: self.highlight.alpha,
        }
    }

    /// Drive the presentation towards the active layout.
    ///
    /// An animated apply starts from the presented geometry and replaces any
    /// running transition. Otherwise the target is presented at once and the
    /// transition settles.
    fn apply_layout(&mut self, animated: bool) {
        let _perf = PerfSpan::new(span_names::LAYOUT_APPLY);
        let target = self.target_presentation();

        if !animated {
            self.transition = None;
            self.present(target);
            self.complete_transition();
            return;
        }

        if self.transition.is_some() {
            tracing::debug!(target: targets::ANIMATION, "superseding running transition");
        }
        let from = self.presented();
        self.transition = Some(Transition::new(from, target, Spring::UNFOLD));
        tracing::trace!(target: targets::ANIMATION, state = ?self.state, "transition started");
    }

    fn present(&mut self, presentation: Presentation<T>) {
        for (item, frame, tint) in presentation.buttons {
            if let Some(visual) = self.visuals.get_mut(&item) {
                visual.frame = frame;
                visual.tint = tint;
            }
        }
        self.highlight.frame = presentation.highlight;
        self.highlight.alpha = presentation.overlay_alpha;

        let frame = presentation.container;
        let moved = frame != self.frame;
        self.frame = frame;
        if let Some(backdrop) = self.backdrop.as_mut() {
            backdrop.set_frame(frame);
        }
        if moved {
            self.frame_changed.emit(frame);
        }
    }

    /// Confirm the terminal state once the presentation has settled.
    fn complete_transition(&mut self) {
        if self.state == UnfoldState::Opening {
            self.state = UnfoldState::Open;
        }
        tracing::trace!(target: targets::ANIMATION, state = ?self.state, "transition settled");
    }
}

impl<T: ButtonContent> std::fmt::Debug for UnfoldButton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnfoldButton")
            .field("state", &self.state)
            .field("selected", &self.selected)
            .field("items", &self.all_selection)
            .field("frame", &self.frame)
            .field("animating", &self.transition.is_some())
            .finish_non_exhaustive()
    }
}

/// Drop repeated items, keeping first occurrences in order.
fn dedupe<T: ButtonContent>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}
