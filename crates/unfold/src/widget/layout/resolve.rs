//! Turning a constraint set into concrete frames.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use unfold_core::logging::{span_names, targets};

use super::constraint::{Anchor, ConstraintSet, Element};
use crate::types::{Point, Rect, Size};

/// Tolerance under which two values for the same edge are considered equal.
const CONFLICT_EPSILON: f32 = 1e-3;

/// Frames produced by [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFrames<T> {
    /// The widget's own bounds.
    pub container: Rect,
    /// One frame per item, in universe order.
    pub buttons: Vec<(T, Rect)>,
    /// The highlight marker, if the set anchors it.
    pub highlight: Option<Rect>,
}

impl<T: PartialEq> LayoutFrames<T> {
    /// The frame of `item`'s button.
    pub fn frame(&self, item: &T) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(candidate, _)| candidate == item)
            .map(|(_, rect)| *rect)
    }
}

/// Edge values known so far.
struct Solution<T> {
    edges: HashMap<Anchor<T>, f32>,
}

impl<T: Copy + Eq + Hash + Debug> Solution<T> {
    fn get(&self, anchor: &Anchor<T>) -> Option<f32> {
        self.edges.get(anchor).copied()
    }

    /// Record a value. Returns `true` if the edge was unknown.
    fn set(&mut self, anchor: Anchor<T>, value: f32) -> bool {
        match self.edges.get(&anchor) {
            None => {
                self.edges.insert(anchor, value);
                true
            }
            Some(&existing) => {
                if (existing - value).abs() > CONFLICT_EPSILON {
                    tracing::warn!(
                        target: targets::LAYOUT,
                        element = ?anchor.element,
                        edge = ?anchor.edge,
                        existing,
                        rejected = value,
                        "conflicting constraint ignored"
                    );
                }
                false
            }
        }
    }

    fn edges_of(&self, element: Element<T>) -> (Option<f32>, Option<f32>) {
        (
            self.get(&Anchor::leading(element)),
            self.get(&Anchor::trailing(element)),
        )
    }
}

/// Resolve `set` into frames.
///
/// The container's leading edge is fixed at `origin.x`. Equalities are
/// propagated in both directions until nothing changes; then the first item
/// (in universe order, the highlight last) that has exactly one known edge
/// takes its intrinsic width from `intrinsic`, and propagation resumes.
///
/// Elements the set never reaches are placed at the container's leading edge
/// with their intrinsic width. An unresolved container trailing edge yields
/// a zero-width container. All frames share `origin.y` and the intrinsic
/// height.
pub fn resolve<T>(
    set: &ConstraintSet<T>,
    items: &[T],
    origin: Point,
    intrinsic: Size,
) -> LayoutFrames<T>
where
    T: Copy + Eq + Hash + Debug,
{
    let _span = tracing::trace_span!(
        target: targets::LAYOUT,
        "resolve",
        operation = span_names::LAYOUT_RESOLVE,
        constraints = set.len()
    )
    .entered();

    let mut solution = Solution {
        edges: HashMap::new(),
    };
    solution.set(Anchor::leading(Element::Container), origin.x);

    let sized: Vec<Element<T>> = items
        .iter()
        .map(|&item| Element::Button(item))
        .chain(std::iter::once(Element::Highlight))
        .collect();

    // Every round either settles one edge or stops.
    let max_rounds = 2 * (set.len() + sized.len()) + 1;
    for _ in 0..max_rounds {
        propagate(set, &mut solution);

        let next = sized.iter().find_map(|&element| match solution.edges_of(element) {
            (Some(leading), None) => Some((Anchor::trailing(element), leading + intrinsic.width)),
            (None, Some(trailing)) => Some((Anchor::leading(element), trailing - intrinsic.width)),
            _ => None,
        });
        match next {
            Some((anchor, value)) => {
                solution.set(anchor, value);
            }
            None => break,
        }
    }

    let top = origin.y;
    let height = intrinsic.height;
    let container_leading = origin.x;
    let container = match solution.edges_of(Element::Container) {
        (_, Some(trailing)) => {
            Rect::from_edges(container_leading, trailing.max(container_leading), top, height)
        }
        _ => Rect::new(container_leading, top, 0.0, height),
    };

    let frame_of = |element: Element<T>| match solution.edges_of(element) {
        (Some(leading), Some(trailing)) => {
            Rect::from_edges(leading, trailing.max(leading), top, height)
        }
        _ => Rect::new(container_leading, top, intrinsic.width, height),
    };

    let buttons = items
        .iter()
        .map(|&item| (item, frame_of(Element::Button(item))))
        .collect();

    let highlight_anchored = set
        .iter()
        .any(|c| c.first.element == Element::Highlight || c.second.element == Element::Highlight);
    let highlight = highlight_anchored.then(|| frame_of(Element::Highlight));

    tracing::trace!(
        target: targets::LAYOUT,
        container_width = container.width(),
        resolved_edges = solution.edges.len(),
        "resolved layout"
    );

    LayoutFrames {
        container,
        buttons,
        highlight,
    }
}

/// Apply every equality whose one side is known until nothing changes.
fn propagate<T>(set: &ConstraintSet<T>, solution: &mut Solution<T>)
where
    T: Copy + Eq + Hash + Debug,
{
    let max_passes = set.len() + 1;
    for _ in 0..max_passes {
        let mut changed = false;
        for constraint in set {
            match (solution.get(&constraint.first), solution.get(&constraint.second)) {
                (_, Some(second)) => {
                    changed |= solution.set(constraint.first, second + constraint.constant);
                }
                (Some(first), None) => {
                    changed |= solution.set(constraint.second, first - constraint.constant);
                }
                (None, None) => {}
            }
        }
        if !changed {
            return;
        }
    }
    tracing::warn!(
        target: targets::LAYOUT,
        passes = max_passes,
        "constraint propagation did not settle"
    );
}
