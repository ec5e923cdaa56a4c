//! Construction of the folded and unfolded constraint sets.
//!
//! Both builders are pure: they derive a fresh [`ConstraintSet`] from the
//! item universe, the selected item and the safe inset, and never look at a
//! previous set. The returned sets are inactive.

use unfold_core::logging::{span_names, targets};

use super::constraint::{Anchor, Constraint, ConstraintSet, Element};

/// Build the unfolded layout.
///
/// Buttons are laid out edge to edge in universe order, starting `inset`
/// points after the container's leading edge. The container ends where the
/// last button ends, and the highlight sits on the selected button.
///
/// An empty universe yields an empty set. If `selected` is not part of
/// `items`, the highlight anchor is left out.
pub fn build_open<T>(items: &[T], selected: T, inset: f32) -> ConstraintSet<T>
where
    T: Copy + PartialEq + std::fmt::Debug,
{
    let _span = tracing::trace_span!(
        target: targets::LAYOUT,
        "build_open",
        operation = span_names::LAYOUT_BUILD,
        items = items.len()
    )
    .entered();

    let mut set = ConstraintSet::new();
    let (Some(&first), Some(&last)) = (items.first(), items.last()) else {
        return set;
    };

    set.push(Constraint::offset(
        Anchor::leading(Element::Button(first)),
        Anchor::leading(Element::Container),
        inset,
    ));
    for pair in items.windows(2) {
        set.push(Constraint::equal(
            Anchor::leading(Element::Button(pair[1])),
            Anchor::trailing(Element::Button(pair[0])),
        ));
    }
    set.push(Constraint::equal(
        Anchor::trailing(Element::Container),
        Anchor::trailing(Element::Button(last)),
    ));

    if items.contains(&selected) {
        set.push(Constraint::equal(
            Anchor::leading(Element::Highlight),
            Anchor::leading(Element::Button(selected)),
        ));
    } else {
        tracing::warn!(
            target: targets::LAYOUT,
            ?selected,
            "selected item is not among the usable items; open layout has no highlight"
        );
    }

    tracing::trace!(target: targets::LAYOUT, constraints = set.len(), "built open layout");
    set
}

/// Build the folded layout.
///
/// The selected button spans the container, `inset` points after its leading
/// edge. Buttons before it collapse onto its leading edge and buttons after
/// it collapse onto its trailing edge, so only the selected button is
/// visible. The highlight sits on the selected button.
///
/// An empty universe yields an empty set. If `selected` is not part of
/// `items` nothing can be anchored and the set is empty as well.
pub fn build_close<T>(items: &[T], selected: T, inset: f32) -> ConstraintSet<T>
where
    T: Copy + PartialEq + std::fmt::Debug,
{
    let _span = tracing::trace_span!(
        target: targets::LAYOUT,
        "build_close",
        operation = span_names::LAYOUT_BUILD,
        items = items.len()
    )
    .entered();

    let mut set = ConstraintSet::new();
    if items.is_empty() {
        return set;
    }

    let Some(position) = items.iter().position(|item| *item == selected) else {
        tracing::warn!(
            target: targets::LAYOUT,
            ?selected,
            "selected item is not among the usable items; close layout is empty"
        );
        return set;
    };

    let anchor = Element::Button(selected);
    set.push(Constraint::offset(
        Anchor::leading(anchor),
        Anchor::leading(Element::Container),
        inset,
    ));
    set.push(Constraint::equal(
        Anchor::trailing(Element::Container),
        Anchor::trailing(anchor),
    ));

    for (i, &item) in items.iter().enumerate() {
        let pin = match i.cmp(&position) {
            std::cmp::Ordering::Less => Anchor::leading(anchor),
            std::cmp::Ordering::Greater => Anchor::trailing(anchor),
            std::cmp::Ordering::Equal => continue,
        };
        set.push(Constraint::equal(Anchor::leading(Element::Button(item)), pin));
        set.push(Constraint::equal(Anchor::trailing(Element::Button(item)), pin));
    }

    set.push(Constraint::equal(
        Anchor::leading(Element::Highlight),
        Anchor::leading(anchor),
    ));

    tracing::trace!(target: targets::LAYOUT, constraints = set.len(), "built close layout");
    set
}
