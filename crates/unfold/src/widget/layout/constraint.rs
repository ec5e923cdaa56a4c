//! Declarative 1-D constraints between widget edges.
//!
//! A [`Constraint`] states that one edge equals another edge plus a constant,
//! like `button.leading == container.leading + inset`. Constraints are
//! grouped into [`ConstraintSet`]s that are activated and deactivated as a
//! whole; exactly one set drives the widget's geometry at a time.
//!
//! Only horizontal edges exist: every element spans the full height of the
//! container.

use std::fmt;

/// A horizontal edge of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The leading (left) edge.
    Leading,
    /// The trailing (right) edge.
    Trailing,
}

/// Something with edges that constraints can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element<T> {
    /// The widget's own bounds.
    Container,
    /// The button for one item.
    Button(T),
    /// The highlight marker drawn behind the selected button.
    Highlight,
}

/// One edge of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor<T> {
    /// The element the edge belongs to.
    pub element: Element<T>,
    /// Which edge.
    pub edge: Edge,
}

impl<T> Anchor<T> {
    /// The leading edge of an element.
    pub fn leading(element: Element<T>) -> Self {
        Self {
            element,
            edge: Edge::Leading,
        }
    }

    /// The trailing edge of an element.
    pub fn trailing(element: Element<T>) -> Self {
        Self {
            element,
            edge: Edge::Trailing,
        }
    }
}

/// `first == second + constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint<T> {
    /// The constrained edge.
    pub first: Anchor<T>,
    /// The reference edge.
    pub second: Anchor<T>,
    /// Offset from the reference edge, in points.
    pub constant: f32,
}

impl<T> Constraint<T> {
    /// `first == second`.
    pub fn equal(first: Anchor<T>, second: Anchor<T>) -> Self {
        Self::offset(first, second, 0.0)
    }

    /// `first == second + constant`.
    pub fn offset(first: Anchor<T>, second: Anchor<T>, constant: f32) -> Self {
        Self {
            first,
            second,
            constant,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}.{:?} == {:?}.{:?}",
            self.first.element, self.first.edge, self.second.element, self.second.edge
        )?;
        if self.constant != 0.0 {
            write!(f, " + {}", self.constant)?;
        }
        Ok(())
    }
}

/// An ordered group of constraints that is activated as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSet<T> {
    constraints: Vec<Constraint<T>>,
    active: bool,
}

impl<T> Default for ConstraintSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConstraintSet<T> {
    /// Create an empty, inactive set.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            active: false,
        }
    }

    /// Append a constraint.
    pub fn push(&mut self, constraint: Constraint<T>) {
        self.constraints.push(constraint);
    }

    /// The constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint<T>] {
        &self.constraints
    }

    /// Iterate over the constraints.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint<T>> {
        self.constraints.iter()
    }

    /// Get the number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Check if the set holds no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether the set currently drives the geometry.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate the set. Returns `false` if it already was active.
    pub fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    /// Deactivate the set. Returns `false` if it already was inactive.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

impl<T: PartialEq> ConstraintSet<T> {
    /// All constraints whose constrained edge belongs to `element`.
    pub fn constraints_on<'a>(
        &'a self,
        element: &'a Element<T>,
    ) -> impl Iterator<Item = &'a Constraint<T>> + 'a {
        self.constraints
            .iter()
            .filter(move |c| c.first.element == *element)
    }
}

impl<'a, T> IntoIterator for &'a ConstraintSet<T> {
    type Item = &'a Constraint<T>;
    type IntoIter = std::slice::Iter<'a, Constraint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
