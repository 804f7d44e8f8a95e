//! Three-tier collision resolution for drag gestures.
//!
//! Tiers run from most precise to most forgiving, and the first tier that
//! finds anything wins:
//!
//! 1. targets containing the pointer,
//! 2. targets overlapping the dragged item's rectangle,
//! 3. the target whose center is closest to the dragged item's center.
//!
//! Each tier ranks its candidates by its own measure first. Kind
//! specificity (task, then column, then backlog) only breaks ties, so a card
//! under the pointer beats the column it is drawn in, while a card the
//! dragged item barely grazes loses to the column it mostly covers.

use crate::board::domain::{DropTarget, DropTargetRegistry, Point, Rect};
use std::cmp::Ordering;

/// Which tier produced a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionStrategy {
    /// The pointer lies inside the target.
    PointerWithin,
    /// The dragged rectangle overlaps the target.
    RectIntersection,
    /// Nearest center, used when nothing else matched.
    ClosestCenter,
}

/// The single target chosen for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// The chosen target.
    pub target: DropTarget,
    /// The tier that chose it.
    pub strategy: CollisionStrategy,
}

/// Picks the best drop target for the current pointer and dragged rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResolver;

impl CollisionResolver {
    /// Creates a resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves the target for one frame.
    ///
    /// `pointer` is `None` for gestures without pointer coordinates (keyboard
    /// dragging), which skips the first tier. Returns `None` only when no
    /// visible target is registered.
    #[must_use]
    pub fn resolve(
        &self,
        targets: &DropTargetRegistry,
        pointer: Option<Point>,
        dragged: Rect,
    ) -> Option<Collision> {
        let within = pointer.and_then(|point| Self::pointer_within(targets, point));
        if let Some(target) = within {
            return Some(Collision {
                target: *target,
                strategy: CollisionStrategy::PointerWithin,
            });
        }
        if let Some(target) = Self::rect_intersection(targets, dragged) {
            return Some(Collision {
                target: *target,
                strategy: CollisionStrategy::RectIntersection,
            });
        }
        Self::closest_center(targets, dragged).map(|target| Collision {
            target: *target,
            strategy: CollisionStrategy::ClosestCenter,
        })
    }

    /// Targets containing the pointer; the most specific, then the smallest,
    /// wins.
    #[must_use]
    pub fn pointer_within(targets: &DropTargetRegistry, pointer: Point) -> Option<&DropTarget> {
        targets
            .iter()
            .filter(|target| target.rect.contains(pointer))
            .min_by_key(|target| (target.kind.specificity(), target.rect.area()))
    }

    /// Targets overlapping the dragged rectangle; the largest
    /// intersection-over-union wins, then the most specific.
    #[must_use]
    pub fn rect_intersection(targets: &DropTargetRegistry, dragged: Rect) -> Option<&DropTarget> {
        targets
            .iter()
            .filter_map(|target| {
                let overlap = target.rect.intersection_area(&dragged);
                (overlap > 0).then_some((target, Overlap::new(overlap, &target.rect, &dragged)))
            })
            .min_by(|(a, a_overlap), (b, b_overlap)| {
                b_overlap
                    .cmp_ratio(a_overlap)
                    .then_with(|| a.kind.specificity().cmp(&b.kind.specificity()))
            })
            .map(|(target, _)| target)
    }

    /// The visible target whose center is nearest the dragged center.
    #[must_use]
    pub fn closest_center(targets: &DropTargetRegistry, dragged: Rect) -> Option<&DropTarget> {
        targets
            .iter()
            .filter(|target| !target.rect.is_empty())
            .min_by_key(|target| {
                (
                    target.rect.center_distance_key(&dragged),
                    target.kind.specificity(),
                )
            })
    }
}

/// Intersection over union kept as an exact fraction.
#[derive(Debug, Clone, Copy)]
struct Overlap {
    intersection: u128,
    union: u128,
}

impl Overlap {
    fn new(intersection: u64, a: &Rect, b: &Rect) -> Self {
        let intersection = u128::from(intersection);
        let union = u128::from(a.area()) + u128::from(b.area()) - intersection;
        Self {
            intersection,
            union,
        }
    }

    fn cmp_ratio(&self, other: &Self) -> Ordering {
        self.intersection
            .saturating_mul(other.union)
            .cmp(&other.intersection.saturating_mul(self.union))
    }
}
