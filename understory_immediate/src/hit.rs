// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit regions: the axis-aligned rectangle a widget claims for one frame.

use kurbo::{Point, Rect};

/// How a region's edges are treated when testing whether it contains the pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HitPolicy {
    /// `x0 <= x < x1` and `y0 <= y < y1`, matching [`Rect::contains`].
    ///
    /// Adjacent regions never both contain a point on their shared edge.
    #[default]
    HalfOpen,
    /// `x0 <= x <= x1` and `y0 <= y <= y1`.
    ///
    /// A point on a shared edge is contained by both neighbors, so the one
    /// declared last becomes hot.
    Inclusive,
}

impl HitPolicy {
    /// Returns `true` if `rect` contains `pt` under this policy.
    ///
    /// Points with NaN coordinates are never contained.
    pub fn contains(self, rect: Rect, pt: Point) -> bool {
        match self {
            Self::HalfOpen => rect.contains(pt),
            Self::Inclusive => {
                pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
            }
        }
    }
}

/// The hit-testing rectangle of a widget, in host coordinates.
///
/// Regions are always stored with non-negative width and height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRegion {
    rect: Rect,
}

impl HitRegion {
    /// Create a region from its origin and size.
    ///
    /// A negative `width` or `height` extends the region to the left or upward.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_rect(Rect::from_origin_size((x, y), (width, height)))
    }

    /// Create a region from a rectangle, normalizing it first.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect: rect.abs() }
    }

    /// The region as a rectangle.
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns `true` if the region contains `pt` under [`HitPolicy::HalfOpen`].
    pub fn contains(&self, pt: Point) -> bool {
        self.contains_with(pt, HitPolicy::HalfOpen)
    }

    /// Returns `true` if the region contains `pt` under `policy`.
    pub fn contains_with(&self, pt: Point, policy: HitPolicy) -> bool {
        policy.contains(self.rect, pt)
    }
}

impl From<Rect> for HitRegion {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_excludes_far_edges() {
        let region = HitRegion::new(0.0, 0.0, 10.0, 10.0);
        assert!(region.contains(Point::new(0.0, 0.0)));
        assert!(region.contains(Point::new(9.999, 9.999)));
        assert!(!region.contains(Point::new(10.0, 5.0)));
        assert!(!region.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn inclusive_includes_far_edges() {
        let region = HitRegion::new(0.0, 0.0, 10.0, 10.0);
        assert!(region.contains_with(Point::new(10.0, 10.0), HitPolicy::Inclusive));
        assert!(!region.contains_with(Point::new(10.5, 10.0), HitPolicy::Inclusive));
    }

    #[test]
    fn negative_size_is_normalized() {
        let region = HitRegion::new(10.0, 10.0, -10.0, -10.0);
        assert_eq!(region.rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(region.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn zero_size_region() {
        let region = HitRegion::new(3.0, 4.0, 0.0, 0.0);
        assert!(!region.contains(Point::new(3.0, 4.0)));
        assert!(region.contains_with(Point::new(3.0, 4.0), HitPolicy::Inclusive));
    }

    #[test]
    fn nan_is_never_contained() {
        let region = HitRegion::new(0.0, 0.0, 10.0, 10.0);
        let nan = Point::new(f64::NAN, 5.0);
        assert!(!region.contains(nan));
        assert!(!region.contains_with(nan, HitPolicy::Inclusive));
    }

    #[test]
    fn from_rect_matches_new() {
        let region: HitRegion = Rect::new(1.0, 2.0, 4.0, 6.0).into();
        assert_eq!(region, HitRegion::new(1.0, 2.0, 3.0, 4.0));
    }
}
