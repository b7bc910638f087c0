// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop shadows and the repaint area they add.
//!
//! A shadow paints an offset, blurred and optionally spread copy of an
//! element's shape. Repaint and damage code needs to know how far that copy
//! can reach past the element's own bounds, which is what [`ShadowExtent`]
//! describes and [`InflateForShadow`] applies.

use kurbo::Rect;
use peniko::Color;

use crate::int_rect::IntRect;

/// A drop shadow attached to a style record.
///
/// Offsets, blur and spread are in user units. The descriptor is built by
/// whoever parses the shadow; values are assumed finite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowData {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Blur radius.
    pub blur: f64,
    /// Spread distance. Negative values shrink the shadow.
    pub spread: f64,
    /// Shadow color.
    pub color: Color,
}

impl ShadowData {
    /// Creates a black shadow.
    #[must_use]
    #[inline]
    pub const fn new(x: f64, y: f64, blur: f64, spread: f64) -> Self {
        Self {
            x,
            y,
            blur,
            spread,
            color: Color::BLACK,
        }
    }

    /// Returns this shadow with a different color.
    #[must_use]
    #[inline]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The extent of this shadow around its source.
    #[must_use]
    #[inline]
    pub fn extent(&self) -> ShadowExtent {
        shadow_extent(self)
    }
}

impl Default for ShadowData {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Signed distances a repaint rectangle must move its edges to cover a shadow.
///
/// `top` and `left` are never positive and `right` and `bottom` are never
/// negative: a shadow can only grow the area to repaint, never shrink it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShadowExtent {
    /// Movement of the top edge (`<= 0`).
    pub top: f64,
    /// Movement of the right edge (`>= 0`).
    pub right: f64,
    /// Movement of the bottom edge (`>= 0`).
    pub bottom: f64,
    /// Movement of the left edge (`<= 0`).
    pub left: f64,
}

impl ShadowExtent {
    /// Returns `true` if applying this extent leaves a rectangle unchanged.
    #[must_use]
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// Moves the edges of `rect` outward by this extent.
    ///
    /// The origin moves by `(left, top)` and the size grows by
    /// `(right - left, bottom - top)`.
    #[must_use]
    #[inline]
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 + self.left,
            rect.y0 + self.top,
            rect.x1 + self.right,
            rect.y1 + self.bottom,
        )
    }
}

/// Computes how far `shadow` reaches past the bounds of its source.
///
/// Blur and spread both push the shadow outward by their sum. Each side is
/// clamped at zero so that a shadow offset away from a side never pulls that
/// side inward.
///
/// ```rust
/// use understory_svg_style::{ShadowData, shadow_extent};
///
/// let e = shadow_extent(&ShadowData::new(3.0, 4.0, 2.0, 1.0));
/// assert_eq!((e.top, e.right, e.bottom, e.left), (0.0, 6.0, 7.0, 0.0));
/// ```
#[must_use]
pub fn shadow_extent(shadow: &ShadowData) -> ShadowExtent {
    let blur_and_spread = shadow.blur + shadow.spread;
    ShadowExtent {
        top: f64::min(0.0, shadow.y - blur_and_spread),
        right: f64::max(0.0, shadow.x + blur_and_spread),
        bottom: f64::max(0.0, shadow.y + blur_and_spread),
        left: f64::min(0.0, shadow.x - blur_and_spread),
    }
}

/// Rectangles that can be grown to cover a drop shadow.
pub trait InflateForShadow: Sized {
    /// Returns `self` grown to cover `shadow`.
    ///
    /// With no shadow this returns `self` untouched.
    #[must_use]
    fn inflate_for_shadow(self, shadow: Option<&ShadowData>) -> Self;
}

impl InflateForShadow for Rect {
    #[inline]
    fn inflate_for_shadow(self, shadow: Option<&ShadowData>) -> Self {
        match shadow {
            Some(shadow) => shadow_extent(shadow).apply(self),
            None => self,
        }
    }
}

impl InflateForShadow for IntRect {
    /// Inflates in real coordinates, then takes the enclosing integer rectangle.
    fn inflate_for_shadow(self, shadow: Option<&ShadowData>) -> Self {
        let Some(shadow) = shadow else {
            return self;
        };
        Self::enclosing(self.to_rect().inflate_for_shadow(Some(shadow)))
    }
}
