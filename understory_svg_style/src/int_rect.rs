// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer device-space rectangles.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor` and `ceil`
use kurbo::Rect;

/// An axis-aligned rectangle on the integer pixel grid.
///
/// Repaint and damage code often works on whole pixels. Conversions from
/// [`Rect`] go through [`IntRect::enclosing`], which rounds outward so that
/// the integer rectangle always covers the real one.
///
/// A negative width or height is kept as is; nothing here reorders edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl IntRect {
    /// Creates a rectangle from its origin and size.
    #[must_use]
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from an `(x, y)` origin and a `(width, height)` size.
    #[must_use]
    #[inline]
    pub const fn from_origin_size(origin: (i32, i32), size: (i32, i32)) -> Self {
        Self::new(origin.0, origin.1, size.0, size.1)
    }

    /// Left edge.
    #[must_use]
    #[inline]
    pub const fn x0(&self) -> i32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    #[inline]
    pub const fn y0(&self) -> i32 {
        self.y
    }

    /// Right edge, saturating at `i32::MAX`.
    #[must_use]
    #[inline]
    pub const fn x1(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge, saturating at `i32::MAX`.
    #[must_use]
    #[inline]
    pub const fn y1(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Converts to a real-valued rectangle.
    ///
    /// Edges are computed in `f64`, so a rectangle reaching past `i32::MAX`
    /// converts without being cut short.
    #[must_use]
    #[inline]
    pub fn to_rect(&self) -> Rect {
        let x0 = f64::from(self.x);
        let y0 = f64::from(self.y);
        Rect::new(
            x0,
            y0,
            x0 + f64::from(self.width),
            y0 + f64::from(self.height),
        )
    }

    /// The smallest integer rectangle that contains `rect`.
    ///
    /// The near edges are floored and the far edges ceiled, each on its own,
    /// so edge order is preserved: an inverted `rect` gives a rectangle with a
    /// negative size. The origin and the size saturate separately at the
    /// `i32` range, so a rectangle whose far edge lies past `i32::MAX` keeps
    /// its full size.
    ///
    /// ```rust
    /// use kurbo::Rect;
    /// use understory_svg_style::IntRect;
    ///
    /// let r = IntRect::enclosing(Rect::new(0.5, -0.5, 10.2, 3.0));
    /// assert_eq!(r, IntRect::new(0, -1, 11, 4));
    /// ```
    #[must_use]
    pub fn enclosing(rect: Rect) -> Self {
        let x0 = rect.x0.floor();
        let y0 = rect.y0.floor();
        Self {
            x: saturate(x0),
            y: saturate(y0),
            width: saturate(rect.x1.ceil() - x0),
            height: saturate(rect.y1.ceil() - y0),
        }
    }
}

impl From<IntRect> for Rect {
    fn from(rect: IntRect) -> Self {
        rect.to_rect()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "callers pass integral values; `as` saturates at the i32 bounds"
)]
fn saturate(v: f64) -> i32 {
    v as i32
}
