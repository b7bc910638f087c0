// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifying the work a style change requires.

use crate::style::SvgStyle;

/// What has to be redone after an element's style changed.
///
/// Variants are ordered by cost, so the strongest requirement of several
/// changes is their maximum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleDifference {
    /// Nothing changed.
    Equal,
    /// Pixels change but geometry and repaint bounds do not.
    Repaint,
    /// Geometry or the repaint rectangle changes.
    Layout,
}

impl SvgStyle {
    /// Classifies the change from `self` to `other`.
    ///
    /// Anything that moves the stroke outline, markers, text, baseline or the
    /// shadow (which grows the repaint rectangle) needs [`Layout`]. Other
    /// changes, such as paints, opacities, colors and clip/filter/mask
    /// references, need [`Repaint`].
    ///
    /// [`Layout`]: StyleDifference::Layout
    /// [`Repaint`]: StyleDifference::Repaint
    #[must_use]
    pub fn diff(&self, other: &Self) -> StyleDifference {
        if self == other {
            return StyleDifference::Equal;
        }

        if self.stroke().geometry_differs(other.stroke())
            || self.inherited_resources() != other.inherited_resources()
            || self.text() != other.text()
            || self.shadow_group() != other.shadow_group()
            || self.misc().baseline_shift_value != other.misc().baseline_shift_value
            || self.non_inherited_flags() != other.non_inherited_flags()
            || self.inherited_flags().layout_differs(other.inherited_flags())
        {
            return StyleDifference::Layout;
        }

        StyleDifference::Repaint
    }
}
