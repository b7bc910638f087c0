// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property groups stored in an [`SvgStyle`](crate::SvgStyle).
//!
//! Each group bundles the values of one presentation aspect. Groups are plain
//! values: [`Default`] gives the initial values, `==` compares every field.
//! Sharing between records is handled by the style record, not here.

use peniko::Color;
use smallvec::SmallVec;

use crate::length::SvgLength;
use crate::paint::{ResourceId, SvgPaint};
use crate::shadow::ShadowData;

/// Dash pattern of a stroke. Most patterns have at most four entries.
pub type DashArray = SmallVec<[SvgLength; 4]>;

/// `fill` and `fill-opacity`. Inherited.
#[derive(Clone, Debug, PartialEq)]
pub struct FillData {
    /// `fill-opacity`.
    pub opacity: f32,
    /// `fill`.
    pub paint: SvgPaint,
}

impl Default for FillData {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            paint: SvgPaint::Color(Color::BLACK),
        }
    }
}

/// Stroke paint and geometry. Inherited.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeData {
    /// `stroke-opacity`.
    pub opacity: f32,
    /// `stroke-width`.
    pub width: SvgLength,
    /// `stroke-miterlimit`.
    pub miter_limit: f32,
    /// `stroke-dashoffset`.
    pub dash_offset: SvgLength,
    /// `stroke-dasharray`. Empty means a solid stroke.
    pub dash_array: DashArray,
    /// `stroke`.
    pub paint: SvgPaint,
}

impl StrokeData {
    /// Returns `true` if a change from `other` to `self` moves the stroke outline.
    #[must_use]
    pub fn geometry_differs(&self, other: &Self) -> bool {
        self.width != other.width
            || self.miter_limit != other.miter_limit
            || self.dash_offset != other.dash_offset
            || self.dash_array != other.dash_array
    }
}

impl Default for StrokeData {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            width: SvgLength::number(1.0),
            miter_limit: 4.0,
            dash_offset: SvgLength::ZERO,
            dash_array: DashArray::new(),
            paint: SvgPaint::None,
        }
    }
}

/// Text-only properties. Inherited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextData {
    /// `kerning`. `auto` is stored as zero.
    pub kerning: SvgLength,
}

/// `stop-color` and `stop-opacity` of gradient stops. Not inherited.
#[derive(Clone, Debug, PartialEq)]
pub struct StopData {
    /// `stop-opacity`.
    pub opacity: f32,
    /// `stop-color`.
    pub color: Color,
}

impl Default for StopData {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            color: Color::BLACK,
        }
    }
}

/// Filter-primitive colors and the baseline shift amount. Not inherited.
#[derive(Clone, Debug, PartialEq)]
pub struct MiscData {
    /// `flood-color`.
    pub flood_color: Color,
    /// `flood-opacity`.
    pub flood_opacity: f32,
    /// `lighting-color`.
    pub lighting_color: Color,
    /// Amount for `baseline-shift` when it is a length.
    pub baseline_shift_value: SvgLength,
}

impl Default for MiscData {
    fn default() -> Self {
        Self {
            flood_color: Color::BLACK,
            flood_opacity: 1.0,
            lighting_color: Color::WHITE,
            baseline_shift_value: SvgLength::ZERO,
        }
    }
}

/// The drop shadow. Not inherited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShadowGroupData {
    /// The configured shadow, if any.
    pub shadow: Option<ShadowData>,
}

/// Marker references. Inherited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InheritedResourceData {
    /// `marker-start`.
    pub marker_start: Option<ResourceId>,
    /// `marker-mid`.
    pub marker_mid: Option<ResourceId>,
    /// `marker-end`.
    pub marker_end: Option<ResourceId>,
}

/// Clip, filter and mask references. Not inherited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResourceData {
    /// `clip-path`.
    pub clipper: Option<ResourceId>,
    /// `filter`.
    pub filter: Option<ResourceId>,
    /// `mask`.
    pub masker: Option<ResourceId>,
}
