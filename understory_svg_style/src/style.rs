// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-element SVG style record.
//!
//! This module provides [`SvgStyle`], which bundles eight shared property
//! groups with two small flag records.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
use alloc::sync::Arc;

use kurbo::Rect;
use peniko::Color;

use crate::flags::{InheritedFlags, NonInheritedFlags};
use crate::int_rect::IntRect;
use crate::length::SvgLength;
use crate::paint::{ResourceId, SvgPaint};
use crate::records::{
    DashArray, FillData, InheritedResourceData, MiscData, ResourceData, ShadowGroupData,
    StopData, StrokeData, TextData,
};
use crate::shadow::{InflateForShadow, ShadowData};

#[cfg(feature = "std")]
static INITIAL: once_cell::sync::Lazy<SvgStyle> =
    once_cell::sync::Lazy::new(SvgStyle::create_initial);
#[cfg(not(feature = "std"))]
static INITIAL: once_cell::race::OnceBox<SvgStyle> = once_cell::race::OnceBox::new();

/// Resolved SVG presentation properties of one element.
///
/// Style records are created for every styled element and compared on every
/// re-style, so both construction and comparison are cheap:
///
/// - Each property group sits behind an [`Arc`]. Cloning a record bumps eight
///   reference counts and copies two small flag records.
/// - [`SvgStyle::default`] shares the groups of one canonical record that is
///   built the first time it is needed and never changed afterwards.
/// - Setters copy a group only when they actually change it, so a record that
///   differs from its parent in one property still shares the other groups.
///
/// Records behave as plain values. Changing a clone never changes the record
/// it was cloned from.
///
/// # Example
///
/// ```rust
/// use peniko::Color;
/// use understory_svg_style::{SvgPaint, SvgStyle};
///
/// let parent = SvgStyle::default();
/// let mut child = parent.clone();
/// child.set_fill_paint(SvgPaint::Color(Color::WHITE));
///
/// assert_ne!(parent, child);
/// assert!(parent.inherited_differs(&child));
///
/// // A fresh record takes the parent's inherited values.
/// let mut grandchild = SvgStyle::default();
/// grandchild.inherit_from(Some(&child));
/// assert_eq!(grandchild.fill().paint, SvgPaint::Color(Color::WHITE));
/// ```
#[derive(Clone, Debug)]
pub struct SvgStyle {
    fill: Arc<FillData>,
    stroke: Arc<StrokeData>,
    text: Arc<TextData>,
    stops: Arc<StopData>,
    misc: Arc<MiscData>,
    shadow: Arc<ShadowGroupData>,
    inherited_resources: Arc<InheritedResourceData>,
    resources: Arc<ResourceData>,
    inherited_flags: InheritedFlags,
    non_inherited_flags: NonInheritedFlags,
}

impl SvgStyle {
    /// The canonical record holding every initial value.
    ///
    /// Built once, on first use, and immutable afterwards. With the `std`
    /// feature concurrent first calls block until one of them has built it.
    /// Without `std`, racing first calls may each build a candidate; one wins
    /// and the others are dropped, which is not observable because every
    /// candidate holds the same values.
    #[must_use]
    pub fn initial() -> &'static Self {
        #[cfg(feature = "std")]
        let initial: &'static Self = &INITIAL;
        #[cfg(not(feature = "std"))]
        let initial: &'static Self = INITIAL.get_or_init(|| Box::new(Self::create_initial()));
        initial
    }

    fn create_initial() -> Self {
        log::trace!("building initial SVG style record");
        Self {
            fill: Arc::new(FillData::default()),
            stroke: Arc::new(StrokeData::default()),
            text: Arc::new(TextData::default()),
            stops: Arc::new(StopData::default()),
            misc: Arc::new(MiscData::default()),
            shadow: Arc::new(ShadowGroupData::default()),
            inherited_resources: Arc::new(InheritedResourceData::default()),
            resources: Arc::new(ResourceData::default()),
            inherited_flags: InheritedFlags::INITIAL,
            non_inherited_flags: NonInheritedFlags::INITIAL,
        }
    }

    /// Returns `true` if any inherited value differs from `other`.
    ///
    /// Only fill, stroke, text, marker references and the inherited flags take
    /// part. The cascade uses this to decide whether children need their
    /// inherited values recomputed.
    #[must_use]
    pub fn inherited_differs(&self, other: &Self) -> bool {
        !same(&self.fill, &other.fill)
            || !same(&self.stroke, &other.stroke)
            || !same(&self.text, &other.text)
            || !same(&self.inherited_resources, &other.inherited_resources)
            || self.inherited_flags != other.inherited_flags
    }

    /// Takes every inherited value from `parent`.
    ///
    /// Overwrites fill, stroke, text, marker references and the inherited
    /// flags; stops, misc, shadow, resource references and the non-inherited
    /// flags are left alone. With no parent (the root element) nothing
    /// changes and the record keeps its own values.
    pub fn inherit_from(&mut self, parent: Option<&Self>) {
        let Some(parent) = parent else {
            return;
        };

        self.fill = Arc::clone(&parent.fill);
        self.stroke = Arc::clone(&parent.stroke);
        self.text = Arc::clone(&parent.text);
        self.inherited_resources = Arc::clone(&parent.inherited_resources);

        self.inherited_flags = parent.inherited_flags;
    }

    /// Returns `true` if every property group is the same allocation as in `other`.
    ///
    /// Flags are not considered. Useful for checking that sharing works as
    /// expected; equality is what callers normally want.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.fill, &other.fill)
            && Arc::ptr_eq(&self.stroke, &other.stroke)
            && Arc::ptr_eq(&self.text, &other.text)
            && Arc::ptr_eq(&self.stops, &other.stops)
            && Arc::ptr_eq(&self.misc, &other.misc)
            && Arc::ptr_eq(&self.shadow, &other.shadow)
            && Arc::ptr_eq(&self.inherited_resources, &other.inherited_resources)
            && Arc::ptr_eq(&self.resources, &other.resources)
    }

    /// The configured drop shadow, if any.
    #[must_use]
    #[inline]
    pub fn shadow(&self) -> Option<&ShadowData> {
        self.shadow.shadow.as_ref()
    }

    /// Grows `rect` so that it covers this style's drop shadow.
    ///
    /// Works for both [`Rect`] and [`IntRect`]; see
    /// [`InflateForShadow`]. Without a shadow `rect` comes back unchanged.
    #[must_use]
    #[inline]
    pub fn inflate_for_shadow<R: InflateForShadow>(&self, rect: R) -> R {
        rect.inflate_for_shadow(self.shadow())
    }

    /// [`SvgStyle::inflate_for_shadow`] for a real-valued rectangle.
    #[must_use]
    #[inline]
    pub fn inflate_rect_for_shadow(&self, rect: Rect) -> Rect {
        self.inflate_for_shadow(rect)
    }

    /// [`SvgStyle::inflate_for_shadow`] for an integer rectangle.
    ///
    /// The result is the enclosing integer rectangle of the real-valued one.
    #[must_use]
    #[inline]
    pub fn inflate_int_rect_for_shadow(&self, rect: IntRect) -> IntRect {
        self.inflate_for_shadow(rect)
    }

    /// Fill properties.
    #[must_use]
    #[inline]
    pub fn fill(&self) -> &FillData {
        &self.fill
    }

    /// Stroke properties.
    #[must_use]
    #[inline]
    pub fn stroke(&self) -> &StrokeData {
        &self.stroke
    }

    /// Text properties.
    #[must_use]
    #[inline]
    pub fn text(&self) -> &TextData {
        &self.text
    }

    /// Gradient stop properties.
    #[must_use]
    #[inline]
    pub fn stops(&self) -> &StopData {
        &self.stops
    }

    /// Flood, lighting and baseline-shift values.
    #[must_use]
    #[inline]
    pub fn misc(&self) -> &MiscData {
        &self.misc
    }

    /// The shadow group.
    #[must_use]
    #[inline]
    pub fn shadow_group(&self) -> &ShadowGroupData {
        &self.shadow
    }

    /// Marker references.
    #[must_use]
    #[inline]
    pub fn inherited_resources(&self) -> &InheritedResourceData {
        &self.inherited_resources
    }

    /// Clip, filter and mask references.
    #[must_use]
    #[inline]
    pub fn resources(&self) -> &ResourceData {
        &self.resources
    }

    /// Inherited keyword properties.
    #[must_use]
    #[inline]
    pub fn inherited_flags(&self) -> &InheritedFlags {
        &self.inherited_flags
    }

    /// Mutable access to the inherited keyword properties.
    #[inline]
    pub fn inherited_flags_mut(&mut self) -> &mut InheritedFlags {
        &mut self.inherited_flags
    }

    /// Non-inherited keyword properties.
    #[must_use]
    #[inline]
    pub fn non_inherited_flags(&self) -> &NonInheritedFlags {
        &self.non_inherited_flags
    }

    /// Mutable access to the non-inherited keyword properties.
    #[inline]
    pub fn non_inherited_flags_mut(&mut self) -> &mut NonInheritedFlags {
        &mut self.non_inherited_flags
    }

    /// Mutable access to the fill group, unsharing it first if needed.
    #[inline]
    pub fn fill_mut(&mut self) -> &mut FillData {
        Arc::make_mut(&mut self.fill)
    }

    /// Mutable access to the stroke group, unsharing it first if needed.
    #[inline]
    pub fn stroke_mut(&mut self) -> &mut StrokeData {
        Arc::make_mut(&mut self.stroke)
    }

    /// Mutable access to the stop group, unsharing it first if needed.
    #[inline]
    pub fn stops_mut(&mut self) -> &mut StopData {
        Arc::make_mut(&mut self.stops)
    }

    /// Mutable access to the misc group, unsharing it first if needed.
    #[inline]
    pub fn misc_mut(&mut self) -> &mut MiscData {
        Arc::make_mut(&mut self.misc)
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            inherited_flags: InheritedFlags::INITIAL,
            non_inherited_flags: NonInheritedFlags::INITIAL,
            ..Self::initial().clone()
        }
    }
}

impl PartialEq for SvgStyle {
    fn eq(&self, other: &Self) -> bool {
        same(&self.fill, &other.fill)
            && same(&self.stroke, &other.stroke)
            && same(&self.text, &other.text)
            && same(&self.stops, &other.stops)
            && same(&self.misc, &other.misc)
            && same(&self.shadow, &other.shadow)
            && same(&self.inherited_resources, &other.inherited_resources)
            && same(&self.resources, &other.resources)
            && self.inherited_flags == other.inherited_flags
            && self.non_inherited_flags == other.non_inherited_flags
    }
}

/// Value equality with a pointer check first; shared groups are common.
#[inline]
fn same<T: PartialEq>(a: &Arc<T>, b: &Arc<T>) -> bool {
    Arc::ptr_eq(a, b) || **a == **b
}

/// Generates setters that only unshare a group when the value changes.
macro_rules! setters {
    ($($(#[$meta:meta])* $name:ident => $group:ident.$field:ident: $ty:ty;)+) => {
        impl SvgStyle {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name(&mut self, value: $ty) {
                    if self.$group.$field != value {
                        Arc::make_mut(&mut self.$group).$field = value;
                    }
                }
            )+
        }
    };
}

setters! {
    /// Sets `fill`.
    set_fill_paint => fill.paint: SvgPaint;
    /// Sets `fill-opacity`.
    set_fill_opacity => fill.opacity: f32;
    /// Sets `stroke`.
    set_stroke_paint => stroke.paint: SvgPaint;
    /// Sets `stroke-opacity`.
    set_stroke_opacity => stroke.opacity: f32;
    /// Sets `stroke-width`.
    set_stroke_width => stroke.width: SvgLength;
    /// Sets `stroke-miterlimit`.
    set_stroke_miter_limit => stroke.miter_limit: f32;
    /// Sets `stroke-dashoffset`.
    set_stroke_dash_offset => stroke.dash_offset: SvgLength;
    /// Sets `stroke-dasharray`.
    set_stroke_dash_array => stroke.dash_array: DashArray;
    /// Sets `kerning`.
    set_kerning => text.kerning: SvgLength;
    /// Sets `stop-color`.
    set_stop_color => stops.color: Color;
    /// Sets `stop-opacity`.
    set_stop_opacity => stops.opacity: f32;
    /// Sets `flood-color`.
    set_flood_color => misc.flood_color: Color;
    /// Sets `flood-opacity`.
    set_flood_opacity => misc.flood_opacity: f32;
    /// Sets `lighting-color`.
    set_lighting_color => misc.lighting_color: Color;
    /// Sets the length used by `baseline-shift`.
    set_baseline_shift_value => misc.baseline_shift_value: SvgLength;
    /// Sets or clears the drop shadow.
    set_shadow => shadow.shadow: Option<ShadowData>;
    /// Sets `marker-start`.
    set_marker_start => inherited_resources.marker_start: Option<ResourceId>;
    /// Sets `marker-mid`.
    set_marker_mid => inherited_resources.marker_mid: Option<ResourceId>;
    /// Sets `marker-end`.
    set_marker_end => inherited_resources.marker_end: Option<ResourceId>;
    /// Sets `clip-path`.
    set_clipper => resources.clipper: Option<ResourceId>;
    /// Sets `filter`.
    set_filter => resources.filter: Option<ResourceId>;
    /// Sets `mask`.
    set_masker => resources.masker: Option<ResourceId>;
}
