// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_svg_style --heading-base-level=0

//! Understory SVG Style: shared SVG presentation style records.
//!
//! This crate holds the SVG segment of an element's computed style: fill,
//! stroke, text, gradient stops, filter colors, drop shadow, marker and
//! clip/filter/mask references, plus the keyword properties. It also computes
//! how far a drop shadow grows an element's repaint rectangle.
//!
//! ## Core Concepts
//!
//! ### Style records
//!
//! [`SvgStyle`] is created for every styled element and compared on every
//! re-style. Property groups ([`FillData`], [`StrokeData`], [`TextData`],
//! [`StopData`], [`MiscData`], [`ShadowGroupData`],
//! [`InheritedResourceData`], [`ResourceData`]) are reference counted and
//! copied on write, so most records share most of their storage with their
//! parent or with [`SvgStyle::initial`].
//!
//! | Operation | Description |
//! |-----------|-------------|
//! | [`SvgStyle::default`] | Initial values, sharing the canonical record's groups |
//! | `==` | Every group and both flag records compare equal |
//! | [`SvgStyle::inherited_differs`] | Compares only what children inherit |
//! | [`SvgStyle::inherit_from`] | Takes the inherited groups and flags from a parent |
//! | [`SvgStyle::diff`] | Classifies a change as [`StyleDifference::Repaint`] or [`StyleDifference::Layout`] |
//!
//! ```rust
//! use understory_svg_style::{SvgLength, SvgStyle};
//!
//! let root = SvgStyle::default();
//!
//! let mut parent = root.clone();
//! parent.set_stroke_width(SvgLength::px(2.0));
//!
//! let mut child = SvgStyle::default();
//! child.inherit_from(Some(&parent));
//! assert!(!child.inherited_differs(&parent));
//! assert_eq!(child.stroke().width, SvgLength::px(2.0));
//!
//! // The root keeps its own values.
//! let mut orphan = SvgStyle::default();
//! orphan.inherit_from(None);
//! assert_eq!(orphan, root);
//! ```
//!
//! ### Shadow extents
//!
//! [`shadow_extent`] turns a [`ShadowData`] into the distance each edge of a
//! repaint rectangle must move, and [`InflateForShadow`] applies it to a
//! [`kurbo::Rect`] or an [`IntRect`]. Integer rectangles round outward so a
//! shadow is never clipped.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_svg_style::{IntRect, ShadowData, SvgStyle};
//!
//! let mut style = SvgStyle::default();
//! style.set_shadow(Some(ShadowData::new(3.0, 4.0, 2.0, 1.0)));
//!
//! let r = style.inflate_for_shadow(Rect::new(10.0, 10.0, 30.0, 30.0));
//! assert_eq!(r, Rect::new(10.0, 10.0, 36.0, 37.0));
//!
//! let r = style.inflate_for_shadow(IntRect::new(10, 10, 20, 20));
//! assert_eq!(r, IntRect::new(10, 10, 26, 27));
//! ```
//!
//! ### Lengths
//!
//! Lengths are stored unresolved as [`SvgLength`]. [`resolve_length`] turns
//! one into user units against a host-provided [`LengthContext`], falling
//! back to a caller-supplied default for anything that is not a length.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable `libm` instead of `std`
//! for float math without the standard library.

#![no_std]

extern crate alloc;

mod diff;
mod flags;
mod int_rect;
mod length;
mod paint;
mod records;
mod shadow;
mod style;

pub use kurbo::{Cap, Join};
pub use peniko::Fill as FillRule;

pub use diff::StyleDifference;
pub use flags::{
    Baseline, BaselineShift, ColorInterpolation, GlyphOrientation, InheritedFlags,
    NonInheritedFlags, RenderingHint, ShapeRendering, TextAnchor, WritingMode,
};
pub use int_rect::IntRect;
pub use length::{
    LengthContext, LengthError, LengthUnit, SvgLength, resolve_length, try_resolve_length,
};
pub use paint::{ResourceId, SvgPaint};
pub use records::{
    DashArray, FillData, InheritedResourceData, MiscData, ResourceData, ShadowGroupData,
    StopData, StrokeData, TextData,
};
pub use shadow::{InflateForShadow, ShadowData, ShadowExtent, shadow_extent};
pub use style::SvgStyle;
