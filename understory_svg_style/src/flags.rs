// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword-valued properties, grouped by whether they inherit.
//!
//! These are small `Copy` records of named enum fields. Equality is
//! field-by-field; nothing depends on how the fields are laid out.

use kurbo::{Cap, Join};

use crate::FillRule;

/// Value of `color-rendering` and `image-rendering`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderingHint {
    /// Let the renderer choose.
    #[default]
    Auto,
    /// Favor speed.
    OptimizeSpeed,
    /// Favor quality.
    OptimizeQuality,
}

/// Value of `shape-rendering`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeRendering {
    /// Let the renderer choose.
    #[default]
    Auto,
    /// Favor speed.
    OptimizeSpeed,
    /// Favor sharp, pixel-aligned edges.
    CrispEdges,
    /// Favor geometric accuracy.
    GeometricPrecision,
}

/// Value of `text-anchor`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start of the text.
    #[default]
    Start,
    /// Anchor at the middle of the text.
    Middle,
    /// Anchor at the end of the text.
    End,
}

/// Value of `color-interpolation` and `color-interpolation-filters`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorInterpolation {
    /// Let the renderer choose.
    #[default]
    Auto,
    /// Interpolate in sRGB.
    Srgb,
    /// Interpolate in linear RGB.
    LinearRgb,
}

/// Value of `writing-mode`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WritingMode {
    /// Left to right, top to bottom.
    #[default]
    LrTb,
    /// Right to left, top to bottom.
    RlTb,
    /// Top to bottom, right to left.
    TbRl,
    /// Left to right.
    Lr,
    /// Right to left.
    Rl,
    /// Top to bottom.
    Tb,
}

/// Value of `glyph-orientation-horizontal` and `glyph-orientation-vertical`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlyphOrientation {
    /// Orientation follows the script.
    Auto,
    /// Upright.
    #[default]
    Degrees0,
    /// Rotated a quarter turn clockwise.
    Degrees90,
    /// Upside down.
    Degrees180,
    /// Rotated a quarter turn counter-clockwise.
    Degrees270,
}

/// Value of `alignment-baseline` and `dominant-baseline`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Baseline {
    /// Use the baseline implied by the context.
    #[default]
    Auto,
    /// Align by the dominant baseline of the parent.
    Baseline,
    /// Use the ideographic (under-) baseline.
    Ideographic,
    /// Use the alphabetic baseline.
    Alphabetic,
    /// Use the hanging baseline.
    Hanging,
    /// Use the mathematical baseline.
    Mathematical,
    /// Align by the center of the em box.
    Central,
    /// Align by the middle of lowercase letters.
    Middle,
    /// Align by the bottom of the em box.
    TextAfterEdge,
    /// Align by the top of the em box.
    TextBeforeEdge,
}

/// Value of `baseline-shift`.
///
/// A length shift is stored as [`BaselineShift::Length`]; its amount lives in
/// [`MiscData::baseline_shift_value`](crate::MiscData::baseline_shift_value).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaselineShift {
    /// No shift.
    #[default]
    Baseline,
    /// Shift to the subscript position.
    Sub,
    /// Shift to the superscript position.
    Super,
    /// Shift by an explicit length.
    Length,
}

/// Keyword properties that children take from their parent by default.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InheritedFlags {
    /// `color-rendering`.
    pub color_rendering: RenderingHint,
    /// `image-rendering`.
    pub image_rendering: RenderingHint,
    /// `shape-rendering`.
    pub shape_rendering: ShapeRendering,
    /// `clip-rule`.
    pub clip_rule: FillRule,
    /// `fill-rule`.
    pub fill_rule: FillRule,
    /// `stroke-linecap`.
    pub cap_style: Cap,
    /// `stroke-linejoin`.
    pub join_style: Join,
    /// `text-anchor`.
    pub text_anchor: TextAnchor,
    /// `color-interpolation`.
    pub color_interpolation: ColorInterpolation,
    /// `color-interpolation-filters`.
    pub color_interpolation_filters: ColorInterpolation,
    /// `writing-mode`.
    pub writing_mode: WritingMode,
    /// `glyph-orientation-horizontal`.
    pub glyph_orientation_horizontal: GlyphOrientation,
    /// `glyph-orientation-vertical`.
    pub glyph_orientation_vertical: GlyphOrientation,
}

impl InheritedFlags {
    /// Initial values of every inherited keyword property.
    pub const INITIAL: Self = Self {
        color_rendering: RenderingHint::Auto,
        image_rendering: RenderingHint::Auto,
        shape_rendering: ShapeRendering::Auto,
        clip_rule: FillRule::NonZero,
        fill_rule: FillRule::NonZero,
        cap_style: Cap::Butt,
        join_style: Join::Miter,
        text_anchor: TextAnchor::Start,
        color_interpolation: ColorInterpolation::Srgb,
        color_interpolation_filters: ColorInterpolation::LinearRgb,
        writing_mode: WritingMode::LrTb,
        glyph_orientation_horizontal: GlyphOrientation::Degrees0,
        glyph_orientation_vertical: GlyphOrientation::Auto,
    };

    /// Returns `true` if any flag that moves geometry differs from `other`.
    ///
    /// Line caps and joins change the stroke outline, and the text flags move
    /// glyphs. The remaining flags only change how pixels are produced.
    #[must_use]
    pub fn layout_differs(&self, other: &Self) -> bool {
        self.cap_style != other.cap_style
            || self.join_style != other.join_style
            || self.text_anchor != other.text_anchor
            || self.writing_mode != other.writing_mode
            || self.glyph_orientation_horizontal != other.glyph_orientation_horizontal
            || self.glyph_orientation_vertical != other.glyph_orientation_vertical
    }
}

impl Default for InheritedFlags {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Keyword properties that reset to their initial value on every element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NonInheritedFlags {
    /// `alignment-baseline`.
    pub alignment_baseline: Baseline,
    /// `dominant-baseline`.
    pub dominant_baseline: Baseline,
    /// `baseline-shift`.
    pub baseline_shift: BaselineShift,
}

impl NonInheritedFlags {
    /// Initial values of every non-inherited keyword property.
    pub const INITIAL: Self = Self {
        alignment_baseline: Baseline::Auto,
        dominant_baseline: Baseline::Auto,
        baseline_shift: BaselineShift::Baseline,
    };
}
