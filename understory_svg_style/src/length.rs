// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length values and their resolution to user units.
//!
//! Style records store lengths unresolved, as a number plus the unit it was
//! specified in. Turning one into a user-space float needs font metrics and
//! (for percentages) a viewport, which live outside this crate and are
//! supplied through [`LengthContext`].

use core::fmt;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::Size;

/// CSS pixels per inch.
const PX_PER_IN: f32 = 96.0;

/// The unit a [`SvgLength`] was specified in.
///
/// The order matters: every unit from [`Number`](Self::Number) through
/// [`Pc`](Self::Pc) is a length that [`resolve_length`] understands. Units
/// after that are primitive kinds that may show up in a property slot but
/// never resolve to a length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LengthUnit {
    /// No unit information is available.
    #[default]
    Unknown,
    /// A unitless number, interpreted as user units.
    Number,
    /// Percentage of the viewport.
    Percentage,
    /// Multiple of the font size.
    Ems,
    /// Multiple of the x-height.
    Exs,
    /// CSS pixels.
    Px,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Inches.
    In,
    /// Points (1/72 in).
    Pt,
    /// Picas (12 pt).
    Pc,
    /// Degrees.
    Deg,
    /// Radians.
    Rad,
    /// Gradians.
    Grad,
    /// Milliseconds.
    Ms,
    /// Seconds.
    S,
    /// Hertz.
    Hz,
    /// Kilohertz.
    KHz,
    /// A number with an unrecognized unit suffix.
    Dimension,
    /// A string.
    String,
    /// A URI reference.
    Uri,
    /// An identifier.
    Ident,
    /// Multiple of the root element's font size.
    Rems,
}

impl LengthUnit {
    /// Returns `true` for units that [`resolve_length`] can turn into user units.
    #[must_use]
    #[inline]
    pub fn is_resolvable(self) -> bool {
        self >= Self::Number && self <= Self::Pc
    }
}

/// An unresolved length: a number and the unit it was written in.
///
/// The default is [`SvgLength::ZERO`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgLength {
    /// The numeric part.
    pub value: f32,
    /// The unit of `value`.
    pub unit: LengthUnit,
}

impl SvgLength {
    /// A unitless zero.
    pub const ZERO: Self = Self::number(0.0);

    /// Creates a length in the given unit.
    #[must_use]
    #[inline]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a unitless length.
    #[must_use]
    #[inline]
    pub const fn number(value: f32) -> Self {
        Self::new(value, LengthUnit::Number)
    }

    /// Creates a length in CSS pixels.
    #[must_use]
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// Creates a percentage.
    #[must_use]
    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percentage)
    }
}

impl Default for SvgLength {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Environment needed to resolve relative lengths.
///
/// Implemented by the host's rendering context for an element.
pub trait LengthContext {
    /// The computed font size of the element, in user units.
    fn font_size(&self) -> f32;

    /// The x-height of the element's primary font, in user units.
    fn x_height(&self) -> f32;

    /// The size of the nearest viewport, if the element has one.
    fn viewport(&self) -> Option<Size>;
}

/// Reason a length could not be resolved.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum LengthError {
    /// No value was supplied.
    MissingValue,
    /// The value's unit is not a length unit.
    UnsupportedUnit(LengthUnit),
}

impl fmt::Debug for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => write!(f, "LengthError::MissingValue"),
            Self::UnsupportedUnit(unit) => write!(f, "LengthError::UnsupportedUnit({unit:?})"),
        }
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => write!(f, "no length value to resolve"),
            Self::UnsupportedUnit(unit) => write!(f, "{unit:?} is not a length unit"),
        }
    }
}

impl core::error::Error for LengthError {}

/// Resolves `value` to user units, reporting why it could not be resolved.
///
/// Percentages resolve against the normalized diagonal of the context's
/// viewport, `sqrt((w² + h²) / 2)`. Without a viewport a percentage has
/// nothing to refer to and resolves to zero.
///
/// # Example
///
/// ```rust
/// use kurbo::Size;
/// use understory_svg_style::{LengthContext, LengthError, LengthUnit, SvgLength, try_resolve_length};
///
/// struct Cx;
/// impl LengthContext for Cx {
///     fn font_size(&self) -> f32 { 16.0 }
///     fn x_height(&self) -> f32 { 8.0 }
///     fn viewport(&self) -> Option<Size> { None }
/// }
///
/// let inch = SvgLength::new(1.0, LengthUnit::In);
/// assert_eq!(try_resolve_length(Some(&inch), &Cx), Ok(96.0));
///
/// let angle = SvgLength::new(90.0, LengthUnit::Deg);
/// assert_eq!(
///     try_resolve_length(Some(&angle), &Cx),
///     Err(LengthError::UnsupportedUnit(LengthUnit::Deg)),
/// );
/// ```
pub fn try_resolve_length<C: LengthContext + ?Sized>(
    value: Option<&SvgLength>,
    cx: &C,
) -> Result<f32, LengthError> {
    let length = value.ok_or(LengthError::MissingValue)?;
    if !length.unit.is_resolvable() {
        return Err(LengthError::UnsupportedUnit(length.unit));
    }

    if length.unit == LengthUnit::Percentage
        && let Some(viewport) = cx.viewport()
    {
        return Ok(length.value / 100.0 * normalized_diagonal(viewport));
    }

    Ok(absolute_length(length, cx))
}

/// Resolves `value` to user units, falling back to `default`.
///
/// Layout never stops on a bad length: a missing value or a unit that is not
/// a length yields `default` instead of an error.
#[must_use]
pub fn resolve_length<C: LengthContext + ?Sized>(
    value: Option<&SvgLength>,
    cx: &C,
    default: f32,
) -> f32 {
    try_resolve_length(value, cx).unwrap_or(default)
}

fn absolute_length<C: LengthContext + ?Sized>(length: &SvgLength, cx: &C) -> f32 {
    let v = length.value;
    match length.unit {
        LengthUnit::Number | LengthUnit::Px => v,
        LengthUnit::Ems => v * cx.font_size(),
        LengthUnit::Exs => v * cx.x_height(),
        LengthUnit::Cm => v * PX_PER_IN / 2.54,
        LengthUnit::Mm => v * PX_PER_IN / 25.4,
        LengthUnit::In => v * PX_PER_IN,
        LengthUnit::Pt => v * PX_PER_IN / 72.0,
        LengthUnit::Pc => v * PX_PER_IN / 6.0,
        _ => 0.0,
    }
}

/// Reference length for percentages that are neither horizontal nor vertical.
#[allow(
    clippy::cast_possible_truncation,
    reason = "style lengths are single precision"
)]
fn normalized_diagonal(viewport: Size) -> f32 {
    let w = viewport.width as f32;
    let h = viewport.height as f32;
    ((w * w + h * h) / 2.0).sqrt()
}
