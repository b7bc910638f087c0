// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint servers and resource handles.

use peniko::Color;

/// Identifier for a resource (clip path, mask, filter, marker, paint server).
///
/// This is a small, opaque handle into a resource table owned by the host.
/// A style record only names the resource; it never owns it, and it is the
/// host's job to decide what a handle refers to when painting.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

/// The value of a `fill` or `stroke` property.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SvgPaint {
    /// Nothing is painted.
    #[default]
    None,
    /// Paint with the element's `color`.
    CurrentColor,
    /// Paint with a solid color.
    Color(Color),
    /// Paint with a referenced paint server (gradient or pattern).
    Uri {
        /// The referenced paint server.
        resource: ResourceId,
        /// Color used when the reference cannot be resolved.
        fallback: Option<Color>,
    },
}

impl SvgPaint {
    /// Returns `true` if this paint draws nothing.
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the referenced paint server, if any.
    #[must_use]
    #[inline]
    pub fn resource(&self) -> Option<ResourceId> {
        match self {
            Self::Uri { resource, .. } => Some(*resource),
            _ => None,
        }
    }
}
