// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `SvgStyle` construction, equality and inheritance.
//!
//! These exercise the record the way a cascade does: build from defaults,
//! copy, tweak the copy, compare against the parent, and inherit.

use peniko::Color;
use understory_svg_style::{
    BaselineShift, Cap, FillRule, InheritedResourceData, ResourceId, ShadowData, SvgLength,
    SvgPaint, SvgStyle, WritingMode,
};

/// A record with every group and both flag records moved off their defaults.
fn fully_customized() -> SvgStyle {
    let mut style = SvgStyle::default();
    style.set_fill_paint(SvgPaint::Color(Color::from_rgb8(0x33, 0x66, 0x99)));
    style.set_stroke_paint(SvgPaint::Uri {
        resource: ResourceId(9),
        fallback: Some(Color::WHITE),
    });
    style.set_stroke_width(SvgLength::px(2.5));
    style.set_kerning(SvgLength::px(1.0));
    style.set_stop_color(Color::WHITE);
    style.set_flood_opacity(0.25);
    style.set_shadow(Some(ShadowData::new(1.0, 2.0, 3.0, 0.0)));
    style.set_marker_mid(Some(ResourceId(2)));
    style.set_masker(Some(ResourceId(3)));
    style.inherited_flags_mut().fill_rule = FillRule::EvenOdd;
    style.non_inherited_flags_mut().baseline_shift = BaselineShift::Sub;
    style
}

#[test]
fn independently_obtained_defaults_are_equal() {
    let a = SvgStyle::default();
    let b = SvgStyle::default();
    assert_eq!(a, b);
    assert_eq!(&a, SvgStyle::initial());
}

#[test]
fn copy_is_equal_and_independent() {
    let original = fully_customized();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set_fill_opacity(0.1);
    copy.set_shadow(None);
    copy.inherited_flags_mut().cap_style = Cap::Round;

    assert_ne!(copy, original);
    assert_eq!(original.fill().opacity, 1.0);
    assert!(original.shadow().is_some());
    assert_eq!(original.inherited_flags().cap_style, Cap::Butt);
}

#[test]
fn mutating_a_default_never_touches_the_canonical_record() {
    let mut style = SvgStyle::default();
    style.set_stroke_opacity(0.0);
    style.set_lighting_color(Color::BLACK);
    assert_eq!(SvgStyle::initial().stroke().opacity, 1.0);
    assert_eq!(SvgStyle::initial().misc().lighting_color, Color::WHITE);
    assert_eq!(SvgStyle::default(), *SvgStyle::initial());
}

#[test]
fn a_single_non_inherited_flag_breaks_equality() {
    let a = fully_customized();
    let mut b = a.clone();
    b.non_inherited_flags_mut().baseline_shift = BaselineShift::Super;
    assert_ne!(a, b);
}

#[test]
fn each_group_takes_part_in_equality() {
    let base = SvgStyle::default();
    let tweaks: [fn(&mut SvgStyle); 10] = [
        |s| s.set_fill_opacity(0.5),
        |s| s.set_stroke_miter_limit(8.0),
        |s| s.set_kerning(SvgLength::px(2.0)),
        |s| s.set_stop_opacity(0.5),
        |s| s.set_flood_color(Color::WHITE),
        |s| s.set_shadow(Some(ShadowData::default())),
        |s| s.set_marker_start(Some(ResourceId(1))),
        |s| s.set_clipper(Some(ResourceId(1))),
        |s| s.inherited_flags_mut().writing_mode = WritingMode::Tb,
        |s| s.non_inherited_flags_mut().baseline_shift = BaselineShift::Length,
    ];
    for (i, tweak) in tweaks.iter().enumerate() {
        let mut changed = base.clone();
        tweak(&mut changed);
        assert_ne!(changed, base, "tweak {i} should break equality");
    }
}

#[test]
fn non_inherited_differences_do_not_count_as_inherited() {
    let parent = SvgStyle::default();

    let mut child = parent.clone();
    child.set_stop_color(Color::WHITE);
    child.set_flood_opacity(0.0);
    child.set_shadow(Some(ShadowData::new(5.0, 5.0, 1.0, 1.0)));
    child.set_filter(Some(ResourceId(7)));
    child.non_inherited_flags_mut().baseline_shift = BaselineShift::Super;

    assert_ne!(parent, child);
    assert!(!parent.inherited_differs(&child));
}

#[test]
fn inherited_differences_are_detected() {
    let parent = SvgStyle::default();

    let mut fill = parent.clone();
    fill.set_fill_paint(SvgPaint::None);
    assert!(parent.inherited_differs(&fill));

    let mut stroke = parent.clone();
    stroke.set_stroke_dash_offset(SvgLength::px(1.0));
    assert!(parent.inherited_differs(&stroke));

    let mut text = parent.clone();
    text.set_kerning(SvgLength::px(0.5));
    assert!(parent.inherited_differs(&text));

    let mut markers = parent.clone();
    markers.set_marker_end(Some(ResourceId(3)));
    assert!(parent.inherited_differs(&markers));

    let mut flags = parent.clone();
    flags.inherited_flags_mut().clip_rule = FillRule::EvenOdd;
    assert!(parent.inherited_differs(&flags));
}

#[test]
fn inherit_from_nothing_changes_nothing() {
    let mut style = fully_customized();
    let before = style.clone();
    style.inherit_from(None);
    assert_eq!(style, before);
    assert!(style.shares_storage_with(&before));
}

#[test]
fn inherit_from_overwrites_only_inherited_values() {
    let parent = fully_customized();
    let mut child = SvgStyle::default();
    child.set_stop_opacity(0.75);
    child.set_clipper(Some(ResourceId(11)));
    child.non_inherited_flags_mut().baseline_shift = BaselineShift::Super;
    let before = child.clone();

    child.inherit_from(Some(&parent));

    assert_eq!(child.fill(), parent.fill());
    assert_eq!(child.stroke(), parent.stroke());
    assert_eq!(child.text(), parent.text());
    assert_eq!(child.inherited_resources(), parent.inherited_resources());
    assert_eq!(child.inherited_flags(), parent.inherited_flags());
    assert!(!child.inherited_differs(&parent));

    assert_eq!(child.stops(), before.stops());
    assert_eq!(child.misc(), before.misc());
    assert_eq!(child.shadow_group(), before.shadow_group());
    assert_eq!(child.resources(), before.resources());
    assert_eq!(child.non_inherited_flags(), before.non_inherited_flags());
    assert_eq!(child.shadow(), None);
}

#[test]
fn inherited_values_stay_independent_of_the_parent() {
    let mut parent = fully_customized();
    let mut child = SvgStyle::default();
    child.inherit_from(Some(&parent));

    parent.set_marker_mid(None);
    assert_eq!(
        child.inherited_resources(),
        &InheritedResourceData {
            marker_mid: Some(ResourceId(2)),
            ..InheritedResourceData::default()
        }
    );

    child.set_fill_opacity(0.5);
    assert_eq!(parent.fill().opacity, 1.0);
}

#[test]
fn records_can_be_shared_across_threads() {
    let style = fully_customized();
    let handle = std::thread::spawn(move || {
        let copy = SvgStyle::default();
        (style, copy)
    });
    let (style, copy) = handle.join().expect("style thread panicked");
    assert_eq!(style, fully_customized());
    assert_eq!(copy, SvgStyle::default());
}
