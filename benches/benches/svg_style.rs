// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_svg_style`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;
use std::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use understory_svg_style::{
    FillData, IntRect, ResourceId, ShadowData, StrokeData, SvgLength, SvgPaint, SvgStyle,
};

fn customized() -> SvgStyle {
    let mut style = SvgStyle::default();
    style.set_fill_paint(SvgPaint::Color(Color::from_rgb8(0x20, 0x40, 0x80)));
    style.set_stroke_width(SvgLength::px(2.0));
    style.set_marker_end(Some(ResourceId(3)));
    style.set_shadow(Some(ShadowData::new(2.0, 3.0, 4.0, 0.5)));
    style
}

fn bench_record(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: SvgStyle={} FillData={} StrokeData={}",
            core::mem::size_of::<SvgStyle>(),
            core::mem::size_of::<FillData>(),
            core::mem::size_of::<StrokeData>(),
        );
    });

    let mut group = c.benchmark_group("svg_style/record");

    group.bench_function("default", |b| b.iter(|| black_box(SvgStyle::default())));

    group.bench_function("clone", |b| {
        let style = customized();
        b.iter(|| black_box(style.clone()))
    });

    group.bench_function("eq/shared", |b| {
        let a = customized();
        let c = a.clone();
        b.iter(|| black_box(a == c))
    });

    group.bench_function("eq/unshared", |b| {
        let a = customized();
        let c = customized();
        b.iter(|| black_box(a == c))
    });

    group.bench_function("inherited_differs", |b| {
        let parent = customized();
        let mut child = parent.clone();
        child.set_stop_opacity(0.5);
        b.iter(|| black_box(parent.inherited_differs(&child)))
    });

    group.bench_function("diff", |b| {
        let a = customized();
        let mut c = a.clone();
        c.set_fill_opacity(0.25);
        b.iter(|| black_box(a.diff(&c)))
    });

    group.bench_function("set_fill_opacity/unshare", |b| {
        b.iter_batched(
            SvgStyle::default,
            |mut style| {
                style.set_fill_opacity(0.5);
                black_box(style);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();

    let mut group = c.benchmark_group("svg_style/inherit");
    for depth in [1_usize, 16, 64] {
        group.bench_function(BenchmarkId::new("chain", depth), |b| {
            let root = customized();
            b.iter(|| {
                let mut chain: Vec<SvgStyle> = Vec::with_capacity(depth + 1);
                chain.push(root.clone());
                for i in 0..depth {
                    let mut child = SvgStyle::default();
                    child.inherit_from(Some(&chain[i]));
                    chain.push(child);
                }
                black_box(chain)
            })
        });
    }
    group.finish();
}

fn bench_shadow(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg_style/shadow");
    let style = customized();
    let plain = SvgStyle::default();

    group.bench_function("inflate/rect", |b| {
        let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
        b.iter(|| black_box(style.inflate_for_shadow(black_box(rect))))
    });

    group.bench_function("inflate/int_rect", |b| {
        let rect = IntRect::new(10, 10, 100, 50);
        b.iter(|| black_box(style.inflate_for_shadow(black_box(rect))))
    });

    group.bench_function("inflate/none", |b| {
        let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
        b.iter(|| black_box(plain.inflate_for_shadow(black_box(rect))))
    });

    group.finish();
}

criterion_group!(benches, bench_record, bench_shadow);
criterion_main!(benches);
