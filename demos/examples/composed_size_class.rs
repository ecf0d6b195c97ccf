// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed layout following the size class.
//!
//! Simulate a device rotating between portrait and landscape. Portrait uses
//! the radial stack, landscape a horizontal stack, and one cache serves both.
//!
//! Run:
//! - `cargo run -p understory_layout_demos --example composed_size_class`
//! - `RUST_LOG=understory_layout=trace cargo run -p understory_layout_demos --example composed_size_class`

use kurbo::Rect;
use log::info;
use understory_layout::{ComposedLayout, FixedItem, Layout, ProposedSize, SizeClass};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let layout = ComposedLayout::default();
    let mut stars = vec![FixedItem::new(36.0, 36.0); 5];
    let mut cache = layout.make_cache(&stars);

    let orientations = [
        ("portrait", Rect::new(0.0, 0.0, 390.0, 844.0), SizeClass::Regular),
        ("landscape", Rect::new(0.0, 0.0, 844.0, 390.0), SizeClass::Compact),
        ("portrait", Rect::new(0.0, 0.0, 390.0, 844.0), SizeClass::Regular),
    ];
    for (name, bounds, vertical) in orientations {
        let active = layout.with_size_classes(Some(vertical), Some(SizeClass::Compact));
        let size = active.measure(ProposedSize::from_size(bounds.size()), &stars, &mut cache);
        active.place(bounds, ProposedSize::from_size(size), &mut stars, &mut cache);

        info!("{name}: {:?} wants {size:?}", active.layout_kind());
        for (i, star) in stars.iter().enumerate() {
            let frame = star.frame().expect("placed");
            println!("  {name} star {i}: ({:.1}, {:.1})", frame.min_x(), frame.min_y());
        }
    }
    println!("radial radius kept across rotations: {:?}", cache.radial.radius());
}
