// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pyramid stack with deferred scale write-back.
//!
//! Rank greetings by priority, place them, and apply the scales only after the
//! placement pass has finished.
//!
//! Run:
//! - `cargo run -p understory_layout_demos --example pyramid_scales`

use kurbo::{Point, Rect};
use understory_layout::{Alignment, FixedItem, Layout, ProposedSize, PyramidStack};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let names = ["Hello", "Hola", "Bonjour", "Hallo", "Ciao"];
    let mut greetings: Vec<FixedItem> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            FixedItem::new(12.0 * name.len() as f64, 32.0).with_priority(((i * 3) % 5) as f64)
        })
        .collect();

    let pyramid = PyramidStack::default()
        .with_spacing(8.0)
        .with_alignment(Alignment::Center);
    let mut cache = pyramid.make_cache(&greetings);
    let size = pyramid.measure(ProposedSize::UNSPECIFIED, &greetings, &mut cache);
    pyramid.place(
        Rect::from_origin_size(Point::ZERO, size),
        ProposedSize::from_size(size),
        &mut greetings,
        &mut cache,
    );
    println!("pyramid wants {size:?}; {} scales pending", cache.pending().len());

    // The pass is over; now it is safe to touch the items.
    cache.take_scale_updates().apply(&mut greetings);
    let mut ranked: Vec<(usize, &FixedItem)> = greetings.iter().enumerate().collect();
    ranked.sort_by(|a, b| b.1.scale.total_cmp(&a.1.scale));
    for (i, greeting) in ranked {
        let placement = greeting.placement.expect("placed");
        println!(
            "  {:<8} priority {} scale {:.2} at y {:.1}",
            names[i], greeting.priority, greeting.scale, placement.position.y
        );
    }
}
