// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial stack basics.
//!
//! Place a handful of badges around a circle, then add one more and show the
//! cache picking up the new count.
//!
//! Run:
//! - `cargo run -p understory_layout_demos --example radial_basics`

use kurbo::Rect;
use understory_layout::{FixedItem, Layout, ProposedSize, RadialStack};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let radial = RadialStack::new();
    let mut badges = vec![FixedItem::new(24.0, 24.0); 5];
    let mut cache = radial.make_cache(&badges);
    let bounds = Rect::new(0.0, 0.0, 240.0, 240.0);

    for pass in 0..2 {
        radial.update_cache(&mut cache, &badges);
        let size = radial.measure(ProposedSize::from_size(bounds.size()), &badges, &mut cache);
        radial.place(bounds, ProposedSize::from_size(size), &mut badges, &mut cache);

        println!(
            "pass {pass}: {} badges, radius {:?}, step {:.1}°",
            cache.count(),
            cache.radius(),
            cache.angle().to_degrees()
        );
        for (i, badge) in badges.iter().enumerate() {
            let position = badge.placement.expect("placed").position;
            println!("  badge {i}: ({:.1}, {:.1})", position.x, position.y);
        }

        badges.push(FixedItem::new(24.0, 24.0));
    }
}
