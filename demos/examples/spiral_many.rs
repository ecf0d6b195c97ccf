// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spiral stack with more items than fit on one ring.
//!
//! Lay out 60 dots on rings of 24, once winding inward and once outward, and
//! print how far each ring head sits from the center.
//!
//! Run:
//! - `cargo run -p understory_layout_demos --example spiral_many`

use kurbo::Rect;
use understory_layout::{FixedItem, Layout, ProposedSize, SpiralDirection, SpiralStack};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bounds = Rect::new(0.0, 0.0, 480.0, 480.0);
    let center = bounds.center();

    for direction in [SpiralDirection::Inward, SpiralDirection::Outward] {
        let spiral = SpiralStack::new(24, 4.0)?.with_direction(direction);
        let mut dots = vec![FixedItem::new(16.0, 16.0); 60];
        let mut cache = spiral.make_cache(&dots);
        spiral.place(bounds, ProposedSize::UNSPECIFIED, &mut dots, &mut cache);

        println!(
            "{direction:?}: first ring radius {:?}, step per item {:.3}",
            cache.radius(),
            cache.radius_step()
        );
        for head in (0..dots.len()).step_by(spiral.elements_per_ring()) {
            let position = dots[head].placement.expect("placed").position;
            println!("  ring head {head}: distance {:.1}", (position - center).hypot());
        }
    }

    // A ring with no items is a configuration error, not a panic.
    if let Err(err) = SpiralStack::new(0, 4.0) {
        println!("rejected: {err}");
    }
    Ok(())
}
