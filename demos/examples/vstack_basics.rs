// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear stack basics.
//!
//! Measure a vertical stack of labels, place it in a container, and print
//! each label's frame. Spacing comes from the labels themselves unless the
//! stack sets one.
//!
//! Run:
//! - `cargo run -p understory_layout_demos --example vstack_basics`
//! - `RUST_LOG=trace cargo run -p understory_layout_demos --example vstack_basics`

use kurbo::{Point, Rect};
use understory_layout::{Alignment, FixedItem, ItemSpacing, Layout, LinearStack, ProposedSize};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut labels = vec![
        FixedItem::new(40.0, 20.0),
        FixedItem::new(90.0, 20.0).with_spacing(ItemSpacing::uniform(12.0)),
        FixedItem::new(150.0, 20.0),
        FixedItem::new(60.0, 40.0),
    ];

    for stack in [
        LinearStack::vertical(),
        LinearStack::vertical()
            .with_spacing(4.0)
            .with_alignment(Alignment::Center),
    ] {
        let size = stack.measure(ProposedSize::UNSPECIFIED, &labels, &mut ());
        println!("{stack:?} wants {size:?}");

        let bounds = Rect::from_origin_size(Point::new(10.0, 10.0), size);
        stack.place(bounds, ProposedSize::from_size(size), &mut labels, &mut ());
        for (i, label) in labels.iter().enumerate() {
            let frame = label.frame().expect("placed");
            println!("  label {i}: {frame:?}");
            assert_eq!(bounds.union(frame), bounds, "label {i} escapes the stack");
        }
    }
}
