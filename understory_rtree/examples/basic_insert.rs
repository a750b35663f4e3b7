// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory R-tree: insert a few boxes and inspect the structure.

use understory_rtree::{Fanout, Node, RTree, Rect};

fn print_node(node: &Node<f64, u32, 2>, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.id() {
        Some(id) => println!("{indent}element {id}: {:?}", node.rect()),
        None => {
            println!("{indent}level {}: {:?}", node.level(), node.rect());
            for child in node.children() {
                print_node(child, depth + 1);
            }
        }
    }
}

fn main() {
    let fanout = Fanout::new(4, 2).expect("4/2 is a valid fan-out");
    let mut tree: RTree<f64, u32, 2> = RTree::with_fanout(fanout);

    for i in 0..5_u32 {
        let v = f64::from(i);
        tree.insert(Rect::new_2d(v, v, 2.0 * v, 2.0 * v), i);
    }

    println!("{tree:?}");
    print_node(tree.root(), 0);
}
