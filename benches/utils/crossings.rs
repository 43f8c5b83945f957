#![allow(dead_code)]

use geo::{Coordinate, LineString};
use waterway_crossings::{decompose, intersect, sweep, Vertex, Vertices};

pub fn count_sweep(lanes: &[LineString<f64>]) -> usize {
    let mut vertices = Vertices::new();
    let mut chains = vec![];
    for ls in lanes {
        chains.extend(decompose(&mut vertices, &ls.0).unwrap());
    }
    sweep(&mut vertices, &mut chains).len()
}

/// Test every segment against every segment of the other lanes.
pub fn count_brute(lanes: &[LineString<f64>]) -> usize {
    let segs = |ls: &LineString<f64>| -> Vec<(Vertex, Vertex)> {
        ls.0.windows(2)
            .map(|w: &[Coordinate<f64>]| (w[0].into(), w[1].into()))
            .collect()
    };
    let segments: Vec<_> = lanes.iter().map(segs).collect();

    let mut count = 0;
    for i in 0..segments.len() {
        for j in i + 1..segments.len() {
            for (p1, p2) in &segments[i] {
                for (p3, p4) in &segments[j] {
                    if intersect(p1, p2, p3, p4).is_some() {
                        count += 1;
                    }
                }
            }
        }
    }
    count
}
