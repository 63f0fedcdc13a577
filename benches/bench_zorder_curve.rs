#![feature(test)]

use sfc_core::{rules::hilbert2d, Envelope, SpaceFillingCurve};

extern crate test;

use test::Bencher;

fn world_curve() -> SpaceFillingCurve {
    let envelope = Envelope::new(&[-180.0, -90.0], &[180.0, 90.0]).unwrap();
    SpaceFillingCurve::new(envelope, 20, hilbert2d::build()).unwrap()
}

#[bench]
fn bench_tiles_intersecting_city_size(b: &mut Bencher) {
    let curve = world_curve();
    let query = Envelope::new(&[-174.45869, 56.345605], &[-174.12485, 56.95869]).unwrap();

    b.iter(|| curve.tiles_intersecting(&query));
}

#[bench]
fn bench_tiles_intersecting_state_size(b: &mut Bencher) {
    let curve = world_curve();
    let query = Envelope::new(&[-93.245, 42.01485], &[-88.24849, 46.28405]).unwrap();

    b.iter(|| curve.tiles_intersecting(&query));
}

#[bench]
fn bench_tiles_intersecting_country_size(b: &mut Bencher) {
    let curve = world_curve();
    let query = Envelope::new(&[53.4588044297, 18.197700914], &[135.026311477, 73.6753792663]).unwrap();

    b.iter(|| curve.tiles_intersecting(&query));
}
