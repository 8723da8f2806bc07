#![allow(dead_code)]

use probekit::model::{
    ContactShape, ContactShapeParam, NumDimensions, PlaneAxes, Position, ProbeAnnotations,
    RawProbe, SiUnits,
};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Multiples of 0.25, which survive a JSON round trip exactly.
pub fn arb_coord(min: i32, max: i32) -> impl Strategy<Value = f64> {
    (min * 4..max * 4).prop_map(|v| f64::from(v) * 0.25)
}

pub fn arb_shape() -> impl Strategy<Value = (ContactShape, ContactShapeParam)> {
    prop_oneof![
        arb_coord(1, 50).prop_map(|r| (ContactShape::Circle, ContactShapeParam::circle(r))),
        arb_coord(1, 50).prop_map(|w| (ContactShape::Square, ContactShapeParam::square(w))),
        (arb_coord(1, 50), arb_coord(1, 50))
            .prop_map(|(w, h)| (ContactShape::Rect, ContactShapeParam::rect(w, h))),
    ]
}

pub fn arb_position() -> impl Strategy<Value = Position> {
    (arb_coord(-1000, 1000), arb_coord(-1000, 1000)).prop_map(|(x, y)| Position::new(x, y))
}

/// A probe with `n` contacts and every optional array left out.
pub fn arb_bare_probe(n: usize) -> impl Strategy<Value = RawProbe> {
    (
        prop::collection::vec(arb_position(), n),
        prop::collection::vec(arb_shape(), n),
        prop::bool::ANY,
        "[a-z]{0,8}",
    )
        .prop_map(move |(positions, shapes, in_mm, name)| {
            let (shapes, params): (Vec<_>, Vec<_>) = shapes.into_iter().unzip();
            RawProbe::new(
                NumDimensions::Two,
                if in_mm { SiUnits::Mm } else { SiUnits::Um },
                ProbeAnnotations::new(name, "proptest"),
                positions,
                shapes,
                params,
            )
            .with_plane_axes(vec![PlaneAxes::IDENTITY; n])
        })
}

/// Contact counts for a group of one to four probes.
pub fn arb_probe_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, 1..4)
}

/// Probes whose contact ids continue across the group starting at `base`.
///
/// Device channel indices are explicit and globally unique, so the group
/// always validates.
pub fn arb_numbered_probes(base: usize) -> impl Strategy<Value = Vec<RawProbe>> {
    arb_probe_sizes().prop_flat_map(move |sizes| {
        let probes: Vec<_> = sizes.iter().map(|&n| arb_bare_probe(n)).collect();
        (probes, Just(sizes)).prop_map(move |(probes, sizes)| {
            let mut next = base;
            probes
                .into_iter()
                .zip(sizes)
                .map(|(probe, n)| {
                    let ids: Vec<String> = (next..next + n).map(|i| i.to_string()).collect();
                    let channels: Vec<i32> = (next..next + n).map(|i| 100 + i as i32).collect();
                    next += n;
                    probe
                        .with_contact_ids(ids)
                        .with_device_channel_indices(channels)
                })
                .collect()
        })
    })
}
