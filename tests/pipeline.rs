#![allow(clippy::unwrap_used)]

use std::f64::consts::FRAC_PI_4;

use approx::assert_abs_diff_eq;
use geocurves::generate::{GeneratorConfig, RandomSpecs, SpecSource, TextSpecs};
use geocurves::geometry::{Curve, CurveKind, CurveSpec};
use geocurves::operations::{
    FilterByKind, RadiusReport, SampleCurves, SortByPrimaryRadius, SumPrimaryRadius,
};
use geocurves::store::CurveStore;

#[test]
fn circles_filtered_sorted_and_summed() {
    let specs = TextSpecs::new("circle 3\nellipse 2 5\ncircle 1\nhelix 4 2\n")
        .specs()
        .unwrap();
    let store = CurveStore::from_specs(&specs);
    let all = store.ids();

    let circles = FilterByKind::new(CurveKind::Circle).execute(&store, all).unwrap();
    assert_eq!(circles, vec![all[0], all[2]]);

    let sorted = SortByPrimaryRadius::new().execute(&store, &circles).unwrap();
    assert_eq!(sorted, vec![all[2], all[0]]);

    let total = SumPrimaryRadius::new().execute(&store, &sorted).unwrap();
    assert_abs_diff_eq!(total, 4.0);

    // The views alias the stored curves; nothing was copied or reordered.
    assert_eq!(store.len(), 4);
    assert_eq!(store.curve(all[1]).unwrap().kind(), CurveKind::Ellipse);
}

#[test]
fn sampling_the_whole_collection() {
    let specs = [
        CurveSpec::Circle { radius: 2.0 },
        CurveSpec::Helix {
            radius: 1.0,
            step: -3.0,
        },
    ];
    let store = CurveStore::from_specs(&specs);

    let samples = SampleCurves::new(FRAC_PI_4).execute(&store, store.ids()).unwrap();
    assert_eq!(samples.len(), 2);
    assert_abs_diff_eq!(samples[0].position.x, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(samples[1].position.z, -3.0);
    assert!(samples.iter().all(|s| s.derivative.z == 0.0));
}

#[test]
fn random_collection_report_is_consistent() {
    let specs = RandomSpecs::new(GeneratorConfig::default(), 2024)
        .specs()
        .unwrap();
    let store = CurveStore::from_specs(&specs);

    let report = RadiusReport::new(CurveKind::Circle)
        .execute(&store, store.ids())
        .unwrap();

    let expected = specs
        .iter()
        .filter(|s| s.kind() == CurveKind::Circle)
        .count();
    assert_eq!(report.sorted.len(), expected);
    assert!(report.radii.windows(2).all(|w| w[0] <= w[1]));
    assert_abs_diff_eq!(report.total, report.radii.iter().sum::<f64>(), epsilon = 1e-12);
    for id in &report.sorted {
        assert_eq!(store.curve(*id).unwrap().kind(), CurveKind::Circle);
    }
}

#[test]
fn removed_curve_fails_the_view() {
    let mut store = CurveStore::new();
    let specs = [CurveSpec::Circle { radius: 1.0 }, CurveSpec::Circle { radius: 2.0 }];
    for spec in &specs {
        store.add_spec(spec);
    }
    let view = store.ids().to_vec();
    store.remove(view[0]).unwrap();

    assert!(SumPrimaryRadius::new().execute(&store, &view).is_err());
    assert_abs_diff_eq!(
        SumPrimaryRadius::new().execute(&store, store.ids()).unwrap(),
        2.0
    );
}
