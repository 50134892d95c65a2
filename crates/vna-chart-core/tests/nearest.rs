// File: crates/vna-chart-core/tests/nearest.rs
// Purpose: Validate nearest-sample hit testing used for marker snapping.

use vna_chart_core::{nearest, nearest_plotted, CoordinateMapper, Datapoint, DiskMapper, DiskRect, Point, Series, SeriesKind};

fn scenario() -> Series {
    Series::new(vec![
        Datapoint::new(1e6, 0.0, 0.0),
        Datapoint::new(2e6, 0.5, 0.5),
        Datapoint::new(3e6, -0.5, -0.5),
    ])
}

fn disk() -> DiskMapper {
    DiskMapper { rect: DiskRect::new(125.0, 125.0, 250.0) }
}

#[test]
fn pointer_on_sample_resolves_to_it() {
    let data = scenario();
    let m = disk();
    for (i, d) in data.iter().enumerate() {
        let hit = nearest(m.to_pixel(d), &data, &Series::empty(), &m).expect("hit");
        assert_eq!(hit.index, i);
        assert_eq!(hit.source, SeriesKind::Data);
        assert_eq!(hit.frequency, d.freq);
        assert_eq!(hit.distance, 0.0);
    }
}

#[test]
fn scenario_pointer_snaps_to_second_point() {
    let hit = nearest(Point::new(188.0, 63.0), &scenario(), &Series::empty(), &disk()).expect("hit");
    assert_eq!(hit.index, 1);
    assert_eq!(hit.frequency, 2e6);
    assert!(hit.distance < 1.0);
}

#[test]
fn pointer_outside_plot_is_ignored() {
    let data = scenario();
    assert!(nearest(Point::new(260.0, 125.0), &data, &Series::empty(), &disk()).is_none());
    assert!(nearest(Point::new(125.0, -1.0), &data, &Series::empty(), &disk()).is_none());
    // the bounding square edges still count
    assert!(nearest(Point::new(250.0, 250.0), &data, &Series::empty(), &disk()).is_some());
}

#[test]
fn empty_series_yield_nothing() {
    assert!(nearest(Point::new(125.0, 125.0), &Series::empty(), &Series::empty(), &disk()).is_none());
}

#[test]
fn data_is_preferred_over_reference() {
    let data = Series::new(vec![Datapoint::new(1e6, 0.9, 0.0)]);
    let reference = Series::new(vec![Datapoint::new(1e6, 0.0, 0.0)]);
    let hit = nearest(Point::new(125.0, 125.0), &data, &reference, &disk()).unwrap();
    assert_eq!(hit.source, SeriesKind::Data);
    assert_eq!(hit.index, 0);
}

#[test]
fn reference_is_searched_without_data() {
    let reference = scenario();
    let hit = nearest(Point::new(62.0, 188.0), &Series::empty(), &reference, &disk()).unwrap();
    assert_eq!(hit.source, SeriesKind::Reference);
    assert_eq!(hit.index, 2);
}

#[test]
fn ties_resolve_to_lowest_index() {
    let data = Series::new(vec![
        Datapoint::new(1e6, 0.2, 0.0),
        Datapoint::new(2e6, 0.2, 0.0),
        Datapoint::new(3e6, 0.2, 0.0),
    ]);
    let hit = nearest(Point::new(125.0, 125.0), &data, &Series::empty(), &disk()).unwrap();
    assert_eq!(hit.index, 0);
}

#[test]
fn filtered_samples_are_skipped_but_keep_their_index() {
    let data = scenario();
    // pointer on the 1 MHz sample, which the filter hides
    let hit = nearest_plotted(Point::new(125.0, 125.0), &data, &Series::empty(), &disk(), |d| d.freq > 1.5e6)
        .expect("hit");
    assert_eq!(hit.source, SeriesKind::Data);
    // 2 and 3 MHz are equally far; the lower index wins
    assert_eq!(hit.index, 1);
    assert_eq!(hit.frequency, 2e6);
}

#[test]
fn reference_is_used_when_no_data_sample_is_drawn() {
    let data = scenario();
    let reference = Series::new(vec![Datapoint::new(5e6, 0.0, 0.0)]);
    let hit = nearest_plotted(Point::new(125.0, 125.0), &data, &reference, &disk(), |d| d.freq > 4e6)
        .expect("hit");
    assert_eq!(hit.source, SeriesKind::Reference);
    assert_eq!(hit.index, 0);
}
