// File: crates/vna-chart-core/tests/mapping.rs
// Purpose: Validate value/pixel projections: linear frequency chart, unit disk, frequency axis.

use vna_chart_core::{
    AxisExtent, CoordinateMapper, Datapoint, DiskMapper, DiskRect, FrequencyAxis, FrequencySpan, LinearMapper,
    PlotRect, Point, Projection, ScaleKind, INDUCTANCE_DISPLAY_SCALE,
};

fn inductance_mapper(extent: AxisExtent) -> LinearMapper {
    let rect = PlotRect::from_ltwh(45.0, 30.0, 250.0, 250.0);
    LinearMapper {
        rect,
        extent,
        x_axis: FrequencyAxis::new(FrequencySpan::new(1e6, 3e6), &rect, ScaleKind::Linear),
        value_fn: Datapoint::inductive_equivalent,
        unit_scale: INDUCTANCE_DISPLAY_SCALE,
    }
}

#[test]
fn linear_round_trip_within_one_pixel() {
    let extent = AxisExtent::new(-3e-6, 5e-6);
    let rect = PlotRect::from_ltwh(45.0, 30.0, 250.0, 250.0);
    let pixel_value = extent.span / rect.height;
    for i in 0..=40 {
        let v = extent.min + extent.span * i as f64 / 40.0;
        let y = extent.to_pixel_y(v, &rect);
        let back = extent.from_pixel_y(y, &rect);
        assert!((back - v).abs() <= pixel_value, "v={v} y={y} back={back}");
    }
}

#[test]
fn linear_y_edges() {
    let m = inductance_mapper(AxisExtent::new(-1e-6, 1e-6));
    assert_eq!(m.to_pixel_y(1e-6), 30.0);
    assert_eq!(m.to_pixel_y(-1e-6), 280.0);
    assert_eq!(m.to_pixel_y(0.0), 155.0);
}

#[test]
fn linear_readout_uses_display_scale() {
    let m = inductance_mapper(AxisExtent::new(-1e-6, 1e-6));
    // top edge reads back max, in display units
    assert!((m.from_pixel_y(30.0) - 1e-6 * 10e11).abs() < 1e-3);
    let r = m.from_pixel(Point::new(170.0, 155.0)).expect("linear charts have an inverse");
    assert_eq!(r.frequency, 2e6);
    assert!(r.value.abs() < 1e-3);
}

#[test]
fn linear_maps_sample_to_frequency_and_inductance() {
    let m = inductance_mapper(AxisExtent::new(-1e-5, 1e-5));
    // Γ = j  →  Z = j50 Ω
    let d = Datapoint::new(2e6, 0.0, 1.0);
    let p = m.to_pixel(&d);
    assert_eq!(p.x, 170.0);
    let l = 50.0 / (2.0 * std::f64::consts::PI * 2e6);
    assert_eq!(p.y, m.to_pixel_y(l));
    assert!(p.y < 155.0, "positive inductance plots above the midline");
}

#[test]
fn disk_maps_scenario_point() {
    let m = DiskMapper { rect: DiskRect::new(125.0, 125.0, 250.0) };
    assert_eq!(m.to_pixel(&Datapoint::new(2e6, 0.5, 0.5)), Point::new(187.5, 62.5));
    assert_eq!(m.to_pixel(&Datapoint::new(1e6, 0.0, 0.0)), Point::new(125.0, 125.0));
    assert_eq!(m.to_pixel(&Datapoint::new(3e6, -0.5, -0.5)), Point::new(62.5, 187.5));
}

#[test]
fn disk_has_no_inverse() {
    let p = Projection::Smith(DiskMapper { rect: DiskRect::new(125.0, 125.0, 250.0) });
    assert!(p.from_pixel(Point::new(125.0, 125.0)).is_none());
}

#[test]
fn disk_mapping_stays_in_bounding_square() {
    let rect = DiskRect::new(145.0, 145.0, 250.0);
    let m = DiskMapper { rect };
    let bounds = rect.bounds();
    for i in 0..72 {
        let a = (i as f64 * 5.0).to_radians();
        for &mag in &[0.0, 0.3, 0.77, 1.0] {
            let d = Datapoint::new(1e6, mag * a.cos(), mag * a.sin());
            let p = m.to_pixel(&d);
            assert!(p.x >= bounds.left - 1e-9 && p.x <= bounds.right() + 1e-9, "{p:?}");
            assert!(p.y >= bounds.top - 1e-9 && p.y <= bounds.bottom() + 1e-9, "{p:?}");
        }
    }
}

#[test]
fn frequency_axis_linear() {
    let rect = PlotRect::from_ltwh(45.0, 30.0, 250.0, 250.0);
    let ax = FrequencyAxis::new(FrequencySpan::new(1e6, 3e6), &rect, ScaleKind::Linear);
    assert_eq!(ax.to_px(1e6), 45.0);
    assert_eq!(ax.to_px(2e6), 170.0);
    assert_eq!(ax.to_px(3e6), 295.0);
    assert_eq!(ax.from_px(170.0), 2e6);
    assert_eq!(ax.from_px(0.0), 1e6);
    assert_eq!(ax.from_px(1000.0), 3e6);

    let ticks = ax.ticks();
    assert_eq!(ticks, vec![(170.0, 2e6), (295.0, 3e6)]);
}

#[test]
fn frequency_axis_log() {
    let rect = PlotRect::from_ltwh(45.0, 30.0, 250.0, 250.0);
    let ax = FrequencyAxis::new(FrequencySpan::new(1e6, 100e6), &rect, ScaleKind::Log10);
    assert_eq!(ax.kind, ScaleKind::Log10);
    assert_eq!(ax.to_px(10e6), 170.0);
    assert!((ax.from_px(170.0) - 10e6).abs() < 1.0);
}

#[test]
fn frequency_axis_log_needs_positive_start() {
    let rect = PlotRect::from_ltwh(0.0, 0.0, 100.0, 100.0);
    let ax = FrequencyAxis::new(FrequencySpan::new(0.0, 1e6), &rect, ScaleKind::Log10);
    assert_eq!(ax.kind, ScaleKind::Linear);
}

#[test]
fn single_frequency_sits_mid_plot() {
    let rect = PlotRect::from_ltwh(45.0, 30.0, 250.0, 250.0);
    let ax = FrequencyAxis::new(FrequencySpan::new(5e6, 5e6), &rect, ScaleKind::Linear);
    assert_eq!(ax.to_px(5e6), 170.0);
}

#[test]
fn rect_validation() {
    assert!(PlotRect::try_from_ltwh(0.0, 0.0, 10.0, 10.0).is_ok());
    assert!(PlotRect::try_from_ltwh(0.0, 0.0, 0.0, 10.0).is_err());
    assert!(PlotRect::try_from_ltwh(0.0, 0.0, 10.0, f64::NAN).is_err());
}

#[test]
fn segments_are_clipped_to_the_rect() {
    let rect = PlotRect::from_ltwh(45.0, 30.0, 250.0, 250.0);

    let inner = (Point::new(50.0, 40.0), Point::new(200.0, 100.0));
    assert_eq!(rect.clip_segment(inner.0, inner.1), Some(inner));

    let (a, b) = rect.clip_segment(Point::new(-205.0, 155.0), Point::new(295.0, 155.0)).unwrap();
    assert_eq!(a, Point::new(45.0, 155.0));
    assert_eq!(b, Point::new(295.0, 155.0));

    let (a, b) = rect.clip_segment(Point::new(170.0, -1e6), Point::new(170.0, 1e6)).unwrap();
    assert_eq!((a.x, b.x), (170.0, 170.0));
    assert!((a.y - 30.0).abs() < 1e-6 && (b.y - 280.0).abs() < 1e-6);

    // misses the rect entirely
    assert!(rect.clip_segment(Point::new(0.0, 0.0), Point::new(40.0, 300.0)).is_none());
    assert!(rect.clip_segment(Point::new(10.0, 100.0), Point::new(20.0, 100.0)).is_none());
    assert!(rect.clip_segment(Point::new(f64::NAN, 100.0), Point::new(100.0, 100.0)).is_none());
}
