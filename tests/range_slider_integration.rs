use signalcurve::application::range_slider::{Handle, RangeSlider};
use signalcurve::config::AnalyticsConfig;
use signalcurve::domain::series::{build_series, range_slice};
use signalcurve::infrastructure::csv_source::parse_rows;
use signalcurve::infrastructure::demo::DEMO_CSV;

const TRACK_WIDTH: f64 = 400.0;

#[test]
fn test_drag_gesture_drives_the_window_slicer() {
    let cfg = AnalyticsConfig::default();
    let rows = parse_rows(DEMO_CSV).unwrap();
    let series = build_series(&rows, cfg.fallback_baseline);
    let mut slider = RangeSlider::new(&series).unwrap();

    // Grab the start handle and drag it a quarter of the way in; several
    // pointer moves land within one frame and only the last one applies.
    slider.begin_drag(Handle::Start);
    slider.pointer_moved(40.0, TRACK_WIDTH);
    slider.pointer_moved(80.0, TRACK_WIDTH);
    slider.pointer_moved(100.0, TRACK_WIDTH);
    let report = slider.tick().expect("a committed change");
    slider.release();

    let (start, end) = report.expect("narrowed range reports explicit bounds");
    let windowed = range_slice(&series, Some(&start), Some(&end));
    assert!(windowed.len() < series.len());
    assert_eq!(windowed[0].t, start);
    assert_eq!(windowed.last().unwrap().t, end);

    let (start_ix, end_ix) = slider.range();
    assert_eq!(start_ix, ((series.len() - 1) as f64 * 0.25).round() as usize);
    assert_eq!(end_ix, series.len() - 1);
    assert_eq!(windowed.len(), end_ix - start_ix + 1);
}

#[test]
fn test_collapsing_gesture_is_rejected_mid_drag() {
    let cfg = AnalyticsConfig::default();
    let rows = parse_rows(DEMO_CSV).unwrap();
    let series = build_series(&rows, cfg.fallback_baseline);
    let mut slider = RangeSlider::new(&series).unwrap();

    slider.begin_drag(Handle::End);
    slider.pointer_moved(0.0, TRACK_WIDTH);
    assert_eq!(slider.tick(), None);
    assert_eq!(slider.range(), (0, series.len() - 1));

    // A later frame with a valid position still lands.
    slider.pointer_moved(TRACK_WIDTH / 2.0, TRACK_WIDTH);
    assert!(slider.tick().is_some());
    slider.release();
    assert!(slider.report().is_some());
}

#[test]
fn test_reset_restores_the_unfiltered_view() {
    let cfg = AnalyticsConfig::default();
    let rows = parse_rows(DEMO_CSV).unwrap();
    let series = build_series(&rows, cfg.fallback_baseline);
    let mut slider = RangeSlider::new(&series).unwrap();

    slider.begin_drag(Handle::Start);
    slider.pointer_moved(TRACK_WIDTH * 0.3, TRACK_WIDTH);
    slider.tick();
    slider.release();
    assert!(slider.report().is_some());

    assert_eq!(slider.reset(), None);
    // "No filter" hands the slicer the full series again.
    let windowed = range_slice(&series, None, None);
    assert_eq!(windowed.len(), series.len());
}
