use pulsemark::{
    constants::RIPPLE_OUTER_RADIUS, FrameClock, LatLng, MarkerComposite, MarkerError, MarkerHost,
    MarkerVisual, SystemClock,
};

struct RecordingHost {
    frames: Vec<(LatLng, MarkerVisual)>,
}

impl RecordingHost {
    fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl MarkerHost for RecordingHost {
    fn place(&mut self, coordinate: LatLng, visual: &MarkerVisual) {
        self.frames.push((coordinate, *visual));
    }
}

fn landmark(group_size: u32, now_ms: f64) -> MarkerComposite {
    let _ = env_logger::builder().is_test(true).try_init();
    MarkerComposite::new(LatLng::new(37.78825, -122.4324), group_size, now_ms).unwrap()
}

#[test]
fn test_group_100_ripple_scenario() {
    // scale(100) == 20: initial radius, mid-cycle strictly inside the
    // bounds, exact restart at the 2000ms cycle boundary.
    let mut marker = landmark(100, 0.0);

    let start = marker.render(0.0);
    assert_eq!(start.ripple_radius, 20.0);
    assert_eq!(start.ripple_opacity, 1.0);

    let mid = marker.render(1000.0);
    assert!(mid.ripple_radius > 20.0);
    assert!(mid.ripple_radius < RIPPLE_OUTER_RADIUS);
    assert!(mid.ripple_opacity > 0.0 && mid.ripple_opacity < 1.0);

    let restarted = marker.render(2000.0);
    assert_eq!(restarted.ripple_radius, 20.0);
    assert_eq!(restarted.ripple_opacity, 1.0);
}

#[test]
fn test_ripple_synchrony_across_irregular_frames() {
    let mut marker = landmark(100, 0.0);
    let base = 20.0;

    // Irregular clock, including a long pause: radius and opacity must
    // stay at the same fractional position within the shared cycle.
    for now in [0.0, 16.7, 431.0, 1999.0, 2000.0, 90_000.5, 90_016.5] {
        let visual = marker.render(now);
        let radius_progress = (visual.ripple_radius - base) / (RIPPLE_OUTER_RADIUS - base);
        let opacity_progress = 1.0 - visual.ripple_opacity;
        assert!(
            (radius_progress - opacity_progress).abs() < 1e-9,
            "radius/opacity tearing at now={}",
            now
        );
    }
}

#[test]
fn test_confetti_phase_and_sign_conventions() {
    let mut marker = landmark(42, 0.0);
    let visual = marker.render(1200.0);

    // Even and odd phase indices drift to opposite sides.
    assert!(visual.particles[0].horizontal_offset > 0.0);
    assert!(visual.particles[1].horizontal_offset < 0.0);
    assert!(visual.particles[2].horizontal_offset > 0.0);

    // Particle 4's 1600ms stagger has not elapsed yet.
    assert_eq!(visual.particles[4].vertical_offset, 0.0);
    assert_eq!(visual.particles[4].opacity, 1.0);
}

#[test]
fn test_present_drives_host_once_per_frame() {
    let mut host = RecordingHost::new();
    let mut marker = landmark(100, 0.0);

    for frame in 0..60 {
        marker.present(frame as f64 * 16.0, &mut host);
    }

    assert_eq!(host.frames.len(), 60);
    let (coordinate, first) = &host.frames[0];
    assert_eq!(*coordinate, LatLng::new(37.78825, -122.4324));
    assert_eq!(first.ripple_radius, 20.0);
    assert_eq!(first.particles.len(), 5);
}

#[test]
fn test_destroyed_marker_stops_advancing() {
    let mut marker = landmark(100, 0.0);
    marker.render(100.0);

    let counts_before: Vec<u64> = marker
        .confetti()
        .particles()
        .iter()
        .flat_map(|p| {
            [
                p.vertical().advance_count(),
                p.horizontal().advance_count(),
                p.opacity().advance_count(),
                p.scale().advance_count(),
            ]
        })
        .collect();
    let ripple_counts = (
        marker.ripple().radius().advance_count(),
        marker.ripple().opacity().advance_count(),
    );
    let frozen = marker.render(100.0);

    marker.destroy();
    marker.destroy(); // idempotent

    assert_eq!(marker.render(10_000.0), frozen);
    assert_eq!(marker.render(20_000.0), frozen);

    let counts_after: Vec<u64> = marker
        .confetti()
        .particles()
        .iter()
        .flat_map(|p| {
            [
                p.vertical().advance_count(),
                p.horizontal().advance_count(),
                p.opacity().advance_count(),
                p.scale().advance_count(),
            ]
        })
        .collect();
    let expected: Vec<u64> = counts_before.iter().map(|c| c + 1).collect();
    assert_eq!(counts_after, expected);
    assert_eq!(
        marker.ripple().radius().advance_count(),
        ripple_counts.0 + 1
    );
    assert_eq!(
        marker.ripple().opacity().advance_count(),
        ripple_counts.1 + 1
    );
}

#[test]
fn test_system_clock_drives_rendering() {
    let clock = SystemClock::new();
    let mut marker = landmark(100, clock.now_ms());

    let first = marker.render(clock.now_ms());
    let second = marker.render(clock.now_ms());

    // Real clocks are monotonic but jittery; both frames must be sane.
    for visual in [first, second] {
        assert!(visual.ripple_radius >= 20.0);
        assert!(visual.ripple_radius <= RIPPLE_OUTER_RADIUS);
        assert!(visual.ripple_opacity >= 0.0 && visual.ripple_opacity <= 1.0);
    }
}

#[test]
fn test_invalid_coordinate_is_rejected() {
    let result = MarkerComposite::new(LatLng::new(123.0, 456.0), 10, 0.0);
    assert!(matches!(result, Err(MarkerError::InvalidCoordinates(_))));
}

#[test]
fn test_visual_snapshot_serializes() {
    let mut marker = landmark(1000, 0.0);
    let visual = marker.render(750.0);

    let json = serde_json::to_string(&visual).unwrap();
    let restored: MarkerVisual = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, visual);
}
