use approx::assert_relative_eq;
use mathviz::anim::{Ease, Keyframe, Params, Timeline, Track};

fn linear_track(name: &str, from: (f64, f64), to: (f64, f64)) -> Track {
    Track::new(name).with_keyframes(vec![Keyframe::at(from.0, from.1), Keyframe::at(to.0, to.1)])
}

#[test]
fn test_linear_interpolation() {
    let tr = linear_track("r", (0.0, 1.0), (2.0, 3.0));
    assert_relative_eq!(tr.sample(1.0).unwrap(), 2.0);
    assert_relative_eq!(tr.sample(0.5).unwrap(), 1.5);
}

#[test]
fn test_holds_outside_range() {
    let tr = linear_track("r", (1.0, 10.0), (2.0, 20.0));
    assert_eq!(tr.sample(0.0), Some(10.0));
    assert_eq!(tr.sample(5.0), Some(20.0));
}

#[test]
fn test_keyframes_sorted_on_insert() {
    let tr = Track::new("p").with_keyframes(vec![Keyframe::at(2.0, 5.0), Keyframe::at(0.0, 1.0)]);
    assert_eq!(tr.keyframes[0].time_s, 0.0);
    assert_eq!(tr.bounds(), Some((0.0, 2.0)));
}

#[test]
fn test_negative_time_clamped() {
    assert_eq!(Keyframe::at(-1.0, 3.0).time_s, 0.0);
}

#[test]
fn test_ease_applies_to_outgoing_segment() {
    let tr = Track::new("p").with_keyframes(vec![
        Keyframe::at(0.0, 0.0).ease(Ease::InQuad),
        Keyframe::at(1.0, 1.0),
    ]);
    assert_relative_eq!(tr.sample(0.5).unwrap(), 0.25);
}

#[test]
fn test_timeline_sample_and_bounds() {
    let mut tl = Timeline::new();
    tl.add_track(linear_track("a", (0.0, 0.0), (1.0, 1.0)))
        .add_track(linear_track("b", (0.5, 4.0), (3.0, 8.0)));

    assert_eq!(tl.bounds(), Some((0.0, 3.0)));

    let p = tl.sample(1.0);
    assert_eq!(p.get("a"), Some(1.0));
    assert_relative_eq!(p.get("b").unwrap(), 4.0 + 4.0 * 0.2);
    assert_eq!(p.get("c"), None);
}

#[test]
fn test_later_track_wins() {
    let mut tl = Timeline::new();
    tl.add_track(linear_track("a", (0.0, 1.0), (1.0, 1.0)));
    tl.add_track(linear_track("a", (0.0, 7.0), (1.0, 7.0)));
    assert_eq!(tl.sample(0.5).get("a"), Some(7.0));
}

#[test]
fn test_empty_timeline() {
    let tl = Timeline::new();
    assert_eq!(tl.bounds(), None);
    assert!(tl.frames(5).is_empty());
    assert_eq!(tl.sample(0.0), Params::default());
}

#[test]
fn test_frames_span_bounds() {
    let mut tl = Timeline::new();
    tl.add_track(linear_track("n", (0.0, 1.0), (2.0, 5.0)));

    let frames = tl.frames(5);
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0].0, 0.0);
    assert_eq!(frames[4].0, 2.0);
    let counts: Vec<i64> = frames.iter().map(|(_, p)| p.count("n", 0)).collect();
    assert_eq!(counts, vec![1, 2, 3, 4, 5]);

    assert_eq!(tl.frames(0).len(), 0);
    assert_eq!(tl.frames(1).len(), 1);
}

#[test]
fn test_params_count_rounds_and_falls_back() {
    let mut tl = Timeline::new();
    tl.add_track(linear_track("n", (0.0, 2.4), (1.0, 2.4)));
    tl.add_track(linear_track("bad", (0.0, f64::NAN), (1.0, f64::NAN)));

    let p = tl.sample(0.0);
    assert_eq!(p.count("n", 0), 2);
    assert_eq!(p.count("bad", 9), 9);
    assert_eq!(p.count("missing", -1), -1);
    assert_eq!(p.get_or("missing", 1.5), 1.5);
}
