//! Animation Data Tests
//!
//! Tests for:
//! - KeyframeTrack segment selection and sampling
//! - Interpolatable trait implementations (f32, Vec3, Quat)
//! - AnimationChannel defaults, scale baseline normalization, TRS composition
//! - AnimationClip channel lookup and tick rate fallback

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};

use armature::animation::channel::AnimationChannel;
use armature::animation::clip::{AnimationClip, DEFAULT_TICKS_PER_SECOND};
use armature::animation::tracks::{Keyframe, KeyframeTrack};
use armature::animation::values::Interpolatable;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn scalar_track(keys: &[(f32, f32)]) -> KeyframeTrack<f32> {
    KeyframeTrack::new(keys.iter().map(|&(t, v)| Keyframe::new(t, v)).collect())
}

// ============================================================================
// KeyframeTrack: Sampling
// ============================================================================

#[test]
fn track_linear_f32_midpoint() {
    let track = scalar_track(&[(0.0, 0.0), (1.0, 10.0)]);
    let val = track.sample(0.5, 0.0);
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn track_exact_keyframes() {
    let track = scalar_track(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)]);
    assert!(approx(track.sample(0.0, -1.0), 0.0));
    assert!(approx(track.sample(1.0, -1.0), 10.0));
    assert!(approx(track.sample(2.0, -1.0), 20.0));
}

#[test]
fn track_beyond_last_key_holds_last_value() {
    let track = scalar_track(&[(0.0, 0.0), (1.0, 10.0), (2.0, 4.0)]);
    assert!(approx(track.sample(2.5, 0.0), 4.0));
    assert!(approx(track.sample(100.0, 0.0), 4.0));
    assert_eq!(track.segment_index(100.0), Some(2));
}

#[test]
fn track_before_first_key_follows_blend_factor() {
    // No clamping before the first key: factor (0 - 2) / (4 - 2) = -1
    let track = scalar_track(&[(2.0, 0.0), (4.0, 10.0)]);
    assert!(approx(track.sample(0.0, 0.0), -10.0));
    assert_eq!(track.segment_index(0.0), Some(0));
}

#[test]
fn track_empty_returns_default() {
    let track: KeyframeTrack<f32> = KeyframeTrack::default();
    assert!(track.is_empty());
    assert_eq!(track.segment_index(3.0), None);
    assert!(approx(track.sample(3.0, 7.5), 7.5));
}

#[test]
fn track_single_key_returns_value_everywhere() {
    let track = scalar_track(&[(4.0, 42.0)]);
    for t in [-10.0, 0.0, 4.0, 9.0, 1000.0] {
        assert!(approx(track.sample(t, 0.0), 42.0), "t={t}");
    }
}

#[test]
fn track_duplicate_timestamps_do_not_divide_by_zero() {
    let track = scalar_track(&[(0.0, 0.0), (5.0, 1.0), (5.0, 3.0), (10.0, 5.0)]);
    let at_five = track.sample(5.0, 0.0);
    assert!(at_five.is_finite());
    assert!(approx(at_five, 3.0), "got {at_five}");
    assert!(approx(track.sample(7.5, 0.0), 4.0));
}

#[test]
fn track_segments_are_affine_between_keys() {
    let track = KeyframeTrack::new(vec![
        Keyframe::new(0.0, Vec3::new(0.0, 0.0, 0.0)),
        Keyframe::new(3.0, Vec3::new(3.0, -6.0, 9.0)),
        Keyframe::new(10.0, Vec3::new(-4.0, 1.0, 2.0)),
    ]);

    for keys in track.keys().windows(2) {
        let (a, b) = (keys[0], keys[1]);
        for step in 1..10 {
            let factor = step as f32 / 10.0;
            let t = a.time + (b.time - a.time) * factor;
            let expected = a.value + (b.value - a.value) * factor;
            let val = track.sample(t, Vec3::ZERO);
            assert!(
                (val - expected).length() < 1e-4,
                "t={t}: expected {expected}, got {val}"
            );
        }
    }
}

#[test]
fn track_time_range() {
    let track = scalar_track(&[(8.0, 0.0), (2.0, 0.0), (5.0, 0.0)]);
    assert_eq!(track.time_range(), Some((2.0, 8.0)));
    assert_eq!(KeyframeTrack::<f32>::default().time_range(), None);
}

// ============================================================================
// Interpolatable Implementations
// ============================================================================

#[test]
fn interpolatable_f32_linear() {
    assert!(approx(f32::interpolate(0.0, 10.0, 0.25), 2.5));
}

#[test]
fn interpolatable_vec3_linear() {
    let result = Vec3::interpolate(Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0), 0.5);
    assert!(vec3_approx(result, Vec3::new(5.0, 10.0, 15.0)));
}

#[test]
fn interpolatable_quat_is_slerp() {
    let a = Quat::IDENTITY;
    let b = Quat::from_rotation_y(FRAC_PI_2);
    let result = Quat::interpolate(a, b, 0.5);

    let expected = Quat::from_rotation_y(FRAC_PI_2 * 0.5);
    let angle = result.angle_between(expected);
    assert!(angle < 1e-4, "Slerp mismatch: angle={angle}");
}

#[test]
fn interpolatable_quat_stays_unit_length() {
    let rotations = [
        Quat::IDENTITY,
        Quat::from_rotation_x(PI * 0.9),
        Quat::from_rotation_y(-FRAC_PI_2),
        Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 2.0),
        Quat::from_rotation_z(PI),
    ];

    for &a in &rotations {
        for &b in &rotations {
            for step in 0..=10 {
                let q = Quat::interpolate(a, b, step as f32 / 10.0);
                assert!((q.length() - 1.0).abs() < 1e-4, "|q|={}", q.length());
            }
        }
    }
}

// ============================================================================
// AnimationChannel
// ============================================================================

#[test]
fn channel_empty_tracks_use_property_defaults() {
    let channel = AnimationChannel::default();
    assert_eq!(channel.sample_position(3.0), Vec3::ZERO);
    assert_eq!(channel.sample_rotation(3.0), Quat::IDENTITY);
    assert_eq!(channel.sample_scale(3.0), Vec3::ONE);
    assert_eq!(channel.base_scale(), Vec3::ONE);
    assert_eq!(channel.local_transform(3.0), Mat4::IDENTITY);
}

#[test]
fn channel_scale_is_relative_to_first_key() {
    let channel = AnimationChannel::new(
        Vec::new(),
        Vec::new(),
        vec![
            Keyframe::new(0.0, Vec3::splat(2.0)),
            Keyframe::new(10.0, Vec3::splat(4.0)),
        ],
    );

    assert_eq!(channel.base_scale(), Vec3::splat(2.0));
    assert!(vec3_approx(channel.sample_scale(0.0), Vec3::ONE));
    assert!(vec3_approx(channel.sample_scale(5.0), Vec3::splat(1.5)));
    assert!(vec3_approx(channel.sample_scale(10.0), Vec3::splat(2.0)));
}

#[test]
fn channel_single_scale_key_normalizes_to_one() {
    let channel = AnimationChannel::new(
        Vec::new(),
        Vec::new(),
        vec![Keyframe::new(3.0, Vec3::new(2.0, 3.0, 0.5))],
    );

    for t in [0.0, 3.0, 50.0] {
        assert!(vec3_approx(channel.sample_scale(t), Vec3::ONE), "t={t}");
    }
}

#[test]
fn channel_zero_baseline_component_is_not_divided() {
    let channel = AnimationChannel::new(
        Vec::new(),
        Vec::new(),
        vec![
            Keyframe::new(0.0, Vec3::new(0.0, 2.0, 1.0)),
            Keyframe::new(2.0, Vec3::new(4.0, 2.0, 1.0)),
        ],
    );

    let scale = channel.sample_scale(1.0);
    assert!(vec3_approx(scale, Vec3::new(2.0, 1.0, 1.0)), "got {scale}");
}

#[test]
fn channel_single_rotation_key_is_returned() {
    let q = Quat::from_rotation_x(0.7);
    let channel = AnimationChannel::new(Vec::new(), vec![Keyframe::new(1.0, q)], Vec::new());
    for t in [0.0, 1.0, 20.0] {
        assert!(channel.sample_rotation(t).angle_between(q) < 1e-4);
    }
}

#[test]
fn channel_tracks_are_timed_independently() {
    let channel = AnimationChannel::new(
        vec![
            Keyframe::new(0.0, Vec3::ZERO),
            Keyframe::new(4.0, Vec3::new(4.0, 0.0, 0.0)),
        ],
        vec![
            Keyframe::new(0.0, Quat::IDENTITY),
            Keyframe::new(2.0, Quat::from_rotation_z(FRAC_PI_2)),
        ],
        Vec::new(),
    );

    assert!(vec3_approx(channel.sample_position(2.0), Vec3::new(2.0, 0.0, 0.0)));
    let rotation = channel.sample_rotation(2.0);
    assert!(rotation.angle_between(Quat::from_rotation_z(FRAC_PI_2)) < 1e-4);
    assert_eq!(channel.time_range(), Some((0.0, 4.0)));
}

#[test]
fn channel_local_transform_is_trs() {
    let translation = Vec3::new(1.0, 2.0, 3.0);
    let rotation = Quat::from_rotation_y(FRAC_PI_2);
    let channel = AnimationChannel::new(
        vec![Keyframe::new(0.0, translation)],
        vec![Keyframe::new(0.0, rotation)],
        vec![
            Keyframe::new(0.0, Vec3::ONE),
            Keyframe::new(10.0, Vec3::splat(3.0)),
        ],
    );

    let local = channel.local_transform(5.0);
    let expected = Mat4::from_translation(translation)
        * Mat4::from_quat(rotation)
        * Mat4::from_scale(Vec3::splat(2.0));
    assert!(local.abs_diff_eq(expected, 1e-4), "{local} != {expected}");
}

#[test]
fn channel_is_moving_uses_first_two_keys() {
    let still = AnimationChannel::new(
        vec![
            Keyframe::new(0.0, Vec3::X),
            Keyframe::new(1.0, Vec3::X),
            Keyframe::new(2.0, Vec3::Y),
        ],
        Vec::new(),
        Vec::new(),
    );
    let moving = AnimationChannel::new(
        Vec::new(),
        vec![
            Keyframe::new(0.0, Quat::IDENTITY),
            Keyframe::new(1.0, Quat::from_rotation_x(0.5)),
        ],
        Vec::new(),
    );

    assert!(!still.is_moving(1e-4));
    assert!(moving.is_moving(1e-4));
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_channel_lookup_by_name() {
    let clip = AnimationClip::new(
        "walk",
        30.0,
        30.0,
        vec![
            ("clip_test:Hip".to_string(), AnimationChannel::default()),
            ("clip_test:Knee".to_string(), AnimationChannel::default()),
        ],
    );

    assert_eq!(clip.channel_count(), 2);
    assert!(clip.channel("clip_test:Hip").is_some());
    assert!(clip.channel("clip_test:Knee").is_some());
    assert!(clip.channel("clip_test:Elbow").is_none());
    assert!(clip.channel("clip_test:never_interned_name").is_none());

    let symbol = armature::interner::get("clip_test:Hip").unwrap();
    assert!(clip.channel_for(symbol).is_some());
}

#[test]
fn clip_zero_tick_rate_defaults() {
    let clip = AnimationClip::new("idle", 50.0, 0.0, Vec::<(&str, AnimationChannel)>::new());
    assert_eq!(clip.ticks_per_second, DEFAULT_TICKS_PER_SECOND);
    assert!(approx(clip.duration_seconds(), 2.0));
}

#[test]
fn clip_channels_iterates_names() {
    let clip = AnimationClip::new(
        "pose",
        1.0,
        1.0,
        [("clip_iter:A", AnimationChannel::default()), ("clip_iter:B", AnimationChannel::default())],
    );

    let mut names: Vec<&str> = clip.channels().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["clip_iter:A", "clip_iter:B"]);
}
