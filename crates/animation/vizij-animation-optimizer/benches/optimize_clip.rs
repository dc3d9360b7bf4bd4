//! Keyframe reduction throughput.
//!
//! Run with: cargo bench --package vizij-animation-optimizer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vizij_animation_optimizer::{
    AnimationOptimizer, JointTrack, Keypoint, Quat, RawAnimation, RawFloat3Track, RotationKey,
    ScaleKey, TrackOptimizer, TranslationKey,
};

/// Dense clip sampled at 30 fps with a mix of moving and static joints.
fn dense_clip(joints: usize, seconds: f32) -> RawAnimation {
    let frames = (seconds * 30.0) as usize + 1;
    let tracks = (0..joints)
        .map(|j| {
            let phase = j as f32 * 0.37;
            let moving = j % 3 != 0;
            let mut track = JointTrack::default();
            for f in 0..frames {
                let t = f as f32 / 30.0;
                let wave = if moving { (t * 2.0 + phase).sin() } else { 0.0 };
                track
                    .translations
                    .push(TranslationKey::new(t, [wave, 0.5 * wave, phase]));
                track.rotations.push(RotationKey::new(
                    t,
                    Quat::from_axis_angle([0.0, 1.0, 0.0], 0.8 * wave),
                ));
                track.scales.push(ScaleKey::new(t, [1.0, 1.0, 1.0]));
            }
            track
        })
        .collect();
    RawAnimation {
        name: format!("dense_{joints}"),
        duration: (frames - 1) as f32 / 30.0,
        tracks,
    }
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");

    for &joints in &[16usize, 64, 256] {
        let clip = dense_clip(joints, 2.0);
        group.throughput(Throughput::Elements(clip.key_count() as u64));

        let interpolated = AnimationOptimizer::default();
        group.bench_with_input(BenchmarkId::new("interpolated", joints), &clip, |b, clip| {
            b.iter(|| interpolated.run(black_box(clip)).unwrap())
        });

        let constant = AnimationOptimizer::constant_run(Default::default());
        group.bench_with_input(BenchmarkId::new("constant_run", joints), &clip, |b, clip| {
            b.iter(|| constant.run(black_box(clip)).unwrap())
        });
    }

    group.finish();
}

fn bench_track(c: &mut Criterion) {
    let mut group = c.benchmark_group("track");
    let optimizer = TrackOptimizer::default();

    for &keys in &[100usize, 1_000, 10_000] {
        let last = (keys - 1) as f32;
        let track = RawFloat3Track::new(
            "noise",
            (0..keys)
                .map(|i| {
                    let u = i as f32 / last;
                    Keypoint::linear(u, [(u * 40.0).sin(), u * u, 0.0])
                })
                .collect(),
        );
        group.throughput(Throughput::Elements(keys as u64));
        group.bench_with_input(BenchmarkId::new("float3", keys), &track, |b, track| {
            b.iter(|| optimizer.run(black_box(track)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_animation, bench_track);
criterion_main!(benches);
