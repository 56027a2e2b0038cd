mod common;

use common::synthetic_image::{crop, disc_mask, gradient_rgb};
use poisson_blend::image::{ImageRgbF32, Rgb};
use poisson_blend::{
    blend, BlendError, BlendInputs, BlendParams, Channel, Gamma, Placement, PoissonBlender,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn blending_a_crop_of_the_target_reproduces_the_target() {
    init_logging();
    let target = gradient_rgb(48, 40);
    let mask = disc_mask(16, 6.0);
    let placement = Placement::new(12, 10);
    let source = crop(&target, placement.x, placement.y, mask.w, mask.h);

    let blender = PoissonBlender::new(BlendParams::default());
    let inputs = BlendInputs {
        mask: &mask,
        source: &source,
        target: &target,
    };
    let detailed = blender
        .blend_with_diagnostics(inputs, placement)
        .expect("blend should succeed");
    let out = detailed.output;
    assert_eq!((out.w, out.h), (target.w, target.h));

    let gamma = Gamma::default();
    for y in 0..target.h {
        for x in 0..target.w {
            let expected = target.get(x, y);
            let px = out.pixel(x, y);
            assert_eq!(px[3], 255);
            for c in 0..3 {
                let want = gamma.encode_u8(expected[c]) as i32;
                let got = px[c] as i32;
                assert!(
                    (want - got).abs() <= 1,
                    "pixel ({x}, {y}) channel {c}: expected {want}, got {got}"
                );
            }
        }
    }

    for ch in &detailed.report.channels {
        assert_eq!(ch.clamped, 0, "{} channel clamped values", ch.channel);
        assert!(ch.max_residual < 1e-6, "{} residual {}", ch.channel, ch.max_residual);
    }
}

#[test]
fn single_unknown_is_the_mean_of_its_target_neighbors() {
    init_logging();
    // 3x3 mask with only the center interior, placed at (1, 1) in a 5x5
    // target: the lone unknown lands on target pixel (2, 2).
    let mut mask = ImageRgbF32::new(3, 3);
    mask.set(1, 1, Rgb::splat(1.0));
    let source = ImageRgbF32::filled(3, 3, Rgb::splat(0.3));
    let mut target = ImageRgbF32::filled(5, 5, Rgb::splat(0.1));
    target.set(2, 1, Rgb::splat(0.25));
    target.set(3, 2, Rgb::splat(0.5));
    target.set(2, 3, Rgb::splat(0.75));
    target.set(1, 2, Rgb::splat(0.5));

    let out = blend(&mask, &source, &target, 1, 1, 2.2).expect("blend should succeed");

    let gamma = Gamma::default();
    let center = gamma.encode_clamped_u8(0.5);
    assert_eq!(out.pixel(2, 2), [center, center, center, 255]);
    // Everything else is the re-encoded target.
    let background = gamma.encode_u8(0.1);
    assert_eq!(out.pixel(0, 0), [background, background, background, 255]);
    let top = gamma.encode_u8(0.25);
    assert_eq!(out.pixel(2, 1), [top, top, top, 255]);
}

#[test]
fn placements_touching_the_border_are_rejected() {
    let target = ImageRgbF32::filled(10, 10, Rgb::splat(0.5));
    let mask = ImageRgbF32::filled(4, 4, Rgb::splat(1.0));
    let source = ImageRgbF32::filled(4, 4, Rgb::splat(0.5));

    // x + W + 1 must stay below the width: 5 + 4 + 1 = 10 fails.
    for (x, y) in [(0, 3), (3, 0), (5, 3), (3, 5), (9, 9)] {
        let err = blend(&mask, &source, &target, x, y, 2.2).unwrap_err();
        assert!(
            matches!(err, BlendError::InvalidPlacement { .. }),
            "placement ({x}, {y}) should be rejected, got {err:?}"
        );
    }
    assert!(blend(&mask, &source, &target, 4, 4, 2.2).is_ok());
    assert!(blend(&mask, &source, &target, 1, 1, 2.2).is_ok());
}

#[test]
fn invalid_placement_message_names_target_size() {
    let target = ImageRgbF32::filled(12, 8, Rgb::splat(0.5));
    let mask = ImageRgbF32::filled(4, 4, Rgb::splat(1.0));
    let err = blend(&mask, &mask, &target, 0, 2, 2.2).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("12x8"), "{msg}");
}

#[test]
fn mask_without_interior_is_degenerate() {
    let target = ImageRgbF32::filled(10, 10, Rgb::splat(0.5));
    let source = ImageRgbF32::filled(4, 4, Rgb::splat(0.5));
    // Exactly at the threshold is not interior.
    let mask = ImageRgbF32::filled(4, 4, Rgb::splat(0.99));
    let err = blend(&mask, &source, &target, 2, 2, 2.2).unwrap_err();
    assert_eq!(err, BlendError::DegenerateMask);
}

#[test]
fn only_the_red_channel_selects_interior_pixels() {
    let target = ImageRgbF32::filled(10, 10, Rgb::splat(0.5));
    let source = ImageRgbF32::filled(4, 4, Rgb::splat(0.5));
    let mask = ImageRgbF32::filled(4, 4, Rgb::new(0.0, 1.0, 1.0));
    let err = blend(&mask, &source, &target, 2, 2, 2.2).unwrap_err();
    assert_eq!(err, BlendError::DegenerateMask);
}

#[test]
fn source_smaller_than_mask_is_rejected() {
    let target = ImageRgbF32::filled(20, 20, Rgb::splat(0.5));
    let mask = ImageRgbF32::filled(6, 6, Rgb::splat(1.0));
    let source = ImageRgbF32::filled(6, 5, Rgb::splat(0.5));
    let err = blend(&mask, &source, &target, 2, 2, 2.2).unwrap_err();
    assert_eq!(
        err,
        BlendError::SourceTooSmall {
            source: (6, 5),
            mask: (6, 6),
        }
    );
}

#[test]
fn offsets_past_usize_range_are_rejected_before_solving() {
    let target = ImageRgbF32::filled(10, 10, Rgb::splat(0.5));
    let mask = ImageRgbF32::filled(2, 2, Rgb::splat(1.0));
    for (x, y) in [(usize::MAX, 3), (3, usize::MAX), (usize::MAX - 2, 3)] {
        let err = blend(&mask, &mask, &target, x, y, 2.2).unwrap_err();
        assert!(
            matches!(err, BlendError::InvalidPlacement { .. }),
            "placement ({x}, {y}) should be rejected, got {err:?}"
        );
    }
}

#[test]
fn non_finite_source_fails_the_affected_channel() {
    init_logging();
    let target = ImageRgbF32::filled(10, 10, Rgb::splat(0.5));
    let mut mask = ImageRgbF32::new(5, 5);
    for y in 1..4 {
        for x in 1..4 {
            mask.set(x, y, Rgb::splat(1.0));
        }
    }
    let mut source = ImageRgbF32::filled(5, 5, Rgb::splat(0.5));
    source.set(1, 1, Rgb::new(0.5, f32::NAN, 0.5));

    for parallel in [false, true] {
        let blender = PoissonBlender::new(BlendParams::default().with_parallel_channels(parallel));
        let inputs = BlendInputs {
            mask: &mask,
            source: &source,
            target: &target,
        };
        let err = blender.blend(inputs, Placement::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            BlendError::FactorizationFailure {
                unknowns: 9,
                channel: Some(Channel::G),
            },
            "parallel = {parallel}"
        );
    }
}

#[test]
fn non_positive_gamma_is_rejected() {
    let target = ImageRgbF32::filled(10, 10, Rgb::splat(0.5));
    let mask = ImageRgbF32::filled(4, 4, Rgb::splat(1.0));
    for gamma in [0.0, -1.0, f32::NAN] {
        let err = blend(&mask, &mask, &target, 2, 2, gamma).unwrap_err();
        assert!(matches!(err, BlendError::InvalidGamma(_)), "{err:?}");
    }
}

#[test]
fn parallel_channel_solve_matches_sequential() {
    init_logging();
    let target = gradient_rgb(40, 32);
    let source = ImageRgbF32::from_fn(14, 14, |x, y| {
        let t = ((x * 7 + y * 3) % 11) as f32 / 10.0;
        Rgb::new(t, 1.0 - t, 0.5)
    });
    let mask = disc_mask(14, 5.5);
    let inputs = BlendInputs {
        mask: &mask,
        source: &source,
        target: &target,
    };
    let placement = Placement::new(9, 7);

    let sequential = PoissonBlender::new(BlendParams::default())
        .blend(inputs, placement)
        .expect("sequential blend");
    let parallel = PoissonBlender::new(BlendParams::default().with_parallel_channels(true))
        .blend(inputs, placement)
        .expect("parallel blend");
    assert_eq!(sequential.as_bytes(), parallel.as_bytes());
}

#[test]
fn report_describes_system_and_stages() {
    init_logging();
    let target = gradient_rgb(32, 32);
    let source = ImageRgbF32::filled(10, 10, Rgb::splat(0.9));
    // Full 10x10 mask, then carve out one corner pixel.
    let mut mask = ImageRgbF32::filled(10, 10, Rgb::splat(1.0));
    mask.set(0, 0, Rgb::splat(0.0));
    let inputs = BlendInputs {
        mask: &mask,
        source: &source,
        target: &target,
    };

    let detailed = PoissonBlender::default()
        .blend_with_diagnostics(inputs, Placement::new(5, 6))
        .expect("blend should succeed");
    let report = &detailed.report;

    assert_eq!(report.system.unknowns, 99);
    assert_eq!((report.input.target_width, report.input.target_height), (32, 32));
    assert_eq!(report.input.placement, Placement::new(5, 6));
    assert!(report.system.nonzeros >= report.system.unknowns);
    assert!(report.system.boundary_terms > 0);
    assert_eq!(report.channels.len(), 3);
    for ch in Channel::ALL {
        let stats = report.channel(ch).expect("stats for every channel");
        assert!(stats.max_residual < 1e-6, "{ch} residual {}", stats.max_residual);
        assert!(stats.min <= stats.max);
    }
    for stage in ["validate", "index", "assemble", "factorize", "solve", "composite"] {
        assert!(report.timings.stage_ms(stage).is_some(), "missing stage {stage}");
    }

    let json = serde_json::to_value(report).expect("report serializes");
    assert_eq!(json["system"]["unknowns"], 99);
    assert_eq!(json["input"]["maskWidth"], 10);
    assert_eq!(json["channels"][0]["channel"], "r");
}

#[test]
fn pixels_outside_the_mask_keep_target_values() {
    let target = gradient_rgb(30, 30);
    let source = ImageRgbF32::filled(12, 12, Rgb::new(1.0, 0.0, 0.0));
    let mask = disc_mask(12, 4.0);
    let placement = Placement::new(8, 9);
    let out = blend(&mask, &source, &target, placement.x, placement.y, 2.2)
        .expect("blend should succeed");

    let gamma = Gamma::default();
    for y in 0..target.h {
        for x in 0..target.w {
            let in_mask = x >= placement.x
                && y >= placement.y
                && x < placement.x + mask.w
                && y < placement.y + mask.h
                && mask.get(x - placement.x, y - placement.y).r() > 0.99;
            if in_mask {
                continue;
            }
            let t = target.get(x, y);
            let expected = [
                gamma.encode_u8(t.r()),
                gamma.encode_u8(t.g()),
                gamma.encode_u8(t.b()),
                255,
            ];
            assert_eq!(out.pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
}
