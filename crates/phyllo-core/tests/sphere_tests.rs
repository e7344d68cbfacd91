// Tests for the sphere distributor, the view cone and the sampler.

use glam::Vec3;
use phyllo_core::*;
use rand::prelude::*;

fn params(point_count: usize, distance_bias: f32, turn_fraction: f32) -> SphereParams {
    SphereParams::new(&SphereConfig {
        point_count,
        distance_bias,
        turn_fraction,
        ..SphereConfig::default()
    })
    .unwrap()
}

fn tilted_basis() -> Basis {
    Basis::new(Vec3::new(1.0, 1.0, 0.0), Vec3::new(-1.0, 1.0, 0.0)).unwrap()
}

#[test]
fn defaults_are_the_documented_values() {
    let c = SphereConfig::default();
    assert_eq!(c.point_count, 100);
    assert_eq!(c.distance_bias, 1.4);
    assert_eq!(c.view_angle_degrees, 180.0);
    assert_eq!(c.view_radius, 75.0);
    assert!((c.turn_fraction - 1.61803).abs() < 1e-6);
    let b = Basis::default();
    assert_eq!((b.forward(), b.right()), (Vec3::Z, Vec3::X));
}

#[test]
fn unbiased_position_is_identity() {
    for u in [0.0, 0.5, 1.0] {
        assert_eq!(biased_position(u, 0.0), u);
    }
}

#[test]
fn biased_position_keeps_endpoints() {
    for bias in [0.3, 1.0, 1.4, 4.0] {
        assert_eq!(biased_position(0.0, bias), 0.0);
        assert!((biased_position(1.0, bias) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn unit_bias_is_identity_and_others_pull_toward_apex() {
    assert!((biased_position(0.5, 1.0) - 0.5).abs() < 1e-6);
    // exponent at u = 0.5 is the mean of bias and 1/bias, which exceeds 1
    assert!(biased_position(0.5, 1.4) < 0.5);
    assert!(biased_position(0.5, 3.0) < biased_position(0.5, 1.4));
}

#[test]
fn apex_is_forward_scaled_by_radius() {
    for basis in [Basis::default(), tilted_basis()] {
        let p = params(30, 1.4, 1.61803);
        let apex = p.direction(0, &basis).unwrap();
        assert!(apex.abs_diff_eq(basis.forward() * 75.0, 1e-4), "{apex}");
    }
}

#[test]
fn every_direction_has_view_radius_length() {
    let basis = tilted_basis();
    let p = params(64, 1.4, 0.618034);
    for (i, d) in p.directions(&basis).iter().enumerate() {
        assert!((d.length() - 75.0).abs() < 1e-2, "index {i} length {}", d.length());
    }
}

#[test]
fn polar_angle_matches_biased_fraction() {
    let basis = Basis::default();
    let p = params(21, 1.4, 0.618034);
    for i in 1..21 {
        let u = i as f32 / 20.0;
        let expected = biased_position(u, 1.4) * 180.0;
        let d = p.direction(i, &basis).unwrap();
        let got = basis.forward().angle_between(d).to_degrees();
        assert!((got - expected).abs() < 0.1, "index {i}: {got} vs {expected}");
    }
}

#[test]
fn last_point_sits_at_the_antipode() {
    let basis = tilted_basis();
    let p = params(17, 2.0, 0.618034);
    let last = p.direction(16, &basis).unwrap();
    assert!(last.abs_diff_eq(-75.0 * basis.forward(), 1e-2), "{last}");
}

#[test]
fn an_extra_full_turn_is_a_no_op() {
    let basis = Basis::default();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let tf: f32 = rng.gen_range(0.0..1.0);
        let a = params(40, 1.4, tf).directions(&basis);
        let b = params(40, 1.4, tf + 1.0).directions(&basis);
        for (i, (da, db)) in a.iter().zip(&b).enumerate() {
            assert!(da.abs_diff_eq(*db, 1e-2), "tf={tf} index {i}: {da} vs {db}");
        }
    }
}

#[test]
fn directions_match_individual_queries() {
    let basis = tilted_basis();
    let p = params(25, 0.8, 0.618034);
    let all = p.directions(&basis);
    assert_eq!(all.len(), 25);
    for (i, d) in all.iter().enumerate() {
        assert_eq!(*d, p.direction(i, &basis).unwrap());
    }
}

#[test]
fn single_point_sphere_has_only_the_apex() {
    let basis = Basis::default();
    let p = params(1, 1.4, 0.618034);
    assert_eq!(p.directions(&basis), vec![Vec3::Z * 75.0]);
    assert_eq!(
        p.direction(1, &basis),
        Err(DistributionError::OutOfRangeIndex { index: 1, count: 1 })
    );
}

#[test]
fn invalid_sphere_parameters_are_rejected() {
    let cases = [
        (SphereConfig { point_count: 0, ..Default::default() }, "point_count"),
        (SphereConfig { distance_bias: -0.1, ..Default::default() }, "distance_bias"),
        (SphereConfig { view_angle_degrees: 180.5, ..Default::default() }, "view_angle_degrees"),
        (SphereConfig { view_angle_degrees: -1.0, ..Default::default() }, "view_angle_degrees"),
        (SphereConfig { view_radius: 0.0, ..Default::default() }, "view_radius"),
        (SphereConfig { turn_fraction: f32::INFINITY, ..Default::default() }, "turn_fraction"),
    ];
    for (c, field) in cases {
        match SphereParams::new(&c) {
            Err(DistributionError::InvalidParameter { name, .. }) => assert_eq!(name, field),
            other => panic!("expected {field} to be rejected, got {other:?}"),
        }
    }
}

#[test]
fn degenerate_bases_are_rejected() {
    assert!(Basis::new(Vec3::ZERO, Vec3::X).is_err());
    assert!(Basis::new(Vec3::Z, Vec3::ZERO).is_err());
    assert!(Basis::new(Vec3::Z, Vec3::Z * 3.0).is_err());
    let b = Basis::new(Vec3::Z * 5.0, Vec3::X * 2.0).unwrap();
    assert_eq!((b.forward(), b.right()), (Vec3::Z, Vec3::X));
}

#[test]
fn tilted_right_is_made_perpendicular_to_forward() {
    let b = Basis::new(Vec3::Z, Vec3::new(1.0, 0.0, 1.0)).unwrap();
    assert_eq!(b.forward(), Vec3::Z);
    assert!(b.right().abs_diff_eq(Vec3::X, 1e-6), "{}", b.right());
    assert!(b.forward().dot(b.right()).abs() < 1e-6);

    let p = SphereParams::new(&SphereConfig {
        point_count: 11,
        distance_bias: 0.0,
        ..SphereConfig::default()
    })
    .unwrap();
    let last = p.direction(10, &b).unwrap();
    let angle = b.forward().angle_between(last).to_degrees();
    assert!((angle - 180.0).abs() < 0.1, "sweep stopped at {angle}");
}

#[test]
fn view_cone_test_uses_angle_to_forward() {
    let basis = Basis::default();
    assert!(within_view(Vec3::Z, &basis, 0.0));
    assert!(within_view(Vec3::new(1.0, 0.0, 1.0), &basis, 46.0));
    assert!(!within_view(Vec3::new(1.0, 0.0, 1.0), &basis, 44.0));
    assert!(within_view(-Vec3::Z, &basis, 180.0));
}

fn cone_config(point_count: usize, view_angle_degrees: f32) -> SphereConfig {
    // zero bias spaces points 180 / (count - 1) degrees apart from the apex
    SphereConfig {
        point_count,
        distance_bias: 0.0,
        view_angle_degrees,
        turn_fraction: 0.618034,
        ..SphereConfig::default()
    }
}

#[test]
fn sampler_filters_once_at_construction() {
    let basis = Basis::default();
    let mut sampler = SphereSampler::new(SphereParams::new(&cone_config(11, 100.0)).unwrap(), basis);
    assert_eq!(sampler.retained(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(sampler.vectors().len(), 6);

    // widening the cone later does not bring culled points back
    sampler.set_params(SphereParams::new(&cone_config(11, 180.0)).unwrap());
    assert_eq!(sampler.vectors().len(), 6);

    sampler.refilter();
    assert_eq!(sampler.vectors().len(), 11);
}

#[test]
fn sampler_recomputes_vectors_with_current_params() {
    let basis = Basis::default();
    let mut sampler = SphereSampler::new(params(12, 1.4, 0.1), basis);
    let before = sampler.vectors();
    sampler.set_params(params(12, 1.4, 0.2));
    let after = sampler.vectors();
    assert_eq!(before[0], after[0]);
    assert!(!before[1].abs_diff_eq(after[1], 1e-3));
    assert_eq!(after, sampler.params().directions(&basis));
}

#[test]
fn sampler_skips_retained_indices_past_a_shrunk_count() {
    let basis = Basis::default();
    let mut sampler = SphereSampler::new(SphereParams::new(&cone_config(11, 180.0)).unwrap(), basis);
    assert_eq!(sampler.retained().len(), 11);
    sampler.set_params(SphereParams::new(&cone_config(4, 180.0)).unwrap());
    assert_eq!(sampler.vectors().len(), 4);
}

#[test]
fn sampler_keeps_its_retained_set_when_the_frame_turns() {
    let mut sampler = SphereSampler::new(
        SphereParams::new(&cone_config(11, 100.0)).unwrap(),
        Basis::default(),
    );
    let turned = Basis::new(Vec3::Y, Vec3::X).unwrap();
    sampler.set_basis(turned);
    assert_eq!(sampler.basis(), &turned);
    assert_eq!(sampler.retained(), &[0, 1, 2, 3, 4, 5]);

    let vectors = sampler.vectors();
    assert!(vectors[0].abs_diff_eq(Vec3::Y * 75.0, 1e-4), "{}", vectors[0]);
    for v in &vectors {
        assert!(turned.forward().angle_between(*v).to_degrees() <= 100.0);
    }
}

#[test]
fn point_scale_is_a_tenth_of_view_radius() {
    assert!((point_scale(75.0) - 7.5).abs() < 1e-6);
}
