//! End-to-end checks of the stress engine through the public API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use stress_core::{
    compute_properties, compute_stress_profile, cross_section_distribution, load_job, save_job,
    stress_at, AnalysisJob, ForceDiagram, ForceSample, PointStress, SectionDescriptor, SectionKind,
    StressError, DEFAULT_POINT_COUNT,
};

fn rectangle_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

fn stations(xs: &[f64]) -> ForceDiagram {
    ForceDiagram::new(
        xs.iter()
            .enumerate()
            .map(|(i, &x)| ForceSample::new(x, 100.0 * (i as f64 + 1.0), -10.0 * (i as f64 + 1.0)))
            .collect(),
    )
    .unwrap()
}

#[test]
fn rectangular_beam_hand_calculation() {
    let section = SectionDescriptor::rectangular(0.2, 0.4);
    let props = compute_properties(&section, rectangle_inertia(0.2, 0.4));
    let diagram = ForceDiagram::new(vec![ForceSample::new(0.0, 1000.0, 500.0)]).unwrap();

    let profile = compute_stress_profile(&props, &diagram).unwrap();
    assert_eq!(profile.len(), 1);
    assert_relative_eq!(profile[0].bending_stress, 93_750.0, max_relative = 1e-9);
    assert_relative_eq!(profile[0].shear_stress, 18_750.0, max_relative = 1e-9);

    let point = stress_at(&props, &diagram, 0.0).unwrap();
    assert_eq!(point.bending_stress, profile[0].bending_stress);
    assert_eq!(point.shear_stress, profile[0].shear_stress);
    assert_eq!(point.moment, 500.0);
    assert_eq!(point.shear_force, 1000.0);
}

#[test]
fn section_formulas_for_rectangle_and_circle() {
    let rect = compute_properties(&SectionDescriptor::rectangular(0.25, 0.6), 1.0);
    assert_relative_eq!(rect.area, 0.25 * 0.6, max_relative = 1e-12);
    assert_relative_eq!(rect.first_moment_of_area, 0.25 * 0.6 * 0.6 / 8.0, max_relative = 1e-12);
    assert_relative_eq!(rect.max_distance_from_centroid, 0.3, max_relative = 1e-12);

    let circle = compute_properties(&SectionDescriptor::circular(0.5), 1.0);
    let r: f64 = 0.25;
    assert_relative_eq!(circle.area, std::f64::consts::PI * r * r, max_relative = 1e-12);
    assert_relative_eq!(circle.first_moment_of_area, 2.0 * r.powi(3) / 3.0, max_relative = 1e-12);
}

#[test]
fn t_beam_centroid_stays_inside_the_section() {
    let dims = [0.05, 0.1, 0.3, 0.7, 1.5];
    for &bf in &dims {
        for &tf in &dims {
            for &hw in &dims {
                for &tw in &dims {
                    let props = compute_properties(&SectionDescriptor::t_beam(bf, tf, hw, tw), 1.0);
                    assert!(props.centroid_height > 0.0);
                    assert!(props.centroid_height < hw + tf);
                }
            }
        }
    }
}

#[test]
fn doubling_moment_doubles_bending_stress() {
    let props = compute_properties(&SectionDescriptor::i_beam(0.2, 0.02, 0.4, 0.01), 2.0e-4);
    let base = ForceDiagram::new(vec![
        ForceSample::new(0.0, 10.0, 120.0),
        ForceSample::new(1.0, -20.0, -340.0),
        ForceSample::new(2.0, 30.0, 0.0),
    ])
    .unwrap();
    let doubled = ForceDiagram::new(
        base.samples()
            .iter()
            .map(|s| ForceSample::new(s.x, s.shear, 2.0 * s.moment))
            .collect(),
    )
    .unwrap();

    let a = compute_stress_profile(&props, &base).unwrap();
    let b = compute_stress_profile(&props, &doubled).unwrap();
    for (single, double) in a.iter().zip(&b) {
        assert_relative_eq!(double.bending_stress, 2.0 * single.bending_stress, max_relative = 1e-12);
        assert_eq!(double.shear_stress, single.shear_stress);
        assert!(single.bending_stress >= 0.0 && single.shear_stress >= 0.0);
    }
}

#[test]
fn transverse_bending_matches_profile_for_every_shape() {
    let sections = [
        SectionDescriptor::rectangular(0.2, 0.4),
        SectionDescriptor::circular(0.3),
        SectionDescriptor::i_beam(0.2, 0.02, 0.4, 0.01),
        SectionDescriptor::t_beam(0.3, 0.05, 0.4, 0.02),
        SectionDescriptor::Unspecified,
    ];
    let diagram = stations(&[0.0, 1.0, 2.0, 3.0]);

    for section in &sections {
        let props = compute_properties(section, 5.0e-4);
        let profile = compute_stress_profile(&props, &diagram).unwrap();

        for (index, sample) in profile.iter().enumerate() {
            let points =
                cross_section_distribution(&props, &diagram, section.kind(), sample.x, DEFAULT_POINT_COUNT)
                    .unwrap();
            let axis = points[DEFAULT_POINT_COUNT / 2];
            assert_eq!(axis.y, 0.0, "section {:?} station {}", section.kind(), index);
            assert_eq!(axis.bending_stress, 0.0);

            let top = points[DEFAULT_POINT_COUNT];
            let bottom = points[0];
            assert_eq!(top.y, props.max_distance_from_centroid);
            assert_eq!(bottom.y, -props.max_distance_from_centroid);
            assert_relative_eq!(top.bending_stress, sample.bending_stress, max_relative = 1e-12);
            assert_relative_eq!(bottom.bending_stress, sample.bending_stress, max_relative = 1e-12);
        }
    }
}

#[test]
fn rectangular_shear_is_symmetric_with_peak_on_axis() {
    let props = compute_properties(&SectionDescriptor::rectangular(0.3, 0.5), 3.0e-3);
    let diagram = ForceDiagram::new(vec![ForceSample::new(0.0, -2400.0, 0.0)]).unwrap();
    let points = cross_section_distribution(&props, &diagram, SectionKind::Rectangular, 0.0, 40).unwrap();

    let peak_index = points
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.shear_stress.total_cmp(&b.1.shear_stress))
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(peak_index, 20);
    assert_relative_eq!(points[20].shear_stress, 1.5 * 2400.0 / props.area, max_relative = 1e-12);

    for i in 0..=40 {
        assert_abs_diff_eq!(points[i].shear_stress, points[40 - i].shear_stress, epsilon = 1e-9);
    }
}

#[test]
fn point_query_uses_ceiling_sample() {
    let props = compute_properties(&SectionDescriptor::rectangular(0.2, 0.4), 1.0e-3);
    let diagram = stations(&[0.0, 1.0, 2.0, 3.0]);

    let inside = stress_at(&props, &diagram, 1.5).unwrap();
    assert_eq!(inside.shear_force, 300.0);
    assert_eq!(inside.moment, 30.0);

    let beyond = stress_at(&props, &diagram, 10.0).unwrap();
    assert_eq!(beyond.shear_force, 400.0);
    assert_eq!(beyond.moment, 40.0);

    let before = stress_at(&props, &diagram, -5.0).unwrap();
    assert_eq!(before.shear_force, 100.0);
}

#[test]
fn empty_diagram_gives_empty_and_zeroed_results() {
    let props = compute_properties(&SectionDescriptor::rectangular(0.2, 0.4), 0.0);
    let empty = ForceDiagram::empty();

    assert!(compute_stress_profile(&props, &empty).unwrap().is_empty());
    assert_eq!(stress_at(&props, &empty, 2.0).unwrap(), PointStress::default());
}

#[test]
fn zero_inertia_is_degenerate_not_nan() {
    let props = compute_properties(&SectionDescriptor::rectangular(0.2, 0.4), 0.0);
    let diagram = stations(&[0.0, 1.0]);

    let err = compute_stress_profile(&props, &diagram).unwrap_err();
    assert_eq!(err, StressError::degenerate_section("moment_of_inertia", 0.0));
    assert!(stress_at(&props, &diagram, 0.5).unwrap_err().is_degenerate());
}

#[test]
fn negative_dimension_degenerates_downstream() {
    // Zero falls back to the default width, a negative width is kept
    let zero = compute_properties(&SectionDescriptor::rectangular(0.0, 0.4), 1.0e-3);
    assert_relative_eq!(zero.thickness, 0.3, max_relative = 1e-12);

    let negative = compute_properties(&SectionDescriptor::rectangular(-0.2, 0.4), 1.0e-3);
    let err = compute_stress_profile(&negative, &stations(&[0.0])).unwrap_err();
    assert_eq!(err.error_code(), "DEGENERATE_SECTION");
}

#[test]
fn negative_height_and_flange_are_degenerate() {
    let diagram = ForceDiagram::new(vec![ForceSample::new(0.0, 1000.0, 500.0)]).unwrap();

    let tall = compute_properties(&SectionDescriptor::rectangular(0.2, -0.4), 1.0e-3);
    let err = compute_stress_profile(&tall, &diagram).unwrap_err();
    assert_eq!(err, StressError::degenerate_section("max_distance_from_centroid", -0.2));

    let flange = compute_properties(&SectionDescriptor::i_beam(0.2, -0.02, 0.4, 0.01), 1.0e-3);
    let err = stress_at(&flange, &diagram, 0.0).unwrap_err();
    assert_eq!(err.error_code(), "DEGENERATE_SECTION");
}

#[test]
fn negative_dimensions_never_give_negative_stress() {
    let sections = [
        SectionDescriptor::rectangular(-0.2, 0.4),
        SectionDescriptor::rectangular(0.2, -0.4),
        SectionDescriptor::circular(-0.3),
        SectionDescriptor::i_beam(-0.2, 0.02, 0.4, 0.01),
        SectionDescriptor::i_beam(0.2, -0.02, 0.4, 0.01),
        SectionDescriptor::i_beam(0.2, 0.02, -0.4, 0.01),
        SectionDescriptor::i_beam(0.2, 0.02, 0.4, -0.01),
        SectionDescriptor::t_beam(-0.3, 0.05, 0.4, 0.02),
        SectionDescriptor::t_beam(0.3, -0.05, 0.4, 0.02),
        SectionDescriptor::t_beam(0.3, 0.05, -0.4, 0.02),
        SectionDescriptor::t_beam(0.3, 0.05, 0.4, -0.02),
    ];
    let diagram = stations(&[0.0, 1.0, 2.0]);

    for section in &sections {
        let props = compute_properties(section, 1.0e-3);

        match compute_stress_profile(&props, &diagram) {
            Ok(profile) => assert!(
                profile.iter().all(|s| s.bending_stress >= 0.0 && s.shear_stress >= 0.0),
                "negative profile stress for {:?}",
                section
            ),
            Err(err) => assert_eq!(err.error_code(), "DEGENERATE_SECTION", "{:?}", section),
        }

        match stress_at(&props, &diagram, 1.0) {
            Ok(point) => assert!(point.bending_stress >= 0.0 && point.shear_stress >= 0.0, "{:?}", section),
            Err(err) => assert_eq!(err.error_code(), "DEGENERATE_SECTION", "{:?}", section),
        }

        match cross_section_distribution(&props, &diagram, section.kind(), 1.0, 10) {
            Ok(points) => assert!(
                points.iter().all(|p| p.bending_stress >= 0.0 && p.shear_stress >= 0.0),
                "{:?}",
                section
            ),
            Err(err) => assert_eq!(err.error_code(), "DEGENERATE_SECTION", "{:?}", section),
        }
    }
}

#[test]
fn job_file_round_trip_reproduces_report() {
    let path = std::env::temp_dir().join("stress_core_integration_job.json");
    let job = AnalysisJob::new(
        "IT-1",
        SectionDescriptor::rectangular(0.2, 0.4),
        rectangle_inertia(0.2, 0.4),
        stations(&[0.0, 1.0, 2.0]),
    );

    save_job(&job, &path).unwrap();
    let loaded = load_job(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let before = job.run().unwrap();
    let after = loaded.run().unwrap();
    assert_eq!(before.profile, after.profile);
    assert_eq!(before.distribution, after.distribution);
    assert_eq!(before.analysis_position, after.analysis_position);
}

#[test]
fn section_json_is_lenient() {
    let json = r#"{ "type": "rectangular", "width": "0.2", "height": null }"#;
    let section: SectionDescriptor = serde_json::from_str(json).unwrap();
    let props = compute_properties(&section, 1.0);
    assert_relative_eq!(props.thickness, 0.2, max_relative = 1e-12);
    assert_relative_eq!(props.max_distance_from_centroid, 0.25, max_relative = 1e-12);
}
