// Integration tests for Garment Sizer

use garment_sizer::core::{SizeChart, SizingEngine};
use garment_sizer::models::{
    FitPreference, InputError, Measured, SizeLabel, SizingRequest, Variant, Weighting,
};
use garment_sizer::services::{PatternExporter, EXPORT_FILE_NAME};
use std::sync::Arc;

#[test]
fn test_blank_shoulder_width_is_predicted() {
    let engine = SizingEngine::size_only();
    let request = SizingRequest::new(42.0, 38.0).with_shoulder_width("");

    let rec = engine.recommend(&request).unwrap();

    assert_eq!(rec.size, SizeLabel::L);
    assert!(rec.shoulder_width_predicted());
    let m = &rec.measurements;
    assert!((m.shoulder_width.value() - 19.74).abs() < 1e-9);
    assert!((m.sleeve_length.value() - 13.44).abs() < 1e-9);
    assert!((m.body_length.value() - 28.818).abs() < 1e-3);
    assert!((m.neck.value() - 17.64).abs() < 1e-9);
}

#[test]
fn test_explicit_shoulder_width_is_used_for_matching() {
    for engine in [SizingEngine::size_only(), SizingEngine::size_and_pattern()] {
        let rec = engine
            .recommend(&SizingRequest::new(42.0, 38.0).with_shoulder_width("21"))
            .unwrap();

        assert!(!rec.shoulder_width_predicted());
        assert_eq!(rec.measurements.shoulder_width, Measured::Supplied(21.0));
        assert_eq!(rec.measurements.sample().shoulder_width, 21.0);
    }
}

#[test]
fn test_malformed_shoulder_width_produces_only_the_error() {
    for engine in [SizingEngine::size_only(), SizingEngine::size_and_pattern()] {
        let err = engine
            .recommend(&SizingRequest::new(42.0, 38.0).with_shoulder_width("abc"))
            .unwrap_err();

        assert_eq!(err.to_string(), "Please enter a valid number for Shoulder Width.");
        assert!(matches!(err, InputError::InvalidShoulderWidth { .. }));
    }
}

#[test]
fn test_extreme_shoulder_width_text() {
    for engine in [SizingEngine::size_only(), SizingEngine::size_and_pattern()] {
        for text in ["nan", "inf", "-inf"] {
            let err = engine
                .recommend(&SizingRequest::new(42.0, 38.0).with_shoulder_width(text))
                .unwrap_err();
            assert_eq!(err.to_string(), "Please enter a valid number for Shoulder Width.");
        }

        let rec = engine
            .recommend(&SizingRequest::new(42.0, 38.0).with_shoulder_width("1e200"))
            .unwrap();
        assert_eq!(rec.size, SizeLabel::XXL);
        assert_eq!(rec.measurements.shoulder_width, Measured::Supplied(1.0e200));
    }
}

#[test]
fn test_variants_carry_their_weighting() {
    let size_only = SizingEngine::size_only();
    let pattern = SizingEngine::size_and_pattern();

    assert_eq!(size_only.weighting(), Weighting::Standard);
    assert_eq!(pattern.weighting(), Weighting::ChestWeighted);
    assert_eq!(pattern.variant(), Variant::SizeAndPattern);
}

#[test]
fn test_pattern_variant_end_to_end() {
    let engine = SizingEngine::size_and_pattern();
    let rec = engine
        .recommend(&SizingRequest::new(42.0, 38.0).with_fit(FitPreference::WellFit))
        .unwrap();

    assert_eq!(rec.size, SizeLabel::L);
    assert_eq!(rec.distances.len(), 6);

    let pattern = rec.pattern.expect("pattern variant derives a pattern");
    assert_eq!(pattern.chest_width, 21.0);
    assert_eq!(pattern.waist_width, 19.0);
    assert_eq!(pattern.neck_width, rec.measurements.neck.value() / 2.0);
    assert_eq!(pattern.body_length, rec.measurements.body_length.value());
    assert_eq!(pattern.sleeve_length, rec.measurements.sleeve_length.value());
}

#[test]
fn test_oversized_fit_moves_up_a_size() {
    let engine = SizingEngine::size_and_pattern();

    let well = engine
        .recommend(&SizingRequest::new(39.0, 32.5).with_fit(FitPreference::WellFit))
        .unwrap();
    let oversized = engine
        .recommend(&SizingRequest::new(39.0, 32.5).with_fit(FitPreference::Oversized))
        .unwrap();

    assert_eq!(well.size, SizeLabel::M);
    assert_eq!(oversized.size, SizeLabel::L);
    assert!(oversized.size > well.size);
}

#[test]
fn test_alternate_chart_is_injected() {
    let text = r#"
        [[sizes]]
        label = "M"
        chest = { lower = 30, upper = 60 }
        waist = { lower = 20, upper = 55 }
        shoulder_width = 20
        sleeve_length = 10
        body_length = 30
        neck = { lower = 15, upper = 15.5 }
    "#;
    let chart = SizeChart::from_toml_str(text).unwrap();
    let engine = SizingEngine::new(Arc::new(chart), Variant::SizeOnly);

    // A single-row chart always answers with that row
    let rec = engine.recommend(&SizingRequest::new(55.0, 50.0)).unwrap();
    assert_eq!(rec.size, SizeLabel::M);
    assert_eq!(rec.distances.len(), 1);
}

#[test]
fn test_export_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let engine = SizingEngine::size_and_pattern();
    let rec = engine.recommend(&SizingRequest::default()).unwrap();
    let pattern = rec.pattern.unwrap();

    let exporter = PatternExporter::with_default_name(dir.path().join("exports"));
    let path = exporter.write(&pattern).unwrap();

    assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();

    let keys: Vec<&str> = text
        .lines()
        .filter_map(|line| line.trim().strip_prefix('"'))
        .filter_map(|rest| rest.split('"').next())
        .collect();
    assert_eq!(
        keys,
        vec!["Chest Width", "Waist Width", "Body Length", "Neck Width", "Sleeve Length"]
    );
    assert_eq!(object["Chest Width"].as_f64().unwrap(), pattern.chest_width);
    assert_eq!(object["Body Length"].as_f64().unwrap(), pattern.body_length);
    assert!(text.contains("\n    \"Chest Width\""));
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = Arc::new(SizingEngine::size_and_pattern());

    let handles: Vec<_> = (30..=55)
        .map(|chest| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .recommend(&SizingRequest::new(chest as f64, 38.0))
                    .map(|rec| rec.size)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
