//! Integration tests covering the host-facing workflow: build series, pick
//! a function by type, execute, label the result.

#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

mod common;

use std::sync::Arc;
use std::thread;

use common::{indexed, series};
use series_functions::prelude::*;

// ==================== Concrete Scenarios ====================

#[test]
fn min_of_dip_is_three() {
    let s = series(vec![0, 1, 2], vec![5.0, 3.0, 5.0]);
    assert_eq!(Min::new().execute(&[&s]).unwrap(), 3.0);
}

#[test]
fn min_of_empty_series_is_nan() {
    let s = TimeSeries::empty("test.metric");
    assert!(Min::new().execute(&[&s]).unwrap().is_nan());
}

#[test]
fn min_without_series_is_argument_error() {
    let result = Min::new().execute(&[]);
    assert_eq!(
        result,
        Err(Error::InsufficientSeries {
            function: "MIN",
            required: 1,
            actual: 0,
        })
    );
}

#[test]
fn vectorization_of_collinear_points_keeps_endpoints() {
    let s = series(vec![0, 1, 2, 3], vec![0.0, 1.0, 2.0, 3.0]);
    let out = Vectorization::new().tolerance(0.01).transform(&s).unwrap();
    assert_eq!(out.timestamps(), &[0, 3]);
    assert_eq!(out.values(), &[0.0, 3.0]);
}

// ==================== Host Workflow ====================

#[test]
fn aggregation_after_vectorization_is_unchanged_for_lines() {
    // a straight line loses its inner points but keeps min and max
    let s = indexed((0..500).map(|x| f64::from(x) * 0.5).collect());
    let reduced = Vectorization::new().transform(&s).unwrap();
    assert_eq!(reduced.len(), 2);

    for function in [
        AnalysisFunction::from(Min::new()),
        AnalysisFunction::from(Max::new()),
        AnalysisFunction::from(First::new()),
        AnalysisFunction::from(Last::new()),
        AnalysisFunction::from(Range::new()),
    ] {
        assert_eq!(
            function.execute(&[&s]).unwrap(),
            function.execute(&[&reduced]).unwrap(),
            "{} differs after vectorization",
            function.kind()
        );
    }
}

#[test]
fn results_labelled_by_kind() {
    let s = indexed(vec![2.0, 8.0, 4.0]);
    let labelled: Vec<(String, f64)> = AnalysisType::ALL
        .iter()
        .filter_map(|&kind| AnalysisFunction::with_defaults(kind))
        .map(|f| (f.kind().to_string(), f.execute(&[&s]).unwrap()))
        .collect();

    assert_eq!(labelled.len(), AnalysisType::ALL.len() - 1);
    assert!(labelled.contains(&("MIN".to_string(), 2.0)));
    assert!(labelled.contains(&("MAX".to_string(), 8.0)));
    assert!(labelled.contains(&("SUM".to_string(), 14.0)));
    assert!(labelled.contains(&("SDIFF".to_string(), 2.0)));
}

#[test]
fn subquery_round_trip() {
    let dtw = AnalysisFunction::from(Dtw::new("metric:test.metric AND host:baseline"));
    assert!(dtw.needs_subquery());

    // host side: run the subquery, then execute with both series
    let query = dtw.subquery().expect("subquery must be present");
    assert!(query.contains("baseline"));
    let observed = indexed(vec![1.0, 2.0, 3.0, 2.0, 1.0]);
    let baseline = indexed(vec![1.0, 2.0, 3.0, 3.0, 2.0, 1.0]);

    assert_eq!(dtw.execute(&[&observed, &baseline]).unwrap(), 0.0);
    assert!(matches!(
        dtw.execute(&[&observed]),
        Err(Error::InsufficientSeries { required: 2, .. })
    ));
}

#[test]
fn aggregations_never_need_subqueries() {
    for kind in AnalysisType::ALL {
        if let Some(f) = AnalysisFunction::with_defaults(kind) {
            assert!(!f.needs_subquery());
            assert!(f.subquery().is_none());
        }
    }
}

#[test]
fn transformation_chain_keeps_metadata() {
    let s = series(
        (0..20).map(|t| t * 1000).collect(),
        (0..20).map(|x| f64::from(x * x)).collect(),
    );

    let chain: Vec<TransformationFunction> = vec![
        Timeshift::new(-1000).into(),
        Scale::new(2.0).into(),
        Derivative::new().into(),
        MovingAverage::new().window(3).into(),
        Vectorization::new().into(),
    ];

    let mut current = s.clone();
    for step in &chain {
        let next = step.transform(&current).unwrap();
        assert_eq!(next.metric(), s.metric(), "{} changed the metric", step.kind());
        assert_eq!(next.attributes(), s.attributes());
        assert!(next.len() <= current.len());
        current = next;
    }
    assert!(!current.is_empty());
}

#[test]
fn transformations_do_not_touch_input() {
    let s = indexed(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
    let snapshot = s.clone();
    for f in [
        TransformationFunction::from(Vectorization::new()),
        TransformationFunction::from(Divide::new(3.0)),
        TransformationFunction::from(NonNegativeDerivative::new()),
    ] {
        f.transform(&s).unwrap();
    }
    assert_eq!(s, snapshot);
}

// ==================== Concurrency ====================

#[test]
fn shared_function_across_threads() {
    let function = Arc::new(TransformationFunction::from(Vectorization::new()));
    let handles: Vec<_> = (0..8)
        .map(|k| {
            let function = Arc::clone(&function);
            thread::spawn(move || {
                let s = indexed((0..1000).map(|x| f64::from(x) * f64::from(k)).collect());
                function.transform(&s).unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn batch_matches_single_calls() {
    let batch: Vec<TimeSeries> = (1..=20)
        .map(|k| indexed((0..50).map(|x| ((x * k) % 7) as f64).collect()))
        .collect();

    let processor = BatchProcessor::new().min_parallel_threshold(4);
    let via_batch = processor.aggregate(&Dev::new(), &batch).unwrap();
    let direct: Vec<f64> = batch
        .iter()
        .map(|s| Dev::new().execute(&[s]).unwrap())
        .collect();
    assert_eq!(via_batch, direct);
}

// ==================== Serialization ====================

#[test]
fn series_serializes_with_attributes() {
    let s = series(vec![1, 2], vec![0.5, 1.5]);
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["metric"], "test.metric");
    assert_eq!(json["attributes"]["host"], "test-host");
    assert_eq!(json["attributes"]["shard"], 3);
    assert_eq!(json["timestamps"], serde_json::json!([1, 2]));
    assert_eq!(json["values"], serde_json::json!([0.5, 1.5]));
}

#[test]
fn type_tags_round_trip_through_json() {
    let kinds: Vec<AnalysisType> = serde_json::from_str(r#"["MIN", "P", "SDIFF", "DTW"]"#).unwrap();
    assert_eq!(
        kinds,
        vec![
            AnalysisType::Min,
            AnalysisType::Percentile,
            AnalysisType::SignedDiff,
            AnalysisType::Dtw
        ]
    );
    let tag: TransformationType = serde_json::from_str(r#""NNDERIVATIVE""#).unwrap();
    assert_eq!(tag, TransformationType::NonNegativeDerivative);
}
