use super::*;

fn sample_model() -> FactorModel {
    FactorModel {
        global_mean: 0.5,
        rating_min: 0.0,
        rating_max: 1.0,
        user_biases: HashMap::from([(8, 0.1)]),
        item_biases: HashMap::from([(100, 0.05)]),
        user_factors: HashMap::from([(8, vec![0.5, 0.5])]),
        item_factors: HashMap::from([(100, vec![0.2, 0.2]), (101, vec![-1.0, -1.0])]),
    }
}

#[test]
fn test_predict_known_pair() {
    let model = sample_model();
    // 0.5 + 0.1 + 0.05 + (0.5*0.2 + 0.5*0.2) = 0.85
    let score = model.predict(8, 100).expect("known pair");
    assert!((score - 0.85).abs() < 1e-6);
}

#[test]
fn test_predict_clamps_to_rating_scale() {
    let model = sample_model();
    // 0.5 + 0.1 + 0.0 + (-1.0) = -0.4, clamped to rating_min
    let score = model.predict(8, 101).expect("known pair");
    assert_eq!(score, 0.0);
}

#[test]
fn test_predict_unknown_user() {
    let model = sample_model();
    assert_eq!(
        model.predict(99, 100),
        Err(PredictionError::UnknownUser { user_id: 99 })
    );
}

#[test]
fn test_predict_unknown_article() {
    let model = sample_model();
    assert_eq!(
        model.predict(8, 999),
        Err(PredictionError::UnknownArticle { article_id: 999 })
    );
}

#[test]
fn test_missing_bias_defaults_to_zero() {
    let mut model = sample_model();
    model.user_biases.clear();
    model.item_biases.clear();

    // 0.5 + 0.2 = 0.7 without biases
    let score = model.predict(8, 100).expect("known pair");
    assert!((score - 0.7).abs() < 1e-6);
}

#[test]
fn test_counts_and_coverage() {
    let model = sample_model();
    assert_eq!(model.user_count(), 1);
    assert_eq!(model.article_count(), 2);
    assert!(model.knows_user(8));
    assert!(!model.knows_user(99));
    assert!(model.knows_article(101));
    assert!(!model.knows_article(999));
}

#[test]
fn test_serde_roundtrip() {
    let model = sample_model();
    let json = serde_json::to_string(&model).expect("serialize");
    let restored: FactorModel = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.user_count(), model.user_count());
    assert_eq!(
        restored.predict(8, 100).unwrap(),
        model.predict(8, 100).unwrap()
    );
}

#[test]
fn test_serde_biases_optional() {
    let json = r#"{
        "global_mean": 0.5,
        "rating_min": 0.0,
        "rating_max": 1.0,
        "user_factors": {"8": [0.5, 0.5]},
        "item_factors": {"100": [0.2, 0.2]}
    }"#;
    let model: FactorModel = serde_json::from_str(json).expect("deserialize");
    let score = model.predict(8, 100).expect("known pair");
    assert!((score - 0.7).abs() < 1e-6);
}

#[test]
fn test_mock_scripted_and_default() {
    let mock = MockAffinityModel::with_default(0.25).with_score(1, 10, 0.9);
    assert_eq!(mock.predict(1, 10).unwrap(), 0.9);
    assert_eq!(mock.predict(1, 11).unwrap(), 0.25);

    let strict = MockAffinityModel::new().with_score(1, 10, 0.9);
    assert!(strict.predict(1, 11).is_err());
}
