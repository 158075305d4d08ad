use voyage_classify::Prediction;
use voyage_overlay::{ClassificationOverlayReducer, OverlayCategory};

#[test]
fn test_history_starts_with_none() {
    let reducer = ClassificationOverlayReducer::new();
    assert_eq!(reducer.history().as_slice(), &[OverlayCategory::None]);
    assert_eq!(reducer.history().latest(), OverlayCategory::None);
}

#[test]
fn test_recognized_unknown_recognized() {
    let mut reducer = ClassificationOverlayReducer::new();

    assert_eq!(
        reducer.on_predictions(&[Prediction::new("Sunscreen", 0.9)]),
        Some(OverlayCategory::Sunscreen)
    );
    assert_eq!(reducer.on_predictions(&[Prediction::new("Unknown", 0.8)]), None);
    assert_eq!(
        reducer.on_predictions(&[Prediction::new("Glasses", 0.7)]),
        Some(OverlayCategory::Glasses)
    );

    assert_eq!(
        reducer.history().as_slice(),
        &[
            OverlayCategory::None,
            OverlayCategory::Sunscreen,
            OverlayCategory::Glasses
        ]
    );
}

#[test]
fn test_empty_predictions_change_nothing() {
    let mut reducer = ClassificationOverlayReducer::new();
    assert_eq!(reducer.on_predictions(&[]), None);
    assert_eq!(reducer.history().len(), 1);
}

#[test]
fn test_only_top_prediction_counts() {
    let mut reducer = ClassificationOverlayReducer::new();

    let predictions = [Prediction::new("Mug", 0.6), Prediction::new("Drug", 0.3)];
    assert_eq!(reducer.on_predictions(&predictions), None);

    let predictions = [Prediction::new("Drug", 0.6), Prediction::new("Glasses", 0.3)];
    assert_eq!(reducer.on_predictions(&predictions), Some(OverlayCategory::Drug));
    assert_eq!(reducer.history().len(), 2);
}

#[test]
fn test_confidence_is_not_a_filter() {
    let mut reducer = ClassificationOverlayReducer::new();
    assert_eq!(
        reducer.on_predictions(&[Prediction::new("WaterBottle", 0.01)]),
        Some(OverlayCategory::WaterBottle)
    );
}

#[test]
fn test_repeated_category_appends_again() {
    let mut reducer = ClassificationOverlayReducer::new();
    reducer.on_predictions(&[Prediction::new("Glasses", 0.9)]);
    reducer.on_predictions(&[Prediction::new("Glasses", 0.9)]);

    assert_eq!(reducer.history().len(), 3);
    assert_eq!(reducer.history().latest(), OverlayCategory::Glasses);
}

#[test]
fn test_history_length_never_decreases() {
    let labels = [
        "Sunscreen", "", "glasses", "Drug", "Unknown", "WaterBottle", "Sunscreen ", "Glasses",
    ];
    let mut reducer = ClassificationOverlayReducer::new();
    let mut previous = reducer.history().len();

    for label in labels {
        let appended = reducer.on_predictions(&[Prediction::new(label, 0.5)]);
        let len = reducer.history().len();
        assert!(len >= previous);
        assert_eq!(len - previous, usize::from(appended.is_some()));
        previous = len;
    }
    assert_eq!(previous, 5);
}
