//! tests/api/engine.rs
use crate::helpers::{init_test_tracing, owned, sample_inputs, sequential_counts};
use claims::assert_ok;
use wordcount::engine::{count_words, count_words_partitioned, count_words_streaming};

#[tokio::test]
async fn both_strategies_match_the_sequential_reference() {
    init_test_tracing();
    let inputs = sample_inputs();
    let expected = sequential_counts(&inputs);

    for worker_count in 1..=8 {
        let streamed = assert_ok!(count_words_streaming(worker_count, inputs.clone()).await);
        assert_eq!(streamed, expected, "streaming, {worker_count} workers");

        let partitioned = assert_ok!(count_words_partitioned(worker_count, inputs.clone()).await);
        assert_eq!(partitioned, expected, "partitioned, {worker_count} workers");
    }
}

#[tokio::test]
async fn empty_input_collections_yield_empty_maps() {
    init_test_tracing();
    assert!(count_words("").is_empty());
    assert!(assert_ok!(count_words_streaming(4, vec![]).await).is_empty());
    assert!(assert_ok!(count_words_partitioned(4, vec![]).await).is_empty());
}

#[tokio::test]
async fn more_workers_than_inputs_changes_nothing() {
    init_test_tracing();
    let inputs = owned(&["hello world", "hello hello"]);
    let expected = sequential_counts(&inputs);

    assert_eq!(
        assert_ok!(count_words_streaming(16, inputs.clone()).await),
        expected
    );
    assert_eq!(
        assert_ok!(count_words_partitioned(16, inputs).await),
        expected
    );
}

#[tokio::test]
async fn five_inputs_across_three_workers() {
    init_test_tracing();
    let inputs = owned(&["a", "b", "c", "d", "e"]);
    let counts = assert_ok!(count_words_partitioned(3, inputs).await);

    assert_eq!(counts, count_words("a b c d e"));
    for word in ["a", "b", "c", "d", "e"] {
        assert_eq!(counts[word], 1);
    }
}

#[tokio::test]
async fn duplicate_inputs_sum_across_workers() {
    init_test_tracing();
    let sentence = "jabberwocky wabberjocky jabberwocky";
    let inputs = owned(&[sentence; 5]);

    let counts = assert_ok!(count_words_streaming(3, inputs).await);
    assert_eq!(counts["jabberwocky"], 10);
    assert_eq!(counts["wabberjocky"], 5);
}

#[tokio::test]
async fn zero_workers_are_clamped_to_one() {
    init_test_tracing();
    let inputs = owned(&["hello world", "hello"]);
    let expected = sequential_counts(&inputs);

    assert_eq!(
        assert_ok!(count_words_streaming(0, inputs.clone()).await),
        expected
    );
    assert_eq!(
        assert_ok!(count_words_partitioned(0, inputs).await),
        expected
    );
}
