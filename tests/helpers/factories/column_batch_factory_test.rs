use crate::test_helpers::factories::ColumnBatchFactory;

#[test]
fn builds_parallel_sequences() {
    let batch = ColumnBatchFactory::new()
        .with("a", 10i64)
        .with_null("b")
        .create();

    assert_eq!(batch.qualifiers, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(batch.values, vec![Some(10), None]);
}

#[test]
fn dangling_qualifier_breaks_lengths() {
    let batch = ColumnBatchFactory::<f64>::new()
        .with("a", 1.5)
        .with_dangling_qualifier("b")
        .create();

    assert_eq!(batch.qualifiers.len(), 2);
    assert_eq!(batch.values.len(), 1);
}
