use book_etl::rules::{
    CaseSensitivity, ExcludeAuthorContainsRule, ExcludePublishedOnWeekdayRule, RoundPriceUpRule,
};
use book_etl::{Book, BookProcessor, CancellationToken, CollectionValidator, EtlError, RuleEngine};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn book(id: &str, author: &str, price: Decimal, ymd: (i32, u32, u32)) -> Book {
    Book::new(
        id,
        author,
        format!("Book {}", id),
        price,
        NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
    )
}

#[test]
fn test_sub_cent_price_never_reaches_rules() {
    let books = vec![book("bk101", "Test Author", Decimal::new(19999, 3), (2023, 1, 16))];

    let valid = CollectionValidator::new().validate_and_filter(&books);
    let result = RuleEngine::new(vec![], vec![Box::new(RoundPriceUpRule)])
        .process(valid, &CancellationToken::new())
        .unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_duplicate_ids_leave_only_unique_book() {
    let books = vec![
        book("bk101", "Author A", Decimal::ONE, (2023, 1, 16)),
        book("bk101", "Author B", Decimal::ONE, (2023, 1, 17)),
        book("bk102", "Author C", Decimal::ONE, (2023, 1, 18)),
    ];

    let valid = CollectionValidator::new().validate_and_filter(&books);

    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].id, "bk102");
}

#[test]
fn test_author_and_saturday_filters_with_rounding() {
    let engine = RuleEngine::new(
        vec![
            Box::new(ExcludeAuthorContainsRule::new(["Peter"], CaseSensitivity::default())),
            Box::new(ExcludePublishedOnWeekdayRule::saturday()),
        ],
        vec![Box::new(RoundPriceUpRule)],
    );
    let books = vec![
        book("bk101", "Peter Smith", Decimal::new(1050, 2), (2023, 1, 16)),
        book("bk102", "Jane Doe", Decimal::new(1201, 2), (2023, 5, 13)),
        book("bk103", "John Roe", Decimal::new(1901, 2), (2023, 1, 17)),
        book("bk104", "Ann Lee", Decimal::new(500, 2), (2023, 1, 18)),
    ];

    let report = engine
        .process_with_report(books, &CancellationToken::new())
        .unwrap();

    let survivors: Vec<(&str, Decimal)> = report
        .records
        .iter()
        .map(|b| (b.id.as_str(), b.price))
        .collect();
    assert_eq!(
        survivors,
        vec![("bk103", Decimal::from(20)), ("bk104", Decimal::from(5))]
    );

    assert_eq!(report.excluded_count(), 2);
    assert!(report.exclusions[0].reason.contains("contains 'Peter'"));
    assert!(report.exclusions[1].reason.contains("2023-05-13"));
}

#[test]
fn test_pre_cancelled_token_produces_no_output() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let books = vec![book("bk101", "Test Author", Decimal::ONE, (2023, 1, 16))];

    let result = RuleEngine::default().process(books, &cancel);

    assert!(matches!(result, Err(EtlError::Cancelled)));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(RuleEngine::new(
        vec![Box::new(ExcludePublishedOnWeekdayRule::saturday())],
        vec![Box::new(RoundPriceUpRule)],
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let books = vec![book(&format!("bk{}", i), "Author", Decimal::new(101, 2), (2023, 1, 16))];
                engine.process(books, &CancellationToken::new()).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result[0].price, Decimal::from(2));
    }
}

#[test]
fn test_engine_runs_as_boxed_processor_stage() {
    let stage: Box<dyn BookProcessor> = Box::new(RuleEngine::new(
        vec![Box::new(ExcludePublishedOnWeekdayRule::saturday())],
        vec![Box::new(RoundPriceUpRule)],
    ));
    let books = vec![
        book("bk101", "Test Author", Decimal::new(1901, 2), (2023, 5, 13)),
        book("bk102", "Test Author", Decimal::new(1901, 2), (2023, 5, 15)),
    ];

    let result = stage.process(books, &CancellationToken::new()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "bk102");
    assert_eq!(result[0].price, Decimal::from(20));
}
