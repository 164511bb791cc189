use super::*;

fn product(name: &str, price: f64, old_price: Option<f64>) -> RawProduct {
    RawProduct {
        name: Some(name.to_owned()),
        price: Some(price),
        old_price,
        ..RawProduct::default()
    }
}

fn feed(supermarket: &str, products: Vec<RawProduct>) -> StoreFeed {
    StoreFeed {
        supermarket: supermarket.to_owned(),
        products,
    }
}

// -----------------------------------------------------------------------
// normalize_feeds
// -----------------------------------------------------------------------

#[test]
fn single_half_price_product() {
    let offers = normalize_feeds(vec![feed("A", vec![product("X", 10.0, Some(20.0))])]).unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].name(), "X");
    assert_eq!(offers[0].supermarket(), "A");
    assert_eq!(offers[0].discount(), 50);
}

#[test]
fn preserves_store_then_product_order() {
    let offers = normalize_feeds(vec![
        feed(
            "Lidl",
            vec![product("b", 1.0, None), product("a", 1.0, Some(5.0))],
        ),
        feed("Billa", vec![product("c", 1.0, Some(2.0))]),
    ])
    .unwrap();
    let keys: Vec<(&str, &str)> = offers
        .iter()
        .map(|o| (o.supermarket(), o.name()))
        .collect();
    assert_eq!(keys, vec![("Lidl", "b"), ("Lidl", "a"), ("Billa", "c")]);
}

#[test]
fn discount_zero_without_old_price_or_price_increase() {
    let offers = normalize_feeds(vec![feed(
        "A",
        vec![product("none", 5.0, None), product("higher", 5.0, Some(4.0))],
    )])
    .unwrap();
    assert!(offers.iter().all(|o| o.discount() == 0));
}

#[test]
fn copies_descriptive_fields() {
    let raw = RawProduct {
        name: Some("Butter".to_owned()),
        quantity: Some("250 g".to_owned()),
        price: Some(3.0),
        old_price: Some(4.0),
        category: Some("Dairy".to_owned()),
        pic_url: Some("https://img.example/b.png".to_owned()),
        valid_from: Some("2026-03-01".to_owned()),
        valid_until: Some("2026-03-07".to_owned()),
    };
    let offer = normalize_feeds(vec![feed("Billa", vec![raw])]).unwrap().remove(0);
    assert_eq!(offer.quantity(), Some("250 g"));
    assert_eq!(offer.category(), Some("Dairy"));
    assert_eq!(offer.pic_url(), Some("https://img.example/b.png"));
    assert_eq!(offer.valid_from(), Some("2026-03-01"));
    assert_eq!(offer.valid_until(), Some("2026-03-07"));
    assert_eq!(offer.old_price(), Some(4.0));
    assert_eq!(offer.discount(), 25);
}

#[test]
fn empty_feeds_yield_no_offers() {
    assert!(normalize_feeds(Vec::new()).unwrap().is_empty());
    assert!(normalize_feeds(vec![feed("A", Vec::new())]).unwrap().is_empty());
}

#[test]
fn duplicates_get_increasing_occurrence() {
    let offers = normalize_feeds(vec![
        feed(
            "Lidl",
            vec![
                product("Milk", 1.0, None),
                product("Milk", 1.2, None),
                product("Eggs", 2.0, None),
            ],
        ),
        feed("Billa", vec![product("Milk", 1.1, None)]),
    ])
    .unwrap();
    let occurrences: Vec<u32> = offers.iter().map(Offer::occurrence).collect();
    assert_eq!(occurrences, vec![0, 1, 0, 0]);
}

// -----------------------------------------------------------------------
// malformed input
// -----------------------------------------------------------------------

#[test]
fn missing_name_rejects_batch() {
    let nameless = RawProduct {
        price: Some(1.0),
        ..RawProduct::default()
    };
    let err = normalize_feeds(vec![feed(
        "Lidl",
        vec![product("ok", 1.0, None), nameless],
    )])
    .unwrap_err();
    assert!(
        matches!(err, FeedError::Normalization { ref supermarket, index: 1, .. } if supermarket == "Lidl"),
        "expected Normalization at Lidl #1, got: {err:?}"
    );
}

#[test]
fn blank_name_rejects_batch() {
    let err = normalize_feeds(vec![feed("Lidl", vec![product("  ", 1.0, None)])]).unwrap_err();
    assert!(matches!(err, FeedError::Normalization { .. }));
}

#[test]
fn missing_price_rejects_batch() {
    let priceless = RawProduct {
        name: Some("Bread".to_owned()),
        ..RawProduct::default()
    };
    let err = normalize_feeds(vec![feed("Billa", vec![priceless])]).unwrap_err();
    assert!(
        matches!(err, FeedError::Normalization { ref reason, .. } if reason.contains("no price")),
        "expected missing price, got: {err:?}"
    );
}

#[test]
fn negative_price_rejects_batch() {
    let err = normalize_feeds(vec![feed("A", vec![product("X", -1.0, None)])]).unwrap_err();
    assert!(matches!(err, FeedError::Normalization { .. }));
}

#[test]
fn negative_old_price_rejects_batch() {
    let err =
        normalize_feeds(vec![feed("A", vec![product("X", 1.0, Some(-2.0))])]).unwrap_err();
    assert!(matches!(err, FeedError::Normalization { .. }));
}

#[test]
fn non_finite_price_rejects_batch() {
    let err = normalize_feeds(vec![feed("A", vec![product("X", f64::NAN, None)])]).unwrap_err();
    assert!(matches!(err, FeedError::Normalization { .. }));
}

#[test]
fn empty_supermarket_rejects_batch() {
    let err = normalize_feeds(vec![feed("", vec![product("X", 1.0, None)])]).unwrap_err();
    assert!(matches!(err, FeedError::Normalization { .. }));
}

#[test]
fn error_in_second_store_discards_first_store() {
    let result = normalize_feeds(vec![
        feed("Lidl", vec![product("fine", 1.0, None)]),
        feed("Billa", vec![product("bad", -5.0, None)]),
    ]);
    assert!(result.is_err());
}
