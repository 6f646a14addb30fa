use rust_decimal::Decimal;
use tsena_back::models::{CreateProductRequest, ProductQuery, UpdateProductRequest};

#[test]
fn deserialize_create_product_request() {
    let body = r#"{
        "title": "Panier en raphia tressé",
        "description": "Fait main à Antananarivo",
        "price": 35000,
        "currency": "MGA",
        "seller": "Artisanat Lalao",
        "categories": ["Artisanat", "Décoration"],
        "images": ["https://assets.tsena.mg/products/a.jpg"]
    }"#;

    let req = serde_json::from_str::<CreateProductRequest>(body).unwrap();

    assert_eq!(req.title, "Panier en raphia tressé");
    assert_eq!(req.price, Decimal::from(35_000));
    assert_eq!(req.currency, "MGA");
    assert_eq!(req.categories.len(), 2);
    assert_eq!(req.images.len(), 1);
}

#[test]
fn create_product_request_defaults() {
    // the dashboard only sends the required fields for a minimal listing
    let body = r#"{
        "title": "Épices mélangées",
        "price": "12000.50",
        "seller": "Épicerie Naly"
    }"#;

    let req = serde_json::from_str::<CreateProductRequest>(body).unwrap();

    assert_eq!(req.currency, "MGA");
    assert!(req.description.is_none());
    assert!(req.categories.is_empty());
    assert!(req.images.is_empty());
    assert_eq!(req.price.to_string(), "12000.50");
}

#[test]
fn deserialize_product_query() {
    let body = r#"{
        "query": "riz",
        "category": "Alimentation",
        "price_from": 1000,
        "price_to": 100000
    }"#;

    let params = serde_json::from_str::<ProductQuery>(body).unwrap();

    assert_eq!(params.query.as_deref(), Some("riz"));
    assert_eq!(params.category.as_deref(), Some("Alimentation"));
    assert_eq!(params.price_from, Some(Decimal::from(1_000)));
    assert_eq!(params.price_to, Some(Decimal::from(100_000)));
    assert!(params.limit.is_none());
}

#[test]
fn deserialize_partial_update() {
    let body = r#"{ "price": 42000, "categories": ["Mode"] }"#;

    let req = serde_json::from_str::<UpdateProductRequest>(body).unwrap();

    assert_eq!(req.price, Some(Decimal::from(42_000)));
    assert_eq!(req.categories.as_deref(), Some(&["Mode".to_string()][..]));
    assert!(req.title.is_none());
    assert!(req.images.is_none());
}
