use tsena_back::models::{CartMutationRequest, CreateReviewRequest, SendMessageRequest};

#[test]
fn deserialize_send_message_request() {
    let body = r#"{
        "receiver_id": 7,
        "product_id": 12,
        "subject": "Question sur le produit",
        "content": "Est-ce encore disponible ?"
    }"#;

    let req = serde_json::from_str::<SendMessageRequest>(body).unwrap();

    assert_eq!(req.receiver_id, 7);
    assert_eq!(req.product_id, Some(12));
    assert_eq!(req.subject.as_deref(), Some("Question sur le produit"));
    assert_eq!(req.content, "Est-ce encore disponible ?");
}

#[test]
fn message_subject_and_product_are_optional() {
    let body = r#"{ "receiver_id": 7, "content": "Bonjour" }"#;

    let req = serde_json::from_str::<SendMessageRequest>(body).unwrap();

    assert!(req.product_id.is_none());
    assert!(req.subject.is_none());
}

#[test]
fn deserialize_review_request() {
    let req = serde_json::from_str::<CreateReviewRequest>(r#"{ "rating": 5 }"#).unwrap();

    assert_eq!(req.rating, 5);
    assert!(req.comment.is_none());
}

#[test]
fn deserialize_cart_mutation() {
    let req =
        serde_json::from_str::<CartMutationRequest>(r#"{ "product_id": 3, "delta": -1 }"#).unwrap();

    assert_eq!(req.product_id, 3);
    assert_eq!(req.delta, -1);
}
