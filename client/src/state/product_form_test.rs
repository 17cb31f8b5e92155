use super::*;

fn filled() -> ProductDraft {
    ProductDraft {
        name: " Cappuccino ".to_owned(),
        description: "Foamy".to_owned(),
        price: "28.5".to_owned(),
        quantity: "12".to_owned(),
        category_id: "1".to_owned(),
        is_available: true,
    }
}

#[test]
fn default_draft_is_blank_and_available() {
    let draft = ProductDraft::default();
    assert!(draft.name.is_empty());
    assert!(draft.is_available);
}

#[test]
fn validate_trims_and_parses() {
    let submission = filled().validate().unwrap();
    assert_eq!(submission.name, "Cappuccino");
    assert_eq!(submission.price, 28.5);
    assert_eq!(submission.quantity, 12);
    assert_eq!(submission.category_id, 1);
}

#[test]
fn validate_requires_name_price_quantity_category() {
    for blank in [
        ProductDraft { name: "  ".to_owned(), ..filled() },
        ProductDraft { price: String::new(), ..filled() },
        ProductDraft { quantity: String::new(), ..filled() },
        ProductDraft { category_id: String::new(), ..filled() },
    ] {
        assert_eq!(blank.validate(), Err(MISSING_FIELDS));
    }
}

#[test]
fn validate_description_is_optional() {
    let draft = ProductDraft { description: String::new(), ..filled() };
    assert!(draft.validate().is_ok());
}

#[test]
fn validate_rejects_non_numbers() {
    assert_eq!(ProductDraft { price: "abc".to_owned(), ..filled() }.validate(), Err(NOT_A_NUMBER));
    assert_eq!(ProductDraft { quantity: "1.5".to_owned(), ..filled() }.validate(), Err(NOT_A_NUMBER));
    assert_eq!(ProductDraft { price: "NaN".to_owned(), ..filled() }.validate(), Err(NOT_A_NUMBER));
}

#[test]
fn validate_rejects_negative_values() {
    assert_eq!(ProductDraft { price: "-1".to_owned(), ..filled() }.validate(), Err(NEGATIVE_VALUES));
    assert_eq!(ProductDraft { quantity: "-3".to_owned(), ..filled() }.validate(), Err(NEGATIVE_VALUES));
}

#[test]
fn from_product_round_trips_into_submission() {
    let product = Product {
        product_id: 5,
        name: "Muffin".to_owned(),
        description: "Blueberry".to_owned(),
        price: 25.0,
        quantity: 4,
        category_id: Some(2),
        category_name: Some("Pastry".to_owned()),
        image_url: None,
        is_available: false,
    };
    let draft = ProductDraft::from_product(&product);
    assert_eq!(draft.price, "25");
    assert_eq!(draft.category_id, "2");
    assert!(!draft.is_available);
    let submission = draft.validate().unwrap();
    assert_eq!(submission.price, 25.0);
    assert!(!submission.is_available);
}

#[test]
fn fields_use_backend_multipart_names() {
    let fields = filled().validate().unwrap().fields(None);
    let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["Name", "Description", "Price", "Quantity", "CategoryID", "IsAvailable"]);
    assert_eq!(fields[2].1, "28.5");
    assert_eq!(fields[5].1, "true");
}

#[test]
fn fields_carry_product_id_on_update() {
    let fields = filled().validate().unwrap().fields(Some(17));
    assert_eq!(fields.len(), 7);
    assert_eq!(fields.last(), Some(&("ProductID", "17".to_owned())));
}

#[test]
fn image_mime_check() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("IMAGE/JPEG"));
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime(""));
}
