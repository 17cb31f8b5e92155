use super::*;

// =============================================================
// Auth
// =============================================================

#[test]
fn auth_response_reads_backend_user_shape() {
    let body = serde_json::json!({
        "token": "abc.def.ghi",
        "user": { "userID": 7, "name": "Thandi", "role": "User", "roleID": 1 }
    });
    let resp: AuthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.token.as_deref(), Some("abc.def.ghi"));
    let user = resp.user.unwrap();
    assert_eq!(user.user_id, 7);
    assert_eq!(user.name, "Thandi");
    assert_eq!(user.role_id, Some(1));
    assert!(!user.is_superuser());
}

#[test]
fn auth_response_tolerates_missing_token() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({ "message": "ok" })).unwrap();
    assert_eq!(resp.token, None);
    assert_eq!(resp.user, None);
}

#[test]
fn auth_user_accepts_string_ids_and_pascal_case() {
    let body = serde_json::json!({ "UserID": "12", "Name": "Admin", "Role": "Superuser" });
    let user: AuthUser = serde_json::from_value(body).unwrap();
    assert_eq!(user.user_id, 12);
    assert_eq!(user.role_id, None);
    assert!(user.is_superuser());
}

#[test]
fn auth_user_superuser_by_role_id() {
    let user = AuthUser { user_id: 1, name: "x".to_owned(), role: "Staff".to_owned(), role_id: Some(2) };
    assert!(user.is_superuser());
}

#[test]
fn auth_user_round_trips_through_storage_json() {
    let user = AuthUser { user_id: 3, name: "Sipho".to_owned(), role: "User".to_owned(), role_id: Some(1) };
    let raw = serde_json::to_string(&user).unwrap();
    assert!(raw.contains("\"userID\":3"));
    let back: AuthUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn register_request_serializes_camel_case() {
    let req = RegisterRequest {
        name: "A".to_owned(),
        surname: "B".to_owned(),
        email: "a@b.co".to_owned(),
        contact_number: "0821234567".to_owned(),
        password: "pw".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["contactNumber"], "0821234567");
    assert!(value.get("contact_number").is_none());
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn product_reads_full_backend_shape() {
    let body = serde_json::json!({
        "productID": 4,
        "name": "Flat White",
        "description": "Double shot",
        "price": 32.5,
        "quantity": 10,
        "categoryID": 2,
        "categoryName": "Coffee",
        "imageURL": "/images/flat-white.png",
        "isAvailable": false
    });
    let product: Product = serde_json::from_value(body).unwrap();
    assert_eq!(product.product_id, 4);
    assert_eq!(product.category_id, Some(2));
    assert_eq!(product.category_name.as_deref(), Some("Coffee"));
    assert_eq!(product.image_url.as_deref(), Some("/images/flat-white.png"));
    assert!(!product.is_available);
}

#[test]
fn product_defaults_to_available_when_flag_missing() {
    let product: Product = serde_json::from_value(serde_json::json!({ "id": 1, "name": "Muffin" })).unwrap();
    assert_eq!(product.product_id, 1);
    assert!(product.is_available);
    assert_eq!(product.category_id, None);
}

#[test]
fn product_rejects_non_numeric_id() {
    let result = serde_json::from_value::<Product>(serde_json::json!({ "productID": "abc" }));
    assert!(result.is_err());
}

#[test]
fn category_accepts_id_alias() {
    let category: Category = serde_json::from_value(serde_json::json!({ "id": 3, "name": "Pastry" })).unwrap();
    assert_eq!(category.category_id, 3);
}

// =============================================================
// Cart / wallet
// =============================================================

#[test]
fn cart_reads_items_and_total() {
    let body = serde_json::json!({
        "cartID": 9,
        "totalAmount": 65.0,
        "items": [
            { "cartItemID": 1, "productID": 4, "productName": "Flat White", "price": 32.5, "quantity": 2, "subtotal": 65.0 }
        ]
    });
    let cart: Cart = serde_json::from_value(body).unwrap();
    assert_eq!(cart.cart_id, Some(9));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product_name, "Flat White");
    assert_eq!(cart.total_amount, 65.0);
}

#[test]
fn empty_cart_object_has_no_items() {
    let cart: Cart = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.cart_id, None);
}

#[test]
fn add_to_cart_request_uses_backend_id_names() {
    let value = serde_json::to_value(AddToCartRequest { user_id: 1, product_id: 2, quantity: 3 }).unwrap();
    assert_eq!(value, serde_json::json!({ "userID": 1, "productID": 2, "quantity": 3 }));
}

#[test]
fn add_funds_response_reads_new_balance() {
    let resp: AddFundsResponse = serde_json::from_value(serde_json::json!({ "newBalance": 150.25 })).unwrap();
    assert_eq!(resp.new_balance, 150.25);
}

// =============================================================
// Transactions / users
// =============================================================

#[test]
fn transaction_reads_items() {
    let body = serde_json::json!({
        "transactionID": 55,
        "transactionDate": "2025-05-01T10:20:30",
        "amount": 45.0,
        "resultingBalance": 155.0,
        "transactionItems": [{ "productName": "Croissant", "quantity": 1, "price": 45.0 }]
    });
    let tx: Transaction = serde_json::from_value(body).unwrap();
    assert_eq!(tx.transaction_id, 55);
    assert_eq!(tx.items.len(), 1);
    assert_eq!(tx.transaction_type, None);
    assert_eq!(tx.resulting_balance, Some(155.0));
}

#[test]
fn update_user_request_omits_blank_password() {
    let profile = UserProfile { user_id: 5, name: "Lebo".to_owned(), ..UserProfile::default() };
    let value = serde_json::to_value(UpdateUserRequest::from_profile(&profile, "   ")).unwrap();
    assert!(value.get("password").is_none());
    assert_eq!(value["userId"], 5);

    let value = serde_json::to_value(UpdateUserRequest::from_profile(&profile, "s3cret")).unwrap();
    assert_eq!(value["password"], "s3cret");
}
