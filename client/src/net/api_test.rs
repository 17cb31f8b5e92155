use super::*;

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(auth_endpoint("login"), "/api/Auth/login");
    assert_eq!(auth_endpoint("register"), "/api/Auth/register");
}

#[test]
fn product_endpoints_format_expected_paths() {
    assert_eq!(products_endpoint(), "/api/Product");
    assert_eq!(product_endpoint(42), "/api/Product/42");
    assert_eq!(product_availability_endpoint(42), "/api/Product/42/availability");
    assert_eq!(categories_endpoint(), "/api/Category");
}

#[test]
fn cart_endpoints_format_expected_paths() {
    assert_eq!(cart_endpoint(7), "/api/Cart/7");
    assert_eq!(cart_add_endpoint(), "/api/Cart/add");
    assert_eq!(cart_update_endpoint(3), "/api/Cart/update/3");
    assert_eq!(cart_remove_endpoint(3), "/api/Cart/remove/3");
    assert_eq!(cart_checkout_endpoint(7), "/api/Cart/checkout/7");
}

#[test]
fn wallet_and_transaction_endpoints_format_expected_paths() {
    assert_eq!(wallet_balance_endpoint(7), "/api/Wallet/7/Balance");
    assert_eq!(wallet_add_funds_endpoint(7), "/api/Wallet/7/AddFunds");
    assert_eq!(user_transactions_endpoint(7), "/api/Transaction/user/7");
}

#[test]
fn user_endpoints_format_expected_paths() {
    assert_eq!(users_endpoint(), "/api/Users");
    assert_eq!(user_endpoint(9), "/api/Users/9");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn helpers_are_unavailable_off_browser() {
    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        let mut fut = std::pin::pin!(fut);
        let waker = std::task::Waker::noop();
        let mut cx = std::task::Context::from_waker(waker);
        match fut.as_mut().poll(&mut cx) {
            std::task::Poll::Ready(out) => out,
            std::task::Poll::Pending => panic!("stub future should resolve immediately"),
        }
    }

    assert_eq!(block_on(fetch_products()), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_cart(1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(add_funds(1, 10.0)), Err(ApiError::Unavailable));
    let login_req = LoginRequest { email: "a@b.co".to_owned(), password: "pw".to_owned() };
    assert_eq!(block_on(login(&login_req)), Err(ApiError::Unavailable));
}

#[test]
fn new_balance_from_body_reads_object_and_bare_number() {
    assert_eq!(new_balance_from_body(r#"{"newBalance": 150.25}"#), Some(150.25));
    assert_eq!(new_balance_from_body(r#"{"balance": 80}"#), Some(80.0));
    assert_eq!(new_balance_from_body(" 42.5 "), Some(42.5));
}

#[test]
fn new_balance_from_body_rejects_unreadable_replies() {
    assert_eq!(new_balance_from_body(""), None);
    assert_eq!(new_balance_from_body(r#"{"message": "Funds added"}"#), None);
    assert_eq!(new_balance_from_body(r#"{"newBalance": "lots"}"#), None);
    assert_eq!(new_balance_from_body("OK"), None);
}
