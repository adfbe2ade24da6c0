use fausse_client::{
    BookingReceipt, ClientConfig, ClientError, HttpClient, ReservationListQuery, SortBy, SortOrder,
};
use serde_json::json;
use shared::models::ReservationCreate;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    ClientConfig::new(server.uri())
        .with_admin_token("secret123")
        .with_timeout(5)
        .build_http_client()
        .unwrap()
}

fn booking(time_slot: &str) -> ReservationCreate {
    ReservationCreate {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        phone: None,
        time_slot: time_slot.into(),
        party_size: Some(2),
    }
}

fn tomorrow_at_seven() -> String {
    let day = chrono::Local::now().date_naive() + chrono::TimeDelta::days(1);
    format!("{}T19:00", day.format("%Y-%m-%d"))
}

#[tokio::test]
async fn test_list_reservations_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/reservations"))
        .and(query_param("token", "secret123"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "5"))
        .and(query_param("customer", "Jane Doe"))
        .and(query_param("sort_by", "table"))
        .and(query_param("sort_order", "desc"))
        .and(query_param_is_missing("date"))
        .and(query_param_is_missing("table"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "reservations": [{
                "id": 6,
                "time_slot": "2030-05-01T19:00:00",
                "table_number": 3,
                "party_size": 4,
                "customer": { "id": 2, "name": "Jane Doe", "email": "jane@example.com" }
            }],
            "total": "6",
            "page": 2,
            "per_page": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ReservationListQuery {
        page: 2,
        per_page: 5,
        customer: Some("Jane Doe".into()),
        sort_by: SortBy::Table,
        sort_order: SortOrder::Desc,
        ..ReservationListQuery::new("secret123")
    };
    let result = client_for(&server).list_reservations(&query).await.unwrap();
    assert_eq!(result.total, 6);
    assert_eq!(result.page, 2);
    assert_eq!(result.reservations[0].display_name(), "Jane Doe");
}

#[tokio::test]
async fn test_missing_page_falls_back_to_requested() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/reservations"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "reservations": [], "total": 0 })),
        )
        .mount(&server)
        .await;

    let query = ReservationListQuery {
        page: 3,
        ..ReservationListQuery::new("secret123")
    };
    let result = client_for(&server).list_reservations(&query).await.unwrap();
    assert_eq!(result.page, 3);
    assert_eq!(result.total, 0);
}

#[tokio::test]
async fn test_json_error_body_uses_error_field() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/reservations"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "success": false, "error": "Unauthorized" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_reservations(&ReservationListQuery::new("nope"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Unauthorized");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/reservations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_reservations(&ReservationListQuery::new("secret123"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500: boom");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_json_error_without_error_field() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/reservations"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "detail": "down" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_reservations(&ReservationListQuery::new("secret123"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().starts_with("HTTP 503"));
}

#[tokio::test]
async fn test_application_failure_is_verbatim() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/reservations"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "error": "Database is resting" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_reservations(&ReservationListQuery::new("secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Application(_)));
    assert_eq!(err.to_string(), "Database is resting");
}

#[tokio::test]
async fn test_unparsable_success_body() {
    let server = MockServer::start().await;
    Mock::given(path("/api/admin/reservations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_reservations(&ReservationListQuery::new("secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_transport_failure_is_generic() {
    let client = ClientConfig::new("http://127.0.0.1:1")
        .with_timeout(2)
        .build_http_client()
        .unwrap();
    let err = client
        .list_reservations(&ReservationListQuery::new("secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.is_retryable());
    assert!(err.to_string().contains("Please try again"));
}

#[tokio::test]
async fn test_subscribers_and_waitlist() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/newsletter"))
        .and(query_param("token", "secret123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "subscribers": [
                { "id": 1, "name": "Alice", "email": "a@example.com", "phone": null, "newsletter": true }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/waitlist"))
        .and(query_param("token", "secret123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "waitlist": [
                { "id": 4, "time_slot": "2030-05-01T19:00:00", "customer": null }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let subscribers = client.list_subscribers().await.unwrap();
    assert_eq!(subscribers[0].phone_or_placeholder(), "—");

    let waitlist = client.list_waitlist().await.unwrap();
    assert_eq!(waitlist[0].id, 4);
    assert!(waitlist[0].customer.is_none());
}

#[tokio::test]
async fn test_admin_calls_need_a_token() {
    let server = MockServer::start().await;
    let client = ClientConfig::new(server.uri()).build_http_client().unwrap();
    assert!(matches!(
        client.list_subscribers().await,
        Err(ClientError::MissingToken)
    ));
}

#[tokio::test]
async fn test_create_reservation_confirmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/reservations"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Reservation confirmed",
            "reservation": {
                "id": 1, "time_slot": "2030-05-01T19:00:00", "table_number": 8, "party_size": 2,
                "customer": { "id": 1, "name": "Grace Hopper", "email": "grace@example.com" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client_for(&server)
        .create_reservation(&booking(&tomorrow_at_seven()))
        .await
        .unwrap();
    match receipt {
        BookingReceipt::Confirmed(record) => assert_eq!(record.table_number, 8),
        other => panic!("unexpected receipt: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_reservation_waitlisted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/reservations"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "success": false,
            "waitlist": true,
            "error": "This hour is fully booked. You’ve been added to the waitlist."
        })))
        .mount(&server)
        .await;

    let receipt = client_for(&server)
        .create_reservation(&booking(&tomorrow_at_seven()))
        .await
        .unwrap();
    assert_eq!(
        receipt,
        BookingReceipt::Waitlisted {
            message: "This hour is fully booked. You’ve been added to the waitlist.".into()
        }
    );
}

#[tokio::test]
async fn test_invalid_booking_never_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut request = booking(&tomorrow_at_seven());
    request.email = "not-an-email".into();
    let err = client.create_reservation(&request).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.to_string(), "Invalid email format.");

    let err = client
        .create_reservation(&booking("2001-01-01T19:00"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Time slot must be in the future.");

    let err = client.signup_newsletter("", None).await.unwrap_err();
    assert_eq!(err.to_string(), "Email is required.");
}

#[tokio::test]
async fn test_signup_newsletter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/newsletter"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Signed up for newsletter.",
            "customer": { "id": 3, "name": "Guest", "email": "pat@example.com", "phone": null, "newsletter": true }
        })))
        .mount(&server)
        .await;

    let customer = client_for(&server)
        .signup_newsletter(" pat@example.com ", Some("  "))
        .await
        .unwrap();
    assert_eq!(customer.id, 3);
    assert!(customer.newsletter);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({ "email": "pat@example.com" }));
}

#[tokio::test]
async fn test_menu() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Desserts", "items": [{ "name": "Tiramisu", "price": 7.5 }] }
        ])))
        .mount(&server)
        .await;

    let menu = client_for(&server).menu().await.unwrap();
    assert_eq!(menu[0].name, "Desserts");
    assert_eq!(menu[0].items[0].price, 7.5);
}
