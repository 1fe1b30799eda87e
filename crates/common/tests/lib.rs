// crates/common/tests/lib.rs
use serde_json::json;
use stash_common::{ApiMessage, LoginRequest, LoginResponse, OwnerData, RegisterRequest};

#[test]
fn test_register_request_serialization() {
    let request = RegisterRequest {
        username: "alice".to_string(),
        password: "secret123".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    let deserialized: RegisterRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.username, "alice");
    assert_eq!(deserialized.password, "secret123");
}

#[test]
fn test_login_request_from_wire_shape() {
    let body = json!({ "username": "alice", "password": "secret123" });
    let request: LoginRequest = serde_json::from_value(body).unwrap();

    assert_eq!(request.username, "alice");
    assert_eq!(request.password, "secret123");
}

#[test]
fn test_login_response_serialization() {
    let response = LoginResponse {
        token: "opaque-token".to_string(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, json!({ "token": "opaque-token" }));
}

#[test]
fn test_owner_data_serialization() {
    let envelope = OwnerData {
        name: "alice".to_string(),
        data: json!({ "x": 1 }),
    };

    let json = serde_json::to_string(&envelope).unwrap();
    let deserialized: OwnerData = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.name, "alice");
    assert_eq!(deserialized.data, json!({ "x": 1 }));
}

#[test]
fn test_api_message_serialization() {
    let message = ApiMessage {
        message: "Data written successfully.".to_string(),
    };

    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json, json!({ "message": "Data written successfully." }));
}
