// Contract tests for the agreement endpoints.

use serde_json::json;

#[test]
fn test_create_agreement_request_schema() {
    let request = json!({
        "number": "AGR-2025-001",
        "tenant_name": "J. Tenant",
        "start_date": "2025-01-01",
        "end_date": "2025-12-31",
        "monthly_rent": "950.00"
    });

    assert!(request.get("id").is_none(), "create request must not have id");
    assert!(request.get("number").is_some(), "number is required");
    assert!(request["number"].is_string(), "number must be a string");

    // dates travel as ISO-8601 strings
    assert!(request["start_date"].is_string());
    assert!(request["end_date"].is_string());
}

#[test]
fn test_agreement_response_schema() {
    let response = json!({
        "id": 1,
        "number": "AGR-2025-001",
        "tenant_name": "J. Tenant",
        "start_date": "2025-01-01",
        "end_date": "2025-12-31",
        "monthly_rent": "950.00"
    });

    assert!(response["id"].is_i64(), "'id' must be an integer");
    assert!(response["number"].is_string());
    assert!(
        response["monthly_rent"].is_string(),
        "money travels as a decimal string"
    );
}

#[test]
fn test_idnull_error_schema() {
    let response = json!({
        "error": {
            "code": 400,
            "message": "An existing agreement must have an id",
            "entity": "agreement",
            "key": "idnull"
        }
    });

    assert_eq!(response["error"]["entity"], json!("agreement"));
    assert_eq!(response["error"]["key"], json!("idnull"));
}
