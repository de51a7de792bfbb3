// Contract tests for the deposit endpoints.

use serde_json::json;

#[test]
fn test_create_deposit_request_schema() {
    let request = json!({
        "amount": "1900.00",
        "paid_on": "2025-03-01"
    });

    assert!(request.get("id").is_none(), "create request must not have id");
    assert!(request.get("amount").is_some(), "amount is required");
    assert!(
        request["amount"].is_string(),
        "amount is a decimal string"
    );
}

#[test]
fn test_deposit_response_schema() {
    let response = json!({
        "id": 1,
        "amount": "1900.00",
        "paid_on": "2025-03-01",
        "refunded": false,
        "agreement_id": null
    });

    assert!(response["id"].is_i64(), "'id' must be an integer");
    assert!(response["refunded"].is_boolean(), "'refunded' must be a bool");
    assert!(
        response.get("agreement_id").is_some(),
        "response must include 'agreement_id' (null while unheld)"
    );
}

#[test]
fn test_deposit_list_filter_contract() {
    // filter=agreement-is-null returns only entities whose reference is null
    let filtered = json!([
        {"id": 1, "amount": "100.00", "refunded": false, "agreement_id": null},
        {"id": 3, "amount": "300.00", "refunded": false, "agreement_id": null}
    ]);

    for deposit in filtered.as_array().expect("filtered list is an array") {
        assert!(
            deposit["agreement_id"].is_null(),
            "filtered deposits must not reference an agreement"
        );
    }
}
