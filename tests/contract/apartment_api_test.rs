// Contract tests for the apartment endpoints.
//
// These validate the JSON shapes the API exchanges:
// - creation requests carry no id
// - responses carry the server-assigned id and all declared fields
// - error bodies carry the entity tag and machine-readable reason code

use serde_json::json;

#[test]
fn test_create_apartment_request_schema() {
    let request = json!({
        "name": "Flat 1",
        "address": "Baker Street 221b",
        "floor": 2,
        "room_count": 3,
        "monthly_rent": "950.00"
    });

    // a creation payload never carries an identifier
    assert!(request.get("id").is_none(), "create request must not have id");

    assert!(request.get("name").is_some(), "name is required");
    assert!(request["name"].is_string(), "name must be a string");

    // remaining fields are optional but typed
    assert!(request["floor"].is_i64(), "floor must be an integer");
    assert!(request["room_count"].is_i64(), "room_count must be an integer");
    assert!(
        request["monthly_rent"].is_string(),
        "monthly_rent is a decimal string"
    );
}

#[test]
fn test_apartment_response_schema() {
    let response = json!({
        "id": 1,
        "name": "Flat 1",
        "address": "Baker Street 221b",
        "floor": 2,
        "room_count": 3,
        "monthly_rent": "950.00",
        "agreement_id": null
    });

    assert!(response.get("id").is_some(), "response must include 'id'");
    assert!(response["id"].is_i64(), "'id' must be an integer");
    assert!(response.get("name").is_some(), "response must include 'name'");
    assert!(
        response.get("agreement_id").is_some(),
        "response must include 'agreement_id' (null while vacant)"
    );
    assert!(
        response["agreement_id"].is_null(),
        "a vacant apartment has a null agreement reference"
    );
}

#[test]
fn test_apartment_list_is_an_array_of_entities() {
    let response = json!([
        {"id": 1, "name": "Flat 1", "agreement_id": null},
        {"id": 2, "name": "Flat 2", "agreement_id": 7}
    ]);

    let list = response.as_array().expect("list response must be an array");
    for entity in list {
        assert!(entity.get("id").is_some(), "every listed entity has an id");
        assert!(entity["id"].is_i64());
    }
}

#[test]
fn test_bad_request_error_schema() {
    let response = json!({
        "error": {
            "code": 400,
            "message": "A new apartment cannot already have an id",
            "entity": "apartment",
            "key": "idexists"
        }
    });

    let error = response
        .get("error")
        .expect("error body wraps an 'error' object");

    assert_eq!(error["code"], json!(400));
    assert!(error["message"].is_string(), "'message' must be a string");
    assert_eq!(error["entity"], json!("apartment"));
    assert_eq!(error["key"], json!("idexists"));
}
