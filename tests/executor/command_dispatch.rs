//! Dispatch tests: every registered operation routes to its handler.

use crate::common::*;
use docledger::Error;
use serde_json::json;

#[test]
fn all_operations_are_registered() {
    let executor = create_executor();
    assert_eq!(
        executor.operations(),
        vec![
            "createCarrier",
            "createInsured",
            "createPolicy",
            "queryAllCarriers",
            "queryAllInsureds",
            "queryAllPolicies",
            "queryBySelector",
            "queryCarrier",
            "queryInsured",
            "queryPolicy",
        ]
    );
}

#[test]
fn create_returns_stored_document() {
    let executor = create_executor();
    let doc = invoke_json(
        &executor,
        "createInsured",
        r#"{"insuredUserName":"edge","email":"edge@abc.com"}"#,
    );
    assert_eq!(
        doc,
        json!({"insuredUserName": "edge", "email": "edge@abc.com", "docType": "insured"})
    );
}

#[test]
fn query_returns_document_for_each_kind() {
    let executor = create_executor();
    seed_policy(&executor);

    let carrier = invoke_json(&executor, "queryCarrier", r#"{"carrierNumber":"6322"}"#);
    assert_eq!(carrier["carrierName"], "InsurTech");

    let insured = invoke_json(&executor, "queryInsured", r#"{"insuredUserName":"edge"}"#);
    assert_eq!(insured["company"], "ABC");

    let policy = invoke_json(&executor, "queryPolicy", r#"{"policyId":"2211"}"#);
    assert_eq!(policy["rainfallAmount"], 40);
    assert_eq!(policy["docType"], "policy");
}

#[test]
fn query_all_returns_key_record_pairs() {
    let executor = create_executor();
    seed_policy(&executor);

    for (operation, key) in [
        ("queryAllCarriers", "carrier6322"),
        ("queryAllInsureds", "insurededge"),
        ("queryAllPolicies", "policy2211"),
    ] {
        let list = invoke_json(&executor, operation, "{}");
        assert_eq!(keys_of(&list), vec![key], "{}", operation);
        assert!(list[0]["Record"].is_object());
    }
}

#[test]
fn query_by_selector_dispatches() {
    let executor = create_executor();
    seed_policy(&executor);

    let list = invoke_json(
        &executor,
        "queryBySelector",
        r#"{"selector":{"docType":"policy","carrierNumber":"6322"}}"#,
    );
    assert_eq!(keys_of(&list), vec!["policy2211"]);
}

#[test]
fn unknown_operation_is_rejected() {
    let executor = create_executor();
    let err = executor.invoke("evaluatePolicy", "{}").unwrap_err();
    assert!(matches!(err, Error::UnknownOperation { ref name } if name == "evaluatePolicy"));
}
