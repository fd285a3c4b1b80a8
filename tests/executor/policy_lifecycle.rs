//! End-to-end flows across carriers, insured parties, and policies.

use crate::common::*;
use docledger::{Error, OrderedStore, RangeMode};
use serde_json::json;

const CARRIER: &str = r#"{"carrierNumber":"6322","carrierName":"InsurTech"}"#;
const INSURED: &str = r#"{"insuredUserName":"edge","email":"edge@abc.com"}"#;
const POLICY: &str =
    r#"{"policyId":"2211","carrierNumber":"6322","insuredUserName":"edge","policyPayout":100}"#;

#[test]
fn create_all_then_repeat() {
    let executor = create_executor();

    executor.invoke("createCarrier", CARRIER).unwrap();
    executor.invoke("createInsured", INSURED).unwrap();
    executor.invoke("createPolicy", POLICY).unwrap();

    assert!(matches!(
        executor.invoke("createCarrier", CARRIER),
        Err(Error::AlreadyExists { ref key }) if key == "carrier6322"
    ));
    assert!(matches!(
        executor.invoke("createInsured", INSURED),
        Err(Error::AlreadyExists { ref key }) if key == "insurededge"
    ));
    assert!(matches!(
        executor.invoke("createPolicy", POLICY),
        Err(Error::AlreadyExists { ref key }) if key == "policy2211"
    ));

    let policies = invoke_json(&executor, "queryAllPolicies", "{}");
    assert_eq!(keys_of(&policies), vec!["policy2211"]);
    assert_eq!(policies[0]["Record"]["policyPayout"], 100);
}

#[test]
fn policy_waits_for_both_references() {
    let (store, executor) = create_executor_with(RangeMode::Heuristic);

    let err = executor.invoke("createPolicy", POLICY).unwrap_err();
    assert_eq!(
        err,
        Error::ReferenceNotFound {
            doc_type: "carrier".into(),
            identity: "6322".into()
        }
    );
    assert!(store.get("policy2211").unwrap().is_none());

    executor.invoke("createCarrier", CARRIER).unwrap();
    let err = executor.invoke("createPolicy", POLICY).unwrap_err();
    assert_eq!(
        err,
        Error::ReferenceNotFound {
            doc_type: "insured".into(),
            identity: "edge".into()
        }
    );
    assert!(store.get("policy2211").unwrap().is_none());

    executor.invoke("createInsured", INSURED).unwrap();
    executor.invoke("createPolicy", POLICY).unwrap();
    assert!(store.get("policy2211").unwrap().is_some());
}

#[test]
fn policy_references_accept_numeric_identities() {
    let executor = create_executor();
    executor
        .invoke("createCarrier", r#"{"carrierNumber":6322}"#)
        .unwrap();
    executor.invoke("createInsured", INSURED).unwrap();

    executor
        .invoke(
            "createPolicy",
            r#"{"policyId":2211,"carrierNumber":6322,"insuredUserName":"edge"}"#,
        )
        .unwrap();
    let policy = invoke_json(&executor, "queryPolicy", r#"{"policyId":"2211"}"#);
    assert_eq!(policy["policyId"], 2211);
}

#[test]
fn selector_filters_are_conjunctive() {
    let executor = create_executor();
    for (number, status, region) in [
        ("1", "active", "north"),
        ("2", "active", "south"),
        ("3", "closed", "north"),
    ] {
        executor
            .invoke(
                "createCarrier",
                &json!({"carrierNumber": number, "status": status, "region": region}).to_string(),
            )
            .unwrap();
    }

    let active = invoke_json(
        &executor,
        "queryBySelector",
        r#"{"selector":{"docType":"carrier","status":"active"}}"#,
    );
    assert_eq!(keys_of(&active), vec!["carrier1", "carrier2"]);

    let active_north = invoke_json(
        &executor,
        "queryBySelector",
        r#"{"selector":{"docType":"carrier","status":"active","region":"north"}}"#,
    );
    assert_eq!(keys_of(&active_north), vec!["carrier1"]);

    let all = invoke_json(
        &executor,
        "queryBySelector",
        r#"{"selector":{"docType":"carrier"}}"#,
    );
    assert_eq!(keys_of(&all), vec!["carrier1", "carrier2", "carrier3"]);
}

#[test]
fn selector_equality_is_strict() {
    let executor = create_executor();
    executor
        .invoke("createCarrier", r#"{"carrierNumber":"1","rating":0}"#)
        .unwrap();

    // Falsy values still match
    let zero = invoke_json(
        &executor,
        "queryBySelector",
        r#"{"selector":{"docType":"carrier","rating":0}}"#,
    );
    assert_eq!(keys_of(&zero), vec!["carrier1"]);

    // No coercion between strings and numbers
    let string_zero = invoke_json(
        &executor,
        "queryBySelector",
        r#"{"selector":{"docType":"carrier","rating":"0"}}"#,
    );
    assert!(keys_of(&string_zero).is_empty());
}

#[test]
fn heuristic_range_skips_leading_punctuation() {
    let (_store, executor) = create_executor_with(RangeMode::Heuristic);
    executor
        .invoke("createInsured", r#"{"insuredUserName":"edge"}"#)
        .unwrap();
    executor
        .invoke("createInsured", r#"{"insuredUserName":"-edge"}"#)
        .unwrap();
    executor
        .invoke("createInsured", r#"{"insuredUserName":"zed"}"#)
        .unwrap();

    let all = invoke_json(&executor, "queryAllInsureds", "{}");
    assert_eq!(keys_of(&all), vec!["insurededge"]);

    let hidden = invoke_json(&executor, "queryInsured", r#"{"insuredUserName":"-edge"}"#);
    assert_eq!(hidden["insuredUserName"], "-edge");
}

#[test]
fn prefix_range_includes_every_identity() {
    let (_store, executor) = create_executor_with(RangeMode::Prefix);
    for name in ["edge", "-edge", "zed"] {
        executor
            .invoke(
                "createInsured",
                &json!({ "insuredUserName": name }).to_string(),
            )
            .unwrap();
    }

    let all = invoke_json(&executor, "queryAllInsureds", "{}");
    assert_eq!(
        keys_of(&all),
        vec!["insured-edge", "insurededge", "insuredzed"]
    );
}

#[test]
fn opaque_values_are_listed_but_never_filtered_in() {
    let (store, executor) = create_executor_with(RangeMode::Heuristic);
    executor
        .invoke("createCarrier", r#"{"carrierNumber":"1","status":"active"}"#)
        .unwrap();
    store.put("carrier2", b"legacy bytes".to_vec()).unwrap();
    store.put("carrier3", Vec::new()).unwrap();

    let all = invoke_json(&executor, "queryAllCarriers", "{}");
    assert_eq!(keys_of(&all), vec!["carrier1", "carrier2"]);
    assert_eq!(all[1]["Record"], "legacy bytes");

    let active = invoke_json(
        &executor,
        "queryBySelector",
        r#"{"selector":{"docType":"carrier","status":"active"}}"#,
    );
    assert_eq!(keys_of(&active), vec!["carrier1"]);
    assert_eq!(store.open_scans(), 0);
}
