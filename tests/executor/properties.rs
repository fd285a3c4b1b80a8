//! Property tests over the public operations.

use std::collections::BTreeSet;

use crate::common::*;
use docledger::{Error, RangeMode};
use proptest::prelude::*;
use serde_json::json;

fn identity() -> impl Strategy<Value = String> {
    "[0-9a-y][a-z0-9_]{0,10}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_create_is_always_rejected(id in identity(), payout in 0u32..10_000) {
        let (store, executor) = create_executor_with(RangeMode::Heuristic);
        let args = json!({"carrierNumber": id, "payout": payout}).to_string();

        prop_assert!(executor.invoke("createCarrier", &args).is_ok());
        let again = executor.invoke("createCarrier", &args);
        let rejected = matches!(again, Err(Error::AlreadyExists { .. }));
        prop_assert!(rejected);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn query_round_trips_create(id in identity(), email in "[a-z]{1,6}@[a-z]{1,6}\\.org") {
        let executor = create_executor();
        let created = invoke_json(
            &executor,
            "createInsured",
            &json!({"insuredUserName": id, "email": email}).to_string(),
        );
        let fetched = invoke_json(
            &executor,
            "queryInsured",
            &json!({"insuredUserName": id}).to_string(),
        );
        prop_assert_eq!(&fetched, &created);
        prop_assert_eq!(&fetched["docType"], &json!("insured"));
    }

    #[test]
    fn query_all_is_complete_and_ordered(
        policies in prop::collection::btree_set(identity(), 0..15),
        insureds in prop::collection::btree_set(identity(), 1..15),
    ) {
        let executor = create_executor();
        executor.invoke("createCarrier", r#"{"carrierNumber":"c"}"#).unwrap();
        let holder = insureds.iter().next().unwrap().clone();
        for name in &insureds {
            executor
                .invoke("createInsured", &json!({"insuredUserName": name}).to_string())
                .unwrap();
        }
        for id in &policies {
            let args = json!({
                "policyId": id,
                "carrierNumber": "c",
                "insuredUserName": holder,
            });
            executor.invoke("createPolicy", &args.to_string()).unwrap();
        }

        let listed = keys_of(&invoke_json(&executor, "queryAllPolicies", "{}"));
        let expected: Vec<String> = policies.iter().map(|id| format!("policy{}", id)).collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn selector_returns_exactly_the_matching_subset(
        statuses in prop::collection::vec(prop_oneof![Just("active"), Just("closed")], 1..20),
    ) {
        let executor = create_executor();
        let mut expected = BTreeSet::new();
        for (i, status) in statuses.iter().enumerate() {
            let number = format!("{:03}", i);
            executor
                .invoke(
                    "createCarrier",
                    &json!({"carrierNumber": number, "status": status}).to_string(),
                )
                .unwrap();
            if *status == "active" {
                expected.insert(format!("carrier{}", number));
            }
        }

        let active = invoke_json(
            &executor,
            "queryBySelector",
            r#"{"selector":{"docType":"carrier","status":"active"}}"#,
        );
        let listed: BTreeSet<String> = keys_of(&active).into_iter().collect();
        prop_assert_eq!(listed, expected);

        let all = invoke_json(&executor, "queryBySelector", r#"{"selector":{"docType":"carrier"}}"#);
        prop_assert_eq!(keys_of(&all).len(), statuses.len());
    }
}
