//! Concurrent invocations against one shared executor.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::common::*;
use docledger::{Error, RangeMode};

#[test]
fn racing_creates_have_one_winner() {
    let (store, executor) = create_executor_with(RangeMode::Heuristic);
    let executor = Arc::new(executor);
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let executor = Arc::clone(&executor);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let args = format!(r#"{{"carrierNumber":"6322","writer":{}}}"#, i);
                executor.invoke("createCarrier", &args)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(Error::AlreadyExists { .. })))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(rejected, threads - 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.write_count(), 1);
}

#[test]
fn parallel_creates_of_distinct_documents() {
    let executor = Arc::new(create_executor());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                for i in 0..25 {
                    let args = format!(r#"{{"insuredUserName":"u{}x{:02}"}}"#, t, i);
                    executor.invoke("createInsured", &args).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let all = invoke_json(&executor, "queryAllInsureds", "{}");
    let keys = keys_of(&all);
    assert_eq!(keys.len(), 100);
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
