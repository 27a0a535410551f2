use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;
use crate::test_support::{json_error, transport_error};

#[test]
fn one_failure_is_replaced_by_default_and_others_survive() {
    let fetches: Vec<(&'static str, Fetch<'_, Vec<u32>>)> = vec![
        ("a", Box::new(|| Ok(vec![1]))),
        ("b", Box::new(|| Ok(vec![2, 2]))),
        ("c", Box::new(|| Err(json_error(500, serde_json::json!({}))))),
        ("d", Box::new(|| Ok(vec![4, 4, 4, 4]))),
        ("e", Box::new(|| Ok(vec![5]))),
    ];
    let out = join_or_default(fetches);
    assert_eq!(out, vec![vec![1], vec![2, 2], vec![], vec![4, 4, 4, 4], vec![5]]);
}

#[test]
fn all_failures_still_produce_a_full_result() {
    let fetches: Vec<(&'static str, Fetch<'_, usize>)> = vec![
        ("a", Box::new(|| Err(transport_error("offline")))),
        ("b", Box::new(|| Err(transport_error("offline")))),
    ];
    assert_eq!(join_or_default(fetches), vec![0, 0]);
}

#[test]
fn fetches_run_concurrently() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let fetches: Vec<(&'static str, Fetch<'_, usize>)> = (0..4)
        .map(|_| {
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            let f: Fetch<'_, usize> = Box::new(move || {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(100));
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(1)
            });
            ("sleep", f)
        })
        .collect();
    assert_eq!(join_or_default(fetches), vec![1, 1, 1, 1]);
    assert!(peak.load(Ordering::SeqCst) > 1);
}

#[test]
fn a_panicking_fetch_yields_default() {
    let fetches: Vec<(&'static str, Fetch<'_, usize>)> = vec![
        ("ok", Box::new(|| Ok(3))),
        ("boom", Box::new(|| panic!("boom"))),
    ];
    assert_eq!(join_or_default(fetches), vec![3, 0]);
}
