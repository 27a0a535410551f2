use super::*;

#[test]
fn results_reach_a_mounted_view() {
    let view = ViewLifetime::mount();
    let mut shown = None;
    assert!(view.deliver(vec![1, 2], |rows| shown = Some(rows)));
    assert_eq!(shown, Some(vec![1, 2]));
}

#[test]
fn late_results_are_dropped_after_unmount() {
    let view = ViewLifetime::default();
    let fetch_handle = view.clone();

    let worker = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(50));
        let mut applied = false;
        let delivered = fetch_handle.deliver("rows", |_| applied = true);
        (delivered, applied)
    });
    view.unmount();

    assert_eq!(worker.join().unwrap(), (false, false));
    assert!(!view.is_mounted());
}
