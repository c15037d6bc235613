use {
    futures::{future, sync::oneshot, Future},
    matches::assert_matches,
    optpair::{join, pair, pair_async},
};

#[test]
fn resolves_two_present_sources() {
    let first = future::ok::<_, failure::Error>(Some(5));
    let second = future::ok::<_, failure::Error>(Some("x"));

    let merged = pair_async(first, second)
        .unwrap()
        .map(|a, b| format!("{}{}", a, b));
    assert_eq!(merged, Some("5x".to_string()));
}

#[test]
fn behaves_as_the_synchronous_constructor() {
    let first = future::ok::<_, failure::Error>(Some(10));
    let second = future::ok::<_, failure::Error>(Some(20));

    let resolved = pair_async(first, second).unwrap();
    assert_eq!(resolved, pair(Some(10), Some(20)));
}

#[test]
fn absent_source_yields_none() {
    let first = future::ok::<_, failure::Error>(None::<i32>);
    let second = future::ok::<_, failure::Error>(Some(20));

    let merged = pair_async(first, second).unwrap().map(|a, b| a + b);
    assert_eq!(merged, None);
}

#[test]
fn failed_source_surfaces_before_any_merge() {
    let first = future::ok::<_, failure::Error>(Some(10));
    let second = future::err::<Option<i32>, _>(failure::err_msg("source failed"));

    let result = pair_async(first, second);
    assert_matches!(result, Err(ref e) if e.cause().to_string() == "source failed");
}

#[test]
fn fails_fast_while_the_other_source_is_still_pending() {
    let (_tx, rx) = oneshot::channel::<Option<i32>>();
    let failing = future::err::<Option<i32>, _>(failure::err_msg("boom"));

    let result = pair_async(rx, failing);
    assert_matches!(result, Err(ref e) if e.cause().to_string() == "boom");
}

#[test]
fn cancelled_source_is_reported_as_a_failure() {
    let (tx, rx) = oneshot::channel::<Option<i32>>();
    drop(tx);

    let result = pair_async(future::ok::<_, oneshot::Canceled>(Some(1)), rx);
    assert_matches!(result, Err(_));
}

#[test]
fn completion_order_is_irrelevant() {
    let (tx1, rx1) = oneshot::channel::<Option<i32>>();
    let (tx2, rx2) = oneshot::channel::<Option<i32>>();

    // resolve the second source first
    tx2.send(Some(2)).unwrap();
    tx1.send(Some(1)).unwrap();

    let merged = pair_async(rx1, rx2).unwrap().map(|a, b| (a, b));
    assert_eq!(merged, Some((1, 2)));
}

#[test]
fn join_is_an_ordinary_future() {
    let first = future::lazy(|| future::ok::<_, failure::Error>(Some(1)));
    let second = future::ok::<_, failure::Error>(Some(2));

    let merged = join(first, second)
        .map(|p| p.map(|a, b| a + b))
        .wait()
        .unwrap();
    assert_eq!(merged, Some(3));
}

#[test]
fn join_error_exposes_the_cause() {
    let first = future::err::<Option<i32>, _>(failure::err_msg("no luck"));
    let second = future::ok::<_, failure::Error>(Some(1));

    let err = pair_async(first, second).unwrap_err();
    assert!(err.to_string().contains("no luck"));
    assert_eq!(err.into_cause().to_string(), "no luck");
}
