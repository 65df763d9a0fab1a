//! Bounded fan-out helpers.
//!
//! Each call is an independent pool: at most `limit` tasks are in flight,
//! and with a limit of 1 tasks run strictly in input order.

use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;

/// Runs `task` over every item with at most `limit` tasks in flight.
///
/// Results are returned in completion order.
pub(crate) async fn for_each_bounded<I, F, Fut>(items: I, limit: usize, task: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(task)
        .buffer_unordered(limit.max(1))
        .collect()
        .await
}

/// Like [`for_each_bounded`], but stops at the first error.
///
/// Tasks not yet started when an error arrives are never started, and
/// in-flight tasks are dropped.
pub(crate) async fn try_for_each_bounded<I, F, Fut, T, E>(
    items: I,
    limit: usize,
    task: F,
) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    stream::iter(items)
        .map(task)
        .buffer_unordered(limit.max(1))
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[tokio::test]
    async fn limit_of_one_runs_in_order() {
        let started = Mutex::new(Vec::new());
        let started_ref = &started;

        let results = for_each_bounded(1..=5u64, 1, move |item| async move {
            started_ref.lock().unwrap().push(item);
            tokio::time::sleep(Duration::from_millis(6 - item)).await;
            item * 10
        })
        .await;

        assert_eq!(*started.lock().unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(results, vec![10, 20, 30, 40, 50]);
    }

    #[tokio::test]
    async fn never_exceeds_limit() {
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let (in_flight_ref, peak_ref) = (&in_flight, &peak);

        for_each_bounded(0..20, 3, move |_| async move {
            let now = in_flight_ref.fetch_add(1, Ordering::SeqCst) + 1;
            peak_ref.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(2)).await;
            in_flight_ref.fetch_sub(1, Ordering::SeqCst);
        })
        .await;

        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert!(peak.load(Ordering::SeqCst) > 1);
    }

    #[tokio::test]
    async fn zero_limit_is_treated_as_one() {
        let results = for_each_bounded(vec!["a", "b"], 0, |item| async move { item }).await;
        assert_eq!(results, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn stops_at_first_error() {
        let started = Mutex::new(Vec::new());
        let started_ref = &started;

        let result: Result<Vec<u32>, String> =
            try_for_each_bounded(1..=4u32, 1, move |item| async move {
                started_ref.lock().unwrap().push(item);
                if item == 2 {
                    Err(format!("item {item} failed"))
                } else {
                    Ok(item)
                }
            })
            .await;

        assert_eq!(result, Err("item 2 failed".to_string()));
        assert_eq!(*started.lock().unwrap(), vec![1, 2]);
    }
}
