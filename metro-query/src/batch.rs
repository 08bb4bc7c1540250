//! Sequential batch querying of station pairs.

use tracing::info;

use crate::domain::{Batch, BatchError, QueryResult, StationName};

/// Source of travel times between two stations.
///
/// Implemented by [`MetroClient`](crate::metro::MetroClient); tests use
/// in-memory fakes. Returns `None` when no travel time is available.
pub trait TravelTimeProvider {
    /// Travel time from `start` to `end` in seconds, if known.
    fn travel_time(
        &self,
        start: &StationName,
        end: &StationName,
    ) -> impl Future<Output = Option<u64>>;
}

/// Query every consecutive (start, end) pair in `stations`.
///
/// Names are trimmed before querying. Fails with [`BatchError::OddCount`]
/// before any query is issued if the names cannot be paired.
pub async fn batch_query<P, S>(provider: &P, stations: &[S]) -> Result<Vec<QueryResult>, BatchError>
where
    P: TravelTimeProvider,
    S: AsRef<str>,
{
    let batch = Batch::new(stations)?;
    Ok(run_batch(provider, &batch).await)
}

/// Query every pair of an already-validated batch, in order.
///
/// Pairs are queried one at a time; each query completes before the next
/// starts.
pub async fn run_batch<P: TravelTimeProvider>(provider: &P, batch: &Batch) -> Vec<QueryResult> {
    info!(pairs = batch.pair_count(), "starting batch query");

    let mut results = Vec::with_capacity(batch.pair_count());
    for (start, end) in batch.pairs() {
        let duration = provider.travel_time(start, end).await;
        results.push(QueryResult::new(start.clone(), end.clone(), duration));
    }

    let failed = results.iter().filter(|r| r.duration_secs.is_none()).count();
    info!(pairs = results.len(), failed, "batch query finished");

    results
}



#[cfg(test)]
mod proptests {
    use super::test_support::FakeProvider;
    use super::*;
    use futures::executor::block_on;
    use proptest::prelude::*;

    proptest! {
        /// One result per pair, in the order the pairs were given
        #[test]
        fn one_result_per_pair_in_order(names in prop::collection::vec("[A-Za-z]{1,6}", 0..16).prop_map(|mut v| { if v.len() % 2 == 1 { v.pop(); } v })) {
            let provider = FakeProvider::default();
            let results = block_on(batch_query(&provider, &names)).unwrap();

            prop_assert_eq!(results.len(), names.len() / 2);
            for (i, result) in results.iter().enumerate() {
                prop_assert_eq!(result.start.as_str(), names[2 * i].as_str());
                prop_assert_eq!(result.end.as_str(), names[2 * i + 1].as_str());
            }
        }

        /// Odd-length lists never reach the provider
        #[test]
        fn odd_length_never_queries(names in prop::collection::vec("[A-Za-z]{1,6}", 1..16).prop_filter("odd", |v| v.len() % 2 == 1)) {
            let provider = FakeProvider::default();
            let result = block_on(batch_query(&provider, &names));

            prop_assert_eq!(result, Err(BatchError::OddCount(names.len())));
            prop_assert_eq!(provider.call_count(), 0);
        }
    }
}
