use crate::{
    sync::{DestinationCatalog, LookupError, SyncContext},
    types::Track,
    utils,
};

/// Returns the best-candidate destination video for a track, consulting and
/// populating the run's lookup cache.
///
/// At most one underlying search is issued per distinct normalized key per
/// run; empty results are cached with an explicit not-found sentinel so
/// repeated misses aren't re-queried. The first platform-ranked result is
/// selected as-is: no secondary scoring or duration matching is performed,
/// a simplicity/latency tradeoff.
///
/// A failed search is not cached and not retried here. Searches are
/// idempotent reads and cheap to re-run on a later invocation; retry belongs
/// to the write path.
pub async fn find_best_match<D: DestinationCatalog>(
    ctx: &mut SyncContext,
    destination: &mut D,
    track: &Track,
) -> Result<Option<String>, LookupError> {
    let key = utils::normalize_match_key(&track.name, &track.artists);

    if let Some(cached) = ctx.cached_lookup(&key) {
        return Ok(cached);
    }

    let query = utils::build_search_query(track);
    let result = destination.search_top_result(&query).await?;
    ctx.record_lookup(key, result.clone());

    Ok(result)
}
