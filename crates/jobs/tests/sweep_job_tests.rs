use ipgroups_domain::{AddressFamily, Resolution};
use ipgroups_infrastructure::dns::ResolutionCache;
use ipgroups_jobs::CacheSweepJob;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::{ip, MockIpResolver};

fn one_result(domain: &str, addr: &str) -> Arc<[Resolution]> {
    vec![Resolution::new(Arc::from(domain), vec![ip(addr)])].into()
}

#[tokio::test]
async fn test_sweep_job_evicts_expired_entries() {
    let resolver = Arc::new(MockIpResolver::new());
    let cache = Arc::new(ResolutionCache::new(resolver, Duration::from_millis(50)));
    cache
        .insert("a", AddressFamily::All, one_result("x.com", "1.1.1.1"))
        .await;

    let job = Arc::new(CacheSweepJob::new(cache.clone()).with_interval(1));
    let _handle = job.start();

    // Entry expires after 50ms; the tick at ~1s must reap it
    sleep(Duration::from_millis(1300)).await;

    let stats = cache.stats().await;
    assert_eq!(stats.groups_count, 0);
    assert_eq!(stats.total_entries, 0);
}

#[tokio::test]
async fn test_sweep_job_leaves_live_entries() {
    let resolver = Arc::new(MockIpResolver::new());
    let cache = Arc::new(ResolutionCache::new(resolver, Duration::from_secs(60)));
    cache
        .insert("a", AddressFamily::All, one_result("x.com", "1.1.1.1"))
        .await;

    let job = Arc::new(CacheSweepJob::new(cache.clone()).with_interval(1));
    let _handle = job.start();

    sleep(Duration::from_millis(1200)).await;

    assert!(cache.get("a", AddressFamily::All).await.is_some());
    assert_eq!(cache.stats().await.total_entries, 1);
}

#[tokio::test]
async fn test_sweep_job_stops_on_cancellation() {
    let resolver = Arc::new(MockIpResolver::new());
    let cache = Arc::new(ResolutionCache::new(resolver, Duration::from_secs(60)));
    let token = CancellationToken::new();

    let job = Arc::new(
        CacheSweepJob::new(cache)
            .with_interval(1)
            .with_cancellation(token.clone()),
    );
    let handle = job.start();
    sleep(Duration::from_millis(50)).await;

    token.cancel();
    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("job should terminate promptly after cancellation")
        .unwrap();
}
