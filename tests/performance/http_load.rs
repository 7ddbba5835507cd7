//! HTTP load checks against a running ipgroups instance.
//!
//! Start the server first, e.g.:
//!   cargo run -p ipgroups -- --port 8080 --cache-ttl 900
//! then run with `cargo test -p ipgroups-bench -- --ignored`.

use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const SERVER: &str = "127.0.0.1:8080";

async fn http_get(path: &str) -> std::io::Result<String> {
    let mut stream = TcpStream::connect(SERVER).await?;
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        path, SERVER
    );
    stream.write_all(request.as_bytes()).await?;

    let mut response = String::new();
    stream.read_to_string(&mut response).await?;
    Ok(response)
}

#[tokio::test]
#[ignore] // Needs a running server
async fn test_health_endpoint_responds() {
    let response = http_get("/health").await.expect("server not reachable");
    assert!(response.starts_with("HTTP/1.1 200"));
}

#[tokio::test]
#[ignore] // Heavy test - run explicitly
async fn test_cached_stats_sustained_load() {
    // Warm up
    let _ = http_get("/cache/stats").await.expect("server not reachable");

    let duration = Duration::from_secs(5);
    let start = Instant::now();
    let mut completed: u64 = 0;
    let mut failed: u64 = 0;

    while start.elapsed() < duration {
        match http_get("/cache/stats").await {
            Ok(response) if response.starts_with("HTTP/1.1 200") => completed += 1,
            _ => failed += 1,
        }
    }

    let qps = completed as f64 / start.elapsed().as_secs_f64();
    println!("Completed {} requests ({:.2} QPS, {} failed)", completed, qps, failed);

    assert_eq!(failed, 0, "No request may fail under sequential load");
    assert!(qps >= 100.0, "Cached stats should sustain at least 100 QPS");
}

#[tokio::test]
#[ignore] // Heavy test - run explicitly
async fn test_concurrent_readers_on_cached_group() {
    // Warm the cache once so every reader hits
    let _ = http_get("/resolve-all").await.expect("server not reachable");

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            tokio::spawn(async {
                let mut ok = 0u64;
                for _ in 0..100 {
                    if let Ok(response) = http_get("/resolve-all").await {
                        if response.starts_with("HTTP/1.1 200") {
                            ok += 1;
                        }
                    }
                }
                ok
            })
        })
        .collect();

    let mut total = 0;
    for task in tasks {
        total += task.await.unwrap();
    }

    assert_eq!(total, 800, "Every concurrent read should succeed");
}
