use crate::domain::service::RateGuard;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Counter-per-window admission check backed by Redis. One counter key
/// per window; the key expires on its own so idle buckets cost nothing.
pub struct RedisRateGuard {
    client: redis::Client,
    max_requests: i64,
    window: Duration,
}

impl RedisRateGuard {
    pub fn new(url: &str, max_requests: i64, window: Duration) -> anyhow::Result<Self> {
        Ok(RedisRateGuard {
            client: redis::Client::open(url)?,
            max_requests,
            window,
        })
    }
}

#[async_trait]
impl RateGuard for RedisRateGuard {
    async fn allow(&self, key: &str) -> anyhow::Result<bool> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let secs = self.window.as_secs().max(1);
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let window_key = format!("{}:{}", key, now / secs);

        let count: i64 = conn.incr(&window_key, 1_i64).await?;
        let _: bool = conn.expire(&window_key, (secs * 2) as i64).await?;

        Ok(count <= self.max_requests)
    }
}
