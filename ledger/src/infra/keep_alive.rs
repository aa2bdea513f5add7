use std::time::Duration;

/// Periodic GET against the deployed API so the hosting platform does not
/// put the service and its database connection to sleep between visits.
pub struct KeepAlive {
    url: String,
    interval: Duration,
    client: reqwest::Client,
}

impl KeepAlive {
    pub fn new(url: String, interval: Duration) -> KeepAlive {
        KeepAlive {
            url,
            interval,
            client: reqwest::Client::new(),
        }
    }

    pub async fn run(self) {
        let mut timer = tokio::time::interval(self.interval);
        // the first tick completes immediately, swallow it
        timer.tick().await;

        loop {
            timer.tick().await;
            match self.client.get(&self.url).send().await {
                Ok(resp) if resp.status() == reqwest::StatusCode::OK => {
                    log::info!("GET request sent successfully");
                }
                Ok(resp) => {
                    log::warn!(status = resp.status().as_u16(); "GET request failed");
                }
                Err(err) => {
                    log::error!(err:? = err; "Error while sending request");
                }
            }
        }
    }
}
