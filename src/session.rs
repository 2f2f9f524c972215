// src/session.rs
use crate::types::SubenumError;
use log::debug;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client used to check whether a domain answers at all.
#[derive(Clone)]
pub struct Session {
    pub client: Client,
}

impl Session {
    pub fn new(timeout: Duration) -> Result<Self, SubenumError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()?;

        Ok(Session { client })
    }

    /// GET `http://<domain>` and return the status code, or `None` if the
    /// request could not be completed.
    pub async fn ping(&self, domain: &str) -> Option<u16> {
        let url = format!("http://{}", domain);
        match self.client.get(&url).send().await {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => {
                debug!("Ping to {} failed: {}", url, e);
                None
            }
        }
    }
}

pub async fn ping_domain(domain: &str) -> Option<u16> {
    match Session::new(DEFAULT_PING_TIMEOUT) {
        Ok(session) => session.ping(domain).await,
        Err(e) => {
            debug!("Could not build HTTP client: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_returns_status_code() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/").with_status(403).create_async().await;

        let host = server.host_with_port();
        assert_eq!(ping_domain(&host).await, Some(403));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ping_unreachable_host_returns_none() {
        let session = Session::new(Duration::from_millis(500)).unwrap();
        // Port 9 on localhost is the discard service and is not normally listening.
        assert_eq!(session.ping("127.0.0.1:9").await, None);
    }
}
