//! HTTP reachability probe

use std::thread;
use std::time::Duration;

use crate::config::VerifyConfig;
use crate::domain::ports::{ProbeError, ReachabilityProbe};
use crate::domain::value_objects::DeployUrl;

/// Polls a URL with plain GETs until it answers 2xx or attempts run out
#[derive(Debug, Clone, Copy)]
pub struct HttpProbe {
    attempts: u32,
    interval: Duration,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(config: VerifyConfig) -> Self {
        Self {
            attempts: config.attempts.max(1),
            interval: Duration::from_secs(config.interval_secs),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl ReachabilityProbe for HttpProbe {
    fn probe(&self, url: &DeployUrl) -> Result<u16, ProbeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("dashctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Unreachable(format!("HTTP client error: {e}")))?;

        let mut last = ProbeError::Unreachable("no attempt made".to_string());
        for attempt in 1..=self.attempts {
            if attempt > 1 {
                thread::sleep(self.interval);
            }
            match client.get(url.as_string()).send() {
                Ok(response) if response.status().is_success() => {
                    return Ok(response.status().as_u16());
                }
                Ok(response) => last = ProbeError::Status(response.status().as_u16()),
                Err(e) => last = ProbeError::Unreachable(e.to_string()),
            }
        }
        Err(last)
    }
}
