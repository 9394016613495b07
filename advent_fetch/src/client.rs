use std::time::Duration;

use advent_config::Config;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{COOKIE, USER_AGENT};
use tracing::{debug, info, warn};
use url::Url;

use crate::{Day, Error, InputSource, Result};

/// HTTP source for puzzle inputs.
///
/// Sends one GET per call with the session credential as the only cookie.
/// No retries: a failed request is returned to the caller as-is.
pub struct AocClient {
    client: Client,
    base_url: Url,
    session: String,
    user_agent: String,
}

impl AocClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(Error::Client)?;

        Self::with_client(client, config)
    }

    /// Use a preconfigured `reqwest::Client` instead of building one from
    /// the config timeout.
    pub fn with_client(client: Client, config: &Config) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|source| Error::InvalidUrl {
            url: config.base_url.clone(),
            source,
        })?;

        // Url::join drops the last path segment unless it ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            session: config.session.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// `{base_url}/{year}/day/{day}/input`, day not padded.
    pub fn input_url(&self, year: u16, day: Day) -> Result<Url> {
        let path = format!("{year}/day/{}/input", day.number());
        self.base_url
            .join(&path)
            .map_err(|source| Error::InvalidUrl { url: path, source })
    }
}

#[async_trait]
impl InputSource for AocClient {
    async fn fetch(&self, year: u16, day: Day) -> Result<Vec<u8>> {
        let url = self.input_url(year, day)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .header(COOKIE, format!("session={}", self.session))
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // The body of an error page is only used for the message.
            let body = response.text().await.unwrap_or_default();
            let message = body.lines().next().unwrap_or_default().trim().to_string();
            warn!("Input request for day {day} returned {status}");
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        info!("Fetched {} bytes for {year} day {day}", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_config::EnvFile;

    fn config(extra: &str) -> Config {
        let env =
            EnvFile::parse(&format!("AOC_SESSION_ID=secret\nAOC_YEAR=2022\n{extra}")).unwrap();
        Config::from_env_file(&env).unwrap()
    }

    #[test]
    fn builds_default_input_url() {
        let client = AocClient::new(&config("")).unwrap();
        let url = client.input_url(2022, Day::new(3).unwrap()).unwrap();
        assert_eq!(url.as_str(), "https://adventofcode.com/2022/day/3/input");
    }

    #[test]
    fn keeps_base_url_path_prefix() {
        let client = AocClient::new(&config("AOC_BASE_URL=http://localhost:9000/mirror")).unwrap();
        let url = client.input_url(2019, Day::new(22).unwrap()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/mirror/2019/day/22/input");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let mut config = config("");
        config.base_url = "::not a url::".to_string();
        assert!(matches!(
            AocClient::new(&config),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
