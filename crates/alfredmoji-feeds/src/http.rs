//! Blocking HTTP source.

use tracing::info;

use crate::{split_lines, FetchError, LineSource};

/// Downloads a data file with a blocking GET. No timeout is set beyond the
/// transport's own defaults.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn http_error(&self, source: ureq::Error) -> FetchError {
        FetchError::Http {
            url: self.url.clone(),
            source,
        }
    }
}

impl LineSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_lines(&self) -> Result<Vec<String>, FetchError> {
        info!("Downloading file: {}", self.url);
        let response = ureq::get(&self.url).call().map_err(|err| self.http_error(err))?;
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|err| self.http_error(err))?;
        Ok(split_lines(&body))
    }
}
