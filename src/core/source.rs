//! Purpose: Fetch and decode the remote word dictionary.
//! Exports: `fetch_source`, `decode_source`.
//! Role: The only network touchpoint; one blocking GET per run.
//! Invariants: No retries, no timeouts beyond the agent defaults, no auth headers.
//! Invariants: Non-2xx statuses, transport failures, and bad JSON all surface as `DataAcquisitionError`.
use std::io::Read;

use tracing::{debug, info};
use url::Url;

use crate::core::error::DataAcquisitionError;
use crate::core::words::SourceDictionary;
use crate::json::parse;

type SourceResult<T> = Result<T, DataAcquisitionError>;

pub fn fetch_source(agent: &ureq::Agent, source_url: &str) -> SourceResult<Vec<u8>> {
    let url = Url::parse(source_url).map_err(|err| {
        DataAcquisitionError::new()
            .with_message("invalid source url")
            .with_url(source_url)
            .with_source(err)
    })?;

    info!(url = %url, "fetching source dictionary");
    let response = match agent
        .request_url("GET", &url)
        .set("Accept", "application/json")
        .call()
    {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, _resp)) => {
            return Err(DataAcquisitionError::new()
                .with_message(format!("remote returned status {code}"))
                .with_url(url.as_str()));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(DataAcquisitionError::new()
                .with_message("request failed")
                .with_url(url.as_str())
                .with_source(err));
        }
    };

    // into_string() caps bodies at 10 MiB; the dictionary can exceed that.
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|err| {
            DataAcquisitionError::new()
                .with_message("failed to read response body")
                .with_url(url.as_str())
                .with_source(err)
        })?;
    debug!(bytes = body.len(), "source dictionary downloaded");
    Ok(body)
}

pub fn decode_source(body: &[u8]) -> SourceResult<SourceDictionary> {
    parse::from_slice::<SourceDictionary>(body).map_err(|err| {
        DataAcquisitionError::new()
            .with_message(format!(
                "invalid source dictionary json ({})",
                parse::describe_error(&err)
            ))
            .with_source(err)
    })
}
