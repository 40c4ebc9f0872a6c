// src/fetch/mod.rs

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::FetchError;

/// GET `url` and return the body as text.
///
/// One attempt only: transport failures and non-2xx statuses both surface as
/// [`FetchError`].
#[instrument(level = "info", skip(client, url), fields(url = %url))]
pub async fn fetch_document(client: &Client, url: &Url) -> Result<String, FetchError> {
    debug!("sending GET");
    let request_failed = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let resp = client
        .get(url.clone())
        .send()
        .await
        .map_err(request_failed)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = resp.text().await.map_err(request_failed)?;
    debug!(bytes = body.len(), %status, "received document");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> Result<Url> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            // drain the request head before answering
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        Ok(Url::parse(&format!("http://{}/pub", addr))?)
    }

    #[tokio::test]
    async fn returns_body_on_success() -> Result<()> {
        let url = serve_once("200 OK", "<table><tr><td>0</td></tr></table>").await?;
        let body = fetch_document(&Client::new(), &url).await?;
        assert_eq!(body, "<table><tr><td>0</td></tr></table>");
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() -> Result<()> {
        let url = serve_once("404 Not Found", "gone").await?;
        let err = fetch_document(&Client::new(), &url).await.unwrap_err();
        match err {
            FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() -> Result<()> {
        // grab a free port, then close it so the connection is refused
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let url = Url::parse(&format!("http://{}/pub", addr))?;
        let err = fetch_document(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
        Ok(())
    }
}
