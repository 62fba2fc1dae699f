use tracing::debug;
use url::Url;

use crate::backend::ApiError;
use crate::models::Song;

/// Parses a backend base URL, normalising it so relative joins keep its path.
pub fn backend_base(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Ok(Url::parse(&format!("{}/", trimmed))?)
}

/// Site-relative link to the lyrics detail view of a song.
pub fn lyrics_path(song_id: &str) -> String {
    format!("/lyrics/{}", urlencoding::encode(song_id))
}

/// Resolves a site-relative link against the backend base URL.
pub fn resolve_link(base: &Url, path: &str) -> Result<Url, ApiError> {
    Ok(base.join(path.trim_start_matches('/'))?)
}

// Percent-encodes the whole query as a single parameter (space is %20, not +)
pub fn search_url(base: &Url, query: &str) -> Result<Url, ApiError> {
    let mut url = base.join("search")?;
    url.set_query(Some(&format!("query={}", urlencoding::encode(query))));
    Ok(url)
}

/// Handle to the search backend. Cheap to clone into tasks.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base: Url,
}

impl BackendClient {
    pub fn new(base: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub async fn search_songs(&self, query: &str) -> Result<Vec<Song>, ApiError> {
        let url = search_url(&self.base, query)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ApiError::Status(status, error_text));
        }

        let body = response.text().await?;
        let songs = serde_json::from_str::<Vec<Song>>(&body)?;
        Ok(songs)
    }
}

#[cfg(test)]
mod tests {
    use super::{BackendClient, backend_base, lyrics_path, resolve_link, search_url};
    use crate::backend::ApiError;
    use crate::models::Song;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use url::Url;

    // Serves exactly one canned response and yields the request line it saw
    async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.expect("read request");
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            let _ = socket.shutdown().await;
            request.lines().next().unwrap_or_default().to_string()
        });
        let base = backend_base(&format!("http://{}", addr)).expect("valid base");
        (base, handle)
    }

    fn test_client(base: Url) -> BackendClient {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client builds");
        BackendClient::with_client(client, base)
    }

    #[test]
    fn test_search_url_percent_encodes_query() {
        let base = backend_base("http://localhost:5000").expect("valid base");
        let url = search_url(&base, "piano & voice/ü").expect("valid url");
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/search?query=piano%20%26%20voice%2F%C3%BC"
        );
    }

    #[test]
    fn test_base_path_is_preserved() {
        let base = backend_base("http://example.com/app/").expect("valid base");
        let url = search_url(&base, "x").expect("valid url");
        assert_eq!(url.as_str(), "http://example.com/app/search?query=x");
        let link = resolve_link(&base, &lyrics_path("42")).expect("valid url");
        assert_eq!(link.as_str(), "http://example.com/app/lyrics/42");
    }

    #[test]
    fn test_lyrics_path_encodes_id() {
        assert_eq!(lyrics_path("1"), "/lyrics/1");
        assert_eq!(lyrics_path("a/b c"), "/lyrics/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        assert!(matches!(backend_base("not a url"), Err(ApiError::Url(_))));
    }

    #[tokio::test]
    async fn test_search_songs_decodes_results() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"id":"1","title":"Clair de Lune","artist":"Debussy","album":"Suite"}]"#,
        )
        .await;

        let songs = test_client(base)
            .search_songs("clair de lune")
            .await
            .expect("search succeeds");
        assert_eq!(songs, vec![Song::new("1", "Clair de Lune", "Debussy", "Suite")]);

        let request_line = server.await.expect("server task");
        assert_eq!(request_line, "GET /search?query=clair%20de%20lune HTTP/1.1");
    }

    #[tokio::test]
    async fn test_search_songs_accepts_empty_array() {
        let (base, _server) = serve_once("HTTP/1.1 200 OK", "[]").await;
        let songs = test_client(base).search_songs("zzz").await.expect("search succeeds");
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn test_search_songs_reports_bad_status() {
        let (base, _server) = serve_once("HTTP/1.1 500 Internal Server Error", "boom").await;
        let err = test_client(base).search_songs("piano").await.unwrap_err();
        assert!(matches!(err, ApiError::Status(status, _) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_search_songs_reports_undecodable_body() {
        let (base, _server) = serve_once("HTTP/1.1 200 OK", "<html>oops</html>").await;
        let err = test_client(base).search_songs("piano").await.unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }
}
