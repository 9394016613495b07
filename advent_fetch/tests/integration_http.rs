//! Integration tests for `AocClient` against a one-shot local HTTP responder.
//!
//! These tests verify that:
//! - the request path embeds year and unpadded day
//! - the session credential is sent as the only cookie
//! - non-2xx answers become `Error::Status`
//! - connection failures become `Error::Transport`

use std::path::PathBuf;

use advent_config::{Config, EnvFile};
use advent_fetch::{AocClient, Day, Error, InputSource, fetch_input};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept one connection, answer with `status_line` and `body`, and return
/// the raw request head.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "{status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}

fn config(base_url: &str, inputs: &std::path::Path) -> Config {
    let env = EnvFile::parse(&format!(
        "AOC_SESSION_ID=0123456789abcdef\n\
         AOC_YEAR=2022\n\
         AOC_BASE_URL={base_url}\n\
         AOC_INPUTS_DIR={}\n\
         AOC_USER_AGENT=advent-tests",
        inputs.display()
    ))
    .unwrap();
    Config::from_env_file(&env).unwrap()
}

fn client(config: &Config) -> AocClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    AocClient::with_client(http, config).unwrap()
}

fn temp_inputs() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("advent_http_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_request_carries_session_cookie() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "1721\n979\n366\n").await;
    let inputs = temp_inputs();
    let config = config(&base_url, &inputs);

    let body = client(&config)
        .fetch(2022, Day::new(3).unwrap())
        .await
        .unwrap();
    assert_eq!(body, b"1721\n979\n366\n");

    let request = server.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /2022/day/3/input http/1.1\r\n"), "{request}");
    assert!(request.contains("cookie: session=0123456789abcdef\r\n"), "{request}");
    assert_eq!(request.matches("cookie:").count(), 1);
    assert!(request.contains("user-agent: advent-tests\r\n"), "{request}");

    let _ = std::fs::remove_dir_all(&inputs);
}

#[tokio::test]
async fn test_fetch_input_saves_response_body() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "A Y\nB X\nC Z\n").await;
    let inputs = temp_inputs();
    let config = config(&base_url, &inputs);

    let path = fetch_input(&client(&config), &config, Day::new(2).unwrap())
        .await
        .unwrap();
    assert_eq!(path, inputs.join("02.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "A Y\nB X\nC Z\n");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /2022/day/2/input "), "{request}");

    let _ = std::fs::remove_dir_all(&inputs);
}

#[tokio::test]
async fn test_non_success_status_is_reported_and_not_saved() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 400 Bad Request",
        "Puzzle inputs differ by user.  Please log in to get your puzzle input.\n",
    )
    .await;
    let inputs = temp_inputs();
    let config = config(&base_url, &inputs);

    let err = fetch_input(&client(&config), &config, Day::new(1).unwrap())
        .await
        .unwrap_err();
    match err {
        Error::Status {
            status, message, ..
        } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("Puzzle inputs differ by user."));
        }
        other => panic!("expected a status error, got {other}"),
    }
    assert!(!inputs.join("01.txt").exists());

    server.await.unwrap();
    let _ = std::fs::remove_dir_all(&inputs);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let inputs = temp_inputs();
    let config = config(&format!("http://{addr}"), &inputs);

    let err = client(&config)
        .fetch(2022, Day::new(10).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport { .. }), "{err}");

    let _ = std::fs::remove_dir_all(&inputs);
}
