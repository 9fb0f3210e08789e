//! HttpTransport against a one-shot local HTTP server.

use std::io::ErrorKind;

use route_core::{AccountLookup, HttpTransport, RouteConfig, RouteTransport, TransportError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one request with a canned response. The join handle yields
/// the raw request text (lowercased) for assertions.
async fn start_single_response_server(status: &str, body: &'static str) -> Option<(String, JoinHandle<String>)> {
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(err) if err.kind() == ErrorKind::PermissionDenied => return None,
        Err(err) => panic!("failed to bind local test listener: {err}"),
    };
    let addr = listener.local_addr().unwrap();

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .into_bytes();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }
        let _ = socket.write_all(&response).await;
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&request).to_lowercase()
    });

    Some((format!("http://{addr}"), handle))
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn transport(base_url: &str, cookies: &'static str) -> HttpTransport<&'static str> {
    HttpTransport::new(RouteConfig::default().with_base_url(base_url), cookies)
}

#[tokio::test]
async fn test_submit_reading_sends_json_and_token() {
    let Some((base, server)) =
        start_single_response_server("200 OK", r#"{"message": "Lectura guardada", "completed": true}"#).await
    else {
        return;
    };

    let accepted = transport(&base, "sessionid=x; csrftoken=tok%3D1")
        .submit_reading("12", "345")
        .await
        .unwrap();
    assert_eq!(accepted.message, "Lectura guardada");

    let request = server.await.unwrap();
    assert!(request.starts_with("post /guardar-lectura/ http/1.1"));
    assert!(request.contains("content-type: application/json"));
    assert!(request.contains("x-csrftoken: tok=1"));
    assert!(request.contains(r#"{"accountid":"12","readingvalue":"345"}"#));
}

#[tokio::test]
async fn test_missing_cookie_omits_token_header() {
    let Some((base, server)) = start_single_response_server("200 OK", r#"{"message": "ok"}"#).await else {
        return;
    };

    transport(&base, "").submit_reading("1", "2").await.unwrap();

    let request = server.await.unwrap();
    assert!(!request.contains("x-csrftoken"));
}

#[tokio::test]
async fn test_server_error_message_is_verbatim() {
    let Some((base, _server)) =
        start_single_response_server("400 Bad Request", r#"{"error": "invalid value"}"#).await
    else {
        return;
    };

    let err = transport(&base, "csrftoken=t")
        .submit_reading("1", "abc")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransportError::Server {
            status: 400,
            message: Some("invalid value".to_string())
        }
    );
}

#[tokio::test]
async fn test_unparseable_error_body_is_malformed() {
    let Some((base, _server)) = start_single_response_server("500 Internal Server Error", "<h1>oops</h1>").await
    else {
        return;
    };

    let err = transport(&base, "csrftoken=t")
        .finalize_route("9")
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Malformed { status: 500, .. }));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_finalize_route_posts_route_id() {
    let Some((base, server)) =
        start_single_response_server("200 OK", r#"{"message": "Route closed", "redirectUrl": "/routes"}"#).await
    else {
        return;
    };

    let done = transport(&base, "csrftoken=t").finalize_route("9").await.unwrap();
    assert_eq!(done.message, "Route closed");
    assert_eq!(done.redirect(), Some("/routes"));

    let request = server.await.unwrap();
    assert!(request.starts_with("post /finalizar-ruta/ http/1.1"));
    assert!(request.contains(r#"{"routeid":"9"}"#));
}

#[tokio::test]
async fn test_lookup_sends_contract_query() {
    let Some((base, server)) = start_single_response_server(
        "200 OK",
        r#"{"found": true, "contrato": "A-17", "nombre": "Ana Ruiz"}"#,
    )
    .await
    else {
        return;
    };

    let found = transport(&base, "").lookup_account("A-17").await.unwrap();
    assert_eq!(
        found,
        AccountLookup::Found {
            contract: "A-17".to_string(),
            name: "Ana Ruiz".to_string()
        }
    );

    let request = server.await.unwrap();
    assert!(request.starts_with("get /buscar-usuario/?contrato=a-17 http/1.1"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // bind then drop to get a port with nothing listening
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(_) => return,
    };
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = transport(&format!("http://{addr}"), "")
        .submit_reading("1", "2")
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}
