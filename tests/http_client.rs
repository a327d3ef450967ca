//! `FuelHttp` against a local canned-response server.

use std::sync::{Arc, Mutex};

use fuel_order_sdk::prelude::*;
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves `responses` in order, one per connection, and records request bodies.
async fn serve(responses: Vec<(u16, String)>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&bodies);

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            sink.lock().unwrap().push(request);

            let reply = format!(
                "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
    });

    (format!("http://{addr}"), bodies)
}

/// Reads one request and returns its body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return String::from_utf8_lossy(&buf[end + 4..end + 4 + length]).into_owned();
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request() -> QuoteRequest {
    QuoteRequest {
        product_id: ProductId::new(12),
        quantity: 1500.0,
        postal_code: PostalCode::new("4990"),
        is_ul: true,
    }
}

fn ok(body: Value) -> (u16, String) {
    (200, body.to_string())
}

#[tokio::test]
async fn posts_json_rpc_envelope_and_reads_quote() {
    let (url, bodies) = serve(vec![ok(json!({
        "jsonrpc": "2.0",
        "id": null,
        "result": {"formatted_price": "1.234,50 €", "quantity": 1500.0, "product_id": 12}
    }))])
    .await;
    let http = FuelHttp::new(&url).unwrap();

    let response = assert_ok!(http.fetch_quote(&request()).await);

    match response {
        QuoteResponse::Quoted(quote) => {
            assert_eq!(quote.formatted_price, "1.234,50 €");
            assert_eq!(quote.product_id, ProductId::new(12));
        }
        other => panic!("expected quote, got {other:?}"),
    }

    let sent: Value = serde_json::from_str(&bodies.lock().unwrap()[0]).unwrap();
    assert_eq!(sent["jsonrpc"], "2.0");
    assert_eq!(sent["method"], "call");
    assert_eq!(sent["params"]["product_id"], 12);
    assert_eq!(sent["params"]["postal_code"], "4990");
    assert_eq!(sent["params"]["ul"], true);
}

#[tokio::test]
async fn rejection_passes_through() {
    let (url, _) = serve(vec![ok(json!({
        "result": {"error": "Minimum 500 L.", "error_type": "quantity"}
    }))])
    .await;
    let http = FuelHttp::new(&url).unwrap();

    let response = assert_ok!(http.fetch_quote(&request()).await);

    assert_eq!(
        response,
        QuoteResponse::Rejected(QuoteRejection {
            kind: RejectionKind::Quantity,
            message: "Minimum 500 L.".into(),
        })
    );
}

#[tokio::test]
async fn missing_result_is_malformed_not_transport() {
    let (url, _) = serve(vec![ok(json!({"jsonrpc": "2.0", "id": null}))]).await;
    let http = FuelHttp::new(&url).unwrap();

    let err = assert_err!(http.fetch_quote(&request()).await);

    assert!(matches!(err, SdkError::MalformedResponse(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn rpc_error_object_surfaces() {
    let (url, _) = serve(vec![ok(json!({
        "jsonrpc": "2.0",
        "error": {"code": 100, "message": "Session expired"}
    }))])
    .await;
    let http = FuelHttp::new(&url).unwrap();

    let err = assert_err!(http.fetch_quote(&request()).await);

    assert!(matches!(err, SdkError::Rpc { code: 100, .. }));
}

#[tokio::test]
async fn non_json_body_is_not_transport() {
    let (url, _) = serve(vec![(200, "<html>maintenance</html>".to_string())]).await;
    let http = FuelHttp::new(&url).unwrap();

    let err = assert_err!(http.fetch_quote(&request()).await);

    assert!(!err.is_transport(), "{err:?}");
}

#[tokio::test]
async fn server_error_without_retry() {
    let (url, bodies) = serve(vec![(502, "bad gateway".to_string())]).await;
    let http = FuelHttp::new(&url).unwrap();

    let err = assert_err!(http.fetch_quote(&request()).await);

    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 502, .. })
    ));
    assert!(err.is_transport());
    assert_eq!(bodies.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn transient_policy_retries_gateway_errors() {
    let (url, bodies) = serve(vec![
        (503, "busy".to_string()),
        ok(json!({"result": {"formatted_price": "9 €", "quantity": 1500.0, "product_id": 12}})),
    ])
    .await;
    let client = FuelClient::builder()
        .base_url(&url)
        .price_retry(RetryPolicy::Transient)
        .build()
        .unwrap();

    let response = assert_ok!(client.quotes().get(&request()).await);

    assert!(matches!(response, QuoteResponse::Quoted(_)));
    assert_eq!(bodies.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn closed_port_is_transport() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let http = FuelHttp::new(&format!("http://{addr}")).unwrap();

    let err = assert_err!(http.fetch_quote(&request()).await);

    assert!(err.is_transport(), "{err:?}");
}
