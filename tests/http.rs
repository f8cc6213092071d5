use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use assert_matches::assert_matches;

use tesseract_assets::error::FetchError;
use tesseract_assets::http::{AssetClient, HttpAssetClient};

/// Answers exactly one request with `status` and `body`, then closes.
fn serve_once(status: &'static str, body: Vec<u8>) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
    });
    (format!("http://{addr}/tesseract.min.js"), handle)
}

fn client() -> HttpAssetClient {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap();
    HttpAssetClient::from_client(client)
}

#[test]
fn streams_body_to_destination() {
    let body: Vec<u8> = (0..40_000u32).map(|i| (i % 256) as u8).collect();
    let (url, server) = serve_once("200 OK", body.clone());
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("tesseract.min.js");

    let written = client().download(&url, &dest).unwrap();
    server.join().unwrap();

    assert_eq!(written, body.len() as u64);
    assert_eq!(fs::read(&dest).unwrap(), body);
}

#[test]
fn error_status_leaves_no_file() {
    let (url, server) = serve_once("404 Not Found", b"missing".to_vec());
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("tesseract.min.js");

    let err = client().download(&url, &dest).unwrap_err();
    server.join().unwrap();

    assert_matches!(err, FetchError::Status { status: 404, .. });
    assert!(err.is_transient());
    assert!(!dest.exists());
}

#[test]
fn unreachable_host_is_transient() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("x.js");

    let err = client()
        .download(&format!("http://{addr}/x.js"), &dest)
        .unwrap_err();

    assert_matches!(err, FetchError::Http(_));
    assert!(!dest.exists());
}

#[test]
fn default_client_builds() {
    assert!(HttpAssetClient::new().is_ok());
}
