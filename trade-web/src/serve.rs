//! Development static file server.
//!
//! Serves the built WASM bundle from dist/ on port 8080, falling back to
//! index.html for unknown paths so client-side routes deep-link correctly.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = match TcpListener::bind(addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    println!("TetherDesk dev server running at http://{addr}");
    println!("Serving from dist/");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {e}"),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split('?').next().unwrap_or("/");

    let file_path = resolve(path);
    let content_type = content_type_for(&file_path);

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", body, content_type),
        Err(_) => (
            "404 NOT FOUND",
            b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
            "text/html; charset=utf-8",
        ),
    };

    let headers = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );

    if stream.write_all(headers.as_bytes()).is_err() {
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write response body: {e}");
    }
    let _ = stream.flush();
}

/// Map a request path onto dist/, serving index.html for anything that is
/// not an existing file.
fn resolve(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }
    let mut file_path = PathBuf::from("dist");
    file_path.push(path.trim_start_matches('/'));
    if file_path.is_file() {
        file_path
    } else {
        PathBuf::from("dist/index.html")
    }
}

fn content_type_for(path: &PathBuf) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
