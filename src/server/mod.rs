use std::io::{Read, Write};
use std::net::TcpListener;

pub mod api;
pub mod routes;

/// Hard cap on a single request; anything larger is routed as received.
const MAX_REQUEST_BYTES: usize = 1_048_576;

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!("caddy server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

/// Byte offset just past the header/body separator, if it has arrived.
fn header_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|i| i + 4)
        .or_else(|| buffer.windows(2).position(|w| w == b"\n\n").map(|i| i + 2))
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Read one request and write one response. Keeps reading until the headers
/// and the declared Content-Length worth of body have arrived, so a POST body
/// split across TCP segments is not truncated mid-JSON.
fn handle_connection<S: Read + Write>(stream: &mut S) -> std::io::Result<()> {
    let mut buffer = Vec::with_capacity(16_384);
    let mut chunk = [0_u8; 16_384];
    loop {
        let bytes_read = stream.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..bytes_read]);
        if let Some(end) = header_end(&buffer) {
            let headers = String::from_utf8_lossy(&buffer[..end]);
            if buffer.len() >= end + content_length(&headers) {
                break;
            }
        }
        if buffer.len() > MAX_REQUEST_BYTES {
            break;
        }
    }
    if buffer.is_empty() {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer);
    let mut lines = request.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");

    let body = header_end(&buffer)
        .map(|end| String::from_utf8_lossy(&buffer[end..]).into_owned())
        .unwrap_or_default();

    let response = routes::route_request(method, path, &body).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}
