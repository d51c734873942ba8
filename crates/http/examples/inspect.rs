//! Reads a request or response preamble from stdin and prints what the parser sees.
//!
//! ```sh
//! printf 'GET /search?q=a%%20b HTTP/1.1\r\nHost: localhost\r\n\r\n' | cargo run --example inspect
//! ```

use std::io::Read;

use micro_http_parser::{HttpVersion, PreambleParser};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut input = Vec::new();
    if let Err(e) = std::io::stdin().read_to_end(&mut input) {
        error!(cause = %e, "failed to read stdin");
        return;
    }

    let parser = PreambleParser::new();

    if input.starts_with(b"HTTP/") {
        match parser.parse_response(input) {
            Ok(head) => {
                info!(status = head.status(), reason = %String::from_utf8_lossy(head.reason()), "response");
                for (name, value) in head.headers().iter() {
                    info!(%name, value = %String::from_utf8_lossy(value), "header");
                }
            }
            Err(e) => error!(cause = %e, "invalid response preamble"),
        }
        return;
    }

    let head = match parser.parse_request(input) {
        Ok(head) => head,
        Err(e) => {
            error!(cause = %e, "invalid request preamble");
            return;
        }
    };

    info!(method = %head.method(), path = %String::from_utf8_lossy(head.path()), "request");
    match parser.parse_path(head.path()) {
        Ok((path, query)) => {
            info!(path = %String::from_utf8_lossy(&path), "decoded target");
            for (key, value) in query.iter() {
                info!(key, values = ?value.iter().collect::<Vec<_>>(), "query parameter");
            }
        }
        Err(e) => error!(cause = %e, "invalid query string"),
    }
    for (name, value) in head.headers().iter() {
        info!(%name, value = %String::from_utf8_lossy(value), "header");
    }

    match head.into_http(HttpVersion::Http11) {
        Ok(request) => info!(uri = %request.uri(), "converted to http::Request"),
        Err(e) => error!(cause = %e, "conversion to http::Request failed"),
    }
}
