#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use mockito::{Matcher, Mock, ServerGuard};

pub fn posting_row(job_type: &str, date: &str, name: &str, location: &str) -> String {
    format!(
        r#"<tr>
            <td class="rsbuttons"><a href="view">View</a></td>
            <td class="rsbuttons"><a href="apply">Apply</a></td>
            <td>{job_type}</td><td>{date}</td><td>{name}</td><td>{location}</td>
        </tr>"#
    )
}

pub fn postings_page(rows: &[String]) -> String {
    format!(
        "<html><body><table id=\"postings\"><tr><th></th><th></th><th>Type</th><th>Posted</th><th>Title</th><th>Location</th></tr>{}</table></body></html>",
        rows.join("\n")
    )
}

pub fn query_for(code: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("APPLICATION_TYPE_ID".into(), code.into()),
        Matcher::UrlEncoded("COMPANY_ID".into(), "00009961".into()),
    ])
}

/// Serve `body` for one applicant type code at `/jobs`
pub fn mock_page(server: &mut ServerGuard, code: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/jobs")
        .match_query(query_for(code))
        .with_status(status)
        .with_body(body)
        .create()
}

pub fn jobs_url(server: &ServerGuard) -> String {
    format!("{}/jobs", server.url())
}

/// Plain TCP server on a random port: answers `serve_code` requests with
/// `body` and closes the connection on any other request without replying.
/// Returns the `/jobs` URL.
pub fn dropping_server(serve_code: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let serve_code = serve_code.to_string();
    let body = body.to_string();

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let serve_code = serve_code.clone();
            let body = body.clone();
            thread::spawn(move || answer_or_drop(stream, &serve_code, &body));
        }
    });

    format!("http://{}/jobs", addr)
}

fn answer_or_drop(mut stream: TcpStream, serve_code: &str, body: &str) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    if request.contains(&format!("APPLICATION_TYPE_ID={}", serve_code)) {
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
    }
    // dropping the stream closes the connection
}
