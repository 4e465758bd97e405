//! End-to-end connectivity runs against an in-process mock backend.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use agriverse_tools::connectivity::{scenario, Config};

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
}

type Responder = dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync;

/// Minimal HTTP/1.1 server that records every request it sees and answers
/// with whatever the responder decides. Lives in a background thread for
/// the duration of the test process.
struct MockBackend {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    fn start(responder: Arc<Responder>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let responder = Arc::clone(&responder);
                let recorded = Arc::clone(&recorded);
                thread::spawn(move || handle(stream, responder, recorded));
            }
        });

        MockBackend { url, requests }
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(
    mut stream: TcpStream,
    responder: Arc<Responder>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
) {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    }

    let head_end = raw.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
    let head = String::from_utf8_lossy(&raw[..head_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_lowercase(), value.trim().to_string()))
        })
        .collect();

    // Drain the body so the client never sees a reset mid-write.
    let content_length: usize = headers
        .iter()
        .find(|(name, _)| name == "content-length")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(0);
    let mut body_read = raw.len() - head_end;
    while body_read < content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => body_read += n,
        }
    }

    let request = RecordedRequest {
        method,
        path,
        headers,
    };
    let (status, body) = responder(&request);
    recorded.lock().unwrap().push(request);

    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn config_for(server: &MockBackend) -> Config {
    Config {
        backend_url: server.url.clone(),
        frontend_url: server.url.clone(),
        timeout: Duration::from_secs(5),
        verbose: false,
    }
}

#[test]
fn healthy_backend_passes_all_fourteen_probes() {
    let server = MockBackend::start(Arc::new(|request: &RecordedRequest| {
        if request.path == "/api/auth/login" {
            (200, r#"{"data":{"token":"abc123"}}"#.to_string())
        } else {
            (200, r#"{"code":200,"data":null}"#.to_string())
        }
    }));

    let summary = scenario::run(&config_for(&server)).unwrap();

    assert_eq!(summary.total, 14);
    assert_eq!(summary.passed, 14);
    assert_eq!(summary.failed, 0);
    assert_eq!(server.requests().len(), 14);
}

#[test]
fn login_token_is_sent_as_bearer_on_later_probes() {
    let server = MockBackend::start(Arc::new(|request: &RecordedRequest| {
        if request.path == "/api/auth/login" {
            (200, r#"{"data":{"token":"abc123"}}"#.to_string())
        } else {
            (200, "{}".to_string())
        }
    }));

    scenario::run(&config_for(&server)).unwrap();

    let requests = server.requests();
    let farmer_list = requests
        .iter()
        .find(|r| r.path.starts_with("/api/farmer/products/list"))
        .expect("farmer list probe was never sent");
    let auth = farmer_list
        .headers
        .iter()
        .find(|(name, _)| name == "authorization")
        .expect("farmer probe went out without an Authorization header");
    assert_eq!(auth.1, "Bearer abc123");

    // Probes before login carry no token.
    let send_code = requests
        .iter()
        .find(|r| r.path == "/api/auth/send-code")
        .unwrap();
    assert!(!send_code
        .headers
        .iter()
        .any(|(name, _)| name == "authorization"));
    assert_eq!(send_code.method, "POST");
}

#[test]
fn unhealthy_backend_aborts_after_the_first_probe() {
    let server = MockBackend::start(Arc::new(|_: &RecordedRequest| {
        (404, r#"{"message":"not found"}"#.to_string())
    }));

    let summary = scenario::run(&config_for(&server)).unwrap();

    // Only the backend health check ran; nothing else was attempted.
    assert_eq!(summary.total, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(server.requests().len(), 1);
    assert_eq!(summary.results[0].name, "Backend health check");
    assert!(!summary.results[0].passed);
}

#[test]
fn rejected_login_keeps_the_run_going_without_a_token() {
    let server = MockBackend::start(Arc::new(|request: &RecordedRequest| {
        if request.path == "/api/auth/login" {
            (401, r#"{"message":"bad credentials"}"#.to_string())
        } else {
            (200, "{}".to_string())
        }
    }));

    let summary = scenario::run(&config_for(&server)).unwrap();

    // 401 is on the login allow-list, so the whole run still passes.
    assert_eq!(summary.total, 14);
    assert_eq!(summary.failed, 0);

    let requests = server.requests();
    let farmer_list = requests
        .iter()
        .find(|r| r.path.starts_with("/api/farmer/products/list"))
        .unwrap();
    assert!(!farmer_list
        .headers
        .iter()
        .any(|(name, _)| name == "authorization"));
}

#[test]
fn unreachable_endpoint_is_recorded_with_the_zero_sentinel() {
    // Bind then drop so the port is free but refuses connections.
    let dead_port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let server = MockBackend::start(Arc::new(|_: &RecordedRequest| {
        (200, "{}".to_string())
    }));

    let config = Config {
        backend_url: server.url.clone(),
        frontend_url: format!("http://127.0.0.1:{}", dead_port),
        timeout: Duration::from_secs(5),
        verbose: false,
    };

    let summary = scenario::run(&config).unwrap();

    let frontend = summary
        .results
        .iter()
        .find(|r| r.name == "Frontend health check")
        .unwrap();
    assert!(!frontend.passed);
    assert_eq!(frontend.status_code, 0);

    // A dead frontend never aborts the run.
    assert_eq!(summary.total, 14);
    assert_eq!(summary.failed, 1);
}
