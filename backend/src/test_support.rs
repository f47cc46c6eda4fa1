//! Stand-in for the inference service, served by a real actix-web server on
//! an ephemeral port so the gateway talks to it over HTTP.

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use crate::config::GatewayConfig;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: u16,
    body: String,
}

pub struct FakeUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: ServerHandle,
}

impl FakeUpstream {
    /// Answers every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            requests: requests.clone(),
            status,
            body: body.to_string(),
        };

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .default_service(web::to(record))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn record(req: HttpRequest, body: web::Bytes, state: web::Data<FakeState>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        api_key: header("x-api-key"),
        content_type: header("content-type"),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    HttpResponse::build(StatusCode::from_u16(state.status).unwrap())
        .content_type("application/json")
        .body(state.body.clone())
}

/// An address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn config_for(base_url: &str) -> GatewayConfig {
    let base_url = base_url.to_string();
    GatewayConfig::from_lookup(move |name| match name {
        "UPSTREAM_API_KEY" => Some("test-key".to_string()),
        "UPSTREAM_BASE_URL" => Some(base_url.clone()),
        "UPSTREAM_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .unwrap()
}
