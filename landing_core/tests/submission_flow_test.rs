use landing_core::{
    config::{SubmissionConfig, TransportTarget},
    create_app, AppState, DeliveryOutcome, DemoForm, DemoFormFields, FormField, HttpTransport,
    SiteConfig, SubmissionStatus, SubmissionTransport,
};
use axum::{
    extract::State,
    http::{header::ACCEPT, HeaderMap},
    routing::post,
    Router,
};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

type SeenAccept = Arc<Mutex<Vec<Option<String>>>>;

async fn spawn_site() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // The served app relays to itself; its own transport is never used here.
    let placeholder = HttpTransport::new(&config_for(addr)).unwrap();
    let app = create_app(AppState::new(SiteConfig::chainworks(), Arc::new(placeholder)));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// A forms endpoint that records the `Accept` header of every POST it receives.
async fn spawn_capture() -> (SocketAddr, SeenAccept) {
    async fn record(State(seen): State<SeenAccept>, headers: HeaderMap) -> &'static str {
        let accept = headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.lock().unwrap().push(accept);
        "{}"
    }

    let seen = SeenAccept::default();
    let app = Router::new()
        .route("/f/demo", post(record))
        .with_state(seen.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, seen)
}

async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn config_for(addr: SocketAddr) -> SubmissionConfig {
    SubmissionConfig {
        endpoint: Some(format!("http://{}/api/request-demo", addr)),
        target: TransportTarget::RouteHandler,
        timeout_seconds: 5,
        log_payloads: false,
    }
}

fn asha() -> DemoFormFields {
    DemoFormFields::new("Asha", "asha@example.com", "9999999999", "Tell me more")
}

#[tokio::test]
async fn test_happy_path_against_route_stub() {
    let addr = spawn_site().await;
    let transport = Arc::new(HttpTransport::new(&config_for(addr)).unwrap());

    let mut form = DemoForm::new("Supply Chain DApp", transport);
    form.fill(asha());
    assert_eq!(form.status(), SubmissionStatus::Idle);

    let status = form.submit().await;

    assert_eq!(status, SubmissionStatus::Success);
    for field in FormField::ALL {
        assert_eq!(form.state().fields.get(field), "");
    }
    assert_eq!(form.state().project, "Supply Chain DApp");
}

#[tokio::test]
async fn test_transport_outage_preserves_fields() {
    let addr = closed_port().await;
    let transport = Arc::new(HttpTransport::new(&config_for(addr)).unwrap());

    let mut form = DemoForm::new("Supply Chain DApp", transport);
    form.fill(asha());

    let status = form.submit().await;

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(form.state().fields, asha());
    assert!(form.state().can_submit());
}

#[tokio::test]
async fn test_non_2xx_is_a_failure() {
    let addr = spawn_site().await;
    let mut config = config_for(addr);
    config.endpoint = Some(format!("http://{}/api/does-not-exist", addr));
    let transport = HttpTransport::new(&config).unwrap();

    let request = landing_core::build_payload(&asha(), "Supply Chain DApp");
    let outcome = transport.deliver(&request).await;

    assert_eq!(outcome, DeliveryOutcome::Rejected { status: 404 });
}

#[tokio::test]
async fn test_hosted_forms_target_posts_json() {
    let addr = spawn_site().await;
    let mut config = config_for(addr);
    config.target = TransportTarget::HostedForms;
    let transport = HttpTransport::new(&config).unwrap();

    let request = landing_core::build_payload(&asha(), "NFT Ticketing");
    let outcome = transport.deliver(&request).await;

    assert_eq!(outcome, DeliveryOutcome::Delivered { status: 200 });
}

#[tokio::test]
async fn test_accept_header_depends_on_target() {
    let (addr, seen) = spawn_capture().await;
    let request = landing_core::build_payload(&asha(), "NFT Ticketing");

    let mut config = config_for(addr);
    config.endpoint = Some(format!("http://{}/f/demo", addr));

    config.target = TransportTarget::HostedForms;
    let hosted = HttpTransport::new(&config).unwrap();
    assert!(hosted.deliver(&request).await.is_success());

    config.target = TransportTarget::RouteHandler;
    let own_route = HttpTransport::new(&config).unwrap();
    assert!(own_route.deliver(&request).await.is_success());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].as_deref(), Some("application/json"));
    assert_ne!(seen[1].as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_independent_forms_submit_concurrently() {
    let addr = spawn_site().await;
    let transport: Arc<dyn SubmissionTransport> =
        Arc::new(HttpTransport::new(&config_for(addr)).unwrap());

    let handles: Vec<_> = ["Supply Chain DApp", "DeFi Lending Protocol", "NFT Ticketing"]
        .into_iter()
        .map(|project| {
            let transport = transport.clone();
            tokio::spawn(async move {
                let mut form = DemoForm::new(project, transport);
                form.fill(asha());
                form.submit().await
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), SubmissionStatus::Success);
    }
}

#[tokio::test]
async fn test_server_relay_end_to_end() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let relay_transport = HttpTransport::new(&config_for(addr)).unwrap();
    let app = create_app(AppState::new(SiteConfig::chainworks(), Arc::new(relay_transport)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let response = reqwest::Client::new()
        .post(format!("http://{}/api/projects/nft-ticketing/request-demo", addr))
        .json(&asha())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["project"], "NFT Ticketing");
}
