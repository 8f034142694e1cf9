use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use hello_eks::{app, state::AppState};

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn serves_routes_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(app::serve(
        listener,
        app::build_router(AppState::new()),
        async move {
            let _ = shutdown_rx.await;
        },
    ));

    let health = raw_get(addr, "/health").await;
    assert!(health.starts_with("HTTP/1.1 200 OK"), "{health}");
    assert!(health.ends_with("\r\n\r\nUP"), "{health}");

    let hello = raw_get(addr, "/").await;
    assert!(hello.starts_with("HTTP/1.1 200 OK"));
    assert!(hello.contains("Hello"));

    let info = raw_get(addr, "/info").await;
    assert!(info.starts_with("HTTP/1.1 200 OK"));
    assert!(info.contains("AT2"));

    let missing = raw_get(addr, "/missing").await;
    assert!(missing.starts_with("HTTP/1.1 404"), "{missing}");

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
