use std::error::Error;
use std::fs;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use siteforge::config::ServerSection;
use siteforge::server::{DevServer, ServerHandle};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn serves_built_output_from_dist() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::create_dir_all(tmp.path().join("dist"))?;
    fs::write(tmp.path().join("dist/index.html"), "<h1>hello</h1>")?;

    // Port 0 lets the OS pick a free port for the test.
    let cfg = ServerSection { port: 0 };
    let server = DevServer::start(tmp.path(), &cfg, ServerHandle::new()).await?;
    let addr = server.addr();
    assert_ne!(addr.port(), 0);

    let mut stream = TcpStream::connect(addr).await?;
    stream
        .write_all(b"GET /index.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await?;

    let mut response = String::new();
    stream.read_to_string(&mut response).await?;
    assert!(response.starts_with("HTTP/1.1 200"), "response: {response}");
    assert!(response.contains("<h1>hello</h1>"), "response: {response}");
    Ok(())
}

#[tokio::test]
async fn occupied_port_is_a_startup_error() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::create_dir_all(tmp.path().join("dist"))?;

    let taken = std::net::TcpListener::bind("127.0.0.1:0")?;
    let cfg = ServerSection {
        port: taken.local_addr()?.port(),
    };

    let result = DevServer::start(tmp.path(), &cfg, ServerHandle::new()).await;
    assert!(result.is_err());
    Ok(())
}
