use std::{
    env,
    io::{self, Write},
    net::SocketAddr,
    path::PathBuf,
    time::Instant,
};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response},
    middleware::Next,
};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Environment: dev or prod
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("TERMFOLIO_ENV")
            .or_else(|_| env::var("RUST_ENV"))
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }
}

fn log_file_path() -> PathBuf {
    env::var("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("logs/access.log"))
}

/// Append-mode file writer for the access log layer.
#[derive(Clone)]
struct AccessLogWriter {
    path: PathBuf,
}

impl AccessLogWriter {
    fn new(path: PathBuf) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }
}

impl Write for AccessLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for AccessLogWriter {
    type Writer = AccessLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize logging based on environment.
///
/// Dev: everything to the console, access log also mirrored to file.
/// Prod: errors to the console, access log to file.
pub fn init() -> anyhow::Result<()> {
    let environment = Environment::from_env();
    let file_writer = AccessLogWriter::new(log_file_path())?;

    let console_filter = match environment {
        Environment::Dev => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("access_log=info,termfolio=debug,info")),
        Environment::Prod => EnvFilter::new("error"),
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("access_log=info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "Logging initialized ({} mode)",
        match environment {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    );
    Ok(())
}

/// Access log middleware.
/// Logs in format: "METHOD /path HTTP/1.1" STATUS CONTENT_LENGTH IP "User-Agent" LATENCYms
pub async fn access_log_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();

    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();
    let user_agent = request
        .headers()
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    let version_str = match version {
        axum::http::Version::HTTP_09 => "HTTP/0.9",
        axum::http::Version::HTTP_10 => "HTTP/1.0",
        axum::http::Version::HTTP_11 => "HTTP/1.1",
        axum::http::Version::HTTP_2 => "HTTP/2.0",
        axum::http::Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    };

    tracing::info!(
        target: "access_log",
        "\"{} {} {}\" {} {} {} \"{}\" {}ms",
        method,
        uri.path(),
        version_str,
        status,
        content_length,
        addr.ip(),
        user_agent,
        latency.as_millis()
    );

    response
}
