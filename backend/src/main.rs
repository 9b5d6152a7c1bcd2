mod config;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, error, info};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";
const INDEX_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// A file of the embedded frontend bundle chosen for a request path.
#[derive(Debug)]
struct EmbeddedAsset {
    contents: &'static [u8],
    content_type: String,
}

/// Maps a request path onto the bundle. `/` is `index.html`; paths without a
/// file of their own also get `index.html` so client side routes resolve.
/// `None` only when the bundle has no `index.html` at all.
fn resolve_asset(request_path: &str) -> Option<EmbeddedAsset> {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = STATIC_DIR.get_file(file_path) {
        return Some(EmbeddedAsset {
            contents: file.contents(),
            content_type: from_path(file_path).first_or_octet_stream().to_string(),
        });
    }

    debug!("No embedded file for /{}, serving {}", file_path, INDEX);
    STATIC_DIR.get_file(INDEX).map(|index| EmbeddedAsset {
        contents: index.contents(),
        content_type: INDEX_CONTENT_TYPE.to_string(),
    })
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve_asset(req.path()) {
        Some(asset) => HttpResponse::Ok()
            .content_type(asset.content_type)
            .body(asset.contents),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                error!("Could not open browser at {}: {}", url, e);
            }
        });
    }

    info!("Gallery admin running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
