//! HTTP server for previewing the gallery
//!
//! `galleria serve ./assets/audio` → starts server, opens browser, shows the
//! rendered gallery with working audio playback. Browsers refuse to stream
//! `file://` audio into a local page, so the preview serves the wav files
//! itself.

use crate::gallery::{self, GalleryConfig};
use crate::report::html;
use crate::report::json::Manifest;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};
use tiny_http::{Header, Method, Request, Response, Server};

// Embed the preview page directly in the binary
const PREVIEW_HTML: &str = include_str!("preview.html");

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    fn failure(error: String) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct GalleryParams {
    root: Option<String>,
}

/// Start server, open browser, serve the preview until interrupted.
pub fn start(port: u16, config: GalleryConfig) -> io::Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server =
        Server::http(&addr).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let url = format!("http://localhost:{}", port);

    eprintln!("\n\x1b[1;32m🎼 Galleria\x1b[0m");
    eprintln!("   {}", url);
    eprintln!("   Root: {}\n", config.root);

    // Open browser
    let _ = open::that(&url);

    // Handle requests
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &config) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(request: Request, config: &GalleryConfig) -> io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/").to_string();
    let method = request.method().clone();

    match (&method, path.as_str()) {
        // Preview page with the fragments inlined
        (&Method::Get, "/") => {
            let inputs = config.scan_inputs();
            let built = gallery::build(config, &inputs, |_| {});
            eprintln!(
                "→ / ({} sample(s), {} skipped)",
                built.samples.len(),
                built.skipped.len()
            );

            let page = PREVIEW_HTML
                .replace("{{ROOT}}", &config.root)
                .replace("{{GALLERY}}", &html::render_all(&built));
            let response = Response::from_string(page)
                .with_header(Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap());
            request.respond(response)
        }

        // API: manifest for the current tree, optionally under another root
        (&Method::Get, "/api/gallery") => {
            let params = parse_params(&url);
            let run_config = match params.root {
                Some(root) => config.clone().with_root(root),
                None => config.clone(),
            };

            let inputs = run_config.scan_inputs();
            let json = if inputs.is_empty() {
                let message = format!("no input files found in '{}'", run_config.input_dir().display());
                serde_json::to_string(&ApiResponse::<()>::failure(message))?
            } else {
                let built = gallery::build(&run_config, &inputs, |_| {});
                serde_json::to_string(&ApiResponse::success(Manifest::new(&built, &run_config)))?
            };

            let response = Response::from_string(json).with_header(
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
            );
            request.respond(response)
        }

        // Audio files referenced by the fragments
        (&Method::Get, p) if p.ends_with(".wav") => match resolve_audio_path(config, p) {
            Some(file_path) if file_path.is_file() => {
                let file = File::open(&file_path)?;
                let response = Response::from_file(file).with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"audio/wav"[..]).unwrap(),
                );
                request.respond(response)
            }
            _ => {
                let response = Response::from_string("Not found").with_status_code(404);
                request.respond(response)
            }
        },

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

fn parse_params(url: &str) -> GalleryParams {
    url.split('?')
        .nth(1)
        .and_then(|query| serde_urlencoded::from_str(query).ok())
        .unwrap_or_default()
}

/// Map a request path back onto the configured root.
///
/// The fragments embed `src` attributes of the form
/// `{root}/{subdir}/{base}{suffix}.wav`. The browser resolves them against
/// `/`, so an absolute root arrives verbatim and a relative root arrives
/// with its leading `./` collapsed. Strip the root prefix and join the
/// remainder onto the root; requests outside it are rejected.
fn resolve_audio_path(config: &GalleryConfig, request_path: &str) -> Option<PathBuf> {
    let root_key = match config.root.as_str() {
        "." => "",
        r => r.trim_start_matches("./").trim_start_matches('/'),
    };
    let relative = request_path.trim_start_matches('/');

    let remainder = if root_key.is_empty() {
        relative
    } else {
        relative.strip_prefix(root_key)?.strip_prefix('/')?
    };

    let remainder_path = Path::new(remainder);
    for component in remainder_path.components() {
        match component {
            Component::Normal(_) => {}
            _ => return None,
        }
    }

    Some(Path::new(&config.root).join(remainder_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_audio_path_relative_root() {
        let config = GalleryConfig::new().with_root("./assets/audio");
        let p = resolve_audio_path(&config, "/assets/audio/inputs/505_001.wav").unwrap();
        assert_eq!(p, PathBuf::from("./assets/audio/inputs/505_001.wav"));
    }

    #[test]
    fn test_resolve_audio_path_absolute_root_hits_staged_file() {
        // With an absolute root the fragments embed absolute src paths,
        // which arrive verbatim as the request path; the resolved path must
        // be the file on disk, not a working-directory-relative one.
        let dir = tempfile::TempDir::new().unwrap();
        let config = GalleryConfig::new().with_root(dir.path().to_str().unwrap());
        std::fs::create_dir_all(dir.path().join("inputs")).unwrap();
        let staged = config.category_path(crate::gallery::Category::Input, "505_001");
        std::fs::write(&staged, b"RIFF").unwrap();

        let resolved = resolve_audio_path(&config, &staged).unwrap();
        assert_eq!(resolved, PathBuf::from(&staged));
        assert!(resolved.is_file());
    }

    #[test]
    fn test_resolve_audio_path_rejects_traversal() {
        let config = GalleryConfig::new().with_root("./assets/audio");
        assert!(resolve_audio_path(&config, "/assets/audio/../../etc/passwd.wav").is_none());
        assert!(resolve_audio_path(&config, "/assets/../../secret.wav").is_none());
    }

    #[test]
    fn test_resolve_audio_path_rejects_outside_root() {
        let config = GalleryConfig::new().with_root("./assets/audio");
        assert!(resolve_audio_path(&config, "/other/inputs/505_001.wav").is_none());
        // A sibling directory sharing the root as a string prefix is not
        // inside the root
        assert!(resolve_audio_path(&config, "/assets/audiophile/x.wav").is_none());
    }

    #[test]
    fn test_parse_params_root_override() {
        let params = parse_params("/api/gallery?root=%2Fdata%2Faudio");
        assert_eq!(params.root.as_deref(), Some("/data/audio"));
    }

    #[test]
    fn test_parse_params_missing_query() {
        let params = parse_params("/api/gallery");
        assert!(params.root.is_none());
    }

    #[test]
    fn test_preview_template_has_placeholders() {
        assert!(PREVIEW_HTML.contains("{{GALLERY}}"));
        assert!(PREVIEW_HTML.contains("{{ROOT}}"));
    }
}
