//! The compiled frontend, embedded into the binary at build time.
//!
//! The site is a single page, so any extension-less path that is not a file
//! (`/`, `/projects`, ...) answers with `index.html`. Missing files and unknown
//! `/api` paths are plain 404s.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse};
use common::model::contact::ErrorBody;
use include_dir::{include_dir, Dir};
use mime_guess::{from_path, Mime};

static FRONTEND: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

struct Asset {
    contents: &'static [u8],
    mime: Mime,
    is_index: bool,
}

fn resolve(dir: &'static Dir<'static>, path: &str) -> Option<Asset> {
    let path = path.trim_start_matches('/');
    let wanted = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(wanted) {
        return Some(Asset {
            contents: file.contents(),
            mime: from_path(wanted).first_or_octet_stream(),
            is_index: wanted == INDEX,
        });
    }

    let is_page = !wanted.starts_with("api/")
        && wanted.rsplit('/').next().is_some_and(|name| !name.contains('.'));
    if !is_page {
        return None;
    }
    dir.get_file(INDEX).map(|index| Asset {
        contents: index.contents(),
        mime: mime_guess::mime::TEXT_HTML_UTF_8,
        is_index: true,
    })
}

fn respond(dir: &'static Dir<'static>, req: &HttpRequest) -> HttpResponse {
    match resolve(dir, req.path()) {
        Some(asset) => {
            let cache = if asset.is_index {
                CacheDirective::NoCache
            } else {
                CacheDirective::MaxAge(3600)
            };
            HttpResponse::Ok()
                .content_type(asset.mime.as_ref())
                .insert_header(CacheControl(vec![cache]))
                .body(asset.contents)
        }
        None if req.path().starts_with("/api/") => HttpResponse::NotFound().json(ErrorBody {
            error: "Not Found".to_string(),
        }),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Default service: everything the API routes did not claim.
pub async fn serve(req: HttpRequest) -> HttpResponse {
    respond(&FRONTEND, &req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test::TestRequest;
    use include_dir::{DirEntry, File};

    const SITE_FILES: &[DirEntry<'static>] = &[
        DirEntry::File(File::new("index.html", b"<html>portfolio</html>")),
        DirEntry::File(File::new("styles.css", b"body {}")),
    ];

    static SITE: Dir<'static> = Dir::new("", SITE_FILES);

    fn get(path: &str) -> HttpResponse {
        respond(&SITE, &TestRequest::get().uri(path).to_http_request())
    }

    fn content_type(resp: &HttpResponse) -> &str {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn root_serves_index_without_caching() {
        let resp = get("/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-cache");
    }

    #[test]
    fn files_are_served_with_their_mime_type() {
        let resp = get("/styles.css");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "text/css");
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "max-age=3600");
    }

    #[test]
    fn page_paths_fall_back_to_index() {
        let resp = get("/projects");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[test]
    fn missing_files_are_not_found() {
        assert_eq!(get("/favicon.ico").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_api_paths_answer_json() {
        let resp = get("/api/unknown");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(content_type(&resp), "application/json");
    }
}
