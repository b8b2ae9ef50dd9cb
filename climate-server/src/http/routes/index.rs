//! Landing page listing the available endpoints

use axum::{response::Html, routing::get, Router};

/// Paths advertised on the landing page, in display order
pub const ENDPOINTS: [&str; 6] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/{start}",
    "/api/v1.0/{start}/{end}",
    "/api/v1.0/daily/{start}",
];

/// GET /
async fn index() -> Html<String> {
    tracing::debug!("serving index");
    Html(render_index())
}

fn render_index() -> String {
    let mut page = String::from("<html><body><h1>These are the endpoints</h1>");
    for endpoint in ENDPOINTS {
        page.push_str(endpoint);
        page.push_str("<br>");
    }
    page.push_str("</body></html>");
    page
}

/// Index routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_endpoint() {
        let page = render_index();
        assert!(page.starts_with("<html>"));
        for endpoint in ENDPOINTS {
            assert!(page.contains(endpoint), "missing {endpoint}");
        }
    }
}
