//! Simple index test utilities

use mockito::{Mock, ServerGuard};

use super::fixture::simple_index_body;

const SIMPLE_JSON: &str = "application/vnd.pypi.simple.v1+json";

fn project_page(server: &mut ServerGuard, package: &str, versions: &[&str]) -> Mock {
    server
        .mock("GET", format!("/{package}").as_str())
        .match_header("accept", SIMPLE_JSON)
        .with_status(200)
        .with_header("content-type", SIMPLE_JSON)
        .with_body(simple_index_body(package, versions))
}

/// Serve a project page for `package` listing `versions`
pub fn mock_project_page(server: &mut ServerGuard, package: &str, versions: &[&str]) -> Mock {
    project_page(server, package, versions).create()
}

/// Async variant of [`mock_project_page`] for use inside a tokio runtime
pub async fn mock_project_page_async(
    server: &mut ServerGuard,
    package: &str,
    versions: &[&str],
) -> Mock {
    project_page(server, package, versions).create_async().await
}
