//! HTTP-backed resolution against a mock registry.

use devfile_lib::resolve::{FetchError, Fetcher, HttpFetcher, ResolveError, resolve};
use devfile_lib::schema::ImportReference;
use devfile_lib::yaml;

const PARENT_DOCUMENT: &str = r#"
schemaVersion: 2.2.0
commands:
  - id: build
    exec:
      commandLine: npm run build
"#;

#[test]
fn resolves_parent_over_http() {
  let mut server = mockito::Server::new();
  let mock = server
    .mock("GET", "/parents/base.yaml")
    .with_status(200)
    .with_body(PARENT_DOCUMENT)
    .create();

  let source = format!(
    "schemaVersion: 2.2.0\nparent:\n  uri: {}/parents/base.yaml\n",
    server.url()
  );
  let mut devfile = yaml::parse(source.as_bytes()).unwrap();

  resolve(&mut devfile, &HttpFetcher::new()).unwrap();

  mock.assert();
  assert!(devfile.commands.iter().any(|c| c.id == "build"));
}

#[test]
fn resolves_registry_plugin_with_version() {
  let mut server = mockito::Server::new();
  let mock = server
    .mock("GET", "/devfiles/nodejs/2.1.1")
    .with_status(200)
    .with_body(PARENT_DOCUMENT)
    .create();

  let reference = ImportReference {
    id: Some("nodejs".to_string()),
    registry_url: Some(server.url()),
    version: Some("2.1.1".to_string()),
    ..Default::default()
  };
  let bytes = HttpFetcher::new().fetch(&reference).unwrap();

  mock.assert();
  assert_eq!(bytes, PARENT_DOCUMENT.as_bytes());
}

#[test]
fn relative_uri_joins_the_base_url() {
  let mut server = mockito::Server::new();
  let mock = server
    .mock("GET", "/stacks/base.yaml")
    .with_status(200)
    .with_body(PARENT_DOCUMENT)
    .create();

  let fetcher = HttpFetcher::new().with_base_url(format!("{}/stacks", server.url()));
  let reference = ImportReference {
    uri: Some("base.yaml".to_string()),
    ..Default::default()
  };

  fetcher.fetch(&reference).unwrap();
  mock.assert();
}

#[test]
fn http_error_status_fails_resolution() {
  let mut server = mockito::Server::new();
  server
    .mock("GET", "/parents/missing.yaml")
    .with_status(404)
    .create();

  let source = format!(
    "schemaVersion: 2.2.0\nparent:\n  uri: {}/parents/missing.yaml\n",
    server.url()
  );
  let mut devfile = yaml::parse(source.as_bytes()).unwrap();

  let err = resolve(&mut devfile, &HttpFetcher::new()).unwrap_err();
  assert!(matches!(
    err,
    ResolveError::Fetch(FetchError::Status { status: 404, .. })
  ));
}
