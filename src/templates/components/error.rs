use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: &ServerError) -> Response {
    match err {
        ServerError::Validation(errors) => render_error(400, &errors.to_string()),
        _ => render_error(err.status_code(), &err.public_message()),
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let message = maud::html! { (message) }.into_string();
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Error {status}</title>
  <style>
    body {{
      font-family: system-ui, sans-serif;
      max-width: 720px;
      margin: 4rem auto;
      padding: 1rem;
    }}
    h1 {{
      font-size: 2rem;
      margin-bottom: 1rem;
    }}
    p {{
      font-size: 1.1rem;
      color: #444;
    }}
    code {{
      background: #f4f4f4;
      padding: 0.2rem 0.4rem;
      border-radius: 6px;
    }}
  </style>
</head>
<body>
  <h1>Error {status}</h1>
  <p>{message}</p>
  <p><a href="/admin/roomchange">← Back to room changes</a></p>
</body>
</html>"#
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
