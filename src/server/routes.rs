use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

fn ok_json(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body,
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => ok_json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/curves") => match api::curves_payload() {
            Ok(payload) => ok_json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        (method, path) if method == "GET" && path.starts_with("/api/bag") => {
            match api::bag_payload(path) {
                Ok(payload) => ok_json(payload),
                Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
            }
        }
        ("POST", "/api/simulate") => payload_response(api::simulate_payload(body)),
        ("POST", "/api/evaluate") => payload_response(api::evaluate_payload(body)),
        _ => error_response(404, "Not Found", "Unknown route"),
    }
}

/// Client mistakes (bad JSON, failed validation) are 400s; a failure to
/// encode our own response is a 500.
fn payload_response(result: Result<String, api::ApiError>) -> HttpResponse {
    match result {
        Ok(payload) => ok_json(payload),
        Err(api::ApiError::Parse(err)) => {
            error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
        }
        Err(api::ApiError::Validation(msg)) => error_response(400, "Bad Request", &msg),
        Err(api::ApiError::Encode(err)) => error_response(
            500,
            "Internal Server Error",
            &format!("Failed to encode response: {err}"),
        ),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    let body = serde_json::json!({
        "status": "error",
        "message": message,
    });
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: body.to_string(),
    }
}

fn index_html() -> String {
    concat!(
        "<!doctype html><html><head><title>caddy</title></head><body>",
        "<h1>caddy strokes-gained engine</h1>",
        "<p>Endpoints: GET /api/health, GET /api/curves, GET /api/bag?driver_speed=N, ",
        "POST /api/simulate, POST /api/evaluate</p>",
        "</body></html>"
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_route_is_404_json() {
        let response = route_request("GET", "/api/nope", "");
        assert_eq!(response.status_code, 404);
        assert_eq!(response.content_type, "application/json");
    }

    #[test]
    fn encode_failure_maps_to_500() {
        let err = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("invalid json produces an error");
        let response = payload_response(Err(api::ApiError::Encode(err)));
        assert_eq!(response.status_code, 500);
        assert_eq!(response.status_text, "Internal Server Error");
    }

    #[test]
    fn validation_failure_maps_to_400() {
        let response =
            payload_response(Err(api::ApiError::Validation("trials must be <= 10000".into())));
        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("trials"));
    }

    #[test]
    fn http_string_carries_content_length() {
        let response = route_request("GET", "/api/health", "");
        let raw = response.to_http_string();
        assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(raw.contains(&format!("Content-Length: {}", response.body.len())));
    }
}
