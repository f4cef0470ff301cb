//! Response bodies for the JSON API.
//!
//! # Responsibilities
//! - Render values in the spaced compact layout (`{"id": 1, "name": "Alice"}`)
//! - Carry preformatted JSON text with the right content type
//!
//! # Design Decisions
//! - Echoed request bodies are spliced in as raw text, so bodies are built
//!   as strings rather than `serde_json::Value`
//! - Empty responses carry no content type

use std::io;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{ser::Error as _, Serialize};
use serde_json::ser::{Formatter, Serializer};

/// JSON formatter emitting `", "` between entries and `": "` after keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` using [`SpacedFormatter`].
pub fn to_spaced_json<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(64);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// A JSON body that has already been rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonText {
    status: StatusCode,
    body: String,
}

impl JsonText {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 OK with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for JsonText {
    fn into_response(self) -> Response {
        (
            self.status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spaced_object() {
        let text = to_spaced_json(&json!({"message": "User not found"})).unwrap();
        assert_eq!(text, r#"{"message": "User not found"}"#);
    }

    #[test]
    fn test_spaced_array_of_structs() {
        #[derive(Serialize)]
        struct Pair {
            a: u8,
            b: &'static str,
        }
        let text = to_spaced_json(&[Pair { a: 1, b: "x" }, Pair { a: 2, b: "y" }]).unwrap();
        assert_eq!(text, r#"[{"a": 1, "b": "x"}, {"a": 2, "b": "y"}]"#);
    }

    #[test]
    fn test_strings_are_escaped() {
        let text = to_spaced_json("say \"hi\"").unwrap();
        assert_eq!(text, r#""say \"hi\"""#);
    }

    #[test]
    fn test_json_text_sets_content_type() {
        let response = JsonText::new(StatusCode::CREATED, "{}").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
