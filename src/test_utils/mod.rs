#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_content_type, parse_json};
