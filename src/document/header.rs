use log::trace;
use serde_json::{Map, Value};

/// Key-value fields parsed from a block header.
pub type Header = Map<String, Value>;

/// Parse a YAML header into a string-keyed mapping.
///
/// Anything that is not a mapping, including malformed YAML and an empty
/// header, yields the empty mapping. The error never leaves this function.
pub fn parse_header(text: &str) -> Header {
    match serde_yaml::from_str::<Header>(text) {
        Ok(fields) => fields,
        Err(err) => {
            trace!(target: "reader", "header ignored: {err}");
            Header::new()
        }
    }
}
