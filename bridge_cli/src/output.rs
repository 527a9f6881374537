use serde::Serialize;
use serde_json::Value;

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints a decoded response body. The API answers some calls with an empty
/// body; that is reported on stderr so stdout stays valid JSON or nothing.
pub fn print_response(response: Option<&Value>) {
    match response {
        Some(body) => print_json(body),
        None => eprintln!("(empty response)"),
    }
}
