#[macro_use]
pub mod macros;

/// Creates a reader over in-memory input.
pub fn create_input(name: &str, content: &'static str) -> (String, &'static [u8]) {
    (name.to_string(), content.as_bytes())
}
