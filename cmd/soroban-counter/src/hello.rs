/// Say Hello to someone or something.
/// Returns a length-2 vector containing "Hello" and then the value passed as `to`.
pub fn hello(to: &str) -> Vec<String> {
    vec!["Hello".to_string(), to.to_string()]
}
