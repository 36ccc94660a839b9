/// Greeting assembled by plain concatenation.
pub fn say_hello_goodbye_concat(name: &str) -> String {
    let mut result = String::from("I don't know why you say goodbye ");
    result.push_str(name);
    result.push_str(", I say hello");
    result
}

/// Greeting assembled from a format template.
pub fn say_hello_goodbye(name: &str) -> String {
    format!("I don't know why you say goodbye {name}, I say hello")
}

/// Greeting with `name` capitalized first (see [`capitalize`]).
pub fn say_hello_goodbye_capitalized(name: &str) -> String {
    say_hello_goodbye(&capitalize(name))
}

/// Upper-case the first character and lower-case the rest.
///
/// `"john"` → `"John"`, `"mcCARTNEY"` → `"Mccartney"`, `""` → `""`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
