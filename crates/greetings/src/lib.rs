//! Greeting builders and the "who says what" callback demonstration.

pub mod callback;
pub mod greeting;

pub use callback::{says, who_says_what};
pub use greeting::{
    capitalize, say_hello_goodbye, say_hello_goodbye_capitalized, say_hello_goodbye_concat,
};
