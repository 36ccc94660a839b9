//! Non-interactive demonstrations.

use std::io::Write;

use anyhow::Context;

use primer_catalog::BookInStock;
use primer_core::ValueObject;
use primer_greetings::{
    say_hello_goodbye, say_hello_goodbye_capitalized, say_hello_goodbye_concat, says,
    who_says_what,
};

/// Print the debug form, then the display form, of each sample book.
pub fn books(out: &mut impl Write) -> anyhow::Result<()> {
    let samples = [
        BookInStock::new("isbn1", 33.80).context("constructing isbn1")?,
        BookInStock::new("isbn2", 25.00).context("constructing isbn2")?,
    ];

    for book in &samples {
        tracing::debug!(book = %book.inspect(), "sample book");
        writeln!(out, "{}", book.inspect())?;
        writeln!(out, "{book}")?;
    }
    Ok(())
}

/// Print every greeting variant, then the callback demonstration.
pub fn greetings(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", say_hello_goodbye_concat("Bill"))?;
    writeln!(out, "{}", say_hello_goodbye_concat("John"))?;
    writeln!(out, "{}", say_hello_goodbye("Ringo"))?;
    writeln!(out, "{}", say_hello_goodbye_capitalized("john"))?;
    writeln!(out, "{}", say_hello_goodbye_capitalized("Paul"))?;

    let mut result = Ok(());
    who_says_what(|person, phrase| {
        if result.is_ok() {
            result = writeln!(out, "{}", says(person, phrase));
        }
    });
    result.context("writing callback output")
}
