use serde::Serialize;

use primer_core::{DomainResult, ToAmount, ValueObject};

/// Monetary amount of a stock item.
///
/// Always finite. Renders like a float literal: whole numbers keep a trailing
/// `.0` (`25.0`), others use the shortest round-trip form (`33.8`).
#[derive(Copy, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Coerce `amount` into a price.
    pub fn parse(amount: impl ToAmount) -> DomainResult<Self> {
        amount.to_amount().map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.0, f)
    }
}

impl core::fmt::Debug for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.0, f)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// A book held in stock, identified by ISBN.
///
/// The ISBN is an opaque token: stored as given, uniqueness is a convention the
/// catalog does not enforce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookInStock {
    isbn: String,
    price: Price,
}

impl BookInStock {
    /// Construct a book, coercing `price` into a real number.
    ///
    /// Fails with `DomainError::Conversion` when `price` is not numeric.
    pub fn new(isbn: impl Into<String>, price: impl ToAmount) -> DomainResult<Self> {
        let isbn = isbn.into();
        let price = Price::parse(price).inspect_err(|err| {
            tracing::debug!(isbn = %isbn, error = %err, "rejected book price");
        })?;

        Ok(Self { isbn, price })
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl core::fmt::Display for BookInStock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ISBN:{}, price:{}", self.isbn, self.price)
    }
}

impl ValueObject for BookInStock {}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::DomainError;

    #[test]
    fn display_embeds_isbn_and_price() {
        let book = BookInStock::new("isbn1", "33.80").unwrap();
        assert_eq!(book.to_string(), "ISBN:isbn1, price:33.8");
    }

    #[test]
    fn underscored_and_hex_prices_are_coerced() {
        assert_eq!(BookInStock::new("isbn4", "1_000").unwrap().to_string(), "ISBN:isbn4, price:1000.0");
        assert_eq!(BookInStock::new("isbn5", "0x1A").unwrap().price().value(), 26.0);
        assert!(BookInStock::new("isbn6", "1.").unwrap_err().is_conversion());
    }

    #[test]
    fn whole_prices_keep_a_fractional_digit() {
        let book = BookInStock::new("isbn2", 25.00).unwrap();
        assert_eq!(book.to_string(), "ISBN:isbn2, price:25.0");

        let book = BookInStock::new("isbn3", 12).unwrap();
        assert_eq!(book.price().value(), 12.0);
        assert_eq!(book.to_string(), "ISBN:isbn3, price:12.0");
    }

    #[test]
    fn non_numeric_price_is_a_conversion_error() {
        let err = BookInStock::new("isbn1", "abc").unwrap_err();
        match err {
            DomainError::Conversion(msg) => assert!(msg.contains("abc")),
        }
    }

    #[test]
    fn inspect_names_type_and_fields() {
        let book = BookInStock::new("isbn1", 33.80).unwrap();
        assert_eq!(book.inspect(), r#"BookInStock { isbn: "isbn1", price: 33.8 }"#);
        assert_ne!(book.inspect(), book.to_string());
    }

    #[test]
    fn inspect_escapes_quotes_in_isbn() {
        let book = BookInStock::new(r#"a"b"#, 1).unwrap();
        assert_eq!(book.inspect(), r#"BookInStock { isbn: "a\"b", price: 1.0 }"#);
    }

    #[test]
    fn isbn_is_stored_unchanged() {
        let book = BookInStock::new("  978-0 ", "1.5").unwrap();
        assert_eq!(book.isbn(), "  978-0 ");
    }

    #[test]
    fn equal_by_value() {
        let a = BookInStock::new("isbn1", "33.80").unwrap();
        let b = BookInStock::new(String::from("isbn1"), 33.8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_as_plain_record() {
        let book = BookInStock::new("isbn1", "33.80").unwrap();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json, serde_json::json!({ "isbn": "isbn1", "price": 33.8 }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Display carries the ISBN and the price's decimal rendering.
            #[test]
            fn display_contains_isbn_and_price(
                isbn in "[a-z0-9-]{1,20}",
                cents in 0u32..10_000_000
            ) {
                let amount = format!("{}.{:02}", cents / 100, cents % 100);
                let book = BookInStock::new(isbn.clone(), amount.as_str()).unwrap();
                let rendered = book.to_string();
                let expected_price = format!("price:{:?}", amount.parse::<f64>().unwrap());

                prop_assert!(rendered.contains(&isbn), "{} lacks {}", rendered, isbn);
                prop_assert!(
                    rendered.ends_with(&expected_price),
                    "{} does not end with {}",
                    rendered,
                    expected_price
                );
            }

            /// The debug form names the type and both fields, and never equals Display.
            #[test]
            fn inspect_is_structured(isbn in ".{0,20}", price in -1.0e6f64..1.0e6) {
                let book = BookInStock::new(isbn, price).unwrap();
                let inspected = book.inspect();

                let type_and_first_field = r#"BookInStock { isbn: ""#;
                prop_assert!(
                    inspected.starts_with(type_and_first_field),
                    "unexpected debug form: {}",
                    inspected
                );
                prop_assert!(inspected.contains(", price: "), "missing price in {}", inspected);
                prop_assert_ne!(inspected, book.to_string());
            }
        }
    }
}
