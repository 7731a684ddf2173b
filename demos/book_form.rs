//! Book Form Example
//!
//! Parses a raw book submission into a typed `Book`, reporting every
//! invalid field at once.
//!
//! Run with: cargo run --example book_form

use tribune::predicate::contains;
use tribune::prelude::*;

struct Book {
    title: String,
    author: String,
    isbn: String,
}

#[derive(Debug)]
struct BookForm {
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
}

// ============================================================================
// FIELD PARSERS: one chain per field, stopping at the first failure
// ============================================================================

fn title() -> impl Parser<Input = Option<String>, Output = String, Error = String> {
    non_blank_string(|| "Title must be provided".to_string())
}

fn author() -> impl Parser<Input = Option<String>, Output = String, Error = String> {
    identity::<Option<String>, String>()
        .not_null_or_blank(|| "Author must be provided".to_string())
        .ensure(contains(" "), |_| {
            "Author must be at least two names".to_string()
        })
}

fn isbn() -> impl Parser<Input = Option<String>, Output = String, Error = String> {
    identity::<Option<String>, String>()
        .not_null_or_blank(|| "ISBN must be provided".to_string())
        .length(|n| n == 10 || n == 13, |_| {
            "Valid ISBNs have length 10 or 13".to_string()
        })
        .filter(|s| s.len() == 10 || s.starts_with('9'), |_| {
            "13 Digit ISBNs must start with 9".to_string()
        })
}

// ============================================================================
// RECORD PARSER: every field runs, errors are collected in field order
// ============================================================================

fn book() -> BoxedParser<BookForm, Book, String> {
    compose(
        (
            title().contramap(|f: &BookForm| f.title.clone()),
            author().contramap(|f: &BookForm| f.author.clone()),
            isbn().contramap(|f: &BookForm| f.isbn.clone()),
        ),
        |title: String, author: String, isbn: String| Book {
            title,
            author,
            isbn,
        },
    )
    .boxed()
}

fn main() {
    let parser = book();

    let forms = [
        BookForm {
            title: Some("Dune".into()),
            author: Some("Frank Herbert".into()),
            isbn: Some("9780441013593".into()),
        },
        BookForm {
            title: Some("".into()),
            author: Some("Jane".into()),
            isbn: Some("123".into()),
        },
        BookForm {
            title: None,
            author: None,
            isbn: Some("1234567890123".into()),
        },
    ];

    for form in &forms {
        println!("{form:?}");
        match parser.parse(form) {
            Validated::Valid(book) => {
                println!("  ok: {} by {} ({})", book.title, book.author, book.isbn)
            }
            Validated::Invalid(errors) => {
                for error in errors {
                    println!("  error: {error}");
                }
            }
        }
    }
}
