//! End-to-end parsing of a book submission form.

use tribune::prelude::*;
use tribune::predicate::{contains, starts_with, PredicateExt};
use tribune::{assert_errors, assert_valid};

#[derive(Debug, Clone, PartialEq)]
struct Title(String);

#[derive(Debug, Clone, PartialEq)]
struct Author(String);

#[derive(Debug, Clone, PartialEq)]
struct Isbn(String);

#[derive(Debug, Clone, PartialEq)]
struct Book {
    title: Title,
    author: Author,
    isbn: Isbn,
}

impl Book {
    fn new(title: Title, author: Author, isbn: Isbn) -> Self {
        Self {
            title,
            author,
            isbn,
        }
    }
}

#[derive(Debug, Default)]
struct BookForm {
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
}

fn form(title: &str, author: &str, isbn: &str) -> BookForm {
    BookForm {
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        isbn: Some(isbn.to_string()),
    }
}

const TITLE_BLANK: &str = "Title must be provided";
const AUTHOR_BLANK: &str = "Author must be provided";
const AUTHOR_ONE_NAME: &str = "Author must be at least two names";
const ISBN_BLANK: &str = "ISBN must be provided";
const ISBN_LENGTH: &str = "Valid ISBNs have length 10 or 13";
const ISBN_PREFIX: &str = "13 Digit ISBNs must start with 9";

fn book_parser() -> impl Parser<Input = BookForm, Output = Book, Error = &'static str> {
    let title = non_blank_string(|| TITLE_BLANK)
        .map(Title)
        .contramap(|f: &BookForm| f.title.clone());

    let author = identity::<Option<String>, &'static str>()
        .not_null_or_blank(|| AUTHOR_BLANK)
        .ensure(contains(" "), |_| AUTHOR_ONE_NAME)
        .map(Author)
        .contramap(|f: &BookForm| f.author.clone());

    let isbn = identity::<Option<String>, &'static str>()
        .not_null_or_blank(|| ISBN_BLANK)
        .length(|n| n == 10 || n == 13, |_| ISBN_LENGTH)
        .filter(|s| s.len() == 10 || s.starts_with('9'), |_| ISBN_PREFIX)
        .map(Isbn)
        .contramap(|f: &BookForm| f.isbn.clone());

    compose((title, author, isbn), Book::new)
}

#[test]
fn valid_form_builds_a_book() {
    let parser = book_parser();
    let result = parser.parse(&form("Dune", "Frank Herbert", "9780441013593"));

    assert_valid!(
        result,
        Book::new(
            Title("Dune".into()),
            Author("Frank Herbert".into()),
            Isbn("9780441013593".into())
        )
    );
}

#[test]
fn ten_digit_isbn_needs_no_prefix() {
    let result = book_parser().parse(&form("Dune", "Frank Herbert", "0441013597"));
    assert!(result.is_valid());
}

#[test]
fn every_failing_field_is_reported_in_order() {
    let result = book_parser().parse(&form("", "Jane", "123"));
    assert_errors!(result, vec![TITLE_BLANK, AUTHOR_ONE_NAME, ISBN_LENGTH]);
}

#[test]
fn later_isbn_checks_do_not_run_after_a_failure() {
    // "123" also fails the 13-digit prefix rule, but the chain stops at the length check
    let errors = book_parser().parse(&form("Dune", "Frank Herbert", "123")).unwrap_errors();
    assert_eq!(errors, vec![ISBN_LENGTH]);
}

#[test]
fn thirteen_digit_isbn_must_start_with_nine() {
    let result = book_parser().parse(&form("Dune", "Frank Herbert", "1234567890123"));
    assert_errors!(result, vec![ISBN_PREFIX]);
}

#[test]
fn missing_fields_are_single_errors() {
    let result = book_parser().parse(&BookForm::default());
    assert_errors!(result, vec![TITLE_BLANK, AUTHOR_BLANK, ISBN_BLANK]);
}

#[test]
fn whitespace_counts_as_blank() {
    let result = book_parser().parse(&form("   ", "\t", "  "));
    assert_errors!(result, vec![TITLE_BLANK, AUTHOR_BLANK, ISBN_BLANK]);
}

#[test]
fn fields_can_be_tagged_with_context() {
    let title = non_blank_string(|| TITLE_BLANK)
        .context("title")
        .contramap(|f: &BookForm| f.title.clone());
    let isbn = identity::<Option<String>, &'static str>()
        .not_null_or_blank(|| ISBN_BLANK)
        .ensure(starts_with("978").or(starts_with("979")), |_| ISBN_PREFIX)
        .context("isbn")
        .contramap(|f: &BookForm| f.isbn.clone());

    let parser = compose((title, isbn), |t: String, i: String| (t, i)).add_context("book");

    let errors = parser.parse(&form("", "", "123")).unwrap_errors();
    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            format!("book.title: {TITLE_BLANK}"),
            format!("book.isbn: {ISBN_PREFIX}"),
        ]
    );
}

#[test]
fn a_list_of_forms_reports_every_failure() {
    let books = book_parser().repeated();
    let forms = vec![
        form("Dune", "Frank Herbert", "0441013597"),
        form("", "Frank Herbert", "0441013597"),
        form("Emma", "Austen", "0441013597"),
    ];

    assert_errors!(books.parse(&forms), vec![TITLE_BLANK, AUTHOR_ONE_NAME]);
}
