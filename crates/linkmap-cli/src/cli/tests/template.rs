//! Tests for the template subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_template_defaults() {
    match parse(&["linkmap", "template", "h.example/?adults=2"]) {
        CliCommand::Template {
            url,
            assign,
            format,
            uppercase,
            no_suggest,
            save,
        } => {
            assert_eq!(url, "h.example/?adults=2");
            assert!(assign.is_empty());
            assert!(format.is_empty());
            assert!(uppercase.is_empty());
            assert!(!no_suggest);
            assert!(save.is_none());
        }
        _ => panic!("expected Template"),
    }
}

#[test]
fn cli_parse_template_with_edits() {
    match parse(&[
        "linkmap",
        "template",
        "h.example/x?ci=1&promo=a",
        "--assign",
        "query:0:ci=checkIn",
        "--assign",
        "path:0=hotelId",
        "--format",
        "query:0:ci=DDMMYYYY",
        "--uppercase",
        "query:1:promo=false",
        "--no-suggest",
        "--save",
        "partner",
    ]) {
        CliCommand::Template {
            assign,
            format,
            uppercase,
            no_suggest,
            save,
            ..
        } => {
            assert_eq!(assign, vec!["query:0:ci=checkIn", "path:0=hotelId"]);
            assert_eq!(format, vec!["query:0:ci=DDMMYYYY"]);
            assert_eq!(uppercase, vec!["query:1:promo=false"]);
            assert!(no_suggest);
            assert_eq!(save.as_deref(), Some("partner"));
        }
        _ => panic!("expected Template"),
    }
}
