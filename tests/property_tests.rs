//! Property-based tests for the parser and renderer.
//!
//! Generated documents stay inside the subset of the language that the text
//! preset reproduces exactly: single spaces between words, spans followed by
//! a space or the end of their paragraph, dashes surrounded by spaces, and
//! rules only at block level. Previews may have empty captions and bodies.

use fictex::{parse_bytes, parse_str, render_to_vec, to_text, Config, Node};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

fn inline_item() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => word(),
        1 => words().prop_map(|w| format!("*{w}*")),
        1 => words().prop_map(|w| format!("/{w}/")),
        1 => words().prop_map(|w| format!("_{w}_")),
        1 => Just("--".to_string()),
        1 => Just("---".to_string()),
    ]
}

fn paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec(inline_item(), 1..10).prop_map(|items| items.join(" "))
}

fn body_block() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => paragraph(),
        1 => Just("----".to_string()),
    ]
}

fn preview() -> impl Strategy<Value = String> {
    (
        "[a-z ]{0,12}",
        prop::collection::vec(body_block(), 0..3),
    )
        .prop_map(|(caption, body)| format!("<<{caption}\n{}\n>>", body.join("\n\n")))
}

fn block() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => paragraph(),
        1 => Just("----".to_string()),
        2 => preview(),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(block(), 1..5).prop_map(|blocks| blocks.join("\n\n"))
}

proptest! {
    #[test]
    fn test_dash_ladder(n in 1usize..40) {
        let source = format!("a{}b", "-".repeat(n));
        let doc = parse_str(&source).unwrap();
        let dash = match n {
            1 => None,
            2 => Some(Node::NDash),
            3 => Some(Node::MDash),
            _ => Some(Node::HLine),
        };
        let expected = match dash {
            None => vec![Node::text("a-b")],
            Some(dash) => vec![Node::text("a"), dash, Node::text("b")],
        };
        prop_assert_eq!(doc, Node::group(vec![Node::paragraph(expected)]));
    }

    #[test]
    fn test_text_render_is_idempotent(source in document()) {
        let doc = parse_str(&source).unwrap();
        let text = to_text(&doc).unwrap();
        let reparsed = parse_str(&text).unwrap();
        prop_assert_eq!(&reparsed, &doc, "rendered: {:?}", text);
        prop_assert_eq!(to_text(&reparsed).unwrap(), text);
    }

    #[test]
    fn test_any_input_without_preview_parses(
        bytes in prop::collection::vec(any::<u8>(), 0..256)
            .prop_filter("no preview opener", |b| !b.windows(2).any(|w| w == b"<<"))
    ) {
        let doc = parse_bytes(&bytes).unwrap();
        prop_assert!(matches!(doc, Node::Group(_)));
    }

    #[test]
    fn test_rendering_never_fails(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let doc = match parse_bytes(&bytes) {
            Ok(doc) => doc,
            Err(err) => err.into_partial(),
        };
        prop_assert!(render_to_vec(&doc, &Config::text()).is_ok());
        prop_assert!(render_to_vec(&doc, &Config::html()).is_ok());
    }

    #[test]
    fn test_parser_emits_no_empty_nodes(source in "[a-z */_<>\\n-]{0,64}") {
        let doc = match parse_str(&source) {
            Ok(doc) => doc,
            Err(err) => err.into_partial(),
        };
        let mut stack = vec![&doc];
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(t) | Node::Bold(t) | Node::Slant(t) | Node::Underline(t) => {
                    prop_assert!(!t.is_empty(), "empty payload in {}", doc);
                }
                Node::Paragraph(children) => {
                    prop_assert!(!children.is_empty(), "empty paragraph in {}", doc);
                }
                _ => {}
            }
            stack.extend(node.children());
        }
    }
}
