use fictex::{
    parse, parse_str, render_to_string, to_html, to_text, Config, Error, Escape, Node, Span,
};
use std::io::{self, Read};

struct Case {
    name: &'static str,
    tree: Node,
    text: &'static str,
    html: &'static str,
}

fn render_cases() -> Vec<Case> {
    vec![
        Case {
            name: "wrapping",
            tree: Node::group(vec![Node::paragraph(vec![
                Span::Bold.node("a"),
                Span::Slant.node("b"),
                Span::Underline.node("c"),
            ])]),
            text: "\n    *a*/b/_c_\n",
            html: "<p>\n<b>a</b><i>b</i><u>c</u>\n</p>\n",
        },
        Case {
            name: "dashes",
            tree: Node::group(vec![
                Node::NDash,
                Node::text(" "),
                Node::MDash,
                Node::HLine,
            ]),
            text: "-- ---\n-----\n",
            html: "&#8211; &#8212;<hr />\n",
        },
        Case {
            name: "preview",
            tree: Node::group(vec![Node::preview(
                "short",
                vec![Node::paragraph(vec![Node::text("long")])],
            )]),
            text: "\n<<short\n\n    long\n>>\n",
            html: "<!-- Fold: \"short\" -->\n<p>\nlong\n</p>\n<!-- /Fold -->\n",
        },
        Case {
            name: "escape",
            tree: Node::text("<"),
            text: "<",
            html: "&lt;",
        },
        Case {
            name: "group",
            tree: Node::group(vec![Node::text("a"), Node::text("b")]),
            text: "ab",
            html: "ab",
        },
    ]
}

#[test]
fn test_render_presets() {
    for case in render_cases() {
        assert_eq!(to_text(&case.tree).unwrap(), case.text, "text: {}", case.name);
        assert_eq!(to_html(&case.tree).unwrap(), case.html, "html: {}", case.name);
    }
}

#[test]
fn test_story_to_html() {
    let source = "\
Chapter one -- in which /nothing/ happens.

<<The storm
Rain fell\non the *old* house.

----

It was _loud_ & it was late.
>>

The end---for now.";

    let doc = parse_str(source).unwrap();
    let html = to_html(&doc).unwrap();
    println!("HTML:\n{}", html);

    let expected = "\
<p>
Chapter one &#8211; in which <i>nothing</i> happens.
</p>
<!-- Fold: \"The storm\" -->
<p>
Rain fell on the <b>old</b> house.
</p>
<hr />
<p>
It was <u>loud</u> &amp; it was late.
</p>
<!-- /Fold -->
<p>
The end&#8212;for now.
</p>
";
    assert_eq!(html, expected);
}

#[test]
fn test_text_output_reparses_to_same_tree() {
    let sources = [
        "plain words only",
        "a\nb\n\nc\nd",
        "He said -- /quietly/ -- no.",
        "<<caption\nbody one\n\n-----\n\nbody two\n>>\nafter",
        "one---two *three* _four_",
        "----\n\n<<c\n----\n>>\n\n----",
        "<<\n>>",
    ];
    for source in sources {
        let doc = parse_str(source).unwrap();
        let text = to_text(&doc).unwrap();
        assert_eq!(parse_str(&text).unwrap(), doc, "source {source:?} rendered {text:?}");
    }
}

#[test]
fn test_empty_preview_body_round_trip() {
    let doc = parse_str("<<cap\n>>\n\nafter").unwrap();
    assert_eq!(
        doc,
        Node::group(vec![
            Node::preview("cap", vec![]),
            Node::paragraph(vec![Node::text("after")]),
        ])
    );

    let text = to_text(&doc).unwrap();
    assert_eq!(text, "\n<<cap\n>>\n\n    after\n");
    assert_eq!(parse_str(&text).unwrap(), doc);
}

#[test]
fn test_inline_rule_gains_spaces_in_text() {
    let doc = parse_str("a-b--c---d----e").unwrap();
    let text = to_text(&doc).unwrap();
    assert_eq!(text, "\n    a-b--c---d\n-----\ne\n");

    let reparsed = parse_str(&text).unwrap();
    assert_ne!(reparsed, doc);
    assert_eq!(
        reparsed,
        Node::group(vec![Node::paragraph(vec![
            Node::text("a-b"),
            Node::NDash,
            Node::text("c"),
            Node::MDash,
            Node::text("d "),
            Node::HLine,
            Node::text(" e"),
        ])])
    );
}

#[test]
fn test_same_tree_many_configs() {
    let doc = parse_str("*hey* -- you").unwrap();

    let markdown = Config::text()
        .with_bold("**", "**")
        .with_paragraph("", "\n\n")
        .with_ndash("\u{2013}");
    assert_eq!(render_to_string(&doc, &markdown).unwrap(), "**hey** \u{2013} you\n\n");
    assert_eq!(to_html(&doc).unwrap(), "<p>\n<b>hey</b> &#8211; you\n</p>\n");
    assert_eq!(to_text(&doc).unwrap(), "\n    *hey* -- you\n");
}

#[test]
fn test_unescaped_html_passthrough() {
    let doc = parse_str("<em>raw</em>").unwrap();
    let config = Config::html().with_escape(Escape::None);
    assert_eq!(
        render_to_string(&doc, &config).unwrap(),
        "<p>\n<em>raw</em>\n</p>\n"
    );
}

#[test]
fn test_recover_from_unterminated_preview() {
    let err = parse_str("intro\n\n<<Draft\nstill writing").unwrap_err();
    assert!(err.to_string().contains("unterminated preview"));

    let (error, tree) = err.into_parts();
    assert!(error.is_unterminated());
    assert_eq!(
        to_html(&tree).unwrap(),
        "<p>\nintro\n</p>\n<!-- Fold: \"Draft\" -->\n<p>\nstill writing\n</p>\n<!-- /Fold -->\n"
    );
}

struct FailingReader {
    data: Option<&'static [u8]>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.take() {
            Some(data) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Ok(n)
            }
            None => Err(io::Error::new(io::ErrorKind::ConnectionReset, "gone")),
        }
    }
}

#[test]
fn test_source_failure_keeps_finished_blocks() {
    let reader = FailingReader {
        data: Some(b"abc\n\nde"),
    };
    let err = parse(reader).unwrap_err();
    assert!(matches!(err.error(), Error::Source(_)));
    assert!(err.to_string().contains("gone"));
    assert_eq!(
        err.partial(),
        &Node::group(vec![Node::paragraph(vec![Node::text("abc")])])
    );
}

#[test]
fn test_json_export() {
    let doc = parse_str("a *b*\n\n<<c\n----\n>>").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "Group",
            "children": [
                {
                    "type": "Paragraph",
                    "children": [
                        {"type": "Text", "text": "a "},
                        {"type": "Bold", "text": "b"}
                    ]
                },
                {
                    "type": "Preview",
                    "text": "c",
                    "children": [{"type": "HLine"}]
                }
            ]
        })
    );
}

#[test]
fn test_tree_dump() {
    let doc = parse_str("x---/y/").unwrap();
    assert_eq!(
        doc.to_string(),
        "\
+ Group:
| + Paragraph:
| | + Text:
| | | + \"x\"
| | + MDash:
| | + Text:
| | | + \"/y/\"
"
    );
}

#[test]
fn test_render_shared_tree_across_threads() {
    let doc = parse_str("Shared *tree*.\n\n----\n\nSecond -- part.").unwrap();
    let config = Config::html();
    let expected = to_html(&doc).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| render_to_string(&doc, &config).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_large_document() {
    let paragraph = "Lorem *ipsum* dolor -- sit /amet/\nconsectetur _adipiscing_ elit.\n\n";
    let source = paragraph.repeat(500);
    let doc = parse_str(&source).unwrap();
    assert_eq!(doc.children().len(), 500);
    assert!(doc.children().iter().all(|p| p.children().len() == 9));
}
