use adapt::interpret::{
    detect_language, extract_fence, interpret_chat_reply, interpret_transform_reply, is_code,
    segment, split_tagged, TaggedSections,
};
use adapt::models::block::ChatBlock;
use adapt::models::language::LanguageTag;
use adapt::models::transform::TransformResult;

const SAMPLE_LANGUAGES: [&str; 5] = ["rust", "js", "Python", "c", "go_lang"];

#[test]
fn fenced_block_yields_language_and_body() {
    for lang in SAMPLE_LANGUAGES {
        let text = format!("Intro text\n```{lang}\n  let x = 1;\n  x + 1\n```\ntrailing words");
        assert_eq!(detect_language(&text).as_str(), lang);
        assert_eq!(extract_fence(&text), "let x = 1;\n  x + 1");
    }
}

#[test]
fn text_without_hints_is_plaintext() {
    for text in ["Hello there.", "Sure, happy to help!", "", "42 is the answer"] {
        assert_eq!(detect_language(text), LanguageTag::PlainText);
    }
}

#[test]
fn earlier_rule_wins_on_ties() {
    assert_eq!(
        detect_language("const char *s; #include <string.h>"),
        LanguageTag::C
    );
}

#[test]
fn code_versus_prose() {
    assert!(is_code("```js\nconst x = 1;\n```"));
    assert!(!is_code("Hello, how are you?"));
}

#[test]
fn tagged_sections_in_order() {
    assert_eq!(
        split_tagged("HTML:\n<div></div>\n\nCSS:\n.a{color:red}", "HTML", "CSS"),
        TaggedSections {
            a: "<div></div>".to_string(),
            b: ".a{color:red}".to_string()
        }
    );
}

#[test]
fn tagged_sections_missing_label() {
    assert_eq!(
        split_tagged("CSS:\n.a{}\n", "HTML", "CSS"),
        TaggedSections {
            a: String::new(),
            b: ".a{}".to_string()
        }
    );
}

#[test]
fn segment_preserves_order() {
    assert_eq!(
        segment("# Title\n\nSome text.\n\n## Sub\n\nMore."),
        vec![
            ChatBlock::heading(1, "Title"),
            ChatBlock::paragraph("Some text."),
            ChatBlock::heading(2, "Sub"),
            ChatBlock::paragraph("More."),
        ]
    );
}

#[test]
fn segment_is_idempotent_over_paragraphs() {
    let source = "# Guide\n\nFirst paragraph\nwith two lines.\n\n\n\nSecond one.\n\n### Notes\n\nThird.";
    let paragraphs: Vec<String> = segment(source)
        .into_iter()
        .filter_map(|block| match block {
            ChatBlock::Paragraph { text } => Some(text),
            _ => None,
        })
        .collect();

    let rejoined = paragraphs.join("\n\n");
    let again: Vec<ChatBlock> = segment(&rejoined);
    let expected: Vec<ChatBlock> = paragraphs.iter().map(ChatBlock::paragraph).collect();
    assert_eq!(again, expected);
}

#[test]
fn text_without_fences_round_trips() {
    for text in ["", "plain", "  padded  \n", "a {b} </c>", "``not a fence``"] {
        assert_eq!(extract_fence(text), text);
    }
}

#[test]
fn empty_input_boundaries() {
    assert!(segment("").is_empty());
    assert_eq!(split_tagged("", "HTML", "CSS"), TaggedSections::default());
    assert!(interpret_chat_reply("").is_empty());
    assert_eq!(interpret_transform_reply(""), TransformResult::default());
}

#[test]
fn interpretation_is_repeatable() {
    let reply = "Here is a fix:\n\n```jsx\n<App />\n```";
    let first = interpret_chat_reply(reply);
    assert_eq!(first, interpret_chat_reply(reply));
    assert_eq!(
        first,
        vec![ChatBlock::code(LanguageTag::Jsx, "<App />")]
    );
}

#[test]
fn interpretation_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let reply = format!("HTML:\n<p>{i}</p>\nCSS:\np {{ order: {i}; }}");
                interpret_transform_reply(&reply)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.primary, format!("<p>{i}</p>"));
        assert_eq!(result.secondary, format!("p {{ order: {i}; }}"));
    }
}
