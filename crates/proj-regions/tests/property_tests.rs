use proj_regions::{generate, parse};
use proptest::prelude::*;

fn plain_line() -> impl Strategy<Value = String> {
    "[ a-z0-9().=_${}-]{0,12}"
}

/// Well-nested lines: plain lines interleaved with regions up to a few levels deep.
fn nested_lines() -> impl Strategy<Value = Vec<String>> {
    let leaf = prop::collection::vec(plain_line(), 0..4);
    leaf.prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec(
            prop_oneof![
                plain_line().prop_map(|line| vec![line]),
                ("[a-z][a-z0-9_-]{0,8}", inner).prop_map(|(name, body)| {
                    let mut lines = vec![format!("# --== proj begin {} ==--", name)];
                    lines.extend(body);
                    lines.push(format!("# --== proj end {} ==--", name));
                    lines
                }),
            ],
            0..4,
        )
        .prop_map(|groups| groups.into_iter().flatten().collect())
    })
}

proptest! {
    #[test]
    fn test_generate_inverts_parse(lines in nested_lines()) {
        let text = lines.join("\n");
        let chunks = parse(&text).unwrap();
        prop_assert_eq!(generate(&chunks), text);
    }

    #[test]
    fn test_plain_text_round_trips(text in "[a-z #=\t\r\n-]{0,40}") {
        prop_assume!(!text.contains("# --== proj"));
        let chunks = parse(&text).unwrap();
        prop_assert_eq!(generate(&chunks), text);
    }
}
