use crate::common::builders::{block, closer, line};
use apiview_diff::{DiffKind, ReviewLine, ReviewToken, find_line_diff};

fn with_note(mut line: ReviewLine, note: &str) -> ReviewLine {
    line.tokens.push(ReviewToken::comment(note).skip_diff());
    line
}

fn all_unchanged(lines: &[ReviewLine]) -> bool {
    lines
        .iter()
        .all(|l| l.diff_kind == DiffKind::Unchanged && all_unchanged(&l.children))
}

#[test]
fn skip_diff_tokens_never_change_the_result() {
    let old = vec![
        block(
            "A",
            "class A {",
            vec![with_note(line("A.m", "void M();"), "// added in 1.0")],
        ),
        closer(),
    ];
    let new = vec![
        block(
            "A",
            "class A {",
            vec![with_note(line("A.m", "void M();"), "// added in 2.0")],
        ),
        closer(),
    ];

    let diff = find_line_diff(&old, &new);

    assert!(all_unchanged(&diff));
}

#[test]
fn rendered_text_keeps_skipped_tokens() {
    let old = vec![with_note(line("A", "class A"), "// v1")];
    let new = vec![with_note(line("A", "class A"), "// v2")];

    let diff = find_line_diff(&old, &new);

    assert_eq!(diff[0].diff_kind, DiffKind::Unchanged);
    assert!(diff[0].tokens.iter().all(|t| !t.is_marked_changed()));
    assert!(diff[0].text().ends_with("// v1"));
}
