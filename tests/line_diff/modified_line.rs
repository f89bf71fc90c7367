use crate::common::builders::{block, changed_count, class_document, line};
use apiview_diff::{
    DiffKind, DiffOptions, ReviewLine, ReviewToken, find_line_diff, find_line_diff_with_options,
};
use pretty_assertions::assert_eq;

fn marked_tokens(line: &ReviewLine) -> Vec<&str> {
    line.tokens
        .iter()
        .filter(|token| token.is_marked_changed())
        .map(|token| token.value.as_str())
        .collect()
}

#[test]
fn renamed_class_is_removed_and_added_with_its_closer() {
    let old = class_document("TestClass");
    let new = class_document("TestClass1");

    let diff = find_line_diff(&old, &new);
    let namespace = &diff[0];

    assert_eq!(namespace.diff_kind, DiffKind::Unchanged);
    assert_eq!(
        namespace
            .children
            .iter()
            .map(|l| (l.text(), l.diff_kind, l.related_to_line.as_deref()))
            .collect::<Vec<_>>(),
        vec![
            ("public class TestClass {".to_string(), DiffKind::Removed, None),
            ("}".to_string(), DiffKind::Removed, Some("2A")),
            ("public class TestClass1 {".to_string(), DiffKind::Added, None),
            ("}".to_string(), DiffKind::Added, Some("2A")),
        ]
    );
    // class line, its member and its closer on each side
    assert_eq!(changed_count(&diff), 6);
    assert_eq!(diff[1].diff_kind, DiffKind::Unchanged);
}

#[test]
fn only_the_renamed_token_is_marked() {
    let diff = find_line_diff(&class_document("TestClass"), &class_document("TestClass1"));
    let children = &diff[0].children;

    assert_eq!(marked_tokens(&children[0]), vec!["TestClass"]);
    assert_eq!(marked_tokens(&children[2]), vec!["TestClass1"]);
    assert!(marked_tokens(&children[1]).is_empty());
    assert!(marked_tokens(&children[3]).is_empty());
}

#[test]
fn token_marking_follows_the_options() {
    let options = DiffOptions::default().without_token_marks();

    let diff = find_line_diff_with_options(
        &class_document("TestClass"),
        &class_document("TestClass1"),
        &options,
    );

    assert!(diff[0].children.iter().all(|l| marked_tokens(l).is_empty()));
}

fn signature(tokens: Vec<ReviewToken>, member: &str) -> Vec<ReviewLine> {
    vec![block(
        "p",
        "package p",
        vec![ReviewLine::new("foo", tokens), line("bar", member)],
    )]
}

fn kinds(lines: &[ReviewLine]) -> Vec<(Option<&str>, DiffKind)> {
    lines.iter().map(|l| (l.id(), l.diff_kind)).collect()
}

#[test]
fn spacing_only_change_stays_unchanged_next_to_a_changed_sibling() {
    let tight = vec![
        ReviewToken::text("def foo").without_suffix_space(),
        ReviewToken::punctuation("("),
    ];
    let loose = vec![ReviewToken::text("def foo"), ReviewToken::punctuation("(")];

    let alone = find_line_diff(&signature(tight.clone(), "x"), &signature(loose.clone(), "x"));
    let beside_change = find_line_diff(&signature(tight, "x"), &signature(loose, "y"));

    assert_eq!(changed_count(&alone), 0);
    assert_eq!(
        kinds(&beside_change[0].children),
        vec![
            (Some("foo"), DiffKind::Unchanged),
            (Some("bar"), DiffKind::Removed),
            (Some("bar"), DiffKind::Added),
        ]
    );
}

#[test]
fn moved_token_boundary_is_a_change() {
    let old = signature(
        vec![
            ReviewToken::type_name("List<").without_suffix_space(),
            ReviewToken::type_name("int>"),
        ],
        "x",
    );
    let new = signature(
        vec![
            ReviewToken::type_name("List<i").without_suffix_space(),
            ReviewToken::type_name("nt>"),
        ],
        "x",
    );

    let diff = find_line_diff(&old, &new);
    let children = &diff[0].children;

    assert_eq!(children[0].text(), children[1].text());
    assert_eq!(
        kinds(children),
        vec![
            (Some("foo"), DiffKind::Removed),
            (Some("foo"), DiffKind::Added),
            (Some("bar"), DiffKind::Unchanged),
        ]
    );
    assert_eq!(marked_tokens(&children[0]), vec!["List<", "int>"]);
    assert_eq!(marked_tokens(&children[1]), vec!["List<i", "nt>"]);
}
