use crate::common::builders::{blank, block, closer, line, tokens};
use apiview_diff::{DiffKind, ReviewLine, find_line_diff};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// Every added or removed opener must be followed by its closer, with the
/// same kind and pointing back at it
fn assert_closers_paired(lines: &[ReviewLine]) {
    for (i, opener) in lines.iter().enumerate() {
        if opener.is_block_opener() && opener.diff_kind.is_change() {
            let closer = lines[i + 1..]
                .iter()
                .find(|l| l.is_context_end_line)
                .expect("opener without a closer");
            assert_eq!(closer.diff_kind, opener.diff_kind);
            assert_eq!(closer.related_to_line.as_deref(), opener.id());
        }
        assert_closers_paired(&opener.children);
    }
}

#[fixture]
fn two_classes() -> Vec<ReviewLine> {
    vec![block(
        "ns",
        "namespace N {",
        vec![
            block("A", "class A {", vec![line("A.m", "void M();")]),
            closer(),
            blank().related_to("A"),
            block("B", "class B {", vec![line("B.n", "void N();")]),
            closer(),
        ],
    )]
}

#[rstest]
fn removed_class_takes_its_closer_along(two_classes: Vec<ReviewLine>) {
    let mut new = two_classes.clone();
    new[0].children.drain(0..3);

    let diff = find_line_diff(&two_classes, &new);
    let children = &diff[0].children;

    assert_eq!(
        children
            .iter()
            .map(|l| (l.text(), l.diff_kind))
            .collect::<Vec<_>>(),
        vec![
            ("class A {".to_string(), DiffKind::Removed),
            ("}".to_string(), DiffKind::Removed),
            ("".to_string(), DiffKind::Removed),
            ("class B {".to_string(), DiffKind::Unchanged),
            ("}".to_string(), DiffKind::Unchanged),
        ]
    );
    assert_closers_paired(&diff);
}

#[rstest]
fn added_class_brings_its_own_closer(two_classes: Vec<ReviewLine>) {
    let mut new = two_classes.clone();
    new[0].children.push(block("C", "class C {", vec![line("C.o", "void O();")]));
    new[0].children.push(closer());

    let diff = find_line_diff(&two_classes, &new);
    let children = &diff[0].children;

    assert_eq!(children.len(), 7);
    assert_eq!(children[5].diff_kind, DiffKind::Added);
    assert_eq!(children[6].diff_kind, DiffKind::Added);
    assert_eq!(children[6].related_to_line.as_deref(), Some("C"));
    assert_closers_paired(&diff);
}

#[rstest]
fn changed_member_keeps_class_and_closer_unchanged(two_classes: Vec<ReviewLine>) {
    let mut new = two_classes.clone();
    new[0].children[0].children[0] = line("A.m", "void M(int x);");

    let diff = find_line_diff(&two_classes, &new);
    let class_a = &diff[0].children[0];

    assert_eq!(class_a.diff_kind, DiffKind::Unchanged);
    assert_eq!(diff[0].children[1].diff_kind, DiffKind::Unchanged);
    assert_eq!(
        class_a
            .children
            .iter()
            .map(|l| l.diff_kind)
            .collect::<Vec<_>>(),
        vec![DiffKind::Removed, DiffKind::Added]
    );
}

fn listing(lines: &[ReviewLine]) -> Vec<(String, DiffKind, Option<&str>)> {
    lines
        .iter()
        .map(|l| (l.text(), l.diff_kind, l.related_to_line.as_deref()))
        .collect()
}

#[test]
fn closer_pairs_with_closer_not_with_a_related_line() {
    let old = vec![
        line("c", "y"),
        ReviewLine::anonymous(tokens("x"))
            .with_children(vec![line("x", "x")])
            .related_to("c"),
        closer(),
    ];
    let new = vec![block("c", "y", vec![line("x", "x")]), closer()];

    let diff = find_line_diff(&old, &new);

    assert_eq!(
        listing(&diff),
        vec![
            ("y".to_string(), DiffKind::Unchanged, None),
            ("x".to_string(), DiffKind::Removed, Some("c")),
            ("}".to_string(), DiffKind::Unchanged, Some("c")),
        ]
    );
    assert_eq!(diff[0].children[0].diff_kind, DiffKind::Added);
}

#[rstest]
fn closers_point_at_their_opener_on_untouched_levels(two_classes: Vec<ReviewLine>) {
    let mut new = two_classes.clone();
    new.push(line("z", "class Z;"));

    let identical = find_line_diff(&two_classes, &two_classes);
    let beside_change = find_line_diff(&two_classes, &new);

    for diff in [&identical, &beside_change] {
        let children = &diff[0].children;
        assert_eq!(children[1].related_to_line.as_deref(), Some("A"));
        assert_eq!(children[4].related_to_line.as_deref(), Some("B"));
    }
    assert_eq!(identical[0].children, beside_change[0].children);
}
