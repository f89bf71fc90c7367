use apiview_diff::{DiffKind, ReviewLine, ReviewToken, find_line_diff};
use proptest::prelude::*;

/// Diff-relevant shape of a line: id, context-end flag, non-skip token values
#[derive(Debug, PartialEq, Eq)]
struct Shape {
    id: Option<String>,
    context_end: bool,
    values: Vec<String>,
    children: Vec<Shape>,
}

fn shape(lines: &[ReviewLine], dropped: DiffKind) -> Vec<Shape> {
    lines
        .iter()
        .filter(|line| line.diff_kind != dropped)
        .map(|line| Shape {
            id: line.id().map(str::to_string),
            context_end: line.is_context_end_line,
            values: line
                .tokens
                .iter()
                .filter(|token| token.participates_in_diff())
                .map(|token| token.value.clone())
                .collect(),
            children: shape(&line.children, dropped),
        })
        .collect()
}

fn arb_line() -> impl Strategy<Value = ReviewLine> {
    let parts = (
        prop::option::of("[a-c]"),
        "[xy]{1,2}",
        any::<bool>(),
        prop::option::of("[a-c]"),
        prop::option::of("[pq]"),
    );
    let make = |(id, text, context_end, related, note): (
        Option<String>,
        String,
        bool,
        Option<String>,
        Option<String>,
    )| {
        let mut tokens = vec![ReviewToken::text(text)];
        if let Some(note) = note {
            tokens.push(ReviewToken::comment(note).skip_diff());
        }
        ReviewLine {
            line_id: id,
            tokens,
            is_context_end_line: context_end,
            related_to_line: related,
            ..Default::default()
        }
    };

    let leaf = parts.clone().prop_map(make);
    leaf.prop_recursive(3, 32, 5, move |inner| {
        (parts.clone(), prop::collection::vec(inner, 0..5))
            .prop_map(move |(parts, children)| make(parts).with_children(children))
    })
}

fn arb_document() -> impl Strategy<Value = Vec<ReviewLine>> {
    prop::collection::vec(arb_line(), 0..6)
}

/// Entries of a well-formed document: a leaf line, or an opener followed by
/// its closer and optionally a blank line related to the opener
fn arb_entry(
    members: impl Strategy<Value = Vec<ReviewLine>>,
) -> impl Strategy<Value = Vec<ReviewLine>> {
    ("[a-d]", "[xy]", members, any::<bool>()).prop_map(|(id, text, members, related_blank)| {
        let opener = ReviewLine::new(id.clone(), vec![ReviewToken::text(text)]);
        if members.is_empty() {
            return vec![opener];
        }

        let mut entry = vec![
            opener.with_children(members),
            ReviewLine::context_end(vec![ReviewToken::punctuation("}")]),
        ];
        if related_blank {
            entry.push(ReviewLine::anonymous(Vec::new()).related_to(id));
        }
        entry
    })
}

fn arb_entries(
    members: impl Strategy<Value = Vec<ReviewLine>>,
) -> impl Strategy<Value = Vec<ReviewLine>> {
    prop::collection::vec(arb_entry(members), 0..5)
        .prop_map(|entries| entries.into_iter().flatten().collect())
}

fn arb_block_document() -> impl Strategy<Value = Vec<ReviewLine>> {
    arb_entries(arb_entries(arb_entries(Just(Vec::new()))))
}

/// Every opener is directly followed by its closer pointing back at it;
/// a changed opener's closer carries the same kind
fn check_context_pairing(lines: &[ReviewLine]) -> Result<(), TestCaseError> {
    for (i, line) in lines.iter().enumerate() {
        if line.is_block_opener() {
            let closer = lines.get(i + 1);
            prop_assert!(closer.is_some_and(|closer| closer.is_context_end_line));
            let closer = &lines[i + 1];
            prop_assert_eq!(closer.related_to_line.as_deref(), line.id());
            if line.diff_kind.is_change() {
                prop_assert_eq!(closer.diff_kind, line.diff_kind);
            }
        }
        check_context_pairing(&line.children)?;
    }
    Ok(())
}

fn count(lines: &[ReviewLine]) -> usize {
    lines.iter().map(|l| 1 + count(&l.children)).sum()
}

proptest! {
    #[test]
    fn diff_with_itself_is_all_unchanged(document in arb_document()) {
        let diff = find_line_diff(&document, &document);

        prop_assert_eq!(count(&diff), count(&document));
        prop_assert_eq!(shape(&diff, DiffKind::Added), shape(&document, DiffKind::Added));
        prop_assert!(shape(&diff, DiffKind::Unchanged).is_empty());
    }

    #[test]
    fn diff_is_deterministic(old in arb_document(), new in arb_document()) {
        prop_assert_eq!(find_line_diff(&old, &new), find_line_diff(&old, &new));
    }

    #[test]
    fn each_side_is_recovered_from_the_diff(old in arb_document(), new in arb_document()) {
        let diff = find_line_diff(&old, &new);

        prop_assert_eq!(shape(&diff, DiffKind::Added), shape(&old, DiffKind::Added));
        prop_assert_eq!(shape(&diff, DiffKind::Removed), shape(&new, DiffKind::Removed));
    }

    #[test]
    fn closers_follow_their_openers(old in arb_block_document(), new in arb_block_document()) {
        let diff = find_line_diff(&old, &new);

        check_context_pairing(&diff)?;
        prop_assert_eq!(shape(&diff, DiffKind::Added), shape(&old, DiffKind::Added));
        prop_assert_eq!(shape(&diff, DiffKind::Removed), shape(&new, DiffKind::Removed));
    }
}
