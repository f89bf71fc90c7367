use apiview_diff::artifacts::core::render::RenderNode;
use apiview_diff::{ApiTreeNode, DiffKind, ReviewLine, ReviewToken};
use rstest::fixture;

/// Whitespace-separated words as text tokens
pub fn tokens(text: &str) -> Vec<ReviewToken> {
    text.split_whitespace().map(ReviewToken::text).collect()
}

pub fn line(id: &str, text: &str) -> ReviewLine {
    ReviewLine::new(id, tokens(text))
}

pub fn block(id: &str, text: &str, children: Vec<ReviewLine>) -> ReviewLine {
    line(id, text).with_children(children)
}

pub fn closer() -> ReviewLine {
    ReviewLine::context_end(tokens("}"))
}

pub fn closer_with_id(id: &str) -> ReviewLine {
    closer().with_line_id(id)
}

pub fn blank() -> ReviewLine {
    ReviewLine::anonymous(Vec::new())
}

pub fn node(id: &str, children: Vec<ApiTreeNode>) -> ApiTreeNode {
    ApiTreeNode::new(id, id, "type")
        .with_top_tokens(tokens(id))
        .with_children(children)
}

/// Depth-first `(label, kind)` listing of an annotated forest
pub fn flatten<N: RenderNode>(forest: &[N]) -> Vec<(String, DiffKind)> {
    let mut flat = Vec::new();
    for node in forest {
        flat.push((node.label(), node.diff_kind()));
        flat.extend(flatten(node.children()));
    }
    flat
}

pub fn changed_count<N: RenderNode>(forest: &[N]) -> usize {
    flatten(forest)
        .iter()
        .filter(|(_, kind)| kind.is_change())
        .count()
}

/// 1A{2A,2B{3A,3B,3C},2C,2D{3A,3B}}
#[fixture]
pub fn old_forest() -> Vec<ApiTreeNode> {
    vec![node(
        "1A",
        vec![
            node("2A", vec![]),
            node("2B", vec![node("3A", vec![]), node("3B", vec![]), node("3C", vec![])]),
            node("2C", vec![]),
            node("2D", vec![node("3A", vec![]), node("3B", vec![])]),
        ],
    )]
}

/// 1A{2A,2B{3B,3C},2D{3A,3B,3C},2E}
#[fixture]
pub fn new_forest() -> Vec<ApiTreeNode> {
    vec![node(
        "1A",
        vec![
            node("2A", vec![]),
            node("2B", vec![node("3B", vec![]), node("3C", vec![])]),
            node("2D", vec![node("3A", vec![]), node("3B", vec![]), node("3C", vec![])]),
            node("2E", vec![]),
        ],
    )]
}

/// A namespace holding one class, the class closed by a context-end line
pub fn class_document(class_name: &str) -> Vec<ReviewLine> {
    vec![
        block(
            "1A",
            "namespace TestNamespace {",
            vec![
                block(
                    "2A",
                    &format!("public class {class_name} {{"),
                    vec![line("3A", "public void Method();")],
                ),
                closer_with_id("2BA"),
            ],
        ),
        closer_with_id("1BA"),
    ]
}
