use crate::artifacts::model::is_false;
use serde::{Deserialize, Serialize};

/// Render class attached to tokens that differ inside a modified line
pub const DIFF_CHANGE_CLASS: &str = "diff-change";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenKind {
    #[default]
    Text,
    Punctuation,
    Keyword,
    TypeName,
    MemberName,
    StringLiteral,
    Literal,
    Comment,
}

/// One typed piece of a rendered line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReviewToken {
    pub value: String,
    #[serde(default)]
    pub kind: TokenKind,
    /// Informational token excluded from every equality decision
    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_diff: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_prefix_space: bool,
    #[serde(default = "default_suffix_space")]
    pub has_suffix_space: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_to_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub render_classes: Vec<String>,
}

fn default_suffix_space() -> bool {
    true
}

impl ReviewToken {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        ReviewToken {
            value: value.into(),
            kind,
            skip_diff: false,
            has_prefix_space: false,
            has_suffix_space: true,
            navigate_to_id: None,
            navigation_display_name: None,
            render_classes: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::Text)
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::Keyword)
    }

    pub fn punctuation(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::Punctuation)
    }

    pub fn type_name(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::TypeName)
    }

    pub fn member_name(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::MemberName)
    }

    pub fn comment(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::Comment)
    }

    pub fn skip_diff(mut self) -> Self {
        self.skip_diff = true;
        self
    }

    pub fn without_suffix_space(mut self) -> Self {
        self.has_suffix_space = false;
        self
    }

    pub fn with_prefix_space(mut self) -> Self {
        self.has_prefix_space = true;
        self
    }

    pub fn navigate_to(mut self, id: impl Into<String>) -> Self {
        self.navigate_to_id = Some(id.into());
        self
    }

    pub fn participates_in_diff(&self) -> bool {
        !self.skip_diff
    }

    pub fn is_marked_changed(&self) -> bool {
        self.render_classes.iter().any(|class| class == DIFF_CHANGE_CLASS)
    }

    pub(crate) fn mark_changed(&mut self) {
        if !self.is_marked_changed() {
            self.render_classes.push(DIFF_CHANGE_CLASS.to_string());
        }
    }
}

/// Render tokens the way a review page shows them on one line
pub fn render_tokens<'t>(tokens: impl IntoIterator<Item = &'t ReviewToken>) -> String {
    let mut rendered = String::new();
    for token in tokens {
        if token.has_prefix_space {
            rendered.push(' ');
        }
        rendered.push_str(&token.value);
        if token.has_suffix_space {
            rendered.push(' ');
        }
    }
    rendered.truncate(rendered.trim_end().len());
    rendered
}

/// Values of the tokens that take part in diffing, in order
///
/// Spacing flags are presentation only, so two token lists with the same
/// values compare equal however they render.
pub fn diff_values(tokens: &[ReviewToken]) -> impl Iterator<Item = &str> {
    tokens
        .iter()
        .filter(|token| token.participates_in_diff())
        .map(|token| token.value.as_str())
}
