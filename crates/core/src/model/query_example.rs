use crate::model::Snippet;

/// An illustrative query paired with its canned output.
///
/// The result is static text fixed at data-definition time; nothing in the
/// app executes the code to produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryExample {
    pub title: &'static str,
    pub description: &'static str,
    pub code: Snippet,
    pub result: Option<Snippet>,
}
