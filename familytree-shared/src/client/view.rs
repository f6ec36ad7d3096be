use crate::models::{PersonResponse, TreeId};

/// Output surface driven by the [`Binder`](super::Binder).
///
/// Implementations decide how each update is shown: the browser front end
/// writes into fixed elements, the terminal front end prints.
pub trait View {
    /// Display the token issued by signup or signin.
    fn show_token(&self, token: &str);

    /// Display the currently selected tree.
    fn show_tree_id(&self, tree_id: TreeId);

    /// Replace the whole person list with `lines`.
    fn render_people(&self, lines: &[String]);

    /// Blocking, user-facing message.
    fn alert(&self, message: &str);

    /// Report a failed action.
    fn show_error(&self, message: &str);
}

/// Format a person the way the list shows it: `"{id}: {first} {last}"`.
#[must_use]
pub fn person_line(person: &PersonResponse) -> String {
    format!("{}: {} {}", person.id, person.first_name, person.last_name)
}
