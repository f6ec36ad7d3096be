use shared::client::View;
use shared::models::TreeId;
use yew::prelude::*;

/// Binder output mapped onto the page's component state.
#[derive(Clone)]
pub struct WebView {
    token: UseStateSetter<String>,
    tree_id: UseStateSetter<Option<TreeId>>,
    people: UseStateSetter<Vec<String>>,
    error: UseStateSetter<Option<String>>,
}

impl WebView {
    pub fn new(
        token: UseStateSetter<String>,
        tree_id: UseStateSetter<Option<TreeId>>,
        people: UseStateSetter<Vec<String>>,
        error: UseStateSetter<Option<String>>,
    ) -> Self {
        Self {
            token,
            tree_id,
            people,
            error,
        }
    }

    /// Hide the error left by a previous action.
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl View for WebView {
    fn show_token(&self, token: &str) {
        self.token.set(token.to_string());
    }

    fn show_tree_id(&self, tree_id: TreeId) {
        self.tree_id.set(Some(tree_id));
    }

    fn render_people(&self, lines: &[String]) {
        self.people.set(lines.to_vec());
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
    }
}
