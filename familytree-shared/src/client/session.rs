use crate::models::TreeId;

/// Credentials and selection held by one client instance.
///
/// Built once when a front end starts and changed only through the setters
/// below. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    tree_id: Option<TreeId>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the session with an existing token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    /// Seed the session with an already selected tree.
    #[must_use]
    pub fn with_tree(mut self, tree_id: TreeId) -> Self {
        self.select_tree(tree_id);
        self
    }

    /// The current token, if one is held. Never returns an empty string.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Store a token. An empty token leaves the session unauthenticated.
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn tree_id(&self) -> Option<TreeId> {
        self.tree_id
    }

    pub fn select_tree(&mut self, tree_id: TreeId) {
        self.tree_id = Some(tree_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.tree_id(), None);
    }

    #[test]
    fn empty_token_means_unauthenticated() {
        let mut session = Session::new().with_token("abc");
        assert_eq!(session.token(), Some("abc"));

        session.set_token("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn later_tree_selection_wins() {
        let mut session = Session::new().with_tree(TreeId(1));
        session.select_tree(TreeId(2));
        assert_eq!(session.tree_id(), Some(TreeId(2)));
    }

    #[test]
    fn clear_token_keeps_tree() {
        let mut session = Session::new().with_token("abc").with_tree(TreeId(5));
        session.clear_token();
        assert_eq!(session.token(), None);
        assert_eq!(session.tree_id(), Some(TreeId(5)));
    }
}
