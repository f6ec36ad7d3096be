use shared::client::View;
use shared::models::TreeId;

/// Prints binder updates: results to stdout, alerts and errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalView;

impl View for TerminalView {
    fn show_token(&self, token: &str) {
        println!("token: {token}");
    }

    fn show_tree_id(&self, tree_id: TreeId) {
        println!("tree: {tree_id}");
    }

    fn render_people(&self, lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
