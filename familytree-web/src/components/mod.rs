pub mod auth_form;
pub mod people_list;
pub mod person_form;
pub mod tree_form;

use web_sys::HtmlInputElement;
use yew::NodeRef;

/// Current text of the input behind `node`, or an empty string.
pub(crate) fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}
