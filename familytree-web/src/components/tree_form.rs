use shared::client::{Action, TreeForm as TreeFields};
use yew::prelude::*;

use super::input_value;

#[derive(Properties, PartialEq)]
pub struct TreeFormProps {
    pub on_action: Callback<Action>,
}

#[function_component(TreeForm)]
pub fn tree_form(props: &TreeFormProps) -> Html {
    let name = use_node_ref();

    let onsubmit = {
        let name = name.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_action.emit(Action::CreateTree(TreeFields {
                name: input_value(&name),
            }));
        })
    };

    html! {
        <section class="card">
            <h2>{"Create tree"}</h2>
            <form id="tree-form" {onsubmit}>
                <input id="tree-name" type="text" placeholder="Tree name" ref={name} />
                <button type="submit">{"Create"}</button>
            </form>
        </section>
    }
}
