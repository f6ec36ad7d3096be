use shared::client::{Action, PersonForm as PersonFields};
use yew::prelude::*;

use super::input_value;

#[derive(Properties, PartialEq)]
pub struct PersonFormProps {
    pub on_action: Callback<Action>,
}

#[function_component(PersonForm)]
pub fn person_form(props: &PersonFormProps) -> Html {
    let first_name = use_node_ref();
    let last_name = use_node_ref();

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_action.emit(Action::CreatePerson(PersonFields {
                first_name: input_value(&first_name),
                last_name: input_value(&last_name),
            }));
        })
    };

    html! {
        <section class="card">
            <h2>{"Add person"}</h2>
            <form id="person-form" {onsubmit}>
                <input id="person-first" type="text" placeholder="First name" ref={first_name} />
                <input id="person-last" type="text" placeholder="Last name" ref={last_name} />
                <button type="submit">{"Add"}</button>
            </form>
        </section>
    }
}
