use std::rc::Rc;

use shared::client::{Action, Binder};
use shared::models::TreeId;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::auth_form::{AuthForm, AuthMode};
use crate::components::people_list::PeopleList;
use crate::components::person_form::PersonForm;
use crate::components::tree_form::TreeForm;
use crate::view::WebView;

#[function_component(App)]
pub fn app() -> Html {
    let token = use_state(String::new);
    let tree_id = use_state(|| None::<TreeId>);
    let people = use_state(Vec::<String>::new);
    let error = use_state(|| None::<String>);

    let view = WebView::new(
        token.setter(),
        tree_id.setter(),
        people.setter(),
        error.setter(),
    );
    let binder: Rc<Binder<WebView>> =
        use_memo((), move |_| Binder::new(api::shared_client(), view));

    let on_action = {
        let binder = binder.clone();
        Callback::from(move |action: Action| {
            let binder = binder.clone();
            binder.view().clear_error();
            spawn_local(async move {
                let name = action.name();
                if let Err(err) = binder.dispatch(action).await {
                    web_sys::console::warn_1(&JsValue::from_str(&format!("{name} failed: {err}")));
                }
            });
        })
    };

    let on_refresh = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(Action::ListPeople))
    };

    let tree_label = (*tree_id).map(|id| id.to_string()).unwrap_or_default();

    html! {
        <main class="container">
            <h1>{"Family Tree"}</h1>
            <div class="status">
                <p>{"Token: "}<span id="token">{ (*token).clone() }</span></p>
                <p>{"Tree: "}<span id="tree-id">{ tree_label }</span></p>
            </div>
            if let Some(message) = (*error).clone() {
                <p id="error" class="error">{ message }</p>
            }
            <AuthForm mode={AuthMode::Signup} on_action={on_action.clone()} />
            <AuthForm mode={AuthMode::Signin} on_action={on_action.clone()} />
            <TreeForm on_action={on_action.clone()} />
            <PersonForm {on_action} />
            <section class="card">
                <h2>{"People"}</h2>
                <button id="list-people" onclick={on_refresh}>
                    {"Refresh"}
                </button>
                <PeopleList people={(*people).clone()} />
            </section>
        </main>
    }
}
