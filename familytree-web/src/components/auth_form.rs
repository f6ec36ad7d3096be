use shared::client::{Action, Credentials};
use yew::prelude::*;

use super::input_value;

/// Which account endpoint a form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Signup,
    Signin,
}

impl AuthMode {
    /// Prefix of the form's element ids.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Signin => "signin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Signup => "Sign up",
            Self::Signin => "Sign in",
        }
    }

    pub fn action(self, credentials: Credentials) -> Action {
        match self {
            Self::Signup => Action::Signup(credentials),
            Self::Signin => Action::Signin(credentials),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
    pub on_action: Callback<Action>,
}

#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let email = use_node_ref();
    let password = use_node_ref();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let mode = props.mode;
        let on_action = props.on_action.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_action.emit(mode.action(Credentials {
                email: input_value(&email),
                password: input_value(&password),
            }));
        })
    };

    let prefix = props.mode.prefix();
    html! {
        <section class="card">
            <h2>{props.mode.title()}</h2>
            <form id={format!("{prefix}-form")} {onsubmit}>
                <input id={format!("{prefix}-email")} type="email" placeholder="Email" ref={email} />
                <input id={format!("{prefix}-password")} type="password" placeholder="Password" ref={password} />
                <button type="submit">{props.mode.title()}</button>
            </form>
        </section>
    }
}
