use std::cell::RefCell;

use tracing::{debug, info, warn};

use super::{ApiClient, ClientError, Session, View, person_line};
use crate::models::{
    PersonCreate, RelationshipCreate, RelationshipResponse, SigninRequest, SignupRequest,
    TreeCreate, TreeId, TreeResponse,
};

/// Alert shown when a person is submitted before any tree exists.
pub const NO_TREE_ALERT: &str = "Create a tree first";

/// Email and password as typed into a signup or signin form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeForm {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
}

/// A user action, independent of how the front end collected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Signup(Credentials),
    Signin(Credentials),
    CreateTree(TreeForm),
    CreatePerson(PersonForm),
    ListPeople,
}

impl Action {
    /// Stable name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Signup(_) => "signup",
            Self::Signin(_) => "signin",
            Self::CreateTree(_) => "create_tree",
            Self::CreatePerson(_) => "create_person",
            Self::ListPeople => "list_people",
        }
    }
}

/// Routes actions to the API and their results to a [`View`].
///
/// The session is borrowed only between awaits, so overlapping actions
/// never conflict on the borrow; whichever response lands last wins.
#[derive(Debug)]
pub struct Binder<V> {
    api: ApiClient,
    session: RefCell<Session>,
    view: V,
}

impl<V: View> Binder<V> {
    pub fn new(api: ApiClient, view: V) -> Self {
        Self::with_session(api, Session::new(), view)
    }

    pub fn with_session(api: ApiClient, session: Session, view: V) -> Self {
        Self {
            api,
            session: RefCell::new(session),
            view,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    fn token(&self) -> Option<String> {
        self.session.borrow().token().map(str::to_string)
    }

    fn tree_id(&self) -> Option<TreeId> {
        self.session.borrow().tree_id()
    }

    /// Run `action` and report any failure through [`View::show_error`].
    ///
    /// A person submitted without a tree is reported by the alert alone.
    ///
    /// # Errors
    /// Returns the handler's error after it has been shown.
    pub async fn dispatch(&self, action: Action) -> Result<(), ClientError> {
        let name = action.name();
        let result = self.handle(action).await;
        match &result {
            Err(ClientError::NoTreeSelected) | Ok(()) => {}
            Err(err) => {
                warn!(action = name, error = %err, "action failed");
                self.view.show_error(&err.to_string());
            }
        }
        result
    }

    /// Run `action` and hand any failure back to the caller untouched.
    ///
    /// # Errors
    /// Returns the error of the handler the action maps to.
    pub async fn handle(&self, action: Action) -> Result<(), ClientError> {
        debug!(action = action.name(), "handling action");
        match action {
            Action::Signup(form) => self.signup(&form).await,
            Action::Signin(form) => self.signin(&form).await,
            Action::CreateTree(form) => self.create_tree(&form).await.map(|_| ()),
            Action::CreatePerson(form) => self.create_person(&form).await,
            Action::ListPeople => self.list_people().await,
        }
    }

    /// # Errors
    /// Fails when the signup request fails; the session is left unchanged.
    pub async fn signup(&self, form: &Credentials) -> Result<(), ClientError> {
        let request = SignupRequest {
            email: form.email.clone(),
            password: form.password.clone(),
        };
        let token = self.token();
        let response = self.api.signup(&request, token.as_deref()).await?;
        self.store_token(response.access_token);
        Ok(())
    }

    /// # Errors
    /// Fails when the signin request fails; the session is left unchanged.
    pub async fn signin(&self, form: &Credentials) -> Result<(), ClientError> {
        let request = SigninRequest {
            email: form.email.clone(),
            password: form.password.clone(),
        };
        let token = self.token();
        let response = self.api.signin(&request, token.as_deref()).await?;
        self.store_token(response.access_token);
        Ok(())
    }

    fn store_token(&self, token: String) {
        self.session.borrow_mut().set_token(token.as_str());
        info!("session token updated");
        self.view.show_token(&token);
    }

    /// Create a tree, select it, and refresh the person list.
    ///
    /// # Errors
    /// Fails when the create request fails or the follow-up list request
    /// cannot be sent.
    pub async fn create_tree(&self, form: &TreeForm) -> Result<TreeResponse, ClientError> {
        let request = TreeCreate {
            name: form.name.clone(),
        };
        let token = self.token();
        let tree = self.api.create_tree(&request, token.as_deref()).await?;
        self.select_tree(tree.id);
        self.list_people().await?;
        Ok(tree)
    }

    /// Make `tree_id` the current tree and display it.
    pub fn select_tree(&self, tree_id: TreeId) {
        self.session.borrow_mut().select_tree(tree_id);
        info!(%tree_id, "tree selected");
        self.view.show_tree_id(tree_id);
    }

    /// Add a person with the placeholder gender, then refresh the list.
    ///
    /// # Errors
    /// Returns [`ClientError::NoTreeSelected`] after alerting when no tree is
    /// selected; otherwise fails when either request fails.
    pub async fn create_person(&self, form: &PersonForm) -> Result<(), ClientError> {
        self.create_person_with(PersonCreate::named(
            form.first_name.clone(),
            form.last_name.clone(),
        ))
        .await
    }

    /// Add a fully specified person, then refresh the list.
    ///
    /// # Errors
    /// Same as [`create_person`](Self::create_person).
    pub async fn create_person_with(&self, person: PersonCreate) -> Result<(), ClientError> {
        let tree_id = self.require_tree()?;
        let token = self.token();
        self.api
            .create_person(tree_id, &person, token.as_deref())
            .await?;
        self.list_people().await
    }

    /// Link two people in the current tree.
    ///
    /// # Errors
    /// Returns [`ClientError::NoTreeSelected`] after alerting when no tree is
    /// selected; otherwise fails when the request fails.
    pub async fn add_relationship(
        &self,
        relationship: &RelationshipCreate,
    ) -> Result<RelationshipResponse, ClientError> {
        let tree_id = self.require_tree()?;
        let token = self.token();
        self.api
            .add_relationship(tree_id, relationship, token.as_deref())
            .await
    }

    fn require_tree(&self) -> Result<TreeId, ClientError> {
        self.tree_id().ok_or_else(|| {
            self.view.alert(NO_TREE_ALERT);
            ClientError::NoTreeSelected
        })
    }

    /// Re-render the person list of the current tree.
    ///
    /// Does nothing without a tree, and leaves the list untouched when the
    /// server answers with a non-success status.
    ///
    /// # Errors
    /// Fails only when the request cannot be sent or the reply does not decode.
    pub async fn list_people(&self) -> Result<(), ClientError> {
        let Some(tree_id) = self.tree_id() else {
            debug!("no tree selected; skipping person list refresh");
            return Ok(());
        };
        let token = self.token();
        if let Some(people) = self
            .api
            .try_list_persons(tree_id, token.as_deref())
            .await?
        {
            let lines: Vec<String> = people.iter().map(person_line).collect();
            self.view.render_people(&lines);
        }
        Ok(())
    }
}
