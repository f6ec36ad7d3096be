//! Commands that act on the API through the session binder.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rpassword::prompt_password;
use shared::client::{Action, Binder, Credentials, PersonForm, TreeForm, View};
use shared::models::{Gender, PersonCreate, PersonId, RelationshipCreate, RelationshipType, TreeId};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Create an account and keep the issued token
    Signup(CredentialArgs),

    /// Sign in and keep the issued token
    Signin(CredentialArgs),

    /// Create, select, or inspect trees
    #[command(subcommand)]
    Tree(TreeCommand),

    /// Add or list people in the selected tree
    #[command(subcommand)]
    Person(PersonCommand),

    /// Link people in the selected tree
    #[command(subcommand)]
    Relationship(RelationshipCommand),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CredentialArgs {
    /// Account email address
    #[arg(long, short)]
    pub email: String,

    /// Account password; prompted for when omitted
    #[arg(long, short)]
    pub password: Option<String>,
}

impl CredentialArgs {
    fn into_credentials(self) -> Result<Credentials> {
        let password = match self.password {
            Some(password) => password,
            None => prompt_password("Password: ").context("failed to read password")?,
        };
        Ok(Credentials {
            email: self.email,
            password,
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TreeCommand {
    /// Create a tree and select it
    Create {
        /// Name of the new tree
        name: String,
    },

    /// Select an existing tree
    Use {
        /// Identifier of the tree
        id: TreeId,
    },

    /// Show the selected tree
    Show,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PersonCommand {
    /// Add a person to the selected tree
    Add {
        first_name: String,
        last_name: String,

        /// male, female, or unknown (default)
        #[arg(long)]
        gender: Option<Gender>,

        /// Birth date as YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },

    /// List the people of the selected tree
    List,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RelationshipCommand {
    /// Link two people of the selected tree
    Add {
        person_a: PersonId,
        person_b: PersonId,

        /// parent or spouse
        #[arg(long = "type", value_name = "TYPE")]
        kind: RelationshipType,
    },
}

/// Execute `command` against the binder, returning failures to the caller.
pub async fn run<V: View>(binder: &Binder<V>, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Signup(args) => {
            let credentials = args.into_credentials()?;
            binder
                .handle(Action::Signup(credentials))
                .await
                .context("signup failed")
        }
        SessionCommand::Signin(args) => {
            let credentials = args.into_credentials()?;
            binder
                .handle(Action::Signin(credentials))
                .await
                .context("signin failed")
        }
        SessionCommand::Tree(TreeCommand::Create { name }) => binder
            .handle(Action::CreateTree(TreeForm { name }))
            .await
            .context("failed to create tree"),
        SessionCommand::Tree(TreeCommand::Use { id }) => {
            binder.select_tree(id);
            binder.list_people().await.context("failed to list people")
        }
        SessionCommand::Tree(TreeCommand::Show) => show_tree(binder).await,
        SessionCommand::Person(PersonCommand::Add {
            first_name,
            last_name,
            gender: None,
            birth_date: None,
        }) => binder
            .handle(Action::CreatePerson(PersonForm {
                first_name,
                last_name,
            }))
            .await
            .context("failed to add person"),
        SessionCommand::Person(PersonCommand::Add {
            first_name,
            last_name,
            gender,
            birth_date,
        }) => binder
            .create_person_with(PersonCreate {
                gender: gender.unwrap_or_default(),
                birth_date,
                ..PersonCreate::named(first_name, last_name)
            })
            .await
            .context("failed to add person"),
        SessionCommand::Person(PersonCommand::List) => binder
            .handle(Action::ListPeople)
            .await
            .context("failed to list people"),
        SessionCommand::Relationship(RelationshipCommand::Add {
            person_a,
            person_b,
            kind,
        }) => {
            let relationship = binder
                .add_relationship(&RelationshipCreate {
                    person_a_id: person_a,
                    person_b_id: person_b,
                    kind,
                })
                .await
                .context("failed to add relationship")?;
            println!(
                "relationship {}: {} {} {}",
                relationship.id, relationship.person_a_id, relationship.kind, relationship.person_b_id
            );
            Ok(())
        }
    }
}

async fn show_tree<V: View>(binder: &Binder<V>) -> Result<()> {
    let session = binder.session();
    let Some(tree_id) = session.tree_id() else {
        bail!("no tree selected; pass --tree or run `tree create` first");
    };
    let tree = binder
        .api()
        .get_tree(tree_id, session.token())
        .await
        .with_context(|| format!("failed to fetch tree {tree_id}"))?;
    println!("{}: {}", tree.id, tree.name);
    Ok(())
}
