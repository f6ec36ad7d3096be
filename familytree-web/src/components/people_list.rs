use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PeopleListProps {
    pub people: Vec<String>,
}

#[function_component(PeopleList)]
pub fn people_list(props: &PeopleListProps) -> Html {
    html! {
        <ul id="people-list">
            { for props.people.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
        </ul>
    }
}
