use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadStateProps {
    pub loading: bool,
    pub error: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Spinner while loading, the error text on failure, otherwise the children.
#[function_component(LoadState)]
pub fn load_state(props: &LoadStateProps) -> Html {
    if props.loading {
        html! {
            <div class="load-state loading">
                <div class="spinner"></div>
            </div>
        }
    } else if let Some(error) = &props.error {
        html! {
            <div class="load-state error">
                <p>{ error }</p>
            </div>
        }
    } else {
        html! { <>{ for props.children.iter() }</> }
    }
}
