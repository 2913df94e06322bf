use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::use_session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    /// Rôle exigé pour rendre les enfants (ex. `ROLE_ADMIN`).
    pub need: &'static str,
    #[prop_or_default]
    pub children: Children,
}

/// Le gating par rôle est purement présentationnel : l'API reste seule
/// juge des autorisations.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let session = use_session();

    if !session.is_logged_in() {
        return html!(<Redirect<Route> to={Route::Login} />);
    }
    if session.roles.iter().any(|r| r == props.need) {
        html! { for props.children.iter() }
    } else {
        html!(<h1 style="text-align:center;margin-top:4rem;">{ "403 – accès refusé" }</h1>)
    }
}
