use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{store_logout, use_session};
use crate::Route;

#[function_component(Logout)]
pub fn logout() -> Html {
    let navigator = use_navigator().unwrap();
    let session = use_session();

    let onclick = Callback::from(move |_| {
        // pas d'endpoint de déconnexion : on vide simplement le store local
        store_logout(&session);
        navigator.replace(&Route::Login);
    });

    html! { <button class="nav-btn danger" {onclick}>{ "Déconnexion" }</button> }
}
