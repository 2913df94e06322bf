use yew::prelude::*;
use yew_router::prelude::*;

use crate::logout::Logout;
use crate::session::use_session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/* ---------------- layout commun des vues connectées ------------------- */

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();

    // session absente → retour au formulaire de connexion
    if !session.is_logged_in() {
        return html!(<Redirect<Route> to={Route::Login} />);
    }

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Accueil))
    };
    let go_projects = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::MyProjects))
    };
    let go_options = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::ManageOptions))
    };

    html! {
        <>
            <header class="header">
                <div class="header-title" onclick={go_home}>{ "TeamBoard" }</div>
                <div class="nav-actions">
                    <button class="nav-btn" onclick={go_projects}>{ "Mes Projets" }</button>
                    // bouton visible uniquement pour les administrateurs
                    if session.is_admin() {
                        <button class="nav-btn" onclick={go_options}>{ "Gestion" }</button>
                    }
                    <Logout />
                </div>
            </header>

            <main class="main-content">
                { for props.children.iter() }
            </main>
        </>
    }
}
