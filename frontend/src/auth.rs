use gloo_net::http::Method;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_json;
use crate::session::{store_login, use_session, LoginPayload};
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                     structures échangées avec l'API                        */
/* -------------------------------------------------------------------------- */

#[derive(serde::Serialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(serde::Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    roles: Vec<String>,
}

/* -------------------------------------------------------------------------- */
/*                               composant login                              */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let navigator      = use_navigator().unwrap();
    let session        = use_session();
    let username_ref   = use_node_ref();
    let password_ref   = use_node_ref();
    let message_state  = use_state(String::new);

    // déjà connecté (session réhydratée) → directement l'accueil
    if session.is_logged_in() {
        return html!(<Redirect<Route> to={Route::Accueil} />);
    }

    /* ------------------ callback du <form onsubmit=…> --------------------- */
    let onsubmit = {
        let username_ref   = username_ref.clone();
        let password_ref   = password_ref.clone();
        let message_state  = message_state.clone();
        let navigator      = navigator.clone();
        let session        = session.clone();

        Callback::from(move |ev: yew::events::SubmitEvent| {
            ev.prevent_default();

            let username = username_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value();

            spawn_local({
                let message_state = message_state.clone();
                let navigator     = navigator.clone();
                let session       = session.clone();

                async move {
                    let body = LoginBody { username: username.clone(), password };
                    let resp =
                        fetch_json::<_, LoginResponse>(None, Method::POST, "/user/login", Some(&body))
                            .await;

                    match resp {
                        Ok(r) => {
                            // les trois champs remplacés d'un bloc
                            store_login(
                                &session,
                                LoginPayload { token: r.token, username, roles: r.roles },
                            );
                            navigator.push(&Route::Accueil);
                        }
                        // échec : le store n'est pas touché
                        Err(e) => {
                            log::error!("login : {e:?}");
                            message_state.set("Échec de la connexion".into());
                        }
                    }
                }
            });
        })
    };

    /* ---------------------------- rendu ---------------------------------- */
    html! {
        <div class="login-container">
            <h1>{ "Bienvenue sur TeamBoard !" }</h1>
            <h2>{ "Connexion" }</h2>

            <form {onsubmit}>
                <input ref={username_ref} type="text"     placeholder="Nom d'utilisateur" />
                <input ref={password_ref} type="password" placeholder="Mot de passe" />
                <button class="nav-btn" type="submit">{ "Se connecter" }</button>
            </form>

            {
                if !message_state.is_empty() {
                    html!(<p style="color:#f56565;">{ &*message_state }</p>)
                } else {
                    Html::default()
                }
            }
        </div>
    }
}
