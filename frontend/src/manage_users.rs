use gloo_dialogs::{alert, confirm};
use gloo_net::http::Method;
use log::{error, info};
use serde::Deserialize;
use web_sys::{HtmlInputElement, InputEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::models::{page_count, page_slice, remove_user, User};
use crate::session::use_session;

/// Pagination côté client, taille fixe.
const USERS_PER_PAGE: usize = 5;

#[derive(Deserialize)]
struct CreatedUser {
    user_id: i32,
}

/* -------------------------------------------------------------------------- */
/*                          chargement des données                            */
/* -------------------------------------------------------------------------- */

async fn reload_users(
    token: Option<String>,
    users_state: UseStateHandle<Vec<User>>,
    loading_state: UseStateHandle<bool>,
    error_state: UseStateHandle<String>,
) {
    loading_state.set(true);
    match fetch_json::<(), Vec<User>>(token.as_deref(), Method::GET, "/user", None::<&()>).await {
        Ok(u) => users_state.set(u),
        Err(e) => {
            error!("utilisateurs : {e:?}");
            error_state.set("Impossible de récupérer les utilisateurs.".into());
        }
    }
    loading_state.set(false);
}

/* -------------------------------------------------------------------------- */
/*                             composant principal                            */
/* -------------------------------------------------------------------------- */

#[function_component(ManageOptions)]
pub fn manage_options() -> Html {
    let session = use_session();

    /* ---------------- states ---------------- */
    let users        = use_state(Vec::<User>::new);
    let loading      = use_state(|| false);
    let error        = use_state(String::new);
    let current_page = use_state(|| 1usize);

    /* form states */
    let show_modal    = use_state(|| false);
    let new_username  = use_state(String::new);
    let new_password  = use_state(String::new);

    /* assignation de rôle */
    let selected_user = use_state(|| None::<i32>);
    let selected_role = use_state(String::new);

    /* -------------- chargement initial -------------- */
    {
        let users   = users.clone();
        let loading = loading.clone();
        let err     = error.clone();
        let token   = session.token.clone();
        use_effect_with(session.token.clone(), move |_| {
            spawn_local(async move { reload_users(token, users, loading, err).await });
            || ()
        });
    }

    /* -------------- handlers -------------- */

    // création utilisateur
    let on_create_user = {
        let users        = users.clone();
        let err          = error.clone();
        let show_modal   = show_modal.clone();
        let new_username = new_username.clone();
        let new_password = new_password.clone();
        let token        = session.token.clone();

        Callback::from(move |_| {
            let username = (*new_username).clone();
            let password = (*new_password).clone();

            if username.is_empty() || password.is_empty() {
                err.set("Veuillez fournir un nom d'utilisateur et un mot de passe.".into());
                return;
            }

            let users        = users.clone();
            let err          = err.clone();
            let show_modal   = show_modal.clone();
            let new_username = new_username.clone();
            let new_password = new_password.clone();
            let token        = token.clone();

            spawn_local(async move {
                let body = serde_json::json!({
                    "username": username,
                    "password": password,
                });

                match fetch_json::<_, CreatedUser>(token.as_deref(), Method::POST, "/user/admin/create", Some(&body)).await {
                    Ok(created) => {
                        info!("utilisateur créé");
                        // le nouvel utilisateur rejoint la liste locale
                        let mut list = (*users).clone();
                        list.push(User { id: created.user_id, username, roles: Vec::new() });
                        users.set(list);
                        new_username.set(String::new());
                        new_password.set(String::new());
                        show_modal.set(false);
                    }
                    Err(e) => {
                        error!("création utilisateur : {e:?}");
                        err.set("Impossible de créer un utilisateur.".into());
                    }
                }
            });
        })
    };

    // suppression utilisateur
    let on_delete_user = {
        let users = users.clone();
        let err   = error.clone();
        let token = session.token.clone();

        Callback::from(move |uid: i32| {
            if !confirm("Confirmer la suppression ?") {
                return;
            }
            let users = users.clone();
            let err   = err.clone();
            let token = token.clone();
            spawn_local(async move {
                match fetch_empty(token.as_deref(), Method::DELETE, &format!("/user/remove/{uid}"), None::<&()>).await {
                    Ok(()) => {
                        // retrait local : exactement cet id, rien d'autre
                        let mut list = (*users).clone();
                        remove_user(&mut list, uid);
                        users.set(list);
                    }
                    Err(e) => {
                        error!("suppression utilisateur : {e:?}");
                        err.set("Impossible de supprimer l'utilisateur.".into());
                    }
                }
            });
        })
    };

    // assignation de rôle par id libre, puis rechargement complet
    let on_assign_role = {
        let users         = users.clone();
        let loading       = loading.clone();
        let err           = error.clone();
        let selected_user = selected_user.clone();
        let selected_role = selected_role.clone();
        let token         = session.token.clone();

        Callback::from(move |_| {
            let Some(uid) = *selected_user else { return };
            let role_id = (*selected_role).clone();

            let users         = users.clone();
            let loading       = loading.clone();
            let err           = err.clone();
            let selected_user = selected_user.clone();
            let selected_role = selected_role.clone();
            let token         = token.clone();

            spawn_local(async move {
                let path = format!("/user/{uid}/assign-role/{role_id}");
                match fetch_empty(token.as_deref(), Method::POST, &path, None::<&()>).await {
                    Ok(()) => {
                        alert("Rôle assigné avec succès.");
                        selected_user.set(None);
                        selected_role.set(String::new());
                        reload_users(token, users, loading, err).await;
                    }
                    Err(e) => {
                        error!("assignation rôle : {e:?}");
                        err.set("Impossible d'assigner le rôle.".into());
                    }
                }
            });
        })
    };

    /* ---------------------- rendu ---------------------- */

    let total_pages = page_count(users.len(), USERS_PER_PAGE);
    let shown = page_slice(&users, *current_page, USERS_PER_PAGE).to_vec();

    html! {
        <div>
            <h1 style="font-size:2rem;margin-bottom:1.5rem;">{ "Gestion des utilisateurs" }</h1>

            if !error.is_empty() {
                <p style="color:#f56565;text-align:center;">{ &*error }</p>
            }

            if *loading {
                <p style="color:#a0aec0;text-align:center;">{ "Chargement..." }</p>
            } else {
                <div>
                    <h2>{ "Utilisateurs" }</h2>
                    <ul style="list-style:none;padding:0;display:flex;flex-direction:column;gap:1rem;">
                        { for shown.iter().map(|u| {
                            let on_del    = on_delete_user.clone();
                            let sel       = selected_user.clone();
                            let uid       = u.id;
                            html! {
                                <li key={u.id} class="project-card" style="cursor:default;">
                                    <div style="display:flex;justify-content:space-between;align-items:center;">
                                        <span>{ &u.username }</span>
                                        <div style="display:flex;gap:0.5rem;">
                                            <button class="nav-btn danger"
                                                onclick={Callback::from(move |_| on_del.emit(uid))}>
                                                { "Supprimer" }
                                            </button>
                                            <button class="nav-btn" style="background:#d69e2e;"
                                                onclick={Callback::from(move |_| sel.set(Some(uid)))}>
                                                { "Assigner un rôle" }
                                            </button>
                                        </div>
                                    </div>
                                    if !u.roles.is_empty() {
                                        <p style="font-size:0.875rem;color:#a0aec0;margin:0.5rem 0 0;">
                                            { format!("Rôle(s): {}", u.roles.join(", ")) }
                                        </p>
                                    }
                                </li>
                            }
                        }) }
                    </ul>

                    /* ---------------- pagination ---------------- */
                    <div style="display:flex;justify-content:center;gap:0.5rem;margin:2rem 0;">
                        { for (1..=total_pages).map(|page| {
                            let cp = current_page.clone();
                            let active = *current_page == page;
                            html! {
                                <button key={page}
                                    class="nav-btn"
                                    style={ if active { "background:#5a67d8;" } else { "background:#4a5568;" } }
                                    onclick={Callback::from(move |_| cp.set(page))}>
                                    { page }
                                </button>
                            }
                        }) }
                    </div>

                    <div style="text-align:center;">
                        <button class="nav-btn success" onclick={{
                            let show_modal = show_modal.clone();
                            Callback::from(move |_| show_modal.set(true))
                        }}>
                            { "Ajouter un utilisateur" }
                        </button>
                    </div>
                </div>
            }

            /* ------------ modal de création d'utilisateur -------- */
            if *show_modal {
                <div class="modal-backdrop">
                    <div class="modal-box">
                        <h2 style="margin-top:0;">{ "Créer un utilisateur" }</h2>
                        <input
                            type="text"
                            placeholder="Nom d'utilisateur"
                            value={(*new_username).clone()}
                            oninput={Callback::from({
                                let new_username = new_username.clone();
                                move |e: InputEvent| {
                                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                        new_username.set(input.value());
                                    }
                                }
                            })}
                        />
                        <input
                            type="password"
                            placeholder="Mot de passe"
                            value={(*new_password).clone()}
                            oninput={Callback::from({
                                let new_password = new_password.clone();
                                move |e: InputEvent| {
                                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                        new_password.set(input.value());
                                    }
                                }
                            })}
                        />
                        <div style="display:flex;justify-content:space-between;">
                            <button class="nav-btn success" onclick={on_create_user.clone()}>{ "Créer" }</button>
                            <button class="nav-btn danger" onclick={{
                                let show_modal = show_modal.clone();
                                Callback::from(move |_| show_modal.set(false))
                            }}>{ "Annuler" }</button>
                        </div>
                    </div>
                </div>
            }

            /* ------------ modal d'assignation de rôle -------- */
            if selected_user.is_some() {
                <div class="modal-backdrop">
                    <div class="modal-box">
                        <h2 style="margin-top:0;">{ "Assigner un rôle" }</h2>
                        // id de rôle saisi librement, validé par l'API seule
                        <input
                            type="text"
                            placeholder="ID du rôle"
                            value={(*selected_role).clone()}
                            oninput={Callback::from({
                                let selected_role = selected_role.clone();
                                move |e: InputEvent| {
                                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                        selected_role.set(input.value());
                                    }
                                }
                            })}
                        />
                        <div style="display:flex;justify-content:space-between;">
                            <button class="nav-btn success" onclick={on_assign_role.clone()}>{ "Assigner" }</button>
                            <button class="nav-btn danger" onclick={{
                                let selected_user = selected_user.clone();
                                Callback::from(move |_| selected_user.set(None))
                            }}>{ "Annuler" }</button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
