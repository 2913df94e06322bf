use gloo_net::http::Method;
use log::error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_json;
use crate::models::{recent_projects, visible_projects, Project, User};
use crate::session::use_session;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                          composant Accueil                                 */
/* -------------------------------------------------------------------------- */

#[function_component(Accueil)]
pub fn accueil() -> Html {
    let session   = use_session();
    let navigator = use_navigator().unwrap();

    /* ---------------- states ---------------- */
    let projects  = use_state(Vec::<Project>::new);
    let error     = use_state(String::new);

    /* modal de création */
    let show_modal     = use_state(|| false);
    let project_name   = use_state(String::new);
    let description    = use_state(String::new);
    let all_users      = use_state(Vec::<User>::new);
    let selected_users = use_state(Vec::<String>::new);

    /* -------------- chargement initial (et à chaque changement de session) */
    {
        let projects = projects.clone();
        let error    = error.clone();
        use_effect_with((*session).clone(), move |sess| {
            let sess = sess.clone();
            spawn_local(async move {
                let token = sess.token.clone();
                match fetch_json::<(), Vec<Project>>(token.as_deref(), Method::GET, "/projects", None::<&()>).await {
                    Ok(all) => {
                        let visibles = visible_projects(all, sess.username.as_deref(), sess.is_admin());
                        // les 5 derniers projets, dans l'ordre inverse
                        projects.set(recent_projects(&visibles, 5));
                    }
                    Err(e) => {
                        error!("projets : {e:?}");
                        error.set("Impossible de récupérer les projets.".into());
                    }
                }
            });
            || ()
        });
    }

    /* -------------- handlers -------------- */

    // ouverture de la modal : on charge aussi la liste des utilisateurs
    let on_open_modal = {
        let show_modal = show_modal.clone();
        let all_users  = all_users.clone();
        let token      = session.token.clone();
        Callback::from(move |_| {
            show_modal.set(true);
            let all_users = all_users.clone();
            let token     = token.clone();
            spawn_local(async move {
                match fetch_json::<(), Vec<User>>(token.as_deref(), Method::GET, "/user", None::<&()>).await {
                    Ok(u) => all_users.set(u),
                    Err(e) => error!("utilisateurs : {e:?}"),
                }
            });
        })
    };

    let on_close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    // coche / décoche un collaborateur
    let on_toggle_user = {
        let selected_users = selected_users.clone();
        Callback::from(move |username: String| {
            let mut list = (*selected_users).clone();
            if list.contains(&username) {
                list.retain(|u| u != &username);
            } else {
                list.push(username);
            }
            selected_users.set(list);
        })
    };

    // création du projet
    let on_create_project = {
        let projects       = projects.clone();
        let show_modal     = show_modal.clone();
        let project_name   = project_name.clone();
        let description    = description.clone();
        let selected_users = selected_users.clone();
        let token          = session.token.clone();

        Callback::from(move |_| {
            if project_name.trim().is_empty() {
                gloo_dialogs::alert("Le nom du projet est obligatoire");
                return;
            }

            let projects       = projects.clone();
            let show_modal     = show_modal.clone();
            let project_name   = project_name.clone();
            let description    = description.clone();
            let selected_users = selected_users.clone();
            let token          = token.clone();

            spawn_local(async move {
                let body = serde_json::json!({
                    "project":     (*project_name).clone(),
                    "description": (*description).clone(),
                    "users":       (*selected_users).clone(),
                });

                match fetch_json::<_, Project>(token.as_deref(), Method::POST, "/projects/new", Some(&body)).await {
                    Ok(created) => {
                        // le projet créé rejoint la liste, en tête
                        let mut list = vec![created];
                        list.extend((*projects).iter().cloned());
                        projects.set(list);
                        show_modal.set(false);
                        project_name.set(String::new());
                        description.set(String::new());
                        selected_users.set(Vec::new());
                    }
                    Err(e) => error!("création projet : {e:?}"),
                }
            });
        })
    };

    let on_project_click = {
        let navigator = navigator.clone();
        Callback::from(move |id: i32| {
            navigator.push(&Route::ProjectDetails { id });
        })
    };

    /* ---------------------- rendu ---------------------- */
    let welcome = match &session.username {
        Some(name) => format!("Bienvenue, {name} !"),
        None => "Bienvenue sur TeamBoard !".to_string(),
    };

    html! {
        <div>
            <h1 style="text-align:center;font-size:2.5rem;margin-bottom:2rem;">{ welcome }</h1>

            // bouton admin : ouverture de la modal de création
            if session.is_admin() {
                <div style="text-align:center;margin-bottom:2rem;">
                    <button class="nav-btn success" onclick={on_open_modal}>{ "Créer un Projet" }</button>
                </div>
            }

            if !error.is_empty() {
                <p style="color:#f56565;text-align:center;">{ &*error }</p>
            }

            <section>
                <h2 style="color:#7f9cf5;">{ "Les derniers projets" }</h2>
                <ul class="project-grid">
                    { for projects.iter().map(|p| {
                        let cb = on_project_click.clone();
                        let id = p.id;
                        html! {
                            <li class="project-card" key={p.id}
                                onclick={Callback::from(move |_| cb.emit(id))}>
                                <h3 style="color:#a3bffa;margin-top:0;">{ &p.project }</h3>
                                <p style="font-size:0.875rem;color:#cbd5e0;">{ &p.description }</p>
                                <p style="font-size:0.75rem;color:#718096;">
                                    { "Utilisateurs : " }
                                    { if p.users.is_empty() { "Aucun utilisateur".to_string() } else { p.users.join(", ") } }
                                </p>
                            </li>
                        }
                    }) }
                </ul>
            </section>

            /* ------------ modal de création de projet -------- */
            if *show_modal {
                <div class="modal-backdrop">
                    <div class="modal-box">
                        <h2 style="margin-top:0;">{ "Créer un Projet" }</h2>
                        <input
                            type="text"
                            placeholder="Nom du projet"
                            value={(*project_name).clone()}
                            oninput={Callback::from({
                                let project_name = project_name.clone();
                                move |e: InputEvent| {
                                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                        project_name.set(input.value());
                                    }
                                }
                            })}
                        />
                        <textarea
                            placeholder="Description"
                            value={(*description).clone()}
                            oninput={Callback::from({
                                let description = description.clone();
                                move |e: InputEvent| {
                                    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                                        description.set(area.value());
                                    }
                                }
                            })}
                        />

                        // collaborateurs du futur projet
                        <p style="margin:0 0 0.5rem;">{ "Membres :" }</p>
                        <div style="max-height:10rem;overflow:auto;margin-bottom:1rem;">
                            { for all_users.iter().map(|u| {
                                let toggle   = on_toggle_user.clone();
                                let username = u.username.clone();
                                let checked  = selected_users.contains(&u.username);
                                html! {
                                    <label key={u.id} style="display:block;">
                                        <input
                                            type="checkbox"
                                            checked={checked}
                                            onchange={Callback::from(move |_| toggle.emit(username.clone()))}
                                        />
                                        { format!(" {}", u.username) }
                                    </label>
                                }
                            }) }
                        </div>

                        <div style="display:flex;justify-content:space-between;">
                            <button class="nav-btn" style="background:#718096;" onclick={on_close_modal}>
                                { "Annuler" }
                            </button>
                            <button class="nav-btn success" onclick={on_create_project}>
                                { "Créer" }
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
