use gloo_dialogs::confirm;
use gloo_net::http::Method;
use log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::models::{Note, Project, User};
use crate::session::{use_session, Session};
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                          helpers front / règles pures                      */
/* -------------------------------------------------------------------------- */

/// Contenu de tâche refusé sans appel réseau.
fn task_is_blank(content: &str) -> bool {
    content.trim().is_empty()
}

/// La note est supprimable par son auteur, ou par un admin.
/// Dérivé des données déjà chargées : pas de second aller-retour réseau.
fn can_delete_note(note: &Note, session: &Session) -> bool {
    session.is_admin() || session.username.as_deref() == Some(note.users.as_str())
}

/* -------------------------------------------------------------------------- */
/*                          chargement des données                            */
/* -------------------------------------------------------------------------- */

async fn reload_project(
    token: Option<String>,
    id: i32,
    project_state: UseStateHandle<Option<Project>>,
    loading_state: UseStateHandle<bool>,
    error_state: UseStateHandle<String>,
) {
    let path = format!("/projects/{id}");
    match fetch_json::<(), Project>(token.as_deref(), Method::GET, &path, None::<&()>).await {
        Ok(p) => project_state.set(Some(p)),
        Err(e) => {
            error!("détails projet : {e:?}");
            error_state.set("Impossible de charger les détails du projet.".into());
        }
    }
    loading_state.set(false);
}

/* -------------------------------------------------------------------------- */
/*                             composant principal                            */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsProps {
    pub id: i32,
}

#[function_component(ProjectDetails)]
pub fn project_details(props: &ProjectDetailsProps) -> Html {
    let session   = use_session();
    let navigator = use_navigator().unwrap();
    let id        = props.id;

    /* ---------------- states ---------------- */
    let project  = use_state(|| None::<Project>);
    let loading  = use_state(|| true);
    let error    = use_state(String::new);
    let new_task = use_state(String::new);

    /* édition (admin) */
    let edit_mode        = use_state(|| false);
    let edit_name        = use_state(String::new);
    let edit_description = use_state(String::new);

    /* ajout de collaborateur (admin) */
    let all_users     = use_state(Vec::<User>::new);
    let selected_user = use_state(|| -1);

    /* -------------- chargement initial -------------- */
    {
        let project = project.clone();
        let loading = loading.clone();
        let err     = error.clone();
        let token   = session.token.clone();
        use_effect_with((id, (*session).clone()), move |_| {
            loading.set(true);
            spawn_local(async move {
                reload_project(token, id, project, loading, err).await;
            });
            || ()
        });
    }

    /* -------------- liste des utilisateurs (sélecteur admin) -------------- */
    {
        let all_users = all_users.clone();
        let token     = session.token.clone();
        let admin     = session.is_admin();
        use_effect_with(admin, move |is_admin| {
            if *is_admin {
                spawn_local(async move {
                    match fetch_json::<(), Vec<User>>(token.as_deref(), Method::GET, "/user", None::<&()>).await {
                        Ok(u) => all_users.set(u),
                        Err(e) => error!("utilisateurs : {e:?}"),
                    }
                });
            }
            || ()
        });
    }

    /* -------------- handlers -------------- */

    // ajout d'une tâche, refusé si contenu vide
    let on_add_task = {
        let project  = project.clone();
        let loading  = loading.clone();
        let err      = error.clone();
        let new_task = new_task.clone();
        let token    = session.token.clone();

        Callback::from(move |_| {
            let content = (*new_task).clone();
            if task_is_blank(&content) {
                return;
            }

            let project  = project.clone();
            let loading  = loading.clone();
            let err      = err.clone();
            let new_task = new_task.clone();
            let token    = token.clone();

            spawn_local(async move {
                let body = serde_json::json!({ "content": content });
                let path = format!("/notes/project/{id}");
                match fetch_json::<_, serde_json::Value>(token.as_deref(), Method::POST, &path, Some(&body)).await {
                    Ok(_) => {
                        new_task.set(String::new());
                        // pas de mise à jour optimiste : on recharge tout
                        reload_project(token, id, project, loading, err).await;
                    }
                    Err(e) => {
                        error!("ajout tâche : {e:?}");
                        err.set("Impossible d'ajouter une tâche.".into());
                    }
                }
            });
        })
    };

    // suppression d'une note (auteur ou admin)
    let on_delete_note = {
        let project = project.clone();
        let loading = loading.clone();
        let err     = error.clone();
        let token   = session.token.clone();

        Callback::from(move |note_id: i32| {
            if !confirm("Supprimer cette tâche ?") {
                return;
            }
            let project = project.clone();
            let loading = loading.clone();
            let err     = err.clone();
            let token   = token.clone();
            spawn_local(async move {
                match fetch_empty(token.as_deref(), Method::DELETE, &format!("/notes/{note_id}"), None::<&()>).await {
                    Ok(()) => reload_project(token, id, project, loading, err).await,
                    Err(e) => error!("suppression tâche : {e:?}"),
                }
            });
        })
    };

    // passage en mode édition, champs préremplis
    let on_start_edit = {
        let edit_mode        = edit_mode.clone();
        let edit_name        = edit_name.clone();
        let edit_description = edit_description.clone();
        let project          = project.clone();
        Callback::from(move |_| {
            if let Some(p) = &*project {
                edit_name.set(p.project.clone());
                edit_description.set(p.description.clone());
                edit_mode.set(true);
            }
        })
    };

    // enregistrement de l'édition
    let on_save_edit = {
        let project          = project.clone();
        let loading          = loading.clone();
        let err              = error.clone();
        let edit_mode        = edit_mode.clone();
        let edit_name        = edit_name.clone();
        let edit_description = edit_description.clone();
        let token            = session.token.clone();

        Callback::from(move |_| {
            let project   = project.clone();
            let loading   = loading.clone();
            let err       = err.clone();
            let edit_mode = edit_mode.clone();
            let token     = token.clone();
            let body = serde_json::json!({
                "project":     (*edit_name).clone(),
                "description": (*edit_description).clone(),
            });
            spawn_local(async move {
                let path = format!("/projects/{id}/edit");
                match fetch_empty(token.as_deref(), Method::PUT, &path, Some(&body)).await {
                    Ok(()) => {
                        edit_mode.set(false);
                        reload_project(token, id, project, loading, err).await;
                    }
                    Err(e) => {
                        error!("édition projet : {e:?}");
                        err.set("Impossible de modifier le projet.".into());
                    }
                }
            });
        })
    };

    // suppression du projet entier
    let on_delete_project = {
        let navigator = navigator.clone();
        let token     = session.token.clone();
        Callback::from(move |_| {
            if !confirm("Supprimer ce projet ?") {
                return;
            }
            let navigator = navigator.clone();
            let token     = token.clone();
            spawn_local(async move {
                let path = format!("/projects/{id}/delete");
                match fetch_empty(token.as_deref(), Method::DELETE, &path, None::<&()>).await {
                    Ok(()) => navigator.push(&Route::Accueil),
                    Err(e) => error!("suppression projet : {e:?}"),
                }
            });
        })
    };

    // changement dans le sélecteur de collaborateur
    let on_change_user = {
        let selected_user = selected_user.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_user.set(select.value().parse().unwrap_or(-1));
        })
    };

    // ajout du collaborateur sélectionné
    let on_add_user = {
        let project       = project.clone();
        let loading       = loading.clone();
        let err           = error.clone();
        let selected_user = selected_user.clone();
        let token         = session.token.clone();

        Callback::from(move |_| {
            let uid = *selected_user;
            if uid == -1 {
                return;
            }
            let project       = project.clone();
            let loading       = loading.clone();
            let err           = err.clone();
            let selected_user = selected_user.clone();
            let token         = token.clone();
            spawn_local(async move {
                let body = serde_json::json!({ "userId": uid });
                let path = format!("/projects/{id}/add-user");
                match fetch_json::<_, serde_json::Value>(token.as_deref(), Method::POST, &path, Some(&body)).await {
                    Ok(_) => {
                        selected_user.set(-1);
                        reload_project(token, id, project, loading, err).await;
                    }
                    Err(e) => error!("ajout collaborateur : {e:?}"),
                }
            });
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Accueil))
    };

    /* ---------------------- rendu ---------------------- */

    if *loading && project.is_none() {
        return html!(<p>{ "Chargement des détails du projet..." }</p>);
    }

    html! {
        <div>
            <button class="nav-btn" style="background:#4a5568;margin-bottom:1rem;" onclick={on_back}>
                { "Retour" }
            </button>

            if !error.is_empty() {
                <p style="color:#f56565;">{ &*error }</p>
            }

            {
                match &*project {
                    None => Html::default(),
                    Some(p) => html! {
                        <>
                            /* ------------ entête + actions admin ----------- */
                            <div style="display:flex;justify-content:space-between;align-items:center;">
                                <h1 style="margin-bottom:0.5rem;">{ &p.project }</h1>
                                if session.is_admin() {
                                    <div style="display:flex;gap:0.5rem;">
                                        <button class="nav-btn" onclick={on_start_edit.clone()}>{ "Modifier" }</button>
                                        <button class="nav-btn danger" onclick={on_delete_project.clone()}>{ "Supprimer" }</button>
                                    </div>
                                }
                            </div>
                            <p style="color:#cbd5e0;">{ &p.description }</p>
                            <p style="color:#a0aec0;margin-bottom:1.5rem;">
                                { format!("Utilisateurs : {}", p.users.join(", ")) }
                            </p>

                            /* ------------ formulaire d'édition ------------- */
                            if *edit_mode {
                                <div class="modal-box" style="width:auto;margin-bottom:1.5rem;">
                                    <h2 style="margin-top:0;">{ "Modifier le projet" }</h2>
                                    <input
                                        type="text"
                                        value={(*edit_name).clone()}
                                        oninput={Callback::from({
                                            let edit_name = edit_name.clone();
                                            move |e: InputEvent| {
                                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                    edit_name.set(input.value());
                                                }
                                            }
                                        })}
                                    />
                                    <textarea
                                        value={(*edit_description).clone()}
                                        oninput={Callback::from({
                                            let edit_description = edit_description.clone();
                                            move |e: InputEvent| {
                                                if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                                                    edit_description.set(area.value());
                                                }
                                            }
                                        })}
                                    />
                                    <div style="display:flex;justify-content:space-between;">
                                        <button class="nav-btn" style="background:#718096;" onclick={{
                                            let edit_mode = edit_mode.clone();
                                            Callback::from(move |_| edit_mode.set(false))
                                        }}>{ "Annuler" }</button>
                                        <button class="nav-btn success" onclick={on_save_edit.clone()}>{ "Enregistrer" }</button>
                                    </div>
                                </div>
                            }

                            /* ------------ ajout de collaborateur ----------- */
                            if session.is_admin() {
                                <div style="display:flex;gap:0.5rem;align-items:center;margin-bottom:1.5rem;">
                                    <select onchange={on_change_user.clone()}
                                            style="padding:0.5rem;border-radius:4px;background:#1a202c;color:#f7fafc;border:1px solid #4a5568;">
                                        <option value="-1" selected={*selected_user == -1}>{ "Ajouter un membre…" }</option>
                                        { for all_users.iter()
                                            .filter(|u| !p.users.contains(&u.username))
                                            .map(|u| html! {
                                                <option key={u.id} value={u.id.to_string()}
                                                        selected={*selected_user == u.id}>
                                                    { &u.username }
                                                </option>
                                            }) }
                                    </select>
                                    <button class="nav-btn" onclick={on_add_user.clone()}>{ "Ajouter" }</button>
                                </div>
                            }

                            /* ------------------- tâches -------------------- */
                            <h2>{ "Tâches" }</h2>
                            <ul style="list-style:none;padding:0;display:flex;flex-direction:column;gap:1rem;">
                                { for p.notes.iter().map(|note| {
                                    let deletable = can_delete_note(note, &session);
                                    let cb  = on_delete_note.clone();
                                    let nid = note.id;
                                    html! {
                                        <li key={note.id} class="project-card" style="cursor:default;">
                                            <div style="display:flex;justify-content:space-between;align-items:center;">
                                                <p style="margin:0;color:#cbd5e0;">{ &note.content }</p>
                                                if deletable {
                                                    <button
                                                        style="border:1px solid #e74c3c;background:transparent;color:#e74c3c;
                                                               padding:0.25rem 0.5rem;font-size:0.875rem;border-radius:4px;cursor:pointer;"
                                                        onclick={Callback::from(move |_| cb.emit(nid))}
                                                    >
                                                        { "Supprimer" }
                                                    </button>
                                                }
                                            </div>
                                            <p style="font-size:0.75rem;color:#718096;margin:0.5rem 0 0;">
                                                { format!("Ajouté par : {}", note.users) }
                                            </p>
                                        </li>
                                    }
                                }) }
                            </ul>

                            /* --------------- nouvelle tâche ---------------- */
                            <div style="margin-top:1.5rem;">
                                <textarea
                                    placeholder="Ajouter une tâche..."
                                    value={(*new_task).clone()}
                                    style="width:100%;padding:0.5rem;border-radius:4px;background:#2d3748;
                                           color:#f7fafc;border:1px solid #4a5568;"
                                    oninput={Callback::from({
                                        let new_task = new_task.clone();
                                        move |e: InputEvent| {
                                            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                                                new_task.set(area.value());
                                            }
                                        }
                                    })}
                                ></textarea>
                                <button class="nav-btn" style="margin-top:0.5rem;" onclick={on_add_task.clone()}>
                                    { "Ajouter" }
                                </button>
                            </div>
                        </>
                    }
                }
            }
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                   tests                                    */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn note(author: &str) -> Note {
        Note { id: 1, content: "x".into(), users: author.into() }
    }

    fn session(username: &str, roles: &[&str]) -> Session {
        Session {
            token: Some("jwt".into()),
            username: Some(username.into()),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn tache_vide_ou_blanche_refusee() {
        assert!(task_is_blank(""));
        assert!(task_is_blank("   \n\t"));
        assert!(!task_is_blank("  relire le cahier des charges "));
    }

    #[test]
    fn note_supprimable_par_son_auteur() {
        assert!(can_delete_note(&note("alice"), &session("alice", &[])));
        assert!(!can_delete_note(&note("bob"), &session("alice", &[])));
    }

    #[test]
    fn note_supprimable_par_un_admin() {
        assert!(can_delete_note(&note("bob"), &session("alice", &["ROLE_ADMIN"])));
    }
}
