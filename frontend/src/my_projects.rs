use gloo_net::http::Method;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_json;
use crate::models::{visible_projects, Project};
use crate::session::use_session;
use crate::Route;

/* ------------------- liste complète des projets visibles ------------------ */

#[function_component(MyProjects)]
pub fn my_projects() -> Html {
    let session   = use_session();
    let navigator = use_navigator().unwrap();
    let projects  = use_state(Vec::<Project>::new);
    let error     = use_state(String::new);

    {
        let projects = projects.clone();
        let error    = error.clone();
        use_effect_with((*session).clone(), move |sess| {
            let sess = sess.clone();
            spawn_local(async move {
                let token = sess.token.clone();
                match fetch_json::<(), Vec<Project>>(token.as_deref(), Method::GET, "/projects", None::<&()>).await {
                    // même règle de visibilité que l'accueil, sans troncature
                    Ok(all) => projects.set(visible_projects(all, sess.username.as_deref(), sess.is_admin())),
                    Err(e) => {
                        error!("projets : {e:?}");
                        error.set("Impossible de récupérer les projets.".into());
                    }
                }
            });
            || ()
        });
    }

    let on_project_click = {
        let navigator = navigator.clone();
        Callback::from(move |id: i32| navigator.push(&Route::ProjectDetails { id }))
    };

    let welcome = match &session.username {
        Some(name) => format!("Bienvenue, {name} !"),
        None => "Bienvenue sur TeamBoard !".to_string(),
    };

    html! {
        <div>
            <h1 style="text-align:center;font-size:2.5rem;margin-bottom:2rem;">{ welcome }</h1>

            if !error.is_empty() {
                <p style="color:#f56565;text-align:center;">{ &*error }</p>
            }

            <section>
                <h2 style="color:#7f9cf5;">{ "Mes projets" }</h2>
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
                                    { format!("Utilisateurs : {}", p.users.join(", ")) }
                                </p>
                            </li>
                        }
                    }) }
                </ul>
            </section>
        </div>
    }
}
