use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod guard;
mod logout;
mod models;
mod session;

// Pages
mod auth;
mod dashboard;
mod layout;
mod manage_users;
mod my_projects;
mod project_details;

use session::{SessionProvider, ROLE_ADMIN};

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/accueil")]
    Accueil,
    #[at("/projects")]
    MyProjects,
    #[at("/projects/:id")]
    ProjectDetails { id: i32 },
    #[at("/options")]
    ManageOptions,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html!(<auth::LoginForm />),
        Route::Accueil => html!(<layout::MainLayout><dashboard::Accueil /></layout::MainLayout>),
        Route::MyProjects => html!(<layout::MainLayout><my_projects::MyProjects /></layout::MainLayout>),
        Route::ProjectDetails { id } => html!(<layout::MainLayout><project_details::ProjectDetails {id} /></layout::MainLayout>),
        Route::ManageOptions => html! {
            <layout::MainLayout>
                <guard::Guard need={ROLE_ADMIN}>
                    <manage_users::ManageOptions />
                </guard::Guard>
            </layout::MainLayout>
        },
        Route::NotFound => html!(<h1 style="text-align:center;margin-top:4rem;">{"404 – Not Found"}</h1>),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
