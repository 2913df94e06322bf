//! Store de session : `{token, username, roles}`, répliqué en LocalStorage.

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Marqueur de rôle administrateur côté API.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Même clé que la persistance de l'application d'origine.
const STORAGE_KEY: &str = "teamboard";

/* ---------------- structure session ---------------- */

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    pub token:    Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub roles:    Vec<String>,
}

/// Charge utile du `login` : les trois champs remplacés d'un bloc,
/// `roles` vide si absent de la réponse.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginPayload {
    pub token:    String,
    pub username: String,
    #[serde(default)]
    pub roles:    Vec<String>,
}

impl Session {
    pub fn login(&mut self, payload: LoginPayload) {
        self.token = Some(payload.token);
        self.username = Some(payload.username);
        self.roles = payload.roles;
    }

    pub fn logout(&mut self) {
        *self = Session::default();
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// L'unique prédicat de role-gating de l'application.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }
}

/* ---------------- hook pratique -------------------- */

#[hook]
pub fn use_session() -> UseStateHandle<Session> {
    use_context::<UseStateHandle<Session>>().expect("SessionProvider manquant")
}

/* --------- mutateurs (état + LocalStorage) --------- */

pub fn store_login(handle: &UseStateHandle<Session>, payload: LoginPayload) {
    let mut s = (**handle).clone();
    s.login(payload);
    if let Err(e) = LocalStorage::set(STORAGE_KEY, &s) {
        log::error!("persistance session : {e:?}");
    }
    handle.set(s);
}

pub fn store_logout(handle: &UseStateHandle<Session>) {
    LocalStorage::delete(STORAGE_KEY);
    handle.set(Session::default());
}

/* -------------- props du provider ----------------- */

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/* -------------- provider global ------------------- */

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    // réhydratation synchrone depuis LocalStorage au premier rendu
    let session = use_state(|| LocalStorage::get::<Session>(STORAGE_KEY).unwrap_or_default());

    html! {
        <ContextProvider<UseStateHandle<Session>> context={session}>
            { for props.children.iter() }
        </ContextProvider<UseStateHandle<Session>>>
    }
}

/* ---------------------- tests ---------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(roles: &[&str]) -> LoginPayload {
        LoginPayload {
            token: "jwt".into(),
            username: "alice".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn login_remplace_les_trois_champs() {
        let mut s = Session::default();
        s.login(payload(&["ROLE_USER", "ROLE_ADMIN"]));
        assert_eq!(s.token.as_deref(), Some("jwt"));
        assert_eq!(s.username.as_deref(), Some("alice"));
        assert!(s.is_admin());
        assert!(s.is_logged_in());
    }

    #[test]
    fn roles_vide_si_absent_de_la_reponse() {
        let p: LoginPayload =
            serde_json::from_str(r#"{"token":"jwt","username":"alice"}"#).unwrap();
        assert!(p.roles.is_empty());
        let mut s = Session::default();
        s.login(p);
        assert!(!s.is_admin());
    }

    #[test]
    fn logout_reinitialise_tout() {
        let mut s = Session::default();
        s.login(payload(&["ROLE_ADMIN"]));
        s.logout();
        assert_eq!(s, Session::default());
        assert!(!s.is_logged_in());
        assert!(!s.is_admin());
    }

    #[test]
    fn admin_exige_le_marqueur_exact() {
        let mut s = Session::default();
        s.login(payload(&["ROLE_USER", "role_admin"]));
        assert!(!s.is_admin());
    }
}
