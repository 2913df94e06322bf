//! Structures échangées avec l'API + règles pures sur les listes.

use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/*                                structures                                  */
/* -------------------------------------------------------------------------- */

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Project {
    pub id: i32,
    /// Nom du projet (clé `project` côté API).
    pub project: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub users: Vec<String>,
    /// Présent uniquement sur `GET /projects/{id}`.
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Note {
    pub id: i32,
    pub content: String,
    /// Auteur de la note (nom d'utilisateur).
    pub users: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/* -------------------------------------------------------------------------- */
/*                        règles pures sur les listes                         */
/* -------------------------------------------------------------------------- */

/// Règle de visibilité unique : un admin voit tout, les autres ne voient
/// que les projets dont ils sont membres.
pub fn visible_projects(projects: Vec<Project>, username: Option<&str>, is_admin: bool) -> Vec<Project> {
    if is_admin {
        return projects;
    }
    let Some(name) = username else { return Vec::new() };
    projects
        .into_iter()
        .filter(|p| p.users.iter().any(|u| u == name))
        .collect()
}

/// Les `n` derniers projets, du plus récent au plus ancien.
pub fn recent_projects(projects: &[Project], n: usize) -> Vec<Project> {
    let start = projects.len().saturating_sub(n);
    projects[start..].iter().rev().cloned().collect()
}

/// Tranche de la page `page` (1-indexée), `per_page` éléments par page.
pub fn page_slice(users: &[User], page: usize, per_page: usize) -> &[User] {
    let start = (page.max(1) - 1) * per_page;
    if start >= users.len() {
        return &[];
    }
    let end = (start + per_page).min(users.len());
    &users[start..end]
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

/// Retire l'utilisateur `id` de la liste, sans toucher aux autres.
pub fn remove_user(users: &mut Vec<User>, id: i32) {
    users.retain(|u| u.id != id);
}

/* -------------------------------------------------------------------------- */
/*                                   tests                                    */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn projet(id: i32, users: &[&str]) -> Project {
        Project {
            id,
            project: format!("Projet {id}"),
            description: String::new(),
            users: users.iter().map(|u| u.to_string()).collect(),
            notes: Vec::new(),
        }
    }

    fn user(id: i32, username: &str) -> User {
        User { id, username: username.into(), roles: Vec::new() }
    }

    #[test]
    fn filtre_non_admin_par_appartenance() {
        let all = vec![
            projet(1, &["alice", "bob"]),
            projet(2, &["bob"]),
            projet(3, &["alice"]),
        ];
        let vus = visible_projects(all, Some("alice"), false);
        assert_eq!(vus.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn admin_voit_tout() {
        let all = vec![projet(1, &["bob"]), projet(2, &[])];
        let vus = visible_projects(all.clone(), Some("alice"), true);
        assert_eq!(vus, all);
    }

    #[test]
    fn sans_username_rien_nest_visible() {
        let all = vec![projet(1, &["bob"])];
        assert!(visible_projects(all, None, false).is_empty());
    }

    #[test]
    fn recents_cinq_derniers_inverses() {
        let all: Vec<_> = (1..=7).map(|i| projet(i, &[])).collect();
        let recents = recent_projects(&all, 5);
        assert_eq!(recents.iter().map(|p| p.id).collect::<Vec<_>>(), vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn recents_liste_courte() {
        let all = vec![projet(1, &[]), projet(2, &[])];
        let recents = recent_projects(&all, 5);
        assert_eq!(recents.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn pagination_cinq_par_page() {
        let users: Vec<_> = (1..=12).map(|i| user(i, &format!("u{i}"))).collect();
        assert_eq!(page_slice(&users, 1, 5).len(), 5);
        assert_eq!(page_slice(&users, 3, 5).len(), 2);
        assert_eq!(page_slice(&users, 3, 5)[0].id, 11);
        assert!(page_slice(&users, 4, 5).is_empty());
        assert_eq!(page_count(12, 5), 3);
        assert_eq!(page_count(0, 5), 0);
    }

    #[test]
    fn suppression_retire_exactement_cet_id() {
        let mut users = vec![user(1, "a"), user(2, "b"), user(3, "c")];
        remove_user(&mut users, 2);
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn notes_absentes_de_la_liste() {
        // la liste `GET /projects` ne porte pas `notes`
        let p: Project =
            serde_json::from_str(r#"{"id":1,"project":"x","description":"","users":[]}"#).unwrap();
        assert!(p.notes.is_empty());
    }
}
