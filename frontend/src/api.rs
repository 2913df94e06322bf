use gloo_net::http::{Method, Request};
use gloo_net::Error;
use serde::{Serialize, de::DeserializeOwned};
use js_sys;

/* URL de base de l'API : une seule source, surchargée à la compilation */
const DEFAULT_BASE: &str = "http://127.0.0.1:8000";

pub fn base_url() -> &'static str {
    option_env!("TEAMBOARD_API_URL").unwrap_or(DEFAULT_BASE)
}

/* Appel JSON générique, en-tête `Authorization: Bearer …` si token présent */
pub async fn fetch_json<T, U>(
    token: Option<&str>,
    method: Method,
    path: &str,
    body: Option<&T>,
) -> Result<U, Error>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let url = format!("{}{path}", base_url());
    let builder = match method {
        Method::GET => Request::get(&url),
        Method::POST => Request::post(&url),
        Method::PUT => Request::put(&url),
        Method::PATCH => Request::patch(&url),
        Method::DELETE => Request::delete(&url),
        _ => Request::get(&url),
    };

    let builder = if let Some(t) = token {
        builder.header("Authorization", &format!("Bearer {t}"))
    } else {
        builder
    };

    // Envoi + parse JSON
    let resp = if let Some(b) = body {
        builder.json(b)?.send().await?
    } else {
        builder.send().await?
    };

    resp.json().await
}

/// Appel "vide" (204 / 200 sans JSON) avec le même en-tête Bearer
pub async fn fetch_empty<T>(
    token: Option<&str>,
    method: Method,
    path:   &str,
    body:   Option<&T>,
) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let url      = format!("{}{path}", base_url());
    let mut req  = match method {
        Method::DELETE => Request::delete(&url),
        Method::PUT    => Request::put(&url),
        Method::POST   => Request::post(&url),
        _              => unreachable!("fetch_empty : DELETE / PUT / POST uniquement"),
    };

    if let Some(t) = token {
        req = req.header("Authorization", &format!("Bearer {t}"));
    }

    // PUT / POST → éventuel body JSON
    let resp = match (method, body) {
        (Method::PUT | Method::POST, Some(b)) => req.json(b)?.send().await?,
        _                                     => req.send().await?,
    };

    match resp.status() {
        200 | 204 => Ok(()),
        s => {
            // gloo-net n'a pas de variant `Error::Response` : on encapsule tout
            let msg = format!("HTTP {} – {}", s, resp.status_text());
            Err(Error::JsError(js_sys::Error::new(&msg).into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::base_url;

    #[test]
    fn base_url_par_defaut() {
        // sans TEAMBOARD_API_URL à la compilation, on retombe sur le loopback
        if option_env!("TEAMBOARD_API_URL").is_none() {
            assert_eq!(base_url(), "http://127.0.0.1:8000");
        }
    }
}
