use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result};
use once_cell::sync::Lazy;
use rustls::{
    pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer},
    server::ServerConfig,
};
use rustls_pemfile::{certs, pkcs8_private_keys};
use std::{env, fs::File, io::BufReader, path::PathBuf};

/* ---------- configuration (env, avec valeurs de dev) --------------------- */

/// Dossier produit par `trunk build` dans le membre `frontend`.
fn dist_dir() -> PathBuf {
    env::var("TEAMBOARD_DIST")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist"))
}

fn https_port() -> u16 {
    env::var("TEAMBOARD_HTTPS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8444)
}

/* ---------- TLS auto-signé dev ------------------------------------------ */

static TLS_CFG: Lazy<ServerConfig> = Lazy::new(|| {
    let cert_path = env::var("TEAMBOARD_TLS_CERT").unwrap_or_else(|_| "certs/dev-cert.pem".into());
    let key_path  = env::var("TEAMBOARD_TLS_KEY").unwrap_or_else(|_| "certs/dev-key.pem".into());

    let mut r = BufReader::new(File::open(&cert_path).expect("open cert"));
    let chain: Vec<CertificateDer<'static>> =
        certs(&mut r).collect::<Result<_, _>>().expect("parse cert");

    let mut r = BufReader::new(File::open(&key_path).expect("open key"));
    let key: PrivatePkcs8KeyDer<'static> = pkcs8_private_keys(&mut r)
        .next()
        .expect("one key")            // Option
        .expect("valid pkcs8 key");   // Result

    ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(chain, PrivateKeyDer::Pkcs8(key))
        .expect("TLS config")
});

/* ---------- Fallback SPA (index.html) ----------------------------------- */

// Les routes client (/accueil, /projects/…, /options) n'existent pas sur le
// disque : tout retombe sur index.html et le routeur WASM prend la main.
async fn spa_fallback(req: HttpRequest) -> Result<HttpResponse> {
    Ok(NamedFile::open(dist_dir().join("index.html"))?.into_response(&req))
}

/* ---------- main -------------------------------------------------------- */

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dist = dist_dir();
    println!("TeamBoard – fichiers statiques servis depuis {}", dist.display());

    HttpServer::new(move || {
        App::new()
            .service(Files::new("/", &dist).index_file("index.html"))
            .default_service(web::to(spa_fallback))
    })
    .bind_rustls_0_23(("0.0.0.0", https_port()), TLS_CFG.clone())?
    .run()
    .await
}
