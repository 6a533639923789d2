#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use fertility_center::settings::Settings;
    use tracing::error;

    let settings = Settings::from_env();
    settings.init_tracing();

    if let Err(e) = run().await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}

#[cfg(feature = "ssr")]
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::*;
    use tracing::info;

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    info!("Site root: `{}`", leptos_options.site_root);

    let app = build_router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Fertility center site listening on http://{}", &addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(feature = "ssr")]
fn build_router(leptos_options: leptos::prelude::LeptosOptions) -> axum::Router {
    use axum::Router;
    use fertility_center::{assets, shell, App};
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    let routes = generate_route_list(App);
    let pkg_dir = format!("{}/{}", leptos_options.site_root, leptos_options.site_pkg_dir);

    // Static routes must come before the leptos fallback
    let static_routes = Router::new()
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .merge(assets::create_icon_routes())
        .with_state(leptos_options.clone());

    let leptos_app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    static_routes.merge(leptos_app)
}
