#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use clap::Parser;
    use fieldnotes::app::*;
    use fieldnotes::server::ServerConfig;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;
    use tracing_forest::ForestLayer;
    use tracing_subscriber::{EnvFilter, prelude::*};

    let config = ServerConfig::parse();
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log))
        .with(ForestLayer::default())
        .init();

    let conf = get_configuration(None)?;
    let addr = match &config.bind {
        Some(bind) => bind.parse()?,
        None => conf.leptos_options.site_addr,
    };
    let leptos_options = conf.leptos_options;
    let shell_options = leptos_options.clone();
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, move || {
            let val = shell_options.clone();
            move || shell(val.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
