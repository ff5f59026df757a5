#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::extract::Extension;
    use clap::Parser;
    use dcapp::app::*;
    use dcapp::conf::Cli;
    use dcapp::server::routes;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};

    dotenvy::dotenv().ok();
    let args = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("dcapp")
        .module("dccore")
        .module("dcctrl")
        .module("dcdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let route_list = generate_route_list(App);
    log::trace!("{route_list:?}");

    let platform = args.platform_builder
        .build()
        .await
        .map_err(anyhow::Error::from_boxed)?;
    log::info!("serving downloads from {}", platform.static_root().display());

    let app = routes()
        .leptos_routes(
            &leptos_options,
            route_list,
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(Extension(platform))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        })
        .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
