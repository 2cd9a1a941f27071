use actix_cors::Cors;
use actix_web::{
    get, http, middleware::NormalizePath, web, App, HttpResponse, HttpServer, Responder,
};
use tracing_actix_web::TracingLogger;

use fineline_backend::{
    db::postgres::create_pool,
    graceful_shutdown::shutdown_signal,
    handlers::{
        auth::login,
        contact::submit_contact,
        gallery::{
            create_gallery_image, delete_gallery_image, list_gallery, list_gallery_admin,
            update_gallery_image,
        },
        services::{create_service, delete_service, list_services, update_service},
        site_content::{list_site_content, update_site_content},
        submissions::{delete_submission, list_submissions, toggle_submission_read},
        system::health_check,
        testimonials::{
            create_testimonial, delete_testimonial, list_testimonials, list_testimonials_admin,
            update_testimonial,
        },
    },
    middlewares::auth::AuthMiddleware,
    settings::AppConfig,
    AppState,
};

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Fine Line Auto Body API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    let app_state = web::Data::new(AppState::new(&config, pool.clone()));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Fine Line API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_origins = config.cors_origins();
    let worker_count = config.worker_count;

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &cors_origins {
            cors = if origin == "*" {
                cors.allow_any_origin()
            } else {
                cors.allowed_origin(origin)
            };
        }

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(AuthMiddleware)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .service(home)
            .service(health_check)
            .service(web::scope("/auth").route("/login", web::post().to(login)))
            .service(
                web::scope("/api")
                    .route("/contact", web::post().to(submit_contact))
                    .route("/services", web::get().to(list_services))
                    .route("/gallery", web::get().to(list_gallery))
                    .route("/testimonials", web::get().to(list_testimonials))
                    .route("/content", web::get().to(list_site_content)),
            )
            .service(
                web::scope("/admin")
                    .route("/submissions", web::get().to(list_submissions))
                    .route(
                        "/submissions/{id}/read",
                        web::patch().to(toggle_submission_read),
                    )
                    .route("/submissions/{id}", web::delete().to(delete_submission))
                    .route("/services", web::post().to(create_service))
                    .route("/services/{id}", web::put().to(update_service))
                    .route("/services/{id}", web::delete().to(delete_service))
                    .route("/gallery", web::get().to(list_gallery_admin))
                    .route("/gallery", web::post().to(create_gallery_image))
                    .route("/gallery/{id}", web::put().to(update_gallery_image))
                    .route("/gallery/{id}", web::delete().to(delete_gallery_image))
                    .route("/testimonials", web::get().to(list_testimonials_admin))
                    .route("/testimonials", web::post().to(create_testimonial))
                    .route("/testimonials/{id}", web::put().to(update_testimonial))
                    .route("/testimonials/{id}", web::delete().to(delete_testimonial))
                    .route("/content/{id}", web::put().to(update_site_content)),
            )
    })
    .workers(worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
