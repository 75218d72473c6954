mod form;
mod screen;
mod template;
mod validation;

use actix_web::{error, web};
use actix_web::{App, HttpResponse, HttpServer, Responder, Result};
use askama::Template;

use screen::{LoginScreen, SignupScreen};

async fn index() -> Result<impl Responder> {
    Ok(HttpResponse::SeeOther()
        .append_header(("Location", "/login"))
        .finish())
}

async fn login_ui() -> Result<HttpResponse> {
    let template = template::user::LoginTemplate::default();
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn login(form: web::Form<form::user::LoginFormData>) -> Result<HttpResponse> {
    let form = form.into_inner();

    let mut screen = LoginScreen::new();
    screen.set_email(form.email);
    screen.set_password(form.password);
    screen.submit();

    let template = template::user::LoginTemplate::from(&screen);
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn signup_ui() -> Result<HttpResponse> {
    let template = template::user::SignupTemplate::default();
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn signup(form: web::Form<form::user::SignupFormData>) -> Result<HttpResponse> {
    let form = form.into_inner();

    let mut screen = SignupScreen::new();
    screen.set_full_name(form.full_name);
    screen.set_email(form.email);
    screen.set_password(form.password);
    screen.set_confirm_password(form.confirm_password);
    screen.submit();

    let template = template::user::SignupTemplate::from(&screen);
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn default_handler() -> Result<HttpResponse> {
    let template = template::error::NotFoundErrorTemplate;
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::NotFound()
        .content_type("text/html")
        .body(content))
}

fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/login")
                .route(web::get().to(login_ui))
                .route(web::post().to(login)),
        )
        .service(
            web::resource("/signup")
                .route(web::get().to(signup_ui))
                .route(web::post().to(signup)),
        )
        .default_service(web::route().to(default_handler));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("starting HTTP server at http://localhost:8080");

    HttpServer::new(|| {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .configure(config)
    })
    .bind(("127.0.0.1", 8080))?
    .workers(num_cpus::get() * 2)
    .run()
    .await
}
