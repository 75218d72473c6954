use askama::Template;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundErrorTemplate;
