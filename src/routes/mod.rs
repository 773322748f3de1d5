//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod customers;
pub mod main;

/// Registers every page route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index)
        .service(customers::show_customers)
        .service(customers::show_create_customer)
        .service(customers::create_customer)
        .service(customers::show_edit_customer)
        .service(customers::update_customer)
        .service(customers::show_delete_customer)
        .service(customers::delete_customer);
}

/// Maps a flash message level to the Bootstrap alert class used by templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Builds the template context shared by every page.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn plain_text(mut builder: actix_web::HttpResponseBuilder, body: String) -> HttpResponse {
    builder
        .content_type("text/plain; charset=utf-8")
        .body(body)
}

/// Converts a service failure into the response sent to the browser.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            plain_text(HttpResponse::NotFound(), "Customer not found.".to_string())
        }
        ServiceError::Form(message) => plain_text(HttpResponse::BadRequest(), message),
        // A refused delete is reported as a plain message, not as an error status.
        ServiceError::Conflict(message) => plain_text(HttpResponse::Ok(), message),
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    use super::*;
    use crate::repository::errors::RepositoryError;

    #[actix_web::test]
    async fn refused_delete_is_plain_text_ok() {
        let resp = error_response(ServiceError::Conflict("busy".to_string()), "delete");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), b"busy");
    }

    #[test]
    fn repository_failures_are_internal_errors() {
        let err = ServiceError::Repository(RepositoryError::DatabaseError("boom".to_string()));
        assert_eq!(
            error_response(err, "list customers").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_response(ServiceError::NotFound, "edit").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn redirect_sets_location() {
        let resp = redirect("/customers");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/customers");
    }
}
