use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, error_response, redirect, render_template};
use crate::services::customers as customers_service;

#[get("/customers")]
pub async fn show_customers(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customers_service::list_customers(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "customers");
            context.insert("customers", &data.customers);
            render_template(&tera, "customers/index.html", &context)
        }
        Err(err) => error_response(err, "list customers"),
    }
}

#[get("/customers/create")]
pub async fn show_create_customer(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customers_service::load_create_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "customers");
            context.insert("companies", &data.companies);
            context.insert("employees", &data.employees);
            render_template(&tera, "customers/create.html", &context)
        }
        Err(err) => error_response(err, "load the create form"),
    }
}

#[post("/customers/create")]
pub async fn create_customer(repo: web::Data<DieselRepository>, form: web::Bytes) -> impl Responder {
    match customers_service::create_customer(repo.get_ref(), form.as_ref()) {
        Ok(_) => {
            FlashMessage::success("Customer created.").send();
            redirect("/customers")
        }
        Err(err) => error_response(err, "create customer"),
    }
}

#[get("/customers/edit/{customer_id}")]
pub async fn show_edit_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customers_service::load_edit_page(repo.get_ref(), customer_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "customers");
            context.insert("customer", &data.customer);
            context.insert("companies", &data.companies);
            context.insert("employees", &data.employees);
            context.insert("employee_ids", &data.employee_ids);
            render_template(&tera, "customers/edit.html", &context)
        }
        Err(err) => error_response(err, "load the edit form"),
    }
}

#[post("/customers/edit/{customer_id}")]
pub async fn update_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Bytes,
) -> impl Responder {
    match customers_service::update_customer(repo.get_ref(), customer_id.into_inner(), &form) {
        Ok(_) => {
            FlashMessage::success("Customer updated.").send();
            redirect("/customers")
        }
        Err(err) => error_response(err, "update customer"),
    }
}

#[get("/customers/delete/{customer_id}")]
pub async fn show_delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customers_service::load_delete_page(repo.get_ref(), customer_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "customers");
            context.insert("customer", &data.customer);
            render_template(&tera, "customers/delete.html", &context)
        }
        Err(err) => error_response(err, "load the delete confirmation"),
    }
}

#[post("/customers/delete/{customer_id}")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customers_service::delete_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Customer deleted.").send();
            redirect("/customers")
        }
        Err(err) => error_response(err, "delete customer"),
    }
}
