use crate::constants::{
    CONTACT_STATUS_ID, CONTACT_SUBMIT_ID, FIELD_ERROR_ID_SUFFIX, HIDDEN_CLASS, STATUS_ERR_CLASS,
    STATUS_OK_CLASS, SUBMIT_LABEL_IDLE, SUBMIT_LABEL_SENDING,
};
use crate::core::{Field, FieldErrors, SubmitStatus};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn show(el: &web::Element) {
    dom::set_class(el, HIDDEN_CLASS, false);
}

#[inline]
fn hide(el: &web::Element) {
    dom::set_class(el, HIDDEN_CLASS, true);
}

fn field_error_id(field: Field) -> String {
    format!("{}{}", field.as_str(), FIELD_ERROR_ID_SUFFIX)
}

/// Show or hide the message under one form control.
pub fn show_field_error(document: &web::Document, field: Field, errors: &FieldErrors) {
    let Some(el) = document.get_element_by_id(&field_error_id(field)) else {
        return;
    };
    match errors.get(field) {
        Some(err) => {
            el.set_text_content(Some(&err.to_string()));
            show(&el);
        }
        None => {
            el.set_text_content(None);
            hide(&el);
        }
    }
}

pub fn show_field_errors(document: &web::Document, errors: &FieldErrors) {
    for field in Field::ALL {
        show_field_error(document, field, errors);
    }
}

pub fn show_status(document: &web::Document, status: SubmitStatus) {
    let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) else {
        return;
    };
    dom::set_class(&el, STATUS_OK_CLASS, status == SubmitStatus::Sent);
    dom::set_class(&el, STATUS_ERR_CLASS, status == SubmitStatus::Failed);
    match status.notice() {
        Some(text) => {
            el.set_text_content(Some(text));
            show(&el);
        }
        None => {
            el.set_text_content(None);
            hide(&el);
        }
    }
}

/// Disable the submit button while a request is in flight.
pub fn show_sending(document: &web::Document, sending: bool) {
    let Some(button) = document
        .get_element_by_id(CONTACT_SUBMIT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        return;
    };
    button.set_disabled(sending);
    button.set_text_content(Some(if sending {
        SUBMIT_LABEL_SENDING
    } else {
        SUBMIT_LABEL_IDLE
    }));
}
