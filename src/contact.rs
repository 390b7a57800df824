use crate::constants::CONTACT_FORM_ID;
use crate::core::{
    ContactForm, Field, FieldErrors, SubmitError, SubmitStatus, Submission, CONTACT_ENDPOINT,
};
use crate::feedback;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Default)]
struct ContactState {
    errors: FieldErrors,
    status: SubmitStatus,
}

fn control(document: &web::Document, field: Field) -> Option<web::Element> {
    let selector = format!("#{} [name=\"{}\"]", CONTACT_FORM_ID, field.as_str());
    document.query_selector(&selector).ok().flatten()
}

fn control_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn set_control_value(el: &web::Element, value: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

pub fn read_form(document: &web::Document) -> ContactForm {
    let mut form = ContactForm::default();
    for field in Field::ALL {
        if let Some(el) = control(document, field) {
            form.set(field, control_value(&el));
        }
    }
    form
}

fn clear_form(document: &web::Document) {
    for field in Field::ALL {
        if let Some(el) = control(document, field) {
            set_control_value(&el, "");
        }
    }
}

fn js_err(e: JsValue) -> SubmitError {
    SubmitError::Network(format!("{:?}", e))
}

/// POST a JSON body to the relay. Single attempt.
pub async fn submit(body: String) -> Result<(), SubmitError> {
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;

    let headers = web::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(CONTACT_ENDPOINT, &opts).map_err(js_err)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(js_err)?;
    SubmitStatus::check_http(resp.status())
}

pub fn wire_contact_form(document: &web::Document) {
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("[contact] missing #{CONTACT_FORM_ID}, form not wired");
        return;
    };
    let state = Rc::new(RefCell::new(ContactState::default()));
    feedback::show_field_errors(document, &state.borrow().errors);
    feedback::show_status(document, SubmitStatus::Idle);

    wire_input(document, &form_el, state.clone());
    wire_submit(document, &form_el, state);
}

fn wire_input(document: &web::Document, form_el: &web::Element, state: Rc<RefCell<ContactState>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(field) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.get_attribute("name"))
            .and_then(|name| Field::from_name(&name))
        else {
            return;
        };
        let mut s = state.borrow_mut();
        if s.errors.get(field).is_some() {
            s.errors.clear(field);
            feedback::show_field_error(&doc, field, &s.errors);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = form_el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_submit(document: &web::Document, form_el: &web::Element, state: Rc<RefCell<ContactState>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let form = read_form(&doc);
        let status = state.borrow().status;
        let body = match form.submission(status) {
            Ok(Submission::Send(body)) => body,
            Ok(Submission::Busy) => return,
            Ok(Submission::Rejected(errors)) => {
                log::debug!("[contact] rejected locally: {:?}", errors);
                feedback::show_field_errors(&doc, &errors);
                state.borrow_mut().errors = errors;
                return;
            }
            Err(e) => {
                log::error!("[contact] could not prepare message: {e}");
                state.borrow_mut().status = SubmitStatus::Failed;
                feedback::show_status(&doc, SubmitStatus::Failed);
                return;
            }
        };
        {
            let mut s = state.borrow_mut();
            s.errors = FieldErrors::default();
            s.status = SubmitStatus::Sending;
        }
        feedback::show_field_errors(&doc, &FieldErrors::default());
        feedback::show_status(&doc, SubmitStatus::Sending);
        feedback::show_sending(&doc, true);

        let doc_async = doc.clone();
        let state_async = state.clone();
        spawn_local(async move {
            let outcome = submit(body).await;
            match &outcome {
                Ok(()) => {
                    log::info!("[contact] message sent");
                    clear_form(&doc_async);
                }
                Err(e) => log::error!("[contact] send failed: {e}"),
            }
            let status = SubmitStatus::from_outcome(&outcome);
            state_async.borrow_mut().status = status;
            feedback::show_status(&doc_async, status);
            feedback::show_sending(&doc_async, false);
        });
    }) as Box<dyn FnMut(web::Event)>);
    _ = form_el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
