//! Page navigation buttons: "Front", the numbered interior pages, "Back".

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PAGE_BUTTONS_ID;

fn button_id(target: usize) -> String {
    format!("page-button-{}", target)
}

fn button_label(target: usize, page_count: usize) -> String {
    if target == 0 {
        "Front".to_string()
    } else if target == page_count {
        "Back".to_string()
    } else {
        format!("{}", target)
    }
}

/// Build one button per navigation target (`0..=page_count`) inside the
/// `#page-buttons` container. Missing container is tolerated so the canvas
/// still works on stripped-down pages.
pub fn build_page_buttons(
    document: &web::Document,
    page_count: usize,
    on_select: Rc<dyn Fn(usize)>,
) {
    let Some(container) = document.get_element_by_id(PAGE_BUTTONS_ID) else {
        log::warn!("missing #{}, skipping page buttons", PAGE_BUTTONS_ID);
        return;
    };
    for target in 0..=page_count {
        let Ok(el) = document.create_element("button") else {
            continue;
        };
        el.set_id(&button_id(target));
        let _ = el.class_list().add_1("page-button");
        el.set_text_content(Some(&button_label(target, page_count)));
        let on_select = on_select.clone();
        let closure = Closure::wrap(Box::new(move || on_select(target)) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        let _ = container.append_child(&el);
    }
    highlight_active(document, 0, page_count);
}

/// Mark the button for the current navigation target.
pub fn highlight_active(document: &web::Document, target: usize, page_count: usize) {
    for i in 0..=page_count {
        if let Some(el) = document.get_element_by_id(&button_id(i)) {
            if i == target {
                let _ = el.class_list().add_1("active");
            } else {
                let _ = el.class_list().remove_1("active");
            }
        }
    }
}
