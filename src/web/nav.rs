//! Navbar, hamburger menu, active link, back-to-top, scroll progress

use std::cell::Cell;
use std::rc::Rc;

use tracing::trace;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use super::dom;
use super::handle::Handle;
use crate::core::nav::{self, MenuState};
use crate::core::SiteConfig;

pub fn init_navbar(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(navbar) = dom::query(root, ".navbar") else {
        return Ok(None);
    };
    let window = dom::window().ok_or("no window")?;
    let offset = config.nav.scrolled_offset;

    let update = move || dom::set_class(&navbar, "scrolled", nav::navbar_scrolled(dom::scroll_y(), offset));
    update();

    let mut handle = Handle::new("navbar");
    handle.listen_passive(&window, "scroll", move |_| update())?;
    Ok(Some(handle))
}

pub fn init_menu(root: &Element) -> Result<Option<Handle>, JsValue> {
    let (Some(button), Some(links)) = (dom::query(root, ".hamburger"), dom::query(root, ".nav-links")) else {
        return Ok(None);
    };

    let state = Rc::new(Cell::new(MenuState::default()));
    let apply = {
        let (button, links) = (button.clone(), links.clone());
        move |menu: MenuState| {
            dom::set_class(&button, "open", menu.is_open());
            dom::set_class(&links, "open", menu.is_open());
            dom::set_body_overflow(menu.body_overflow());
        }
    };

    let mut handle = Handle::new("menu");
    {
        let (state, apply) = (state.clone(), apply.clone());
        handle.listen(&button, "click", move |_| {
            let mut menu = state.get();
            menu.toggle();
            state.set(menu);
            apply(menu);
        })?;
    }

    for link in dom::query_all(&links, "a") {
        let (state, apply) = (state.clone(), apply.clone());
        handle.listen(&link, "click", move |_| {
            let mut menu = state.get();
            menu.close();
            state.set(menu);
            apply(menu);
        })?;
    }

    // Never leave the page scroll-locked after teardown
    handle.on_dispose(move || {
        if state.get().is_open() {
            dom::set_body_overflow(nav::body_overflow(false));
        }
    });
    Ok(Some(handle))
}

pub fn init_active_link(root: &Element) -> Result<Option<Handle>, JsValue> {
    let links = dom::query_all(root, ".nav-links a");
    if links.is_empty() {
        return Ok(None);
    }
    let pathname = dom::window().ok_or("no window")?.location().pathname()?;
    let page = nav::current_page(&pathname);

    for link in &links {
        let active = link.get_attribute("href").as_deref() == Some(page);
        dom::set_class(link, "active", active);
    }
    trace!(page, "Active nav link set");
    Ok(Some(Handle::new("active-link")))
}

pub fn init_back_to_top(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(button) = dom::query(root, ".back-to-top") else {
        return Ok(None);
    };
    let window = dom::window().ok_or("no window")?;
    let offset = config.nav.back_to_top_offset;

    let mut handle = Handle::new("back-to-top");
    {
        let button = button.clone();
        handle.listen_passive(&window, "scroll", move |_| {
            dom::set_class(&button, "visible", nav::back_to_top_visible(dom::scroll_y(), offset));
        })?;
    }
    {
        let window = window.clone();
        handle.listen(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(Some(handle))
}

pub fn init_scroll_progress(root: &Element) -> Result<Option<Handle>, JsValue> {
    let Some(bar) = dom::by_id(root, "scroll-progress") else {
        return Ok(None);
    };
    let window = dom::window().ok_or("no window")?;
    let document = dom::document().ok_or("no document")?;

    let mut handle = Handle::new("scroll-progress");
    let viewport_source = window.clone();
    handle.listen_passive(&window, "scroll", move |_| {
        let scroll_height = document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let viewport = viewport_source
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let percent = nav::scroll_progress(dom::scroll_y(), scroll_height, viewport);
        dom::set_style(&bar, "width", &format!("{percent}%"));
    })?;
    Ok(Some(handle))
}
