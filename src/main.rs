use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod booking;
mod config;
mod content;
mod reveal;
mod scroll;
mod components {
    pub mod about;
    pub mod consultation;
    pub mod footer;
    pub mod hero;
    pub mod notification;
    pub mod projects;
    pub mod services;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::notification::Toaster;
use content::SiteContent;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, content: Rc<SiteContent>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing {content} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let render = {
        let content = props.content.clone();
        move |routes: Route| switch(routes, content.clone())
    };

    html! {
        <Toaster>
            <BrowserRouter>
                <Switch<Route> {render} />
            </BrowserRouter>
        </Toaster>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    let content = match SiteContent::load() {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to load site content: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
    })
    .render();
}
