use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    about::About, consultation::Consultation, footer::Footer, hero::Hero, projects::Projects,
    services::Services,
};
use crate::content::SiteContent;
use crate::reveal::{use_reveal, RevealOptions};

const SCOPE: &str = "scroll-animate";

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let reveal = use_reveal(SCOPE, RevealOptions::SECTION, ());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let wrapper = |id: &'static str, body: Html| -> Html {
        html! {
            <div class={classes!(SCOPE, "reveal", reveal.class(id))} data-element-id={id}>
                {body}
            </div>
        }
    };
    let content = &props.content;

    html! {
        <div class="landing-page">
            <div class="parallax" aria-hidden="true">
                <div class="parallax-blob blob-blue" style={format!("transform: translateY({}px);", scroll_y * 0.5)}></div>
                <div class="parallax-blob blob-purple" style={format!("transform: translateY({}px);", scroll_y * -0.3)}></div>
                <div class="parallax-blob blob-cyan" style={format!("transform: translateY({}px);", scroll_y * 0.2)}></div>
            </div>

            <Hero content={content.clone()} />
            { wrapper("projects", html! { <Projects content={content.clone()} /> }) }
            { wrapper("services", html! { <Services content={content.clone()} /> }) }
            { wrapper("consultation", html! { <Consultation /> }) }
            { wrapper("about", html! { <About content={content.clone()} /> }) }
            { wrapper("footer", html! { <Footer content={content.clone()} /> }) }
        </div>
    }
}
