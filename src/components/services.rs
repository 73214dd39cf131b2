use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::cycle;
use crate::config;
use crate::content::SiteContent;
use crate::reveal::{use_reveal, RevealOptions};

const SCOPE: &str = "service-card-animate";
const SECTION_ID: &str = "services-section";

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let active = use_state(|| 0usize);
    let reveal = use_reveal(SCOPE, RevealOptions::CARD, ());
    let count = props.content.services.len();

    // Rotation starts once the section has scrolled into view.
    let rotation_ms = if reveal.is_visible(SECTION_ID) {
        config::SERVICE_ROTATION_MS
    } else {
        0
    };
    {
        let active = active.clone();
        use_interval(move || active.set(cycle(*active, count)), rotation_ms);
    }

    html! {
        <section id="services" class={classes!("services", SCOPE)} data-element-id={SECTION_ID}>
            <style>
                {r#"
                    .services {
                        position: relative;
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #f8fafc, rgba(250, 245, 255, 0.3));
                        overflow: hidden;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 4px 16px rgba(15, 23, 42, 0.06);
                        cursor: pointer;
                        transition: transform 0.5s ease, box-shadow 0.5s ease, opacity 0.5s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
                    }
                    .service-card.active {
                        outline: 2px solid #3b82f6;
                        transform: scale(1.03);
                    }
                    .service-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        margin: 0 0 0.75rem;
                    }
                    .service-card p {
                        flex-grow: 1;
                        color: #64748b;
                    }
                    .service-features {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .service-features li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #64748b;
                        padding: 0.25rem 0;
                        transition: opacity 0.3s ease-out, transform 0.3s ease-out;
                    }
                    .service-features li.concealed {
                        opacity: 0;
                        transform: translateX(1rem);
                    }
                    .feature-dot {
                        width: 0.375rem;
                        height: 0.375rem;
                        border-radius: 50%;
                    }
                    .highlight-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .highlight {
                        text-align: center;
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.7);
                    }
                    .highlight-number {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header">
                    <div class="section-badge">{"⚡"}</div>
                    <h2 class="section-title gradient-text">{"Our Services"}</h2>
                    <p class="section-lead">{"Comprehensive digital solutions tailored to your business needs"}</p>
                </div>

                <div class="services-grid">
                    { for props.content.services.iter().enumerate().map(|(index, service)| {
                        let card_id = format!("service-{}", index);
                        let seen = reveal.is_visible(&card_id);
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        html! {
                            <div
                                key={card_id.clone()}
                                class={classes!(
                                    "service-card", SCOPE, "reveal", reveal.class(&card_id),
                                    (index == *active).then_some("active")
                                )}
                                data-element-id={card_id.clone()}
                                style={format!("transition-delay: {}ms;", index * 100)}
                                {onclick}
                            >
                                <div class="service-icon" style={format!("background: {};", service.color)}>
                                    {&service.icon}
                                </div>
                                <h3>{service.title()}</h3>
                                <p>{&service.description}</p>
                                <h4 class="features-heading">{"Key Features:"}</h4>
                                <ul class="service-features">
                                    { for service.features.iter().enumerate().map(|(feature_index, feature)| html! {
                                        <li
                                            key={feature.clone()}
                                            class={if seen { "revealed" } else { "concealed" }}
                                            style={format!("transition-delay: {}ms;", index * 100 + feature_index * 100)}
                                        >
                                            <span class="feature-dot" style={format!("background: {};", service.color)}></span>
                                            <span>{feature}</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>

                <div class="highlight-grid">
                    { for props.content.service_highlights.iter().enumerate().map(|(index, stat)| html! {
                        <div
                            key={stat.label.clone()}
                            class={classes!("highlight", "reveal", reveal.class(SECTION_ID))}
                            style={format!("transition-delay: {}ms;", index * 150)}
                        >
                            <div class="highlight-icon">{&stat.icon}</div>
                            <div class="highlight-number gradient-text">{&stat.number}</div>
                            <div class="highlight-label">{&stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
