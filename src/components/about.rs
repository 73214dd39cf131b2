use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::CountUp;
use crate::config;
use crate::content::{SiteContent, Stat};
use crate::reveal::{use_reveal, RevealOptions};

const SCOPE: &str = "about-animate";
const TIMELINE_SCOPE: &str = "timeline-item";

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: Stat,
    active: bool,
    delay_ms: u32,
}

/// Counts up to the stat's target once `active` first turns true.
#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0.0_f64);
    let running = use_state(|| false);
    let counter = use_mut_ref(|| CountUp::new(props.stat.number, config::COUNTER_STEPS));

    {
        let running = running.clone();
        let counter = counter.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |active| {
                let pending = (*active && !counter.borrow().is_done())
                    .then(|| Timeout::new(delay_ms, move || running.set(true)));
                move || drop(pending)
            },
            props.active,
        );
    }

    {
        let value = value.clone();
        let running = running.clone();
        let counter = counter.clone();
        let tick_ms = if *running {
            CountUp::tick_interval(config::COUNTER_DURATION_MS, config::COUNTER_STEPS)
        } else {
            0
        };
        use_interval(
            move || {
                let mut counter = counter.borrow_mut();
                value.set(counter.advance());
                if counter.is_done() {
                    running.set(false);
                }
            },
            tick_ms,
        );
    }

    let stat = &props.stat;
    html! {
        <div class="stat-card">
            <div class="stat-icon" style={format!("background: {};", stat.color)}>{&stat.icon}</div>
            <div class="stat-number gradient-text">{stat.format_value(*value)}</div>
            <div class="stat-label">{&stat.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: Rc<SiteContent>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let reveal = use_reveal(SCOPE, RevealOptions::ELEMENT, ());
    let milestones = use_reveal(TIMELINE_SCOPE, RevealOptions::TIMELINE, ());
    let counting = reveal.is_visible("stats");

    {
        use_effect_with_deps(
            |counting| {
                if *counting {
                    debug!("About stats in view, starting counters");
                }
                || ()
            },
            counting,
        );
    }

    html! {
        <section id="about-section" class="about">
            <style>
                {r#"
                    .about {
                        position: relative;
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #ffffff, rgba(239, 246, 255, 0.4));
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    .stat-card {
                        text-align: center;
                        padding: 2rem 1rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.85);
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    }
                    .stat-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                    }
                    .stat-number {
                        font-size: 2.5rem;
                        font-weight: 800;
                    }
                    .stat-label {
                        color: #64748b;
                        font-weight: 500;
                    }
                    .timeline {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .timeline::before {
                        content: "";
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 50%;
                        width: 2px;
                        background: linear-gradient(#3b82f6, #a855f7, #06b6d4);
                    }
                    .milestone {
                        position: relative;
                        width: 50%;
                        padding: 1rem 2.5rem;
                        box-sizing: border-box;
                    }
                    .milestone.left {
                        left: 0;
                        text-align: right;
                    }
                    .milestone.right {
                        left: 50%;
                    }
                    .milestone.left.concealed {
                        transform: translateX(-2rem);
                    }
                    .milestone.right.concealed {
                        transform: translateX(2rem);
                    }
                    .milestone-dot {
                        position: absolute;
                        top: 1.5rem;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                    }
                    .milestone.left .milestone-dot {
                        right: -1.25rem;
                    }
                    .milestone.right .milestone-dot {
                        left: -1.25rem;
                    }
                    .milestone-card {
                        padding: 1.25rem;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    }
                    .milestone-year {
                        font-weight: 700;
                        color: #2563eb;
                    }
                    .milestone-card h4 {
                        margin: 0.25rem 0 0.5rem;
                    }
                    .milestone-card p {
                        margin: 0;
                        color: #64748b;
                    }
                "#}
            </style>
            <div class="container">
                <div
                    class={classes!(SCOPE, "reveal", reveal.class("header"), "section-header")}
                    data-element-id="header"
                >
                    <div class="section-badge">{"🚀"}</div>
                    <h2 class="section-title gradient-text">{"About Us"}</h2>
                    <p class="section-lead">{&props.content.contact.tagline}</p>
                </div>

                <div
                    class={classes!(SCOPE, "reveal", reveal.class("stats"), "stat-grid")}
                    data-element-id="stats"
                >
                    { for props.content.stats.iter().enumerate().map(|(index, stat)| html! {
                        <StatCounter
                            key={stat.id}
                            stat={stat.clone()}
                            active={counting}
                            delay_ms={index as u32 * config::COUNTER_STAGGER_MS}
                        />
                    }) }
                </div>

                <div class="timeline">
                    { for props.content.timeline.iter().enumerate().map(|(index, milestone)| {
                        let id = format!("milestone-{}", index);
                        let side = if index % 2 == 0 { "left" } else { "right" };
                        html! {
                            <div
                                key={id.clone()}
                                class={classes!("milestone", side, TIMELINE_SCOPE, "reveal", milestones.class(&id))}
                                data-element-id={id.clone()}
                            >
                                <div class="milestone-dot" style={format!("background: {};", milestone.color)}>
                                    {&milestone.icon}
                                </div>
                                <div class="milestone-card">
                                    <div class="milestone-year">{&milestone.year}</div>
                                    <h4>{&milestone.title}</h4>
                                    <p>{&milestone.description}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
