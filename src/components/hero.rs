use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::cycle;
use crate::booking::ServiceKind;
use crate::config;
use crate::content::SiteContent;
use crate::reveal::{use_reveal, RevealOptions};
use crate::scroll::{scroll_to_section, Section};

const SCOPE: &str = "hero-animate";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let word = use_state(|| 0usize);
    let pointer = use_state(|| (0i32, 0i32));
    let reveal = use_reveal(SCOPE, RevealOptions::ELEMENT, ());

    {
        let word = word.clone();
        use_interval(
            move || word.set(cycle(*word, ServiceKind::all().len())),
            config::HERO_ROTATION_MS,
        );
    }

    {
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            pointer.set((e.client_x(), e.client_y()));
        });
    }

    let book = Callback::from(|_: MouseEvent| scroll_to_section(Section::Consultation));
    let view_work = Callback::from(|_: MouseEvent| scroll_to_section(Section::Projects));

    let (x, y) = *pointer;
    let spotlight_style = format!("left: {}px; top: {}px;", x - 300, y - 300);
    let current_word = ServiceKind::all()[*word % ServiceKind::all().len()].title();

    // Each revealed block fades in 100ms after the previous one.
    let block = |id: &'static str, order: u32, extra: &'static str| -> (Classes, String) {
        (
            classes!(SCOPE, "reveal", reveal.class(id), extra),
            format!("transition-delay: {:.1}s;", f64::from(order) * 0.1),
        )
    };
    let (badge_class, badge_style) = block("badge", 0, "hero-badge");
    let (title_class, title_style) = block("title", 1, "hero-title");
    let (subtitle_class, subtitle_style) = block("subtitle", 2, "hero-subtitle");
    let (lead_class, lead_style) = block("description1", 3, "hero-lead");
    let (word_class, word_style) = block("animated-text", 4, "hero-word");
    let (pitch_class, pitch_style) = block("description2", 5, "hero-pitch");
    let (cta_class, cta_style) = block("cta-buttons", 6, "hero-cta-group");
    let (stats_class, stats_style) = block("stats", 7, "hero-stats");
    let (scroll_class, scroll_style) = block("scroll-indicator", 8, "hero-scroll");

    let contact = &props.content.contact;
    let company_rest = contact
        .company
        .strip_prefix(contact.short_name.as_str())
        .unwrap_or(&contact.company)
        .trim();

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        text-align: center;
                        background: linear-gradient(135deg, #f8fafc, #ffffff 50%, #eff6ff);
                    }
                    .hero-spotlight {
                        position: absolute;
                        width: 600px;
                        height: 600px;
                        border-radius: 50%;
                        background: linear-gradient(90deg, rgba(59,130,246,0.2), rgba(168,85,247,0.2), rgba(6,182,212,0.2));
                        filter: blur(64px);
                        transform: translate(-50%, -50%);
                        transition: left 0.7s ease-out, top 0.7s ease-out;
                        pointer-events: none;
                    }
                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        background-image:
                            linear-gradient(rgba(59,130,246,0.1) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(59,130,246,0.1) 1px, transparent 1px);
                        background-size: 50px 50px;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        padding: 0 1rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 2rem;
                        border-radius: 999px;
                        background: rgba(219, 234, 254, 0.8);
                        color: #1e40af;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .hero-title {
                        font-size: clamp(3.5rem, 9vw, 6rem);
                        font-weight: 900;
                        margin: 0 0 1rem;
                    }
                    .hero-subtitle {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 700;
                        color: #1e293b;
                        margin: 0 0 1.5rem;
                    }
                    .hero-lead, .hero-pitch {
                        font-size: 1.375rem;
                        color: #475569;
                    }
                    .hero-word {
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .hero-word span {
                        animation: scaleIn 0.4s ease-out;
                    }
                    @keyframes scaleIn {
                        from { transform: scale(0.9); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    .hero-pitch {
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 4rem;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        max-width: 56rem;
                        margin: 0 auto 4rem;
                    }
                    .hero-stat-number {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #2563eb;
                    }
                    .hero-stat-label {
                        color: #475569;
                    }
                    .hero-scroll {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: #64748b;
                        font-size: 0.875rem;
                    }
                    .hero-scroll-mouse {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(148, 163, 184, 0.5);
                        border-radius: 999px;
                        animation: bounce 1.5s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-8px); }
                    }
                "#}
            </style>
            <div class="hero-spotlight" style={spotlight_style}></div>
            <div class="hero-grid"></div>

            <div class="hero-content">
                <div class={badge_class} data-element-id="badge" style={badge_style}>
                    <span>{"✨"}</span>
                    <span>{"Empowering Digital Innovation"}</span>
                </div>

                <h1 class={title_class} data-element-id="title" style={title_style}>
                    <span class="gradient-text">{&contact.short_name}</span>
                </h1>
                <h2 class={subtitle_class} data-element-id="subtitle" style={subtitle_style}>
                    {company_rest}
                </h2>

                <p class={lead_class} data-element-id="description1" style={lead_style}>
                    {"Cutting-edge"}
                </p>
                <div class={word_class} data-element-id="animated-text" style={word_style}>
                    <span key={current_word} class="gradient-text">{current_word}</span>
                </div>

                <p class={pitch_class} data-element-id="description2" style={pitch_style}>
                    {"Transform your business with innovative technology solutions that drive growth, efficiency, and success in the digital age."}
                </p>

                <div class={cta_class} data-element-id="cta-buttons" style={cta_style}>
                    <button class="btn btn-primary btn-lg" onclick={book}>
                        {"Book Free Consultation →"}
                    </button>
                    <button class="btn btn-outline btn-lg" onclick={view_work}>
                        {"View Our Work"}
                    </button>
                </div>

                <div class={stats_class} data-element-id="stats" style={stats_style}>
                    { for props.content.hero_highlights.iter().map(|stat| html! {
                        <div key={stat.label.clone()}>
                            <div class="hero-stat-number">{&stat.number}</div>
                            <div class="hero-stat-label">{&stat.label}</div>
                        </div>
                    }) }
                </div>

                <div class={scroll_class} data-element-id="scroll-indicator" style={scroll_style}>
                    <span>{"Scroll to explore"}</span>
                    <div class="hero-scroll-mouse"></div>
                </div>
            </div>
        </section>
    }
}
