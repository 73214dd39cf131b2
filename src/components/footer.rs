use std::rc::Rc;

use yew::prelude::*;

use crate::booking::ServiceKind;
use crate::content::SiteContent;
use crate::scroll::{scroll_to_section, scroll_to_top, Section};

const QUICK_LINKS: [Section; 4] = [
    Section::Projects,
    Section::Services,
    Section::About,
    Section::Consultation,
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let contact = &props.content.contact;
    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());
    let open_chat = Callback::from(|_: MouseEvent| scroll_to_section(Section::Consultation));

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        padding: 4rem 0 2rem;
                        color: #cbd5e1;
                        background: linear-gradient(135deg, #0f172a, #1e293b);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2.5rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .footer-heading {
                        color: #fff;
                        font-weight: 600;
                        margin: 0 0 1rem;
                    }
                    .footer-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-list li {
                        padding: 0.3rem 0;
                    }
                    .footer-link {
                        border: none;
                        padding: 0;
                        background: none;
                        color: inherit;
                        font: inherit;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }
                    .footer-link:hover {
                        color: #60a5fa;
                    }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(148, 163, 184, 0.2);
                        font-size: 0.875rem;
                    }
                    .chat-button {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        width: 3.5rem;
                        height: 3.5rem;
                        border: none;
                        border-radius: 50%;
                        font-size: 1.5rem;
                        color: #fff;
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        box-shadow: 0 12px 32px rgba(59, 130, 246, 0.4);
                        cursor: pointer;
                        z-index: 50;
                        transition: transform 0.3s ease;
                    }
                    .chat-button:hover {
                        transform: scale(1.1);
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand gradient-text">{&contact.company}</div>
                        <p>{&contact.tagline}</p>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Quick Links"}</h4>
                        <ul class="footer-list">
                            { for QUICK_LINKS.iter().copied().map(|section| html! {
                                <li key={section.id()}>
                                    <button
                                        class="footer-link"
                                        onclick={Callback::from(move |_: MouseEvent| scroll_to_section(section))}
                                    >
                                        {section.link_label()}
                                    </button>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Services"}</h4>
                        <ul class="footer-list">
                            { for ServiceKind::all().iter().map(|service| html! {
                                <li key={service.title()}>{service.title()}</li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Contact"}</h4>
                        <ul class="footer-list">
                            <li>
                                <a class="footer-link" href={format!("mailto:{}", contact.email)}>
                                    {format!("✉️ {}", contact.email)}
                                </a>
                            </li>
                            <li>
                                <a class="footer-link" href={format!("tel:{}", contact.phone.replace(' ', ""))}>
                                    {format!("📞 {}", contact.phone)}
                                </a>
                            </li>
                            <li>{format!("📍 {}", contact.location)}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>
                        {format!("© {} {}. All rights reserved.", contact.copyright_year, contact.company)}
                    </span>
                    <button class="footer-link" onclick={back_to_top}>{"Back to Top ↑"}</button>
                </div>
            </div>
            <button class="chat-button" onclick={open_chat} aria-label="Book a consultation">
                {"💬"}
            </button>
        </footer>
    }
}
