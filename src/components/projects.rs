use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::content::{Project, ProjectFilter, SiteContent};
use crate::reveal::{use_reveal, RevealOptions};

const SCOPE: &str = "projects-animate";
const CARD_SCOPE: &str = "project-card";

#[derive(Properties, PartialEq)]
struct ProjectDialogProps {
    project: Project,
    on_close: Callback<()>,
}

#[function_component(ProjectDialog)]
fn project_dialog(props: &ProjectDialogProps) -> Html {
    let project = &props.project;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" onclick={close.clone()}>
            <div class="dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="dialog-close" onclick={close} aria-label="Close">{"×"}</button>
                <h3 class="dialog-title gradient-text">{&project.title}</h3>
                <img class="dialog-image" src={project.image.clone()} alt={project.title.clone()} />
                <p class="dialog-text">{&project.long_description}</p>
                <h4 class="dialog-subtitle">{"Tech Stack:"}</h4>
                <div class="badge-row">
                    { for project.stack.iter().map(|tech| html! {
                        <span key={tech.clone()} class="badge badge-soft">{tech}</span>
                    }) }
                </div>
                <div class="dialog-actions">
                    <a class="btn btn-primary" href={project.live_url.clone()} target="_blank" rel="noopener noreferrer">
                        {"Live Demo"}
                    </a>
                    <a class="btn btn-outline" href={project.github_url.clone()} target="_blank" rel="noopener noreferrer">
                        {"View Code"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let filter = use_state(ProjectFilter::default);
    let open_project = use_state(|| None::<u32>);
    let reveal = use_reveal(SCOPE, RevealOptions::ELEMENT, ());
    let cards = use_reveal(CARD_SCOPE, RevealOptions::ELEMENT, *filter);

    let shown = props.content.filter_projects(*filter);
    let dialog = (*open_project)
        .and_then(|id| props.content.project(id))
        .map(|project| {
            let on_close = {
                let open_project = open_project.clone();
                Callback::from(move |_: ()| open_project.set(None))
            };
            html! { <ProjectDialog project={project.clone()} {on_close} /> }
        });

    html! {
        <section id="projects" class="projects">
            <style>
                {r#"
                    .projects {
                        position: relative;
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #f8fafc, rgba(239, 246, 255, 0.5));
                    }
                    .filter-bar {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 3rem;
                    }
                    .filter-group {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.5rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.8);
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    }
                    .filter-button {
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 12px;
                        background: transparent;
                        color: #64748b;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .filter-button:hover {
                        background: #eff6ff;
                        color: #2563eb;
                    }
                    .filter-button.active {
                        background: linear-gradient(90deg, #2563eb, #9333ea);
                        color: #fff;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project {
                        overflow: hidden;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.8);
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                        transition: transform 0.7s ease, opacity 0.7s ease, box-shadow 0.3s ease;
                    }
                    .project:hover {
                        box-shadow: 0 24px 48px rgba(15, 23, 42, 0.16);
                    }
                    .project-media {
                        position: relative;
                    }
                    .project-media img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .project:hover .project-media img {
                        transform: scale(1.05);
                    }
                    .project-category {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                    }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        padding: 1rem;
                        background: linear-gradient(to top, rgba(0,0,0,0.6), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .project:hover .project-overlay {
                        opacity: 1;
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .project-body h3 {
                        margin: 0 0 0.5rem;
                    }
                    .project-body p {
                        color: #64748b;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .dialog-backdrop {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(15, 23, 42, 0.6);
                        z-index: 90;
                    }
                    .dialog {
                        position: relative;
                        width: min(48rem, 92vw);
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 2rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.97);
                        box-shadow: 0 32px 64px rgba(15, 23, 42, 0.3);
                    }
                    .dialog-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        border: none;
                        background: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .dialog-image {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        border-radius: 12px;
                    }
                    .dialog-text {
                        color: #64748b;
                        line-height: 1.6;
                    }
                    .dialog-actions {
                        display: flex;
                        gap: 1rem;
                        padding-top: 1rem;
                    }
                "#}
            </style>
            <div class="container">
                <div
                    class={classes!(SCOPE, "reveal", reveal.class("header"), "section-header")}
                    data-element-id="header"
                >
                    <div class="section-badge">{"✨"}</div>
                    <h2 class="section-title gradient-text">{"Our Projects"}</h2>
                    <p class="section-lead">
                        {"Discover our portfolio of innovative solutions that have transformed businesses"}
                    </p>
                </div>

                <div
                    class={classes!(SCOPE, "reveal", reveal.class("filters"), "filter-bar")}
                    data-element-id="filters"
                    style="transition-delay: 0.2s;"
                >
                    <div class="filter-group">
                        { for ProjectFilter::all().iter().copied().map(|option| {
                            let onclick = {
                                let filter = filter.clone();
                                Callback::from(move |_: MouseEvent| {
                                    debug!("Project filter set to {}", option);
                                    filter.set(option);
                                })
                            };
                            html! {
                                <button
                                    key={option.label()}
                                    class={classes!("filter-button", (option == *filter).then_some("active"))}
                                    {onclick}
                                >
                                    {option.label()}
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="project-grid">
                    { for shown.iter().enumerate().map(|(index, project)| {
                        let card_id = project.reveal_id();
                        let open = {
                            let open_project = open_project.clone();
                            let id = project.id;
                            Callback::from(move |_: MouseEvent| open_project.set(Some(id)))
                        };
                        html! {
                            <div
                                key={project.id}
                                class={classes!("project", CARD_SCOPE, "reveal", cards.class(&card_id))}
                                data-element-id={card_id.clone()}
                                style={format!("transition-delay: {}ms;", index * 150)}
                            >
                                <div class="project-media">
                                    <img src={project.image.clone()} alt={project.title.clone()} />
                                    <div class="project-overlay">
                                        <div class="badge-row">
                                            { for project.stack.iter().take(3).map(|tech| html! {
                                                <span key={tech.clone()} class="badge badge-glass">{tech}</span>
                                            }) }
                                        </div>
                                    </div>
                                    <span class="badge badge-gradient project-category">
                                        {project.category.label()}
                                    </span>
                                </div>
                                <div class="project-body">
                                    <h3>{&project.title}</h3>
                                    <p>{&project.description}</p>
                                    <button class="btn btn-outline btn-block" onclick={open}>
                                        {"View Details →"}
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            { dialog.unwrap_or_default() }
        </section>
    }
}
