use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::booking::{
    complete_and_announce, parse_date_input, Notifier, ServiceKind, SubmissionResult,
    SubmissionState, SubmissionTimer, TimeSlot, Wizard, WizardStep,
};
use crate::components::notification::ToastHandle;
use crate::config;
use crate::reveal::{use_reveal, RevealOptions};

const SCOPE: &str = "consultation-animate";

/// Used when the page is rendered without a toast provider.
struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        info!("{}: {}", title, body);
    }
}

pub enum Msg {
    SetName(String),
    SetEmail(String),
    SetDate(String),
    SetTime(String),
    ToggleService(ServiceKind),
    SetMessage(String),
    Next,
    Previous,
    Submit,
    Completed(SubmissionResult),
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct BookingWizardProps {
    pub progress_class: &'static str,
    pub card_class: &'static str,
}

pub struct BookingWizard {
    wizard: Wizard,
    pending: Option<SubmissionTimer>,
    toasts: Option<ToastHandle>,
    _toasts_listener: Option<ContextHandle<ToastHandle>>,
}

impl BookingWizard {
    fn step_icon(step: WizardStep) -> &'static str {
        match step {
            WizardStep::PersonalInfo => "👤",
            WizardStep::Schedule => "📅",
            WizardStep::ServicesAndDetails => "💬",
        }
    }

    fn view_progress(&self, ctx: &Context<Self>) -> Html {
        let current = self.wizard.step();
        html! {
            <div
                class={classes!(SCOPE, "reveal", ctx.props().progress_class, "wizard-progress")}
                data-element-id="progress"
                style="transition-delay: 0.2s;"
            >
                { for WizardStep::all().iter().map(|step| {
                    let reached = *step <= current;
                    html! {
                        <div key={step.title()} class="progress-step">
                            <div class={classes!("progress-dot", reached.then_some("reached"))}>
                                { if *step < current { "✓" } else { Self::step_icon(*step) } }
                            </div>
                            <span class={classes!("progress-label", reached.then_some("reached"))}>
                                {step.title()}
                            </span>
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn view_personal_info(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        let on_name = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetName(input.value())
        });
        let on_email = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetEmail(input.value())
        });

        html! {
            <div class="form-grid fade-in">
                <div class="field">
                    <label for="name">{"👤 Full Name *"}</label>
                    <input
                        id="name"
                        type="text"
                        value={form.name.clone()}
                        oninput={on_name}
                        placeholder="Enter your full name"
                        required=true
                    />
                </div>
                <div class="field">
                    <label for="email">{"✉️ Email Address *"}</label>
                    <input
                        id="email"
                        type="email"
                        value={form.email.clone()}
                        oninput={on_email}
                        placeholder="Enter your email address"
                        required=true
                    />
                </div>
            </div>
        }
    }

    fn view_schedule(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        let date_value = form
            .preferred_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let on_date = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetDate(input.value())
        });
        let on_time = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetTime(select.value())
        });

        html! {
            <div class="form-grid fade-in">
                <div class="field">
                    <label for="preferred-date">{"📅 Preferred Date *"}</label>
                    <input
                        id="preferred-date"
                        type="date"
                        value={date_value}
                        min={today}
                        onchange={on_date}
                        required=true
                    />
                </div>
                <div class="field">
                    <label for="preferred-time">{"🕒 Preferred Time *"}</label>
                    <select id="preferred-time" onchange={on_time}>
                        <option value="" selected={form.preferred_time.is_none()} disabled=true>
                            {"Select a time slot"}
                        </option>
                        { for TimeSlot::all().iter().map(|slot| html! {
                            <option
                                key={slot.label()}
                                value={slot.label()}
                                selected={form.preferred_time == Some(*slot)}
                            >
                                {slot.label()}
                            </option>
                        }) }
                    </select>
                </div>
            </div>
        }
    }

    fn view_services(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::SetMessage(area.value())
        });

        html! {
            <div class="fade-in">
                <p class="field-heading">{"Services You're Interested In *"}</p>
                <div class="service-options">
                    { for ServiceKind::all().iter().copied().map(|service| {
                        let checked = form.is_selected(service);
                        let id = format!("service-option-{}", service.title().to_lowercase().replace(' ', "-"));
                        html! {
                            <label
                                key={service.title()}
                                for={id.clone()}
                                class={classes!("service-option", checked.then_some("checked"))}
                            >
                                <input
                                    id={id}
                                    type="checkbox"
                                    checked={checked}
                                    onchange={ctx.link().callback(move |_: Event| Msg::ToggleService(service))}
                                />
                                <span>{service.title()}</span>
                            </label>
                        }
                    }) }
                </div>
                <div class="field">
                    <label for="message">{"💬 Additional Message"}</label>
                    <textarea
                        id="message"
                        rows="4"
                        value={form.message.clone()}
                        oninput={on_message}
                        placeholder="Tell us more about your project requirements..."
                    />
                </div>
            </div>
        }
    }

    fn view_actions(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();
        let submitting = self.wizard.submission() == SubmissionState::Submitting;
        let missing = self.wizard.missing_fields();

        let previous = if self.wizard.can_go_back() || (submitting && step != WizardStep::PersonalInfo) {
            html! {
                <button
                    type="button"
                    class="btn btn-outline btn-grow"
                    disabled={submitting}
                    onclick={ctx.link().callback(|_| Msg::Previous)}
                >
                    {"Previous"}
                </button>
            }
        } else {
            html! {}
        };

        let forward = if step != WizardStep::ServicesAndDetails {
            html! {
                <button
                    type="button"
                    class="btn btn-primary btn-grow"
                    disabled={!self.wizard.can_advance()}
                    onclick={ctx.link().callback(|_| Msg::Next)}
                >
                    {"Next Step"}
                </button>
            }
        } else {
            html! {
                <button
                    type="submit"
                    class="btn btn-success btn-grow"
                    disabled={!self.wizard.can_submit()}
                >
                    if submitting {
                        <span class="spinner"></span>{" Submitting..."}
                    } else {
                        {"➤ Submit Request"}
                    }
                </button>
            }
        };

        let hint = if missing.is_empty() || submitting {
            html! {}
        } else {
            let labels: Vec<&str> = missing.iter().map(|field| field.label()).collect();
            html! { <p class="form-hint">{format!("Still needed: {}", labels.join(", "))}</p> }
        };

        html! {
            <>
                <div class="form-actions">
                    {previous}
                    {forward}
                </div>
                {hint}
            </>
        }
    }

    fn view_thank_you(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="thank-you scale-in">
                <div class="thank-you-badge">{"✓"}</div>
                <h2 class="thank-you-title">{"Thank You!"}</h2>
                <p class="thank-you-text">
                    {"Your consultation request has been submitted successfully. We'll reach out to you within 24 hours to confirm your appointment."}
                </p>
                <button class="btn btn-outline" onclick={ctx.link().callback(|_| Msg::Reset)}>
                    {"Book Another Consultation ✨"}
                </button>
            </div>
        }
    }
}

impl Component for BookingWizard {
    type Message = Msg;
    type Properties = BookingWizardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (toasts, listener) = match ctx.link().context::<ToastHandle>(Callback::noop()) {
            Some((handle, listener)) => (Some(handle), Some(listener)),
            None => {
                warn!("No toast provider found, confirmations will only be logged");
                (None, None)
            }
        };

        Self {
            wizard: Wizard::new(),
            pending: None,
            toasts,
            _toasts_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => {
                self.wizard.set_name(name);
                true
            }
            Msg::SetEmail(email) => {
                self.wizard.set_email(email);
                true
            }
            Msg::SetDate(value) => {
                self.wizard.set_preferred_date(parse_date_input(&value));
                true
            }
            Msg::SetTime(value) => {
                self.wizard.set_preferred_time(value.parse().ok());
                true
            }
            Msg::ToggleService(service) => {
                self.wizard.toggle_service(service);
                true
            }
            Msg::SetMessage(message) => {
                self.wizard.set_message(message);
                true
            }
            Msg::Next => {
                let moved = self.wizard.next();
                if moved {
                    debug!("Consultation wizard at step {}", self.wizard.step().number());
                }
                moved
            }
            Msg::Previous => {
                let moved = self.wizard.previous();
                if moved {
                    debug!("Consultation wizard back to step {}", self.wizard.step().number());
                }
                moved
            }
            Msg::Submit => {
                if !self.wizard.begin_submit() {
                    return false;
                }
                info!("Submitting consultation request");
                let link = ctx.link().clone();
                self.pending = Some(SubmissionTimer::start(
                    self.wizard.form(),
                    config::SUBMIT_DELAY_MS,
                    move |result| link.send_message(Msg::Completed(result)),
                ));
                true
            }
            Msg::Completed(result) => {
                // The fired timer may still be on the stack here, so it is
                // only released on the next submit or on destroy.
                match &self.toasts {
                    Some(toasts) => complete_and_announce(&mut self.wizard, &result, toasts),
                    None => complete_and_announce(&mut self.wizard, &result, &LogNotifier),
                }
            }
            Msg::Reset => {
                let reset = self.wizard.reset();
                if reset {
                    debug!("Consultation wizard reset");
                }
                reset
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.wizard.submission() == SubmissionState::Submitted {
            return self.view_thank_you(ctx);
        }

        let step = self.wizard.step();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let fields = match step {
            WizardStep::PersonalInfo => self.view_personal_info(ctx),
            WizardStep::Schedule => self.view_schedule(ctx),
            WizardStep::ServicesAndDetails => self.view_services(ctx),
        };

        html! {
            <>
                {self.view_progress(ctx)}
                <div
                    class={classes!(SCOPE, "reveal", ctx.props().card_class, "wizard-card")}
                    data-element-id="form-card"
                    style="transition-delay: 0.4s;"
                >
                    <h3 class="wizard-card-title gradient-text">{step.title()}</h3>
                    <form {onsubmit}>
                        <fieldset disabled={!self.wizard.is_editable()}>
                            {fields}
                        </fieldset>
                        {self.view_actions(ctx)}
                    </form>
                </div>
            </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(pending) = self.pending.take() {
            if self.wizard.submission() == SubmissionState::Submitting {
                pending.cancel();
            }
        }
    }
}

#[function_component(Consultation)]
pub fn consultation() -> Html {
    let reveal = use_reveal(SCOPE, RevealOptions::ELEMENT, ());

    html! {
        <section id="consultation" class="consultation">
            <style>
                {r#"
                    .consultation {
                        position: relative;
                        padding: 5rem 0;
                        overflow: hidden;
                        background: linear-gradient(135deg, rgba(239,246,255,0.5), rgba(250,245,255,0.3), rgba(236,254,255,0.5));
                    }
                    .consultation-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .wizard-progress {
                        display: flex;
                        justify-content: center;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .progress-step {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .progress-dot {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        background: #f1f5f9;
                        color: #64748b;
                        transition: all 0.5s ease;
                    }
                    .progress-dot.reached {
                        background: linear-gradient(90deg, #3b82f6, #a855f7);
                        color: #fff;
                        transform: scale(1.1);
                    }
                    .progress-label {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #64748b;
                    }
                    .progress-label.reached {
                        color: #1d4ed8;
                    }
                    .wizard-card {
                        padding: 2rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.8);
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15);
                        backdrop-filter: blur(8px);
                    }
                    .wizard-card-title {
                        text-align: center;
                        font-size: 1.5rem;
                        margin: 0 0 1.5rem;
                    }
                    .wizard-card fieldset {
                        border: none;
                        padding: 0;
                        margin: 0;
                    }
                    .form-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .field label, .field-heading {
                        display: block;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .field input, .field select, .field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 2px solid #e2e8f0;
                        border-radius: 8px;
                        background: #fff;
                        font: inherit;
                        resize: none;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .field input:focus, .field select:focus, .field textarea:focus {
                        outline: none;
                        border-color: #3b82f6;
                        box-shadow: 0 8px 20px rgba(59, 130, 246, 0.2);
                    }
                    .service-options {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-option {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        border: 2px solid #e2e8f0;
                        border-radius: 8px;
                        cursor: pointer;
                        font-weight: 500;
                        transition: all 0.3s ease;
                    }
                    .service-option:hover {
                        border-color: #93c5fd;
                    }
                    .service-option.checked {
                        border-color: #3b82f6;
                        background: rgba(239, 246, 255, 0.5);
                    }
                    .form-actions {
                        display: flex;
                        gap: 1rem;
                        padding-top: 1.5rem;
                    }
                    .form-hint {
                        margin: 0.75rem 0 0;
                        font-size: 0.875rem;
                        color: #64748b;
                        text-align: center;
                    }
                    .spinner {
                        display: inline-block;
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .thank-you {
                        max-width: 42rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .thank-you-badge {
                        width: 6rem;
                        height: 6rem;
                        margin: 0 auto 2rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 3rem;
                        color: #fff;
                        background: linear-gradient(90deg, #4ade80, #3b82f6);
                    }
                    .thank-you-title {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                        color: #16a34a;
                    }
                    .thank-you-text {
                        font-size: 1.25rem;
                        color: #64748b;
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
            <div class="container">
                <div
                    class={classes!(SCOPE, "reveal", reveal.class("header"), "section-header")}
                    data-element-id="header"
                >
                    <h2 class="section-title gradient-text">{"Book a Free Consultation"}</h2>
                    <p class="section-lead">
                        {"Let's discuss your project requirements and how we can help transform your digital presence"}
                    </p>
                </div>
                <div class="consultation-inner">
                    <BookingWizard
                        progress_class={reveal.class("progress")}
                        card_class={reveal.class("form-card")}
                    />
                </div>
            </div>
        </section>
    }
}
