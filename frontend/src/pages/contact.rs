//! Contact page: the lead form plus the firm's contact details.
//!
//! Submission is optimistic. The draft is kept locally until delivery
//! succeeds, so a failed webhook call leaves everything the visitor
//! typed in place for a manual retry.

use common::model::lead::{DeliveryResult, LeadSubmission};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::{SiteContext, expect_site};
use crate::leads::submit_lead;

const INDUSTRIES: &[&str] = &[
    "Retail & E-commerce",
    "Professional Services",
    "Healthcare",
    "Manufacturing",
    "Other",
];

const PROJECT_TYPES: &[&str] = &["AI Strategy", "Implementation", "Training", "Exploring options"];

#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Industry,
    Message,
}

pub enum Msg {
    SiteUpdated(SiteContext),
    Input(Field, String),
    ToggleProjectType(String),
    Submit,
    Completed(DeliveryResult),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Sending,
    Success,
    Failed,
}

#[derive(Default)]
struct Draft {
    name: String,
    email: String,
    phone: String,
    company: String,
    industry: String,
    project_types: Vec<String>,
    message: String,
}

impl Draft {
    /// Flattens the draft into the webhook payload; the multi-select
    /// becomes one comma-separated field.
    fn to_submission(&self) -> LeadSubmission {
        LeadSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            industry: self.industry.clone(),
            project_type: self.project_types.join(", "),
            message: self.message.clone(),
        }
    }
}

pub struct ContactPage {
    site: SiteContext,
    draft: Draft,
    status: Status,
    _handle: ContextHandle<SiteContext>,
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (site, handle) = expect_site(ctx, ctx.link().callback(Msg::SiteUpdated));
        ContactPage {
            site,
            draft: Draft::default(),
            status: Status::Idle,
            _handle: handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SiteUpdated(site) => {
                self.site = site;
                true
            }
            Msg::Input(field, value) => {
                match field {
                    Field::Name => self.draft.name = value,
                    Field::Email => self.draft.email = value,
                    Field::Phone => self.draft.phone = value,
                    Field::Company => self.draft.company = value,
                    Field::Industry => self.draft.industry = value,
                    Field::Message => self.draft.message = value,
                }
                false
            }
            Msg::ToggleProjectType(option) => {
                if let Some(i) = self.draft.project_types.iter().position(|p| *p == option) {
                    self.draft.project_types.remove(i);
                } else {
                    self.draft.project_types.push(option);
                }
                false
            }
            Msg::Submit => {
                let webhook_url = self.site.settings().form_settings.webhook_url;
                if webhook_url.is_empty() {
                    gloo_console::error!("contact form webhook URL is not configured");
                    self.status = Status::Failed;
                    return true;
                }
                self.status = Status::Sending;
                let lead = self.draft.to_submission();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = submit_lead(&webhook_url, &lead).await;
                    link.send_message(Msg::Completed(result));
                });
                true
            }
            Msg::Completed(DeliveryResult::Delivered) => {
                self.draft = Draft::default();
                self.status = Status::Success;
                true
            }
            Msg::Completed(DeliveryResult::Failed(reason)) => {
                gloo_console::error!("lead delivery failed:", reason);
                self.status = Status::Failed;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let settings = self.site.settings();
        html! {
            <div class="contact">
                <section class="page-hero">
                    <h1>{ "Let's Talk About Your Business" }</h1>
                    <p>{ "Book a free consultation or just ask a question. We answer \
                          within one business day." }</p>
                </section>

                <div class="contact-columns">
                    <div class="contact-form-panel">
                        {
                            if self.status == Status::Success {
                                success_view()
                            } else {
                                self.form_view(ctx)
                            }
                        }
                    </div>

                    <aside class="contact-info">
                        <h3>{ "Contact Information" }</h3>
                        <p><strong>{ "Address" }</strong><br />{ &settings.office_address }</p>
                        <p>
                            <strong>{ "Phone" }</strong><br />
                            <a href={format!("tel:{}", settings.contact_phone)}>{ &settings.contact_phone }</a>
                        </p>
                        <p>
                            <strong>{ "Email" }</strong><br />
                            <a href={format!("mailto:{}", settings.contact_email)}>{ &settings.contact_email }</a>
                        </p>
                        <p><strong>{ "Hours" }</strong><br />{ &settings.business_hours }</p>
                    </aside>
                </div>
            </div>
        }
    }
}

impl ContactPage {
    fn form_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let sending = self.status == Status::Sending;
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    { self.text_input(link, Field::Name, "text", "Name *", &self.draft.name, true) }
                    { self.text_input(link, Field::Email, "email", "Email *", &self.draft.email, true) }
                    { self.text_input(link, Field::Phone, "tel", "Phone", &self.draft.phone, false) }
                    { self.text_input(link, Field::Company, "text", "Company Name *", &self.draft.company, true) }
                </div>

                <select
                    required={true}
                    onchange={link.callback(|e: Event| {
                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                        Msg::Input(Field::Industry, select.value())
                    })}
                >
                    <option value="" selected={self.draft.industry.is_empty()}>{ "Select Industry *" }</option>
                    {
                        for INDUSTRIES.iter().map(|industry| html! {
                            <option value={*industry} selected={self.draft.industry == *industry}>
                                { *industry }
                            </option>
                        })
                    }
                </select>

                <fieldset class="project-types">
                    <legend>{ "Project Type" }</legend>
                    { for PROJECT_TYPES.iter().map(|option| self.project_type_checkbox(link, option)) }
                </fieldset>

                <textarea
                    placeholder="Tell us about your project *"
                    required={true}
                    rows="5"
                    value={self.draft.message.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::Input(Field::Message, area.value())
                    })}
                />

                <button type="submit" disabled={sending}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
                {
                    if self.status == Status::Failed {
                        html! {
                            <p class="form-error">
                                { "Something went wrong sending your message. Please try \
                                   again, or email us directly." }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
        }
    }

    fn text_input(
        &self,
        link: &Scope<Self>,
        field: Field,
        kind: &'static str,
        placeholder: &'static str,
        value: &str,
        required: bool,
    ) -> Html {
        html! {
            <input
                type={kind}
                placeholder={placeholder}
                required={required}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    Msg::Input(field, input.value())
                })}
            />
        }
    }

    fn project_type_checkbox(&self, link: &Scope<Self>, option: &'static str) -> Html {
        let checked = self.draft.project_types.iter().any(|p| p == option);
        html! {
            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={checked}
                    onchange={link.callback(move |_| Msg::ToggleProjectType(option.to_string()))}
                />
                <span>{ option }</span>
            </label>
        }
    }
}

fn success_view() -> Html {
    html! {
        <div class="form-success">
            <h2>{ "Thank You!" }</h2>
            <p>{ "Your message has been sent. We'll be in touch within one business day." }</p>
        </div>
    }
}
