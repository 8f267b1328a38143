//! View rendering for the admin panel: a login card until the session
//! gate opens, then a sidebar dashboard with one manager per section.

use common::model::post::{BlogPost, PostStatus};
use common::model::testimonial::Testimonial;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{AdminView, Msg, PostField, SettingsField, TestimonialField};
use super::state::AdminPage;

pub fn view(component: &AdminPage, ctx: &Context<AdminPage>) -> Html {
    if component.authenticated {
        build_dashboard(component, ctx.link())
    } else {
        build_login(component, ctx.link())
    }
}

fn build_login(component: &AdminPage, link: &Scope<AdminPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitLogin
    });

    html! {
        <div class="admin-login">
            <form class="login-card" {onsubmit}>
                <h1>{ "Admin Login" }</h1>
                <label>
                    { "Username" }
                    <input type="text" value="admin" readonly={true} />
                </label>
                <label>
                    { "Password" }
                    <input
                        type="password"
                        value={component.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::PasswordInput(input.value())
                        })}
                    />
                </label>
                {
                    if let Some(error) = &component.login_error {
                        html! { <p class="login-error">{ error }</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit">{ "Login" }</button>
            </form>
        </div>
    }
}

fn build_dashboard(component: &AdminPage, link: &Scope<AdminPage>) -> Html {
    let main = match component.view {
        AdminView::Dashboard => build_overview(component),
        AdminView::Testimonials => build_testimonials(component, link),
        AdminView::Blog => build_posts(component, link),
        AdminView::Settings => build_settings(component, link),
    };

    html! {
        <div class="admin">
            <nav class="admin-sidebar">
                <h1>{ "Site Admin" }</h1>
                <ul>
                    { sidebar_item(component, link, AdminView::Dashboard, "Dashboard") }
                    { sidebar_item(component, link, AdminView::Testimonials, "Testimonials") }
                    { sidebar_item(component, link, AdminView::Blog, "Blog") }
                    { sidebar_item(component, link, AdminView::Settings, "Settings") }
                </ul>
                <a class="back-link" href="#/">{ "\u{2190} View site" }</a>
            </nav>
            <main class="admin-main">{ main }</main>
        </div>
    }
}

fn sidebar_item(
    component: &AdminPage,
    link: &Scope<AdminPage>,
    target: AdminView,
    label: &'static str,
) -> Html {
    let active = component.view == target;
    html! {
        <li>
            <button
                class={classes!(active.then_some("active"))}
                onclick={link.callback(move |_| Msg::SetView(target))}
            >
                { label }
            </button>
        </li>
    }
}

fn build_overview(component: &AdminPage) -> Html {
    let posts = component.site.posts();
    let published = posts.iter().filter(|p| p.status == PostStatus::Published).count();
    let drafts = posts.len() - published;
    let testimonials = component.site.testimonials();
    let active = testimonials.iter().filter(|t| t.active).count();

    html! {
        <div class="admin-overview">
            <h2>{ "Dashboard" }</h2>
            <div class="stat-row">
                { stat_card("Published posts", published) }
                { stat_card("Drafts", drafts) }
                { stat_card("Active testimonials", active) }
            </div>
            <p>{ "Select a section on the left to manage site content. Changes go \
                  live on the public pages as soon as you save them." }</p>
        </div>
    }
}

fn stat_card(label: &'static str, value: usize) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-value">{ value }</span>
            <span class="stat-label">{ label }</span>
        </div>
    }
}

fn build_testimonials(component: &AdminPage, link: &Scope<AdminPage>) -> Html {
    html! {
        <div class="admin-testimonials">
            <h2>{ "Testimonials" }</h2>
            <button class="primary" onclick={link.callback(|_| Msg::NewTestimonial)}>
                { "Add New" }
            </button>
            {
                if let Some(draft) = &component.editing_testimonial {
                    build_testimonial_form(draft, link)
                } else {
                    html! {}
                }
            }
            <ul class="admin-list">
                { for component.site.testimonials().into_iter().map(|t| testimonial_row(t, link)) }
            </ul>
        </div>
    }
}

fn testimonial_row(entry: Testimonial, link: &Scope<AdminPage>) -> Html {
    let id = entry.id.clone();
    let edit = entry.clone();
    let excerpt: String = entry.quote.chars().take(60).collect();
    html! {
        <li class="admin-row" key={entry.id.clone()}>
            <div>
                <p class="row-title">
                    { format!("{}, {}", entry.name, entry.company) }
                    { if !entry.active { html! { <span class="badge">{ "hidden" }</span> } } else { html! {} } }
                </p>
                <p class="row-detail">{ format!("\u{201c}{excerpt}\u{2026}\u{201d}") }</p>
            </div>
            <div class="row-actions">
                <button onclick={link.callback(move |_| Msg::EditTestimonial(edit.clone()))}>
                    { "Edit" }
                </button>
                <button class="danger" onclick={link.callback(move |_| Msg::DeleteTestimonial(id.clone()))}>
                    { "Delete" }
                </button>
            </div>
        </li>
    }
}

fn build_testimonial_form(draft: &Testimonial, link: &Scope<AdminPage>) -> Html {
    html! {
        <div class="admin-form">
            <h3>{ if draft.id.is_empty() { "Add Testimonial" } else { "Edit Testimonial" } }</h3>
            <div class="form-grid">
                { testimonial_input(link, TestimonialField::Name, "Name", &draft.name) }
                { testimonial_input(link, TestimonialField::Title, "Title", &draft.title) }
                { testimonial_input(link, TestimonialField::Company, "Company", &draft.company) }
                { testimonial_input(link, TestimonialField::ResultBadge, "Result Badge", &draft.result_badge) }
                { testimonial_input(link, TestimonialField::PhotoUrl, "Photo URL", &draft.photo_url) }
            </div>
            <textarea
                placeholder="Quote"
                rows="3"
                value={draft.quote.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::TestimonialInput(TestimonialField::Quote, area.value())
                })}
            />
            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={draft.active}
                    onchange={link.callback(|_| Msg::ToggleTestimonialActive)}
                />
                <span>{ "Show on the public site" }</span>
            </label>
            <div class="form-actions">
                <button onclick={link.callback(|_| Msg::CancelTestimonial)}>{ "Cancel" }</button>
                <button class="primary" onclick={link.callback(|_| Msg::SaveTestimonial)}>{ "Save" }</button>
            </div>
        </div>
    }
}

fn testimonial_input(
    link: &Scope<AdminPage>,
    field: TestimonialField,
    placeholder: &'static str,
    value: &str,
) -> Html {
    html! {
        <input
            placeholder={placeholder}
            value={value.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                Msg::TestimonialInput(field, input.value())
            })}
        />
    }
}

fn build_posts(component: &AdminPage, link: &Scope<AdminPage>) -> Html {
    html! {
        <div class="admin-posts">
            <h2>{ "Blog Posts" }</h2>
            <button class="primary" onclick={link.callback(|_| Msg::NewPost)}>
                { "Create New Post" }
            </button>
            {
                if let Some(draft) = &component.editing_post {
                    build_post_form(draft, link)
                } else {
                    html! {}
                }
            }
            <ul class="admin-list">
                { for component.site.posts().into_iter().map(|p| post_row(p, link)) }
            </ul>
        </div>
    }
}

fn post_row(post: BlogPost, link: &Scope<AdminPage>) -> Html {
    let id = post.id.clone();
    let edit = post.clone();
    html! {
        <li class="admin-row" key={post.id.clone()}>
            <div>
                <p class="row-title">{ &post.title }</p>
                <p class="row-detail">
                    { format!("{} \u{b7} {} \u{b7} /blog/{}", post.status.as_str(), post.author, post.slug) }
                </p>
            </div>
            <div class="row-actions">
                <button onclick={link.callback(move |_| Msg::EditPost(edit.clone()))}>
                    { "Edit" }
                </button>
                <button class="danger" onclick={link.callback(move |_| Msg::DeletePost(id.clone()))}>
                    { "Delete" }
                </button>
            </div>
        </li>
    }
}

fn build_post_form(draft: &BlogPost, link: &Scope<AdminPage>) -> Html {
    html! {
        <div class="admin-form">
            <h3>{ if draft.id.is_empty() { "Create Post" } else { "Edit Post" } }</h3>
            {
                // the address is fixed once the post exists
                if !draft.id.is_empty() {
                    html! { <p class="row-detail">{ format!("Address: /blog/{}", draft.slug) }</p> }
                } else {
                    html! {}
                }
            }
            <div class="form-stack">
                { post_input(link, PostField::Title, "Title", &draft.title) }
                { post_input(link, PostField::Author, "Author", &draft.author) }
                { post_input(link, PostField::Category, "Category", &draft.category) }
                { post_input(link, PostField::FeaturedImageUrl, "Image URL", &draft.featured_image_url) }
                { post_textarea(link, PostField::Excerpt, "Excerpt", &draft.excerpt, 3) }
                { post_textarea(link, PostField::Content, "Content (HTML)", &draft.content, 10) }
                <div class="form-row">
                    <select onchange={link.callback(|e: Event| {
                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                        Msg::PostInput(PostField::Status, select.value())
                    })}>
                        <option value="Published" selected={draft.status == PostStatus::Published}>
                            { "Published" }
                        </option>
                        <option value="Draft" selected={draft.status == PostStatus::Draft}>
                            { "Draft" }
                        </option>
                    </select>
                    <input
                        type="number"
                        min="1"
                        placeholder="Read time (minutes)"
                        value={draft.read_time.to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::PostInput(PostField::ReadTime, input.value())
                        })}
                    />
                </div>
            </div>
            <div class="form-actions">
                <button onclick={link.callback(|_| Msg::CancelPost)}>{ "Cancel" }</button>
                <button class="primary" onclick={link.callback(|_| Msg::SavePost)}>{ "Save" }</button>
            </div>
        </div>
    }
}

fn post_input(
    link: &Scope<AdminPage>,
    field: PostField,
    placeholder: &'static str,
    value: &str,
) -> Html {
    html! {
        <input
            placeholder={placeholder}
            value={value.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                Msg::PostInput(field, input.value())
            })}
        />
    }
}

fn post_textarea(
    link: &Scope<AdminPage>,
    field: PostField,
    placeholder: &'static str,
    value: &str,
    rows: u32,
) -> Html {
    html! {
        <textarea
            placeholder={placeholder}
            rows={rows.to_string()}
            value={value.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                Msg::PostInput(field, area.value())
            })}
        />
    }
}

fn build_settings(component: &AdminPage, link: &Scope<AdminPage>) -> Html {
    let draft = &component.settings_draft;
    html! {
        <div class="admin-settings">
            <h2>{ "Site Settings" }</h2>
            <div class="form-stack">
                { settings_input(link, SettingsField::SiteTitle, "Site Title", &draft.site_title) }
                { settings_input(link, SettingsField::Tagline, "Tagline", &draft.tagline) }
                { settings_input(link, SettingsField::ContactPhone, "Contact Phone", &draft.contact_phone) }
                { settings_input(link, SettingsField::ContactEmail, "Contact Email", &draft.contact_email) }
                { settings_input(link, SettingsField::OfficeAddress, "Office Address", &draft.office_address) }
                { settings_input(link, SettingsField::BusinessHours, "Business Hours", &draft.business_hours) }

                <h3>{ "Social Links" }</h3>
                { settings_input(link, SettingsField::Linkedin, "LinkedIn URL", &draft.social.linkedin) }
                { settings_input(link, SettingsField::Twitter, "Twitter URL", &draft.social.twitter) }
                { settings_input(link, SettingsField::Facebook, "Facebook URL", &draft.social.facebook) }

                <h3>{ "SEO" }</h3>
                <textarea
                    placeholder="Meta Description"
                    rows="3"
                    value={draft.seo.meta_description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::SettingsInput(SettingsField::MetaDescription, area.value())
                    })}
                />
                { settings_input(link, SettingsField::Keywords, "Keywords", &draft.seo.keywords) }

                <h3>{ "Contact Form" }</h3>
                { settings_input(link, SettingsField::WebhookUrl, "Webhook URL", &draft.form_settings.webhook_url) }

                <h3>{ "A/B Testing" }</h3>
                { settings_input(link, SettingsField::HeroHeadlineA, "Headline A", &draft.ab_test.hero_headline_a) }
                { settings_input(link, SettingsField::HeroHeadlineB, "Headline B", &draft.ab_test.hero_headline_b) }
                { settings_input(link, SettingsField::CtaTextA, "CTA Text A", &draft.ab_test.cta_text_a) }
                { settings_input(link, SettingsField::CtaTextB, "CTA Text B", &draft.ab_test.cta_text_b) }
            </div>
            <button class="primary" onclick={link.callback(|_| Msg::SaveSettings)}>
                { "Save Settings" }
            </button>
        </div>
    }
}

fn settings_input(
    link: &Scope<AdminPage>,
    field: SettingsField,
    placeholder: &'static str,
    value: &str,
) -> Html {
    html! {
        <input
            placeholder={placeholder}
            value={value.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                Msg::SettingsInput(field, input.value())
            })}
        />
    }
}
