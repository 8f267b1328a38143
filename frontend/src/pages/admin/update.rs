//! Update logic for the admin panel, Elm style: mutate the state for a
//! message, return whether the view needs a re-render.

use common::model::post::PostStatus;
use yew::prelude::*;

use super::messages::{Msg, PostField, SettingsField, TestimonialField};
use super::state::AdminPage;
use crate::toast::show_toast;

pub fn update(component: &mut AdminPage, _ctx: &Context<AdminPage>, msg: Msg) -> bool {
    match msg {
        Msg::SiteUpdated(site) => {
            component.site = site;
            true
        }
        Msg::PasswordInput(value) => {
            component.password = value;
            false
        }
        Msg::SubmitLogin => {
            match component.gate.authenticate(&component.password) {
                Ok(()) => {
                    component.authenticated = true;
                    component.login_error = None;
                }
                Err(err) => {
                    component.login_error = Some(err.to_string());
                }
            }
            component.password.clear();
            true
        }
        Msg::SetView(view) => {
            if component.view != view {
                component.view = view;
                // leaving a section drops its unsaved drafts
                component.editing_testimonial = None;
                component.editing_post = None;
                component.settings_draft = component.site.settings();
            }
            true
        }

        Msg::NewTestimonial => {
            component.editing_testimonial = Some(AdminPage::empty_testimonial());
            true
        }
        Msg::EditTestimonial(entry) => {
            component.editing_testimonial = Some(entry);
            true
        }
        Msg::TestimonialInput(field, value) => {
            if let Some(draft) = &mut component.editing_testimonial {
                match field {
                    TestimonialField::Name => draft.name = value,
                    TestimonialField::Title => draft.title = value,
                    TestimonialField::Company => draft.company = value,
                    TestimonialField::Quote => draft.quote = value,
                    TestimonialField::ResultBadge => draft.result_badge = value,
                    TestimonialField::PhotoUrl => draft.photo_url = value,
                }
            }
            false
        }
        Msg::ToggleTestimonialActive => {
            if let Some(draft) = &mut component.editing_testimonial {
                draft.active = !draft.active;
                return true;
            }
            false
        }
        Msg::SaveTestimonial => {
            if let Some(draft) = component.editing_testimonial.take() {
                component.site.upsert_testimonial(draft);
                show_toast("Testimonial saved.");
            }
            true
        }
        Msg::CancelTestimonial => {
            component.editing_testimonial = None;
            true
        }
        Msg::DeleteTestimonial(id) => {
            if confirm("Are you sure you want to delete this testimonial?") {
                component.site.delete_testimonial(&id);
                show_toast("Testimonial deleted.");
            }
            true
        }

        Msg::NewPost => {
            component.editing_post = Some(AdminPage::empty_post());
            true
        }
        Msg::EditPost(post) => {
            component.editing_post = Some(post);
            true
        }
        Msg::PostInput(field, value) => {
            if let Some(draft) = &mut component.editing_post {
                match field {
                    PostField::Title => draft.title = value,
                    PostField::Author => draft.author = value,
                    PostField::Category => draft.category = value,
                    PostField::FeaturedImageUrl => draft.featured_image_url = value,
                    PostField::Excerpt => draft.excerpt = value,
                    PostField::Content => draft.content = value,
                    PostField::Status => {
                        draft.status = if value == "Published" {
                            PostStatus::Published
                        } else {
                            PostStatus::Draft
                        };
                    }
                    PostField::ReadTime => {
                        draft.read_time = value.parse().unwrap_or(draft.read_time);
                    }
                }
            }
            false
        }
        Msg::SavePost => {
            if let Some(draft) = component.editing_post.take() {
                component.site.upsert_post(draft);
                show_toast("Post saved.");
            }
            true
        }
        Msg::CancelPost => {
            component.editing_post = None;
            true
        }
        Msg::DeletePost(id) => {
            if confirm("Are you sure you want to delete this post?") {
                component.site.delete_post(&id);
                show_toast("Post deleted.");
            }
            true
        }

        Msg::SettingsInput(field, value) => {
            let draft = &mut component.settings_draft;
            match field {
                SettingsField::SiteTitle => draft.site_title = value,
                SettingsField::Tagline => draft.tagline = value,
                SettingsField::ContactPhone => draft.contact_phone = value,
                SettingsField::ContactEmail => draft.contact_email = value,
                SettingsField::OfficeAddress => draft.office_address = value,
                SettingsField::BusinessHours => draft.business_hours = value,
                SettingsField::Linkedin => draft.social.linkedin = value,
                SettingsField::Twitter => draft.social.twitter = value,
                SettingsField::Facebook => draft.social.facebook = value,
                SettingsField::MetaDescription => draft.seo.meta_description = value,
                SettingsField::Keywords => draft.seo.keywords = value,
                SettingsField::WebhookUrl => draft.form_settings.webhook_url = value,
                SettingsField::HeroHeadlineA => draft.ab_test.hero_headline_a = value,
                SettingsField::HeroHeadlineB => draft.ab_test.hero_headline_b = value,
                SettingsField::CtaTextA => draft.ab_test.cta_text_a = value,
                SettingsField::CtaTextB => draft.ab_test.cta_text_b = value,
            }
            false
        }
        Msg::SaveSettings => {
            component.site.replace_settings(component.settings_draft.clone());
            show_toast("Settings saved.");
            true
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
