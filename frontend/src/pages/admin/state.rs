//! State container for the admin panel.
//!
//! The panel keeps short-lived local drafts (the record being edited in
//! a form) and commits them to the repository on save; nothing here is a
//! second source of truth beyond those drafts.

use chrono::Utc;
use common::content::session::SessionGate;
use common::model::post::{BlogPost, PostStatus};
use common::model::settings::SiteSettings;
use common::model::testimonial::Testimonial;
use yew::prelude::*;

use super::messages::AdminView;
use crate::context::SiteContext;
use crate::storage::SessionStorageBackend;

pub struct AdminPage {
    pub site: SiteContext,
    pub gate: SessionGate<SessionStorageBackend>,
    pub authenticated: bool,
    pub view: AdminView,

    /// Login form state.
    pub password: String,
    pub login_error: Option<String>,

    /// Form drafts; `Some` while the matching editor is open.
    pub editing_testimonial: Option<Testimonial>,
    pub editing_post: Option<BlogPost>,
    pub settings_draft: SiteSettings,

    pub _site_handle: ContextHandle<SiteContext>,
}

impl AdminPage {
    pub fn new(
        site: SiteContext,
        site_handle: ContextHandle<SiteContext>,
        gate: SessionGate<SessionStorageBackend>,
    ) -> Self {
        let authenticated = gate.is_authenticated();
        let settings_draft = site.settings();
        AdminPage {
            site,
            gate,
            authenticated,
            view: AdminView::Dashboard,
            password: String::new(),
            login_error: None,
            editing_testimonial: None,
            editing_post: None,
            settings_draft,
            _site_handle: site_handle,
        }
    }

    /// Fresh testimonial draft: visible by default, placeholder photo,
    /// id left empty so the repository assigns one on save.
    pub fn empty_testimonial() -> Testimonial {
        Testimonial {
            id: String::new(),
            name: String::new(),
            title: String::new(),
            company: String::new(),
            quote: String::new(),
            result_badge: String::new(),
            photo_url: "https://picsum.photos/200".to_string(),
            active: true,
        }
    }

    /// Fresh post draft: starts as a draft dated now; slug is assigned by
    /// the repository when the post is first saved.
    pub fn empty_post() -> BlogPost {
        BlogPost {
            id: String::new(),
            title: String::new(),
            slug: String::new(),
            category: String::new(),
            featured_image_url: "https://picsum.photos/1200/630".to_string(),
            excerpt: String::new(),
            content: String::new(),
            author: "Admin".to_string(),
            published_date: Utc::now(),
            status: PostStatus::Draft,
            read_time: 5,
        }
    }
}
