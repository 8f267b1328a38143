//! Distribution of the content repository to every view.
//!
//! The app root constructs one repository and hands out [`SiteContext`]
//! handles through a Yew `ContextProvider`. Reads delegate straight to
//! the repository's in-memory mirrors; writes commit to the repository
//! and then notify the root, which bumps the revision so subscribed
//! consumers re-render against the new state.

use std::rc::Rc;

use yew::prelude::*;

use common::content::repository::ContentRepository;
use common::model::post::BlogPost;
use common::model::settings::SiteSettings;
use common::model::testimonial::Testimonial;

use crate::storage::LocalStorageBackend;

pub type SiteRepository = ContentRepository<LocalStorageBackend>;

#[derive(Clone)]
pub struct SiteContext {
    repo: Rc<SiteRepository>,
    revision: u64,
    changed: Callback<()>,
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.repo, &other.repo) && self.revision == other.revision
    }
}

impl SiteContext {
    pub fn new(repo: Rc<SiteRepository>, revision: u64, changed: Callback<()>) -> Self {
        SiteContext {
            repo,
            revision,
            changed,
        }
    }

    pub fn settings(&self) -> SiteSettings {
        self.repo.settings()
    }

    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.repo.testimonials()
    }

    pub fn active_testimonials(&self) -> Vec<Testimonial> {
        self.repo.active_testimonials()
    }

    pub fn posts(&self) -> Vec<BlogPost> {
        self.repo.posts()
    }

    pub fn published_posts(&self) -> Vec<BlogPost> {
        self.repo.published_posts()
    }

    pub fn find_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.repo.find_post_by_slug(slug)
    }

    pub fn replace_settings(&self, settings: SiteSettings) {
        self.repo.replace_settings(settings);
        self.changed.emit(());
    }

    pub fn upsert_testimonial(&self, entry: Testimonial) {
        self.repo.upsert_testimonial(entry);
        self.changed.emit(());
    }

    pub fn delete_testimonial(&self, id: &str) {
        self.repo.delete_testimonial(id);
        self.changed.emit(());
    }

    pub fn upsert_post(&self, entry: BlogPost) {
        self.repo.upsert_post(entry);
        self.changed.emit(());
    }

    pub fn delete_post(&self, id: &str) {
        self.repo.delete_post(id);
        self.changed.emit(());
    }
}

/// Subscribes `ctx`'s component to the site context. Panics when called
/// outside the provider's lifetime; that is a wiring bug, not a runtime
/// condition to recover from.
pub fn expect_site<C: Component>(
    ctx: &Context<C>,
    on_change: Callback<SiteContext>,
) -> (SiteContext, ContextHandle<SiteContext>) {
    ctx.link()
        .context::<SiteContext>(on_change)
        .expect("SiteContext accessed outside its provider")
}
