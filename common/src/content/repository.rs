//! Owner of the three site collections and their invariants.
//!
//! The repository keeps one in-memory mirror per collection and writes
//! through to the storage backend after every mutation. Mirrors are
//! updated synchronously before the durable write is attempted, so a
//! reader always observes the latest committed state even when
//! persistence degrades. Construct one repository per process (or per
//! test) and hand it to consumers by reference.

use std::cell::RefCell;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::store::{StorageBackend, Store};
use crate::model::post::{BlogPost, PostStatus, slugify};
use crate::model::settings::SiteSettings;
use crate::model::testimonial::Testimonial;
use crate::seed;

pub const SETTINGS_KEY: &str = "siteSettings";
pub const TESTIMONIALS_KEY: &str = "testimonials";
pub const POSTS_KEY: &str = "blogPosts";

pub struct ContentRepository<B: StorageBackend> {
    store: Store<B>,
    settings: RefCell<SiteSettings>,
    testimonials: RefCell<Vec<Testimonial>>,
    posts: RefCell<Vec<BlogPost>>,
}

impl<B: StorageBackend> ContentRepository<B> {
    /// Opens the repository over `backend`, seeding any slot that has no
    /// persisted value with the bundled demonstration content. Seeding is
    /// idempotent: a slot that already holds a value, readable or not, is
    /// never overwritten.
    pub fn open(backend: B) -> Self {
        let store = Store::new(backend);
        let settings = seed_slot(&store, SETTINGS_KEY, seed::default_settings);
        let testimonials = seed_slot(&store, TESTIMONIALS_KEY, seed::default_testimonials);
        let posts = seed_slot(&store, POSTS_KEY, seed::default_posts);
        ContentRepository {
            store,
            settings: RefCell::new(settings),
            testimonials: RefCell::new(testimonials),
            posts: RefCell::new(posts),
        }
    }

    pub fn settings(&self) -> SiteSettings {
        self.settings.borrow().clone()
    }

    /// Full testimonial list in stored (insertion) order, as the admin
    /// panel sees it.
    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.borrow().clone()
    }

    /// Publicly visible testimonials: `active` only, order preserved.
    pub fn active_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials
            .borrow()
            .iter()
            .filter(|t| t.active)
            .cloned()
            .collect()
    }

    /// Full post list in stored order, drafts included. Admin view only.
    pub fn posts(&self) -> Vec<BlogPost> {
        self.posts.borrow().clone()
    }

    /// Publicly visible posts: `Published` only, newest first.
    pub fn published_posts(&self) -> Vec<BlogPost> {
        let mut published: Vec<BlogPost> = self
            .posts
            .borrow()
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .cloned()
            .collect();
        published.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        published
    }

    pub fn find_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.posts.borrow().iter().find(|p| p.slug == slug).cloned()
    }

    /// Replaces the settings record wholesale. No merge.
    pub fn replace_settings(&self, settings: SiteSettings) {
        *self.settings.borrow_mut() = settings;
        self.persist(SETTINGS_KEY, &*self.settings.borrow());
    }

    /// Inserts or replaces a testimonial. An entry whose id matches an
    /// existing one replaces it at its position; otherwise the entry gets
    /// a fresh unique id and is appended.
    pub fn upsert_testimonial(&self, mut entry: Testimonial) {
        {
            let mut list = self.testimonials.borrow_mut();
            let position = if entry.id.is_empty() {
                None
            } else {
                list.iter().position(|t| t.id == entry.id)
            };
            match position {
                Some(i) => list[i] = entry,
                None => {
                    let existing: Vec<String> = list.iter().map(|t| t.id.clone()).collect();
                    entry.id = allocate_id(Utc::now().timestamp_millis(), &existing);
                    list.push(entry);
                }
            }
        }
        self.persist(TESTIMONIALS_KEY, &*self.testimonials.borrow());
    }

    /// Removes every testimonial matching `id` (at most one in practice).
    /// Immediate and irreversible; asking the operator first is the
    /// caller's job.
    pub fn delete_testimonial(&self, id: &str) {
        self.testimonials.borrow_mut().retain(|t| t.id != id);
        self.persist(TESTIMONIALS_KEY, &*self.testimonials.borrow());
    }

    /// Inserts or replaces a blog post. On creation the slug is derived
    /// from the title; on replacement the previously stored slug is
    /// carried forward regardless of what the caller passed, so published
    /// URLs survive title edits.
    pub fn upsert_post(&self, mut entry: BlogPost) {
        {
            let mut list = self.posts.borrow_mut();
            let position = if entry.id.is_empty() {
                None
            } else {
                list.iter().position(|p| p.id == entry.id)
            };
            match position {
                Some(i) => {
                    entry.slug = list[i].slug.clone();
                    list[i] = entry;
                }
                None => {
                    let existing: Vec<String> = list.iter().map(|p| p.id.clone()).collect();
                    entry.id = allocate_id(Utc::now().timestamp_millis(), &existing);
                    entry.slug = slugify(&entry.title);
                    list.push(entry);
                }
            }
        }
        self.persist(POSTS_KEY, &*self.posts.borrow());
    }

    /// Removes every post matching `id`. Same contract as
    /// [`delete_testimonial`](Self::delete_testimonial).
    pub fn delete_post(&self, id: &str) {
        self.posts.borrow_mut().retain(|p| p.id != id);
        self.persist(POSTS_KEY, &*self.posts.borrow());
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.store.set(key, value) {
            // in-memory state is already updated; degrade to a warning
            log::warn!("content change not persisted: {err}");
        }
    }
}

fn seed_slot<B, T, F>(store: &Store<B>, key: &str, default: F) -> T
where
    B: StorageBackend,
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    if store.contains(key) {
        store.get_or(key, default)
    } else {
        let value = default();
        if let Err(err) = store.set(key, &value) {
            log::warn!("seed data for `{key}` not persisted: {err}");
        }
        value
    }
}

/// Picks a collection-unique id derived from the wall clock, bumping the
/// candidate until it no longer collides with an existing entry.
fn allocate_id(now_millis: i64, existing: &[String]) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|e| *e == id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::content::store::{MemoryBackend, StorageError};
    use crate::model::post::{BlogPost, PostStatus};
    use crate::model::testimonial::Testimonial;

    fn testimonial(id: &str, name: &str) -> Testimonial {
        Testimonial {
            id: id.to_string(),
            name: name.to_string(),
            title: "Owner".to_string(),
            company: format!("{name} Co."),
            quote: "It worked.".to_string(),
            result_badge: String::new(),
            photo_url: String::new(),
            active: true,
        }
    }

    fn post(id: &str, title: &str, date: DateTime<Utc>, status: PostStatus) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            slug: String::new(),
            category: "Strategy".to_string(),
            featured_image_url: String::new(),
            excerpt: String::new(),
            content: "<p>Body</p>".to_string(),
            author: "Admin".to_string(),
            published_date: date,
            status,
            read_time: 5,
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn seeds_empty_store_and_persists() {
        let backend = MemoryBackend::new();
        let repo = ContentRepository::open(backend.clone());

        assert!(!repo.settings().site_title.is_empty());
        assert!(!repo.testimonials().is_empty());
        assert!(!repo.posts().is_empty());
        assert!(backend.load(SETTINGS_KEY).is_some());
        assert!(backend.load(TESTIMONIALS_KEY).is_some());
        assert!(backend.load(POSTS_KEY).is_some());
    }

    #[test]
    fn reopening_does_not_reseed_over_edits() {
        let backend = MemoryBackend::new();
        {
            let repo = ContentRepository::open(backend.clone());
            for t in repo.testimonials() {
                repo.delete_testimonial(&t.id);
            }
            repo.upsert_testimonial(testimonial("", "Only One"));
        }
        let repo = ContentRepository::open(backend);
        let names: Vec<String> = repo.testimonials().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Only One".to_string()]);
    }

    #[test]
    fn upsert_without_id_assigns_unique_id_and_appends() {
        let repo = ContentRepository::open(MemoryBackend::new());
        let before = repo.testimonials();

        repo.upsert_testimonial(testimonial("", "New Client"));

        let after = repo.testimonials();
        assert_eq!(after.len(), before.len() + 1);
        let added = after.last().unwrap();
        assert_eq!(added.name, "New Client");
        assert!(!added.id.is_empty());
        let occurrences = after.iter().filter(|t| t.id == added.id).count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn consecutive_creations_get_distinct_ids() {
        let repo = ContentRepository::open(MemoryBackend::new());
        repo.upsert_testimonial(testimonial("", "First"));
        repo.upsert_testimonial(testimonial("", "Second"));
        repo.upsert_testimonial(testimonial("", "Third"));

        let mut ids: Vec<String> = repo.testimonials().into_iter().map(|t| t.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn upsert_with_known_id_replaces_in_place() {
        let repo = ContentRepository::open(MemoryBackend::new());
        repo.upsert_testimonial(testimonial("", "Alpha"));
        repo.upsert_testimonial(testimonial("", "Beta"));

        let list = repo.testimonials();
        let target = list[list.len() - 2].clone();
        let mut edited = target.clone();
        edited.name = "Alpha Edited".to_string();
        repo.upsert_testimonial(edited);

        let after = repo.testimonials();
        assert_eq!(after.len(), list.len());
        assert_eq!(after[list.len() - 2].name, "Alpha Edited");
        assert_eq!(after[list.len() - 2].id, target.id);
        assert_eq!(after.last().unwrap().name, "Beta");
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let backend = MemoryBackend::new();
        let repo = ContentRepository::open(backend);
        for t in repo.testimonials() {
            repo.delete_testimonial(&t.id);
        }
        repo.upsert_testimonial(testimonial("", "A"));
        repo.upsert_testimonial(testimonial("", "B"));
        repo.upsert_testimonial(testimonial("", "C"));

        let middle = repo.testimonials()[1].id.clone();
        repo.delete_testimonial(&middle);

        let names: Vec<String> = repo.testimonials().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn created_post_gets_slug_from_title() {
        let repo = ContentRepository::open(MemoryBackend::new());
        repo.upsert_post(post("", "5 Ways AI Can Save Time", day(1), PostStatus::Draft));

        let created = repo.posts().last().unwrap().clone();
        assert_eq!(created.slug, "5-ways-ai-can-save-time");
    }

    #[test]
    fn editing_title_leaves_slug_unchanged() {
        let repo = ContentRepository::open(MemoryBackend::new());
        repo.upsert_post(post("", "Original Title", day(1), PostStatus::Published));

        let mut created = repo.posts().last().unwrap().clone();
        assert_eq!(created.slug, "original-title");

        created.title = "A Completely Different Title".to_string();
        repo.upsert_post(created.clone());

        let edited = repo.find_post_by_slug("original-title").unwrap();
        assert_eq!(edited.id, created.id);
        assert_eq!(edited.title, "A Completely Different Title");
        assert_eq!(edited.slug, "original-title");
    }

    #[test]
    fn published_posts_excludes_drafts_and_sorts_newest_first() {
        let repo = ContentRepository::open(MemoryBackend::new());
        for p in repo.posts() {
            repo.delete_post(&p.id);
        }
        // stored order T1, T3, T2 with T1 < T2 < T3
        repo.upsert_post(post("", "Oldest", day(1), PostStatus::Published));
        repo.upsert_post(post("", "Newest", day(3), PostStatus::Published));
        repo.upsert_post(post("", "Middle", day(2), PostStatus::Published));
        repo.upsert_post(post("", "Hidden", day(4), PostStatus::Draft));

        let titles: Vec<String> = repo.published_posts().into_iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec!["Newest".to_string(), "Middle".to_string(), "Oldest".to_string()]
        );
        assert!(repo.published_posts().iter().all(|p| p.status == PostStatus::Published));
    }

    #[test]
    fn find_post_by_slug_returns_first_match_or_none() {
        let repo = ContentRepository::open(MemoryBackend::new());
        repo.upsert_post(post("", "Findable Post", day(1), PostStatus::Draft));

        assert_eq!(
            repo.find_post_by_slug("findable-post").map(|p| p.title),
            Some("Findable Post".to_string())
        );
        assert!(repo.find_post_by_slug("nope").is_none());
    }

    #[test]
    fn active_testimonials_filters_and_preserves_order() {
        let repo = ContentRepository::open(MemoryBackend::new());
        for t in repo.testimonials() {
            repo.delete_testimonial(&t.id);
        }
        repo.upsert_testimonial(testimonial("", "Visible A"));
        let mut hidden = testimonial("", "Hidden");
        hidden.active = false;
        repo.upsert_testimonial(hidden);
        repo.upsert_testimonial(testimonial("", "Visible B"));

        let names: Vec<String> = repo
            .active_testimonials()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Visible A".to_string(), "Visible B".to_string()]);
    }

    #[test]
    fn settings_replace_is_immediately_visible() {
        let repo = ContentRepository::open(MemoryBackend::new());
        let mut settings = repo.settings();
        settings.contact_email = "new@acumen.ai".to_string();
        repo.replace_settings(settings);

        assert_eq!(repo.settings().contact_email, "new@acumen.ai");
    }

    #[test]
    fn round_trip_reproduces_records_in_order() {
        let backend = MemoryBackend::new();
        {
            let repo = ContentRepository::open(backend.clone());
            repo.upsert_post(post("", "Round Trip", day(5), PostStatus::Published));
            repo.upsert_testimonial(testimonial("", "Round Tripper"));
        }
        let first = ContentRepository::open(backend.clone());
        let second = ContentRepository::open(backend);
        assert_eq!(first.posts(), second.posts());
        assert_eq!(first.testimonials(), second.testimonials());
        assert_eq!(first.settings(), second.settings());
    }

    #[test]
    fn corrupt_slot_falls_back_to_defaults() {
        let backend = MemoryBackend::new();
        backend.store(POSTS_KEY, "not even json").unwrap();

        let repo = ContentRepository::open(backend);
        assert_eq!(repo.posts(), crate::seed::default_posts());
    }

    /// Backend that accepts nothing, for exercising write degradation.
    #[derive(Clone, Default)]
    struct RejectingBackend;

    impl crate::content::store::StorageBackend for RejectingBackend {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn store(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn failed_write_still_updates_in_memory_view() {
        let repo = ContentRepository::open(RejectingBackend);
        let mut settings = repo.settings();
        settings.site_title = "Unsaved But Visible".to_string();
        repo.replace_settings(settings);

        assert_eq!(repo.settings().site_title, "Unsaved But Visible");
    }

    #[test]
    fn allocate_id_bumps_past_collisions() {
        let existing = vec!["1000".to_string(), "1001".to_string()];
        assert_eq!(allocate_id(1000, &existing), "1002");
        assert_eq!(allocate_id(999, &existing), "999");
    }
}
