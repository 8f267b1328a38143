//! Hash-based routing.
//!
//! Paths live in the location hash (`#/blog/some-slug`), so navigation
//! needs no server cooperation. Unknown paths fall back to the home page.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Blog,
    BlogPost { slug: String },
    Contact,
    Admin,
}

impl Route {
    /// Parses the current `window.location.hash`.
    pub fn current() -> Route {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Route::from_hash(&hash)
    }

    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match segments.next() {
            None => Route::Home,
            Some("about") => Route::About,
            Some("services") => Route::Services,
            Some("blog") => match segments.next() {
                Some(slug) => Route::BlogPost {
                    slug: slug.to_string(),
                },
                None => Route::Blog,
            },
            Some("contact") => Route::Contact,
            Some("admin") => Route::Admin,
            Some(_) => Route::Home,
        }
    }

    /// Hash href for use in anchors.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::About => "#/about".to_string(),
            Route::Services => "#/services".to_string(),
            Route::Blog => "#/blog".to_string(),
            Route::BlogPost { slug } => format!("#/blog/{slug}"),
            Route::Contact => "#/contact".to_string(),
            Route::Admin => "#/admin".to_string(),
        }
    }
}
