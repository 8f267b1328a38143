//! Blog list and article pages.
//!
//! Both views only ever see published posts; drafts stay in the admin
//! panel. Addressing is by slug, and an unknown or unpublished slug
//! drops the visitor back on the list instead of a dead page.

use common::model::post::{BlogPost, PostStatus};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::context::{SiteContext, expect_site};
use crate::route::Route;

pub enum Msg {
    SiteUpdated(SiteContext),
}

#[derive(Properties, PartialEq)]
pub struct BlogProps {
    /// `Some` renders the article page for that slug, `None` the list.
    #[prop_or_default]
    pub slug: Option<String>,
}

pub struct BlogPage {
    site: SiteContext,
    _handle: ContextHandle<SiteContext>,
}

impl Component for BlogPage {
    type Message = Msg;
    type Properties = BlogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (site, handle) = expect_site(ctx, ctx.link().callback(Msg::SiteUpdated));
        BlogPage {
            site,
            _handle: handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SiteUpdated(site) => {
                self.site = site;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &ctx.props().slug {
            Some(slug) => match self.published_by_slug(slug) {
                Some(post) => article_view(&post),
                None => self.list_view(),
            },
            None => self.list_view(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // broken or draft-only slugs bounce back to the list
        if let Some(slug) = &ctx.props().slug {
            if self.published_by_slug(slug).is_none() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_hash(&Route::Blog.href());
                }
            }
        }
    }
}

impl BlogPage {
    fn published_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.site
            .find_post_by_slug(slug)
            .filter(|p| p.status == PostStatus::Published)
    }

    fn list_view(&self) -> Html {
        let published = self.site.published_posts();
        let Some((featured, rest)) = published.split_first() else {
            return html! {
                <div class="blog">
                    <section class="page-hero">
                        <h1>{ "Insights" }</h1>
                        <p>{ "Nothing published yet. Check back soon." }</p>
                    </section>
                </div>
            };
        };

        html! {
            <div class="blog">
                <section class="page-hero">
                    <h1>{ "Insights" }</h1>
                    <p>{ "Practical notes on AI for small business, from the field." }</p>
                </section>

                <a class="featured-post" href={post_href(featured)}>
                    <img src={featured.featured_image_url.clone()} alt={featured.title.clone()} />
                    <div class="featured-post-body">
                        <span class="post-category">{ &featured.category }</span>
                        <h2>{ &featured.title }</h2>
                        <p>{ &featured.excerpt }</p>
                        <p class="post-meta">{ post_meta(featured) }</p>
                    </div>
                </a>

                <div class="card-grid">
                    { for rest.iter().map(post_card) }
                </div>
            </div>
        }
    }
}

fn post_href(post: &BlogPost) -> String {
    Route::BlogPost {
        slug: post.slug.clone(),
    }
    .href()
}

fn post_meta(post: &BlogPost) -> String {
    format!(
        "By {} \u{b7} {} \u{b7} {} min read",
        post.author,
        post.published_date.format("%B %e, %Y"),
        post.read_time
    )
}

fn post_card(post: &BlogPost) -> Html {
    html! {
        <a class="card post-card" href={post_href(post)} key={post.id.clone()}>
            <img src={post.featured_image_url.clone()} alt={post.title.clone()} />
            <span class="post-category">{ &post.category }</span>
            <h3>{ &post.title }</h3>
            <p>{ &post.excerpt }</p>
            <p class="post-meta">{ post_meta(post) }</p>
        </a>
    }
}

fn article_view(post: &BlogPost) -> Html {
    // stored body is HTML authored in the admin panel
    let body = Html::from_html_unchecked(AttrValue::from(post.content.clone()));
    html! {
        <article class="blog-post">
            <span class="post-category">{ &post.category }</span>
            <h1>{ &post.title }</h1>
            <p class="post-meta">{ post_meta(post) }</p>
            <img src={post.featured_image_url.clone()} alt={post.title.clone()} />
            <div class="post-body">{ body }</div>
            <a class="text-link" href={Route::Blog.href()}>{ "\u{2190} All posts" }</a>
        </article>
    }
}
