//! Landing page. The hero copy comes from the settings record's A/B
//! configuration; which variant a visitor sees is drawn once at random
//! and pinned in `localStorage` so repeat visits stay consistent.

use common::content::store::StorageBackend;
use common::model::settings::AbVariant;
use common::model::testimonial::Testimonial;
use yew::prelude::*;

use crate::context::{SiteContext, expect_site};
use crate::route::Route;
use crate::storage::LocalStorageBackend;

const AB_VARIANT_KEY: &str = "ab-variant";

pub enum Msg {
    SiteUpdated(SiteContext),
}

pub struct HomePage {
    site: SiteContext,
    variant: AbVariant,
    _handle: ContextHandle<SiteContext>,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (site, handle) = expect_site(ctx, ctx.link().callback(Msg::SiteUpdated));
        HomePage {
            site,
            variant: assigned_variant(),
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

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let settings = self.site.settings();
        let headline = self.variant.headline(&settings.ab_test).to_string();
        let cta_text = self.variant.cta_text(&settings.ab_test).to_string();
        let testimonials = self.site.active_testimonials();

        html! {
            <div class="home">
                <section class="hero">
                    <h1>{ headline }</h1>
                    <p class="hero-sub">{ &settings.tagline }</p>
                    <a class="cta-button" href={Route::Contact.href()}>{ cta_text }</a>
                </section>

                <section class="home-services">
                    <h2>{ "What We Do" }</h2>
                    <div class="card-grid">
                        { service_teaser("AI Strategy", "A plain-language roadmap: where AI \
                            pays off in your business and where it doesn't.") }
                        { service_teaser("Implementation", "We stand up the tools, wire them \
                            into your workflow and stay until they stick.") }
                        { service_teaser("Team Training", "Hands-on sessions so your people \
                            run the systems themselves after we leave.") }
                    </div>
                    <a class="text-link" href={Route::Services.href()}>{ "See all services" }</a>
                </section>

                { testimonials_section(&testimonials) }

                <section class="home-cta">
                    <h2>{ "Ready to find out what AI can do for you?" }</h2>
                    <a class="cta-button" href={Route::Contact.href()}>{ "Get in Touch" }</a>
                </section>
            </div>
        }
    }
}

/// Reads the pinned variant or draws one and pins it. Falls back to
/// variant A when storage is unavailable.
fn assigned_variant() -> AbVariant {
    let Some(backend) = LocalStorageBackend::new() else {
        return AbVariant::A;
    };
    if let Some(saved) = backend
        .load(AB_VARIANT_KEY)
        .and_then(|v| AbVariant::from_str(&v))
    {
        return saved;
    }
    let drawn = if js_sys::Math::random() < 0.5 {
        AbVariant::A
    } else {
        AbVariant::B
    };
    if let Err(err) = backend.store(AB_VARIANT_KEY, drawn.as_str()) {
        gloo_console::warn!("could not pin A/B variant:", err.to_string());
    }
    drawn
}

fn service_teaser(title: &str, blurb: &str) -> Html {
    html! {
        <div class="card">
            <h3>{ title }</h3>
            <p>{ blurb }</p>
        </div>
    }
}

fn testimonials_section(testimonials: &[Testimonial]) -> Html {
    if testimonials.is_empty() {
        return html! {};
    }
    html! {
        <section class="home-testimonials">
            <h2>{ "What Clients Say" }</h2>
            <div class="card-grid">
                { for testimonials.iter().map(testimonial_card) }
            </div>
        </section>
    }
}

fn testimonial_card(t: &Testimonial) -> Html {
    html! {
        <figure class="testimonial" key={t.id.clone()}>
            <img src={t.photo_url.clone()} alt={t.name.clone()} />
            <blockquote>{ format!("\u{201c}{}\u{201d}", t.quote) }</blockquote>
            <figcaption>
                <strong>{ &t.name }</strong>
                <span>{ &t.title }</span>
                <span class="result-badge">{ &t.result_badge }</span>
            </figcaption>
        </figure>
    }
}
