//! Public page chrome: top navigation and footer, both fed from the
//! settings record so the admin panel controls what they show.

use yew::prelude::*;

use crate::context::{SiteContext, expect_site};
use crate::route::Route;

pub enum Msg {
    SiteUpdated(SiteContext),
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

pub struct Layout {
    site: SiteContext,
    _handle: ContextHandle<SiteContext>,
}

impl Component for Layout {
    type Message = Msg;
    type Properties = LayoutProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (site, handle) = expect_site(ctx, ctx.link().callback(Msg::SiteUpdated));
        Layout {
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
        let settings = self.site.settings();
        let current = Route::current();

        html! {
            <div class="site">
                <header class="site-header">
                    <a class="site-brand" href={Route::Home.href()}>{ &settings.site_title }</a>
                    <nav class="site-nav">
                        { nav_link(&current, Route::Home, "Home") }
                        { nav_link(&current, Route::About, "About") }
                        { nav_link(&current, Route::Services, "Services") }
                        { nav_link(&current, Route::Blog, "Blog") }
                        { nav_link(&current, Route::Contact, "Contact") }
                    </nav>
                    <a class="nav-cta" href={Route::Contact.href()}>{ "Book a Consultation" }</a>
                </header>

                <main class="site-main">
                    { ctx.props().children.clone() }
                </main>

                <footer class="site-footer">
                    <div class="footer-about">
                        <p class="footer-brand">{ &settings.site_title }</p>
                        <p>{ &settings.tagline }</p>
                    </div>
                    <div class="footer-contact">
                        <p>{ &settings.office_address }</p>
                        <p>
                            <a href={format!("tel:{}", settings.contact_phone)}>{ &settings.contact_phone }</a>
                        </p>
                        <p>
                            <a href={format!("mailto:{}", settings.contact_email)}>{ &settings.contact_email }</a>
                        </p>
                        <p>{ &settings.business_hours }</p>
                    </div>
                    <div class="footer-social">
                        <a href={settings.social.linkedin.clone()}>{ "LinkedIn" }</a>
                        <a href={settings.social.twitter.clone()}>{ "Twitter" }</a>
                        <a href={settings.social.facebook.clone()}>{ "Facebook" }</a>
                    </div>
                </footer>
            </div>
        }
    }
}

fn nav_link(current: &Route, target: Route, label: &str) -> Html {
    let active = *current == target;
    html! {
        <a class={classes!("nav-link", active.then_some("active"))} href={target.href()}>
            { label }
        </a>
    }
}
