use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::components::layout::Layout;
use crate::context::{SiteContext, SiteRepository};
use crate::pages::about::AboutPage;
use crate::pages::admin::AdminPage;
use crate::pages::blog::BlogPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::services::ServicesPage;
use crate::route::Route;
use crate::storage::LocalStorageBackend;

pub enum Msg {
    RouteChanged(Route),
    ContentChanged,
}

/// Root component. Owns the one content repository for the whole process,
/// provides it through [`SiteContext`], and switches pages on hash
/// changes. The admin page renders without the public chrome.
pub struct App {
    repo: Rc<SiteRepository>,
    route: Route,
    revision: u64,
    _onhashchange: Closure<dyn FnMut()>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let backend = LocalStorageBackend::new().expect("localStorage unavailable");
        let repo = Rc::new(SiteRepository::open(backend));

        let link = ctx.link().clone();
        let onhashchange = Closure::<dyn FnMut()>::new(move || {
            link.send_message(Msg::RouteChanged(Route::current()));
        });
        if let Some(window) = web_sys::window() {
            window.set_onhashchange(Some(onhashchange.as_ref().unchecked_ref()));
        }

        App {
            repo,
            route: Route::current(),
            revision: 0,
            _onhashchange: onhashchange,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RouteChanged(route) => {
                if route == self.route {
                    return false;
                }
                self.route = route;
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                true
            }
            Msg::ContentChanged => {
                self.revision += 1;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let site = SiteContext::new(
            self.repo.clone(),
            self.revision,
            ctx.link().callback(|_| Msg::ContentChanged),
        );

        let page = match &self.route {
            Route::Home => html! { <Layout><HomePage /></Layout> },
            Route::About => html! { <Layout><AboutPage /></Layout> },
            Route::Services => html! { <Layout><ServicesPage /></Layout> },
            Route::Blog => html! { <Layout><BlogPage /></Layout> },
            Route::BlogPost { slug } => {
                html! { <Layout><BlogPage slug={Some(slug.clone())} /></Layout> }
            }
            Route::Contact => html! { <Layout><ContactPage /></Layout> },
            Route::Admin => html! { <AdminPage /> },
        };

        html! {
            <ContextProvider<SiteContext> context={site}>
                { page }
            </ContextProvider<SiteContext>>
        }
    }
}
