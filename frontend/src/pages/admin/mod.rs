//! Admin panel: root module wiring the Yew `Component` implementation
//! with submodules for messages, state, update logic and view rendering.
//!
//! The panel sits behind the session gate. Until the operator signs in it
//! renders only the login card; afterwards the dashboard with the three
//! content managers.

use common::content::session::SessionGate;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::{AdminView, Msg};
pub use state::AdminPage;

use crate::context::expect_site;
use crate::storage::SessionStorageBackend;

/// Build-time shared secret for the single operator identity. A
/// placeholder trust boundary only: swap in real authentication (hashed
/// credential, expiry, brute-force protection) before production use.
const ADMIN_PASSWORD: &str = "changeme123";

impl Component for AdminPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (site, handle) = expect_site(ctx, ctx.link().callback(Msg::SiteUpdated));
        let backend = SessionStorageBackend::new().expect("sessionStorage unavailable");
        let gate = SessionGate::new(backend, ADMIN_PASSWORD);
        AdminPage::new(site, handle, gate)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
