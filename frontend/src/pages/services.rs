use yew::prelude::*;

use crate::route::Route;

struct Service {
    title: &'static str,
    blurb: &'static str,
    deliverables: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        title: "AI Readiness Audit",
        blurb: "A two-week review of your workflows, data and tooling that ends in a \
                prioritized list of automation candidates.",
        deliverables: &["Process map", "Data hygiene report", "Ranked opportunity list"],
    },
    Service {
        title: "AI Strategy & Roadmap",
        blurb: "A quarter-by-quarter plan matching proven tools to the opportunities \
                the audit surfaced, with budgets and owners attached.",
        deliverables: &["12-month roadmap", "Vendor shortlist", "Cost model"],
    },
    Service {
        title: "Implementation",
        blurb: "We configure, integrate and test the selected tools inside your stack \
                and run them alongside your team until the handoff is boring.",
        deliverables: &["Working automation", "Runbooks", "Rollback plan"],
    },
    Service {
        title: "Team Training",
        blurb: "Role-specific working sessions, from prompt habits for the front desk \
                to oversight routines for managers.",
        deliverables: &["Live workshops", "Reference guides", "Office hours"],
    },
];

pub struct ServicesPage;

impl Component for ServicesPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ServicesPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="services">
                <section class="page-hero">
                    <h1>{ "Services" }</h1>
                    <p>{ "Four ways to engage, from a first look to a running system." }</p>
                </section>

                <section class="service-list">
                    { for SERVICES.iter().map(service_card) }
                </section>

                <section class="home-cta">
                    <h2>{ "Not sure where to start?" }</h2>
                    <p>{ "The audit exists for exactly that reason." }</p>
                    <a class="cta-button" href={Route::Contact.href()}>{ "Book a Free Consultation" }</a>
                </section>
            </div>
        }
    }
}

fn service_card(service: &Service) -> Html {
    html! {
        <div class="card service-card">
            <h3>{ service.title }</h3>
            <p>{ service.blurb }</p>
            <ul>
                { for service.deliverables.iter().map(|d| html! { <li>{ *d }</li> }) }
            </ul>
        </div>
    }
}
