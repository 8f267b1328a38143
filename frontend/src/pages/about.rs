use yew::prelude::*;

use crate::route::Route;

pub struct AboutPage;

impl Component for AboutPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AboutPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="about">
                <section class="page-hero">
                    <h1>{ "AI consulting without the jargon" }</h1>
                    <p>{ "We help owner-operated businesses put AI to work on the \
                          unglamorous tasks that eat their week." }</p>
                </section>

                <section class="about-story">
                    <h2>{ "Why we exist" }</h2>
                    <p>{ "Most AI advice is written for companies with data teams and \
                          seven-figure budgets. Our clients have neither. They have a \
                          front desk that drowns in email, invoices that get keyed in \
                          by hand, and a hunch that software should be doing more of \
                          this. We close that gap." }</p>
                    <p>{ "Every engagement starts with the work you already do, not \
                          with a product we want to sell. If a spreadsheet fixes it, \
                          we will tell you to keep the spreadsheet." }</p>
                </section>

                <section class="about-values">
                    <h2>{ "How we work" }</h2>
                    <div class="card-grid">
                        <div class="card">
                            <h3>{ "Plain language" }</h3>
                            <p>{ "You get recommendations you can explain to your own \
                                  team, with the trade-offs spelled out." }</p>
                        </div>
                        <div class="card">
                            <h3>{ "Small first steps" }</h3>
                            <p>{ "One process, a few weeks, a measurable result. Then \
                                  we decide together what comes next." }</p>
                        </div>
                        <div class="card">
                            <h3>{ "Skin in the game" }</h3>
                            <p>{ "We stay through rollout and training. A tool nobody \
                                  uses is a failure we share." }</p>
                        </div>
                    </div>
                </section>

                <section class="home-cta">
                    <h2>{ "Talk to us about your busiest process" }</h2>
                    <a class="cta-button" href={Route::Contact.href()}>{ "Start the Conversation" }</a>
                </section>
            </div>
        }
    }
}
