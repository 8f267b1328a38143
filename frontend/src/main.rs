use crate::app::App;

mod app;
mod components;
mod context;
mod leads;
mod pages;
mod route;
mod storage;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
