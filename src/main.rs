use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;

mod carousel;
mod config;
mod effects;

mod components {
    pub mod about;
    pub mod book_now;
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod loader;
    pub mod mobile_menu;
    pub mod navbar;
    pub mod partners;
    pub mod services;
    pub mod showcase;
}

use components::{
    about::About, book_now::BookNow, contact::Contact, footer::Footer, gallery::Gallery,
    hero::Hero, loader::Loader, navbar::Navbar, partners::Partners, services::Services,
    showcase::Showcase,
};
use config::AssetManifest;

const SITE_CSS: &str = include_str!("../styles/site.css");

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub manifest: Rc<AssetManifest>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let loading = use_state(|| true);

    // The loading screen's own progress counter is cosmetic; this timer,
    // not the counter, decides when the page takes over.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOADER_HOLD_MS, move || {
                    info!("Loading screen done, mounting page");
                    loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    if *loading {
        return html! {
            <>
                <Global css={SITE_CSS} />
                <Loader />
            </>
        };
    }

    let manifest = &props.manifest;

    html! {
        <>
            <Global css={SITE_CSS} />
            <div class="site">
                <Navbar />
                <main>
                    <Hero slides={Rc::new(manifest.hero_slides.clone())} />
                    <Services />
                    <Showcase />
                    <About />
                    <Partners
                        logos={Rc::new(manifest.partners.clone())}
                        photos={Rc::new(manifest.showcase_photos.clone())}
                    />
                    <Gallery items={Rc::new(manifest.gallery.clone())} />
                    <Contact />
                    <BookNow />
                </main>
                <Footer />
            </div>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let manifest = config::load_manifest().expect("invalid asset manifest");
    info!(
        "Starting site: {} hero slides, {} gallery images, {} partners",
        manifest.hero_slides.len(),
        manifest.gallery.len(),
        manifest.partners.len()
    );

    yew::Renderer::<App>::with_props(AppProps {
        manifest: Rc::new(manifest),
    })
    .render();
}
