//! Leptos Paradise Nursery Demo Application

use std::sync::Arc;

use leptos::prelude::*;

use nursery::catalog::Catalog;

mod about;
mod cart;
#[cfg(not(target_arch = "wasm32"))]
mod logging;
mod navbar;
mod plants;

const CATALOG_FIXTURE_YAML: &str = include_str!("../../../fixtures/plants/nursery.yml");

/// Page currently shown by the app shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Page {
    /// Plant listing
    #[default]
    Plants,

    /// Shopping cart
    Cart,

    /// About the nursery
    AboutUs,
}

/// Page transitions handed to every page component.
#[derive(Clone, Copy)]
struct Navigation {
    show_plants: Callback<()>,
    show_cart: Callback<()>,
    show_about_us: Callback<()>,
}

impl Navigation {
    fn new(page: RwSignal<Page>) -> Self {
        Navigation {
            show_plants: Callback::new(move |()| page.set(Page::Plants)),
            show_cart: Callback::new(move |()| page.set(Page::Cart)),
            show_about_us: Callback::new(move |()| page.set(Page::AboutUs)),
        }
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match Catalog::from_yaml(CATALOG_FIXTURE_YAML) {
        Ok(catalog) => {
            let catalog = Arc::new(catalog);
            let cart = RwSignal::new(catalog.empty_cart());
            let page = RwSignal::new(Page::default());
            let navigation = Navigation::new(page);

            view! {
                <main class="min-h-screen bg-slate-50 text-slate-900">
                    {move || match page.get() {
                        Page::Plants => {
                            view! {
                                <plants::PlantsPage
                                    catalog=Arc::clone(&catalog)
                                    cart=cart
                                    on_plants_click=navigation.show_plants
                                    on_about_us_click=navigation.show_about_us
                                    on_cart_click=navigation.show_cart
                                />
                            }
                                .into_any()
                        }
                        Page::Cart => {
                            view! {
                                <cart::CartPage
                                    cart=cart
                                    on_continue_shopping=navigation.show_plants
                                    on_plants_click=navigation.show_plants
                                    on_about_us_click=navigation.show_about_us
                                />
                            }
                                .into_any()
                        }
                        Page::AboutUs => {
                            view! {
                                <about::AboutPage
                                    cart=cart
                                    on_plants_click=navigation.show_plants
                                    on_about_us_click=navigation.show_about_us
                                    on_cart_click=navigation.show_cart
                                />
                            }
                                .into_any()
                        }
                    }}
                </main>
            }
            .into_any()
        }
        Err(error) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Paradise Nursery"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error.to_string()}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main demo function
fn main() {
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    if let Err(error) = logging::init_tracing() {
        leptos::logging::error!("failed to initialise logging: {error}");
    }

    leptos::mount::mount_to_body(App);
}
