use crate::components::pages::{HomePage, InfoPage, NotFoundPage, VisualizationPage};
use crate::components::shell::AppShell;
use crate::core::preferences::AccessibilityStore;
use crate::core::routes::{View, resolve};
use crate::i18n::TranslationBundle;
pub(crate) use routes::Route;
pub(crate) use storage::open_storage;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod routes;
mod storage;

const ROOT_ELEMENT_ID: &str = "root";

#[function_component(ImpactorApp)]
fn impactor_app() -> Html {
    let language = use_selector(|store: &AccessibilityStore| store.language().to_string());
    let bundle = {
        let language = (*language).clone();
        use_memo(|language| TranslationBundle::for_language(language), language)
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <BrowserRouter>
                <AppShell>
                    <Switch<Route> render={switch} />
                </AppShell>
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

fn switch(route: Route) -> Html {
    match resolve(&route.to_path()) {
        Ok(View::Home) => html! { <HomePage /> },
        Ok(View::Info) => html! { <InfoPage /> },
        Ok(View::Visualization) => html! { <VisualizationPage /> },
        Err(_) => html! { <NotFoundPage /> },
    }
}

/// Load persisted preferences and mount the app.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        log::warn!("logger already initialized");
    }

    let storage = open_storage();
    Dispatch::<AccessibilityStore>::new().reduce_mut(|store| store.init(&storage));
    let prefs = Dispatch::<AccessibilityStore>::new().get();
    log::info!(
        "starting impactor ui (language={}, colorblind={})",
        prefs.language(),
        prefs.colorblind_mode()
    );

    if let Some(root) = gloo::utils::document().get_element_by_id(ROOT_ELEMENT_ID) {
        yew::Renderer::<ImpactorApp>::with_root(root).render();
    } else {
        yew::Renderer::<ImpactorApp>::new().render();
    }
}
