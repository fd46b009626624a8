//! Page views rendered by the router.

use crate::app::Route;
use crate::components::use_translations;
use crate::core::preferences::AccessibilityStore;
use crate::core::theme::palette_for;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_translations();
    html! {
        <section class="page page-home">
            <h1>{bundle.text("pages.home.title", "Impactor")}</h1>
            <p>{bundle.text("pages.home.body", "")}</p>
            <Link<Route> to={Route::Visualization} classes={classes!("btn")}>
                {bundle.text("nav.visualization", "Visualization")}
            </Link<Route>>
        </section>
    }
}

#[function_component(InfoPage)]
pub(crate) fn info_page() -> Html {
    let bundle = use_translations();
    html! {
        <section class="page page-info">
            <h1>{bundle.text("pages.info.title", "Info")}</h1>
            <p>{bundle.text("pages.info.body", "")}</p>
        </section>
    }
}

#[function_component(VisualizationPage)]
pub(crate) fn visualization_page() -> Html {
    let bundle = use_translations();
    let colorblind = use_selector(|store: &AccessibilityStore| store.colorblind_mode());
    let palette = palette_for(*colorblind);

    html! {
        <section class={classes!("page", "page-visualization", format!("palette-{}", palette.id))}>
            <h1>{bundle.text("pages.visualization.title", "Visualization")}</h1>
            <figure class="impact-canvas" data-palette={palette.id}></figure>
            <h2>{bundle.text("pages.visualization.legend", "Legend")}</h2>
            <ul class="legend">
                {for palette.tokens.iter().map(|token| html! {
                    <li>
                        <span class="swatch" style={format!("background-color: {}", token.hex)}></span>
                        <span>{token.name}</span>
                    </li>
                })}
            </ul>
        </section>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    let bundle = use_translations();
    html! {
        <section class="page page-not-found">
            <h1>{bundle.text("pages.not_found.title", "Page not found")}</h1>
            <p>{bundle.text("pages.not_found.body", "")}</p>
            <Link<Route> to={Route::Home}>{bundle.text("pages.not_found.back", "Back to home")}</Link<Route>>
        </section>
    }
}
