//! Top-level layout: navigation, language selector and colorblind toggle.
//!
//! # Design
//! - Preference changes go through the store actions with a fresh storage
//!   handle, so persistence happens only at the mutation point.
//! - Navigation entries come from the route table, not a second list.

use crate::app::{Route, open_storage};
use crate::components::use_translations;
use crate::core::preferences::AccessibilityStore;
use crate::core::routes::View;
use crate::core::theme::body_class;
use crate::i18n::LocaleCode;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub(crate) children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let bundle = use_translations();
    let language = use_selector(|store: &AccessibilityStore| store.language().to_string());
    let colorblind = use_selector(|store: &AccessibilityStore| store.colorblind_mode());
    let active = use_route::<Route>().unwrap_or(Route::NotFound);

    let on_language = Callback::from(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        let lang = select.value();
        Dispatch::<AccessibilityStore>::new()
            .reduce_mut(move |store| store.set_language(&mut open_storage(), &lang));
    });
    let on_toggle_colorblind = Callback::from(|_: MouseEvent| {
        Dispatch::<AccessibilityStore>::new()
            .reduce_mut(|store| store.toggle_colorblind_mode(&mut open_storage()));
    });

    let colorblind_state = if *colorblind {
        bundle.text("settings.on", "On")
    } else {
        bundle.text("settings.off", "Off")
    };
    let known_language = LocaleCode::from_lang_tag(&language).is_some();

    html! {
        <div class={classes!("app-shell", body_class(*colorblind))} lang={(*language).clone()}>
            <header class="topbar">
                <strong class="brand">{bundle.text("nav.brand", "Impactor")}</strong>
                <nav>
                    {for View::all().into_iter().map(|view| nav_item(view, &bundle.text(&nav_key(view), view.name()), &active))}
                </nav>
                <div class="preferences">
                    <label class="locale-toggle">
                        <small>{bundle.text("settings.language", "Language")}</small>
                        <select onchange={on_language}>
                            {for LocaleCode::all().into_iter().map(|locale| html! {
                                <option value={locale.code()} selected={locale.code() == language.as_str()}>
                                    {locale.label()}
                                </option>
                            })}
                            if !known_language {
                                <option value={(*language).clone()} selected=true>{(*language).clone()}</option>
                            }
                        </select>
                    </label>
                    <button
                        type="button"
                        class="ghost"
                        aria-pressed={colorblind.to_string()}
                        onclick={on_toggle_colorblind}
                    >
                        {format!("{}: {colorblind_state}", bundle.text("settings.colorblind", "Colorblind mode"))}
                    </button>
                </div>
            </header>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_key(view: View) -> String {
    format!("nav.{}", view.name().to_ascii_lowercase())
}

fn nav_item(view: View, label: &str, active: &Route) -> Html {
    let route = Route::from(view);
    let classes = classes!("nav-item", (&route == active).then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
