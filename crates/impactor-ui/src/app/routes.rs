//! Routing definitions for the Impactor UI.
use crate::core::routes::View;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/Info")]
    Info,
    #[at("/visualization")]
    Visualization,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Home => Self::Home,
            View::Info => Self::Info,
            View::Visualization => Self::Visualization,
        }
    }
}
