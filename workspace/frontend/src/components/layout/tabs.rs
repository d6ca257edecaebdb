use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const TABS: &[(Route, &str)] = &[
    (Route::Statistics, "Statistics"),
    (Route::Calculator, "EAI Calculator"),
    (Route::Prediction, "Prediction"),
];

#[function_component(TabBar)]
pub fn tab_bar() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <nav class="tab-navigation">
            { for TABS.iter().map(|(route, label)| {
                let active = *route == current
                    || (matches!(current, Route::Home) && matches!(route, Route::Statistics));
                html! {
                    <Link<Route>
                        to={route.clone()}
                        classes={classes!("tab-button", active.then_some("active"))}
                    >
                        {*label}
                    </Link<Route>>
                }
            })}
        </nav>
    }
}
