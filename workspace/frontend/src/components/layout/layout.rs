use yew::prelude::*;

use super::tabs::TabBar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="app">
            <header class="header">
                <h1>{"Environmental Alert Index"}</h1>
                <p>{"Marine Environment Monitoring Dashboard - Hong Kong Waters"}</p>
            </header>
            <TabBar />
            <main class="main-content">
                { for props.children.iter() }
            </main>
        </div>
    }
}
