use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 2rem;
                        text-align: center;
                        font-size: 0.85rem;
                        color: #6b7280;
                    }
                "#}
            </style>
            <p>{ format!("© {} {}", year, config::SITE_NAME) }</p>
        </footer>
    }
}
