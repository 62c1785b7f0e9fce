use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found" style="padding: 30vh 2rem; text-align: center;">
            <h1>{"Nothing here"}</h1>
            <Link<Route> to={Route::Home}>{"Back to the festival"}</Link<Route>>
        </section>
    }
}
