use yew::prelude::*;

struct Milestone {
    year: &'static str,
    title: &'static str,
    text: &'static str,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: "1998",
        title: "A first gathering",
        text: "Forty neighbours, one borrowed tent and a generator that gave up before midnight.",
    },
    Milestone {
        year: "2006",
        title: "The parade",
        text: "The harbour road closed for a day and the procession found its route to the water.",
    },
    Milestone {
        year: "2014",
        title: "Music on the pier",
        text: "Local bands took the pier stage and the festival grew to three days.",
    },
    Milestone {
        year: "2023",
        title: "Twenty-five summers",
        text: "A quarter century of coming home, told by the people who were there.",
    },
];

#[function_component(History)]
pub fn history() -> Html {
    html! {
        <section class="history" id="history">
            <style>
                {r#"
                    .history {
                        display: grid;
                        grid-template-columns: minmax(8rem, 1fr) 2fr;
                        gap: 3rem;
                        padding: 20vh 2rem;
                    }
                    .history-year {
                        position: sticky;
                        top: 10vh;
                        align-self: start;
                        font-size: clamp(3rem, 10vw, 8rem);
                        font-weight: 700;
                        line-height: 1;
                    }
                    .timeline-module {
                        min-height: 60vh;
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .timeline-module.in-view {
                        opacity: 1;
                        transform: none;
                    }
                "#}
            </style>
            <div id="history-year" class="history-year">{ MILESTONES[0].year }</div>
            <div class="timeline">
                { for MILESTONES.iter().map(|m| html! {
                    <article class="timeline-module" data-year={m.year}>
                        <h3>{ m.title }</h3>
                        <p>{ m.text }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}
