use yew::prelude::*;

const LINES: [&str; 4] = [
    "Every summer the island gathers",
    "to remember what the sea gave back:",
    "music, food, family and a story",
    "we keep telling because it is ours.",
];

fn line_chars(line: &str) -> Html {
    html! {
        <>
            { for line.trim().chars().map(|ch| {
                let class = if ch == ' ' { "char space" } else { "char" };
                html! { <span class={class}>{ ch.to_string() }</span> }
            }) }
        </>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about" id="about">
            <style>
                {r#"
                    .about-stage {
                        position: relative;
                        padding: 20vh 2rem 0;
                    }
                    .about-lines {
                        max-width: 56rem;
                        margin: 0 auto;
                        font-size: clamp(1.6rem, 4vw, 3.2rem);
                        font-weight: 600;
                        line-height: 1.15;
                        will-change: transform, opacity;
                    }
                    .about-line {
                        display: block;
                        opacity: 0;
                        transform: translateY(1.2em);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .about-line.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .about-lines .char {
                        color: #f3f4f6;
                        transition: color 0.15s linear;
                    }
                    .about-lines .char.space {
                        white-space: pre;
                    }
                    .about-lines.chars-active .char {
                        transition-duration: 0.08s;
                    }
                "#}
            </style>
            <div class="about-stage">
                <div id="about-lines" class="about-lines">
                    { for LINES.iter().map(|line| html! {
                        <span class="about-line">{ line_chars(line) }</span>
                    }) }
                </div>
            </div>
        </section>
    }
}
