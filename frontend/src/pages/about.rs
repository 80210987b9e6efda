use yew::prelude::*;

use crate::content::{CLASSIFICATION, CONDITION, DISEASES, SEGMENTATION, Section, TECHNOLOGIES};

fn render_section(section: &Section, reversed: bool) -> Html {
    html! {
        <section id={section.id} class={classes!("about-section", reversed.then_some("reversed"))}>
            <div class="about-text">
                <h2>{ section.title }</h2>
                <p>{ section.description }</p>
            </div>
            <img src={section.image} alt={section.title} class="about-image" />
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <h1>{"About UrticaScan AI"}</h1>
            { render_section(&CONDITION, false) }

            <section class="diseases">
                <h2>{"Diseases Covered"}</h2>
                <div class="disease-grid">
                    { for DISEASES.iter().map(|disease| html! {
                        <div key={disease.name} class="disease-card">
                            <img src={disease.image} alt={disease.name} />
                            <h3>{ disease.name }</h3>
                            <p>{ disease.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            { render_section(&CLASSIFICATION, true) }

            <section class="technologies">
                <h2>{"Technologies Used"}</h2>
                <div class="tech-grid">
                    { for TECHNOLOGIES.iter().map(|(group, items)| html! {
                        <div key={*group} class="tech-card">
                            <h3>{ *group }</h3>
                            <ul>
                                { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            { render_section(&SEGMENTATION, false) }
        </div>
    }
}
