use shared::Route;
use yew::prelude::*;

use crate::components::image_slider::ImageSlider;
use crate::components::nav::Link;
use crate::components::steps::Steps;
use crate::content::{FLOWCHART, INFO, SLIDES, TAGLINE};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero-text">
                    <h1>{"UrticaScan AI"}</h1>
                    <p>{ TAGLINE }</p>
                    <Link to={Route::Predict} class="primary-btn">{"Start a Prediction"}</Link>
                </div>
                <ImageSlider images={SLIDES} />
            </section>

            <section class="info-block">
                <h2>{"What is UrticaScan AI?"}</h2>
                <p>{ INFO }</p>
            </section>

            <section class="flowchart">
                <h2>{"Workflow"}</h2>
                <img src={FLOWCHART} alt="Prediction workflow" />
            </section>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <Steps />
            </section>
        </div>
    }
}
