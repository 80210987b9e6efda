use yew::prelude::*;

use crate::content::STEPS;

/// Vertical stepper describing how a prediction is produced.
#[function_component(Steps)]
pub fn steps() -> Html {
    let active = use_state(|| 0usize);

    html! {
        <div class="steps">
            { for STEPS.iter().enumerate().map(|(i, step)| {
                let onclick = {
                    let active = active.clone();
                    Callback::from(move |_: MouseEvent| active.set(i))
                };
                let state = match i.cmp(&*active) {
                    std::cmp::Ordering::Less => "completed",
                    std::cmp::Ordering::Equal => "current",
                    std::cmp::Ordering::Greater => "upcoming",
                };
                html! {
                    <div key={i} class={classes!("step", state)}>
                        <button class="step-marker" {onclick}>{ (i + 1).to_string() }</button>
                        <div class="step-body">
                            <h3>{ step.title }</h3>
                            {
                                if i == *active {
                                    html! {
                                        <>
                                            <p>{ step.description }</p>
                                            <img src={step.image} alt={step.title} class="step-image" />
                                        </>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                }
            }) }
            <div class="step-controls">
                <button
                    class="secondary-btn"
                    disabled={*active == 0}
                    onclick={{
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(active.saturating_sub(1)))
                    }}
                >
                    {"Back"}
                </button>
                <button
                    class="primary-btn"
                    disabled={*active + 1 >= STEPS.len()}
                    onclick={{
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set((*active + 1).min(STEPS.len() - 1)))
                    }}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
