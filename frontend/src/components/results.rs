use shared::ResultSummary;
use yew::prelude::*;

pub fn render_results(summary: Option<&ResultSummary>) -> Html {
    let Some(summary) = summary else {
        return html! {};
    };

    html! {
        <div class="results-container">
            <h2>{"Prediction Result"}</h2>
            <div class="result-grid">
                <div class="result-item">
                    <span class="result-label">{"Predicted Class"}</span>
                    <span class="result-value">{ &summary.predicted_class }</span>
                </div>
                <div class="result-item">
                    <span class="result-label">{"Confidence"}</span>
                    <span class="result-value">{ &summary.confidence }</span>
                </div>
                <div class="result-item">
                    <span class="result-label">{"Affected Area"}</span>
                    <span class="result-value">{ &summary.affected_area }</span>
                </div>
                <div class="result-item">
                    <span class="result-label">{"Stage"}</span>
                    <span class="result-value">{ &summary.stage }</span>
                </div>
            </div>

            <div class="treatments">
                <h3>{"Suggested Treatments"}</h3>
                <ul>
                    { for summary.treatments.iter().map(|t| html! { <li>{ t }</li> }) }
                </ul>
            </div>

            <div class="result-images">
                <figure>
                    <img src={summary.mask_src.clone()} alt="Segmentation mask" />
                    <figcaption>{"Segmentation Mask"}</figcaption>
                </figure>
                <figure>
                    <img src={summary.overlay_src.clone()} alt="Overlay" />
                    <figcaption>{"Overlay"}</figcaption>
                </figure>
            </div>

            <p class="disclaimer">
                {"This result is an automated estimate and not a medical diagnosis. Consult a dermatologist."}
            </p>
        </div>
    }
}
