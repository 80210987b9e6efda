use gloo_timers::callback::Interval;
use shared::slider::{AUTOPLAY_DELAY_MS, Slider};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageSliderProps {
    pub images: &'static [&'static str],
}

pub enum Msg {
    Next,
    Prev,
    GoTo(usize),
    Autoplay,
}

/// Looping image carousel that advances on its own.
pub struct ImageSlider {
    slider: Slider,
    autoplay: Option<Interval>,
}

impl ImageSlider {
    fn restart_autoplay(&mut self, ctx: &Context<Self>) {
        self.autoplay = None;
        if self.slider.len() > 1 {
            let link = ctx.link().clone();
            self.autoplay = Some(Interval::new(AUTOPLAY_DELAY_MS, move || {
                link.send_message(Msg::Autoplay)
            }));
        }
    }
}

impl Component for ImageSlider {
    type Message = Msg;
    type Properties = ImageSliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut slider = Self {
            slider: Slider::new(ctx.props().images.len()),
            autoplay: None,
        };
        slider.restart_autoplay(ctx);
        slider
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Autoplay => {
                self.slider.next();
                return true;
            }
            Msg::Next => self.slider.next(),
            Msg::Prev => self.slider.prev(),
            Msg::GoTo(index) => self.slider.go_to(index),
        }
        // Manual moves restart the countdown.
        self.restart_autoplay(ctx);
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.slider = Slider::new(ctx.props().images.len());
        self.restart_autoplay(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let images = ctx.props().images;
        if images.is_empty() {
            return html! {};
        }
        let link = ctx.link();

        html! {
            <div class="image-slider">
                <div class="slides" style={format!("transform: translateX(-{}%)", self.slider.index() * 100)}>
                    { for images.iter().enumerate().map(|(i, src)| html! {
                        <div key={i} class={classes!("slide", self.slider.is_active(i).then_some("active"))}>
                            <img src={*src} alt={format!("Slide {}", i + 1)} />
                        </div>
                    }) }
                </div>
                <button class="slider-arrow prev" aria-label="Previous slide" onclick={link.callback(|_| Msg::Prev)}>{"‹"}</button>
                <button class="slider-arrow next" aria-label="Next slide" onclick={link.callback(|_| Msg::Next)}>{"›"}</button>
                <div class="slider-dots">
                    { for (0..images.len()).map(|i| html! {
                        <button
                            key={i}
                            class={classes!("dot", self.slider.is_active(i).then_some("active"))}
                            aria-label={format!("Go to slide {}", i + 1)}
                            onclick={link.callback(move |_| Msg::GoTo(i))}
                        />
                    }) }
                </div>
            </div>
        }
    }
}
