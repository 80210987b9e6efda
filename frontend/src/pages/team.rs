use gloo_timers::callback::Interval;
use shared::carousel::{RING_SIZE, TeamRing};
use yew::prelude::*;

use crate::config::FRAME_INTERVAL_MS;
use crate::content::TEAM;

pub enum Msg {
    Tick,
    Toggle(usize),
}

/// Team page with the rotating avatar ring.
pub struct Team {
    ring: TeamRing,
    frames: Option<Interval>,
}

impl Team {
    // Keeps the frame timer alive only while the ring is turning.
    fn sync_frames(&mut self, ctx: &Context<Self>) {
        if !self.ring.is_rotating() {
            self.frames = None;
        } else if self.frames.is_none() {
            let link = ctx.link().clone();
            self.frames = Some(Interval::new(FRAME_INTERVAL_MS, move || {
                link.send_message(Msg::Tick)
            }));
        }
    }
}

impl Component for Team {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut team = Self {
            ring: TeamRing::new(TEAM.len()),
            frames: None,
        };
        team.sync_frames(ctx);
        team
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => self.ring.tick(js_sys::Date::now()),
            Msg::Toggle(index) => {
                self.ring.toggle(index);
                self.sync_frames(ctx);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let angle = self.ring.angle();
        let focused = self.ring.focused().and_then(|i| TEAM.get(i));

        html! {
            <div class="page team-page">
                <h1>{"Meet the Team"}</h1>
                <div
                    class="team-ring"
                    style={format!("width: {0}px; height: {0}px; transform: rotate({1}deg);", RING_SIZE, angle)}
                >
                    { for TEAM.iter().enumerate().map(|(i, member)| {
                        let layout = self.ring.layout(i);
                        let style = format!(
                            "width: {size}px; height: {size}px; top: {top}px; left: {left}px; \
                             opacity: {opacity}; z-index: {z}; transform: rotate({counter}deg);",
                            size = layout.size,
                            top = layout.top,
                            left = layout.left,
                            opacity = layout.opacity,
                            z = layout.z_index,
                            counter = -angle,
                        );
                        html! {
                            <button
                                key={i}
                                class={classes!("avatar", layout.focused.then_some("focused"))}
                                {style}
                                aria-label={member.name}
                                onclick={ctx.link().callback(move |_| Msg::Toggle(i))}
                            >
                                <img src={member.image} alt={member.name} />
                            </button>
                        }
                    }) }
                </div>
                {
                    match focused {
                        Some(member) => html! {
                            <div class="member-card">
                                <h2>{ member.name }</h2>
                                <p>{ member.role }</p>
                            </div>
                        },
                        None => html! {
                            <p class="hint">{"Click a photo to learn more."}</p>
                        },
                    }
                }
            </div>
        }
    }
}
