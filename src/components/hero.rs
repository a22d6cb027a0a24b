//! Hero with a pointer-following glow and a parallax backdrop.
//!
//! The glow eases toward the pointer one animation frame at a time. Frames
//! are only requested while the glow is still moving; the next pointer move
//! starts them again.

use leptos::prelude::*;

use crate::content::TAGLINE;
use crate::state::viewport::ViewportState;
use crate::util::motion::{Point, parallax_offset};

const PARALLAX_SPEED: f64 = 0.35;
const PARALLAX_MAX: f64 = 160.0;

#[component]
pub fn Hero() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let target = RwSignal::new(Point::default());
    let glow = RwSignal::new(Point::default());

    #[cfg(feature = "csr")]
    let following = StoredValue::new(false);

    let on_pointer = move |ev: leptos::ev::MouseEvent| {
        target.set(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
        #[cfg(feature = "csr")]
        {
            if !following.get_value() {
                following.set_value(true);
                follow_frame(glow, target, following);
            }
        }
    };

    let glow_style = move || {
        let p = glow.get();
        format!("transform: translate3d({:.1}px, {:.1}px, 0)", p.x, p.y)
    };
    let backdrop_style = move || {
        let offset = parallax_offset(viewport.with(|v| v.scroll_y), PARALLAX_SPEED, PARALLAX_MAX);
        format!("transform: translate3d(0, {offset:.1}px, 0)")
    };

    view! {
        <section id="top" class="hero" on:mousemove=on_pointer>
            <div class="hero__backdrop" style=backdrop_style></div>
            <div class="hero__glow" style=glow_style aria-hidden="true"></div>
            <div class="hero__content">
                <p class="hero__eyebrow">"Independent design studio"</p>
                <h1 class="hero__title">"Design that feels considered."</h1>
                <p class="hero__subtitle">{TAGLINE}</p>
                <div class="hero__actions">
                    <a href="#contact" class="btn btn--primary">"Start a project"</a>
                    <a href="#projects" class="btn btn--ghost">"See the work"</a>
                </div>
            </div>
        </section>
    }
}

/// Advance the glow one step and request another frame until it settles.
#[cfg(feature = "csr")]
fn follow_frame(glow: RwSignal<Point>, target: RwSignal<Point>, following: StoredValue<bool>) {
    use crate::util::motion::{FOLLOW_FACTOR, smooth_toward};

    // Disposed with the hero.
    let (Some(current), Some(aim)) = (glow.try_get_untracked(), target.try_get_untracked()) else {
        return;
    };
    if current == aim {
        following.set_value(false);
        return;
    }
    glow.set(smooth_toward(current, aim, FOLLOW_FACTOR));
    request_animation_frame(move || follow_frame(glow, target, following));
}
