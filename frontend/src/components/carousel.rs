use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Interval;

pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Advance,
    GoTo(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let index = match action {
            CarouselAction::Advance => next_slide(self.index, self.len),
            CarouselAction::GoTo(index) if index < self.len => index,
            CarouselAction::GoTo(_) => self.index,
        };
        Rc::new(CarouselState { index, len: self.len })
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub children: Children,
    #[prop_or(CAROUSEL_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let len = props.children.len();
    let state = use_reducer(|| CarouselState { index: 0, len });

    // Advance on a fixed timer for as long as the carousel is mounted
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |interval_ms| {
                let interval = Interval::new(*interval_ms, move || {
                    dispatcher.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            props.interval_ms,
        );
    }

    let track_style = format!("transform: translateX(-{}%);", state.index * 100);

    html! {
        <div class="carousel">
            <div class="carousel-track" style={track_style}>
                { for props.children.iter().map(|slide| html! {
                    <div class="carousel-slide">{slide}</div>
                }) }
            </div>
            <div class="carousel-dots">
                { for (0..len).map(|i| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(i)))
                    };
                    html! {
                        <button
                            class={classes!("carousel-dot", (i == state.index).then(|| "active"))}
                            aria-label={format!("Show slide {}", i + 1)}
                            onclick={onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_wraps_around() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(0, 0), 0);
    }

    #[test]
    fn repeated_advances_cycle() {
        let mut state = Rc::new(CarouselState { index: 0, len: 3 });
        let mut seen = Vec::new();
        for _ in 0..6 {
            state = state.reduce(CarouselAction::Advance);
            seen.push(state.index);
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let state = Rc::new(CarouselState { index: 1, len: 3 });
        assert_eq!(state.clone().reduce(CarouselAction::GoTo(2)).index, 2);
        assert_eq!(state.reduce(CarouselAction::GoTo(9)).index, 1);
    }
}
