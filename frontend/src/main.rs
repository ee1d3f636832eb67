mod components;

use common::replay::Replay;
use common::{Configuration, Disc, SolveResult, solve};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::components::Board;

const NR_DISCS: Disc = 4;
const STEP_DELAY_MS: u32 = 1000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Animating,
    Solved,
    NoSolution,
}

#[function_component]
fn App() -> Html {
    let configuration = use_state(|| Configuration::start(NR_DISCS));
    let status = use_state(|| Status::Idle);

    let solve_click = {
        let configuration = configuration.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            if *status == Status::Animating {
                return;
            }

            let configuration = configuration.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let start = Configuration::start(NR_DISCS);
                let goal = Configuration::goal(NR_DISCS);

                let plan = match solve(&start, &goal) {
                    SolveResult::Solved(plan) => plan,
                    SolveResult::Unsolvable => {
                        status.set(Status::NoSolution);
                        return;
                    }
                };
                log::info!("replaying a {}-move solution", plan.len());

                status.set(Status::Animating);
                configuration.set(start.clone());

                let mut replay = Replay::new(start, plan);
                loop {
                    TimeoutFuture::new(STEP_DELAY_MS).await;
                    match replay.step() {
                        Ok(Some(mv)) => {
                            log::debug!("applied {mv}");
                            configuration.set(replay.current().clone());
                        }
                        Ok(None) => break,
                        Err(err) => {
                            log::error!("replay halted on an illegal move: {err}");
                            status.set(Status::Idle);
                            return;
                        }
                    }
                }
                status.set(Status::Solved);
            });
        })
    };

    let status_line = match *status {
        Status::Idle => html! {},
        Status::Animating => html! { <p class="status">{"solving..."}</p> },
        Status::Solved => html! {
            <p class="status solved">{"the towers of hanoi puzzle has been solved!"}</p>
        },
        Status::NoSolution => html! {
            <p class="status failed">{"no solution found"}</p>
        },
    };

    html! {
        <div class="scene">
            <button onclick={solve_click} disabled={*status == Status::Animating}>
                {"solve"}
            </button>
            <Board configuration={Configuration::clone(&configuration)} />
            { status_line }
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
