use common::Configuration;
use common::peg::Peg;
use yew::prelude::*;

const PX_PEG_DISTANCE: i32 = 150;
const PX_DISC_HEIGHT: i32 = 20;
const PX_DISC_WIDTH_UNIT: i32 = 20;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub configuration: Configuration,
}

/// Render the three pegs with their discs, largest at the bottom.
#[function_component]
pub fn Board(BoardProps { configuration }: &BoardProps) -> Html {
    html! {
        <div class="board">
            { for Peg::ALL.into_iter().map(|peg| {
                let left = PX_PEG_DISTANCE * peg.index() as i32 + PX_PEG_DISTANCE / 2;
                html! {
                    <div class="peg" key={peg.index()} style={format!("left: {left}px;")}>
                        { for configuration.peg(peg).iter().enumerate().map(|(level, &disc)| {
                            let width = PX_DISC_WIDTH_UNIT * disc as i32;
                            let bottom = PX_DISC_HEIGHT * level as i32;
                            html! {
                                <div
                                    class="disc"
                                    key={disc.to_string()}
                                    style={format!(
                                        "width: {width}px; bottom: {bottom}px; margin-left: {}px;",
                                        -width / 2
                                    )}
                                />
                            }
                        }) }
                    </div>
                }
            }) }
        </div>
    }
}
