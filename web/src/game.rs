use crate::board::{BoardView, CardView};
use crate::storage::LocalScoreStore;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use pairflip_core as game;
use pairflip_core::{Coord2, Difficulty, Visibility};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardClicked(Coord2),
    Tick(game::Generation),
    Deferred(game::Deferred),
    StartGame,
    SelectDifficulty(Difficulty),
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    card: CardView,
    callback: Callback<Coord2>,
}

#[function_component(CardCell)]
fn card_component(props: &CardProps) -> Html {
    let CardProps { card, callback } = props.clone();

    let class = classes!(
        "memory-card",
        match card.visibility {
            Visibility::Hidden => classes!(),
            Visibility::Revealed => classes!("flipped"),
            Visibility::Matched => classes!("flipped", "matched"),
        }
    );
    let face = if card.visibility.is_face_up() {
        card.glyph
    } else {
        "?"
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} clicked", card.pos);
        callback.emit(card.pos);
    });

    html! {
        <td {class} {onclick}>{face}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Deal from a fixed seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    controller: game::GameController<BoardView, LocalScoreStore>,
    seed: Option<u64>,
    ticker: Option<Interval>,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        match self.seed {
            // the generation about to be dealt, so every restart gets a fresh but reproducible deck
            Some(seed) => seed.wrapping_add(u64::from(self.controller.generation().next().value())),
            None => js_random_seed(),
        }
    }

    fn create_ticker(ctx: &Context<Self>, generation: game::Generation) -> Interval {
        let link = ctx.link().clone();
        let millis = game::TICK_INTERVAL.as_millis() as u32;
        Interval::new(millis, move || link.send_message(Msg::Tick(generation)))
    }

    fn schedule(ctx: &Context<Self>, deferred: game::Deferred) {
        let link = ctx.link().clone();
        let millis = deferred.delay().as_millis() as u32;
        log::trace!("scheduling {:?} in {}ms", deferred, millis);
        Timeout::new(millis, move || link.send_message(Msg::Deferred(deferred))).forget();
    }

    fn start_game(&mut self, ctx: &Context<Self>) {
        let seed = self.next_seed();
        let generation = self.controller.start_game(seed);
        self.ticker = Some(Self::create_ticker(ctx, generation));
    }

    fn is_won(&self) -> bool {
        self.controller
            .session()
            .is_some_and(|session| session.engine.is_won())
    }

    fn is_locked(&self) -> bool {
        self.controller
            .session()
            .is_some_and(|session| session.engine.is_locked())
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let difficulty: Difficulty = LocalOrDefault::local_or_default();
        let mut controller =
            game::GameController::new(BoardView::default(), LocalScoreStore).with_difficulty(difficulty);
        controller.load_best_scores();

        Self {
            controller,
            seed: ctx.props().seed,
            ticker: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CardClicked(coords) => {
                let selection = self.controller.on_card_selected(coords);
                if let Some(deferred) = selection.deferred {
                    Self::schedule(ctx, deferred);
                }
                if self.is_won() && self.ticker.take().is_some() {
                    log::debug!("clock stopped");
                }
                selection.has_update()
            }
            Tick(generation) => self.controller.on_tick(generation),
            Deferred(deferred) => self.controller.fire(deferred),
            StartGame => {
                log::debug!("new game requested");
                self.start_game(ctx);
                true
            }
            SelectDifficulty(difficulty) => {
                log::debug!("difficulty: {}", difficulty.key());
                difficulty.local_save();
                let seed = self.next_seed();
                if let Some(generation) = self.controller.select_difficulty(difficulty, seed) {
                    self.ticker = Some(Self::create_ticker(ctx, generation));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = self.controller.renderer();
        let current = self.controller.difficulty();
        let start_label = if self.controller.is_started() {
            "Restart"
        } else {
            "Start"
        };

        let cb_start = ctx.link().callback(|_: MouseEvent| StartGame);
        let cb_difficulty = ctx.link().batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Difficulty::from_key(&select.value()).map(SelectDifficulty)
        });
        let cb_card = ctx.link().callback(CardClicked);

        html! {
            <div class="pairflip">
                <nav>
                    <select onchange={cb_difficulty}>
                        {
                            for Difficulty::ALL.into_iter().map(|difficulty| html! {
                                <option value={difficulty.key()} selected={difficulty == current}>
                                    {difficulty.label()}
                                </option>
                            })
                        }
                    </select>
                    <button onclick={cb_start}>{start_label}</button>
                </nav>
                <dl>
                    <dt>{"Moves"}</dt><dd>{board.moves.to_string()}</dd>
                    <dt>{"Matches"}</dt><dd>{board.matches.to_string()}</dd>
                    <dt>{"Time"}</dt><dd>{board.timer.clone()}</dd>
                    <dt>{"Best (easy)"}</dt><dd>{board.best_label(Difficulty::Easy)}</dd>
                    <dt>{"Best (hard)"}</dt><dd>{board.best_label(Difficulty::Hard)}</dd>
                </dl>
                <table class={classes!("board", self.is_locked().then_some("locked"))}>
                    {
                        for board.rows().map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|&card| html! {
                                        <CardCell {card} callback={cb_card.clone()}/>
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p class="win-message">{board.win_message.clone().unwrap_or_default()}</p>
            </div>
        }
    }
}
