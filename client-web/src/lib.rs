#![recursion_limit="512"]


// Use `wee_alloc` as the global allocator.
//#[global_allocator]
//static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

use yew::prelude::*;
use yew_router::prelude::*;

pub mod clipboard;
pub mod edit;
pub mod entry;
pub mod registration;
mod widgets;


#[derive(Switch, Debug, Clone)]
pub enum AppRoute {
    #[to = "/register"]
    Register,
    #[to = "/entry"]
    Entry,
    #[to = "/"]
    Edit,
}

type AppRouter = Router<AppRoute>;
type AppAnchor = RouterAnchor<AppRoute>;


/// Every page keeps its own field state; nothing is shared between pages.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();
    fn create(_: Self::Properties, _link: ComponentLink<Self>) -> Self {
        Self
    }

    fn update(&mut self, _msg: Self::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        html!{
            <>
                <nav>
                    <AppAnchor route=AppRoute::Edit>{ "Generate" }</AppAnchor>
                    {" | "}
                    <AppAnchor route=AppRoute::Entry>{ "Entry" }</AppAnchor>
                    {" | "}
                    <AppAnchor route=AppRoute::Register>{ "Sign Up" }</AppAnchor>
                </nav>
                <AppRouter
                    render = Router::render(|switch: AppRoute| {
                        match switch {
                            AppRoute::Register => html!{<registration::Model/>},
                            AppRoute::Entry => html!{<entry::Model/>},
                            AppRoute::Edit => html!{<edit::Model/>},
                        }
                    })
                />
            </>
        }
    }
}
