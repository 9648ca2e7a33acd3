use yew_router::Routable;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Page {
    #[at("/login")]
    Login,
    #[at("/users")]
    Users,
    #[at("/")]
    Redirect,
    #[not_found]
    #[at("/404")]
    NotFound,
}
