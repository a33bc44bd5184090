/// Side effects the event loop performs after dispatch, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Save,
    Quit,
}
