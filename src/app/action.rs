#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// A phase boundary was crossed; ring the terminal bell.
    Bell,
    Quit,
}
