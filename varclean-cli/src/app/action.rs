/// User actions available in the directory browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move selection up
    MoveUp,
    /// Move selection down
    MoveDown,
    /// Move selection up by a page
    PageUp,
    /// Move selection down by a page
    PageDown,
    /// Go to first item
    GoToFirst,
    /// Go to last item
    GoToLast,
    /// Enter the highlighted directory
    Open,
    /// Go to the parent directory
    GoParent,
    /// Use the directory currently shown
    Select,
    /// Close the browser without choosing
    Cancel,
    /// No action (for tick events)
    Tick,
}
