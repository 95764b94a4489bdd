/// Built-in editor operations the host performs on our behalf.
///
/// These are not reimplemented here; commands bound to them call
/// [`Buffer::exec`](crate::traits::Buffer::exec) with the operation and the
/// host looks it up by [`HostOp::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOp {
    GoLeft,
    GoRight,
    GoUp,
    GoDown,
    GoStart,
    GoEnd,
    IndentMore,
    IndentLess,
    NewlineAndIndent,
    SwapLineUp,
    SwapLineDown,
    DeleteLine,
    ToggleFold,
    FoldAll,
    UnfoldAll,
}

impl HostOp {
    pub const ALL: [HostOp; 15] = [
        HostOp::GoLeft,
        HostOp::GoRight,
        HostOp::GoUp,
        HostOp::GoDown,
        HostOp::GoStart,
        HostOp::GoEnd,
        HostOp::IndentMore,
        HostOp::IndentLess,
        HostOp::NewlineAndIndent,
        HostOp::SwapLineUp,
        HostOp::SwapLineDown,
        HostOp::DeleteLine,
        HostOp::ToggleFold,
        HostOp::FoldAll,
        HostOp::UnfoldAll,
    ];

    /// The symbolic name the host's command executor knows this operation by.
    pub const fn name(self) -> &'static str {
        match self {
            HostOp::GoLeft => "goLeft",
            HostOp::GoRight => "goRight",
            HostOp::GoUp => "goUp",
            HostOp::GoDown => "goDown",
            HostOp::GoStart => "goStart",
            HostOp::GoEnd => "goEnd",
            HostOp::IndentMore => "indentMore",
            HostOp::IndentLess => "indentLess",
            HostOp::NewlineAndIndent => "newlineAndIndent",
            HostOp::SwapLineUp => "swapLineUp",
            HostOp::SwapLineDown => "swapLineDown",
            HostOp::DeleteLine => "deleteLine",
            HostOp::ToggleFold => "toggleFold",
            HostOp::FoldAll => "foldAll",
            HostOp::UnfoldAll => "unfoldAll",
        }
    }

    pub fn from_name(name: &str) -> Option<HostOp> {
        HostOp::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl std::fmt::Display for HostOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
