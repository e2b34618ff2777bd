#[derive(Clone, Eq, PartialEq)]
pub enum BufferMessage {
    Modification(TextModification),
    MoveCursor(usize, CursorDirection),
    ResetContent,
    SetContent(Vec<String>),
    ToggleHidden,
}

impl std::fmt::Debug for BufferMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferMessage::Modification(modification) => f
                .debug_tuple("Modification")
                .field(modification)
                .finish(),
            BufferMessage::MoveCursor(count, direction) => f
                .debug_tuple("MoveCursor")
                .field(count)
                .field(direction)
                .finish(),
            BufferMessage::ResetContent => f.debug_tuple("ResetContent").finish(),
            BufferMessage::SetContent(content) => f
                .debug_tuple("SetContent")
                .field(&format!("{} lines", content.len()))
                .finish(),
            BufferMessage::ToggleHidden => f.debug_tuple("ToggleHidden").finish(),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    DeleteCharOnCursor,
    Indent,
    Insert(char),
    InsertLineBreak,
    Outdent,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Bottom,
    Down,
    Left,
    LineEnd,
    LineStart,
    PageDown,
    PageUp,
    Right,
    Top,
    Up,
}
