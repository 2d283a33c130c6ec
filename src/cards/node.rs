//! Presentation structure produced by the card renderers.
//!
//! A [`CardNode`] is a display-layer-agnostic description of one rendered
//! card. The `ui` module turns it into themed `ratatui` lines; tests compare
//! nodes structurally.

/// Which entity variant a card was rendered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    /// Maker profile.
    Profile,
    /// Offered service.
    Service,
    /// Downloadable resource.
    Resource,
    /// Community post.
    Post,
    /// Platform event.
    Event,
}

/// Avatar slot of a card header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarNode {
    /// Reference to an avatar image supplied by the record.
    Image(String),
    /// Fallback initial derived from the display name.
    Initial(char),
}

/// Semantic tone of a badge, mapped to theme colors by the display layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Neutral/informational.
    Info,
    /// Positive state (ongoing event, free service).
    Positive,
    /// Attention state (pending approval).
    Warning,
    /// Low-emphasis state (past event).
    Muted,
}

/// A short status label shown next to the card title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    /// Localized badge text.
    pub label: String,
    /// Semantic tone for styling.
    pub tone: Tone,
}

/// Tag list clipped for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStrip {
    /// Tags shown on the card, in record order.
    pub visible: Vec<String>,
    /// How many further tags were clipped ("+N more" when non-zero).
    pub more: usize,
}

/// Interactive capability a card can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Like/appreciate.
    Like,
    /// Comment.
    Comment,
    /// Share.
    Share,
    /// Report to moderation.
    Flag,
    /// Download a resource.
    Download,
    /// Connect with a maker.
    Connect,
}

/// One entry of a card's actions row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionNode {
    /// Capability this action triggers.
    pub kind: ActionKind,
    /// Localized label (state-dependent, e.g. pending approval).
    pub label: String,
    /// Whether the action may be invoked.
    pub enabled: bool,
}

/// The complete presentational structure of one card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardNode {
    /// Source variant.
    pub kind: CardKind,
    /// Avatar slot; only profiles populate it.
    pub avatar: Option<AvatarNode>,
    /// Primary line (name, title or author).
    pub title: String,
    /// Secondary line (craft, price), if any.
    pub subtitle: Option<String>,
    /// Status badges.
    pub badges: Vec<Badge>,
    /// Description/body text, clipped to at most two display lines.
    pub body: Vec<String>,
    /// Localized label/value metadata rows.
    pub meta: Vec<(String, String)>,
    /// Clipped tag list.
    pub tags: TagStrip,
    /// Actions row; empty unless render options enable actions.
    pub actions: Vec<ActionNode>,
}

impl CardNode {
    /// What: Start an empty node for one variant.
    ///
    /// Renderers fill the remaining slots; absent optional record fields
    /// simply leave their slot at the default.
    #[must_use]
    pub fn new(kind: CardKind, title: String) -> Self {
        Self {
            kind,
            avatar: None,
            title,
            subtitle: None,
            badges: Vec::new(),
            body: Vec::new(),
            meta: Vec::new(),
            tags: TagStrip::default(),
            actions: Vec::new(),
        }
    }
}
