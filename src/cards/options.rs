//! Per-call render configuration and interaction dispatch.

use std::rc::Rc;

use crate::cards::local::LikeToggle;
use crate::cards::node::ActionKind;
use crate::i18n::Dictionary;
use crate::model::EntityId;

/// Handler invoked when a card action fires.
pub type ActionCallback = Rc<dyn Fn(&EntityId)>;

/// Default wrap width for card body text, in display columns.
pub const DEFAULT_BODY_WIDTH: usize = 60;

/// Per-render configuration for the card renderer family.
///
/// Supplied fresh on every render call and never stored by a renderer. The
/// dictionary reference selects the language of every label the renderer
/// emits; callbacks are optional and absent ones fall back to local,
/// non-persistent behavior on dispatch.
#[derive(Clone)]
pub struct RenderOptions<'a> {
    /// Dictionary for the active language.
    pub dict: &'a Dictionary,
    /// Whether cards expose their actions row.
    pub show_actions: bool,
    /// Wrap width for body text, in display columns.
    pub body_width: usize,
    /// Like/appreciate handler.
    pub on_like: Option<ActionCallback>,
    /// Comment handler.
    pub on_comment: Option<ActionCallback>,
    /// Share handler.
    pub on_share: Option<ActionCallback>,
    /// Report handler.
    pub on_flag: Option<ActionCallback>,
    /// Download handler.
    pub on_download: Option<ActionCallback>,
}

impl<'a> RenderOptions<'a> {
    /// What: Options with actions hidden and no callbacks.
    #[must_use]
    pub const fn new(dict: &'a Dictionary) -> Self {
        Self {
            dict,
            show_actions: false,
            body_width: DEFAULT_BODY_WIDTH,
            on_like: None,
            on_comment: None,
            on_share: None,
            on_flag: None,
            on_download: None,
        }
    }

    /// What: Enable the actions row.
    #[must_use]
    pub const fn with_actions(mut self) -> Self {
        self.show_actions = true;
        self
    }

    /// What: Override the body wrap width.
    #[must_use]
    pub const fn with_body_width(mut self, width: usize) -> Self {
        self.body_width = width;
        self
    }

    /// What: Invoke the handler for an action, or its local fallback.
    ///
    /// Inputs:
    /// - `kind`: Action being triggered
    /// - `id`: Identity of the entity the card renders
    /// - `local`: Fallback state owned by the rendered instance
    ///
    /// Details:
    /// - With a callback registered, the callback is invoked and local state
    ///   is untouched
    /// - Without one, `Like` flips the instance-local toggle; every other
    ///   action is a logged no-op
    pub fn dispatch(&self, kind: ActionKind, id: &EntityId, local: &LikeToggle) {
        let callback = match kind {
            ActionKind::Like => self.on_like.as_ref(),
            ActionKind::Comment => self.on_comment.as_ref(),
            ActionKind::Share => self.on_share.as_ref(),
            ActionKind::Flag => self.on_flag.as_ref(),
            ActionKind::Download => self.on_download.as_ref(),
            // Connect has no callback slot in this slice; always local.
            ActionKind::Connect => None,
        };
        if let Some(cb) = callback {
            cb(id);
            return;
        }
        if kind == ActionKind::Like {
            local.toggle();
            tracing::debug!("No like handler registered; toggled local state for '{}'", id);
        } else {
            tracing::debug!("No handler registered for {:?} on '{}'; ignoring", kind, id);
        }
    }
}
