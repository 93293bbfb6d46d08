//! Resolution of raw input into showcase commands.

use crate::input::InputEvent;
use crate::showcase::ShowcaseCommand;
use crate::ui::PanelId;

/// Maps [`InputEvent`]s onto [`ShowcaseCommand`]s.
///
/// The mapping is static: the processor holds no state and never inspects
/// the interaction state machine. Whether a command is *honoured* is the
/// choreographer's decision alone, so a click on a stale button simply
/// produces a command that gets refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputProcessor;

impl InputProcessor {
    /// A fresh processor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve one event. Returns `None` for events with no command
    /// mapping, e.g. clicks on non-interactive panels.
    #[must_use]
    pub fn resolve(&self, event: InputEvent) -> Option<ShowcaseCommand> {
        match event {
            InputEvent::Wheel { delta } => Some(ShowcaseCommand::Wheel { delta }),
            InputEvent::Activate { panel } => match panel {
                PanelId::DiscoverCta => Some(ShowcaseCommand::ActivateDiscover),
                PanelId::HotspotButton(index) => Some(ShowcaseCommand::SelectHotspot { index }),
                PanelId::BackButton => Some(ShowcaseCommand::ActivateBack),
                PanelId::Title | PanelId::InfoText => None,
            },
        }
    }
}
