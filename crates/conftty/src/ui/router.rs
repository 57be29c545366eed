use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::Screen;
use crate::ui::Page;
use crate::ui::pages::session_detail::SessionDetailPage;
use crate::ui::pages::speaker_list::SpeakerListPage;
use crate::ui::state::feedback::FeedbackPanel;
use crate::ui::state::help_action::{self, HelpAction};

/// Renders the visible screen into `area` and returns its footer shortcuts.
pub(crate) fn route_frame(f: &mut Frame, area: Rect, screen: &mut Screen) -> Vec<HelpAction> {
    match screen {
        Screen::SessionDetail(presenter) => {
            let tree = presenter.tree();
            SessionDetailPage::new(&tree).render(f, area);

            help_action::session_detail_actions(
                presenter.session().is_finished,
                presenter
                    .feedback_panel()
                    .is_some_and(FeedbackPanel::is_open),
                !tree.photos.is_empty(),
            )
        }
        Screen::Speakers(presenter) => {
            let tree = presenter.tree();
            let has_talks = presenter
                .selected_speaker()
                .and_then(|index| tree.entries.get(index))
                .is_some_and(|entry| !entry.talks.is_empty());
            SpeakerListPage::new(&tree, presenter.list_state_mut()).render(f, area);

            help_action::speaker_list_actions(has_talks)
        }
    }
}
