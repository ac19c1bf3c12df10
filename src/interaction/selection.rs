use crate::content::Project;

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    Overlay,
    Content,
    CloseButton,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    hovered: Option<u32>,
    // owned copy so the modal never changes under the reader
    opened: Option<Project>,
}

impl SelectionState {
    pub fn hover(&mut self, id: u32) {
        self.hovered = Some(id);
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    pub fn is_hovered(&self, id: u32) -> bool {
        self.hovered == Some(id)
    }

    pub fn open(&mut self, project: &Project) {
        log::debug!("opening project {}", project.id);
        self.opened = Some(project.clone());
    }

    pub fn close(&mut self) {
        self.opened = None;
    }

    pub fn opened(&self) -> Option<&Project> {
        self.opened.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.opened.is_some()
    }

    /// Returns true when the click dismissed the modal.
    pub fn click_modal(&mut self, target: ModalTarget) -> bool {
        match target {
            ModalTarget::Content => false,
            ModalTarget::Overlay | ModalTarget::CloseButton => {
                let was_open = self.is_open();
                self.close();
                was_open
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;

    #[test]
    fn test_hover_replaces_and_clears() {
        let mut selection = SelectionState::default();
        selection.hover(2);
        assert_eq!(selection.hovered(), Some(2));
        assert!(selection.is_hovered(2));

        selection.hover(3);
        assert_eq!(selection.hovered(), Some(3));
        assert!(!selection.is_hovered(2));

        selection.clear_hover();
        assert_eq!(selection.hovered(), None);
        assert!(!selection.is_hovered(3));
    }

    #[test]
    fn test_content_click_keeps_modal() {
        let project = Portfolio::bundled().project(1).expect("project 1 should exist");
        let mut selection = SelectionState::default();
        selection.open(project);
        assert!(selection.is_open());

        assert!(!selection.click_modal(ModalTarget::Content));
        assert_eq!(selection.opened().map(|p| p.id), Some(1));

        assert!(selection.click_modal(ModalTarget::Overlay));
        assert!(selection.opened().is_none());

        // a second dismissal has nothing to close
        assert!(!selection.click_modal(ModalTarget::CloseButton));
    }

    #[test]
    fn test_opened_is_a_snapshot() {
        let mut project = Portfolio::bundled().project(3).cloned().expect("project 3 should exist");
        let mut selection = SelectionState::default();
        selection.open(&project);

        project.title = "Renamed".to_string();
        assert_eq!(selection.opened().map(|p| p.title.as_str()), Some("Kinetic"));
    }

    #[test]
    fn test_hover_independent_of_modal() {
        let portfolio = Portfolio::bundled();
        let mut selection = SelectionState::default();
        selection.hover(4);
        selection.open(&portfolio.projects[0]);
        assert_eq!(selection.hovered(), Some(4));

        selection.close();
        assert_eq!(selection.hovered(), Some(4));
    }
}
