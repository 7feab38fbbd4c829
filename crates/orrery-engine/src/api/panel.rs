use serde::Serialize;

/// One labelled line in the info panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub label: String,
    pub value: String,
}

/// What the info panel shows: a heading, labelled rows and an optional note.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PanelContent {
    pub heading: String,
    pub rows: Vec<PanelRow>,
    pub note: Option<String>,
}

impl PanelContent {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Default::default()
        }
    }

    pub fn row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push(PanelRow {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Info panel state. The revision lets the DOM side skip re-rendering unchanged content.
#[derive(Debug, Clone, Default)]
pub struct InfoPanel {
    content: PanelContent,
    revision: u32,
}

impl InfoPanel {
    pub fn show(&mut self, content: PanelContent) {
        if content != self.content {
            self.content = content;
            self.revision = self.revision.wrapping_add(1);
        }
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_bumps_revision_only_on_change() {
        let mut panel = InfoPanel::default();
        panel.show(PanelContent::new("Earth").row("Mass", "1.00 Earth masses"));
        assert_eq!(panel.revision(), 1);
        panel.show(PanelContent::new("Earth").row("Mass", "1.00 Earth masses"));
        assert_eq!(panel.revision(), 1);
        panel.show(PanelContent::new("Mars"));
        assert_eq!(panel.revision(), 2);
    }

    #[test]
    fn json_shape() {
        let mut panel = InfoPanel::default();
        panel.show(PanelContent::new("Sun").row("Radius", "6").note("This is a star."));
        let json = panel.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"heading":"Sun","rows":[{"label":"Radius","value":"6"}],"note":"This is a star."}"#
        );
    }
}
